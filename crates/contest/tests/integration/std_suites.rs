// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use contest::{
    samples::{Collider, Unhashable},
    CollectionSize, Feature, FromIteratorGenerator, MinimalCollection,
    SampleElements, SuiteBuilder,
};
use rustc_hash::FxBuildHasher;
use std::collections::{
    BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, VecDeque,
};

#[test]
fn vec_of_strings() {
    let report = SuiteBuilder::list()
        .named("Vec<String>")
        .using(FromIteratorGenerator::<Vec<String>, _>::new(
            SampleElements::strings(),
        ))
        .with_features([Feature::ListGeneralPurpose, Feature::KnownOrder])
        .with_sizes([CollectionSize::Any])
        .build()
        .unwrap()
        .run();
    report.assert_success();
    // Every list case applies to a fully mutable list at some size.
    assert!(report.total() > 60, "{report}");
}

#[test]
fn vec_of_unhashables() {
    SuiteBuilder::list()
        .named("Vec<Unhashable>")
        .using(FromIteratorGenerator::<Vec<Unhashable>, _>::new(
            SampleElements::unhashables(),
        ))
        .with_features([Feature::ListGeneralPurpose])
        .with_sizes([CollectionSize::Any])
        .build()
        .unwrap()
        .run()
        .assert_success();
}

#[test]
fn vec_deque() {
    SuiteBuilder::list()
        .named("VecDeque<char>")
        .using(FromIteratorGenerator::<VecDeque<char>, _>::new(
            SampleElements::chars(),
        ))
        .with_features([Feature::ListGeneralPurpose, Feature::KnownOrder])
        .with_sizes([CollectionSize::Any])
        .build()
        .unwrap()
        .run()
        .assert_success();
}

#[test]
fn binary_heap_grows_only() {
    let suite = SuiteBuilder::collection()
        .named("BinaryHeap<i32>")
        .using(FromIteratorGenerator::<BinaryHeap<i32>, _>::new(
            SampleElements::ints(),
        ))
        .with_features([Feature::SupportsAdd])
        .with_sizes([CollectionSize::Any])
        .build()
        .unwrap();

    let plan = suite.plan();
    assert!(plan.contains(
        CollectionSize::One,
        "collection_remove::unsupported_present"
    ));
    assert!(!plan.contains(CollectionSize::One, "collection_remove::present"));

    suite.run().assert_success();
}

#[test]
fn btree_set() {
    SuiteBuilder::set()
        .named("BTreeSet<String>")
        .using(
            FromIteratorGenerator::<BTreeSet<String>, _>::new(
                SampleElements::strings(),
            )
            .sorted(),
        )
        .with_features([Feature::GeneralPurpose, Feature::KnownOrder])
        .with_sizes([CollectionSize::Any])
        .build()
        .unwrap()
        .run()
        .assert_success();
}

#[test]
fn btree_set_in_reverse_order() {
    // Samples in descending order, so that sorting actually reorders them.
    let samples = SampleElements::new(50, 40, 30, 20, 10);
    SuiteBuilder::set()
        .named("BTreeSet<i32> (reversed samples)")
        .using(FromIteratorGenerator::<BTreeSet<i32>, _>::new(samples).sorted())
        .with_features([Feature::GeneralPurpose, Feature::KnownOrder])
        .with_sizes([CollectionSize::Any])
        .build()
        .unwrap()
        .run()
        .assert_success();
}

#[test]
fn hash_set_with_fx_hasher() {
    SuiteBuilder::set()
        .named("HashSet<char, FxBuildHasher>")
        .using(FromIteratorGenerator::<HashSet<char, FxBuildHasher>, _>::new(
            SampleElements::chars(),
        ))
        .with_features([Feature::GeneralPurpose])
        .with_sizes([CollectionSize::Any])
        .build()
        .unwrap()
        .run()
        .assert_success();
}

#[test]
fn hash_set_with_colliding_hashes() {
    SuiteBuilder::set()
        .named("HashSet<Collider>")
        .using(FromIteratorGenerator::<HashSet<Collider>, _>::new(
            SampleElements::colliders(),
        ))
        .with_features([Feature::GeneralPurpose])
        .with_sizes([CollectionSize::Any])
        .build()
        .unwrap()
        .run()
        .assert_success();
}

#[test]
fn btree_map() {
    let samples = SampleElements::entries(
        SampleElements::strings(),
        SampleElements::ints(),
    );
    SuiteBuilder::map()
        .named("BTreeMap<String, i32>")
        .using(
            FromIteratorGenerator::<BTreeMap<String, i32>, _>::new(samples)
                .sorted(),
        )
        .with_features([Feature::GeneralPurpose, Feature::KnownOrder])
        .with_sizes([CollectionSize::Any])
        .build()
        .unwrap()
        .run()
        .assert_success();
}

#[test]
fn hash_map_with_fx_hasher() {
    let samples = SampleElements::entries(
        SampleElements::chars(),
        SampleElements::ints(),
    );
    let report = SuiteBuilder::map()
        .named("HashMap<char, i32, FxBuildHasher>")
        .using(FromIteratorGenerator::<
            HashMap<char, i32, FxBuildHasher>,
            _,
        >::new(samples))
        .with_features([Feature::GeneralPurpose])
        .with_sizes([CollectionSize::Any])
        .build()
        .unwrap()
        .run();
    report.assert_success();
    assert_eq!(
        report.outcome(CollectionSize::Several, "map_put::existing_key"),
        Some(&contest::CaseOutcome::Passed)
    );
}

#[test]
fn minimal_collection_is_read_only() {
    let report = SuiteBuilder::collection()
        .named("MinimalCollection<i32>")
        .using(FromIteratorGenerator::<MinimalCollection<i32>, _>::new(
            SampleElements::ints(),
        ))
        .with_sizes([CollectionSize::Any])
        .build()
        .unwrap()
        .run();
    report.assert_success();
    assert!(
        report
            .results()
            .iter()
            .any(|r| r.full_name()
                == "collection_add::unsupported_not_present"),
        "{report}"
    );
}
