// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Suites run against arbitrary sample elements.

use contest::{
    CollectionSize, Feature, FromIteratorGenerator, SampleElements,
    SuiteBuilder,
};
use contest_test_utils::test_element::{
    test_entry_samples, test_samples, TestElement,
};
use proptest::prelude::*;
use rustc_hash::FxBuildHasher;
use std::collections::{BTreeMap, HashSet, VecDeque};
use test_strategy::proptest;

#[proptest(cases = 16)]
fn hash_set_conforms(
    #[strategy(test_samples())] samples: SampleElements<TestElement>,
) {
    let report = SuiteBuilder::set()
        .named("HashSet<TestElement, FxBuildHasher>")
        .using(FromIteratorGenerator::<
            HashSet<TestElement, FxBuildHasher>,
            _,
        >::new(samples))
        .with_features([Feature::GeneralPurpose])
        .with_sizes([CollectionSize::Any])
        .build()
        .unwrap()
        .run();
    prop_assert!(report.is_success(), "{report}");
}

#[proptest(cases = 16)]
fn btree_map_conforms(
    #[strategy(test_entry_samples())] samples: SampleElements<(
        TestElement,
        u32,
    )>,
) {
    let report = SuiteBuilder::map()
        .named("BTreeMap<TestElement, u32>")
        .using(
            FromIteratorGenerator::<BTreeMap<TestElement, u32>, _>::new(
                samples,
            )
            .sorted(),
        )
        .with_features([Feature::GeneralPurpose, Feature::KnownOrder])
        .with_sizes([CollectionSize::Any])
        .build()
        .unwrap()
        .run();
    prop_assert!(report.is_success(), "{report}");
}

#[proptest(cases = 16)]
fn vec_deque_conforms(
    #[strategy(test_samples())] samples: SampleElements<TestElement>,
) {
    let report = SuiteBuilder::list()
        .named("VecDeque<TestElement>")
        .using(FromIteratorGenerator::<VecDeque<TestElement>, _>::new(samples))
        .with_features([Feature::ListGeneralPurpose, Feature::KnownOrder])
        .with_sizes([CollectionSize::Any])
        .build()
        .unwrap()
        .run();
    prop_assert!(report.is_success(), "{report}");
}
