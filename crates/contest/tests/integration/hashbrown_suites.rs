// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use contest::{
    samples::Collider, CollectionSize, Feature, FromIteratorGenerator,
    SampleElements, SuiteBuilder,
};
use foldhash::fast::RandomState;
use hashbrown::{HashMap, HashSet};

#[test]
fn hashbrown_set() {
    SuiteBuilder::set()
        .named("hashbrown::HashSet<String>")
        .using(FromIteratorGenerator::<HashSet<String, RandomState>, _>::new(
            SampleElements::strings(),
        ))
        .with_features([Feature::GeneralPurpose])
        .with_sizes([CollectionSize::Any])
        .build()
        .unwrap()
        .run()
        .assert_success();
}

#[test]
fn hashbrown_set_with_colliding_hashes() {
    SuiteBuilder::set()
        .named("hashbrown::HashSet<Collider>")
        .using(FromIteratorGenerator::<HashSet<Collider, RandomState>, _>::new(
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
fn hashbrown_map() {
    let samples = SampleElements::entries(
        SampleElements::ints(),
        SampleElements::chars(),
    );
    SuiteBuilder::map()
        .named("hashbrown::HashMap<i32, char>")
        .using(FromIteratorGenerator::<HashMap<i32, char, RandomState>, _>::new(
            samples,
        ))
        .with_features([Feature::GeneralPurpose])
        .with_sizes([CollectionSize::Any])
        .build()
        .unwrap()
        .run()
        .assert_success();
}
