// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use contest::{
    errors::UnsupportedOperation, CollectionSize, Feature,
    FromIteratorGenerator, SampleElements, SuiteBuilder, TestContainer,
};
use std::collections::BTreeSet;

fn optional_ints() -> SampleElements<Option<i32>> {
    SampleElements::ints().map(Some)
}

#[test]
fn vec_allows_nulls() {
    let report = SuiteBuilder::list()
        .named("Vec<Option<i32>>")
        .using(FromIteratorGenerator::<Vec<Option<i32>>, _>::new(
            optional_ints(),
        ))
        .with_features([
            Feature::ListGeneralPurpose,
            Feature::AllowsNullValues,
            Feature::KnownOrder,
        ])
        .with_sizes([CollectionSize::Any])
        .with_null_testers()
        .build()
        .unwrap()
        .run();
    report.assert_success();
    assert!(report
        .outcome(CollectionSize::Several, "null::contains_present")
        .is_some());
}

#[test]
fn btree_set_allows_nulls() {
    SuiteBuilder::set()
        .named("BTreeSet<Option<char>>")
        .using(
            FromIteratorGenerator::<BTreeSet<Option<char>>, _>::new(
                SampleElements::chars().map(Some),
            )
            .sorted(),
        )
        .with_features([
            Feature::GeneralPurpose,
            Feature::AllowsNullValues,
            Feature::KnownOrder,
        ])
        .with_sizes([CollectionSize::Any])
        .with_null_testers()
        .build()
        .unwrap()
        .run()
        .assert_success();
}

/// A list that refuses to store `None`.
#[derive(Clone, Debug, Default)]
struct NonNullList {
    elements: Vec<Option<i32>>,
}

impl FromIterator<Option<i32>> for NonNullList {
    fn from_iter<I: IntoIterator<Item = Option<i32>>>(iter: I) -> Self {
        Self { elements: iter.into_iter().flatten().map(Some).collect() }
    }
}

impl TestContainer for NonNullList {
    type Element = Option<i32>;

    fn len(&self) -> usize {
        self.elements.len()
    }

    fn contents(&self) -> Vec<Option<i32>> {
        self.elements.clone()
    }

    fn add(
        &mut self,
        element: Option<i32>,
    ) -> Result<bool, UnsupportedOperation> {
        if element.is_none() {
            return Ok(false);
        }
        self.elements.push(element);
        Ok(true)
    }
}

#[test]
fn rejecting_nulls() {
    let suite = SuiteBuilder::collection()
        .named("NonNullList")
        .using(FromIteratorGenerator::<NonNullList, _>::new(optional_ints()))
        .with_features([Feature::SupportsAdd, Feature::AllowsNullQueries])
        .with_sizes([CollectionSize::Any])
        .with_null_testers()
        .build()
        .unwrap();

    let plan = suite.plan();
    assert!(plan.contains(CollectionSize::Zero, "null::add_unsupported"));
    assert!(plan.contains(CollectionSize::One, "null::contains_not_present"));
    assert!(!plan.contains(CollectionSize::One, "null::contains_present"));

    suite.run().assert_success();
}
