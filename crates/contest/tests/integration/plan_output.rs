// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use contest::{
    CollectionSize, Feature, FromIteratorGenerator, SampleElements,
    SuiteBuilder,
};
use expectorate::assert_contents;
use std::collections::BTreeSet;

#[test]
fn btree_set_plan() {
    let suite = SuiteBuilder::set()
        .named("BTreeSet<char>")
        .using(
            FromIteratorGenerator::<BTreeSet<char>, _>::new(
                SampleElements::chars(),
            )
            .sorted(),
        )
        .with_features([Feature::GeneralPurpose, Feature::KnownOrder])
        .with_sizes([CollectionSize::Any])
        .build()
        .unwrap();

    let plan = suite.plan();
    assert_eq!(plan.len(), 43);
    assert_contents("tests/output/btree_set_plan.txt", &plan.to_string());

    // The plan matches what actually runs.
    let report = suite.run();
    assert_eq!(report.total(), plan.len());
    report.assert_success();
}
