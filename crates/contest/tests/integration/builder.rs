// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use contest::{
    errors::{CheckResult, RequirementConflict, SuiteBuildError},
    CollectionSize, ContainerTester, Feature, FromIteratorGenerator,
    SampleElements, SuiteBuilder, TesterCase,
};

type VecGenerator = FromIteratorGenerator<Vec<char>, char>;

fn generator() -> VecGenerator {
    VecGenerator::new(SampleElements::chars())
}

fn noop(_: &mut ContainerTester<'_, VecGenerator>) -> CheckResult {
    Ok(())
}

#[test]
fn missing_configuration() {
    let error = SuiteBuilder::<VecGenerator>::list()
        .using(generator())
        .with_sizes([CollectionSize::Any])
        .build()
        .unwrap_err();
    assert_eq!(error, SuiteBuildError::MissingName);

    let error = SuiteBuilder::<VecGenerator>::list()
        .named("no generator")
        .with_sizes([CollectionSize::Any])
        .build()
        .unwrap_err();
    assert_eq!(error, SuiteBuildError::MissingGenerator);

    let error = SuiteBuilder::list()
        .named("no sizes")
        .using(generator())
        .build()
        .unwrap_err();
    assert_eq!(error, SuiteBuildError::MissingSizes);
    assert_eq!(
        error.to_string(),
        "call with_sizes() before building the suite"
    );
}

#[test]
fn conflicting_case_is_rejected() {
    let case = TesterCase::new("custom", "impossible", noop)
        .requires(Feature::ListGeneralPurpose)
        .requires_absent(Feature::SupportsAdd);
    let error = SuiteBuilder::list()
        .named("conflicting")
        .using(generator())
        .with_sizes([CollectionSize::Any])
        .with_testers([case])
        .build()
        .unwrap_err();

    let SuiteBuildError::Conflicting(conflict) = &error else {
        panic!("expected a conflict, got {error:?}");
    };
    assert_eq!(conflict.case, "custom::impossible");
    assert_eq!(
        conflict.conflict,
        RequirementConflict::Feature(Feature::SupportsAdd)
    );
    assert!(std::error::Error::source(&error).is_some());
}

#[test]
fn sizes_restrict_the_plan() {
    let suite = SuiteBuilder::list()
        .named("only zero")
        .using(generator())
        .with_features([Feature::ListGeneralPurpose])
        .with_sizes([CollectionSize::Zero])
        .build()
        .unwrap();
    assert_eq!(suite.sizes(), [CollectionSize::Zero]);

    let plan = suite.plan();
    assert!(!plan.is_empty());
    assert!(plan.cases().iter().all(|case| case.size == CollectionSize::Zero));
    assert!(plan.contains(CollectionSize::Zero, "collection_is_empty::empty"));
    assert!(!plan.contains(CollectionSize::Zero, "collection_remove::present"));
}

#[test]
fn duplicate_sizes_run_once() {
    let suite = SuiteBuilder::list()
        .named("duplicates")
        .using(generator())
        .with_sizes([CollectionSize::One, CollectionSize::Any])
        .with_sizes([CollectionSize::One])
        .build()
        .unwrap();
    assert_eq!(suite.sizes(), CollectionSize::ALL_CONCRETE);
}

#[test]
fn implied_features_select_cases() {
    let suite = SuiteBuilder::list()
        .named("implied")
        .using(generator())
        .with_features([Feature::ListGeneralPurpose])
        .with_sizes([CollectionSize::Several])
        .build()
        .unwrap();
    assert!(suite.features().contains(Feature::SupportsAdd));
    assert!(suite.features().contains(Feature::SupportsSet));

    let plan = suite.plan();
    assert!(plan.contains(CollectionSize::Several, "list_set::middle"));
    assert!(plan.contains(
        CollectionSize::Several,
        "collection_add::supported_not_present"
    ));
    assert!(!plan.contains(CollectionSize::Several, "list_set::unsupported"));
}

#[test]
fn suppressing_by_group_and_name() {
    let build = |suppressed: &[&str]| {
        SuiteBuilder::list()
            .named("suppressed")
            .using(generator())
            .with_features([Feature::ListGeneralPurpose])
            .with_sizes([CollectionSize::Several])
            .suppressing(suppressed.iter().copied())
            .build()
            .unwrap()
            .plan()
    };

    let full = build(&[]);
    let without_group = build(&["list_add_at_index"]);
    let without_case = build(&["list_add_at_index::middle"]);

    assert!(
        full.contains(CollectionSize::Several, "list_add_at_index::middle")
    );
    assert_eq!(without_group.len(), full.len() - 3);
    assert!(!without_group
        .cases()
        .iter()
        .any(|case| case.group == "list_add_at_index"));
    assert_eq!(without_case.len(), full.len() - 1);
    assert!(without_case
        .contains(CollectionSize::Several, "list_add_at_index::front"));
    assert!(!without_case
        .contains(CollectionSize::Several, "list_add_at_index::middle"));
}

#[test]
fn custom_cases_run_in_registration_order() {
    fn first(tester: &mut ContainerTester<'_, VecGenerator>) -> CheckResult {
        contest::ensure!(tester.num_elements() < 3, "too many elements");
        Ok(())
    }

    let report = SuiteBuilder::new()
        .named("custom")
        .using(generator())
        .with_sizes([CollectionSize::Any])
        .with_testers([
            TesterCase::new("custom", "first", first),
            TesterCase::new("custom", "second", noop)
                .requires_size(CollectionSize::One),
        ])
        .build()
        .unwrap()
        .run();

    let names: Vec<_> = report
        .results()
        .iter()
        .map(|r| (r.size, r.name))
        .collect();
    assert_eq!(
        names,
        [
            (CollectionSize::Zero, "first"),
            (CollectionSize::One, "first"),
            (CollectionSize::One, "second"),
            (CollectionSize::Several, "first"),
        ]
    );
    assert_eq!(report.passed(), 3);
    assert_eq!(report.failed(), 1);
    assert_eq!(
        report.to_string(),
        "custom: 3/4 passed (1 failed)\n  \
         FAIL [Several] custom::first: too many elements\n"
    );
}

#[test]
fn user_cases_can_select_on_restricted_elements() {
    let build = |features: &[Feature]| {
        SuiteBuilder::collection()
            .named("restricted")
            .using(generator())
            .with_features(features.iter().copied())
            .with_sizes([CollectionSize::One])
            .with_testers([
                TesterCase::new("restricted", "only", noop)
                    .requires(Feature::RestrictsElements),
                TesterCase::new("restricted", "never", noop)
                    .requires_absent(Feature::RestrictsElements),
            ])
            .build()
            .unwrap()
            .plan()
    };

    let restricted = build(&[Feature::RestrictsElements]);
    assert!(restricted.contains(CollectionSize::One, "restricted::only"));
    assert!(!restricted.contains(CollectionSize::One, "restricted::never"));

    let unrestricted = build(&[]);
    assert!(!unrestricted.contains(CollectionSize::One, "restricted::only"));
    assert!(unrestricted.contains(CollectionSize::One, "restricted::never"));
}
