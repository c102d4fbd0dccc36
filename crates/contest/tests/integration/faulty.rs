// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use contest::{
    errors::AssertionFailure, CaseOutcome, CollectionSize, ConformanceReport,
    ContainerTester, Feature, OneSizeTestContainerGenerator, SampleElements,
    SuiteBuilder, TestContainer,
};
use contest_test_utils::faulty::{Fault, FaultyGenerator};
use test_strategy::proptest;

fn run_set_suite(fault: Option<Fault>) -> ConformanceReport {
    SuiteBuilder::set()
        .named(format!("FaultySet ({fault:?})"))
        .using(FaultyGenerator::new(SampleElements::chars(), fault))
        .with_features([Feature::GeneralPurpose])
        .with_sizes([CollectionSize::Any])
        .build()
        .unwrap()
        .run()
}

/// Returns a case that is expected to catch `fault`.
fn catching_case(fault: Fault) -> (CollectionSize, &'static str) {
    match fault {
        Fault::AddDropsElement => {
            (CollectionSize::One, "collection_add::supported_not_present")
        }
        Fault::AddAllowsDuplicates => {
            (CollectionSize::One, "set_add::supported_present")
        }
        Fault::RemoveIgnored => {
            (CollectionSize::One, "collection_remove::present")
        }
        Fault::ClearPanics => {
            (CollectionSize::One, "collection_clear::supported")
        }
        Fault::LenOffByOne => (CollectionSize::Zero, "collection_size::len"),
        Fault::CreationKeepsDuplicates => {
            (CollectionSize::Several, "set_creation::with_duplicates")
        }
        Fault::ContainsAlwaysFalse => {
            (CollectionSize::One, "collection_contains::present")
        }
    }
}

#[test]
fn correct_set_passes() {
    run_set_suite(None).assert_success();
}

#[test]
fn each_fault_is_caught_by_its_case() {
    for fault in Fault::ALL {
        let report = run_set_suite(Some(fault));
        let (size, name) = catching_case(fault);
        let outcome = report
            .outcome(size, name)
            .unwrap_or_else(|| panic!("{name} did not run at {size:?}"));
        assert!(!outcome.is_passed(), "{fault:?} not caught by {name}");
    }
}

#[proptest(cases = 16)]
fn any_fault_fails_the_suite(fault: Fault) {
    let report = run_set_suite(Some(fault));
    proptest::prop_assert!(!report.is_success(), "{fault:?} went unnoticed");
    proptest::prop_assert_eq!(report.total(), run_set_suite(None).total());
}

#[test]
fn dropped_element_is_reported() {
    let report = run_set_suite(Some(Fault::AddDropsElement));
    assert_eq!(
        report.outcome(
            CollectionSize::One,
            "collection_add::supported_not_present"
        ),
        Some(&CaseOutcome::Failed(AssertionFailure::MissingElement {
            element: "'d'".to_owned(),
            expected: "['a', 'd']".to_owned(),
            actual: "['a']".to_owned(),
        }))
    );
}

#[test]
fn wrong_len_is_reported() {
    let report = run_set_suite(Some(Fault::LenOffByOne));
    assert_eq!(
        report.outcome(CollectionSize::Zero, "collection_size::len"),
        Some(&CaseOutcome::Failed(AssertionFailure::general(
            "len() should match the number of elements created: \
             left = 1, right = 0"
        )))
    );
}

#[test]
fn missing_elements_are_checked_by_iteration() {
    let generator = FaultyGenerator::new(
        SampleElements::chars(),
        Some(Fault::ContainsAlwaysFalse),
    );
    let one_size =
        OneSizeTestContainerGenerator::new(&generator, CollectionSize::Several)
            .unwrap();
    let tester = ContainerTester::new(one_size);
    assert!(!tester.container().contains(&'a'));

    let error = tester.expect_missing(&['a']).unwrap_err();
    assert_eq!(
        error,
        AssertionFailure::UnexpectedlyPresent { element: "'a'".to_owned() }
    );
    tester.expect_missing(&['d', 'e']).unwrap();
}

#[test]
fn panics_are_contained() {
    let report = run_set_suite(Some(Fault::ClearPanics));
    for size in CollectionSize::ALL_CONCRETE {
        assert_eq!(
            report.outcome(size, "collection_clear::supported"),
            Some(&CaseOutcome::Panicked("clear is broken".to_owned()))
        );
    }
    // Cases after the panicking one still ran.
    assert!(report
        .outcome(CollectionSize::Several, "set_creation::with_duplicates")
        .is_some_and(CaseOutcome::is_passed));
    assert_eq!(report.failed(), 3);
    assert!(report.to_string().contains(
        "  PANIC [Zero] collection_clear::supported: clear is broken\n"
    ));
}
