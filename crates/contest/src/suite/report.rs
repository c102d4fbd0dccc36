// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::{errors::AssertionFailure, size::CollectionSize};
use std::fmt;

/// How a single case ended.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CaseOutcome {
    /// Every check held.
    Passed,
    /// A check did not hold.
    Failed(AssertionFailure),
    /// The case panicked, with the given message.
    Panicked(String),
}

impl CaseOutcome {
    /// Returns true if the case passed.
    #[inline]
    pub fn is_passed(&self) -> bool {
        matches!(self, CaseOutcome::Passed)
    }
}

/// The outcome of one case at one size.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CaseResult {
    /// The size the container was generated at.
    pub size: CollectionSize,
    /// The group of the case.
    pub group: &'static str,
    /// The name of the case within its group.
    pub name: &'static str,
    /// How the case ended.
    pub outcome: CaseOutcome,
}

impl CaseResult {
    /// Returns `group::name`.
    pub fn full_name(&self) -> String {
        format!("{}::{}", self.group, self.name)
    }
}

/// The outcomes of a suite run.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConformanceReport {
    suite: String,
    results: Vec<CaseResult>,
}

impl ConformanceReport {
    pub(super) fn new(suite: String, results: Vec<CaseResult>) -> Self {
        Self { suite, results }
    }

    /// Returns the name of the suite that was run.
    #[inline]
    pub fn suite(&self) -> &str {
        &self.suite
    }

    /// Returns every result, in the order the cases ran.
    #[inline]
    pub fn results(&self) -> &[CaseResult] {
        &self.results
    }

    /// Returns the number of cases that passed.
    pub fn passed(&self) -> usize {
        self.results.iter().filter(|r| r.outcome.is_passed()).count()
    }

    /// Returns the number of cases that failed or panicked.
    pub fn failed(&self) -> usize {
        self.total() - self.passed()
    }

    /// Returns the number of cases that ran.
    #[inline]
    pub fn total(&self) -> usize {
        self.results.len()
    }

    /// Returns true if every case passed.
    pub fn is_success(&self) -> bool {
        self.results.iter().all(|r| r.outcome.is_passed())
    }

    /// Iterates over the cases that failed or panicked.
    pub fn failures(&self) -> impl Iterator<Item = &CaseResult> + '_ {
        self.results.iter().filter(|r| !r.outcome.is_passed())
    }

    /// Returns the outcome of the case `group::name` at `size`, if it ran.
    pub fn outcome(
        &self,
        size: CollectionSize,
        full_name: &str,
    ) -> Option<&CaseOutcome> {
        self.results
            .iter()
            .find(|r| r.size == size && r.full_name() == full_name)
            .map(|r| &r.outcome)
    }

    /// Panics with the rendered report if any case failed or panicked.
    #[track_caller]
    pub fn assert_success(&self) {
        if !self.is_success() {
            panic!("conformance suite failed:\n{self}");
        }
    }
}

impl fmt::Display for ConformanceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{}: {}/{} passed ({} failed)",
            self.suite,
            self.passed(),
            self.total(),
            self.failed()
        )?;
        for r in self.failures() {
            match &r.outcome {
                CaseOutcome::Failed(failure) => writeln!(
                    f,
                    "  FAIL [{:?}] {}::{}: {}",
                    r.size, r.group, r.name, failure
                )?,
                CaseOutcome::Panicked(message) => writeln!(
                    f,
                    "  PANIC [{:?}] {}::{}: {}",
                    r.size, r.group, r.name, message
                )?,
                CaseOutcome::Passed => {}
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(
        size: CollectionSize,
        name: &'static str,
        outcome: CaseOutcome,
    ) -> CaseResult {
        CaseResult { size, group: "collection_add", name, outcome }
    }

    #[test]
    fn counts_and_display() {
        let report = ConformanceReport::new(
            "LossySet".to_owned(),
            vec![
                result(
                    CollectionSize::Zero,
                    "supported_empty",
                    CaseOutcome::Passed,
                ),
                result(
                    CollectionSize::One,
                    "supported_not_present",
                    CaseOutcome::Failed(AssertionFailure::general(
                        "add(absent) should return true",
                    )),
                ),
                result(
                    CollectionSize::Several,
                    "supported_not_present",
                    CaseOutcome::Panicked("index out of bounds".to_owned()),
                ),
            ],
        );

        assert_eq!(report.passed(), 1);
        assert_eq!(report.failed(), 2);
        assert_eq!(report.total(), 3);
        assert!(!report.is_success());
        assert_eq!(report.failures().count(), 2);
        assert_eq!(
            report.outcome(
                CollectionSize::Zero,
                "collection_add::supported_empty"
            ),
            Some(&CaseOutcome::Passed)
        );
        assert_eq!(
            report.outcome(CollectionSize::One, "collection_add::missing"),
            None
        );
        assert_eq!(
            report.to_string(),
            "LossySet: 1/3 passed (2 failed)\n\
             \x20 FAIL [One] collection_add::supported_not_present: \
             add(absent) should return true\n\
             \x20 PANIC [Several] collection_add::supported_not_present: \
             index out of bounds\n"
        );
    }

    #[test]
    #[should_panic = "conformance suite failed"]
    fn assert_success_panics() {
        let report = ConformanceReport::new(
            "Broken".to_owned(),
            vec![result(
                CollectionSize::One,
                "supported_not_present",
                CaseOutcome::Failed(AssertionFailure::general("nope")),
            )],
        );
        report.assert_success();
    }

    #[test]
    fn empty_report_succeeds() {
        let report = ConformanceReport::new("Empty".to_owned(), Vec::new());
        assert!(report.is_success());
        report.assert_success();
        assert_eq!(report.to_string(), "Empty: 0/0 passed (0 failed)\n");
    }
}
