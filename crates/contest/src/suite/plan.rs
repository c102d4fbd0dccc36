// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::report::{CaseOutcome, CaseResult, ConformanceReport};
use crate::{
    features::FeatureSet,
    generator::{OneSizeTestContainerGenerator, TestContainerGenerator},
    requirements::TesterCase,
    size::CollectionSize,
    support::unwind::catch_panic,
    tester::{ContainerTester, ContentsOrdering},
};
use std::{collections::BTreeSet, fmt};

/// A validated conformance suite, created by [`SuiteBuilder`].
///
/// [`SuiteBuilder`]: crate::SuiteBuilder
pub struct ConformanceSuite<G: TestContainerGenerator> {
    name: String,
    generator: G,
    features: FeatureSet,
    sizes: Vec<CollectionSize>,
    testers: Vec<TesterCase<G>>,
    ordering: ContentsOrdering,
    suppressed: BTreeSet<String>,
}

impl<G: TestContainerGenerator> ConformanceSuite<G> {
    pub(super) fn new(
        name: String,
        generator: G,
        features: FeatureSet,
        sizes: Vec<CollectionSize>,
        testers: Vec<TesterCase<G>>,
        ordering: ContentsOrdering,
        suppressed: BTreeSet<String>,
    ) -> Self {
        Self { name, generator, features, sizes, testers, ordering, suppressed }
    }

    /// Returns the name of the suite.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the generator.
    #[inline]
    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Returns the declared features, including implied ones.
    #[inline]
    pub fn features(&self) -> &FeatureSet {
        &self.features
    }

    /// Returns the concrete sizes the suite runs at.
    #[inline]
    pub fn sizes(&self) -> &[CollectionSize] {
        &self.sizes
    }

    /// Returns the cases that run at `size`, in registration order.
    pub fn cases_at(
        &self,
        size: CollectionSize,
    ) -> impl Iterator<Item = &TesterCase<G>> + '_ {
        self.testers.iter().filter(move |case| {
            case.requirements().is_satisfied_by(&self.features, size)
                && !self.is_suppressed(case)
        })
    }

    fn is_suppressed(&self, case: &TesterCase<G>) -> bool {
        self.suppressed.contains(case.group())
            || self.suppressed.contains(&case.full_name())
    }

    /// Computes the matrix of cases this suite runs, without running them.
    pub fn plan(&self) -> SuitePlan {
        let cases = self
            .sizes
            .iter()
            .flat_map(|&size| {
                self.cases_at(size).map(move |case| PlannedCase {
                    size,
                    group: case.group(),
                    name: case.name(),
                })
            })
            .collect();
        SuitePlan {
            name: self.name.clone(),
            features: self.features.clone(),
            sizes: self.sizes.clone(),
            cases,
        }
    }

    /// Runs every planned case and reports the outcomes.
    ///
    /// Each case gets a freshly created container. A case that panics,
    /// either in the container or in the case itself, is reported as
    /// [`CaseOutcome::Panicked`] and does not stop the run.
    pub fn run(&self) -> ConformanceReport {
        let mut results = Vec::new();
        for &size in &self.sizes {
            // Sizes are expanded to concrete ones when the suite is built.
            let Ok(generator) =
                OneSizeTestContainerGenerator::new(&self.generator, size)
            else {
                continue;
            };
            for case in self.cases_at(size) {
                let outcome = match catch_panic(|| {
                    let mut tester = ContainerTester::new(generator)
                        .with_ordering(self.ordering);
                    case.run(&mut tester)
                }) {
                    Ok(Ok(())) => CaseOutcome::Passed,
                    Ok(Err(failure)) => CaseOutcome::Failed(failure),
                    Err(message) => CaseOutcome::Panicked(message),
                };
                results.push(CaseResult {
                    size,
                    group: case.group(),
                    name: case.name(),
                    outcome,
                });
            }
        }
        ConformanceReport::new(self.name.clone(), results)
    }
}

impl<G> fmt::Debug for ConformanceSuite<G>
where
    G: TestContainerGenerator + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConformanceSuite")
            .field("name", &self.name)
            .field("generator", &self.generator)
            .field("features", &self.features)
            .field("sizes", &self.sizes)
            .field("testers", &self.testers)
            .field("ordering", &self.ordering)
            .field("suppressed", &self.suppressed)
            .finish()
    }
}

/// One entry of a [`SuitePlan`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PlannedCase {
    /// The size the container is generated at.
    pub size: CollectionSize,
    /// The group of the case.
    pub group: &'static str,
    /// The name of the case within its group.
    pub name: &'static str,
}

impl PlannedCase {
    /// Returns `group::name`.
    pub fn full_name(&self) -> String {
        format!("{}::{}", self.group, self.name)
    }
}

/// The matrix of cases a suite runs.
///
/// The `Display` implementation lists the matrix one case per line, grouped
/// by size.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SuitePlan {
    name: String,
    features: FeatureSet,
    sizes: Vec<CollectionSize>,
    cases: Vec<PlannedCase>,
}

impl SuitePlan {
    /// Returns the name of the suite.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the planned cases, grouped by size.
    #[inline]
    pub fn cases(&self) -> &[PlannedCase] {
        &self.cases
    }

    /// Returns the number of planned cases.
    #[inline]
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    /// Returns true if no cases are planned.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Returns true if the case `group::name` is planned at `size`.
    pub fn contains(&self, size: CollectionSize, full_name: &str) -> bool {
        self.cases
            .iter()
            .any(|case| case.size == size && case.full_name() == full_name)
    }
}

impl fmt::Display for SuitePlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "suite: {}", self.name)?;
        write!(f, "features:")?;
        for feature in self.features.iter() {
            write!(f, " {feature:?}")?;
        }
        writeln!(f)?;
        writeln!(f, "cases: {}", self.cases.len())?;
        for &size in &self.sizes {
            writeln!(f, "  {size:?}:")?;
            for case in self.cases.iter().filter(|case| case.size == size) {
                writeln!(f, "    {}::{}", case.group, case.name)?;
            }
        }
        Ok(())
    }
}
