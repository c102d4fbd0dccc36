// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Tester cases and the requirements that select them.

use crate::{
    errors::{CheckResult, ConflictingRequirements, RequirementConflict},
    features::{Feature, FeatureSet},
    generator::TestContainerGenerator,
    size::CollectionSize,
    tester::ContainerTester,
};
use std::fmt;

/// The features and sizes a tester case needs, or needs to be absent.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Requirements {
    present: FeatureSet,
    absent: FeatureSet,
    sizes: Vec<CollectionSize>,
    absent_sizes: Vec<CollectionSize>,
}

impl Requirements {
    /// Creates requirements that any container satisfies.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the features that must be present.
    pub fn present(&self) -> &FeatureSet {
        &self.present
    }

    /// Returns the features that must be absent.
    pub fn absent(&self) -> &FeatureSet {
        &self.absent
    }

    /// Returns true if a container with `features` (including implied ones)
    /// at the concrete `size` satisfies these requirements.
    pub fn is_satisfied_by(
        &self,
        features: &FeatureSet,
        size: CollectionSize,
    ) -> bool {
        features.is_superset(&self.present)
            && features.is_disjoint(&self.absent)
            && (self.sizes.is_empty()
                || self.sizes.iter().any(|s| s.covers(size)))
            && !self.absent_sizes.iter().any(|s| s.covers(size))
    }

    /// Checks that these requirements can be met at all.
    ///
    /// `case` names the tester case in the returned error.
    pub fn validate(&self, case: &str) -> Result<(), ConflictingRequirements> {
        if let Some(feature) =
            self.present.with_implied().first_common(&self.absent)
        {
            return Err(ConflictingRequirements {
                case: case.to_owned(),
                conflict: RequirementConflict::Feature(feature),
            });
        }

        let required = CollectionSize::expand(self.sizes.iter().copied());
        let forbidden =
            CollectionSize::expand(self.absent_sizes.iter().copied());
        if let Some(&size) = required.iter().find(|s| forbidden.contains(s)) {
            return Err(ConflictingRequirements {
                case: case.to_owned(),
                conflict: RequirementConflict::Size(size),
            });
        }
        Ok(())
    }
}

/// The body of a tester case.
pub type TesterFn<G> = for<'g> fn(&mut ContainerTester<'g, G>) -> CheckResult;

/// A single named behavioral check, along with the requirements that decide
/// which containers it runs against.
///
/// # Examples
///
/// ```
/// use contest::{
///     CollectionSize, ContainerTester, Feature, TestContainer,
///     TestContainerGenerator, TesterCase, errors::CheckResult,
/// };
///
/// fn add_returns_true<G: TestContainerGenerator>(
///     tester: &mut ContainerTester<'_, G>,
/// ) -> CheckResult {
///     let e3 = tester.samples().e3.clone();
///     contest::ensure!(tester.container_mut().add(e3.clone())?);
///     tester.expect_added(&[e3])
/// }
///
/// let case = TesterCase::<contest::FromIteratorGenerator<Vec<u8>, u8>>::new(
///     "vec_add",
///     "add_returns_true",
///     add_returns_true,
/// )
/// .requires(Feature::SupportsAdd);
/// assert_eq!(case.full_name(), "vec_add::add_returns_true");
/// ```
pub struct TesterCase<G: TestContainerGenerator> {
    group: &'static str,
    name: &'static str,
    requirements: Requirements,
    run: TesterFn<G>,
}

impl<G: TestContainerGenerator> TesterCase<G> {
    /// Creates a case with no requirements.
    pub fn new(
        group: &'static str,
        name: &'static str,
        run: TesterFn<G>,
    ) -> Self {
        Self { group, name, requirements: Requirements::new(), run }
    }

    /// Requires `feature` to be present.
    pub fn requires(mut self, feature: Feature) -> Self {
        self.requirements.present.insert(feature);
        self
    }

    /// Requires `feature` to be absent.
    pub fn requires_absent(mut self, feature: Feature) -> Self {
        self.requirements.absent.insert(feature);
        self
    }

    /// Restricts the case to `size`. May be called several times to allow
    /// several sizes.
    pub fn requires_size(mut self, size: CollectionSize) -> Self {
        self.requirements.sizes.push(size);
        self
    }

    /// Excludes `size`.
    pub fn requires_absent_size(mut self, size: CollectionSize) -> Self {
        self.requirements.absent_sizes.push(size);
        self
    }

    /// Returns the name of the group this case belongs to.
    #[inline]
    pub fn group(&self) -> &'static str {
        self.group
    }

    /// Returns the name of this case within its group.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns `group::name`.
    pub fn full_name(&self) -> String {
        format!("{}::{}", self.group, self.name)
    }

    /// Returns the requirements of this case.
    #[inline]
    pub fn requirements(&self) -> &Requirements {
        &self.requirements
    }

    /// Runs the case against `tester`.
    pub fn run(&self, tester: &mut ContainerTester<'_, G>) -> CheckResult {
        (self.run)(tester)
    }
}

impl<G: TestContainerGenerator> Clone for TesterCase<G> {
    fn clone(&self) -> Self {
        Self {
            group: self.group,
            name: self.name,
            requirements: self.requirements.clone(),
            run: self.run,
        }
    }
}

impl<G: TestContainerGenerator> fmt::Debug for TesterCase<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TesterCase")
            .field("group", &self.group)
            .field("name", &self.name)
            .field("requirements", &self.requirements)
            .finish_non_exhaustive()
    }
}
