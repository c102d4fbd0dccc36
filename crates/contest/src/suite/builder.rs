// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::plan::ConformanceSuite;
use crate::{
    errors::SuiteBuildError,
    features::{Feature, FeatureSet},
    generator::TestContainerGenerator,
    requirements::TesterCase,
    size::CollectionSize,
    tester::{ContentsOrdering, NullElement},
    testers,
};
use std::{collections::BTreeSet, fmt};

/// A builder for a [`ConformanceSuite`].
///
/// A name, a generator and at least one size are required. The family
/// constructors ([`collection`](Self::collection), [`set`](Self::set),
/// [`list`](Self::list) and [`map`](Self::map)) register the stock tester
/// cases for that family; [`new`](Self::new) starts with none.
///
/// # Examples
///
/// ```
/// use contest::{
///     CollectionSize, Feature, FromIteratorGenerator, SampleElements,
///     SuiteBuilder,
/// };
///
/// let report = SuiteBuilder::list()
///     .named("Vec<String>")
///     .using(FromIteratorGenerator::<Vec<String>, _>::new(
///         SampleElements::strings(),
///     ))
///     .with_features([Feature::ListGeneralPurpose, Feature::KnownOrder])
///     .with_sizes([CollectionSize::Any])
///     .build()
///     .expect("suite is valid")
///     .run();
/// report.assert_success();
/// ```
pub struct SuiteBuilder<G: TestContainerGenerator> {
    name: Option<String>,
    generator: Option<G>,
    features: FeatureSet,
    sizes: Vec<CollectionSize>,
    testers: Vec<TesterCase<G>>,
    ordering: ContentsOrdering,
    suppressed: BTreeSet<String>,
}

impl<G: TestContainerGenerator> SuiteBuilder<G> {
    /// Creates a builder with no tester cases registered.
    pub fn new() -> Self {
        Self {
            name: None,
            generator: None,
            features: FeatureSet::new(),
            sizes: Vec::new(),
            testers: Vec::new(),
            ordering: ContentsOrdering::default(),
            suppressed: BTreeSet::new(),
        }
    }

    /// Creates a builder with the cases that hold for every container.
    pub fn collection() -> Self {
        Self::new().with_testers(testers::collection_testers())
    }

    /// Creates a builder with the cases for sets.
    pub fn set() -> Self {
        Self::collection().with_testers(testers::set_testers())
    }

    /// Creates a builder with the cases for lists.
    ///
    /// Contents are compared in order.
    pub fn list() -> Self {
        Self::collection()
            .with_testers(testers::list_testers())
            .with_ordering(ContentsOrdering::InOrder)
    }

    /// Sets the name the suite reports under.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the generator that creates containers under test.
    pub fn using(mut self, generator: G) -> Self {
        self.generator = Some(generator);
        self
    }

    /// Declares features of the containers under test.
    pub fn with_features<I>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = Feature>,
    {
        self.features.extend(features);
        self
    }

    /// Adds sizes to generate containers at.
    pub fn with_sizes<I>(mut self, sizes: I) -> Self
    where
        I: IntoIterator<Item = CollectionSize>,
    {
        self.sizes.extend(sizes);
        self
    }

    /// Registers additional tester cases, after the ones already registered.
    pub fn with_testers<I>(mut self, testers: I) -> Self
    where
        I: IntoIterator<Item = TesterCase<G>>,
    {
        self.testers.extend(testers);
        self
    }

    /// Registers the cases for handling of the null element.
    pub fn with_null_testers(self) -> Self
    where
        G::Element: NullElement,
    {
        self.with_testers(testers::null_testers())
    }

    /// Sets how cases compare contents.
    pub fn with_ordering(mut self, ordering: ContentsOrdering) -> Self {
        self.ordering = ordering;
        self
    }

    /// Suppresses cases by name: either a full `group::name`, or a group
    /// name to suppress every case in the group.
    pub fn suppressing<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.suppressed.extend(names.into_iter().map(Into::into));
        self
    }

    /// Validates the configuration and builds the suite.
    pub fn build(self) -> Result<ConformanceSuite<G>, SuiteBuildError> {
        let name = self.name.ok_or(SuiteBuildError::MissingName)?;
        let generator =
            self.generator.ok_or(SuiteBuildError::MissingGenerator)?;
        if self.sizes.is_empty() {
            return Err(SuiteBuildError::MissingSizes);
        }
        for case in &self.testers {
            case.requirements().validate(&case.full_name())?;
        }

        Ok(ConformanceSuite::new(
            name,
            generator,
            self.features.with_implied(),
            CollectionSize::expand(self.sizes),
            self.testers,
            self.ordering,
            self.suppressed,
        ))
    }
}

impl<G, K, V> SuiteBuilder<G>
where
    G: TestContainerGenerator<Element = (K, V)>,
    K: Clone + PartialEq + fmt::Debug,
    V: Clone + PartialEq + fmt::Debug,
{
    /// Creates a builder with the cases for maps.
    ///
    /// A map is checked as a set of entries, plus the map-specific cases.
    pub fn map() -> Self {
        Self::set().with_testers(testers::map_testers::<G, K, V>())
    }
}

impl<G: TestContainerGenerator> Default for SuiteBuilder<G> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: TestContainerGenerator> fmt::Debug for SuiteBuilder<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SuiteBuilder")
            .field("name", &self.name)
            .field("has_generator", &self.generator.is_some())
            .field("features", &self.features)
            .field("sizes", &self.sizes)
            .field("testers", &self.testers.len())
            .field("ordering", &self.ordering)
            .field("suppressed", &self.suppressed)
            .finish()
    }
}
