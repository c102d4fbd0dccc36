// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Capabilities that a container under test declares.
//!
//! A suite is configured with the features the implementation supports, and
//! only runs the tester cases whose requirements match. Some features imply
//! others: see [`Feature::implied`] and [`FeatureSet::with_implied`].

use std::collections::BTreeSet;

/// A capability of a container implementation.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Feature {
    /// `add` is supported. For maps, this is `put`.
    SupportsAdd,
    /// `remove` and `clear` are supported.
    SupportsRemove,
    /// `insert_at` is supported.
    SupportsAddWithIndex,
    /// `set_at` is supported.
    SupportsSet,
    /// `remove_at` is supported.
    SupportsRemoveWithIndex,
    /// Iteration order is defined by the generator's `order`.
    KnownOrder,
    /// Querying for the null element is allowed.
    AllowsNullQueries,
    /// The null element may be stored.
    AllowsNullValues,
    /// Some values of the element type are rejected.
    ///
    /// No stock tester case uses this feature. It is available for
    /// user-defined cases that check how rejected values are handled.
    RestrictsElements,
    /// Shorthand for a fully mutable collection.
    GeneralPurpose,
    /// Shorthand for a collection that can be shrunk but not grown.
    RemoveOperations,
    /// Shorthand for a fully mutable list.
    ListGeneralPurpose,
}

impl Feature {
    /// All features, in declaration order.
    pub const ALL: [Feature; 12] = [
        Feature::SupportsAdd,
        Feature::SupportsRemove,
        Feature::SupportsAddWithIndex,
        Feature::SupportsSet,
        Feature::SupportsRemoveWithIndex,
        Feature::KnownOrder,
        Feature::AllowsNullQueries,
        Feature::AllowsNullValues,
        Feature::RestrictsElements,
        Feature::GeneralPurpose,
        Feature::RemoveOperations,
        Feature::ListGeneralPurpose,
    ];

    /// Returns the features directly implied by this one.
    pub fn implied(self) -> &'static [Feature] {
        match self {
            Feature::AllowsNullValues => &[Feature::AllowsNullQueries],
            Feature::GeneralPurpose => {
                &[Feature::SupportsAdd, Feature::SupportsRemove]
            }
            Feature::RemoveOperations => &[Feature::SupportsRemove],
            Feature::ListGeneralPurpose => &[
                Feature::GeneralPurpose,
                Feature::SupportsAddWithIndex,
                Feature::SupportsSet,
                Feature::SupportsRemoveWithIndex,
            ],
            Feature::SupportsAdd
            | Feature::SupportsRemove
            | Feature::SupportsAddWithIndex
            | Feature::SupportsSet
            | Feature::SupportsRemoveWithIndex
            | Feature::KnownOrder
            | Feature::AllowsNullQueries
            | Feature::RestrictsElements => &[],
        }
    }
}

/// An ordered set of [`Feature`]s.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FeatureSet {
    features: BTreeSet<Feature>,
}

impl FeatureSet {
    /// Creates a new, empty `FeatureSet`.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the set contains no features.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Returns the number of features in the set.
    #[inline]
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Returns true if the set contains `feature`.
    #[inline]
    pub fn contains(&self, feature: Feature) -> bool {
        self.features.contains(&feature)
    }

    /// Adds a feature, returning true if it was not already present.
    pub fn insert(&mut self, feature: Feature) -> bool {
        self.features.insert(feature)
    }

    /// Iterates over the features in order.
    pub fn iter(&self) -> impl Iterator<Item = Feature> + '_ {
        self.features.iter().copied()
    }

    /// Returns this set together with every feature transitively implied by
    /// its members.
    pub fn with_implied(&self) -> FeatureSet {
        let mut closure = self.clone();
        let mut pending: Vec<Feature> = self.iter().collect();
        while let Some(feature) = pending.pop() {
            for &implied in feature.implied() {
                if closure.insert(implied) {
                    pending.push(implied);
                }
            }
        }
        closure
    }

    /// Returns true if every feature in `other` is in `self`.
    pub fn is_superset(&self, other: &FeatureSet) -> bool {
        self.features.is_superset(&other.features)
    }

    /// Returns true if `self` and `other` have no features in common.
    pub fn is_disjoint(&self, other: &FeatureSet) -> bool {
        self.features.is_disjoint(&other.features)
    }

    /// Returns the first feature that is in both `self` and `other`.
    pub fn first_common(&self, other: &FeatureSet) -> Option<Feature> {
        self.features.intersection(&other.features).next().copied()
    }
}

impl FromIterator<Feature> for FeatureSet {
    fn from_iter<I: IntoIterator<Item = Feature>>(iter: I) -> Self {
        Self { features: iter.into_iter().collect() }
    }
}

impl Extend<Feature> for FeatureSet {
    fn extend<I: IntoIterator<Item = Feature>>(&mut self, iter: I) {
        self.features.extend(iter);
    }
}

impl<const N: usize> From<[Feature; N]> for FeatureSet {
    fn from(features: [Feature; N]) -> Self {
        features.into_iter().collect()
    }
}
