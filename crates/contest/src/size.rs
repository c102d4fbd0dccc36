// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Size variants that containers under test are generated at.

/// The size at which a container under test is generated.
///
/// Suites run every applicable tester case once per concrete size.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum CollectionSize {
    /// An empty container.
    Zero,
    /// A container holding `e0`.
    One,
    /// A container holding `e0`, `e1` and `e2`.
    Several,
    /// Stands for all of the concrete sizes.
    Any,
}

impl CollectionSize {
    /// The concrete sizes, in the order suites run them.
    pub const ALL_CONCRETE: [CollectionSize; 3] =
        [CollectionSize::Zero, CollectionSize::One, CollectionSize::Several];

    /// Returns the number of elements in a container of this size, or `None`
    /// for [`CollectionSize::Any`].
    pub fn num_elements(self) -> Option<usize> {
        match self {
            CollectionSize::Zero => Some(0),
            CollectionSize::One => Some(1),
            CollectionSize::Several => Some(3),
            CollectionSize::Any => None,
        }
    }

    /// Returns true if this is a concrete size.
    #[inline]
    pub fn is_concrete(self) -> bool {
        self != CollectionSize::Any
    }

    /// Returns true if `self` stands for `other`: either they are equal, or
    /// `self` is [`CollectionSize::Any`].
    pub fn covers(self, other: CollectionSize) -> bool {
        self == other || self == CollectionSize::Any
    }

    /// Expands a list of sizes into the concrete sizes they stand for,
    /// deduplicated and in the order of [`Self::ALL_CONCRETE`].
    pub fn expand<I>(sizes: I) -> Vec<CollectionSize>
    where
        I: IntoIterator<Item = CollectionSize>,
    {
        let sizes: Vec<_> = sizes.into_iter().collect();
        Self::ALL_CONCRETE
            .into_iter()
            .filter(|concrete| sizes.iter().any(|s| s.covers(*concrete)))
            .collect()
    }
}
