// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Sample elements that containers under test are populated with.

use std::hash::{Hash, Hasher};

/// Five distinct sample elements.
///
/// A container of a given [`CollectionSize`] holds a prefix of
/// `e0, e1, e2`. `e3` and `e4` are never part of a generated container, so
/// testers use them as known-absent elements.
///
/// [`CollectionSize`]: crate::CollectionSize
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SampleElements<E> {
    /// The first sample element.
    pub e0: E,
    /// The second sample element.
    pub e1: E,
    /// The third sample element.
    pub e2: E,
    /// The fourth sample element, never in a generated container.
    pub e3: E,
    /// The fifth sample element, never in a generated container.
    pub e4: E,
}

impl<E> SampleElements<E> {
    /// The number of sample elements.
    pub const LEN: usize = 5;

    /// Creates a new set of samples. The elements must be pairwise distinct.
    pub fn new(e0: E, e1: E, e2: E, e3: E, e4: E) -> Self {
        Self { e0, e1, e2, e3, e4 }
    }

    /// Iterates over the samples in order `e0..e4`.
    pub fn iter(&self) -> std::array::IntoIter<&E, 5> {
        [&self.e0, &self.e1, &self.e2, &self.e3, &self.e4].into_iter()
    }

    /// Returns the sample at `index`, if `index < 5`.
    pub fn get(&self, index: usize) -> Option<&E> {
        match index {
            0 => Some(&self.e0),
            1 => Some(&self.e1),
            2 => Some(&self.e2),
            3 => Some(&self.e3),
            4 => Some(&self.e4),
            _ => None,
        }
    }

    /// Converts every sample with `f`.
    pub fn map<F, U>(self, mut f: F) -> SampleElements<U>
    where
        F: FnMut(E) -> U,
    {
        SampleElements {
            e0: f(self.e0),
            e1: f(self.e1),
            e2: f(self.e2),
            e3: f(self.e3),
            e4: f(self.e4),
        }
    }

    /// Returns the samples as a vector.
    pub fn to_vec(&self) -> Vec<E>
    where
        E: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<E> IntoIterator for SampleElements<E> {
    type Item = E;
    type IntoIter = std::array::IntoIter<E, 5>;

    fn into_iter(self) -> Self::IntoIter {
        [self.e0, self.e1, self.e2, self.e3, self.e4].into_iter()
    }
}

impl<'a, E> IntoIterator for &'a SampleElements<E> {
    type Item = &'a E;
    type IntoIter = std::array::IntoIter<&'a E, 5>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl SampleElements<String> {
    /// `"a"` through `"e"`.
    pub fn strings() -> Self {
        SampleElements::new("a", "b", "c", "d", "e").map(String::from)
    }
}

impl SampleElements<i32> {
    /// `0` through `4`.
    pub fn ints() -> Self {
        SampleElements::new(0, 1, 2, 3, 4)
    }
}

impl SampleElements<char> {
    /// `'a'` through `'e'`.
    pub fn chars() -> Self {
        SampleElements::new('a', 'b', 'c', 'd', 'e')
    }
}

impl SampleElements<Unhashable> {
    /// `Unhashable(0)` through `Unhashable(4)`.
    pub fn unhashables() -> Self {
        SampleElements::ints().map(Unhashable)
    }
}

impl SampleElements<Collider> {
    /// `Collider(0)` through `Collider(4)`.
    pub fn colliders() -> Self {
        SampleElements::ints().map(Collider)
    }
}

impl<K, V> SampleElements<(K, V)> {
    /// Pairs up keys and values into map entries.
    ///
    /// The keys must be pairwise distinct, and so must the values, for the
    /// entries to be usable as map samples.
    pub fn entries(keys: SampleElements<K>, values: SampleElements<V>) -> Self {
        SampleElements {
            e0: (keys.e0, values.e0),
            e1: (keys.e1, values.e1),
            e2: (keys.e2, values.e2),
            e3: (keys.e3, values.e3),
            e4: (keys.e4, values.e4),
        }
    }
}

/// An element with equality but without hashing or ordering.
///
/// Containers that only rely on `PartialEq` can be tested with these.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Unhashable(pub i32);

/// An element whose hash is the same for every value.
///
/// Every sample lands in the same bucket of a hash-based container, which
/// exercises its collision handling.
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub struct Collider(pub i32);

impl Hash for Collider {
    fn hash<H: Hasher>(&self, state: &mut H) {
        1u8.hash(state);
    }
}
