// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The simplest read-only collection.

use crate::container::TestContainer;
use std::fmt;

/// A read-only collection backed by a vector, relying on nothing but
/// `PartialEq`.
///
/// Testers pass these as the argument to bulk operations, so that a check
/// of one implementation never depends on the behavior of another.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MinimalCollection<E> {
    elements: Vec<E>,
}

impl<E> MinimalCollection<E> {
    /// Creates a collection holding `elements`, in order.
    pub fn of<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = E>,
    {
        Self { elements: elements.into_iter().collect() }
    }

    /// Creates an empty collection.
    pub fn empty() -> Self {
        Self { elements: Vec::new() }
    }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns true if the collection is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Iterates over the elements in order.
    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.elements.iter()
    }

    /// Returns the elements as a slice.
    pub fn as_slice(&self) -> &[E] {
        &self.elements
    }

    /// Returns true if the collection holds `element`.
    pub fn contains(&self, element: &E) -> bool
    where
        E: PartialEq,
    {
        self.elements.iter().any(|e| e == element)
    }

    /// Converts the collection into a vector.
    pub fn into_vec(self) -> Vec<E> {
        self.elements
    }
}

impl<E> Default for MinimalCollection<E> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<E> FromIterator<E> for MinimalCollection<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self::of(iter)
    }
}

impl<E> IntoIterator for MinimalCollection<E> {
    type Item = E;
    type IntoIter = std::vec::IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, E> IntoIterator for &'a MinimalCollection<E> {
    type Item = &'a E;
    type IntoIter = std::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<E> TestContainer for MinimalCollection<E>
where
    E: Clone + PartialEq + fmt::Debug,
{
    type Element = E;

    fn len(&self) -> usize {
        self.elements.len()
    }

    fn contents(&self) -> Vec<E> {
        self.elements.clone()
    }

    fn contains(&self, element: &E) -> bool {
        MinimalCollection::contains(self, element)
    }
}
