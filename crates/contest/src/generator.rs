// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Generators that create the containers under test.

use crate::{
    container::TestContainer, errors::SizeError, samples::SampleElements,
    size::CollectionSize,
};
use std::{cmp::Ordering, fmt, marker::PhantomData};

/// Creates containers of a particular implementation from sample elements.
///
/// A generator is the single point where a library author hooks their
/// implementation into a conformance suite.
pub trait TestContainerGenerator {
    /// The element type. For maps, the entry type.
    type Element: Clone + PartialEq + fmt::Debug;

    /// The container type under test.
    type Container: TestContainer<Element = Self::Element>;

    /// Returns the five sample elements that containers are populated with.
    fn samples(&self) -> SampleElements<Self::Element>;

    /// Creates a container holding `elements`, inserted in order.
    fn create(&self, elements: Vec<Self::Element>) -> Self::Container;

    /// Returns the order in which a container created from
    /// `insertion_order` iterates over its elements.
    ///
    /// Only consulted for containers with [`Feature::KnownOrder`]. The
    /// default is insertion order.
    ///
    /// [`Feature::KnownOrder`]: crate::Feature::KnownOrder
    fn order(&self, insertion_order: Vec<Self::Element>) -> Vec<Self::Element> {
        insertion_order
    }
}

/// A generator pinned to one concrete [`CollectionSize`].
///
/// This is what tester cases see: `create_test_subject` always creates a
/// container holding the first `num_elements` samples.
pub struct OneSizeTestContainerGenerator<'g, G> {
    inner: &'g G,
    size: CollectionSize,
    num_elements: usize,
}

impl<'g, G: TestContainerGenerator> OneSizeTestContainerGenerator<'g, G> {
    /// Pins `inner` to `size`.
    ///
    /// Returns [`SizeError::NotConcrete`] for [`CollectionSize::Any`].
    pub fn new(inner: &'g G, size: CollectionSize) -> Result<Self, SizeError> {
        let num_elements = size.num_elements().ok_or(SizeError::NotConcrete)?;
        Ok(Self { inner, size, num_elements })
    }

    /// Returns the underlying generator.
    #[inline]
    pub fn inner(&self) -> &'g G {
        self.inner
    }

    /// Returns the size containers are created at.
    #[inline]
    pub fn collection_size(&self) -> CollectionSize {
        self.size
    }

    /// Returns the number of elements containers are created with.
    #[inline]
    pub fn num_elements(&self) -> usize {
        self.num_elements
    }

    /// Creates a container holding the first `num_elements` samples.
    pub fn create_test_subject(&self) -> G::Container {
        let elements =
            self.inner.samples().into_iter().take(self.num_elements).collect();
        self.inner.create(elements)
    }

    /// Returns the first `how_many` samples.
    pub fn sample_elements(
        &self,
        how_many: usize,
    ) -> Result<Vec<G::Element>, SizeError> {
        let available = SampleElements::<G::Element>::LEN;
        if how_many > available {
            return Err(SizeError::TooManySamples {
                requested: how_many,
                available,
            });
        }
        Ok(self.inner.samples().into_iter().take(how_many).collect())
    }
}

impl<G: TestContainerGenerator> TestContainerGenerator
    for OneSizeTestContainerGenerator<'_, G>
{
    type Element = G::Element;
    type Container = G::Container;

    fn samples(&self) -> SampleElements<G::Element> {
        self.inner.samples()
    }

    fn create(&self, elements: Vec<G::Element>) -> G::Container {
        self.inner.create(elements)
    }

    fn order(&self, insertion_order: Vec<G::Element>) -> Vec<G::Element> {
        self.inner.order(insertion_order)
    }
}

impl<G> Clone for OneSizeTestContainerGenerator<'_, G> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<G> Copy for OneSizeTestContainerGenerator<'_, G> {}

impl<G> fmt::Debug for OneSizeTestContainerGenerator<'_, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OneSizeTestContainerGenerator")
            .field("size", &self.size)
            .field("num_elements", &self.num_elements)
            .finish_non_exhaustive()
    }
}

/// A generator for any container that can be collected from an iterator.
///
/// # Examples
///
/// ```
/// use contest::{
///     FromIteratorGenerator, SampleElements, TestContainerGenerator,
/// };
/// use std::collections::BTreeSet;
///
/// let generator =
///     FromIteratorGenerator::<BTreeSet<i32>, _>::new(SampleElements::ints())
///         .sorted();
/// let set = generator.create(vec![2, 0, 1]);
/// assert_eq!(set.len(), 3);
/// assert_eq!(generator.order(vec![2, 0, 1]), [0, 1, 2]);
/// ```
pub struct FromIteratorGenerator<C, E> {
    samples: SampleElements<E>,
    compare: Option<fn(&E, &E) -> Ordering>,
    _marker: PhantomData<fn() -> C>,
}

impl<C, E> FromIteratorGenerator<C, E> {
    /// Creates a generator over `samples`, iterating in insertion order.
    pub fn new(samples: SampleElements<E>) -> Self {
        Self { samples, compare: None, _marker: PhantomData }
    }

    /// Declares that containers iterate in ascending order.
    pub fn sorted(self) -> Self
    where
        E: Ord,
    {
        self.ordered_by(<E as Ord>::cmp)
    }

    /// Declares that containers iterate in the order given by `compare`.
    pub fn ordered_by(self, compare: fn(&E, &E) -> Ordering) -> Self {
        Self { compare: Some(compare), ..self }
    }
}

impl<C, E> TestContainerGenerator for FromIteratorGenerator<C, E>
where
    C: FromIterator<E> + TestContainer<Element = E>,
    E: Clone + PartialEq + fmt::Debug,
{
    type Element = E;
    type Container = C;

    fn samples(&self) -> SampleElements<E> {
        self.samples.clone()
    }

    fn create(&self, elements: Vec<E>) -> C {
        elements.into_iter().collect()
    }

    fn order(&self, mut insertion_order: Vec<E>) -> Vec<E> {
        if let Some(compare) = self.compare {
            insertion_order.sort_by(compare);
        }
        insertion_order
    }
}

impl<C, E: Clone> Clone for FromIteratorGenerator<C, E> {
    fn clone(&self) -> Self {
        Self {
            samples: self.samples.clone(),
            compare: self.compare,
            _marker: PhantomData,
        }
    }
}

impl<C, E: fmt::Debug> fmt::Debug for FromIteratorGenerator<C, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FromIteratorGenerator")
            .field("samples", &self.samples)
            .field("sorted", &self.compare.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type VecGenerator = FromIteratorGenerator<Vec<char>, char>;

    #[test]
    fn one_size_rejects_any() {
        let generator = VecGenerator::new(SampleElements::chars());
        let error =
            OneSizeTestContainerGenerator::new(&generator, CollectionSize::Any)
                .unwrap_err();
        assert_eq!(error, SizeError::NotConcrete);
    }

    #[test]
    fn create_test_subject_uses_prefix() {
        let generator = VecGenerator::new(SampleElements::chars());
        for (size, expected) in [
            (CollectionSize::Zero, vec![]),
            (CollectionSize::One, vec!['a']),
            (CollectionSize::Several, vec!['a', 'b', 'c']),
        ] {
            let one_size =
                OneSizeTestContainerGenerator::new(&generator, size).unwrap();
            assert_eq!(one_size.create_test_subject(), expected);
            assert_eq!(one_size.num_elements(), expected.len());
            assert_eq!(one_size.collection_size(), size);
        }
    }

    #[test]
    fn sample_elements_bounds() {
        let generator = VecGenerator::new(SampleElements::chars());
        let one_size =
            OneSizeTestContainerGenerator::new(&generator, CollectionSize::One)
                .unwrap();
        assert_eq!(one_size.sample_elements(5).unwrap().len(), 5);
        assert_eq!(
            one_size.sample_elements(6),
            Err(SizeError::TooManySamples { requested: 6, available: 5 })
        );
    }

    #[test]
    fn ordered_by_custom_comparator() {
        let generator = VecGenerator::new(SampleElements::chars())
            .ordered_by(|a, b| b.cmp(a));
        assert_eq!(generator.order(vec!['a', 'c', 'b']), ['c', 'b', 'a']);

        let unordered = VecGenerator::new(SampleElements::chars());
        assert_eq!(unordered.order(vec!['a', 'c', 'b']), ['a', 'c', 'b']);
    }
}
