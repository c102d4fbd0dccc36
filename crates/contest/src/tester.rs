// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Shared state and assertions for every tester case.
//!
//! A [`ContainerTester`] is created fresh for each tester case. It holds the
//! sample elements, the generator pinned to one size, and the container
//! under test, and provides the `expect_*` assertions that concrete testers
//! are written in terms of.

use crate::{
    container::TestContainer,
    errors::{AssertionFailure, CheckResult, SizeError, TooFewElements},
    generator::{OneSizeTestContainerGenerator, TestContainerGenerator},
    helpers::{check_equal_ignoring_order, check_equal_in_order, copy_to_vec},
    minimal::MinimalCollection,
    samples::SampleElements,
};

/// How [`ContainerTester::expect_contents`] compares contents.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ContentsOrdering {
    /// Compare as multisets: cardinality matters, order does not.
    #[default]
    IgnoringOrder,
    /// Compare as sequences. Used by list testers, where the expected
    /// contents are given in iteration order.
    InOrder,
}

/// An array of sample elements in which one element appears twice.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ArrayWithDuplicate<E> {
    /// The elements, including both copies of the duplicate.
    pub elements: Vec<E>,
    /// The duplicated element.
    pub duplicate: E,
}

/// An element type with a distinguished null value.
///
/// Containers of these element types can be checked for their handling of
/// the null element, gated on [`Feature::AllowsNullValues`] and
/// [`Feature::AllowsNullQueries`].
///
/// [`Feature::AllowsNullValues`]: crate::Feature::AllowsNullValues
/// [`Feature::AllowsNullQueries`]: crate::Feature::AllowsNullQueries
pub trait NullElement {
    /// Returns the null value.
    fn null() -> Self;

    /// Returns true if `self` is the null value.
    fn is_null(&self) -> bool;
}

impl<T> NullElement for Option<T> {
    fn null() -> Self {
        None
    }

    fn is_null(&self) -> bool {
        self.is_none()
    }
}

/// The shared base of all tester cases.
pub struct ContainerTester<'g, G: TestContainerGenerator> {
    generator: OneSizeTestContainerGenerator<'g, G>,
    samples: SampleElements<G::Element>,
    container: G::Container,
    ordering: ContentsOrdering,
}

impl<'g, G: TestContainerGenerator> ContainerTester<'g, G> {
    /// Sets up a tester: fetches the samples from `generator` and creates
    /// the first container under test.
    pub fn new(generator: OneSizeTestContainerGenerator<'g, G>) -> Self {
        let samples = generator.samples();
        let container = generator.create_test_subject();
        Self {
            generator,
            samples,
            container,
            ordering: ContentsOrdering::default(),
        }
    }

    /// Sets how [`expect_contents`](Self::expect_contents) compares.
    pub fn with_ordering(self, ordering: ContentsOrdering) -> Self {
        Self { ordering, ..self }
    }

    /// Returns how [`expect_contents`](Self::expect_contents) compares.
    #[inline]
    pub fn ordering(&self) -> ContentsOrdering {
        self.ordering
    }

    /// Returns the generator containers are created with.
    #[inline]
    pub fn generator(&self) -> &OneSizeTestContainerGenerator<'g, G> {
        &self.generator
    }

    /// Returns the sample elements.
    #[inline]
    pub fn samples(&self) -> &SampleElements<G::Element> {
        &self.samples
    }

    /// Returns the container under test.
    #[inline]
    pub fn container(&self) -> &G::Container {
        &self.container
    }

    /// Returns the container under test, mutably.
    #[inline]
    pub fn container_mut(&mut self) -> &mut G::Container {
        &mut self.container
    }

    /// Returns the contents of the container under test, in iteration
    /// order. This is what the `expect_*` assertions check against.
    pub fn actual_contents(&self) -> Vec<G::Element> {
        self.container.contents()
    }

    /// Replaces the container under test with a new one created by the
    /// generator.
    pub fn reset_container(&mut self) -> &mut G::Container {
        let container = self.generator.create_test_subject();
        self.reset_container_with(container)
    }

    /// Replaces the container under test with `new_value`.
    ///
    /// This lets a single tester case work with several containers while
    /// still using the `expect_*` assertions.
    pub fn reset_container_with(
        &mut self,
        new_value: G::Container,
    ) -> &mut G::Container {
        self.container = new_value;
        &mut self.container
    }

    /// Checks that the container holds exactly `expected`.
    ///
    /// With [`ContentsOrdering::IgnoringOrder`] (the default), cardinality is
    /// respected but order is not. With [`ContentsOrdering::InOrder`], the
    /// contents must match `expected` element by element.
    pub fn expect_contents(&self, expected: &[G::Element]) -> CheckResult {
        let actual = self.actual_contents();
        match self.ordering {
            ContentsOrdering::IgnoringOrder => {
                check_equal_ignoring_order(expected, &actual)
            }
            ContentsOrdering::InOrder => {
                check_equal_in_order(expected, &actual)
            }
        }
    }

    /// Checks that the container holds exactly the elements it was created
    /// with.
    pub fn expect_unchanged(&self) -> CheckResult {
        self.expect_contents(&self.sample_elements())
    }

    /// Checks that the container holds the elements it was created with,
    /// plus `elements`.
    ///
    /// For the default comparison, this means that each of `elements` now
    /// occurs once more than it did, and every other element occurs as often
    /// as before. Adding an already-present element to a set and then calling
    /// `expect_added` with it therefore fails, since the set did not change.
    pub fn expect_added(&self, elements: &[G::Element]) -> CheckResult {
        let mut expected = self.sample_elements();
        expected.extend(copy_to_vec(elements));
        self.expect_contents(&expected)
    }

    /// Checks that the container holds the elements it was created with,
    /// with `elements` inserted at `index`.
    pub fn expect_added_at(
        &self,
        index: usize,
        elements: &[G::Element],
    ) -> CheckResult {
        let mut expected = self.sample_elements();
        if index > expected.len() {
            return Err(AssertionFailure::general(format!(
                "insertion index {index} is past the end of {} elements",
                expected.len()
            )));
        }
        expected.splice(index..index, copy_to_vec(elements));
        self.expect_contents(&expected)
    }

    /// Checks that the container holds none of `elements`.
    ///
    /// This scans [`actual_contents`](Self::actual_contents) rather than
    /// calling the container's own `contains`.
    pub fn expect_missing(&self, elements: &[G::Element]) -> CheckResult {
        let actual = self.actual_contents();
        for element in elements {
            if actual.contains(element) {
                return Err(AssertionFailure::UnexpectedlyPresent {
                    element: format!("{element:?}"),
                });
            }
        }
        Ok(())
    }

    /// Returns a new array holding the elements the container was created
    /// with.
    pub fn create_samples_array(&self) -> Vec<G::Element> {
        self.sample_elements()
    }

    /// Returns an array of the proper size in which one element appears
    /// twice.
    ///
    /// The element at `len / 2 - 1` is copied over the one at `len / 2 + 1`,
    /// so at least three elements are required.
    pub fn create_array_with_duplicate_element(
        &self,
    ) -> Result<ArrayWithDuplicate<G::Element>, TooFewElements> {
        let mut elements = self.create_samples_array();
        let len = elements.len();
        if len < 3 {
            return Err(TooFewElements { required: 3, actual: len });
        }
        let duplicate = elements[len / 2 - 1].clone();
        elements[len / 2 + 1] = duplicate.clone();
        Ok(ArrayWithDuplicate { elements, duplicate })
    }

    /// Returns the number of elements the container was created with.
    #[inline]
    pub fn num_elements(&self) -> usize {
        self.generator.num_elements()
    }

    /// Returns the first `how_many` samples.
    pub fn sample_elements_n(
        &self,
        how_many: usize,
    ) -> Result<Vec<G::Element>, SizeError> {
        self.generator.sample_elements(how_many)
    }

    /// Returns the elements the container was created with, in insertion
    /// order.
    pub fn sample_elements(&self) -> Vec<G::Element> {
        self.samples.iter().take(self.num_elements()).cloned().collect()
    }

    /// Returns the elements the container was created with, in the order the
    /// generator declares for iteration.
    pub fn ordered_elements(&self) -> Vec<G::Element> {
        self.generator.order(self.sample_elements())
    }

    /// Returns the index at which a null element is placed when
    /// initializing containers for tests that involve one.
    #[inline]
    pub fn null_location(&self) -> usize {
        self.num_elements() / 2
    }

    /// Returns a collection of samples that are never in the container.
    pub fn create_disjoint_collection(&self) -> MinimalCollection<G::Element> {
        MinimalCollection::of([
            self.samples.e3.clone(),
            self.samples.e4.clone(),
        ])
    }

    /// Returns an empty collection.
    pub fn empty_collection(&self) -> MinimalCollection<G::Element> {
        MinimalCollection::empty()
    }

    /// Replaces the container under test with one created from the samples,
    /// with the element at [`null_location`](Self::null_location) replaced
    /// by null.
    pub fn initialize_with_null_element(
        &mut self,
    ) -> Result<&mut G::Container, TooFewElements>
    where
        G::Element: NullElement,
    {
        let mut array = self.create_samples_array();
        let location = self.null_location();
        match array.get_mut(location) {
            Some(slot) => *slot = G::Element::null(),
            None => {
                return Err(TooFewElements { required: 1, actual: array.len() })
            }
        }
        let container = self.generator.create(array);
        Ok(self.reset_container_with(container))
    }
}
