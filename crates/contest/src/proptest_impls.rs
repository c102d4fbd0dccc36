// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Proptest strategies for running suites against randomized samples.

use crate::{
    features::{Feature, FeatureSet},
    samples::SampleElements,
    size::CollectionSize,
};
use proptest::{
    arbitrary::{any, Arbitrary},
    collection::btree_set,
    sample::{select, Select},
    strategy::{BoxedStrategy, Strategy},
};
use std::fmt;

/// Returns a strategy for sample elements made of five pairwise-distinct
/// arbitrary values.
///
/// The element type must have at least five distinct values.
///
/// # Examples
///
/// ```
/// use contest::proptest_impls::sample_elements_strategy;
/// use proptest::strategy::{Strategy, ValueTree};
/// use proptest::test_runner::TestRunner;
///
/// let mut runner = TestRunner::deterministic();
/// let samples = sample_elements_strategy::<u16>()
///     .new_tree(&mut runner)
///     .unwrap()
///     .current();
/// let values = samples.to_vec();
/// for (i, a) in values.iter().enumerate() {
///     assert!(!values[..i].contains(a));
/// }
/// ```
pub fn sample_elements_strategy<E>() -> impl Strategy<Value = SampleElements<E>>
where
    E: Arbitrary + Clone + PartialEq + fmt::Debug,
{
    sample_elements_from(any::<E>())
}

/// Returns a strategy for sample elements made of five pairwise-distinct
/// values drawn from `element`.
pub fn sample_elements_from<S>(
    element: S,
) -> impl Strategy<Value = SampleElements<S::Value>>
where
    S: Strategy,
    S::Value: Clone + PartialEq + fmt::Debug,
{
    proptest::array::uniform5(element).prop_filter_map(
        "sample elements must be distinct",
        |values| {
            let distinct = values
                .iter()
                .enumerate()
                .all(|(i, value)| !values[..i].contains(value));
            distinct.then(|| {
                let [e0, e1, e2, e3, e4] = values;
                SampleElements::new(e0, e1, e2, e3, e4)
            })
        },
    )
}

impl Arbitrary for CollectionSize {
    type Parameters = ();
    type Strategy = Select<CollectionSize>;

    fn arbitrary_with(_: ()) -> Self::Strategy {
        let mut sizes = CollectionSize::ALL_CONCRETE.to_vec();
        sizes.push(CollectionSize::Any);
        select(sizes)
    }
}

impl Arbitrary for Feature {
    type Parameters = ();
    type Strategy = Select<Feature>;

    fn arbitrary_with(_: ()) -> Self::Strategy {
        select(Feature::ALL.to_vec())
    }
}

impl Arbitrary for FeatureSet {
    type Parameters = ();
    type Strategy = BoxedStrategy<FeatureSet>;

    fn arbitrary_with(_: ()) -> Self::Strategy {
        btree_set(any::<Feature>(), 0..=Feature::ALL.len())
            .prop_map(FeatureSet::from_iter)
            .boxed()
    }
}
