// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Random operations against the standard library's sets, checked against a
//! naive oracle. This validates the `TestContainer` implementations that the
//! suites themselves rely on.

use contest::{helpers::check_equal_ignoring_order, TestContainer};
use contest_test_utils::{
    naive_set::{NaiveSet, Operation},
    test_element::TestElement,
};
use proptest::prelude::*;
use rustc_hash::FxBuildHasher;
use std::collections::{BTreeSet, HashSet};
use test_strategy::proptest;

const OP_LEN: usize = 256;

fn check_against_oracle<C>(mut container: C, ops: Vec<Operation>)
where
    C: TestContainer<Element = TestElement>,
{
    let mut naive = NaiveSet::new();
    for op in ops {
        let result = op.apply_to(&mut container).expect("operation supported");
        let naive_result = naive.apply(&op);
        assert_eq!(result, naive_result, "{op:?}");

        assert_eq!(container.len(), naive.elements().len());
        check_equal_ignoring_order(naive.elements(), &container.contents())
            .unwrap_or_else(|error| panic!("after {op:?}: {error}"));
    }
}

#[proptest(cases = 16)]
fn proptest_ops_hash_set(
    #[strategy(prop::collection::vec(any::<Operation>(), 0..OP_LEN))] ops: Vec<
        Operation,
    >,
) {
    check_against_oracle(HashSet::<TestElement, FxBuildHasher>::default(), ops);
}

#[proptest(cases = 16)]
fn proptest_ops_btree_set(
    #[strategy(prop::collection::vec(any::<Operation>(), 0..OP_LEN))] ops: Vec<
        Operation,
    >,
) {
    check_against_oracle(BTreeSet::<TestElement>::new(), ops);
}

#[cfg(feature = "hashbrown")]
#[proptest(cases = 16)]
fn proptest_ops_hashbrown_set(
    #[strategy(prop::collection::vec(any::<Operation>(), 0..OP_LEN))] ops: Vec<
        Operation,
    >,
) {
    check_against_oracle(
        hashbrown::HashSet::<TestElement, foldhash::fast::RandomState>::default(
        ),
        ops,
    );
}
