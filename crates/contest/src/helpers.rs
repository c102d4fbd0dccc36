// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Content comparisons shared by all testers.
//!
//! Every function here relies only on `PartialEq`, so elements that are
//! neither hashable nor ordered can be compared.

use crate::errors::{AssertionFailure, CheckResult};
use std::fmt;

/// Checks that `actual` holds exactly the elements of `expected`, respecting
/// cardinality but not order.
///
/// # Examples
///
/// ```
/// use contest::helpers::check_equal_ignoring_order;
///
/// assert!(check_equal_ignoring_order(&[1, 2, 2], &[2, 1, 2]).is_ok());
/// assert!(check_equal_ignoring_order(&[1, 2, 2], &[2, 1, 1]).is_err());
/// ```
pub fn check_equal_ignoring_order<T>(
    expected: &[T],
    actual: &[T],
) -> CheckResult
where
    T: PartialEq + fmt::Debug,
{
    // Match each expected element against the first unmatched actual element
    // equal to it.
    let mut matched = vec![false; actual.len()];
    for element in expected {
        let found = actual
            .iter()
            .zip(matched.iter_mut())
            .find(|(candidate, taken)| !**taken && *candidate == element);
        match found {
            Some((_, taken)) => *taken = true,
            None => {
                return Err(AssertionFailure::missing(
                    element, expected, actual,
                ));
            }
        }
    }

    let unexpected: Vec<&T> = actual
        .iter()
        .zip(&matched)
        .filter_map(|(element, &taken)| (!taken).then_some(element))
        .collect();
    if unexpected.is_empty() {
        Ok(())
    } else {
        Err(AssertionFailure::unexpected(&unexpected, expected, actual))
    }
}

/// Checks that `actual` holds exactly the elements of `expected`, in the
/// same order.
pub fn check_equal_in_order<T>(expected: &[T], actual: &[T]) -> CheckResult
where
    T: PartialEq + fmt::Debug,
{
    if expected == actual {
        Ok(())
    } else {
        Err(AssertionFailure::OrderMismatch {
            expected: format!("{expected:?}"),
            actual: format!("{actual:?}"),
        })
    }
}

/// Checks that `actual` holds `element`.
pub fn check_contains<T>(actual: &[T], element: &T) -> CheckResult
where
    T: PartialEq + fmt::Debug,
{
    if actual.contains(element) {
        Ok(())
    } else {
        Err(AssertionFailure::missing(
            element,
            std::slice::from_ref(element),
            actual,
        ))
    }
}

/// Checks that `actual` is empty.
pub fn check_empty<T: fmt::Debug>(actual: &[T]) -> CheckResult {
    if actual.is_empty() {
        Ok(())
    } else {
        Err(AssertionFailure::general(format!(
            "Not true that {actual:?} is empty"
        )))
    }
}

/// Copies the elements of an iterator into a new vector.
pub fn copy_to_vec<'a, T, I>(elements: I) -> Vec<T>
where
    T: Clone + 'a,
    I: IntoIterator<Item = &'a T>,
{
    elements.into_iter().cloned().collect()
}
