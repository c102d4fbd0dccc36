// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Stock tester cases, grouped by container family.
//!
//! Each function returns the cases for one family, in registration order.
//! The [`SuiteBuilder`] family constructors combine them; they can also be
//! registered individually with [`SuiteBuilder::with_testers`].
//!
//! [`SuiteBuilder`]: crate::SuiteBuilder
//! [`SuiteBuilder::with_testers`]: crate::SuiteBuilder::with_testers

mod collection;
mod list;
mod map;
mod null;
mod set;

pub use collection::collection_testers;
pub use list::list_testers;
pub use map::map_testers;
pub use null::null_testers;
pub use set::set_testers;

use crate::errors::{AssertionFailure, CheckResult, UnsupportedOperation};
use std::fmt;

/// Checks that an operation the container does not declare was rejected.
fn expect_unsupported<T: fmt::Debug>(
    result: Result<T, UnsupportedOperation>,
    operation: &str,
) -> CheckResult {
    match result {
        Err(_) => Ok(()),
        Ok(value) => Err(AssertionFailure::general(format!(
            "{operation} should be unsupported, but returned {value:?}"
        ))),
    }
}

/// Checks that an operation which would not change the container either was
/// rejected or reported no change.
fn expect_no_change_reported(
    result: Result<bool, UnsupportedOperation>,
    operation: &str,
) -> CheckResult {
    match result {
        Ok(false) | Err(_) => Ok(()),
        Ok(true) => Err(AssertionFailure::general(format!(
            "{operation} should return false or be unsupported"
        ))),
    }
}
