// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Macros for this crate.

/// Returns early with an [`AssertionFailure`] if a condition does not hold.
///
/// This is the `Result`-returning counterpart of [`assert!`], for use within
/// tester cases and other functions returning a [`CheckResult`].
///
/// # Examples
///
/// ```
/// use contest::{ensure, errors::CheckResult};
///
/// fn check_small(len: usize) -> CheckResult {
///     ensure!(len < 4, "expected a small container, got {len} elements");
///     Ok(())
/// }
///
/// assert!(check_small(3).is_ok());
/// assert!(check_small(4).is_err());
/// ```
///
/// [`AssertionFailure`]: crate::errors::AssertionFailure
/// [`CheckResult`]: crate::errors::CheckResult
#[macro_export]
macro_rules! ensure {
    ($cond:expr $(,)?) => {
        if !$cond {
            return ::core::result::Result::Err(
                $crate::errors::AssertionFailure::general(concat!(
                    "condition failed: ",
                    stringify!($cond)
                )),
            );
        }
    };
    ($cond:expr, $($arg:tt)+) => {
        if !$cond {
            return ::core::result::Result::Err(
                $crate::errors::AssertionFailure::general(format!($($arg)+)),
            );
        }
    };
}

/// Returns early with an [`AssertionFailure`] if two values are not equal.
///
/// The failure message includes both values' `Debug` representations,
/// followed by the optional formatted message.
///
/// [`AssertionFailure`]: crate::errors::AssertionFailure
#[macro_export]
macro_rules! ensure_eq {
    ($left:expr, $right:expr $(,)?) => {
        match (&$left, &$right) {
            (left, right) => {
                if !(*left == *right) {
                    return ::core::result::Result::Err(
                        $crate::errors::AssertionFailure::general(format!(
                            "left == right failed: left = {:?}, right = {:?}",
                            left, right
                        )),
                    );
                }
            }
        }
    };
    ($left:expr, $right:expr, $($arg:tt)+) => {
        match (&$left, &$right) {
            (left, right) => {
                if !(*left == *right) {
                    return ::core::result::Result::Err(
                        $crate::errors::AssertionFailure::general(format!(
                            "{}: left = {:?}, right = {:?}",
                            format_args!($($arg)+),
                            left,
                            right
                        )),
                    );
                }
            }
        }
    };
}
