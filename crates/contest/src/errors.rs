// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for this crate.
//!
//! [`AssertionFailure`] is what every check in the framework returns on
//! failure. The remaining types describe misuse of the framework itself:
//! asking for sizes or samples that do not exist, or declaring tester cases
//! and suites that cannot be satisfied.

use crate::{features::Feature, size::CollectionSize};
use std::fmt;

/// The result of a single check or tester case.
pub type CheckResult = Result<(), AssertionFailure>;

/// A conformance check did not hold.
///
/// Element values are captured through their `Debug` representation, so that
/// failures for any element type can be collected into one report.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AssertionFailure {
    /// An expected element was not found in the container.
    MissingElement {
        /// The element that was not found.
        element: String,
        /// The full expected contents.
        expected: String,
        /// The actual contents.
        actual: String,
    },

    /// The container held elements beyond the expected ones.
    UnexpectedElements {
        /// The elements left over after matching the expected ones.
        unexpected: String,
        /// The full expected contents.
        expected: String,
        /// The actual contents.
        actual: String,
    },

    /// The container held the expected elements, but not in the expected
    /// order.
    OrderMismatch {
        /// The expected contents, in order.
        expected: String,
        /// The actual contents, in iteration order.
        actual: String,
    },

    /// The container held an element that it should not.
    UnexpectedlyPresent {
        /// The element that was found.
        element: String,
    },

    /// An operation the check relied on is not supported by the container.
    Unsupported(UnsupportedOperation),

    /// Any other failure.
    General(String),
}

impl AssertionFailure {
    /// Creates a general failure from a message.
    pub fn general(msg: impl Into<String>) -> Self {
        AssertionFailure::General(msg.into())
    }

    pub(crate) fn missing<T: fmt::Debug>(
        element: &T,
        expected: &[T],
        actual: &[T],
    ) -> Self {
        AssertionFailure::MissingElement {
            element: format!("{element:?}"),
            expected: format!("{expected:?}"),
            actual: format!("{actual:?}"),
        }
    }

    pub(crate) fn unexpected<T: fmt::Debug>(
        unexpected: &[&T],
        expected: &[T],
        actual: &[T],
    ) -> Self {
        AssertionFailure::UnexpectedElements {
            unexpected: format!("{unexpected:?}"),
            expected: format!("{expected:?}"),
            actual: format!("{actual:?}"),
        }
    }
}

impl fmt::Display for AssertionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingElement { element, expected, actual } => write!(
                f,
                "did not contain expected element {element}, \
                 expected = {expected}, actual = {actual}"
            ),
            Self::UnexpectedElements { unexpected, expected, actual } => {
                write!(
                    f,
                    "unexpected elements: {unexpected}, \
                     expected = {expected}, actual = {actual}"
                )
            }
            Self::OrderMismatch { expected, actual } => write!(
                f,
                "contents in wrong order: expected = {expected}, \
                 actual = {actual}"
            ),
            Self::UnexpectedlyPresent { element } => {
                write!(f, "Should not contain {element}")
            }
            Self::Unsupported(error) => error.fmt(f),
            Self::General(msg) => msg.fmt(f),
        }
    }
}

impl std::error::Error for AssertionFailure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Unsupported(error) => Some(error),
            _ => None,
        }
    }
}

impl From<UnsupportedOperation> for AssertionFailure {
    fn from(error: UnsupportedOperation) -> Self {
        AssertionFailure::Unsupported(error)
    }
}

impl From<TooFewElements> for AssertionFailure {
    fn from(error: TooFewElements) -> Self {
        AssertionFailure::General(error.to_string())
    }
}

impl From<SizeError> for AssertionFailure {
    fn from(error: SizeError) -> Self {
        AssertionFailure::General(error.to_string())
    }
}

/// An optional container operation is not implemented.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct UnsupportedOperation {
    operation: &'static str,
}

impl UnsupportedOperation {
    /// Creates a new `UnsupportedOperation` for the named operation.
    pub const fn new(operation: &'static str) -> Self {
        Self { operation }
    }

    /// Returns the name of the unsupported operation.
    #[inline]
    pub fn operation(&self) -> &'static str {
        self.operation
    }
}

impl fmt::Display for UnsupportedOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "operation `{}` is not supported", self.operation)
    }
}

impl std::error::Error for UnsupportedOperation {}

/// A size or sample request that cannot be satisfied.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SizeError {
    /// [`CollectionSize::Any`] was used where a concrete size is needed.
    NotConcrete,

    /// More sample elements were requested than exist.
    TooManySamples {
        /// The number of samples requested.
        requested: usize,
        /// The number of samples available.
        available: usize,
    },
}

impl fmt::Display for SizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotConcrete => write!(
                f,
                "{:?} does not have a concrete number of elements",
                CollectionSize::Any
            ),
            Self::TooManySamples { requested, available } => write!(
                f,
                "requested {requested} sample elements, \
                 but only {available} are available"
            ),
        }
    }
}

impl std::error::Error for SizeError {}

/// The container under test is too small to build an array with a
/// duplicate element.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TooFewElements {
    /// The minimum number of elements needed.
    pub required: usize,
    /// The number of elements available.
    pub actual: usize,
}

impl fmt::Display for TooFewElements {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "at least {} elements are required, but the container has {}",
            self.required, self.actual
        )
    }
}

impl std::error::Error for TooFewElements {}

/// What a tester case both requires and forbids.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RequirementConflict {
    /// A feature is required (possibly through implication) and absent.
    Feature(Feature),
    /// A size is both required and absent.
    Size(CollectionSize),
}

/// A tester case declares requirements that can never be met.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConflictingRequirements {
    /// The fully-qualified name of the case (`group::name`).
    pub case: String,
    /// The conflicting requirement.
    pub conflict: RequirementConflict,
}

impl fmt::Display for ConflictingRequirements {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.conflict {
            RequirementConflict::Feature(feature) => write!(
                f,
                "tester case {} both requires and forbids feature {:?}",
                self.case, feature
            ),
            RequirementConflict::Size(size) => write!(
                f,
                "tester case {} both requires and forbids size {:?}",
                self.case, size
            ),
        }
    }
}

impl std::error::Error for ConflictingRequirements {}

/// A conformance suite could not be built.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SuiteBuildError {
    /// No name was given; call `named()`.
    MissingName,
    /// No generator was given; call `using()`.
    MissingGenerator,
    /// No sizes were given; call `with_sizes()`.
    MissingSizes,
    /// A registered tester case is unsatisfiable.
    Conflicting(ConflictingRequirements),
}

impl fmt::Display for SuiteBuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingName => {
                write!(f, "call named() before building the suite")
            }
            Self::MissingGenerator => {
                write!(f, "call using() before building the suite")
            }
            Self::MissingSizes => {
                write!(f, "call with_sizes() before building the suite")
            }
            Self::Conflicting(_) => {
                write!(f, "suite contains an unsatisfiable tester case")
            }
        }
    }
}

impl std::error::Error for SuiteBuildError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Conflicting(error) => Some(error),
            Self::MissingName | Self::MissingGenerator | Self::MissingSizes => {
                None
            }
        }
    }
}

impl From<ConflictingRequirements> for SuiteBuildError {
    fn from(error: ConflictingRequirements) -> Self {
        SuiteBuildError::Conflicting(error)
    }
}
