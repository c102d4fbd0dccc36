// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Conformance test suites for collections, sets, lists and maps.
//!
//! # Motivation
//!
//! Every implementation of a collection-like type should behave the same way
//! for the same operations: `add` of an absent element grows the container by
//! one, `remove` of a present element shrinks it, a set never holds an
//! element twice, and so on. Writing these checks by hand for each
//! implementation is tedious and easy to get subtly wrong.
//!
//! This crate provides the checks once. An implementation plugs in through
//! two traits:
//!
//! - [`TestContainer`], the view of the container the checks operate on.
//!   Mutating operations are optional and return [`UnsupportedOperation`]
//!   unless implemented.
//! - [`TestContainerGenerator`], which creates containers from sample
//!   elements.
//!
//! A [`SuiteBuilder`] then combines a generator with the [`Feature`]s the
//! container supports and the [`CollectionSize`]s to test at, and runs every
//! tester case whose requirements match.
//!
//! # Examples
//!
//! ```
//! use contest::{
//!     CollectionSize, Feature, FromIteratorGenerator, SampleElements,
//!     SuiteBuilder,
//! };
//! use std::collections::BTreeSet;
//!
//! let suite = SuiteBuilder::set()
//!     .named("BTreeSet<char>")
//!     .using(
//!         FromIteratorGenerator::<BTreeSet<char>, _>::new(
//!             SampleElements::chars(),
//!         )
//!         .sorted(),
//!     )
//!     .with_features([Feature::GeneralPurpose, Feature::KnownOrder])
//!     .with_sizes([CollectionSize::Any])
//!     .build()
//!     .expect("suite is valid");
//!
//! let report = suite.run();
//! assert!(report.is_success(), "{report}");
//! ```
//!
//! # Writing tester cases
//!
//! A tester case is a function over a [`ContainerTester`], which holds a
//! freshly created container along with the sample elements, and provides
//! assertions such as [`expect_added`] and [`expect_unchanged`]. Checks
//! return [`CheckResult`]; the [`ensure!`] and [`ensure_eq!`] macros are the
//! `Result`-returning counterparts of `assert!` and `assert_eq!`.
//!
//! ```
//! use contest::{
//!     CollectionSize, ContainerTester, Feature, FromIteratorGenerator,
//!     SampleElements, SuiteBuilder, TestContainer, TestContainerGenerator,
//!     TesterCase, ensure, errors::CheckResult,
//! };
//!
//! fn add_twice<G: TestContainerGenerator>(
//!     tester: &mut ContainerTester<'_, G>,
//! ) -> CheckResult {
//!     let e3 = tester.samples().e3.clone();
//!     ensure!(tester.container_mut().add(e3.clone())?);
//!     ensure!(tester.container_mut().add(e3.clone())?);
//!     tester.expect_added(&[e3.clone(), e3])
//! }
//!
//! let report = SuiteBuilder::new()
//!     .named("Vec<i32>")
//!     .using(FromIteratorGenerator::<Vec<i32>, _>::new(
//!         SampleElements::ints(),
//!     ))
//!     .with_features([Feature::SupportsAdd])
//!     .with_sizes([CollectionSize::Any])
//!     .with_testers([TesterCase::new("multiset_add", "add_twice", add_twice)
//!         .requires(Feature::SupportsAdd)])
//!     .build()
//!     .unwrap()
//!     .run();
//! assert_eq!(report.total(), 3);
//! report.assert_success();
//! ```
//!
//! # Optional features
//!
//! - `hashbrown`: [`TestContainer`] implementations for `hashbrown`'s
//!   `HashSet` and `HashMap`.
//! - `proptest`: strategies for randomized sample elements, and `Arbitrary`
//!   implementations for [`CollectionSize`], [`Feature`] and [`FeatureSet`].
//!
//! [`UnsupportedOperation`]: errors::UnsupportedOperation
//! [`CheckResult`]: errors::CheckResult
//! [`expect_added`]: ContainerTester::expect_added
//! [`expect_unchanged`]: ContainerTester::expect_unchanged

#![cfg_attr(doc_cfg, feature(doc_auto_cfg))]
#![warn(missing_docs)]

pub mod container;
pub mod errors;
pub mod features;
pub mod generator;
pub mod helpers;
mod macros;
pub mod minimal;
#[cfg(feature = "proptest")]
pub mod proptest_impls;
pub mod requirements;
pub mod samples;
pub mod size;
pub mod suite;
mod support;
pub mod tester;
pub mod testers;

pub use container::TestContainer;
pub use features::{Feature, FeatureSet};
pub use generator::{
    FromIteratorGenerator, OneSizeTestContainerGenerator,
    TestContainerGenerator,
};
pub use minimal::MinimalCollection;
pub use requirements::{Requirements, TesterCase, TesterFn};
pub use samples::SampleElements;
pub use size::CollectionSize;
pub use suite::{
    CaseOutcome, CaseResult, ConformanceReport, ConformanceSuite, PlannedCase,
    SuiteBuilder, SuitePlan,
};
pub use tester::{
    ArrayWithDuplicate, ContainerTester, ContentsOrdering, NullElement,
};
