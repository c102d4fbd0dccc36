// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Building, planning and running conformance suites.
//!
//! A suite combines one generator, the features its containers declare, and
//! the sizes to generate them at. Building the suite computes the matrix of
//! tester cases that apply:
//!
//! - for each concrete size, in the order `Zero`, `One`, `Several`,
//! - each registered case (in registration order) whose requirements are
//!   met by the declared features, including implied ones, at that size,
//! - minus the cases suppressed by name.
//!
//! Running the suite executes each case of the matrix against a fresh
//! [`ContainerTester`], catching panics, and collects the outcomes into a
//! [`ConformanceReport`].
//!
//! [`ContainerTester`]: crate::ContainerTester

mod builder;
mod plan;
mod report;

pub use builder::SuiteBuilder;
pub use plan::{ConformanceSuite, PlannedCase, SuitePlan};
pub use report::{CaseOutcome, CaseResult, ConformanceReport};
