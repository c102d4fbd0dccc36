// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The view of a container that conformance suites operate on.
//!
//! For more information, see [`TestContainer`].

#[cfg(feature = "hashbrown")]
mod hashbrown_impls;
mod std_impls;
pub(crate) mod trait_defs;

pub use trait_defs::TestContainer;
