// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

mod builder;
mod faulty;
#[cfg(feature = "hashbrown")]
mod hashbrown_suites;
mod nulls;
mod ops;
mod plan_output;
mod random_samples;
mod std_suites;
