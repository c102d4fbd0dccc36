// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use contest::{proptest_impls::sample_elements_strategy, SampleElements};
use proptest::prelude::*;
use test_strategy::Arbitrary;

#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Arbitrary)]
pub struct TestElement {
    // We use u8 and a narrow range of chars so that randomly generated
    // operations hit present elements often.
    pub key: u8,
    #[strategy(prop::char::range('a', 'd'))]
    pub tag: char,
}

impl TestElement {
    pub fn new(key: u8, tag: char) -> Self {
        Self { key, tag }
    }
}

/// Five distinct arbitrary elements.
pub fn test_samples() -> impl Strategy<Value = SampleElements<TestElement>> {
    sample_elements_strategy::<TestElement>()
}

/// Arbitrary sample entries for maps: distinct keys and distinct values.
pub fn test_entry_samples(
) -> impl Strategy<Value = SampleElements<(TestElement, u32)>> {
    (test_samples(), sample_elements_strategy::<u32>())
        .prop_map(|(keys, values)| SampleElements::entries(keys, values))
}
