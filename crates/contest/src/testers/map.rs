// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Checks specific to maps, whose elements are `(key, value)` entries.
//!
//! Sample entries must have distinct keys and distinct values.

use super::expect_unsupported;
use crate::{
    container::TestContainer, errors::CheckResult, features::Feature,
    generator::TestContainerGenerator, requirements::TesterCase,
    size::CollectionSize, tester::ContainerTester,
};
use std::fmt;

/// Returns the checks specific to maps.
pub fn map_testers<G, K, V>() -> Vec<TesterCase<G>>
where
    G: TestContainerGenerator<Element = (K, V)>,
    K: Clone + PartialEq + fmt::Debug,
    V: Clone + PartialEq + fmt::Debug,
{
    use CollectionSize::Zero;
    use Feature::{SupportsAdd, SupportsRemove};

    vec![
        TesterCase::new("map_put", "new_key", put_new_key::<G, K, V>)
            .requires(SupportsAdd),
        TesterCase::new("map_put", "existing_key", put_existing_key::<G, K, V>)
            .requires(SupportsAdd)
            .requires_absent_size(Zero),
        TesterCase::new(
            "map_put",
            "unsupported_existing_key",
            put_unsupported::<G, K, V>,
        )
        .requires_absent(SupportsAdd)
        .requires_absent_size(Zero),
        TesterCase::new(
            "map_remove",
            "present_entry",
            remove_present::<G, K, V>,
        )
        .requires(SupportsRemove)
        .requires_absent_size(Zero),
        TesterCase::new(
            "map_remove",
            "key_with_other_value",
            remove_mismatched::<G, K, V>,
        )
        .requires(SupportsRemove)
        .requires_absent_size(Zero),
    ]
}

/// Returns an entry with the key of `e0` and the value of `e3`.
fn replacement_entry<G, K, V>(tester: &ContainerTester<'_, G>) -> (K, V)
where
    G: TestContainerGenerator<Element = (K, V)>,
    K: Clone,
    V: Clone,
{
    let samples = tester.samples();
    (samples.e0.0.clone(), samples.e3.1.clone())
}

fn put_new_key<G, K, V>(tester: &mut ContainerTester<'_, G>) -> CheckResult
where
    G: TestContainerGenerator<Element = (K, V)>,
    K: Clone + PartialEq + fmt::Debug,
    V: Clone + PartialEq + fmt::Debug,
{
    let e3 = tester.samples().e3.clone();
    crate::ensure!(
        tester.container_mut().add(e3.clone())?,
        "put(new key) should change the map"
    );
    tester.expect_added(&[e3])
}

fn put_existing_key<G, K, V>(
    tester: &mut ContainerTester<'_, G>,
) -> CheckResult
where
    G: TestContainerGenerator<Element = (K, V)>,
    K: Clone + PartialEq + fmt::Debug,
    V: Clone + PartialEq + fmt::Debug,
{
    let e0 = tester.samples().e0.clone();
    let entry = replacement_entry(tester);
    crate::ensure!(
        tester.container_mut().add(entry.clone())?,
        "put(existing key, new value) should change the map"
    );

    let mut expected = tester.sample_elements();
    expected[0] = entry;
    tester.expect_contents(&expected)?;
    tester.expect_missing(&[e0])
}

fn put_unsupported<G, K, V>(
    tester: &mut ContainerTester<'_, G>,
) -> CheckResult
where
    G: TestContainerGenerator<Element = (K, V)>,
    K: Clone + PartialEq + fmt::Debug,
    V: Clone + PartialEq + fmt::Debug,
{
    let entry = replacement_entry(tester);
    expect_unsupported(
        tester.container_mut().add(entry),
        "put(existing key, new value)",
    )?;
    tester.expect_unchanged()
}

fn remove_present<G, K, V>(
    tester: &mut ContainerTester<'_, G>,
) -> CheckResult
where
    G: TestContainerGenerator<Element = (K, V)>,
    K: Clone + PartialEq + fmt::Debug,
    V: Clone + PartialEq + fmt::Debug,
{
    let e0 = tester.samples().e0.clone();
    crate::ensure!(
        tester.container_mut().remove(&e0)?,
        "remove(present entry) should return true"
    );
    let key = &e0.0;
    crate::ensure!(
        !tester.actual_contents().iter().any(|(k, _)| k == key),
        "key {key:?} should be gone after removing its entry"
    );
    tester.expect_contents(&tester.sample_elements()[1..])
}

fn remove_mismatched<G, K, V>(
    tester: &mut ContainerTester<'_, G>,
) -> CheckResult
where
    G: TestContainerGenerator<Element = (K, V)>,
    K: Clone + PartialEq + fmt::Debug,
    V: Clone + PartialEq + fmt::Debug,
{
    let entry = replacement_entry(tester);
    crate::ensure!(
        !tester.container_mut().remove(&entry)?,
        "remove(key, other value) should return false"
    );
    tester.expect_unchanged()
}
