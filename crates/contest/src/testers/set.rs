// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Checks specific to sets.

use crate::{
    container::TestContainer, errors::CheckResult, features::Feature,
    generator::TestContainerGenerator, requirements::TesterCase,
    size::CollectionSize, tester::ContainerTester,
};

/// Returns the checks specific to sets: elements are unique.
pub fn set_testers<G: TestContainerGenerator>() -> Vec<TesterCase<G>> {
    vec![
        TesterCase::new("set_add", "supported_present", add_present)
            .requires(Feature::SupportsAdd)
            .requires_absent_size(CollectionSize::Zero),
        TesterCase::new(
            "set_creation",
            "with_duplicates",
            create_with_duplicates,
        )
        .requires_size(CollectionSize::Several),
    ]
}

fn add_present<G: TestContainerGenerator>(
    tester: &mut ContainerTester<'_, G>,
) -> CheckResult {
    let e0 = tester.samples().e0.clone();
    crate::ensure!(
        !tester.container_mut().add(e0)?,
        "add(present) should return false"
    );
    tester.expect_unchanged()
}

fn create_with_duplicates<G: TestContainerGenerator>(
    tester: &mut ContainerTester<'_, G>,
) -> CheckResult {
    let array = tester.create_array_with_duplicate_element()?;

    let mut expected = Vec::new();
    for element in &array.elements {
        if !expected.contains(element) {
            expected.push(element.clone());
        }
    }

    let container = tester.generator().create(array.elements);
    tester.reset_container_with(container);
    crate::ensure_eq!(
        tester.container().len(),
        expected.len(),
        "a set created with duplicate {:?} should hold it once",
        array.duplicate
    );
    tester.expect_contents(&expected)
}
