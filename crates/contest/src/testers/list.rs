// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Checks specific to lists: elements keep their positions, and duplicates
//! are allowed.
//!
//! These cases compare contents in order, so suites running them should use
//! [`ContentsOrdering::InOrder`]. [`SuiteBuilder::list`] does so.
//!
//! [`ContentsOrdering::InOrder`]: crate::ContentsOrdering::InOrder
//! [`SuiteBuilder::list`]: crate::SuiteBuilder::list

use super::expect_unsupported;
use crate::{
    container::TestContainer, errors::CheckResult, features::Feature,
    generator::TestContainerGenerator, helpers::check_equal_in_order,
    requirements::TesterCase, size::CollectionSize, tester::ContainerTester,
};

/// Returns the checks specific to lists.
pub fn list_testers<G: TestContainerGenerator>() -> Vec<TesterCase<G>> {
    use CollectionSize::{Several, Zero};
    use Feature::{
        SupportsAdd, SupportsAddWithIndex, SupportsRemoveWithIndex, SupportsSet,
    };

    vec![
        TesterCase::new("list_add", "supported_appends", add_appends)
            .requires(SupportsAdd),
        TesterCase::new("list_add", "supported_present", add_present)
            .requires(SupportsAdd)
            .requires_absent_size(Zero),
        TesterCase::new("list_add_at_index", "front", insert_front)
            .requires(SupportsAddWithIndex),
        TesterCase::new("list_add_at_index", "middle", insert_middle)
            .requires(SupportsAddWithIndex),
        TesterCase::new("list_add_at_index", "end", insert_end)
            .requires(SupportsAddWithIndex),
        TesterCase::new("list_add_at_index", "unsupported", insert_unsupported)
            .requires_absent(SupportsAddWithIndex),
        TesterCase::new("list_set", "middle", set_middle)
            .requires(SupportsSet)
            .requires_absent_size(Zero),
        TesterCase::new("list_set", "unsupported", set_unsupported)
            .requires_absent(SupportsSet)
            .requires_absent_size(Zero),
        TesterCase::new("list_remove_at_index", "middle", remove_at_middle)
            .requires(SupportsRemoveWithIndex)
            .requires_absent_size(Zero),
        TesterCase::new(
            "list_remove_at_index",
            "unsupported",
            remove_at_unsupported,
        )
        .requires_absent(SupportsRemoveWithIndex)
        .requires_absent_size(Zero),
        TesterCase::new(
            "list_creation",
            "with_duplicates",
            create_with_duplicates,
        )
        .requires_size(Several),
        TesterCase::new("list_iteration", "insertion_order", insertion_order),
    ]
}

fn add_appends<G: TestContainerGenerator>(
    tester: &mut ContainerTester<'_, G>,
) -> CheckResult {
    let e3 = tester.samples().e3.clone();
    crate::ensure!(
        tester.container_mut().add(e3.clone())?,
        "add should always return true for a list"
    );
    tester.expect_added_at(tester.num_elements(), &[e3])
}

fn add_present<G: TestContainerGenerator>(
    tester: &mut ContainerTester<'_, G>,
) -> CheckResult {
    let e0 = tester.samples().e0.clone();
    crate::ensure!(
        tester.container_mut().add(e0.clone())?,
        "add(present) should return true for a list"
    );
    tester.expect_added(&[e0])
}

fn insert_at<G: TestContainerGenerator>(
    tester: &mut ContainerTester<'_, G>,
    index: usize,
) -> CheckResult {
    let e3 = tester.samples().e3.clone();
    tester.container_mut().insert_at(index, e3.clone())?;
    tester.expect_added_at(index, &[e3])
}

fn insert_front<G: TestContainerGenerator>(
    tester: &mut ContainerTester<'_, G>,
) -> CheckResult {
    insert_at(tester, 0)
}

fn insert_middle<G: TestContainerGenerator>(
    tester: &mut ContainerTester<'_, G>,
) -> CheckResult {
    let index = tester.num_elements() / 2;
    insert_at(tester, index)
}

fn insert_end<G: TestContainerGenerator>(
    tester: &mut ContainerTester<'_, G>,
) -> CheckResult {
    let index = tester.num_elements();
    insert_at(tester, index)
}

fn insert_unsupported<G: TestContainerGenerator>(
    tester: &mut ContainerTester<'_, G>,
) -> CheckResult {
    let e3 = tester.samples().e3.clone();
    expect_unsupported(
        tester.container_mut().insert_at(0, e3.clone()),
        "insert_at(0, absent)",
    )?;
    tester.expect_unchanged()?;
    tester.expect_missing(&[e3])
}

fn set_middle<G: TestContainerGenerator>(
    tester: &mut ContainerTester<'_, G>,
) -> CheckResult {
    let index = tester.num_elements() / 2;
    let e3 = tester.samples().e3.clone();
    let mut expected = tester.sample_elements();
    let previous = std::mem::replace(&mut expected[index], e3.clone());

    let returned = tester.container_mut().set_at(index, e3)?;
    crate::ensure_eq!(
        returned,
        previous,
        "set_at({index}) should return the previous element"
    );
    tester.expect_contents(&expected)
}

fn set_unsupported<G: TestContainerGenerator>(
    tester: &mut ContainerTester<'_, G>,
) -> CheckResult {
    let e3 = tester.samples().e3.clone();
    expect_unsupported(tester.container_mut().set_at(0, e3), "set_at(0)")?;
    tester.expect_unchanged()
}

fn remove_at_middle<G: TestContainerGenerator>(
    tester: &mut ContainerTester<'_, G>,
) -> CheckResult {
    let index = tester.num_elements() / 2;
    let mut expected = tester.sample_elements();
    let previous = expected.remove(index);

    let removed = tester.container_mut().remove_at(index)?;
    crate::ensure_eq!(
        removed,
        previous,
        "remove_at({index}) should return the removed element"
    );
    tester.expect_contents(&expected)
}

fn remove_at_unsupported<G: TestContainerGenerator>(
    tester: &mut ContainerTester<'_, G>,
) -> CheckResult {
    expect_unsupported(tester.container_mut().remove_at(0), "remove_at(0)")?;
    tester.expect_unchanged()
}

fn create_with_duplicates<G: TestContainerGenerator>(
    tester: &mut ContainerTester<'_, G>,
) -> CheckResult {
    let array = tester.create_array_with_duplicate_element()?;
    let container = tester.generator().create(array.elements.clone());
    tester.reset_container_with(container);
    tester.expect_contents(&array.elements)
}

fn insertion_order<G: TestContainerGenerator>(
    tester: &mut ContainerTester<'_, G>,
) -> CheckResult {
    check_equal_in_order(&tester.sample_elements(), &tester.actual_contents())
}
