// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Checks that hold for every container family.

use super::{expect_no_change_reported, expect_unsupported};
use crate::{
    container::TestContainer,
    errors::CheckResult,
    features::Feature,
    generator::TestContainerGenerator,
    helpers::{check_empty, check_equal_in_order},
    requirements::TesterCase,
    size::CollectionSize,
    tester::ContainerTester,
};

/// Returns the checks that hold for every container family.
pub fn collection_testers<G: TestContainerGenerator>() -> Vec<TesterCase<G>> {
    use CollectionSize::Zero;
    use Feature::{KnownOrder, SupportsAdd, SupportsRemove};

    vec![
        TesterCase::new("collection_size", "len", len),
        TesterCase::new("collection_is_empty", "empty", is_empty_yes)
            .requires_size(Zero),
        TesterCase::new("collection_is_empty", "not_empty", is_empty_no)
            .requires_absent_size(Zero),
        TesterCase::new("collection_contains", "present", contains_present)
            .requires_absent_size(Zero),
        TesterCase::new("collection_contains", "each_sample", contains_each),
        TesterCase::new("collection_contains", "not_present", contains_absent),
        TesterCase::new("collection_contains", "disjoint", contains_disjoint),
        TesterCase::new("collection_iteration", "contents", iteration),
        TesterCase::new("collection_iteration", "known_order", known_order)
            .requires(KnownOrder),
        TesterCase::new("collection_add", "supported_not_present", add_new)
            .requires(SupportsAdd),
        TesterCase::new(
            "collection_add",
            "unsupported_not_present",
            add_new_unsupported,
        )
        .requires_absent(SupportsAdd),
        TesterCase::new(
            "collection_add",
            "unsupported_present",
            add_present_unsupported,
        )
        .requires_absent(SupportsAdd)
        .requires_absent_size(Zero),
        TesterCase::new(
            "collection_add_all",
            "supported_disjoint",
            add_all_disjoint,
        )
        .requires(SupportsAdd),
        TesterCase::new("collection_add_all", "supported_empty", add_all_empty)
            .requires(SupportsAdd),
        TesterCase::new(
            "collection_add_all",
            "unsupported_disjoint",
            add_all_disjoint_unsupported,
        )
        .requires_absent(SupportsAdd),
        TesterCase::new(
            "collection_add_all",
            "unsupported_empty",
            add_all_empty_unsupported,
        )
        .requires_absent(SupportsAdd),
        TesterCase::new("collection_remove", "present", remove_present)
            .requires(SupportsRemove)
            .requires_absent_size(Zero),
        TesterCase::new("collection_remove", "not_present", remove_absent)
            .requires(SupportsRemove),
        TesterCase::new(
            "collection_remove",
            "unsupported_present",
            remove_present_unsupported,
        )
        .requires_absent(SupportsRemove)
        .requires_absent_size(Zero),
        TesterCase::new(
            "collection_remove",
            "unsupported_not_present",
            remove_absent_unsupported,
        )
        .requires_absent(SupportsRemove),
        TesterCase::new("collection_clear", "supported", clear)
            .requires(SupportsRemove),
        TesterCase::new("collection_clear", "unsupported", clear_unsupported)
            .requires_absent(SupportsRemove)
            .requires_absent_size(Zero),
    ]
}

fn len<G: TestContainerGenerator>(
    tester: &mut ContainerTester<'_, G>,
) -> CheckResult {
    crate::ensure_eq!(
        tester.container().len(),
        tester.num_elements(),
        "len() should match the number of elements created"
    );
    Ok(())
}

fn is_empty_yes<G: TestContainerGenerator>(
    tester: &mut ContainerTester<'_, G>,
) -> CheckResult {
    crate::ensure!(
        tester.container().is_empty(),
        "is_empty() should return true"
    );
    check_empty(&tester.actual_contents())
}

fn is_empty_no<G: TestContainerGenerator>(
    tester: &mut ContainerTester<'_, G>,
) -> CheckResult {
    crate::ensure!(
        !tester.container().is_empty(),
        "is_empty() should return false"
    );
    Ok(())
}

fn contains_present<G: TestContainerGenerator>(
    tester: &mut ContainerTester<'_, G>,
) -> CheckResult {
    let e0 = &tester.samples().e0;
    crate::ensure!(
        tester.container().contains(e0),
        "contains(present) should return true for {e0:?}"
    );
    Ok(())
}

fn contains_each<G: TestContainerGenerator>(
    tester: &mut ContainerTester<'_, G>,
) -> CheckResult {
    for element in tester.sample_elements() {
        crate::ensure!(
            tester.container().contains(&element),
            "contains() should return true for {element:?}"
        );
    }
    Ok(())
}

fn contains_absent<G: TestContainerGenerator>(
    tester: &mut ContainerTester<'_, G>,
) -> CheckResult {
    let e3 = &tester.samples().e3;
    crate::ensure!(
        !tester.container().contains(e3),
        "contains(absent) should return false for {e3:?}"
    );
    Ok(())
}

fn contains_disjoint<G: TestContainerGenerator>(
    tester: &mut ContainerTester<'_, G>,
) -> CheckResult {
    let disjoint = tester.create_disjoint_collection();
    tester.expect_missing(disjoint.as_slice())
}

fn iteration<G: TestContainerGenerator>(
    tester: &mut ContainerTester<'_, G>,
) -> CheckResult {
    let contents = tester.actual_contents();
    crate::ensure_eq!(
        contents.len(),
        tester.container().len(),
        "iteration should yield len() elements"
    );
    tester.expect_unchanged()
}

fn known_order<G: TestContainerGenerator>(
    tester: &mut ContainerTester<'_, G>,
) -> CheckResult {
    check_equal_in_order(&tester.ordered_elements(), &tester.actual_contents())
}

fn add_new<G: TestContainerGenerator>(
    tester: &mut ContainerTester<'_, G>,
) -> CheckResult {
    let e3 = tester.samples().e3.clone();
    crate::ensure!(
        tester.container_mut().add(e3.clone())?,
        "add(absent) should return true"
    );
    tester.expect_added(&[e3])
}

fn add_new_unsupported<G: TestContainerGenerator>(
    tester: &mut ContainerTester<'_, G>,
) -> CheckResult {
    let e3 = tester.samples().e3.clone();
    expect_unsupported(tester.container_mut().add(e3.clone()), "add(absent)")?;
    tester.expect_unchanged()?;
    tester.expect_missing(&[e3])
}

fn add_present_unsupported<G: TestContainerGenerator>(
    tester: &mut ContainerTester<'_, G>,
) -> CheckResult {
    let e0 = tester.samples().e0.clone();
    expect_no_change_reported(tester.container_mut().add(e0), "add(present)")?;
    tester.expect_unchanged()
}

fn add_all_disjoint<G: TestContainerGenerator>(
    tester: &mut ContainerTester<'_, G>,
) -> CheckResult {
    let disjoint = tester.create_disjoint_collection();
    crate::ensure!(
        tester.container_mut().add_all(disjoint.clone())?,
        "add_all(disjoint) should return true"
    );
    tester.expect_added(disjoint.as_slice())
}

fn add_all_empty<G: TestContainerGenerator>(
    tester: &mut ContainerTester<'_, G>,
) -> CheckResult {
    let empty = tester.empty_collection();
    crate::ensure!(
        !tester.container_mut().add_all(empty)?,
        "add_all(empty) should return false"
    );
    tester.expect_unchanged()
}

fn add_all_disjoint_unsupported<G: TestContainerGenerator>(
    tester: &mut ContainerTester<'_, G>,
) -> CheckResult {
    let disjoint = tester.create_disjoint_collection();
    expect_unsupported(
        tester.container_mut().add_all(disjoint.clone()),
        "add_all(disjoint)",
    )?;
    tester.expect_unchanged()?;
    tester.expect_missing(disjoint.as_slice())
}

fn add_all_empty_unsupported<G: TestContainerGenerator>(
    tester: &mut ContainerTester<'_, G>,
) -> CheckResult {
    let empty = tester.empty_collection();
    expect_no_change_reported(
        tester.container_mut().add_all(empty),
        "add_all(empty)",
    )?;
    tester.expect_unchanged()
}

fn remove_present<G: TestContainerGenerator>(
    tester: &mut ContainerTester<'_, G>,
) -> CheckResult {
    let e0 = tester.samples().e0.clone();
    crate::ensure!(
        tester.container_mut().remove(&e0)?,
        "remove(present) should return true"
    );
    let mut expected = tester.sample_elements();
    expected.remove(0);
    tester.expect_contents(&expected)?;
    tester.expect_missing(&[e0])
}

fn remove_absent<G: TestContainerGenerator>(
    tester: &mut ContainerTester<'_, G>,
) -> CheckResult {
    let e3 = tester.samples().e3.clone();
    crate::ensure!(
        !tester.container_mut().remove(&e3)?,
        "remove(absent) should return false"
    );
    tester.expect_unchanged()
}

fn remove_present_unsupported<G: TestContainerGenerator>(
    tester: &mut ContainerTester<'_, G>,
) -> CheckResult {
    let e0 = tester.samples().e0.clone();
    expect_unsupported(tester.container_mut().remove(&e0), "remove(present)")?;
    tester.expect_unchanged()
}

fn remove_absent_unsupported<G: TestContainerGenerator>(
    tester: &mut ContainerTester<'_, G>,
) -> CheckResult {
    let e3 = tester.samples().e3.clone();
    expect_no_change_reported(
        tester.container_mut().remove(&e3),
        "remove(absent)",
    )?;
    tester.expect_unchanged()
}

fn clear<G: TestContainerGenerator>(
    tester: &mut ContainerTester<'_, G>,
) -> CheckResult {
    tester.container_mut().clear()?;
    crate::ensure!(
        tester.container().is_empty(),
        "is_empty() should return true after clear()"
    );
    tester.expect_contents(&[])
}

fn clear_unsupported<G: TestContainerGenerator>(
    tester: &mut ContainerTester<'_, G>,
) -> CheckResult {
    expect_unsupported(tester.container_mut().clear(), "clear()")?;
    tester.expect_unchanged()
}
