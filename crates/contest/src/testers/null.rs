// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Checks for containers whose element type has a null value.
//!
//! Sample elements must not be null.

use super::expect_no_change_reported;
use crate::{
    container::TestContainer, errors::CheckResult, features::Feature,
    generator::TestContainerGenerator, requirements::TesterCase,
    size::CollectionSize, tester::{ContainerTester, NullElement},
};

/// Returns the checks for handling of the null element.
pub fn null_testers<G>() -> Vec<TesterCase<G>>
where
    G: TestContainerGenerator,
    G::Element: NullElement,
{
    use Feature::{AllowsNullQueries, AllowsNullValues, SupportsAdd};

    vec![
        TesterCase::new("null", "contains_present", contains_null::<G>)
            .requires(AllowsNullValues)
            .requires_absent_size(CollectionSize::Zero),
        TesterCase::new("null", "contains_not_present", lacks_null::<G>)
            .requires(AllowsNullQueries),
        TesterCase::new("null", "add_supported", add_null::<G>)
            .requires(SupportsAdd)
            .requires(AllowsNullValues),
        TesterCase::new("null", "add_unsupported", add_null_rejected::<G>)
            .requires(SupportsAdd)
            .requires_absent(AllowsNullValues),
    ]
}

fn contains_null<G>(tester: &mut ContainerTester<'_, G>) -> CheckResult
where
    G: TestContainerGenerator,
    G::Element: NullElement,
{
    tester.initialize_with_null_element()?;
    let mut expected = tester.sample_elements();
    expected[tester.null_location()] = G::Element::null();
    crate::ensure!(
        tester.container().contains(&G::Element::null()),
        "contains(null) should return true"
    );
    tester.expect_contents(&expected)
}

fn lacks_null<G>(tester: &mut ContainerTester<'_, G>) -> CheckResult
where
    G: TestContainerGenerator,
    G::Element: NullElement,
{
    crate::ensure!(
        !tester.container().contains(&G::Element::null()),
        "contains(null) should return false"
    );
    Ok(())
}

fn add_null<G>(tester: &mut ContainerTester<'_, G>) -> CheckResult
where
    G: TestContainerGenerator,
    G::Element: NullElement,
{
    crate::ensure!(
        tester.container_mut().add(G::Element::null())?,
        "add(null) should return true"
    );
    tester.expect_added(&[G::Element::null()])
}

fn add_null_rejected<G>(tester: &mut ContainerTester<'_, G>) -> CheckResult
where
    G: TestContainerGenerator,
    G::Element: NullElement,
{
    expect_no_change_reported(
        tester.container_mut().add(G::Element::null()),
        "add(null)",
    )?;
    tester.expect_unchanged()?;
    tester.expect_missing(&[G::Element::null()])
}
