// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::test_element::TestElement;
use contest::{errors::UnsupportedOperation, TestContainer};
use test_strategy::Arbitrary;

/// A naive, inefficient set that acts as an oracle for property-based tests.
///
/// This set is stored as a vector and performs linear scans.
#[derive(Debug, Default)]
pub struct NaiveSet {
    elements: Vec<TestElement>,
}

impl NaiveSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn elements(&self) -> &[TestElement] {
        &self.elements
    }

    pub fn add(&mut self, element: TestElement) -> bool {
        if self.elements.contains(&element) {
            false
        } else {
            self.elements.push(element);
            true
        }
    }

    pub fn remove(&mut self, element: &TestElement) -> bool {
        match self.elements.iter().position(|e| e == element) {
            Some(index) => {
                self.elements.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Applies `op` to the oracle, returning what the operation reports.
    pub fn apply(&mut self, op: &Operation) -> OperationResult {
        match op {
            Operation::Add(element) => {
                OperationResult::Changed(self.add(element.clone()))
            }
            Operation::Remove(element) => {
                OperationResult::Changed(self.remove(element))
            }
            Operation::Contains(element) => {
                OperationResult::Contains(self.elements.contains(element))
            }
            Operation::Clear => {
                self.clear();
                OperationResult::Cleared
            }
        }
    }
}

#[derive(Clone, Debug, Arbitrary)]
pub enum Operation {
    // Make adds a bit more likely, so sets grow.
    #[weight(3)]
    Add(TestElement),
    #[weight(2)]
    Remove(TestElement),
    #[weight(2)]
    Contains(TestElement),
    Clear,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OperationResult {
    Changed(bool),
    Contains(bool),
    Cleared,
}

impl Operation {
    /// Applies `self` to a container under test.
    pub fn apply_to<C>(
        &self,
        container: &mut C,
    ) -> Result<OperationResult, UnsupportedOperation>
    where
        C: TestContainer<Element = TestElement>,
    {
        match self {
            Operation::Add(element) => {
                container.add(element.clone()).map(OperationResult::Changed)
            }
            Operation::Remove(element) => {
                container.remove(element).map(OperationResult::Changed)
            }
            Operation::Contains(element) => {
                Ok(OperationResult::Contains(container.contains(element)))
            }
            Operation::Clear => {
                container.clear().map(|()| OperationResult::Cleared)
            }
        }
    }
}
