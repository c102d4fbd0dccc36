// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! A set with injectable faults, for checking that suites catch them.

use contest::{
    errors::UnsupportedOperation, SampleElements, TestContainer,
    TestContainerGenerator,
};
use std::fmt;
use test_strategy::Arbitrary;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Arbitrary)]
pub enum Fault {
    /// `add` of an absent element returns true but does not store it.
    AddDropsElement,
    /// `add` of a present element stores a second copy.
    AddAllowsDuplicates,
    /// `remove` of a present element returns true but keeps it.
    RemoveIgnored,
    /// `clear` panics.
    ClearPanics,
    /// `len` is one too large.
    LenOffByOne,
    /// Creating a set from elements with duplicates keeps the duplicates.
    CreationKeepsDuplicates,
    /// `contains` always returns false.
    ContainsAlwaysFalse,
}

impl Fault {
    pub const ALL: [Fault; 7] = [
        Fault::AddDropsElement,
        Fault::AddAllowsDuplicates,
        Fault::RemoveIgnored,
        Fault::ClearPanics,
        Fault::LenOffByOne,
        Fault::CreationKeepsDuplicates,
        Fault::ContainsAlwaysFalse,
    ];
}

/// A vector-backed set that misbehaves in one way, or not at all.
#[derive(Clone, Debug)]
pub struct FaultySet<T> {
    elements: Vec<T>,
    fault: Option<Fault>,
}

impl<T> FaultySet<T> {
    fn has_fault(&self, fault: Fault) -> bool {
        self.fault == Some(fault)
    }
}

impl<T> TestContainer for FaultySet<T>
where
    T: Clone + PartialEq + fmt::Debug,
{
    type Element = T;

    fn len(&self) -> usize {
        let len = self.elements.len();
        if self.has_fault(Fault::LenOffByOne) { len + 1 } else { len }
    }

    fn contents(&self) -> Vec<T> {
        self.elements.clone()
    }

    fn contains(&self, element: &T) -> bool {
        !self.has_fault(Fault::ContainsAlwaysFalse)
            && self.elements.contains(element)
    }

    fn add(&mut self, element: T) -> Result<bool, UnsupportedOperation> {
        if self.elements.contains(&element) {
            if self.has_fault(Fault::AddAllowsDuplicates) {
                self.elements.push(element);
                return Ok(true);
            }
            return Ok(false);
        }
        if !self.has_fault(Fault::AddDropsElement) {
            self.elements.push(element);
        }
        Ok(true)
    }

    fn remove(&mut self, element: &T) -> Result<bool, UnsupportedOperation> {
        match self.elements.iter().position(|e| e == element) {
            Some(index) => {
                if !self.has_fault(Fault::RemoveIgnored) {
                    self.elements.remove(index);
                }
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn clear(&mut self) -> Result<(), UnsupportedOperation> {
        if self.has_fault(Fault::ClearPanics) {
            panic!("clear is broken");
        }
        self.elements.clear();
        Ok(())
    }
}

/// Creates [`FaultySet`]s with the given fault.
#[derive(Clone, Debug)]
pub struct FaultyGenerator<T> {
    samples: SampleElements<T>,
    fault: Option<Fault>,
}

impl<T> FaultyGenerator<T> {
    pub fn new(samples: SampleElements<T>, fault: Option<Fault>) -> Self {
        Self { samples, fault }
    }
}

impl<T> TestContainerGenerator for FaultyGenerator<T>
where
    T: Clone + PartialEq + fmt::Debug,
{
    type Element = T;
    type Container = FaultySet<T>;

    fn samples(&self) -> SampleElements<T> {
        self.samples.clone()
    }

    fn create(&self, elements: Vec<T>) -> FaultySet<T> {
        let elements = if self.fault == Some(Fault::CreationKeepsDuplicates) {
            elements
        } else {
            let mut unique = Vec::with_capacity(elements.len());
            for element in elements {
                if !unique.contains(&element) {
                    unique.push(element);
                }
            }
            unique
        };
        FaultySet { elements, fault: self.fault }
    }
}
