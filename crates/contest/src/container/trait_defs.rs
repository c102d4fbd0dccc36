// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Trait definitions for containers under test.

use crate::{errors::UnsupportedOperation, minimal::MinimalCollection};
use std::fmt;

/// A container that conformance suites can be run against.
///
/// This is the only view the framework has of an implementation. The
/// required methods are the read-only core; every mutating method is an
/// optional operation that returns [`UnsupportedOperation`] by default.
/// Implementations override the operations they support, and declare them
/// with the matching [`Feature`]s so that suites check both sides: supported
/// operations behave correctly, and unsupported ones leave the container
/// unchanged.
///
/// For maps, the element type is the entry `(K, V)`, and [`add`] is `put`.
///
/// # Examples
///
/// ```
/// use contest::{TestContainer, errors::UnsupportedOperation};
///
/// // A container that can only grow.
/// #[derive(Debug, Default)]
/// struct Journal {
///     lines: Vec<String>,
/// }
///
/// impl TestContainer for Journal {
///     type Element = String;
///
///     fn len(&self) -> usize {
///         self.lines.len()
///     }
///
///     fn contents(&self) -> Vec<String> {
///         self.lines.clone()
///     }
///
///     fn add(&mut self, line: String) -> Result<bool, UnsupportedOperation> {
///         self.lines.push(line);
///         Ok(true)
///     }
/// }
///
/// let mut journal = Journal::default();
/// assert_eq!(journal.add("started".to_string()), Ok(true));
/// assert!(journal.contains(&"started".to_string()));
/// assert!(journal.clear().is_err());
/// ```
///
/// [`Feature`]: crate::Feature
/// [`add`]: TestContainer::add
pub trait TestContainer {
    /// The element type. For maps, the entry type.
    type Element: Clone + PartialEq + fmt::Debug;

    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns true if the container holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a copy of every element, in iteration order.
    fn contents(&self) -> Vec<Self::Element>;

    /// Returns true if the container holds `element`.
    ///
    /// The default implementation scans [`contents`](Self::contents).
    fn contains(&self, element: &Self::Element) -> bool {
        self.contents().iter().any(|e| e == element)
    }

    /// Adds an element, returning true if the container changed.
    fn add(
        &mut self,
        element: Self::Element,
    ) -> Result<bool, UnsupportedOperation> {
        _ = element;
        Err(UnsupportedOperation::new("add"))
    }

    /// Adds every element of `elements`, returning true if the container
    /// changed.
    ///
    /// The default implementation calls [`add`](Self::add) for each element,
    /// so it fails only if `elements` is non-empty and `add` is unsupported.
    fn add_all(
        &mut self,
        elements: MinimalCollection<Self::Element>,
    ) -> Result<bool, UnsupportedOperation> {
        let mut changed = false;
        for element in elements {
            changed |= self.add(element)?;
        }
        Ok(changed)
    }

    /// Removes one occurrence of an element, returning true if the container
    /// changed.
    fn remove(
        &mut self,
        element: &Self::Element,
    ) -> Result<bool, UnsupportedOperation> {
        _ = element;
        Err(UnsupportedOperation::new("remove"))
    }

    /// Removes every element.
    fn clear(&mut self) -> Result<(), UnsupportedOperation> {
        Err(UnsupportedOperation::new("clear"))
    }

    /// Inserts an element at `index`, shifting later elements back.
    ///
    /// Implementations may panic if `index > len`.
    fn insert_at(
        &mut self,
        index: usize,
        element: Self::Element,
    ) -> Result<(), UnsupportedOperation> {
        _ = (index, element);
        Err(UnsupportedOperation::new("insert_at"))
    }

    /// Replaces the element at `index`, returning the previous one.
    ///
    /// Implementations may panic if `index >= len`.
    fn set_at(
        &mut self,
        index: usize,
        element: Self::Element,
    ) -> Result<Self::Element, UnsupportedOperation> {
        _ = (index, element);
        Err(UnsupportedOperation::new("set_at"))
    }

    /// Removes and returns the element at `index`, shifting later elements
    /// forward.
    ///
    /// Implementations may panic if `index >= len`.
    fn remove_at(
        &mut self,
        index: usize,
    ) -> Result<Self::Element, UnsupportedOperation> {
        _ = index;
        Err(UnsupportedOperation::new("remove_at"))
    }
}
