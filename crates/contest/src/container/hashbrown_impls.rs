// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `TestContainer` implementations for `hashbrown`'s collections.

use super::TestContainer;
use crate::errors::UnsupportedOperation;
use core::{
    fmt,
    hash::{BuildHasher, Hash},
};
use hashbrown::{HashMap, HashSet};

impl<T, S> TestContainer for HashSet<T, S>
where
    T: Clone + Eq + Hash + fmt::Debug,
    S: BuildHasher,
{
    type Element = T;

    fn len(&self) -> usize {
        HashSet::len(self)
    }

    fn contents(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }

    fn contains(&self, element: &T) -> bool {
        HashSet::contains(self, element)
    }

    fn add(&mut self, element: T) -> Result<bool, UnsupportedOperation> {
        Ok(self.insert(element))
    }

    fn remove(&mut self, element: &T) -> Result<bool, UnsupportedOperation> {
        Ok(HashSet::remove(self, element))
    }

    fn clear(&mut self) -> Result<(), UnsupportedOperation> {
        HashSet::clear(self);
        Ok(())
    }
}

impl<K, V, S> TestContainer for HashMap<K, V, S>
where
    K: Clone + Eq + Hash + fmt::Debug,
    V: Clone + PartialEq + fmt::Debug,
    S: BuildHasher,
{
    type Element = (K, V);

    fn len(&self) -> usize {
        HashMap::len(self)
    }

    fn contents(&self) -> Vec<(K, V)> {
        self.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }

    fn contains(&self, (key, value): &(K, V)) -> bool {
        self.get(key) == Some(value)
    }

    fn add(
        &mut self,
        (key, value): (K, V),
    ) -> Result<bool, UnsupportedOperation> {
        if self.get(&key) == Some(&value) {
            return Ok(false);
        }
        self.insert(key, value);
        Ok(true)
    }

    fn remove(
        &mut self,
        (key, value): &(K, V),
    ) -> Result<bool, UnsupportedOperation> {
        if self.get(key) != Some(value) {
            return Ok(false);
        }
        Ok(HashMap::remove(self, key).is_some())
    }

    fn clear(&mut self) -> Result<(), UnsupportedOperation> {
        HashMap::clear(self);
        Ok(())
    }
}
