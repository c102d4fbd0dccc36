// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `TestContainer` implementations for the standard library's collections.

use super::TestContainer;
use crate::errors::UnsupportedOperation;
use std::{
    collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, VecDeque},
    fmt,
    hash::{BuildHasher, Hash},
};

impl<T> TestContainer for Vec<T>
where
    T: Clone + PartialEq + fmt::Debug,
{
    type Element = T;

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn contents(&self) -> Vec<T> {
        self.clone()
    }

    fn contains(&self, element: &T) -> bool {
        self.as_slice().contains(element)
    }

    fn add(&mut self, element: T) -> Result<bool, UnsupportedOperation> {
        self.push(element);
        Ok(true)
    }

    fn remove(&mut self, element: &T) -> Result<bool, UnsupportedOperation> {
        match self.iter().position(|e| e == element) {
            Some(index) => {
                Vec::remove(self, index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn clear(&mut self) -> Result<(), UnsupportedOperation> {
        Vec::clear(self);
        Ok(())
    }

    fn insert_at(
        &mut self,
        index: usize,
        element: T,
    ) -> Result<(), UnsupportedOperation> {
        self.insert(index, element);
        Ok(())
    }

    fn set_at(
        &mut self,
        index: usize,
        element: T,
    ) -> Result<T, UnsupportedOperation> {
        Ok(std::mem::replace(&mut self[index], element))
    }

    fn remove_at(&mut self, index: usize) -> Result<T, UnsupportedOperation> {
        Ok(Vec::remove(self, index))
    }
}

impl<T> TestContainer for VecDeque<T>
where
    T: Clone + PartialEq + fmt::Debug,
{
    type Element = T;

    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn contents(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }

    fn contains(&self, element: &T) -> bool {
        VecDeque::contains(self, element)
    }

    fn add(&mut self, element: T) -> Result<bool, UnsupportedOperation> {
        self.push_back(element);
        Ok(true)
    }

    fn remove(&mut self, element: &T) -> Result<bool, UnsupportedOperation> {
        match self.iter().position(|e| e == element) {
            Some(index) => Ok(VecDeque::remove(self, index).is_some()),
            None => Ok(false),
        }
    }

    fn clear(&mut self) -> Result<(), UnsupportedOperation> {
        VecDeque::clear(self);
        Ok(())
    }

    fn insert_at(
        &mut self,
        index: usize,
        element: T,
    ) -> Result<(), UnsupportedOperation> {
        self.insert(index, element);
        Ok(())
    }

    fn set_at(
        &mut self,
        index: usize,
        element: T,
    ) -> Result<T, UnsupportedOperation> {
        Ok(std::mem::replace(&mut self[index], element))
    }

    fn remove_at(&mut self, index: usize) -> Result<T, UnsupportedOperation> {
        match VecDeque::remove(self, index) {
            Some(element) => Ok(element),
            None => panic!(
                "remove_at index (is {index}) should be < len (is {})",
                VecDeque::len(self)
            ),
        }
    }
}

// A heap can be grown, but removing arbitrary elements is not part of its
// interface.
impl<T> TestContainer for BinaryHeap<T>
where
    T: Clone + Ord + fmt::Debug,
{
    type Element = T;

    fn len(&self) -> usize {
        BinaryHeap::len(self)
    }

    fn contents(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }

    fn add(&mut self, element: T) -> Result<bool, UnsupportedOperation> {
        self.push(element);
        Ok(true)
    }
}

impl<T> TestContainer for BTreeSet<T>
where
    T: Clone + Ord + fmt::Debug,
{
    type Element = T;

    fn len(&self) -> usize {
        BTreeSet::len(self)
    }

    fn contents(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }

    fn contains(&self, element: &T) -> bool {
        BTreeSet::contains(self, element)
    }

    fn add(&mut self, element: T) -> Result<bool, UnsupportedOperation> {
        Ok(self.insert(element))
    }

    fn remove(&mut self, element: &T) -> Result<bool, UnsupportedOperation> {
        Ok(BTreeSet::remove(self, element))
    }

    fn clear(&mut self) -> Result<(), UnsupportedOperation> {
        BTreeSet::clear(self);
        Ok(())
    }
}

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

impl<K, V> TestContainer for BTreeMap<K, V>
where
    K: Clone + Ord + fmt::Debug,
    V: Clone + PartialEq + fmt::Debug,
{
    type Element = (K, V);

    fn len(&self) -> usize {
        BTreeMap::len(self)
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
        Ok(BTreeMap::remove(self, key).is_some())
    }

    fn clear(&mut self) -> Result<(), UnsupportedOperation> {
        BTreeMap::clear(self);
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
