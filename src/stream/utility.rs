//! Utility combinators and terminal operations: peek, every, some, find,
//! includes, length, sum, min, max, to_set, to_map
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;
use std::iter::Sum;
use std::rc::Rc;

use super::core::{BoxIter, IterStream};
use crate::utils::identity;

impl<T: 'static> IterStream<T> {
    /// Call `callback` on each element as it passes through.
    pub fn peek<F>(&self, callback: F) -> IterStream<T>
    where
        F: Fn(&T) + 'static,
    {
        let callback = Rc::new(callback);
        self.derive(move |upstream| -> BoxIter<T> {
            let callback = Rc::clone(&callback);
            Box::new(upstream.inspect(move |value| callback(value)))
        })
    }

    /// True when `predicate` holds for every element; true for an empty stream.
    ///
    /// Stops at the first failing element.
    pub fn every<F>(&self, mut predicate: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().all(|value| predicate(&value))
    }

    /// True when `predicate` holds for at least one element.
    ///
    /// Stops at the first matching element.
    pub fn some<F>(&self, mut predicate: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().any(|value| predicate(&value))
    }

    /// First element matching `predicate`.
    pub fn find<F>(&self, mut predicate: F) -> Option<T>
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().find(|value| predicate(value))
    }

    /// True when an element equal to `value` is produced.
    pub fn includes(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|item| item == *value)
    }

    /// Number of elements, counted by a full traversal.
    pub fn length(&self) -> usize {
        self.iter().count()
    }

    /// Sum of all elements; zero for an empty stream.
    pub fn sum(&self) -> T
    where
        T: Sum<T>,
    {
        self.sum_by(identity)
    }

    /// Sum of `mapper(element)` over all elements.
    pub fn sum_by<S, F>(&self, mapper: F) -> S
    where
        S: Sum<S>,
        F: FnMut(T) -> S,
    {
        self.iter().map(mapper).sum()
    }

    /// Element ranked least by `comparator`, `None` when empty.
    ///
    /// `comparator(a, b)` returns how `a` orders relative to `b`. If several
    /// elements are equally least, the first one wins.
    pub fn min<F>(&self, comparator: F) -> Option<T>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.iter().min_by(comparator)
    }

    /// Element ranked greatest by `comparator`, `None` when empty.
    ///
    /// If several elements are equally greatest, the last one wins.
    pub fn max<F>(&self, comparator: F) -> Option<T>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.iter().max_by(comparator)
    }

    pub fn min_by_key<K, F>(&self, key: F) -> Option<T>
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        self.iter().min_by_key(key)
    }

    pub fn max_by_key<K, F>(&self, key: F) -> Option<T>
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        self.iter().max_by_key(key)
    }

    /// Materialize into a set; equal elements collapse.
    pub fn to_set(&self) -> HashSet<T>
    where
        T: Eq + Hash,
    {
        self.iter().collect()
    }

    /// Map every element to `key_mapper(element) -> element`.
    ///
    /// Later elements overwrite earlier ones with the same key.
    pub fn to_map<K, KF>(&self, key_mapper: KF) -> HashMap<K, T>
    where
        K: Eq + Hash,
        KF: FnMut(&T) -> K,
    {
        self.to_map_with(key_mapper, identity)
    }

    /// Map every element to `key_mapper(element) -> value_mapper(element)`.
    ///
    /// Later elements overwrite earlier ones with the same key.
    pub fn to_map_with<K, V, KF, VF>(&self, mut key_mapper: KF, mut value_mapper: VF) -> HashMap<K, V>
    where
        K: Eq + Hash,
        KF: FnMut(&T) -> K,
        VF: FnMut(T) -> V,
    {
        self.iter()
            .map(|item| (key_mapper(&item), value_mapper(item)))
            .collect()
    }
}
