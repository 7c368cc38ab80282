//! Advanced stream combinators: flat_map, unique, concat, chain
use std::collections::HashSet;
use std::hash::Hash;
use std::rc::Rc;

use super::core::{BoxIter, IterStream};
use super::segment::Segment;

impl<T: 'static> IterStream<T> {
    /// Map every element to a sequence and splice its elements in, in order.
    ///
    /// Return a [`Segment`] from `mapper` to decide per element whether the
    /// result is spread or kept as a single value.
    pub fn flat_map<U, I, F>(&self, mapper: F) -> IterStream<U>
    where
        U: 'static,
        I: IntoIterator<Item = U> + 'static,
        I::IntoIter: 'static,
        F: Fn(T) -> I + 'static,
    {
        let mapper = Rc::new(mapper);
        self.derive(move |upstream| -> BoxIter<U> {
            let mapper = Rc::clone(&mapper);
            Box::new(upstream.flat_map(move |value| mapper(value)))
        })
    }

    /// Drop elements equal to one already seen.
    pub fn unique(&self) -> IterStream<T>
    where
        T: Eq + Hash + Clone,
    {
        self.unique_by(T::clone)
    }

    /// Keep the first element for every distinct key, in first-seen order.
    ///
    /// The set of seen keys lives for one traversal only: evaluating the
    /// resulting stream twice yields the same elements both times.
    pub fn unique_by<K, F>(&self, key_mapper: F) -> IterStream<T>
    where
        K: Eq + Hash + 'static,
        F: Fn(&T) -> K + 'static,
    {
        let key_mapper = Rc::new(key_mapper);
        self.derive(move |upstream| -> BoxIter<T> {
            Box::new(Unique {
                iter: upstream,
                key_mapper: Rc::clone(&key_mapper),
                seen: HashSet::new(),
            })
        })
    }

    /// Append `values` after the last element.
    ///
    /// Streams and iterables are spread in; plain elements are appended as
    /// they are.
    pub fn concat<V>(&self, values: V) -> IterStream<T>
    where
        V: IntoIterator<Item = Segment<T>>,
        T: Clone,
    {
        let segments: Rc<[Segment<T>]> = values.into_iter().collect();
        self.derive(move |upstream| -> BoxIter<T> {
            let segments = Rc::clone(&segments);
            let tail = (0..segments.len()).flat_map(move |i| segments[i].clone().spread());
            Box::new(upstream.chain(tail))
        })
    }

    /// Append every element of `other`.
    pub fn chain(&self, other: &IterStream<T>) -> IterStream<T> {
        IterStream::join([self.clone(), other.clone()])
    }
}

/// Adapter behind [`IterStream::unique_by`]; `seen` lives for one traversal.
pub(crate) struct Unique<I, K, F> {
    iter: I,
    key_mapper: Rc<F>,
    seen: HashSet<K>,
}

impl<I, K, F> Iterator for Unique<I, K, F>
where
    I: Iterator,
    K: Eq + Hash,
    F: Fn(&I::Item) -> K,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let item = self.iter.next()?;
            if self.seen.insert((self.key_mapper)(&item)) {
                return Some(item);
            }
        }
    }
}
