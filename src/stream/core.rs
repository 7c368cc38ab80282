//! Core stream type and the basic lazy combinators: map, filter, limit, skip.
//!
//! An [`IterStream`] owns a *producer*, a zero-argument factory that returns a
//! fresh iterator every time it is called. Intermediate operations wrap the
//! current producer in a new one; terminal operations call the producer and
//! drive the resulting iterator.

use std::fmt;
use std::rc::Rc;

use crate::error::{StreamError, StreamResult};
use crate::stream_configuration::{CollectConfig, MAX_INITIAL_CAPACITY};

/// A boxed, type-erased traversal of a stream.
pub type BoxIter<T> = Box<dyn Iterator<Item = T>>;

/// Factory returning a fresh traversal on each call.
pub type Producer<T> = Rc<dyn Fn() -> BoxIter<T>>;

/// Lazy, re-iterable pipeline over elements of type `T`.
///
/// Cloning a stream is cheap: the clone shares the same immutable producer.
/// Every intermediate operation borrows the receiver and returns a new stream,
/// so a stream can be branched into several pipelines.
///
/// Streams are `!Send`: a traversal runs synchronously on the calling thread.
/// Whether two traversals see the same elements depends on the source; see
/// [`IterStream::from`] and [`IterStream::from_single_pass`].
pub struct IterStream<T> {
    producer: Producer<T>,
}

impl<T> Clone for IterStream<T> {
    fn clone(&self) -> Self {
        Self {
            producer: Rc::clone(&self.producer),
        }
    }
}

impl<T> fmt::Debug for IterStream<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IterStream").finish_non_exhaustive()
    }
}

impl<T: 'static> IterStream<T> {
    /// Create a stream directly from a producer closure.
    ///
    /// The closure is invoked once per traversal and may return any
    /// `IntoIterator`, including infinite ones.
    pub fn from_fn<F, I>(producer: F) -> Self
    where
        F: Fn() -> I + 'static,
        I: IntoIterator<Item = T>,
        I::IntoIter: 'static,
    {
        Self::from_producer(Rc::new(move || -> BoxIter<T> {
            Box::new(producer().into_iter())
        }))
    }

    pub(crate) fn from_producer(producer: Producer<T>) -> Self {
        Self { producer }
    }

    /// Build a new stream whose traversals wrap a traversal of `self`.
    pub(crate) fn derive<U, W>(&self, wrap: W) -> IterStream<U>
    where
        U: 'static,
        W: Fn(BoxIter<T>) -> BoxIter<U> + 'static,
    {
        let upstream = Rc::clone(&self.producer);
        IterStream::from_producer(Rc::new(move || wrap(upstream())))
    }

    /// Start a fresh traversal.
    pub fn iter(&self) -> BoxIter<T> {
        (self.producer)()
    }

    /// Transform each element.
    pub fn map<U, F>(&self, mapper: F) -> IterStream<U>
    where
        U: 'static,
        F: Fn(T) -> U + 'static,
    {
        self.map_indexed(move |value, _| mapper(value))
    }

    /// Transform each element, also passing its 0-based position.
    pub fn map_indexed<U, F>(&self, mapper: F) -> IterStream<U>
    where
        U: 'static,
        F: Fn(T, usize) -> U + 'static,
    {
        let mapper = Rc::new(mapper);
        self.derive(move |upstream| -> BoxIter<U> {
            Box::new(IndexedMap {
                iter: upstream,
                f: Rc::clone(&mapper),
                index: 0,
            })
        })
    }

    /// Keep only the elements matching `predicate`.
    pub fn filter<F>(&self, predicate: F) -> IterStream<T>
    where
        F: Fn(&T) -> bool + 'static,
    {
        self.filter_indexed(move |value, _| predicate(value))
    }

    /// Keep only the elements matching `predicate`.
    ///
    /// The index is the element's position among the values reaching this
    /// filter, counted from 0 on every traversal.
    pub fn filter_indexed<F>(&self, predicate: F) -> IterStream<T>
    where
        F: Fn(&T, usize) -> bool + 'static,
    {
        let predicate = Rc::new(predicate);
        self.derive(move |upstream| -> BoxIter<T> {
            Box::new(IndexedFilter {
                iter: upstream,
                predicate: Rc::clone(&predicate),
                index: 0,
            })
        })
    }

    /// Yield at most `count` elements.
    ///
    /// Upstream is never pulled past the `count`-th element.
    pub fn limit(&self, count: usize) -> IterStream<T> {
        self.derive(move |upstream| -> BoxIter<T> { Box::new(upstream.take(count)) })
    }

    /// Discard the first `count` elements.
    pub fn skip(&self, count: usize) -> IterStream<T> {
        self.derive(move |upstream| -> BoxIter<T> { Box::new(upstream.skip(count)) })
    }

    /// Call `callback` on every element.
    pub fn for_each<F>(&self, callback: F)
    where
        F: FnMut(T),
    {
        self.iter().for_each(callback)
    }

    /// Left fold starting from `initial_value`.
    ///
    /// Returns `initial_value` untouched for an empty stream.
    pub fn reduce<S, F>(&self, reducer: F, initial_value: S) -> S
    where
        F: FnMut(S, T) -> S,
    {
        self.iter().fold(initial_value, reducer)
    }

    /// Materialize every element, in order.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().collect()
    }

    /// Materialize into any collection.
    pub fn collect<B>(&self) -> B
    where
        B: FromIterator<T>,
    {
        self.iter().collect()
    }

    /// Materialize every element, failing once more than
    /// `config.max_elements` have been produced.
    ///
    /// Useful on streams that may be infinite. Overflow is detected by
    /// pulling one element past the limit, so at most `max_elements + 1`
    /// elements are drawn from upstream (and seen by any `peek` callback)
    /// before `ResourceExhausted` is returned.
    pub fn to_vec_bounded(&self, config: &CollectConfig) -> StreamResult<Vec<T>> {
        config.validate()?;
        let capacity = match config.max_elements {
            Some(limit) => config.initial_capacity.min(limit),
            None => config.initial_capacity,
        };
        let mut collected = Vec::with_capacity(capacity.min(MAX_INITIAL_CAPACITY));
        let Some(limit) = config.max_elements else {
            collected.extend(self.iter());
            return Ok(collected);
        };
        for item in self.iter().take(limit.saturating_add(1)) {
            if collected.len() >= limit {
                log::warn!("Aborting materialization after {} elements", limit);
                return Err(StreamError::ResourceExhausted { limit });
            }
            collected.push(item);
        }
        Ok(collected)
    }
}

impl<T: 'static> IntoIterator for IterStream<T> {
    type Item = T;
    type IntoIter = BoxIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: 'static> IntoIterator for &IterStream<T> {
    type Item = T;
    type IntoIter = BoxIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ================================
// Adapters
// ================================

/// Adapter behind [`IterStream::map_indexed`].
pub(crate) struct IndexedMap<I, F> {
    iter: I,
    f: Rc<F>,
    index: usize,
}

impl<I, U, F> Iterator for IndexedMap<I, F>
where
    I: Iterator,
    F: Fn(I::Item, usize) -> U,
{
    type Item = U;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.iter.next()?;
        let index = self.index;
        self.index += 1;
        Some((self.f)(item, index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

/// Adapter behind [`IterStream::filter_indexed`].
pub(crate) struct IndexedFilter<I, F> {
    iter: I,
    predicate: Rc<F>,
    index: usize,
}

impl<I, F> Iterator for IndexedFilter<I, F>
where
    I: Iterator,
    F: Fn(&I::Item, usize) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let item = self.iter.next()?;
            let index = self.index;
            self.index += 1;
            if (self.predicate)(&item, index) {
                return Some(item);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.iter.size_hint().1)
    }
}
