//! Stream constructors: from, of, empty, join, single-pass sources, repeat_with
use std::cell::RefCell;
use std::rc::Rc;

use super::core::{BoxIter, IterStream};

impl<T: 'static> IterStream<T> {
    /// Wrap a re-iterable source.
    ///
    /// Each traversal clones `iterable` and iterates the clone, so a `Vec`,
    /// a range or any `Clone` iterator is replayed from its current state on
    /// every terminal operation.
    #[allow(clippy::should_implement_trait)]
    pub fn from<I>(iterable: I) -> Self
    where
        I: IntoIterator<Item = T> + Clone + 'static,
        I::IntoIter: 'static,
    {
        Self::from_fn(move || iterable.clone())
    }

    /// Stream over a fixed list of elements.
    ///
    /// The elements are stored once and cloned out on each traversal.
    pub fn of<E>(elements: E) -> Self
    where
        E: IntoIterator<Item = T>,
        T: Clone,
    {
        let elements: Rc<[T]> = elements.into_iter().collect();
        Self::from_fn(move || {
            let elements = Rc::clone(&elements);
            (0..elements.len()).map(move |i| elements[i].clone())
        })
    }

    /// Stream with no elements.
    pub fn empty() -> Self {
        Self::from_fn(std::iter::empty::<T>)
    }

    /// Concatenate `streams` end to end, in order.
    pub fn join<S>(streams: S) -> Self
    where
        S: IntoIterator<Item = IterStream<T>>,
    {
        let streams: Rc<[IterStream<T>]> = streams.into_iter().collect();
        log::debug!("Joining {} streams", streams.len());
        Self::from_fn(move || {
            let streams = Rc::clone(&streams);
            (0..streams.len()).flat_map(move |i| streams[i].iter())
        })
    }

    /// Wrap a source that can only be walked once, such as a live cursor.
    ///
    /// All traversals pull from the same underlying iterator: a traversal
    /// resumes where the previous one stopped, and once the source is drained
    /// every later traversal is empty.
    pub fn from_single_pass<I>(source: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'static,
    {
        let cursor = Rc::new(RefCell::new(source.into_iter()));
        Self::from_producer(Rc::new(move || -> BoxIter<T> {
            Box::new(SharedCursor {
                cursor: Rc::clone(&cursor),
            })
        }))
    }

    /// Infinite stream calling `f` for every element.
    ///
    /// Pair with [`IterStream::limit`] or a short-circuiting terminal.
    pub fn repeat_with<F>(f: F) -> Self
    where
        F: Fn() -> T + 'static,
    {
        let f = Rc::new(f);
        Self::from_fn(move || {
            let f = Rc::clone(&f);
            std::iter::repeat_with(move || f())
        })
    }
}

impl<T: Clone + 'static> FromIterator<T> for IterStream<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::of(iter)
    }
}

struct SharedCursor<I> {
    cursor: Rc<RefCell<I>>,
}

impl<I: Iterator> Iterator for SharedCursor<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.cursor.borrow_mut().next();
        if next.is_none() {
            log::trace!("Single-pass source exhausted");
        }
        next
    }
}

/// Build an [`IterStream`] from a list of elements.
///
/// ```
/// use iter_stream::iter_stream;
///
/// let stream = iter_stream![1, 2, 3];
/// assert_eq!(stream.to_vec(), vec![1, 2, 3]);
/// ```
#[macro_export]
macro_rules! iter_stream {
    () => {
        $crate::IterStream::empty()
    };
    ($($element:expr),+ $(,)?) => {
        $crate::IterStream::of([$($element),+])
    };
}
