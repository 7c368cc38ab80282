//! Mixed scalar / sequence values accepted by `concat` and `flat_map`.
use super::core::{BoxIter, IterStream};

/// One value appended to a stream.
///
/// A segment is either a single element or a sequence whose elements are
/// spread in. Sequences remember whether they were handed over as a stream or
/// as a plain iterable.
#[derive(Debug, Clone)]
pub enum Segment<T> {
    /// Appended as one element.
    Element(T),
    /// A plain iterable, spread element by element.
    Iterable(IterStream<T>),
    /// An existing stream, spread element by element.
    Stream(IterStream<T>),
}

impl<T: 'static> Segment<T> {
    pub fn element(value: T) -> Self {
        Segment::Element(value)
    }

    /// Wrap a re-iterable value so that its elements are spread.
    pub fn iterable<I>(iterable: I) -> Self
    where
        I: IntoIterator<Item = T> + Clone + 'static,
        I::IntoIter: 'static,
    {
        Segment::Iterable(IterStream::from(iterable))
    }

    /// True when this segment produces a sequence of elements.
    pub fn is_iterable(&self) -> bool {
        matches!(self, Segment::Iterable(_) | Segment::Stream(_))
    }

    /// True when this segment was built from an [`IterStream`].
    pub fn is_iter_stream(&self) -> bool {
        matches!(self, Segment::Stream(_))
    }

    /// The elements this segment contributes, in order.
    pub fn spread(self) -> BoxIter<T> {
        match self {
            Segment::Iterable(stream) | Segment::Stream(stream) => stream.iter(),
            Segment::Element(value) => Box::new(std::iter::once(value)),
        }
    }
}

impl<T: 'static> From<IterStream<T>> for Segment<T> {
    fn from(stream: IterStream<T>) -> Self {
        Segment::Stream(stream)
    }
}

impl<T: 'static> IntoIterator for Segment<T> {
    type Item = T;
    type IntoIter = BoxIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.spread()
    }
}
