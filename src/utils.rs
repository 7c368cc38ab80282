//! Small helpers shared by the stream operations.

use crate::stream::Segment;

/// Returns its argument unchanged; the default mapper.
pub fn identity<T>(value: T) -> T {
    value
}

/// True when `segment` would be spread element by element.
pub fn is_iterable<T: 'static>(segment: &Segment<T>) -> bool {
    segment.is_iterable()
}

/// True when `segment` wraps an [`IterStream`](crate::IterStream).
pub fn is_iter_stream<T: 'static>(segment: &Segment<T>) -> bool {
    segment.is_iter_stream()
}
