//! Expose a stream to async consumers.
//!
//! The returned `futures` stream is always ready: every poll pulls one element
//! synchronously from a fresh traversal.

use futures::stream;
use futures_core::Stream;

use crate::stream::IterStream;

impl<T: 'static> IterStream<T> {
    /// Start a traversal that can be consumed with `futures::StreamExt`.
    pub fn to_async_stream(&self) -> impl Stream<Item = T> + Unpin {
        stream::iter(self.iter())
    }
}
