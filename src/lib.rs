pub mod error;
pub mod stream;
pub mod utils;

pub mod pipe;
pub mod async_bridge;

pub mod stream_configuration;

// Re-export the stream surface at the crate root
pub use error::{StreamError, StreamResult};
pub use stream::{BoxIter, IterStream, Producer, Segment};
pub use stream_configuration::{CollectConfig, MAX_INITIAL_CAPACITY};
pub use utils::{identity, is_iter_stream, is_iterable};
