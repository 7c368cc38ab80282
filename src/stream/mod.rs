//! Lazy, re-iterable stream pipelines
//!
//! An [`IterStream`] wraps a producer that hands out a fresh iterator per
//! traversal. Intermediate operations wrap that producer; terminal operations
//! drive it.

pub mod core;
pub mod constructors;
pub mod advanced;
pub mod utility;
pub mod segment;
pub mod specialized;

// Re-export core types
pub use self::core::{BoxIter, IterStream, Producer};

pub use self::segment::Segment;
