//! Fixed-Capacity Ring Buffer
//!
//! Provides the sliding window used by sensors to keep their most recent
//! calibrated readings. Storage is pre-allocated; once full, every push
//! overwrites the oldest slot.

mod buffer;

pub use buffer::{RingBuffer, DEFAULT_CAPACITY};

use thiserror::Error;

/// Errors raised when building a buffer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BufferError {
    /// A window must hold at least one value
    #[error("Ring buffer capacity must be greater than zero")]
    ZeroCapacity,
}
