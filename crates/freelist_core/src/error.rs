//! # Free List Error Types
//!
//! All errors that can occur while planning, creating or using a free list.

use thiserror::Error;

/// Errors that can occur in the free list.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FreeListError {
    /// No free range is large enough for the request.
    #[error("insufficient space: requested {requested}B, available {available}B")]
    InsufficientSpace {
        /// The requested size in bytes.
        requested: u64,
        /// Total free bytes at the time of the request.
        available: u64,
    },

    /// The range handed to `free` does not fit the free list.
    ///
    /// Either it overlaps a range that is already free or it reaches past
    /// the end of the region.
    #[error("range not found: offset {offset}, size {size}")]
    NotFound {
        /// Offset of the rejected range.
        offset: u64,
        /// Size of the rejected range.
        size: u64,
    },

    /// Every track record is in use; the region is more fragmented than
    /// its capacity allows.
    #[error("track record pool exhausted: capacity {capacity}")]
    PoolExhausted {
        /// Number of records in the pool.
        capacity: u64,
    },

    /// Zero-sized allocations and frees are rejected.
    #[error("size must be greater than zero")]
    ZeroSize,

    /// The backing block is shorter than the planned layout.
    #[error("backing block too small: need {required}B, got {provided}B")]
    BlockTooSmall {
        /// Bytes required by the layout.
        required: u64,
        /// Bytes supplied by the caller.
        provided: u64,
    },

    /// The backing block is not aligned for the track records.
    #[error("backing block is not 8-byte aligned")]
    MisalignedBlock,

    /// The region is too small to hold even a single track record.
    #[error("region of {total_size}B is too small to track")]
    RegionTooSmall {
        /// The requested region size.
        total_size: u64,
    },

    /// The planned layout cannot be addressed on this platform.
    #[error("layout of {required}B does not fit in memory")]
    LayoutTooLarge {
        /// Bytes required by the layout.
        required: u64,
    },

    /// Regions can only grow.
    #[error("cannot shrink region from {current}B to {requested}B")]
    ShrinkUnsupported {
        /// Current region size.
        current: u64,
        /// Requested region size.
        requested: u64,
    },

    /// Invalid configuration file.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for free list operations.
pub type FreeListResult<T> = Result<T, FreeListError>;
