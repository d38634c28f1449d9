//! # Capacity Planning
//!
//! Sizes the bookkeeping block for a region before any free list exists.
//!
//! ```text
//!   ┌──────────────────┬───────────┬───────────┬─────┬───────────┐
//!   │  FreeListState   │ record 0  │ record 1  │ ... │ record N-1│
//!   └──────────────────┴───────────┴───────────┴─────┴───────────┘
//!    HEADER_SIZE bytes   RECORD_SIZE bytes each, N = total / POINTER_WIDTH
//! ```

use std::mem::size_of;

use bytemuck::{Pod, Zeroable};

use crate::record::TrackRecord;

/// Region bytes per track record.
///
/// More fragments need proportionally more bookkeeping; one record per
/// pointer-width of region keeps the overhead bounded.
pub const POINTER_WIDTH: u64 = size_of::<usize>() as u64;

/// Size of the header at the start of the block.
pub const HEADER_SIZE: usize = size_of::<FreeListState>();

/// Size of one track record.
pub const RECORD_SIZE: usize = size_of::<TrackRecord>();

/// Header stored at the start of the backing block.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Pod, Zeroable)]
pub(crate) struct FreeListState {
    /// Size of the managed region in bytes.
    pub(crate) total_size: u64,
    /// Number of track records following the header.
    pub(crate) capacity: u64,
    /// Slot index of the first free record, or the invalid sentinel.
    pub(crate) head: u64,
}

/// Bookkeeping layout for a region of a given size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FreeListLayout {
    total_size: u64,
    capacity: u64,
    required_bytes: u64,
}

impl FreeListLayout {
    /// Plans the layout for a region of `total_size` bytes.
    ///
    /// `required_bytes = HEADER_SIZE + RECORD_SIZE * (total_size / POINTER_WIDTH)`.
    #[must_use]
    pub const fn for_region(total_size: u64) -> Self {
        let capacity = total_size / POINTER_WIDTH;
        let required_bytes = (RECORD_SIZE as u64)
            .saturating_mul(capacity)
            .saturating_add(HEADER_SIZE as u64);
        Self {
            total_size,
            capacity,
            required_bytes,
        }
    }

    /// Size of the managed region in bytes.
    #[inline]
    #[must_use]
    pub const fn total_size(&self) -> u64 {
        self.total_size
    }

    /// Number of track records.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> u64 {
        self.capacity
    }

    /// Bytes the backing block must provide.
    #[inline]
    #[must_use]
    pub const fn required_bytes(&self) -> u64 {
        self.required_bytes
    }
}
