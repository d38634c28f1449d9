//! # FREELIST Core
//!
//! Offset/size sub-allocator for one fixed-size region, designed for:
//! - Carving many allocations out of a single GPU buffer or arena
//! - Zero heap allocations inside the allocator
//! - Bounded bookkeeping proportional to region size
//!
//! ## Architecture Rules
//!
//! 1. **Callers own all memory** - the bookkeeping block is borrowed, never allocated
//! 2. **Offsets, not bytes** - the region's contents are never read or written
//! 3. **Sorted and coalesced** - free ranges stay ordered and merged after every call
//!
//! ## Example
//!
//! ```rust,ignore
//! use freelist_core::{FreeList, FreeListBlock};
//!
//! let mut block = FreeListBlock::for_region(1024)?;
//! let mut list = FreeList::new(1024, block.as_bytes_mut())?;
//!
//! let a = list.allocate(100)?; // 0
//! let b = list.allocate(200)?; // 100
//! list.free(a, 100)?;
//! list.free(b, 200)?;
//! assert_eq!(list.free_space(), 1024);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod block;
pub mod config;
pub mod error;
pub mod layout;
pub mod list;
pub mod record;

pub use block::FreeListBlock;
pub use config::FreeListConfig;
pub use error::{FreeListError, FreeListResult};
pub use layout::{FreeListLayout, HEADER_SIZE, POINTER_WIDTH, RECORD_SIZE};
pub use list::{FreeList, FreeRange, FreeRanges};
pub use record::{RecordRef, TrackPool, TrackRecord, INVALID_SENTINEL};
