//! # Owned Backing Blocks
//!
//! Word-aligned byte storage for callers that want the free list's
//! bookkeeping on the heap instead of in memory they manage themselves.

use crate::error::{FreeListError, FreeListResult};
use crate::layout::FreeListLayout;

/// A zeroed, 8-byte aligned block sized for a free list layout.
///
/// The free list borrows the block for its whole lifetime; drop the list
/// before dropping or reusing the block.
///
/// # Example
///
/// ```rust,ignore
/// let mut block = FreeListBlock::for_region(4096)?;
/// let mut list = FreeList::new(4096, block.as_bytes_mut())?;
/// let offset = list.allocate(256)?;
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FreeListBlock {
    /// Backing words; `u64` storage guarantees alignment.
    words: Box<[u64]>,
    /// Length in bytes exposed to callers.
    len: usize,
}

impl FreeListBlock {
    /// Allocates a block of at least `len` bytes.
    ///
    /// # Panics
    ///
    /// Panics if the allocation fails; use [`FreeListBlock::try_new`] to get
    /// an error instead.
    #[must_use]
    pub fn new(len: usize) -> Self {
        let words = vec![0u64; len.div_ceil(8)].into_boxed_slice();
        Self { words, len }
    }

    /// Allocates a block of at least `len` bytes, reporting failure as
    /// [`FreeListError::LayoutTooLarge`].
    pub fn try_new(len: usize) -> FreeListResult<Self> {
        let too_large = FreeListError::LayoutTooLarge {
            required: len as u64,
        };
        if isize::try_from(len).is_err() {
            return Err(too_large);
        }

        let word_count = len.div_ceil(8);
        let mut words = Vec::new();
        words
            .try_reserve_exact(word_count)
            .map_err(|_| too_large.clone())?;
        words.resize(word_count, 0u64);
        Ok(Self {
            words: words.into_boxed_slice(),
            len,
        })
    }

    /// Allocates a block large enough for `layout`.
    pub fn for_layout(layout: &FreeListLayout) -> FreeListResult<Self> {
        let required = layout.required_bytes();
        let len = usize::try_from(required)
            .map_err(|_| FreeListError::LayoutTooLarge { required })?;
        Self::try_new(len)
    }

    /// Allocates a block large enough to track a region of `total_size` bytes.
    pub fn for_region(total_size: u64) -> FreeListResult<Self> {
        Self::for_layout(&FreeListLayout::for_region(total_size))
    }

    /// Length in bytes.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true for a zero-length block.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Views the block as bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        let bytes: &[u8] = bytemuck::cast_slice(&self.words[..]);
        &bytes[..self.len]
    }

    /// Views the block as mutable bytes.
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        let bytes: &mut [u8] = bytemuck::cast_slice_mut(&mut self.words[..]);
        &mut bytes[..self.len]
    }
}

impl AsRef<[u8]> for FreeListBlock {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl AsMut<[u8]> for FreeListBlock {
    fn as_mut(&mut self) -> &mut [u8] {
        self.as_bytes_mut()
    }
}
