//! # Free-Range List
//!
//! First-fit sub-allocator that tracks the free byte ranges of one
//! fixed-size region. Allocations are plain `(offset, size)` pairs; the
//! region's bytes are never touched.
//!
//! ## Invariants
//!
//! Before and after every public operation:
//!
//! 1. Records are sorted strictly ascending by offset.
//! 2. Ranges never overlap.
//! 3. Adjacent free ranges are always merged into one record.
//! 4. `free_space() + outstanding allocation bytes == total_size()`.

use std::cmp::Ordering;
use std::iter::FusedIterator;

use tracing::{debug, warn};

use crate::error::{FreeListError, FreeListResult};
use crate::layout::{FreeListLayout, FreeListState, HEADER_SIZE};
use crate::record::{RecordRef, TrackPool, TrackRecord};

/// A free list laid out in place over a caller-owned block.
///
/// The block holds a small header followed by the track record pool. The
/// list borrows it mutably for its whole lifetime and never allocates.
///
/// # Thread Safety
///
/// This list is NOT thread-safe. Use one list per thread or wrap in a mutex.
///
/// # Example
///
/// ```rust,ignore
/// // Phase 1: ask how much bookkeeping memory is needed
/// let required = FreeList::required_bytes(1024);
///
/// // Phase 2: hand over the block
/// let mut block = FreeListBlock::new(required as usize);
/// let mut list = FreeList::new(1024, block.as_bytes_mut())?;
///
/// let offset = list.allocate(100)?;
/// list.free(offset, 100)?;
/// assert_eq!(list.free_space(), 1024);
/// ```
#[derive(Debug)]
pub struct FreeList<'a> {
    /// Header at the start of the block.
    state: &'a mut FreeListState,
    /// Track records following the header.
    pool: TrackPool<'a>,
    /// Bytes of the block in use.
    block_size: usize,
}

impl<'a> FreeList<'a> {
    /// Returns the bytes a backing block must provide to track `total_size`.
    #[inline]
    #[must_use]
    pub const fn required_bytes(total_size: u64) -> u64 {
        FreeListLayout::for_region(total_size).required_bytes()
    }

    /// Creates a free list for a region of `total_size` bytes over `block`.
    ///
    /// The whole region starts out as a single free range. `block` must be
    /// 8-byte aligned and at least [`FreeList::required_bytes`] long; any
    /// prior contents are overwritten.
    pub fn new(total_size: u64, block: &'a mut [u8]) -> FreeListResult<Self> {
        let mut list = Self::carve(FreeListLayout::for_region(total_size), block)?;
        list.clear();
        debug!(
            total_size,
            capacity = list.capacity(),
            block_size = list.block_size,
            "free list created"
        );
        Ok(list)
    }

    /// Views `block` as a header plus record pool, with every record unused.
    fn carve(layout: FreeListLayout, block: &'a mut [u8]) -> FreeListResult<Self> {
        if layout.capacity() == 0 {
            return Err(FreeListError::RegionTooSmall {
                total_size: layout.total_size(),
            });
        }

        let required = layout.required_bytes();
        let provided = block.len();
        let block_size = match usize::try_from(required) {
            Ok(block_size) if block_size <= provided => block_size,
            _ => {
                return Err(FreeListError::BlockTooSmall {
                    required,
                    provided: provided as u64,
                })
            }
        };

        let (used, _) = block.split_at_mut(block_size);
        let (header, records) = used.split_at_mut(HEADER_SIZE);
        let state: &'a mut FreeListState =
            bytemuck::try_from_bytes_mut(header).map_err(|_| FreeListError::MisalignedBlock)?;
        let records: &'a mut [TrackRecord] =
            bytemuck::try_cast_slice_mut(records).map_err(|_| FreeListError::MisalignedBlock)?;

        *state = FreeListState {
            total_size: layout.total_size(),
            capacity: layout.capacity(),
            head: RecordRef::to_link(None),
        };
        let mut pool = TrackPool::new(records);
        pool.invalidate_all();

        Ok(Self {
            state,
            pool,
            block_size,
        })
    }

    /// Size of the managed region in bytes.
    #[inline]
    #[must_use]
    pub fn total_size(&self) -> u64 {
        self.state.total_size
    }

    /// Number of track records, the ceiling on simultaneous fragments.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> u64 {
        self.state.capacity
    }

    /// Bytes of the backing block used for bookkeeping.
    #[inline]
    #[must_use]
    pub const fn block_size(&self) -> usize {
        self.block_size
    }

    /// Allocates `size` bytes and returns their offset in the region.
    ///
    /// First fit: the lowest free range that can hold `size` is used. An
    /// exact fit consumes the record; a larger range is shrunk from the front.
    pub fn allocate(&mut self, size: u64) -> FreeListResult<u64> {
        if size == 0 {
            return Err(FreeListError::ZeroSize);
        }

        let mut previous = None;
        let mut cursor = self.head();
        while let Some(current) = cursor {
            let record = *self.pool.get(current);
            match record.size.cmp(&size) {
                Ordering::Equal => {
                    self.link(previous, record.next_ref());
                    self.pool.release(current);
                    return Ok(record.offset);
                }
                Ordering::Greater => {
                    let shrunk = self.pool.get_mut(current);
                    shrunk.offset += size;
                    shrunk.size -= size;
                    return Ok(record.offset);
                }
                Ordering::Less => {
                    previous = cursor;
                    cursor = record.next_ref();
                }
            }
        }

        let available = self.free_space();
        warn!(
            requested = size,
            available, "no free range large enough for allocation"
        );
        Err(FreeListError::InsufficientSpace {
            requested: size,
            available,
        })
    }

    /// Returns `[offset, offset + size)` to the free list.
    ///
    /// The range is merged with a free neighbour on either side. A new
    /// record is only needed when neither neighbour touches it.
    ///
    /// Outstanding allocations are not tracked: a range is rejected with
    /// [`FreeListError::NotFound`] only when it overlaps free space or runs
    /// past the region, and the list is left unchanged.
    pub fn free(&mut self, offset: u64, size: u64) -> FreeListResult<()> {
        if size == 0 {
            return Err(FreeListError::ZeroSize);
        }
        let end = match offset.checked_add(size) {
            Some(end) if end <= self.state.total_size => end,
            _ => return Err(Self::unmatched(offset, size)),
        };

        // Find the free neighbours: the last record below `offset` and the
        // first record at or above it.
        let mut previous = None;
        let mut cursor = self.head();
        while let Some(current) = cursor {
            let record = self.pool.get(current);
            if record.offset >= offset {
                break;
            }
            previous = cursor;
            cursor = record.next_ref();
        }

        let overlaps_previous = previous.is_some_and(|handle| self.pool.get(handle).end() > offset);
        let overlaps_next = cursor.is_some_and(|handle| self.pool.get(handle).offset < end);
        if overlaps_previous || overlaps_next {
            return Err(Self::unmatched(offset, size));
        }

        let before = previous.filter(|&handle| self.pool.get(handle).end() == offset);
        let after = cursor.filter(|&handle| self.pool.get(handle).offset == end);
        match (before, after) {
            (Some(before), Some(after)) => {
                let absorbed = *self.pool.get(after);
                let merged = self.pool.get_mut(before);
                merged.size += size + absorbed.size;
                merged.next = absorbed.next;
                self.pool.release(after);
            }
            (Some(before), None) => {
                self.pool.get_mut(before).size += size;
            }
            (None, Some(after)) => {
                let merged = self.pool.get_mut(after);
                merged.offset = offset;
                merged.size += size;
            }
            (None, None) => {
                let Some(inserted) = self.pool.borrow() else {
                    let capacity = self.capacity();
                    warn!(
                        offset,
                        size, capacity, "track record pool exhausted, free rejected"
                    );
                    return Err(FreeListError::PoolExhausted { capacity });
                };
                *self.pool.get_mut(inserted) = TrackRecord {
                    offset,
                    size,
                    next: RecordRef::to_link(cursor),
                };
                self.link(previous, Some(inserted));
            }
        }
        Ok(())
    }

    /// Builds a free list for a grown region over `block`.
    ///
    /// Phase 1 of a resize is [`FreeList::required_bytes`] with the new size.
    /// Every free range is copied over and `[total_size, new_total_size)` is
    /// added as free space, merged into the last range if it touches the old
    /// end. `self` is left intact; copying payload bytes and releasing the old
    /// block is up to the caller.
    pub fn resize<'b>(
        &self,
        new_total_size: u64,
        block: &'b mut [u8],
    ) -> FreeListResult<FreeList<'b>> {
        let old_total_size = self.total_size();
        if new_total_size < old_total_size {
            return Err(FreeListError::ShrinkUnsupported {
                current: old_total_size,
                requested: new_total_size,
            });
        }

        let mut resized = FreeList::carve(FreeListLayout::for_region(new_total_size), block)?;

        let mut tail = None;
        for range in self.iter() {
            tail = Some(resized.push_back(tail, range.offset, range.size)?);
        }

        let growth = new_total_size - old_total_size;
        if growth > 0 {
            match tail.filter(|&handle| resized.pool.get(handle).end() == old_total_size) {
                Some(last) => resized.pool.get_mut(last).size += growth,
                None => {
                    resized.push_back(tail, old_total_size, growth)?;
                }
            }
        }

        debug!(
            old_total_size,
            new_total_size,
            capacity = resized.capacity(),
            fragments = resized.fragment_count(),
            "free list resized"
        );
        Ok(resized)
    }

    /// Frees the whole region, discarding every outstanding allocation.
    ///
    /// The backing block is reused as is. O(capacity).
    pub fn clear(&mut self) {
        let whole = TrackRecord::new(0, self.state.total_size);
        self.state.head = RecordRef::to_link(self.pool.reset(whole));
        debug!(total_size = self.state.total_size, "free list cleared");
    }

    /// Total free bytes across all fragments.
    #[must_use]
    pub fn free_space(&self) -> u64 {
        self.iter().map(|range| range.size).sum()
    }

    /// Number of free fragments.
    #[must_use]
    pub fn fragment_count(&self) -> usize {
        self.iter().count()
    }

    /// Iterates the free ranges in ascending offset order.
    #[must_use]
    pub fn iter(&self) -> FreeRanges<'_> {
        FreeRanges {
            records: self.pool.records(),
            cursor: self.head(),
        }
    }

    #[inline]
    fn head(&self) -> Option<RecordRef> {
        RecordRef::from_link(self.state.head)
    }

    /// Points `previous` (or the head when `None`) at `next`.
    fn link(&mut self, previous: Option<RecordRef>, next: Option<RecordRef>) {
        let link = RecordRef::to_link(next);
        match previous {
            Some(previous) => self.pool.get_mut(previous).next = link,
            None => self.state.head = link,
        }
    }

    /// Appends a new record after `tail` and returns it.
    fn push_back(
        &mut self,
        tail: Option<RecordRef>,
        offset: u64,
        size: u64,
    ) -> FreeListResult<RecordRef> {
        let handle = self.pool.borrow().ok_or(FreeListError::PoolExhausted {
            capacity: self.state.capacity,
        })?;
        *self.pool.get_mut(handle) = TrackRecord::new(offset, size);
        self.link(tail, Some(handle));
        Ok(handle)
    }

    fn unmatched(offset: u64, size: u64) -> FreeListError {
        warn!(offset, size, "freed range does not fit the free list");
        FreeListError::NotFound { offset, size }
    }
}

impl<'l> IntoIterator for &'l FreeList<'_> {
    type Item = FreeRange;
    type IntoIter = FreeRanges<'l>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// One free fragment of the region.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FreeRange {
    /// Start of the range.
    pub offset: u64,
    /// Length in bytes.
    pub size: u64,
}

impl FreeRange {
    /// One past the last byte of the range.
    #[inline]
    #[must_use]
    pub const fn end(&self) -> u64 {
        self.offset.saturating_add(self.size)
    }
}

/// Iterator over the free ranges of a [`FreeList`].
#[derive(Clone, Debug)]
pub struct FreeRanges<'l> {
    records: &'l [TrackRecord],
    cursor: Option<RecordRef>,
}

impl Iterator for FreeRanges<'_> {
    type Item = FreeRange;

    fn next(&mut self) -> Option<Self::Item> {
        let record = self.records.get(self.cursor?.index())?;
        self.cursor = record.next_ref();
        Some(FreeRange {
            offset: record.offset,
            size: record.size,
        })
    }
}

impl FusedIterator for FreeRanges<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::FreeListBlock;

    fn ranges(list: &FreeList<'_>) -> Vec<(u64, u64)> {
        list.iter().map(|range| (range.offset, range.size)).collect()
    }

    #[test]
    fn test_new_list_is_one_range() {
        let mut block = FreeListBlock::for_region(1024).unwrap();
        let list = FreeList::new(1024, block.as_bytes_mut()).unwrap();

        assert_eq!(ranges(&list), vec![(0, 1024)]);
        assert_eq!(list.free_space(), 1024);
        assert_eq!(list.total_size(), 1024);
        assert_eq!(list.capacity(), 128);
    }

    #[test]
    fn test_block_too_small() {
        let required = FreeList::required_bytes(1024);
        let mut block = FreeListBlock::new(required as usize - 1);

        let result = FreeList::new(1024, block.as_bytes_mut());
        assert_eq!(
            result.unwrap_err(),
            FreeListError::BlockTooSmall {
                required,
                provided: required - 1,
            }
        );
    }

    #[test]
    fn test_misaligned_block() {
        let required = FreeList::required_bytes(64) as usize;
        let mut block = FreeListBlock::new(required + 8);

        let result = FreeList::new(64, &mut block.as_bytes_mut()[1..]);
        assert_eq!(result.unwrap_err(), FreeListError::MisalignedBlock);
    }

    #[test]
    fn test_region_too_small() {
        let mut block = FreeListBlock::new(64);
        let result = FreeList::new(4, block.as_bytes_mut());
        assert_eq!(
            result.unwrap_err(),
            FreeListError::RegionTooSmall { total_size: 4 }
        );
    }

    #[test]
    fn test_allocate_first_fit() {
        let mut block = FreeListBlock::for_region(1024).unwrap();
        let mut list = FreeList::new(1024, block.as_bytes_mut()).unwrap();

        assert_eq!(list.allocate(100).unwrap(), 0);
        assert_eq!(list.allocate(200).unwrap(), 100);
        assert_eq!(ranges(&list), vec![(300, 724)]);
    }

    #[test]
    fn test_allocate_exact_fit_removes_record() {
        let mut block = FreeListBlock::for_region(1024).unwrap();
        let mut list = FreeList::new(1024, block.as_bytes_mut()).unwrap();

        let a = list.allocate(100).unwrap();
        let _b = list.allocate(100).unwrap();
        list.free(a, 100).unwrap();
        assert_eq!(list.fragment_count(), 2);

        assert_eq!(list.allocate(100).unwrap(), a);
        assert_eq!(ranges(&list), vec![(200, 824)]);
    }

    #[test]
    fn test_allocate_skips_small_ranges() {
        let mut block = FreeListBlock::for_region(1024).unwrap();
        let mut list = FreeList::new(1024, block.as_bytes_mut()).unwrap();

        let a = list.allocate(50).unwrap();
        let _b = list.allocate(50).unwrap();
        list.free(a, 50).unwrap();

        assert_eq!(list.allocate(60).unwrap(), 100);
        assert_eq!(ranges(&list), vec![(0, 50), (160, 864)]);
    }

    #[test]
    fn test_allocate_whole_region_empties_list() {
        let mut block = FreeListBlock::for_region(256).unwrap();
        let mut list = FreeList::new(256, block.as_bytes_mut()).unwrap();

        assert_eq!(list.allocate(256).unwrap(), 0);
        assert_eq!(list.fragment_count(), 0);
        assert_eq!(list.free_space(), 0);

        list.free(0, 256).unwrap();
        assert_eq!(ranges(&list), vec![(0, 256)]);
    }

    #[test]
    fn test_allocate_insufficient_space() {
        let mut block = FreeListBlock::for_region(128).unwrap();
        let mut list = FreeList::new(128, block.as_bytes_mut()).unwrap();
        let _ = list.allocate(100).unwrap();

        assert_eq!(
            list.allocate(29).unwrap_err(),
            FreeListError::InsufficientSpace {
                requested: 29,
                available: 28,
            }
        );
        assert_eq!(ranges(&list), vec![(100, 28)]);
    }

    #[test]
    fn test_zero_size_rejected() {
        let mut block = FreeListBlock::for_region(64).unwrap();
        let mut list = FreeList::new(64, block.as_bytes_mut()).unwrap();

        assert_eq!(list.allocate(0).unwrap_err(), FreeListError::ZeroSize);
        assert_eq!(list.free(0, 0).unwrap_err(), FreeListError::ZeroSize);
    }

    #[test]
    fn test_free_coalesces_backward() {
        let mut block = FreeListBlock::for_region(1024).unwrap();
        let mut list = FreeList::new(1024, block.as_bytes_mut()).unwrap();

        let a = list.allocate(100).unwrap();
        let b = list.allocate(100).unwrap();
        let _c = list.allocate(100).unwrap();
        list.free(a, 100).unwrap();
        list.free(b, 100).unwrap();

        assert_eq!(ranges(&list), vec![(0, 200), (300, 724)]);
    }

    #[test]
    fn test_free_coalesces_forward() {
        let mut block = FreeListBlock::for_region(1024).unwrap();
        let mut list = FreeList::new(1024, block.as_bytes_mut()).unwrap();

        let _a = list.allocate(100).unwrap();
        let b = list.allocate(100).unwrap();
        list.free(b, 100).unwrap();

        assert_eq!(ranges(&list), vec![(100, 924)]);
    }

    #[test]
    fn test_free_coalesces_both_ways() {
        let mut block = FreeListBlock::for_region(1024).unwrap();
        let mut list = FreeList::new(1024, block.as_bytes_mut()).unwrap();

        let a = list.allocate(100).unwrap();
        let b = list.allocate(100).unwrap();
        let c = list.allocate(100).unwrap();
        list.free(a, 100).unwrap();
        list.free(c, 100).unwrap();
        assert_eq!(list.fragment_count(), 2);

        list.free(b, 100).unwrap();
        assert_eq!(ranges(&list), vec![(0, 1024)]);
    }

    #[test]
    fn test_free_appends_after_tail() {
        let mut block = FreeListBlock::for_region(300).unwrap();
        let mut list = FreeList::new(300, block.as_bytes_mut()).unwrap();

        let a = list.allocate(100).unwrap();
        let b = list.allocate(100).unwrap();
        let c = list.allocate(100).unwrap();
        assert_eq!(list.fragment_count(), 0);

        list.free(a, 100).unwrap();
        list.free(c, 100).unwrap();
        assert_eq!(ranges(&list), vec![(0, 100), (200, 100)]);

        list.free(b, 100).unwrap();
        assert_eq!(ranges(&list), vec![(0, 300)]);
    }

    #[test]
    fn test_free_rejects_double_free() {
        let mut block = FreeListBlock::for_region(1024).unwrap();
        let mut list = FreeList::new(1024, block.as_bytes_mut()).unwrap();

        let a = list.allocate(100).unwrap();
        let _b = list.allocate(100).unwrap();
        list.free(a, 100).unwrap();

        assert_eq!(
            list.free(a, 100).unwrap_err(),
            FreeListError::NotFound {
                offset: a,
                size: 100
            }
        );
        assert_eq!(ranges(&list), vec![(0, 100), (200, 824)]);
    }

    #[test]
    fn test_free_rejects_out_of_region() {
        let mut block = FreeListBlock::for_region(128).unwrap();
        let mut list = FreeList::new(128, block.as_bytes_mut()).unwrap();
        let _ = list.allocate(128).unwrap();

        assert!(matches!(
            list.free(100, 50),
            Err(FreeListError::NotFound { .. })
        ));
        assert!(matches!(
            list.free(u64::MAX, 2),
            Err(FreeListError::NotFound { .. })
        ));
        assert_eq!(list.free_space(), 0);
    }

    #[test]
    fn test_free_pool_exhausted() {
        // 16 bytes of region, two records.
        let mut block = FreeListBlock::for_region(16).unwrap();
        let mut list = FreeList::new(16, block.as_bytes_mut()).unwrap();
        assert_eq!(list.capacity(), 2);

        for expected in 0..16 {
            assert_eq!(list.allocate(1).unwrap(), expected);
        }
        list.free(0, 1).unwrap();
        list.free(2, 1).unwrap();

        assert_eq!(
            list.free(4, 1).unwrap_err(),
            FreeListError::PoolExhausted { capacity: 2 }
        );
        assert_eq!(ranges(&list), vec![(0, 1), (2, 1)]);

        // Merging needs no new record.
        list.free(1, 1).unwrap();
        assert_eq!(ranges(&list), vec![(0, 3)]);
    }

    #[test]
    fn test_clear_resets_to_one_range() {
        let mut block = FreeListBlock::for_region(1024).unwrap();
        let mut list = FreeList::new(1024, block.as_bytes_mut()).unwrap();

        let a = list.allocate(100).unwrap();
        let _ = list.allocate(100).unwrap();
        list.free(a, 100).unwrap();

        list.clear();
        assert_eq!(ranges(&list), vec![(0, 1024)]);
        assert_eq!(list.allocate(1024).unwrap(), 0);
    }

    #[test]
    fn test_resize_extends_trailing_range() {
        let mut block = FreeListBlock::for_region(1024).unwrap();
        let mut list = FreeList::new(1024, block.as_bytes_mut()).unwrap();
        let a = list.allocate(100).unwrap();
        let _ = list.allocate(100).unwrap();
        list.free(a, 100).unwrap();

        let mut grown = FreeListBlock::for_region(2048).unwrap();
        let resized = list.resize(2048, grown.as_bytes_mut()).unwrap();

        assert_eq!(ranges(&resized), vec![(0, 100), (200, 1848)]);
        assert_eq!(resized.capacity(), 256);
    }

    #[test]
    fn test_resize_appends_when_full() {
        let mut block = FreeListBlock::for_region(1024).unwrap();
        let mut list = FreeList::new(1024, block.as_bytes_mut()).unwrap();
        let _ = list.allocate(1024).unwrap();

        let mut grown = FreeListBlock::for_region(1536).unwrap();
        let resized = list.resize(1536, grown.as_bytes_mut()).unwrap();

        assert_eq!(ranges(&resized), vec![(1024, 512)]);
    }

    #[test]
    fn test_resize_appends_after_allocated_tail() {
        let mut block = FreeListBlock::for_region(1024).unwrap();
        let mut list = FreeList::new(1024, block.as_bytes_mut()).unwrap();
        let a = list.allocate(100).unwrap();
        let _ = list.allocate(924).unwrap();
        list.free(a, 100).unwrap();

        let mut grown = FreeListBlock::for_region(2048).unwrap();
        let resized = list.resize(2048, grown.as_bytes_mut()).unwrap();

        assert_eq!(ranges(&resized), vec![(0, 100), (1024, 1024)]);
    }

    #[test]
    fn test_resize_leaves_original_intact() {
        let mut block = FreeListBlock::for_region(1024).unwrap();
        let mut list = FreeList::new(1024, block.as_bytes_mut()).unwrap();
        let _ = list.allocate(10).unwrap();

        let mut grown = FreeListBlock::for_region(2048).unwrap();
        let resized = list.resize(2048, grown.as_bytes_mut()).unwrap();
        assert_eq!(resized.free_space(), 2038);
        drop(resized);

        assert_eq!(ranges(&list), vec![(10, 1014)]);
        assert_eq!(list.allocate(1014).unwrap(), 10);
    }

    #[test]
    fn test_resize_rejects_shrink() {
        let mut block = FreeListBlock::for_region(1024).unwrap();
        let list = FreeList::new(1024, block.as_bytes_mut()).unwrap();

        let mut smaller = FreeListBlock::for_region(512).unwrap();
        assert_eq!(
            list.resize(512, smaller.as_bytes_mut()).unwrap_err(),
            FreeListError::ShrinkUnsupported {
                current: 1024,
                requested: 512,
            }
        );
    }

    #[test]
    fn test_resize_needs_big_enough_block() {
        let mut block = FreeListBlock::for_region(1024).unwrap();
        let mut list = FreeList::new(1024, block.as_bytes_mut()).unwrap();
        let _ = list.allocate(100).unwrap();

        let mut stale = FreeListBlock::for_region(1024).unwrap();
        assert!(matches!(
            list.resize(2048, stale.as_bytes_mut()),
            Err(FreeListError::BlockTooSmall { .. })
        ));
        assert_eq!(ranges(&list), vec![(100, 924)]);
        assert_eq!(list.allocate(924).unwrap(), 100);
    }

    #[test]
    fn test_resize_pool_exhausted_keeps_original() {
        // 16 bytes of region, two records; 17 bytes still only has two.
        let mut block = FreeListBlock::for_region(16).unwrap();
        let mut list = FreeList::new(16, block.as_bytes_mut()).unwrap();
        for _ in 0..16 {
            let _ = list.allocate(1).unwrap();
        }
        list.free(0, 1).unwrap();
        list.free(2, 1).unwrap();

        // The growth does not touch the last range, so it needs a third record.
        let mut grown = FreeListBlock::for_region(17).unwrap();
        assert_eq!(
            list.resize(17, grown.as_bytes_mut()).unwrap_err(),
            FreeListError::PoolExhausted { capacity: 2 }
        );

        assert_eq!(ranges(&list), vec![(0, 1), (2, 1)]);
        assert_eq!(list.free_space(), 2);
        list.free(1, 1).unwrap();
        assert_eq!(ranges(&list), vec![(0, 3)]);
    }
}
