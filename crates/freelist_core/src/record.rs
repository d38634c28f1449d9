//! # Track Records
//!
//! Bookkeeping entries and the fixed-capacity pool that lends them out.
//!
//! Records live in a slice carved out of the caller's block. Links between
//! records are slot indices, never addresses, and [`INVALID_SENTINEL`]
//! stands in for both "unused slot" and "no next record".

use bytemuck::{Pod, Zeroable};

/// Marks an unused record (in `offset` and `size`) and a missing link.
pub const INVALID_SENTINEL: u64 = u64::MAX;

/// One contiguous free byte range and its link to the next one.
///
/// Plain old data so it can be viewed directly over the caller's bytes.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Pod, Zeroable)]
pub struct TrackRecord {
    /// Start of the free range within the region.
    pub offset: u64,
    /// Length of the free range in bytes.
    pub size: u64,
    /// Slot index of the next record, or [`INVALID_SENTINEL`].
    pub next: u64,
}

impl TrackRecord {
    /// A record that is available for lending.
    pub const UNUSED: Self = Self {
        offset: INVALID_SENTINEL,
        size: INVALID_SENTINEL,
        next: INVALID_SENTINEL,
    };

    /// Creates an unlinked record describing `[offset, offset + size)`.
    #[inline]
    #[must_use]
    pub const fn new(offset: u64, size: u64) -> Self {
        Self {
            offset,
            size,
            next: INVALID_SENTINEL,
        }
    }

    /// Returns true if the slot is not lent out.
    #[inline]
    #[must_use]
    pub const fn is_unused(&self) -> bool {
        self.offset == INVALID_SENTINEL && self.size == INVALID_SENTINEL
    }

    /// One past the last byte of the range.
    #[inline]
    #[must_use]
    pub const fn end(&self) -> u64 {
        self.offset.saturating_add(self.size)
    }

    #[inline]
    pub(crate) fn next_ref(&self) -> Option<RecordRef> {
        RecordRef::from_link(self.next)
    }
}

/// Stable handle to a record slot in a [`TrackPool`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RecordRef {
    /// Slot index into the pool.
    index: usize,
}

impl RecordRef {
    /// Returns the slot index.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.index
    }

    /// Decodes a stored link; the sentinel decodes to `None`.
    pub(crate) fn from_link(link: u64) -> Option<Self> {
        if link == INVALID_SENTINEL {
            return None;
        }
        usize::try_from(link).ok().map(|index| Self { index })
    }

    /// Encodes an optional handle as a stored link.
    pub(crate) fn to_link(handle: Option<Self>) -> u64 {
        handle.map_or(INVALID_SENTINEL, |handle| handle.index as u64)
    }
}

/// Bounded pool of track records over caller-supplied memory.
///
/// Lending is a linear scan for the first unused slot. That is O(capacity),
/// and capacity scales with region size rather than allocation churn.
///
/// # Thread Safety
///
/// This pool is NOT thread-safe. It is only reachable through its owning
/// free list.
#[derive(Debug)]
pub struct TrackPool<'a> {
    /// The record slots.
    records: &'a mut [TrackRecord],
}

impl<'a> TrackPool<'a> {
    /// Wraps a slice of record slots. Slot contents are left untouched.
    #[must_use]
    pub fn new(records: &'a mut [TrackRecord]) -> Self {
        Self { records }
    }

    /// Returns the number of slots.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.records.len()
    }

    /// Returns the number of slots currently lent out.
    #[must_use]
    pub fn in_use(&self) -> usize {
        self.records.iter().filter(|record| !record.is_unused()).count()
    }

    /// Lends the first unused record, or `None` if every slot is taken.
    ///
    /// The lent record holds a zero-sized placeholder range until the caller
    /// fills it in.
    pub fn borrow(&mut self) -> Option<RecordRef> {
        let index = self.records.iter().position(TrackRecord::is_unused)?;
        self.records[index] = TrackRecord::new(0, 0);
        Some(RecordRef { index })
    }

    /// Returns a record to the pool. O(1).
    pub(crate) fn release(&mut self, handle: RecordRef) {
        self.records[handle.index] = TrackRecord::UNUSED;
    }

    /// Marks every slot unused.
    pub fn invalidate_all(&mut self) {
        self.records.fill(TrackRecord::UNUSED);
    }

    /// Invalidates every slot except the first, which is set to `first`.
    ///
    /// Returns `None` for a pool without slots.
    pub fn reset(&mut self, first: TrackRecord) -> Option<RecordRef> {
        let (head, rest) = self.records.split_first_mut()?;
        *head = first;
        rest.fill(TrackRecord::UNUSED);
        Some(RecordRef { index: 0 })
    }

    /// Gets a lent record.
    #[inline]
    #[must_use]
    pub(crate) fn get(&self, handle: RecordRef) -> &TrackRecord {
        &self.records[handle.index]
    }

    /// Gets a lent record mutably.
    #[inline]
    pub(crate) fn get_mut(&mut self, handle: RecordRef) -> &mut TrackRecord {
        &mut self.records[handle.index]
    }

    #[inline]
    pub(crate) fn records(&self) -> &[TrackRecord] {
        self.records
    }
}
