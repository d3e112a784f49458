// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Slot records and the table that stores them.
//!
//! All slots live in a single `Vec<Slot>`. Each record carries both links,
//! the payload and an explicit tag, so growing the table is one reservation
//! and the link fields of a slot can never end up with different lengths.
//!
//! ```text
//! index:    0          1          2          3          4
//!        ┌────────┐ ┌────────┐ ┌────────┐ ┌────────┐ ┌────────┐
//! tag    │Sentinel│ │Occupied│ │  Free  │ │Occupied│ │  Free  │
//! next   │   1    │ │   3    │ │   4    │ │   0    │ │   0    │
//! prev   │   3    │ │   0    │ │ POISON │ │   1    │ │ POISON │
//!        └────────┘ └────────┘ └────────┘ └────────┘ └────────┘
//!
//! list order: 0 → 1 → 3 → 0        free chain: free=2 → 4 → 0
//! ```

use crate::error::ListError;

/// Slot index type.
pub type Idx = usize;

/// Element type stored in every slot.
pub type Elem = f32;

/// The permanent sentinel slot; marks both ends of the list and the end of
/// the free chain.
pub const SENTINEL: Idx = 0;

/// Marker written into the `prev` link of free slots.
pub const POISON: Idx = Idx::MAX;

/// What a slot currently holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotTag {
    Sentinel,
    Occupied,
    Free,
}

/// One record of the slot table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slot {
    /// Next slot in list order, or next free slot.
    pub next: Idx,
    /// Previous slot in list order; [`POISON`] for free slots.
    pub prev: Idx,
    pub value: Elem,
    pub tag: SlotTag,
}

impl Slot {
    /// An empty, self-linked sentinel.
    pub fn sentinel() -> Slot {
        return Slot {
            next: SENTINEL,
            prev: SENTINEL,
            value: 0.0,
            tag: SlotTag::Sentinel,
        };
    }

    /// A free slot pointing at `next` in the free chain.
    pub fn free(next: Idx) -> Slot {
        return Slot {
            next,
            prev: POISON,
            value: 0.0,
            tag: SlotTag::Free,
        };
    }

    #[inline(always)]
    pub fn is_free(&self) -> bool {
        return self.tag == SlotTag::Free;
    }

    #[inline(always)]
    pub fn is_occupied(&self) -> bool {
        return self.tag == SlotTag::Occupied;
    }
}

/// Allocate a table of `capacity` slots: a sentinel followed by placeholder
/// free records. The caller threads the free chain.
pub fn alloc_table(capacity: usize) -> Result<Vec<Slot>, ListError> {
    let mut table = Vec::new();
    if table.try_reserve_exact(capacity).is_err() {
        return Err(ListError::Alloc { slots: capacity });
    }
    table.push(Slot::sentinel());
    table.resize(capacity, Slot::free(SENTINEL));
    return Ok(table);
}

/// Grow `table` to `capacity` slots, appending placeholder free records.
///
/// Either the whole table grows or nothing changes.
pub fn extend_table(table: &mut Vec<Slot>, capacity: usize) -> Result<(), ListError> {
    debug_assert!(capacity > table.len());
    let additional = capacity - table.len();
    if table.try_reserve_exact(additional).is_err() {
        return Err(ListError::Alloc { slots: capacity });
    }
    table.resize(capacity, Slot::free(SENTINEL));
    return Ok(());
}
