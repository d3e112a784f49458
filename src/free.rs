// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Free chain.
//!
//! Unused slots form a singly linked chain through their `next` fields,
//! rooted at `head`. The sentinel can never be free, so [`SENTINEL`] doubles
//! as the end-of-chain marker and an empty chain has `head == SENTINEL`.
//!
//! Slots are taken from and returned to the front, so the most recently
//! freed slot is reused first.

use crate::slot::{Idx, SENTINEL, Slot, SlotTag};

/// Head of the free chain. The chain itself lives in the slot table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FreeChain {
    head: Idx,
}

impl FreeChain {
    pub fn new() -> FreeChain {
        return FreeChain { head: SENTINEL };
    }

    /// First free slot, or [`SENTINEL`] if none.
    #[inline(always)]
    pub fn head(&self) -> Idx {
        return self.head;
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        return self.head == SENTINEL;
    }

    /// Thread `slots[start..end]` onto the front of the chain in ascending
    /// order, followed by whatever was already free.
    pub fn thread(&mut self, slots: &mut [Slot], start: Idx, end: Idx) {
        debug_assert!(start > SENTINEL);
        debug_assert!(end <= slots.len());
        if start >= end {
            return;
        }
        for idx in start..end - 1 {
            slots[idx] = Slot::free(idx + 1);
        }
        slots[end - 1] = Slot::free(self.head);
        self.head = start;
    }

    /// Take the first free slot off the chain.
    ///
    /// The returned slot is still tagged free; the caller links it in.
    pub fn pop(&mut self, slots: &[Slot]) -> Option<Idx> {
        if self.is_empty() {
            return None;
        }
        let idx = self.head;
        self.head = slots[idx].next;
        return Some(idx);
    }

    /// Return an unlinked slot to the front of the chain.
    pub fn push(&mut self, slots: &mut [Slot], idx: Idx) {
        debug_assert!(idx != SENTINEL);
        debug_assert!(slots[idx].tag != SlotTag::Free);
        slots[idx] = Slot::free(self.head);
        self.head = idx;
    }

    /// Walk the chain. Stops after `slots.len()` steps, so a cycle cannot
    /// hang the caller.
    pub fn iter<'a>(&self, slots: &'a [Slot]) -> impl Iterator<Item = Idx> + 'a {
        let mut idx = self.head;
        let mut budget = slots.len();
        return std::iter::from_fn(move || {
            if idx == SENTINEL || budget == 0 || idx >= slots.len() {
                return None;
            }
            budget -= 1;
            let current = idx;
            idx = slots[idx].next;
            return Some(current);
        });
    }
}

impl Default for FreeChain {
    fn default() -> Self {
        return Self::new();
    }
}
