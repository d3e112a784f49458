// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Slot List
//!
//! A circular doubly-linked list whose nodes live in one contiguous slot
//! table instead of individual allocations. Slot 0 is a permanent sentinel:
//! its `next` is the head and its `prev` is the tail. Unused slots are kept
//! on a free chain, so inserts only touch the allocator when the chain runs
//! dry and the table has to grow.
//!
//! # Addressing
//!
//! - A *slot* (absolute index) is where an element lives. It never changes
//!   while the element is in the list.
//! - A *position* is the 1-based rank of an element in list order.
//!
//! The absolute operations ([`SlotList::insert_after`], [`SlotList::remove`])
//! are O(1) amortized. The positional ones ([`SlotList::insert_at`],
//! [`SlotList::remove_at`]) first translate a position into a slot, which is
//! O(1) while the list is sorted (see [`State::OkSorted`]) and a walk from
//! the nearer end otherwise.
//!
//! # Operations
//!
//! - `insert_after(slot, value)`: O(1) amortized - link after `slot` (0 = new head)
//! - `remove(slot)`: O(1) - unlink and free `slot`
//! - `insert_at(position, value)`: O(position) - `value` ends up at `position`
//! - `remove_at(position)`: O(position) - remove the element at `position`
//! - `grow()`: O(capacity) - only when the free chain is empty
//!
//! ```text
//! slot:    0      1      2      3
//!        [S] -> [10] -> [30] -> [20] -> back to S
//!
//! positions: 10 @ 1, 30 @ 2, 20 @ 3 (slot 2 was inserted after slot 1)
//! ```

use std::fmt;

use tracing::{debug, trace, warn};

use crate::error::ListError;
use crate::free::FreeChain;
use crate::growth::GrowthPolicy;
use crate::slot::{Elem, Idx, SENTINEL, Slot, SlotTag, alloc_table, extend_table};
use crate::state::State;

/// A doubly-linked list stored in a growable slot table.
#[derive(Clone)]
pub struct SlotList {
    /// Slot table; index 0 is the sentinel. Empty once finalized.
    pub(crate) slots: Vec<Slot>,
    /// Chain of unused slots.
    pub(crate) free: FreeChain,
    /// Number of occupied slots.
    pub(crate) len: usize,
    pub(crate) state: State,
    pub(crate) policy: GrowthPolicy,
    /// Number of times the table has grown since the last init.
    pub(crate) growths: usize,
}

impl SlotList {
    /// Create a list with room for `capacity` elements before it grows.
    pub fn with_capacity(capacity: usize) -> Result<SlotList, ListError> {
        return SlotList::with_policy(capacity, GrowthPolicy::default());
    }

    /// Create a list with room for `capacity` elements and a custom growth policy.
    pub fn with_policy(capacity: usize, policy: GrowthPolicy) -> Result<SlotList, ListError> {
        let mut list = SlotList {
            slots: Vec::new(),
            free: FreeChain::new(),
            len: 0,
            state: State::Finalized,
            policy,
            growths: 0,
        };
        list.init(capacity)?;
        return Ok(list);
    }

    /// (Re-)initialize the list with room for `capacity` elements.
    ///
    /// Any previous contents are dropped. A capacity of zero is rejected and
    /// leaves the list as it was. If storage cannot be allocated the list
    /// ends up in [`State::AllocError`] and rejects everything until the
    /// next successful `init`.
    pub fn init(&mut self, capacity: usize) -> Result<(), ListError> {
        // One extra slot for the sentinel.
        let slots = match capacity.checked_add(1) {
            Some(slots) if slots >= 2 => slots,
            _ => return Err(ListError::Size { requested: capacity }),
        };

        let table = match alloc_table(slots) {
            Ok(table) => table,
            Err(err) => {
                warn!(slots, "failed to allocate slot table");
                self.release();
                self.state = State::AllocError;
                return Err(err);
            }
        };

        self.slots = table;
        self.free = FreeChain::new();
        self.free.thread(&mut self.slots, 1, slots);
        self.len = 0;
        self.growths = 0;
        self.state = State::OkSorted;

        debug!(slots, "list initialized");
        self.check_invariants();
        return Ok(());
    }

    /// Release all storage. The list rejects every operation afterwards
    /// until it is re-initialized.
    pub fn finalize(&mut self) {
        self.release();
        self.state = State::Finalized;
        debug!("list finalized");
    }

    fn release(&mut self) {
        self.slots = Vec::new();
        self.free = FreeChain::new();
        self.len = 0;
    }

    /// `Ok(())` if the list can be mutated, otherwise the state it is stuck in.
    pub fn health_check(&self) -> Result<(), ListError> {
        if self.state.is_ok() {
            return Ok(());
        }
        return Err(ListError::Broken(self.state));
    }

    // --- Accessors ---

    pub fn len(&self) -> usize {
        return self.len;
    }

    pub fn is_empty(&self) -> bool {
        return self.len == 0;
    }

    /// Total slots, sentinel included.
    pub fn capacity(&self) -> usize {
        return self.slots.len();
    }

    pub fn state(&self) -> State {
        return self.state;
    }

    /// True while every element's slot equals its position.
    pub fn is_sorted(&self) -> bool {
        return self.state.is_sorted();
    }

    /// Number of growth events since the last init.
    pub fn growths(&self) -> usize {
        return self.growths;
    }

    pub fn policy(&self) -> &GrowthPolicy {
        return &self.policy;
    }

    /// Number of slots on the free chain.
    pub fn free_len(&self) -> usize {
        return self.free.iter(&self.slots).count();
    }

    /// Slot of the first element.
    pub fn head(&self) -> Option<Idx> {
        return self.neighbour(SENTINEL, true);
    }

    /// Slot of the last element.
    pub fn tail(&self) -> Option<Idx> {
        return self.neighbour(SENTINEL, false);
    }

    /// Slot following `slot` in list order, if `slot` is occupied and not the tail.
    pub fn next_of(&self, slot: Idx) -> Option<Idx> {
        if !self.is_occupied(slot) {
            return None;
        }
        return self.neighbour(slot, true);
    }

    /// Slot preceding `slot` in list order, if `slot` is occupied and not the head.
    pub fn prev_of(&self, slot: Idx) -> Option<Idx> {
        if !self.is_occupied(slot) {
            return None;
        }
        return self.neighbour(slot, false);
    }

    fn neighbour(&self, slot: Idx, forward: bool) -> Option<Idx> {
        if !self.state.is_ok() {
            return None;
        }
        let record = &self.slots[slot];
        let idx = if forward { record.next } else { record.prev };
        if idx == SENTINEL {
            return None;
        }
        return Some(idx);
    }

    /// Value stored in `slot`, if it is occupied.
    pub fn get(&self, slot: Idx) -> Option<Elem> {
        if !self.is_occupied(slot) {
            return None;
        }
        return Some(self.slots[slot].value);
    }

    /// Mutable access to the value stored in `slot`.
    pub fn get_mut(&mut self, slot: Idx) -> Option<&mut Elem> {
        if !self.is_occupied(slot) {
            return None;
        }
        return Some(&mut self.slots[slot].value);
    }

    /// Value at `position` (1-based).
    pub fn get_at(&self, position: usize) -> Option<Elem> {
        let slot = self.slot_at(position).ok()?;
        return Some(self.slots[slot].value);
    }

    /// Slot holding the element at `position` (1-based).
    pub fn slot_at(&self, position: usize) -> Result<Idx, ListError> {
        self.health_check()?;
        if position == 0 || position > self.len {
            return Err(self.bad_position(position));
        }
        return Ok(self.translate(position));
    }

    /// True if `slot` holds an element of a usable list.
    pub fn is_occupied(&self, slot: Idx) -> bool {
        if !self.state.is_ok() {
            return false;
        }
        return self.slots.get(slot).is_some_and(|record| record.is_occupied());
    }

    /// Iterate over `(slot, value)` pairs in list order.
    pub fn iter(&self) -> Iter<'_> {
        let (front, back, remaining) = if self.state.is_ok() {
            (self.slots[SENTINEL].next, self.slots[SENTINEL].prev, self.len)
        } else {
            (SENTINEL, SENTINEL, 0)
        };
        return Iter {
            slots: &self.slots,
            front,
            back,
            remaining,
        };
    }

    /// Values in list order.
    pub fn values(&self) -> Vec<Elem> {
        return self.iter().map(|(_, value)| value).collect();
    }

    // --- Position translation ---

    fn bad_position(&self, position: usize) -> ListError {
        return ListError::BadPosition {
            position,
            len: self.len,
        };
    }

    /// Slot of the element at `position`, with position 0 meaning the sentinel.
    /// The caller has checked `position <= len`.
    fn translate(&self, position: usize) -> Idx {
        debug_assert!(position <= self.len);
        if self.state.is_sorted() {
            return position;
        }

        // Walk from whichever end is closer.
        let mut idx = SENTINEL;
        if position <= self.len / 2 {
            for _ in 0..position {
                idx = self.slots[idx].next;
            }
        } else {
            for _ in position..=self.len {
                idx = self.slots[idx].prev;
            }
        }
        return idx;
    }

    // --- Mutation ---

    /// Insert `value` right after `after`; `after == 0` makes it the new head.
    ///
    /// Returns the slot the value was stored in. Grows the table if no slot
    /// is free.
    pub fn insert_after(&mut self, after: Idx, value: Elem) -> Result<Idx, ListError> {
        self.health_check()?;
        if after != SENTINEL && !self.is_occupied(after) {
            return Err(ListError::BadIndex(after));
        }

        if self.free.is_empty() {
            self.grow()?;
        }
        let Some(idx) = self.free.pop(&self.slots) else {
            return Err(ListError::BadFree);
        };

        let at_tail = after == self.slots[SENTINEL].prev;
        let next = self.slots[after].next;
        self.slots[idx] = Slot {
            next,
            prev: after,
            value,
            tag: SlotTag::Occupied,
        };
        self.slots[after].next = idx;
        self.slots[next].prev = idx;
        self.len += 1;
        self.state = self.state.after_insert(at_tail, idx, self.len);

        trace!(slot = idx, after, "linked slot");
        self.check_invariants();
        return Ok(idx);
    }

    /// Unlink the element in `slot` and return its value. The slot goes back
    /// on the free chain; the table never shrinks.
    pub fn remove(&mut self, slot: Idx) -> Result<Elem, ListError> {
        self.health_check()?;
        if slot == SENTINEL || !self.is_occupied(slot) {
            return Err(ListError::BadIndex(slot));
        }

        let Slot {
            next, prev, value, ..
        } = self.slots[slot];
        self.slots[prev].next = next;
        self.slots[next].prev = prev;
        self.free.push(&mut self.slots, slot);
        self.len -= 1;
        self.state = self.state.after_remove(next == SENTINEL);

        trace!(slot, "unlinked slot");
        self.check_invariants();
        return Ok(value);
    }

    /// Insert `value` so that it ends up at `position` (1-based).
    ///
    /// Valid positions are `1..=len + 1`; `len + 1` appends.
    pub fn insert_at(&mut self, position: usize, value: Elem) -> Result<Idx, ListError> {
        self.health_check()?;
        if position == 0 || position > self.len + 1 {
            return Err(self.bad_position(position));
        }
        let after = self.translate(position - 1);
        return self.insert_after(after, value);
    }

    /// Remove the element at `position` (1-based) and return its value.
    pub fn remove_at(&mut self, position: usize) -> Result<Elem, ListError> {
        let slot = self.slot_at(position)?;
        return self.remove(slot);
    }

    /// Append `value` at the tail.
    pub fn push_back(&mut self, value: Elem) -> Result<Idx, ListError> {
        self.health_check()?;
        let tail = self.slots[SENTINEL].prev;
        return self.insert_after(tail, value);
    }

    /// Insert `value` as the new head.
    pub fn push_front(&mut self, value: Elem) -> Result<Idx, ListError> {
        return self.insert_after(SENTINEL, value);
    }

    // --- Growth ---

    /// Grow the table according to the policy and thread the new slots onto
    /// the free chain. Only valid once the chain is empty.
    ///
    /// On failure nothing changes and the list stays usable at its current
    /// capacity.
    fn grow(&mut self) -> Result<(), ListError> {
        if !self.free.is_empty() {
            return Err(ListError::BadFree);
        }

        let old = self.slots.len();
        let Some(new) = self.policy.next_capacity(old) else {
            warn!(slots = old, "slot table cannot grow any further");
            return Err(ListError::Alloc {
                slots: old.saturating_add(1),
            });
        };

        if let Err(err) = extend_table(&mut self.slots, new) {
            warn!(from = old, to = new, "failed to grow slot table");
            return Err(err);
        }
        self.free.thread(&mut self.slots, old, new);
        self.growths += 1;

        debug!(from = old, to = new, "slot table grown");
        return Ok(());
    }

    // --- Invariant checking ---

    #[cfg(debug_assertions)]
    fn check_invariants(&self) {
        if !self.state.is_ok() {
            return;
        }
        if let Err(err) = self.scan() {
            panic!("INVARIANT VIOLATED: {}", err);
        }
    }

    #[cfg(not(debug_assertions))]
    #[inline(always)]
    fn check_invariants(&self) {}
}

impl fmt::Debug for SlotList {
    /// Raw dump of every slot, free ones included.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f
            .debug_struct("SlotList")
            .field("capacity", &self.slots.len())
            .field("len", &self.len)
            .field("free", &self.free.head())
            .field("state", &self.state)
            .field("slots", &self.slots)
            .finish();
    }
}

/// Iterator over `(slot, value)` pairs in list order.
pub struct Iter<'a> {
    slots: &'a [Slot],
    front: Idx,
    back: Idx,
    remaining: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (Idx, Elem);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let idx = self.front;
        self.front = self.slots[idx].next;
        return Some((idx, self.slots[idx].value));
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        return (self.remaining, Some(self.remaining));
    }
}

impl<'a> DoubleEndedIterator for Iter<'a> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let idx = self.back;
        self.back = self.slots[idx].prev;
        return Some((idx, self.slots[idx].value));
    }
}

impl<'a> ExactSizeIterator for Iter<'a> {}

impl<'a> IntoIterator for &'a SlotList {
    type Item = (Idx, Elem);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        return self.iter();
    }
}
