// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Integrity scan.
//!
//! Walks the whole structure and checks, in order:
//!
//! 1. the sentinel's head and tail links point back at the sentinel
//! 2. every occupied slot is linked symmetrically (`next[prev[i]] == i`,
//!    `prev[next[i]] == i`) and visited once
//! 3. while sorted, every element sits in the slot matching its position
//! 4. the element counter matches the walk
//! 5. the free chain only holds free slots, visits each once, and together
//!    with the occupied slots and the sentinel covers the table

use rustc_hash::FxHashSet;
use tracing::warn;

use crate::error::ListError;
use crate::list::SlotList;
use crate::slot::{Idx, SENTINEL, SlotTag};

impl SlotList {
    /// Scan the structure for corruption.
    ///
    /// On failure the list records the matching broken state and rejects
    /// all further mutation until it is re-initialized. A list that is
    /// already unusable reports [`ListError::Broken`] without scanning.
    pub fn verify(&mut self) -> Result<(), ListError> {
        self.health_check()?;
        let Err(err) = self.scan() else {
            return Ok(());
        };
        self.state = err.corrupted_state();
        warn!(error = %err, state = %self.state, "list integrity scan failed");
        return Err(err);
    }

    /// The scan behind [`SlotList::verify`], without recording the outcome.
    pub(crate) fn scan(&self) -> Result<(), ListError> {
        self.health_check()?;
        let slots = &self.slots;
        let capacity = slots.len();
        if capacity < 2 || slots[SENTINEL].tag != SlotTag::Sentinel {
            return Err(ListError::BadLink(SENTINEL));
        }

        let in_list = |idx: Idx| idx < capacity && slots[idx].tag != SlotTag::Free;
        let head = slots[SENTINEL].next;
        let tail = slots[SENTINEL].prev;
        let head_ok = in_list(head) && slots[head].prev == SENTINEL;
        let tail_ok = in_list(tail) && slots[tail].next == SENTINEL;
        match (head_ok, tail_ok) {
            (false, false) => return Err(ListError::BadHeadTail),
            (false, true) => return Err(ListError::BadHead),
            (true, false) => return Err(ListError::BadTail),
            (true, true) => {}
        }

        let mut seen: FxHashSet<Idx> = FxHashSet::default();
        seen.insert(SENTINEL);

        let sorted = self.state.is_sorted();
        let mut prev = SENTINEL;
        let mut idx = head;
        let mut walked = 0usize;
        while idx != SENTINEL {
            if idx >= capacity || !slots[idx].is_occupied() || !seen.insert(idx) {
                return Err(ListError::BadLink(prev));
            }
            if slots[idx].prev != prev {
                return Err(ListError::BadLink(idx));
            }
            walked += 1;
            if sorted && idx != walked {
                return Err(ListError::BadLink(idx));
            }
            prev = idx;
            idx = slots[idx].next;
        }
        if prev != tail {
            return Err(ListError::BadTail);
        }
        if walked != self.len {
            return Err(ListError::BadCounter {
                counted: self.len,
                walked,
            });
        }

        let mut idx = self.free.head();
        let mut free = 0usize;
        while idx != SENTINEL {
            if idx >= capacity || !slots[idx].is_free() || !seen.insert(idx) {
                return Err(ListError::BadFree);
            }
            free += 1;
            idx = slots[idx].next;
        }
        if walked + free + 1 != capacity {
            return Err(ListError::BadFree);
        }

        return Ok(());
    }
}
