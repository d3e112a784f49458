// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Read-only snapshot of a list, in list order.
//!
//! A snapshot carries everything an external dump or visualization needs
//! (position, slot, value and both links of every element) without the
//! list itself knowing about any output format. `Display` renders it as a
//! plain text table.

use std::fmt;

use crate::list::SlotList;
use crate::slot::{Elem, Idx};
use crate::state::State;

/// One element as seen by a snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SlotView {
    /// 1-based position in list order.
    pub position: usize,
    /// Slot the element lives in.
    pub slot: Idx,
    pub value: Elem,
    pub next: Idx,
    pub prev: Idx,
}

/// The state of a list at one point in time.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Snapshot {
    pub capacity: usize,
    pub len: usize,
    /// First free slot, 0 if none.
    pub free: Idx,
    pub state: State,
    pub elements: Vec<SlotView>,
}

impl SlotList {
    /// Capture the list's elements in order. A list that is not usable
    /// yields a snapshot without elements.
    pub fn snapshot(&self) -> Snapshot {
        let elements = self
            .iter()
            .enumerate()
            .map(|(i, (slot, value))| SlotView {
                position: i + 1,
                slot,
                value,
                next: self.slots[slot].next,
                prev: self.slots[slot].prev,
            })
            .collect();

        return Snapshot {
            capacity: self.capacity(),
            len: self.len(),
            free: self.free.head(),
            state: self.state(),
            elements,
        };
    }
}

impl Snapshot {
    pub fn values(&self) -> Vec<Elem> {
        return self.elements.iter().map(|view| view.value).collect();
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "list: len={} capacity={} free={} state={}",
            self.len, self.capacity, self.free, self.state
        )?;
        for view in &self.elements {
            writeln!(
                f,
                "  #{:<4} slot={:<6} prev={:<6} next={:<6} value={}",
                view.position, view.slot, view.prev, view.next, view.value
            )?;
        }
        return Ok(());
    }
}
