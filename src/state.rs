// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Integrity state machine.
//!
//! Every mutating list operation consults the state before touching storage.
//! Only [`State::Ok`] and [`State::OkSorted`] permit mutation; every other
//! state is terminal until the list is re-initialized.
//!
//! # Sortedness
//!
//! [`State::OkSorted`] is a refinement of [`State::Ok`]: it records that the
//! element at logical position `p` lives in slot `p`, which lets position
//! lookups skip the walk. It is not a value ordering. A fresh list is sorted;
//! appending at the tail into slot `len + 1`, or removing the tail, keeps it
//! sorted. Anything else drops to [`State::Ok`], and nothing raises it again.
//!
//! ```text
//!            init
//!             │
//!             ▼
//!         OkSorted ── mid insert / non-tail remove ──► Ok
//!             │                                        │
//!             ├──────────── verify fails ──────────────┼──► Broken / BadHead / BadTail / BadHeadTail
//!             ├──────────── finalize ──────────────────┼──► Finalized
//!             └──────────── failed re-init ────────────┴──► AllocError
//! ```

use std::fmt;

/// Where a list is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum State {
    /// Well-formed.
    Ok,
    /// Well-formed, and every element's slot equals its logical position.
    OkSorted,
    /// Storage has been released.
    Finalized,
    /// An integrity scan found a corrupted link, counter or free chain.
    Broken,
    /// Storage could not be allocated during (re-)initialization.
    AllocError,
    /// The sentinel's head link is inconsistent.
    BadHead,
    /// The sentinel's tail link is inconsistent.
    BadTail,
    /// Both sentinel links are inconsistent.
    BadHeadTail,
}

impl State {
    /// True if mutation is permitted.
    #[inline]
    pub fn is_ok(self) -> bool {
        return matches!(self, State::Ok | State::OkSorted);
    }

    /// True if logical positions equal slot indices.
    #[inline]
    pub fn is_sorted(self) -> bool {
        return self == State::OkSorted;
    }

    /// Numeric state code; `0` and `1` are the usable states.
    pub fn code(self) -> u8 {
        return match self {
            State::Ok => 0,
            State::OkSorted => 1,
            State::Finalized => 2,
            State::Broken => 16,
            State::AllocError => 17,
            State::BadHead => 18,
            State::BadTail => 19,
            State::BadHeadTail => 20,
        };
    }

    /// State after an insert.
    ///
    /// `at_tail` is whether the new element was linked after the old tail,
    /// `slot` is where it landed and `len` is the length after the insert.
    pub(crate) fn after_insert(self, at_tail: bool, slot: usize, len: usize) -> State {
        if self == State::OkSorted && at_tail && slot == len {
            return State::OkSorted;
        }
        return self.unsorted();
    }

    /// State after removing an element; `was_tail` is whether it was the tail.
    pub(crate) fn after_remove(self, was_tail: bool) -> State {
        if self == State::OkSorted && was_tail {
            return State::OkSorted;
        }
        return self.unsorted();
    }

    fn unsorted(self) -> State {
        return match self {
            State::OkSorted => State::Ok,
            other => other,
        };
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            State::Ok => "ok",
            State::OkSorted => "ok (sorted)",
            State::Finalized => "finalized",
            State::Broken => "broken",
            State::AllocError => "allocation failed",
            State::BadHead => "bad head",
            State::BadTail => "bad tail",
            State::BadHeadTail => "bad head and tail",
        };
        return f.write_str(name);
    }
}
