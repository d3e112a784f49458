// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Slotlist - a doubly-linked list stored in one contiguous slot table.
//!
//! Elements live at stable slots of a growable table; list order is kept
//! purely through `next`/`prev` links, with slot 0 as a permanent sentinel
//! at both ends. Freed slots are recycled through an internal free chain.
//!
//! # Quick Start
//!
//! ```
//! use slotlist::{SlotList, SENTINEL};
//!
//! let mut list = SlotList::with_capacity(3).unwrap();
//!
//! // Absolute: link after a slot (the sentinel means "new head").
//! let first = list.insert_after(SENTINEL, 10.0).unwrap();
//! let second = list.insert_after(first, 20.0).unwrap();
//! list.insert_after(second, 30.0).unwrap();
//!
//! // Positional: 1-based ranks in list order.
//! assert_eq!(list.remove_at(2), Ok(20.0));
//! assert_eq!(list.values(), vec![10.0, 30.0]);
//! ```

mod error;
mod free;
pub mod growth;
mod list;
mod slot;
mod snapshot;
mod state;
mod verify;

pub use error::ListError;
pub use growth::GrowthPolicy;
pub use list::{Iter, SlotList};
pub use slot::{Elem, Idx, POISON, SENTINEL};
pub use snapshot::{Snapshot, SlotView};
pub use state::State;
