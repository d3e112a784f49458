// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Property-based tests for the slot list.
//!
//! Every edit is mirrored on a plain `Vec<f32>` model; after each step the
//! list must read back the model and pass its integrity scan.

use proptest::prelude::*;
use slotlist::{SENTINEL, SlotList, State};

// =============================================================================
// Test helpers
// =============================================================================

/// A random edit, with positions as fractions of the current length.
#[derive(Clone, Debug)]
enum EditOp {
    InsertAt { pos_pct: f64, value: i16 },
    RemoveAt { pos_pct: f64 },
    InsertAfterSlot { pick: usize, value: i16 },
    RemoveSlot { pick: usize },
    PushBack { value: i16 },
}

fn arbitrary_edit_op() -> impl Strategy<Value = EditOp> {
    prop_oneof![
        3 => (0.0..=1.0f64, any::<i16>())
            .prop_map(|(pos_pct, value)| EditOp::InsertAt { pos_pct, value }),
        2 => (0.0..=1.0f64).prop_map(|pos_pct| EditOp::RemoveAt { pos_pct }),
        2 => (any::<usize>(), any::<i16>())
            .prop_map(|(pick, value)| EditOp::InsertAfterSlot { pick, value }),
        1 => any::<usize>().prop_map(|pick| EditOp::RemoveSlot { pick }),
        2 => any::<i16>().prop_map(|value| EditOp::PushBack { value }),
    ]
}

/// Apply `op` to both the list and the model.
fn apply_edit(list: &mut SlotList, model: &mut Vec<f32>, op: &EditOp) {
    let len = list.len();
    match op {
        EditOp::InsertAt { pos_pct, value } => {
            let position = ((pos_pct * len as f64) as usize).min(len) + 1;
            list.insert_at(position, *value as f32).unwrap();
            model.insert(position - 1, *value as f32);
        }
        EditOp::RemoveAt { pos_pct } => {
            if len == 0 {
                return;
            }
            let position = ((pos_pct * len as f64) as usize).min(len - 1) + 1;
            let removed = list.remove_at(position).unwrap();
            assert_eq!(removed, model.remove(position - 1));
        }
        EditOp::InsertAfterSlot { pick, value } => {
            // Pick the sentinel or one of the occupied slots.
            let rank = pick % (len + 1);
            let after = if rank == 0 {
                SENTINEL
            } else {
                list.slot_at(rank).unwrap()
            };
            list.insert_after(after, *value as f32).unwrap();
            model.insert(rank, *value as f32);
        }
        EditOp::RemoveSlot { pick } => {
            if len == 0 {
                return;
            }
            let rank = pick % len + 1;
            let slot = list.slot_at(rank).unwrap();
            assert_eq!(list.remove(slot).unwrap(), model.remove(rank - 1));
        }
        EditOp::PushBack { value } => {
            list.push_back(*value as f32).unwrap();
            model.push(*value as f32);
        }
    }
}

// =============================================================================
// Model agreement
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// The list reads back exactly like the model after every edit.
    #[test]
    fn list_matches_model(
        capacity in 1usize..8,
        ops in prop::collection::vec(arbitrary_edit_op(), 1..120),
    ) {
        let mut list = SlotList::with_capacity(capacity).unwrap();
        let mut model = Vec::new();

        for op in &ops {
            apply_edit(&mut list, &mut model, op);
            prop_assert_eq!(list.values(), model.clone());
            prop_assert_eq!(list.len(), model.len());
            prop_assert_eq!(list.verify(), Ok(()));
        }

        for (i, expected) in model.iter().enumerate() {
            prop_assert_eq!(list.get_at(i + 1), Some(*expected));
        }
    }

    /// Every occupied slot is linked symmetrically with its neighbours.
    #[test]
    fn links_are_symmetric(
        ops in prop::collection::vec(arbitrary_edit_op(), 1..80),
    ) {
        let mut list = SlotList::with_capacity(1).unwrap();
        let mut model = Vec::new();

        for op in &ops {
            apply_edit(&mut list, &mut model, op);
            for view in &list.snapshot().elements {
                match list.prev_of(view.slot) {
                    Some(prev) => prop_assert_eq!(list.next_of(prev), Some(view.slot)),
                    None => prop_assert_eq!(list.head(), Some(view.slot)),
                }
                match list.next_of(view.slot) {
                    Some(next) => prop_assert_eq!(list.prev_of(next), Some(view.slot)),
                    None => prop_assert_eq!(list.tail(), Some(view.slot)),
                }
            }
        }
    }

    /// Occupied and free slots are disjoint and, with the sentinel, cover the table.
    #[test]
    fn slots_are_partitioned(
        ops in prop::collection::vec(arbitrary_edit_op(), 1..80),
    ) {
        let mut list = SlotList::with_capacity(2).unwrap();
        let mut model = Vec::new();

        for op in &ops {
            apply_edit(&mut list, &mut model, op);
            let occupied: Vec<_> = list.iter().map(|(slot, _)| slot).collect();
            prop_assert!(occupied.iter().all(|&slot| slot != SENTINEL));
            prop_assert_eq!(occupied.len() + list.free_len() + 1, list.capacity());
            for slot in 1..list.capacity() {
                prop_assert_eq!(list.is_occupied(slot), occupied.contains(&slot));
            }
        }
    }
}

// =============================================================================
// Ordering and round trips
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Appends with no removals read back in insertion order and stay sorted.
    #[test]
    fn appends_read_back_in_order(
        capacity in 1usize..16,
        values in prop::collection::vec(any::<i16>(), 0..300),
    ) {
        let mut list = SlotList::with_capacity(capacity).unwrap();
        for (i, value) in values.iter().enumerate() {
            list.insert_at(i + 1, *value as f32).unwrap();
        }

        let expected: Vec<f32> = values.iter().map(|value| *value as f32).collect();
        prop_assert_eq!(list.values(), expected.clone());
        prop_assert_eq!(list.state(), State::OkSorted);
        for (i, value) in expected.iter().enumerate() {
            prop_assert_eq!(list.slot_at(i + 1), Ok(i + 1));
            prop_assert_eq!(list.get(i + 1), Some(*value));
        }
    }

    /// insert_at(p, v) followed by remove_at(p) restores the sequence.
    #[test]
    fn insert_then_remove_round_trips(
        ops in prop::collection::vec(arbitrary_edit_op(), 0..60),
        pos_pct in 0.0..=1.0f64,
        value in any::<i16>(),
    ) {
        let mut list = SlotList::with_capacity(1).unwrap();
        let mut model = Vec::new();
        for op in &ops {
            apply_edit(&mut list, &mut model, op);
        }

        let before = list.values();
        let position = ((pos_pct * list.len() as f64) as usize).min(list.len()) + 1;
        list.insert_at(position, value as f32).unwrap();
        prop_assert_eq!(list.get_at(position), Some(value as f32));
        prop_assert_eq!(list.remove_at(position), Ok(value as f32));
        prop_assert_eq!(list.values(), before);
    }

    /// Once a list leaves the sorted state it never returns to it.
    #[test]
    fn sortedness_never_returns(
        ops in prop::collection::vec(arbitrary_edit_op(), 1..100),
    ) {
        let mut list = SlotList::with_capacity(4).unwrap();
        let mut model = Vec::new();
        let mut unsorted = false;

        for op in &ops {
            apply_edit(&mut list, &mut model, op);
            if unsorted {
                prop_assert_eq!(list.state(), State::Ok);
            }
            unsorted = list.state() == State::Ok;
            if list.is_sorted() {
                for position in 1..=list.len() {
                    prop_assert_eq!(list.slot_at(position), Ok(position));
                }
            }
        }
    }
}
