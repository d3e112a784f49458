//! AFL fuzz harness for the slot list
//!
//! Decodes the input into a sequence of list edits and mirrors each one on a
//! `Vec<f32>` model. After every edit:
//! 1. The list reads back exactly like the model
//! 2. The integrity scan passes
//! 3. Occupied slots, free slots and the sentinel cover the whole table

use afl::fuzz;
use slotlist::{GrowthPolicy, SENTINEL, SlotList};

/// Operation types the fuzzer can generate
#[derive(Debug, Clone, Copy)]
enum FuzzOp {
    /// Insert at a position, chosen as a fraction of the length
    InsertAt { pos_frac: u8, value: u8 },
    /// Remove at a position, chosen as a fraction of the length
    RemoveAt { pos_frac: u8 },
    /// Insert after the slot at a rank (0 = sentinel)
    InsertAfter { rank_frac: u8, value: u8 },
    /// Remove a raw slot index, which may be free or out of range
    RemoveSlot { slot: u8 },
    /// Finalize and re-initialize with a small capacity
    Reinit { capacity: u8 },
}

impl FuzzOp {
    fn from_bytes(bytes: &[u8]) -> Option<(FuzzOp, &[u8])> {
        if bytes.is_empty() {
            return None;
        }

        let op_type = bytes[0] % 5;
        let rest = &bytes[1..];

        match op_type {
            0 if rest.len() >= 2 => Some((
                FuzzOp::InsertAt {
                    pos_frac: rest[0],
                    value: rest[1],
                },
                &rest[2..],
            )),
            1 if !rest.is_empty() => Some((FuzzOp::RemoveAt { pos_frac: rest[0] }, &rest[1..])),
            2 if rest.len() >= 2 => Some((
                FuzzOp::InsertAfter {
                    rank_frac: rest[0],
                    value: rest[1],
                },
                &rest[2..],
            )),
            3 if !rest.is_empty() => Some((FuzzOp::RemoveSlot { slot: rest[0] }, &rest[1..])),
            4 if !rest.is_empty() => Some((
                FuzzOp::Reinit {
                    capacity: rest[0] % 8 + 1,
                },
                &rest[1..],
            )),
            _ => None,
        }
    }
}

fn main() {
    // Keep growth bounded so the fuzzer also hits the allocation-failure path.
    let policy = GrowthPolicy::bounded(64);

    fuzz!(|data: &[u8]| {
        let Ok(mut list) = SlotList::with_policy(1, policy) else {
            return;
        };
        let mut model: Vec<f32> = Vec::new();
        let mut remaining = data;

        while let Some((op, rest)) = FuzzOp::from_bytes(remaining) {
            remaining = rest;
            let len = model.len();

            match op {
                FuzzOp::InsertAt { pos_frac, value } => {
                    let position = (pos_frac as usize * (len + 1) / 256) + 1;
                    if list.insert_at(position, value as f32).is_ok() {
                        model.insert(position - 1, value as f32);
                    } else {
                        assert_eq!(list.capacity(), 64, "insert failed below the ceiling");
                    }
                }

                FuzzOp::RemoveAt { pos_frac } => {
                    if len > 0 {
                        let position = (pos_frac as usize * len / 256) + 1;
                        let removed = list.remove_at(position).unwrap();
                        assert_eq!(removed, model.remove(position - 1));
                    } else {
                        assert!(list.remove_at(1).is_err());
                    }
                }

                FuzzOp::InsertAfter { rank_frac, value } => {
                    let rank = rank_frac as usize * (len + 1) / 256;
                    let after = if rank == 0 {
                        SENTINEL
                    } else {
                        list.slot_at(rank).unwrap()
                    };
                    if list.insert_after(after, value as f32).is_ok() {
                        model.insert(rank, value as f32);
                    }
                }

                FuzzOp::RemoveSlot { slot } => {
                    let slot = slot as usize;
                    let rank = list.iter().position(|(occupied, _)| occupied == slot);
                    match rank {
                        Some(rank) => {
                            assert_eq!(list.remove(slot).unwrap(), model.remove(rank));
                        }
                        None => assert!(list.remove(slot).is_err()),
                    }
                }

                FuzzOp::Reinit { capacity } => {
                    list.finalize();
                    assert!(list.push_back(0.0).is_err());
                    list.init(capacity as usize).unwrap();
                    model.clear();
                }
            }

            // CRITICAL INVARIANT: the list never drifts from the model.
            assert_eq!(list.values(), model, "list diverged from model");
            assert_eq!(list.verify(), Ok(()));
            assert_eq!(list.len() + list.free_len() + 1, list.capacity());
        }
    });
}
