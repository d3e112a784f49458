// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Growth policy.
//!
//! The slot table only grows when the free chain is exhausted. Capacity
//! grows in three tiers:
//!
//! - below `double_below` slots: double
//! - below `linear_below` slots: add `linear_step`
//! - beyond that: add half the current capacity

/// Slot count below which capacity doubles.
pub const DOUBLE_BELOW: usize = 256;

/// Slot count below which capacity grows linearly.
pub const LINEAR_BELOW: usize = 65536;

/// Slots added per step in the linear tier.
pub const LINEAR_STEP: usize = 256;

/// Growth configuration for a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrowthPolicy {
    pub double_below: usize,
    pub linear_below: usize,
    pub linear_step: usize,
    /// Hard ceiling on the total slot count, sentinel included.
    pub max_slots: Option<usize>,
}

impl GrowthPolicy {
    /// The default policy with a ceiling of `max_slots` total slots.
    pub fn bounded(max_slots: usize) -> GrowthPolicy {
        return GrowthPolicy {
            max_slots: Some(max_slots),
            ..GrowthPolicy::default()
        };
    }

    /// Capacity after growing a table of `capacity` slots.
    ///
    /// Returns `None` if no slot can be added, either because the ceiling
    /// is reached or because the next capacity would overflow.
    pub fn next_capacity(&self, capacity: usize) -> Option<usize> {
        let next = if capacity < self.double_below {
            capacity.checked_mul(2)
        } else if capacity < self.linear_below {
            capacity.checked_add(self.linear_step)
        } else {
            capacity.checked_add(capacity / 2)
        };
        // A zero step would stall growth forever.
        let next = next.filter(|&next| next > capacity)?;

        return match self.max_slots {
            Some(max) if capacity >= max => None,
            Some(max) => Some(next.min(max)),
            None => Some(next),
        };
    }
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        return GrowthPolicy {
            double_below: DOUBLE_BELOW,
            linear_below: LINEAR_BELOW,
            linear_step: LINEAR_STEP,
            max_slots: None,
        };
    }
}
