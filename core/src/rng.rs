//! Random number sources for demo generation and live price updates.
//!
//! RULE: Nothing that touches prices may call a platform RNG directly.
//! All randomness flows through a `PriceRng`, so tests can swap in a
//! scripted sequence and assert exact values.
//!
//! Each stream is seeded from (master_seed XOR slot_index). This means:
//!   - Adding a new stream never changes existing streams.
//!   - Demo generation and live updates are reproducible in isolation.

use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;
use std::collections::VecDeque;

/// Source of uniformly distributed integers.
pub trait PriceRng {
    /// Draw an integer in `[lo, hi]`, both ends inclusive.
    fn int_between(&mut self, lo: i64, hi: i64) -> i64;
}

/// A named, seeded RNG stream.
pub struct StreamRng {
    pub name: &'static str,
    inner: Pcg64Mcg,
}

impl StreamRng {
    /// Create a stream from the master seed and a stable slot index.
    /// The index must never change once assigned.
    pub fn new(master_seed: u64, slot_index: u64) -> Self {
        let derived_seed = master_seed ^ (slot_index.wrapping_mul(0x9e37_79b9_7f4a_7c15));
        Self {
            name: "unnamed",
            inner: Pcg64Mcg::seed_from_u64(derived_seed),
        }
    }

    pub fn with_name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Draw a u64 in [0, n).
    pub fn next_u64_below(&mut self, n: u64) -> u64 {
        use rand::Rng;
        assert!(n > 0, "n must be > 0");
        self.inner.gen_range(0..n)
    }
}

impl PriceRng for StreamRng {
    fn int_between(&mut self, lo: i64, hi: i64) -> i64 {
        use rand::Rng;
        assert!(lo <= hi, "empty range [{lo}, {hi}]");
        self.inner.gen_range(lo..=hi)
    }
}

/// Replays a fixed sequence of draws. Used by tests and replays.
///
/// Panics if the sequence runs out or a scripted value falls outside the
/// range the caller asked for.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRng {
    values: VecDeque<i64>,
}

impl ScriptedRng {
    pub fn new(values: impl IntoIterator<Item = i64>) -> Self {
        Self { values: values.into_iter().collect() }
    }

    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl PriceRng for ScriptedRng {
    fn int_between(&mut self, lo: i64, hi: i64) -> i64 {
        let value = self
            .values
            .pop_front()
            .unwrap_or_else(|| panic!("scripted rng exhausted (wanted [{lo}, {hi}])"));
        assert!(
            (lo..=hi).contains(&value),
            "scripted value {value} outside [{lo}, {hi}]"
        );
        value
    }
}

/// All streams for one dashboard process, indexed by stable slot.
pub struct RngBank {
    master_seed: u64,
}

impl RngBank {
    pub fn new(master_seed: u64) -> Self {
        Self { master_seed }
    }

    pub fn for_stream(&self, slot: StreamSlot) -> StreamRng {
        StreamRng::new(self.master_seed, slot as u64).with_name(slot.name())
    }
}

/// Stable stream slot assignments.
/// NEVER reorder or remove entries, only append.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u64)]
pub enum StreamSlot {
    Demo = 0,
    LiveUpdate = 1,
}

impl StreamSlot {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Demo => "demo",
            Self::LiveUpdate => "live_update",
        }
    }
}
