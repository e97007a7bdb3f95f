//! Fibonacci-table pseudo random values
//!
//! A seed indexes into the first 102 Fibonacci numbers. The value is a run
//! signature, not a statistical random number.

use super::clock::{Clock, SystemClock};

pub const FIBONACCI_TABLE_LEN: usize = 102;

/// `F(0)..=F(101)`. `F(101)` exceeds `u64`, so entries are `u128`.
pub const FIBONACCI_TABLE: [u128; FIBONACCI_TABLE_LEN] = build_table();

const fn build_table() -> [u128; FIBONACCI_TABLE_LEN] {
    let mut table = [0u128; FIBONACCI_TABLE_LEN];
    table[1] = 1;
    let mut i = 2;
    while i < FIBONACCI_TABLE_LEN {
        table[i] = table[i - 1] + table[i - 2];
        i += 1;
    }
    table
}

/// `fib[seed mod 102]`
pub fn fibonacci_pseudo_random(seed: u64) -> u128 {
    FIBONACCI_TABLE[(seed % FIBONACCI_TABLE_LEN as u64) as usize]
}

/// Resolves missing seeds from a clock before looking them up.
#[derive(Debug, Clone, Default)]
pub struct FibonacciSeeder<C: Clock = SystemClock> {
    clock: C,
}

impl<C: Clock> FibonacciSeeder<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    /// The given seed, or the current time in milliseconds.
    pub fn resolve_seed(&self, seed: Option<u64>) -> u64 {
        seed.unwrap_or_else(|| self.clock.now_millis())
    }

    pub fn pseudo_random(&self, seed: Option<u64>) -> u128 {
        fibonacci_pseudo_random(self.resolve_seed(seed))
    }
}
