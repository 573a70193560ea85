//! Controllable time oracles for tests.

use std::sync::atomic::{AtomicU64, Ordering};

use etchbook::{OracleError, TimeOracle, TimeReference};

/// An oracle that hands out a fixed timestamp and a monotonically
/// increasing sequence number, one tick per observation.
pub struct TickingOracle {
    base_sequence: u64,
    ticks: AtomicU64,
}

impl TickingOracle {
    pub fn new(base_sequence: u64) -> Self {
        Self {
            base_sequence,
            ticks: AtomicU64::new(0),
        }
    }
}

impl Default for TickingOracle {
    fn default() -> Self {
        Self::new(19_500_000)
    }
}

impl TimeOracle for TickingOracle {
    fn observe(&self) -> Result<TimeReference, OracleError> {
        let tick = self.ticks.fetch_add(1, Ordering::SeqCst);
        Ok(TimeReference {
            timestamp: format!("2026-03-01T09:{:02}:{:02}", tick / 60 % 60, tick % 60),
            sequence: self.base_sequence + tick,
        })
    }
}

/// An oracle that is always down.
#[derive(Debug, Default, Clone, Copy)]
pub struct FailingOracle;

impl TimeOracle for FailingOracle {
    fn observe(&self) -> Result<TimeReference, OracleError> {
        Err(OracleError("oracle deliberately offline".to_string()))
    }
}
