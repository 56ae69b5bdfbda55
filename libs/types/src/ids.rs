//! Unique identifier types for generated order flow
//!
//! Order ids are compact sequential integers rather than UUIDs: downstream
//! matching-engine fixtures key on small monotonic ids, and MODIFY/CANCEL
//! rows must reference them verbatim.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for an order
///
/// Positive, assigned monotonically at creation time, never reused
/// within a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(u64);

impl OrderId {
    /// First id handed out in a run
    pub const FIRST: OrderId = OrderId(1);

    /// Create from a raw id value
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw id value
    pub fn as_u64(&self) -> u64 {
        self.0
    }

    /// Successor id for sequential allocation
    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Instrument symbol
///
/// Format: "INST" followed by a zero-padded index (e.g., "INST001", "INST200")
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Instrument(String);

impl Instrument {
    /// Create a new Instrument from a symbol string
    pub fn new(symbol: impl Into<String>) -> Self {
        Self(symbol.into())
    }

    /// Get the symbol string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Instrument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Instrument {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Build the fixed instrument pool `INST001..INST{count}`
pub fn instrument_pool(count: usize) -> Vec<Instrument> {
    (1..=count)
        .map(|i| Instrument::new(format!("INST{:03}", i)))
        .collect()
}
