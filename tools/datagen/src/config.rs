//! Generator configuration
//!
//! Defaults match the canonical fixture format consumed by the
//! matching-engine test harness; override individual fields for
//! custom runs.

use serde::{Deserialize, Serialize};
use types::ids::{instrument_pool, Instrument};

/// Number of symbols in the default instrument pool
pub const DEFAULT_INSTRUMENT_COUNT: usize = 200;

/// Tunables for the synthetic order flow generator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Fixed instrument pool drawn from uniformly; must be non-empty
    pub instruments: Vec<Instrument>,
    /// Probability of NEW when the registry is non-empty
    pub new_weight: f64,
    /// Probability of MODIFY when the registry is non-empty
    /// (CANCEL takes the remainder)
    pub modify_weight: f64,
    /// Minimum clock increment per event, nanoseconds
    pub min_step_ns: i64,
    /// Maximum clock increment per event, nanoseconds
    pub max_step_ns: i64,
    /// Quantity lot size; every emitted quantity is a multiple of this
    pub lot_size: u32,
    /// Maximum number of lots per order
    pub max_lots: u32,
    /// Lower bound of the base price range
    pub min_price: f64,
    /// Upper bound of the base price range
    pub max_price: f64,
    /// Relative reprice band for MODIFY (0.05 = within ±5% of the
    /// order's original price)
    pub reprice_band: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            instruments: instrument_pool(DEFAULT_INSTRUMENT_COUNT),
            new_weight: 0.70,
            modify_weight: 0.15,
            min_step_ns: 100,
            max_step_ns: 10_000,
            lot_size: 5,
            max_lots: 200,
            min_price: 50.0,
            max_price: 500.0,
            reprice_band: 0.05,
        }
    }
}
