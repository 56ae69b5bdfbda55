//! Types library for the synthetic order flow generator
//!
//! This library provides the core type definitions shared between the
//! generator tooling and downstream matching-engine test harnesses,
//! ensuring type safety and a stable output row format.
//!
//! # Version
//! v1.0.0 - Frozen row format
//!
//! # Modules
//! - `ids`: Unique identifiers (OrderId, Instrument)
//! - `order`: Order field enums and the active-order snapshot
//! - `event`: Emitted event records and their CSV projection

// Public modules
pub mod event;
pub mod ids;
pub mod order;

// Library version constant
pub const LIB_VERSION: &str = "1.0.0";

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::event::*;
    pub use crate::ids::*;
    pub use crate::order::*;
}
