//! Emitted event records and their CSV projection
//!
//! One `EventRecord` is produced per generator iteration, handed to the
//! sink, and discarded. The CSV field order and the price formatting rules
//! here are part of the frozen output contract.

use crate::ids::{Instrument, OrderId};
use crate::order::{OrderType, Side};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Column names of the output format, in emission order
pub const HEADER: [&str; 8] = [
    "timestamp",
    "order_id",
    "instrument",
    "side",
    "type",
    "quantity",
    "price",
    "action",
];

/// The emitted event kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Action {
    /// Order creation; enters the active registry
    New,
    /// Reprice/resize of a live order; registry snapshot is untouched
    Modify,
    /// Removal of a live order; terminal
    Cancel,
}

impl Action {
    /// Field string as it appears in output rows
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::New => "NEW",
            Action::Modify => "MODIFY",
            Action::Cancel => "CANCEL",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One output row
///
/// Constructed once per generator iteration and immediately serialized;
/// never retained in memory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Event time in Unix nanos, strictly increasing across a run
    pub timestamp: i64,
    pub order_id: OrderId,
    pub instrument: Instrument,
    pub side: Side,
    pub order_type: OrderType,
    pub quantity: u32,
    pub price: Decimal,
    pub action: Action,
}

impl EventRecord {
    /// Header row fields
    pub fn header() -> Vec<String> {
        HEADER.iter().map(|s| s.to_string()).collect()
    }

    /// Render the price column
    ///
    /// CANCEL rows carry the bare literal "0"; a zero price on any other
    /// row renders "0.00". The asymmetry is required by downstream
    /// consumers and must not be normalized.
    pub fn price_field(&self) -> String {
        if self.price.is_zero() && self.action == Action::Cancel {
            "0".to_string()
        } else if self.price.is_zero() && self.order_type == OrderType::Limit {
            "0.00".to_string()
        } else {
            let mut rendered = self.price;
            rendered.rescale(2);
            rendered.to_string()
        }
    }

    /// Project the record onto its output row, in `HEADER` column order
    pub fn fields(&self) -> Vec<String> {
        vec![
            self.timestamp.to_string(),
            self.order_id.to_string(),
            self.instrument.to_string(),
            self.side.to_string(),
            self.order_type.to_string(),
            self.quantity.to_string(),
            self.price_field(),
            self.action.to_string(),
        ]
    }
}
