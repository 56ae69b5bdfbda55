//! Order field types and the active-order snapshot
//!
//! Field values match the row format consumed by the matching-engine
//! test harness: sides are BUY/SELL, order types are LIMIT/MARKET,
//! quantities are positive lot multiples, prices carry 2 decimal places.

use crate::ids::{Instrument, OrderId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Order side (buyer or seller)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    /// Buy order (bid)
    BUY,
    /// Sell order (ask)
    SELL,
}

impl Side {
    /// Get the opposite side
    pub fn opposite(&self) -> Self {
        match self {
            Side::BUY => Side::SELL,
            Side::SELL => Side::BUY,
        }
    }

    /// Field string as it appears in output rows
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::BUY => "BUY",
            Side::SELL => "SELL",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Order pricing type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderType {
    /// Priced order resting at its limit
    Limit,
    /// Unpriced order (stored and emitted with price 0)
    Market,
}

impl OrderType {
    /// Field string as it appears in output rows
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderType::Limit => "LIMIT",
            OrderType::Market => "MARKET",
        }
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Registry snapshot of a live order, captured at NEW time
///
/// MODIFY events never rewrite this snapshot: the registry always reflects
/// the order's original state, and only the emitted row carries new values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveOrder {
    pub id: OrderId,
    pub instrument: Instrument,
    pub side: Side,
    pub order_type: OrderType,
    /// Original quantity, a positive multiple of the lot size
    pub quantity: u32,
    /// Original price, 2 decimal places; zero for MARKET orders
    pub price: Decimal,
}
