//! Stateful event-generation loop
//!
//! Owns the active-order registry, the monotonic nanosecond clock, the
//! sequential order-id counter, and a deterministic seeded RNG. Each step
//! advances the clock, picks an action (70/15/15 NEW/MODIFY/CANCEL, with
//! NEW forced while the registry is empty), derives the row fields, and
//! emits exactly one record.
//!
//! Per-order lifecycle: NEW (active) → MODIFY* (still active) → CANCEL
//! (removed). Orders that are never modified or canceled simply stay
//! active until the run ends.

use crate::config::GeneratorConfig;
use crate::error::DatagenError;
use crate::registry::Registry;
use crate::sink::RecordSink;
use chrono::Utc;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use types::event::{Action, EventRecord};
use types::ids::OrderId;
use types::order::{ActiveOrder, OrderType, Side};

/// Synthetic order-event generator with deterministic seeded RNG
pub struct EventGenerator {
    config: GeneratorConfig,
    rng: ChaCha8Rng,
    registry: Registry,
    clock_ns: i64,
    next_order_id: OrderId,
}

impl EventGenerator {
    /// Create a generator whose clock starts at the current wall time
    pub fn new(config: GeneratorConfig, seed: u64) -> Self {
        let start_ns = Utc::now().timestamp_nanos_opt().unwrap_or(0);
        Self::with_start_time(config, seed, start_ns)
    }

    /// Create a generator with a pinned start timestamp
    ///
    /// The same config, seed, and start time reproduce a run byte-for-byte.
    ///
    /// # Panics
    /// Panics if the configured instrument pool is empty.
    pub fn with_start_time(config: GeneratorConfig, seed: u64, start_ns: i64) -> Self {
        assert!(
            !config.instruments.is_empty(),
            "instrument pool must be non-empty"
        );
        Self {
            config,
            rng: ChaCha8Rng::seed_from_u64(seed),
            registry: Registry::new(),
            clock_ns: start_ns,
            next_order_id: OrderId::FIRST,
        }
    }

    /// Number of currently active orders
    pub fn active_orders(&self) -> usize {
        self.registry.len()
    }

    /// Emit the header row plus `count` event rows to the sink
    ///
    /// `count = 0` yields header-only output, not a failure.
    pub fn run<S: RecordSink>(&mut self, count: u64, sink: &mut S) -> Result<(), DatagenError> {
        sink.append(&EventRecord::header())?;
        for _ in 0..count {
            let record = self.step();
            sink.append(&record.fields())?;
        }
        sink.finish()
    }

    /// Produce the next record, mutating the registry as the action demands
    pub fn step(&mut self) -> EventRecord {
        self.clock_ns += self
            .rng
            .gen_range(self.config.min_step_ns..=self.config.max_step_ns);
        let action = self.choose_action();

        // Common draws; the action arms below selectively override them.
        let idx = self.rng.gen_range(0..self.config.instruments.len());
        let instrument = self.config.instruments[idx].clone();
        let side = if self.rng.gen_bool(0.5) {
            Side::BUY
        } else {
            Side::SELL
        };
        let order_type = if self.rng.gen_bool(0.5) {
            OrderType::Limit
        } else {
            OrderType::Market
        };
        let quantity = self.draw_quantity();
        let price = self.draw_price();

        match action {
            Action::New => {
                let order_id = self.alloc_order_id();
                let price = if order_type == OrderType::Market {
                    Decimal::ZERO
                } else {
                    price
                };
                self.registry.insert(ActiveOrder {
                    id: order_id,
                    instrument: instrument.clone(),
                    side,
                    order_type,
                    quantity,
                    price,
                });
                EventRecord {
                    timestamp: self.clock_ns,
                    order_id,
                    instrument,
                    side,
                    order_type,
                    quantity,
                    price,
                    action,
                }
            }
            Action::Modify => {
                // Only selected while the registry is non-empty. The picked
                // order keeps its original snapshot: repeated MODIFYs always
                // reprice off the NEW-time values, never the latest emitted
                // ones.
                let order = self
                    .registry
                    .pick(&mut self.rng)
                    .expect("MODIFY requires a non-empty registry")
                    .clone();
                let quantity = self.draw_quantity();
                let mut price = if !order.price.is_zero() {
                    let base = order.price.to_f64().unwrap_or(self.config.min_price);
                    self.draw_price_in(
                        base * (1.0 - self.config.reprice_band),
                        base * (1.0 + self.config.reprice_band),
                    )
                } else {
                    self.draw_price()
                };
                // A MARKET order stores price 0; never emit a zero-priced
                // LIMIT modify for it.
                if order.order_type == OrderType::Market && price.is_zero() {
                    price = self.draw_price();
                }
                EventRecord {
                    timestamp: self.clock_ns,
                    order_id: order.id,
                    instrument: order.instrument,
                    side: order.side,
                    order_type: OrderType::Limit,
                    quantity,
                    price,
                    action,
                }
            }
            Action::Cancel => {
                let order = self
                    .registry
                    .remove_random(&mut self.rng)
                    .expect("CANCEL requires a non-empty registry");
                EventRecord {
                    timestamp: self.clock_ns,
                    order_id: order.id,
                    instrument: order.instrument,
                    side: order.side,
                    order_type: order.order_type,
                    quantity: order.quantity,
                    price: Decimal::ZERO,
                    action,
                }
            }
        }
    }

    fn choose_action(&mut self) -> Action {
        if self.registry.is_empty() {
            // MODIFY/CANCEL need an existing order
            return Action::New;
        }
        let r: f64 = self.rng.gen();
        if r < self.config.new_weight {
            Action::New
        } else if r < self.config.new_weight + self.config.modify_weight {
            Action::Modify
        } else {
            Action::Cancel
        }
    }

    fn alloc_order_id(&mut self) -> OrderId {
        let id = self.next_order_id;
        self.next_order_id = id.next();
        id
    }

    fn draw_quantity(&mut self) -> u32 {
        self.rng.gen_range(1..=self.config.max_lots) * self.config.lot_size
    }

    fn draw_price(&mut self) -> Decimal {
        let (lo, hi) = (self.config.min_price, self.config.max_price);
        self.draw_price_in(lo, hi)
    }

    /// Uniform price draw in `[lo, hi]`, rounded to the nearest 0.01
    fn draw_price_in(&mut self, lo: f64, hi: f64) -> Decimal {
        let base: f64 = self.rng.gen_range(lo..=hi);
        Decimal::from_f64(base).unwrap_or(Decimal::ZERO).round_dp(2)
    }
}
