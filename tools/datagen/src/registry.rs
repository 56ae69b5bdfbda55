//! Active-order registry
//!
//! Unordered set of live orders supporting uniform random selection and
//! O(1) removal via swap-remove. An order is present from its NEW event
//! until a CANCEL event removes it. MODIFY deliberately leaves the stored
//! snapshot untouched, so later picks always see the order's original
//! NEW-time price and quantity.

use rand::Rng;
use types::ids::OrderId;
use types::order::ActiveOrder;

/// In-memory set of active orders, the generator's only persistent state
#[derive(Debug, Default)]
pub struct Registry {
    orders: Vec<ActiveOrder>,
}

impl Registry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self { orders: Vec::new() }
    }

    /// Number of active orders
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Check whether no orders are active
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Add a newly created order
    pub fn insert(&mut self, order: ActiveOrder) {
        self.orders.push(order);
    }

    /// Borrow one active order uniformly at random
    pub fn pick<R: Rng>(&self, rng: &mut R) -> Option<&ActiveOrder> {
        if self.orders.is_empty() {
            return None;
        }
        let idx = rng.gen_range(0..self.orders.len());
        Some(&self.orders[idx])
    }

    /// Remove and return one active order uniformly at random
    pub fn remove_random<R: Rng>(&mut self, rng: &mut R) -> Option<ActiveOrder> {
        if self.orders.is_empty() {
            return None;
        }
        let idx = rng.gen_range(0..self.orders.len());
        Some(self.orders.swap_remove(idx))
    }

    /// Check whether an order id is still active
    pub fn contains(&self, id: OrderId) -> bool {
        self.orders.iter().any(|o| o.id == id)
    }

    /// Ids of all active orders, in no particular order
    pub fn ids(&self) -> impl Iterator<Item = OrderId> + '_ {
        self.orders.iter().map(|o| o.id)
    }
}
