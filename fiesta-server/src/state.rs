//! Shared server state

use dashmap::DashMap;
use shared::CartItem;
use std::sync::Arc;

/// In-memory cart store keyed by user id
///
/// Writes replace the whole list; the last write wins. The map grows by one
/// entry per distinct user id and never evicts.
#[derive(Clone, Default)]
pub struct ServerState {
    carts: Arc<DashMap<String, Vec<CartItem>>>,
}

impl ServerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored cart, empty for unknown users
    pub fn cart(&self, user_id: &str) -> Vec<CartItem> {
        self.carts
            .get(user_id)
            .map(|entry| entry.value().clone())
            .unwrap_or_default()
    }

    pub fn save_cart(&self, user_id: impl Into<String>, items: Vec<CartItem>) {
        self.carts.insert(user_id.into(), items);
    }

    pub fn cart_count(&self) -> usize {
        self.carts.len()
    }
}
