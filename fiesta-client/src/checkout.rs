//! Checkout orchestrator
//!
//! Reads the cart, validates the form, hands an [`OrderRequest`] to an
//! [`OrderSubmitter`] and clears the cart once the order is accepted.

use crate::cart::CartStore;
use crate::ClientResult;
use async_trait::async_trait;
use parking_lot::Mutex;
use rand::Rng;
use shared::money::CartTotals;
use shared::{AppError, CheckoutForm, ErrorCode, FulfillmentMethod, OrderConfirmation, OrderRequest};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// Checkout failure
#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("Cart is empty")]
    EmptyCart,

    #[error("Validation failed: {0}")]
    Validation(#[from] AppError),

    #[error("Order submission failed: {0}")]
    Submission(String),
}

impl From<CheckoutError> for AppError {
    fn from(err: CheckoutError) -> Self {
        match err {
            CheckoutError::EmptyCart => AppError::new(ErrorCode::CartEmpty),
            CheckoutError::Validation(e) => e,
            CheckoutError::Submission(msg) => AppError::with_message(ErrorCode::SubmissionFailed, msg),
        }
    }
}

/// Accepts orders
#[async_trait]
pub trait OrderSubmitter: Send + Sync {
    /// Submit `order`; repeated calls with the same idempotency key must not
    /// place a second order
    async fn submit(&self, order: &OrderRequest) -> ClientResult<OrderConfirmation>;
}

/// Submitter that waits, then accepts every order
pub struct SimulatedSubmitter {
    delay: Duration,
    placed: Mutex<HashMap<String, OrderConfirmation>>,
}

impl SimulatedSubmitter {
    pub const DEFAULT_DELAY: Duration = Duration::from_secs(2);

    pub fn new() -> Self {
        Self::with_delay(Self::DEFAULT_DELAY)
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay,
            placed: Mutex::new(HashMap::new()),
        }
    }

    /// Number of distinct orders accepted
    pub fn order_count(&self) -> usize {
        self.placed.lock().len()
    }
}

impl Default for SimulatedSubmitter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OrderSubmitter for SimulatedSubmitter {
    async fn submit(&self, order: &OrderRequest) -> ClientResult<OrderConfirmation> {
        let existing = self.placed.lock().get(&order.idempotency_key).cloned();
        if let Some(existing) = existing {
            return Ok(existing);
        }

        tokio::time::sleep(self.delay).await;

        let confirmation = OrderConfirmation {
            order_id: format!("ORD-{}", rand::thread_rng().gen_range(0..1_000_000)),
            idempotency_key: order.idempotency_key.clone(),
            totals: order.totals,
            placed_at: shared::util::now_millis(),
        };
        let confirmation = self
            .placed
            .lock()
            .entry(order.idempotency_key.clone())
            .or_insert(confirmation)
            .clone();
        Ok(confirmation)
    }
}

/// Drives one checkout attempt after another against a cart
pub struct Checkout {
    submitter: Arc<dyn OrderSubmitter>,
    idempotency_key: String,
}

impl Checkout {
    pub fn new(submitter: Arc<dyn OrderSubmitter>) -> Self {
        Self {
            submitter,
            idempotency_key: shared::util::new_id(),
        }
    }

    /// Key sent with the next submission
    pub fn idempotency_key(&self) -> &str {
        &self.idempotency_key
    }

    /// Totals for `fulfillment`; the cart is not touched
    pub fn quote(&self, cart: &CartStore, fulfillment: FulfillmentMethod) -> CartTotals {
        cart.totals(fulfillment)
    }

    /// Validate, submit and, on success, clear the cart
    ///
    /// A failed submission leaves the cart and the idempotency key as they
    /// were, so calling again retries the same order.
    pub async fn place_order(
        &mut self,
        cart: &mut CartStore,
        form: &CheckoutForm,
    ) -> Result<OrderConfirmation, CheckoutError> {
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        form.validate()?;

        let order = self.build_request(cart, form);
        let confirmation = match self.submitter.submit(&order).await {
            Ok(confirmation) => confirmation,
            Err(e) => {
                tracing::warn!(
                    idempotency_key = %order.idempotency_key,
                    error = %e,
                    "Order submission failed"
                );
                return Err(CheckoutError::Submission(e.to_string()));
            }
        };

        tracing::info!(
            order_id = %confirmation.order_id,
            items = order.items.len(),
            total = %confirmation.totals.total,
            "Order placed"
        );
        cart.clear_cart();
        self.idempotency_key = shared::util::new_id();
        Ok(confirmation)
    }

    fn build_request(&self, cart: &CartStore, form: &CheckoutForm) -> OrderRequest {
        let delivery_address = match form.fulfillment {
            FulfillmentMethod::Delivery => Some(format!(
                "{}, {} {}",
                form.address.as_deref().unwrap_or_default().trim(),
                form.city.as_deref().unwrap_or_default().trim(),
                form.zip.as_deref().unwrap_or_default().trim(),
            )),
            FulfillmentMethod::Pickup => None,
        };

        OrderRequest {
            idempotency_key: self.idempotency_key.clone(),
            user_id: cart.user_id().map(str::to_string),
            customer_name: form.customer_name(),
            email: form.email.trim().to_string(),
            phone: form.phone.trim().to_string(),
            fulfillment: form.fulfillment,
            delivery_address,
            card_last4: form.card_last4(),
            items: cart.items().to_vec(),
            totals: cart.totals(form.fulfillment),
        }
    }
}
