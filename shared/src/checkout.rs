//! Checkout DTOs
//!
//! The checkout form, its validation rules, and the order request/confirmation
//! exchanged with an order submitter.

use crate::error::AppError;
use crate::models::CartItem;
use crate::money::CartTotals;
use crate::validation::{
    MAX_ADDRESS_LEN, MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_email, validate_required_option,
    validate_text_range,
};
use serde::{Deserialize, Serialize};

/// How the order reaches the customer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FulfillmentMethod {
    #[default]
    Pickup,
    Delivery,
}

/// Customer, fulfillment and payment details collected at checkout
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutForm {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    #[serde(rename = "fulfillmentType")]
    pub fulfillment: FulfillmentMethod,
    pub address: Option<String>,
    pub city: Option<String>,
    pub zip: Option<String>,
    pub card_number: String,
    pub expiry: String,
    pub cvc: String,
}

impl CheckoutForm {
    /// Validate every field, stopping at the first failure
    ///
    /// The returned error carries a `field` detail naming the offending field.
    pub fn validate(&self) -> Result<(), AppError> {
        validate_email(&self.email, "email")?;
        validate_text_range(&self.first_name, "first_name", 2, MAX_NAME_LEN)?;
        validate_text_range(&self.last_name, "last_name", 2, MAX_NAME_LEN)?;
        validate_text_range(&self.phone, "phone", 10, MAX_SHORT_TEXT_LEN)?;

        if self.fulfillment == FulfillmentMethod::Delivery {
            validate_required_option(&self.address, "address", MAX_ADDRESS_LEN)?;
            validate_required_option(&self.city, "city", MAX_ADDRESS_LEN)?;
            validate_required_option(&self.zip, "zip", MAX_SHORT_TEXT_LEN)?;
        }

        validate_text_range(&self.card_number, "card_number", 16, MAX_SHORT_TEXT_LEN)?;
        validate_text_range(&self.expiry, "expiry", 5, MAX_SHORT_TEXT_LEN)?;
        validate_text_range(&self.cvc, "cvc", 3, MAX_SHORT_TEXT_LEN)?;
        Ok(())
    }

    pub fn customer_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
    }

    /// Last four digits of the card, for receipts
    pub fn card_last4(&self) -> String {
        let digits: Vec<char> = self.card_number.chars().filter(|c| c.is_ascii_digit()).collect();
        digits[digits.len().saturating_sub(4)..].iter().collect()
    }
}

/// Order handed to an order submitter
///
/// `idempotency_key` stays the same across retries of one checkout attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub idempotency_key: String,
    pub user_id: Option<String>,
    pub customer_name: String,
    pub email: String,
    pub phone: String,
    pub fulfillment: FulfillmentMethod,
    pub delivery_address: Option<String>,
    pub card_last4: String,
    pub items: Vec<CartItem>,
    pub totals: CartTotals,
}

/// Accepted order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderConfirmation {
    pub order_id: String,
    pub idempotency_key: String,
    pub totals: CartTotals,
    /// Milliseconds since epoch
    pub placed_at: i64,
}
