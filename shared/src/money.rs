//! Money calculation utilities using rust_decimal for precision
//!
//! Cart totals are derived on every read and kept exact. Rounding to cents
//! happens only for display via [`round_money`] / [`to_f64`].

use crate::checkout::FulfillmentMethod;
use crate::models::{CartItem, ModifierSelections, Product};
use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};

/// Rounding strategy for displayed monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Sales tax rate (8%)
pub const TAX_RATE: Decimal = Decimal::from_parts(8, 0, 0, false, 2);

/// Flat delivery surcharge (4.99)
pub const DELIVERY_FEE: Decimal = Decimal::from_parts(499, 0, 0, false, 2);

/// Derived cart totals for one fulfillment method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub delivery_fee: Decimal,
    pub total: Decimal,
}

/// Unit price of a product with the given modifier selections
///
/// Formula: base_price + Σ(modifier delta × multiplier). Selections for ids
/// the product does not offer contribute nothing.
pub fn unit_price(product: &Product, selections: &ModifierSelections) -> Decimal {
    let modifiers: Decimal = product
        .modifiers
        .iter()
        .filter_map(|m| {
            let value = selections.get(&m.id)?;
            Some(m.price * Decimal::from(value.multiplier()))
        })
        .sum();
    product.price + modifiers
}

/// Line total: total_price × quantity
///
/// Saturates at the `Decimal` bounds instead of overflowing.
pub fn line_total(item: &CartItem) -> Decimal {
    item.total_price.saturating_mul(Decimal::from(item.quantity))
}

/// Line total, or `None` when it does not fit in a `Decimal`
pub fn checked_line_total(item: &CartItem) -> Option<Decimal> {
    item.total_price.checked_mul(Decimal::from(item.quantity))
}

/// Whether an item received from outside can be priced
///
/// Requires a positive quantity, a non-negative unit price and a line total
/// that fits in a `Decimal`.
pub fn is_priceable(item: &CartItem) -> bool {
    item.quantity > 0 && !item.total_price.is_sign_negative() && checked_line_total(item).is_some()
}

/// Σ line totals, saturating
pub fn subtotal(items: &[CartItem]) -> Decimal {
    items
        .iter()
        .map(line_total)
        .fold(Decimal::ZERO, Decimal::saturating_add)
}

/// Tax on a subtotal
pub fn tax(subtotal: Decimal) -> Decimal {
    subtotal.saturating_mul(TAX_RATE)
}

/// Delivery surcharge for a fulfillment method
pub fn delivery_fee(fulfillment: FulfillmentMethod) -> Decimal {
    match fulfillment {
        FulfillmentMethod::Delivery => DELIVERY_FEE,
        FulfillmentMethod::Pickup => Decimal::ZERO,
    }
}

/// Compute all derived totals for the items
pub fn cart_totals(items: &[CartItem], fulfillment: FulfillmentMethod) -> CartTotals {
    let subtotal = subtotal(items);
    let tax = tax(subtotal);
    let delivery_fee = delivery_fee(fulfillment);
    CartTotals {
        subtotal,
        tax,
        delivery_fee,
        total: subtotal.saturating_add(tax).saturating_add(delivery_fee),
    }
}

/// Round to cents for display
#[inline]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Convert Decimal to f64 for display, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    round_money(value).to_f64().unwrap_or_default()
}
