//! Cart line items

use super::product::{Product, ModifierValue};
use crate::error::{AppError, AppResult, ErrorCode};
use crate::money;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Modifier selections keyed by modifier id
pub type ModifierSelections = BTreeMap<String, ModifierValue>;

/// A customized, quantified product entry in the cart
///
/// `product` is a snapshot taken when the item was built, so later catalog
/// changes do not affect items already in a cart. `total_price` is the unit
/// price (base + active modifier deltas), not multiplied by `quantity`, and is
/// only refreshed by [`CartItem::recalculate_total`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub id: String,
    pub product: Product,
    pub quantity: u32,
    #[serde(default)]
    pub modifiers: ModifierSelections,
    pub total_price: Decimal,
}

impl CartItem {
    /// Build a line item with a fresh id and a computed unit price
    pub fn new(product: &Product, quantity: u32, modifiers: ModifierSelections) -> AppResult<Self> {
        if quantity == 0 {
            return Err(AppError::with_message(
                ErrorCode::InvalidQuantity,
                "quantity must be at least 1",
            ));
        }
        for (id, value) in &modifiers {
            validate_selection(product, id, value)?;
        }

        let total_price = money::unit_price(product, &modifiers);
        Ok(Self {
            id: uuid::Uuid::new_v4().to_string(),
            product: product.clone(),
            quantity,
            modifiers,
            total_price,
        })
    }

    /// Build a line item with every modifier set to its default
    pub fn with_defaults(product: &Product, quantity: u32) -> AppResult<Self> {
        let modifiers = product
            .modifiers
            .iter()
            .map(|m| (m.id.clone(), m.default_value()))
            .collect();
        Self::new(product, quantity, modifiers)
    }

    /// Change one modifier selection
    ///
    /// Leaves `total_price` untouched; call [`recalculate_total`](Self::recalculate_total)
    /// when the edit is committed.
    pub fn set_modifier(&mut self, id: &str, value: ModifierValue) -> AppResult<()> {
        validate_selection(&self.product, id, &value)?;
        self.modifiers.insert(id.to_string(), value);
        Ok(())
    }

    /// Recompute the unit price from the current selections
    pub fn recalculate_total(&mut self) {
        self.total_price = money::unit_price(&self.product, &self.modifiers);
    }

    /// Unit price × quantity
    pub fn line_total(&self) -> Decimal {
        money::line_total(self)
    }
}

fn validate_selection(product: &Product, id: &str, value: &ModifierValue) -> AppResult<()> {
    let Some(modifier) = product.modifier(id) else {
        return Err(AppError::with_message(
            ErrorCode::ModifierNotOffered,
            format!("{} does not offer modifier {id}", product.name),
        )
        .with_detail("modifier", id));
    };
    if modifier.kind() != value.kind() {
        return Err(AppError::new(ErrorCode::ModifierKindMismatch).with_detail("modifier", id));
    }
    Ok(())
}

/// Body of `POST /api/cart/{userId}`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CartPayload {
    pub cart: Vec<CartItem>,
}
