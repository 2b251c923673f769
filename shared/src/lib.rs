//! Shared types for the Fiesta storefront
//!
//! Catalog, cart and checkout models, the pricing engine, validation helpers,
//! the error system and the API response envelope used by client and server.

pub mod catalog;
pub mod checkout;
pub mod error;
pub mod models;
pub mod money;
pub mod response;
pub mod util;
pub mod validation;

// Re-exports
pub use axum::Json;
pub use http;
pub use serde::{Deserialize, Serialize};

pub use checkout::{CheckoutForm, FulfillmentMethod, OrderConfirmation, OrderRequest};
pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
pub use models::{CartItem, CartPayload, Category, Modifier, ModifierKind, ModifierSelections, ModifierValue, Product};
pub use money::CartTotals;
pub use response::ApiResponse;
