//! Data models
//!
//! Shared between the cart server, the client library, and the web frontend
//! (via JSON). Field names serialize as camelCase to match the frontend.

pub mod cart;
pub mod category;
pub mod product;

// Re-exports
pub use cart::*;
pub use category::*;
pub use product::*;
