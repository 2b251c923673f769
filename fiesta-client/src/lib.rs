//! Fiesta Client - cart engine and remote sync for the Fiesta storefront
//!
//! The [`CartStore`] owns the cart on the client. In its session variant every
//! mutation publishes a snapshot that a background worker pushes to the remote
//! cart store over HTTP. [`Checkout`] turns the cart into a submitted order.

pub mod cart;
pub mod checkout;
pub mod config;
pub mod error;
pub mod http;
pub mod remote;
pub mod session;
pub mod sync;

pub use cart::CartStore;
pub use checkout::{Checkout, CheckoutError, OrderSubmitter, SimulatedSubmitter};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use remote::{CartRemote, HttpCartRemote};
pub use session::SessionStore;
pub use sync::{CartSnapshot, SyncHandle};

// Re-export shared types for convenience
pub use shared::{ApiResponse, CartItem, CartTotals, CheckoutForm, FulfillmentMethod, OrderConfirmation};
