//! Remote cart store contract
//!
//! `GET /api/cart/{userId}` answers `{ success, data: CartItem[] }` and
//! `POST /api/cart/{userId}` takes `{ cart: CartItem[] }`.

use crate::{ClientConfig, ClientError, ClientResult, HttpClient};
use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use shared::{ApiResponse, CartItem};

/// Fetches and persists a user's cart
#[async_trait]
pub trait CartRemote: Send + Sync {
    /// Load the stored cart for `user_id`
    async fn fetch_cart(&self, user_id: &str) -> ClientResult<Vec<CartItem>>;

    /// Replace the stored cart for `user_id`
    async fn push_cart(&self, user_id: &str, items: &[CartItem]) -> ClientResult<()>;
}

#[derive(Serialize)]
struct CartBody<'a> {
    cart: &'a [CartItem],
}

/// [`CartRemote`] over HTTP
#[derive(Debug, Clone)]
pub struct HttpCartRemote {
    http: HttpClient,
}

impl HttpCartRemote {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    pub fn from_config(config: &ClientConfig) -> ClientResult<Self> {
        Ok(Self::new(config.build_http_client()?))
    }

    fn cart_path(user_id: &str) -> String {
        format!("/api/cart/{user_id}")
    }
}

fn check_success(response: &ApiResponse<Value>) -> ClientResult<()> {
    if response.success {
        Ok(())
    } else {
        Err(ClientError::Internal(
            response
                .error
                .clone()
                .unwrap_or_else(|| "request was not successful".to_string()),
        ))
    }
}

#[async_trait]
impl CartRemote for HttpCartRemote {
    async fn fetch_cart(&self, user_id: &str) -> ClientResult<Vec<CartItem>> {
        let response: ApiResponse<Value> = self.http.get(&Self::cart_path(user_id)).await?;
        check_success(&response)?;

        let data = response
            .data
            .ok_or_else(|| ClientError::InvalidResponse("Missing cart data".to_string()))?;
        if !data.is_array() {
            return Err(ClientError::InvalidResponse(format!(
                "cart data is not a list: {data}"
            )));
        }
        serde_json::from_value(data).map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }

    async fn push_cart(&self, user_id: &str, items: &[CartItem]) -> ClientResult<()> {
        let response: ApiResponse<Value> = self
            .http
            .post(&Self::cart_path(user_id), &CartBody { cart: items })
            .await?;
        check_success(&response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_body_shape() {
        let json = serde_json::to_value(CartBody { cart: &[] }).unwrap();
        assert_eq!(json, serde_json::json!({ "cart": [] }));
    }

    #[test]
    fn test_unsuccessful_envelope_is_error() {
        let response: ApiResponse<Value> =
            serde_json::from_str(r#"{"success":false,"error":"boom"}"#).unwrap();
        let err = check_success(&response).unwrap_err();
        assert!(err.to_string().contains("boom"));
    }
}
