//! Unified error codes for the Fiesta storefront
//!
//! Error codes are shared by the cart server, the client library, and any
//! frontend that reads the response envelope. They are organized by range:
//! - 0xxx: General errors
//! - 4xxx: Cart errors
//! - 5xxx: Checkout errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Validation failed
    ValidationFailed = 2,
    /// Invalid request
    InvalidRequest = 5,

    // ==================== 4xxx: Cart ====================
    /// Cart has no items
    CartEmpty = 4002,
    /// Quantity must be at least one
    InvalidQuantity = 4003,
    /// Modifier is not offered by the product
    ModifierNotOffered = 4004,
    /// Modifier value does not match the modifier type
    ModifierKindMismatch = 4005,
    /// Session user id is empty or malformed
    InvalidUserId = 4006,

    // ==================== 5xxx: Checkout ====================
    /// Order submission failed
    SubmissionFailed = 5002,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::InvalidRequest => "Invalid request",

            // Cart
            ErrorCode::CartEmpty => "Cart is empty",
            ErrorCode::InvalidQuantity => "Quantity must be at least one",
            ErrorCode::ModifierNotOffered => "Modifier is not offered for this product",
            ErrorCode::ModifierKindMismatch => "Modifier value does not match its type",
            ErrorCode::InvalidUserId => "Invalid user id",

            // Checkout
            ErrorCode::SubmissionFailed => "Order submission failed",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error returned when converting an unknown u16 into an [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            2 => Ok(ErrorCode::ValidationFailed),
            5 => Ok(ErrorCode::InvalidRequest),

            // Cart
            4002 => Ok(ErrorCode::CartEmpty),
            4003 => Ok(ErrorCode::InvalidQuantity),
            4004 => Ok(ErrorCode::ModifierNotOffered),
            4005 => Ok(ErrorCode::ModifierKindMismatch),
            4006 => Ok(ErrorCode::InvalidUserId),

            // Checkout
            5002 => Ok(ErrorCode::SubmissionFailed),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
