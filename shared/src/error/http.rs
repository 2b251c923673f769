//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            // 500 Internal Server Error
            Self::SubmissionFailed => StatusCode::INTERNAL_SERVER_ERROR,

            // 400 Bad Request (validation and business errors)
            Self::ValidationFailed
            | Self::InvalidRequest
            | Self::CartEmpty
            | Self::InvalidQuantity
            | Self::ModifierNotOffered
            | Self::ModifierKindMismatch
            | Self::InvalidUserId => StatusCode::BAD_REQUEST,
        }
    }
}
