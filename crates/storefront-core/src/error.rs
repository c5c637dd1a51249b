//! Shared error type across storefront crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input (rating out of range, empty username, bad payload).
    Validation,
    /// Referenced resource does not exist.
    NotFound,
    /// Operation not permitted for this principal.
    Forbidden,
    /// No principal (or failed login).
    Unauthenticated,
    /// Duplicate write or lost concurrent race.
    Conflict,
    /// Persistence failure; the enclosing atomic unit rolled back.
    Storage,
    /// Payment gateway rejected or failed the operation.
    Payment,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::Validation => "VALIDATION",
            ClientCode::NotFound => "NOT_FOUND",
            ClientCode::Forbidden => "FORBIDDEN",
            ClientCode::Unauthenticated => "UNAUTHENTICATED",
            ClientCode::Conflict => "CONFLICT",
            ClientCode::Storage => "STORAGE",
            ClientCode::Payment => "PAYMENT_FAILED",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, StorefrontError>;

/// Unified error type used by core and server.
#[derive(Debug, Error)]
pub enum StorefrontError {
    #[error("validation: {0}")]
    Validation(String),
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("forbidden: {0}")]
    Forbidden(&'static str),
    #[error("unauthenticated")]
    Unauthenticated,
    #[error("conflict: {0}")]
    Conflict(&'static str),
    #[error("storage: {0}")]
    Storage(String),
    #[error("payment gateway: {0}")]
    Payment(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl StorefrontError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            StorefrontError::Validation(_) => ClientCode::Validation,
            StorefrontError::NotFound(_) => ClientCode::NotFound,
            StorefrontError::Forbidden(_) => ClientCode::Forbidden,
            StorefrontError::Unauthenticated => ClientCode::Unauthenticated,
            StorefrontError::Conflict(_) => ClientCode::Conflict,
            StorefrontError::Storage(_) => ClientCode::Storage,
            StorefrontError::Payment(_) => ClientCode::Payment,
            StorefrontError::Internal(_) => ClientCode::Internal,
        }
    }
}
