//! # Common Error Types
//!
//! Consolidated error handling for the Mintdeck application.
//!
//! Errors are categorized by their source:
//!
//! - **Sdk**: SDK gateway communication errors (network, HTTP, JSON parsing)
//! - **Wallet**: Solana wallet operations (keypair load, balance queries)
//! - **Validation**: Input validation errors (missing fields, bad image type)
//! - **State**: Application state management errors (invalid phase transition)
//!
//! ## Usage Pattern
//!
//! ```rust,no_run
//! use mintdeck::core::error::AppError;
//!
//! fn validate_name(name: &str) -> Result<(), AppError> {
//!     if name.is_empty() {
//!         return Err(AppError::Validation("Name is required".to_string()));
//!     }
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// Application-wide error type covering all error scenarios in Mintdeck.
///
/// Each variant includes a descriptive `String` message for context. The
/// `#[error]` attribute from `thiserror` provides automatic `Display` and
/// `Error` implementations.
#[derive(Debug, Error)]
pub enum AppError {
    /// SDK gateway communication error.
    ///
    /// Network failures, HTTP error statuses, and malformed responses from
    /// the NFT SDK gateway all land here.
    #[error("SDK error: {0}")]
    Sdk(String),

    /// Solana wallet operation error.
    #[error("Wallet error: {0}")]
    Wallet(String),

    /// Input validation error.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Application state management error.
    #[error("State error: {0}")]
    State(String),
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

impl From<String> for AppError {
    fn from(msg: String) -> Self {
        AppError::Sdk(msg)
    }
}

impl From<&str> for AppError {
    fn from(msg: &str) -> Self {
        AppError::Sdk(msg.to_string())
    }
}

impl From<crate::services::wallet::WalletError> for AppError {
    fn from(err: crate::services::wallet::WalletError) -> Self {
        AppError::Wallet(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AppError::Sdk("Connection timeout".to_string());
        assert_eq!(err.to_string(), "SDK error: Connection timeout");

        let err = AppError::Validation("Name is required".to_string());
        assert_eq!(err.to_string(), "Validation error: Name is required");
    }

    #[test]
    fn test_string_conversion_defaults_to_sdk() {
        let err: AppError = "boom".into();
        assert!(matches!(err, AppError::Sdk(_)));
    }
}
