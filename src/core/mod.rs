//! # Core Abstractions
//!
//! Core error types and dependency-injection traits used throughout the app.
//!
//! - **[`error`]**: Application error types (`AppError`, `Result<T>`)
//! - **[`service`]**: The `NftService` trait behind which the SDK gateway
//!   client sits, so tests can substitute a mock

pub mod error;
pub mod service;

pub use error::{AppError, Result};
pub use service::NftService;
