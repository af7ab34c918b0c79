//! # Mintdeck - Library Root
//!
//! A native desktop studio for minting and browsing Solana NFTs. This
//! library crate contains all modules used by the binary crate (`main.rs`).
//!
//! ## Features
//!
//! - **Minting**: Upload metadata and artwork, then create the token with a
//!   configurable royalty
//! - **Random Viewer**: Fetch and display one NFT the connected wallet owns,
//!   chosen uniformly at random
//! - **Wallet Management**: Local keypair loading and generation with the
//!   Solana SDK
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              mintdeck (this crate)                     │
//! ├────────────────────────────────────────────────────────┤
//! │  egui          - Immediate-mode GUI framework          │
//! │  eframe        - Native window framework               │
//! │  Tokio         - Async runtime                         │
//! │  Reqwest       - HTTP client                           │
//! │  Solana SDK    - Keypair handling                      │
//! └────────────────────────────────────────────────────────┘
//!          │                              │
//!          │ HTTP                         │ Solana RPC
//!          ▼                              ▼
//! ┌─────────────────┐          ┌─────────────────────────┐
//! │  NFT Gateway    │          │   Solana Network        │
//! │  (SDK service)  │          │   (Devnet)              │
//! └─────────────────┘          └─────────────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **app**: Orchestrator, state machine, handlers, and background tasks
//! - **services**: The SDK gateway client and local wallet management
//! - **ui**: Screens, widgets, and theme
//! - **config**: Environment-driven configuration
//! - **core**: Error types and the gateway trait
//! - **utils**: Validation and runtime helpers
//!
//! All protocol, storage, and transaction mechanics live behind the gateway;
//! this crate only orchestrates the two flows and renders their outcomes.

pub mod app;
pub mod config;
pub mod core;
pub mod services;
pub mod ui;
pub mod utils;

// Re-export commonly used types for convenience
pub use app::{App, AppEvent, AppState, Phase};
pub use config::StudioConfig;
pub use crate::core::{AppError, NftService, Result};
pub use services::sdk::SdkClient;
