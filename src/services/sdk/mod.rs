//! # SDK Gateway Client Module
//!
//! HTTP client for the external NFT SDK gateway. Metadata upload, token
//! creation, owner queries, and record loading are all delegated to the
//! gateway; this module is the REST adapter.
//!
//! ## Module Structure
//!
//! ```text
//! sdk/
//! ├── mod.rs      - Module exports
//! ├── client.rs   - SdkClient struct and common functionality
//! └── nfts.rs     - NFT endpoints (upload, create, find-by-owner, load)
//! ```

pub mod client;
pub mod nfts;

pub use client::SdkClient;
pub use nfts::*;
