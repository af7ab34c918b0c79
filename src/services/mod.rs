//! # Services Module
//!
//! External collaborators for Mintdeck. All hard problems live on the other
//! side of these seams.
//!
//! ```text
//! services/
//! ├── sdk/        - NFT SDK gateway HTTP client
//! │                 (metadata upload, token create, owner query, load)
//! └── wallet.rs   - Solana wallet service
//!                   (keypair identity, balance queries)
//! ```
//!
//! ## Service Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                      Mintdeck GUI                       │
//! │                                                         │
//! │  ┌──────────────────┐       ┌──────────────────┐        │
//! │  │  SdkClient       │       │  WalletService   │        │
//! │  │  (sdk/)          │       │  (wallet.rs)     │        │
//! │  └────────┬─────────┘       └────────┬─────────┘        │
//! └───────────┼──────────────────────────┼──────────────────┘
//!             │ HTTP/JSON                │ Solana RPC
//!             ▼                          ▼
//! ┌─────────────────────┐    ┌─────────────────────────────┐
//! │  NFT SDK Gateway    │    │     Solana Network          │
//! │                     │    │     (Devnet/Mainnet)        │
//! │  /api/nfts/metadata │    │  - Get balance              │
//! │  /api/nfts          │    └─────────────────────────────┘
//! │  /api/nfts/{mint}   │
//! └─────────────────────┘
//! ```
//!
//! `SdkClient` wraps `reqwest::Client` and is safe to share behind an `Arc`.
//! `WalletService` holds the keypair secret and is not thread-safe; it lives
//! in `AppState` behind the state lock, and the secret never leaves the
//! client process.

pub mod sdk;
pub mod wallet;
