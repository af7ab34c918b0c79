//! Background pipelines spawned onto the shared Tokio runtime.
//!
//! Each task snapshots what it needs from state under the lock, drops the
//! lock before any await, and reports back through the event channel.

pub mod gallery;
pub mod mint;

pub use gallery::fetch_random_nft;
pub use mint::submit_mint;
