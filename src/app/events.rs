//! Events delivered from background tasks to the UI thread.
//!
//! Tasks run on the Tokio runtime and cannot touch egui directly, so they
//! push their outcomes onto an unbounded channel that the app drains once
//! per frame in `on_tick`.

use crate::app::state::MintReceipt;
use crate::services::sdk::NftRecord;

/// Severity of a toast notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyLevel {
    Success,
    Error,
    Warning,
    Info,
}

/// Messages emitted by background tasks.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// The mint pipeline finished, successfully or not.
    MintResult(Result<MintReceipt, String>),
    /// A random owned NFT was fetched, or the fetch failed.
    RandomNftResult(Result<NftRecord, String>),
    /// The wallet owns no NFTs at all.
    NftListEmpty,
    /// Free-form notification for the toast stack.
    Notify(NotifyLevel, String),
}
