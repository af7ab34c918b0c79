//! Central application state shared between the UI thread and background tasks.

use std::path::PathBuf;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::app::events::NotifyLevel;
use crate::config::StudioConfig;
use crate::core::NftService;
use crate::services::sdk::NftRecord;
use crate::services::wallet::WalletService;

/// Where the studio currently is in its lifecycle.
///
/// Exactly one phase is active at a time. The submit and pick buttons are
/// only enabled in `Idle`, which rules out overlapping pipelines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No wallet connected; only the connect screen is shown.
    Disconnected,
    /// Wallet connected, nothing in flight.
    Idle,
    /// A mint pipeline is running.
    Submitting,
    /// A random-NFT fetch is running.
    LoadingRandom,
}

/// Per-field validation errors, displayed inline under the inputs.
#[derive(Debug, Clone, Default)]
pub struct MintFormErrors {
    pub name: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
}

impl MintFormErrors {
    pub fn is_clear(&self) -> bool {
        self.name.is_none() && self.description.is_none() && self.image.is_none()
    }
}

/// Draft inputs for the mint form.
#[derive(Debug, Clone, Default)]
pub struct MintForm {
    pub name: String,
    pub description: String,
    pub image: Option<PathBuf>,
    pub errors: MintFormErrors,
}

impl MintForm {
    pub fn reset(&mut self) {
        self.name.clear();
        self.description.clear();
        self.image = None;
        self.errors = MintFormErrors::default();
    }
}

/// Connected-wallet details shown in the header.
#[derive(Debug, Clone, Default)]
pub struct WalletState {
    pub address: String,
    pub sol_balance: f64,
}

/// Outcome of a successful mint, kept around for the explorer link.
#[derive(Debug, Clone)]
pub struct MintReceipt {
    pub address: String,
    pub name: String,
    pub uri: String,
    pub minted_at: DateTime<Utc>,
}

pub struct AppState {
    pub phase: Phase,
    pub wallet: WalletState,
    pub wallet_service: Option<WalletService>,
    pub mint_form: MintForm,
    /// Most recently picked NFT, shown in the result block.
    pub displayed_nft: Option<NftRecord>,
    pub last_mint: Option<MintReceipt>,
    /// When set, a blocking modal is shown until the user dismisses it.
    pub alert: Option<String>,
    /// Toasts queued by handlers; drained into the toast stack each frame.
    pub pending_notifications: Vec<(NotifyLevel, String)>,
    pub sdk: Arc<dyn NftService>,
    pub config: StudioConfig,
}

impl AppState {
    pub fn new(sdk: Arc<dyn NftService>, config: StudioConfig) -> Self {
        Self {
            phase: Phase::Disconnected,
            wallet: WalletState::default(),
            wallet_service: None,
            mint_form: MintForm::default(),
            displayed_nft: None,
            last_mint: None,
            alert: None,
            pending_notifications: Vec::new(),
            sdk,
            config,
        }
    }

    pub fn is_connected(&self) -> bool {
        self.phase != Phase::Disconnected
    }

    pub fn public_key(&self) -> Option<String> {
        self.wallet_service.as_ref().and_then(|w| w.get_public_key())
    }

    /// Submit is only allowed while idle with a connected wallet.
    pub fn can_submit(&self) -> bool {
        self.phase == Phase::Idle
    }

    /// Pick-random is only allowed while idle with a connected wallet.
    pub fn can_pick(&self) -> bool {
        self.phase == Phase::Idle
    }

    /// Base58 address of the displayed NFT, or empty when nothing is shown.
    pub fn displayed_address(&self) -> &str {
        self.displayed_nft
            .as_ref()
            .map(|n| n.address.as_str())
            .unwrap_or("")
    }

    /// Image URL for the displayed NFT, falling back to the bundled
    /// placeholder when the metadata carries no image.
    pub fn nft_image_source(&self) -> Option<&str> {
        let nft = self.displayed_nft.as_ref()?;
        Some(nft.image_url().unwrap_or(&self.config.fallback_image))
    }

    pub fn notify(&mut self, level: NotifyLevel, message: impl Into<String>) {
        self.pending_notifications.push((level, message.into()));
    }
}

/// Shorthand for the shared lock the UI thread and tasks both hold.
pub type SharedState = Arc<parking_lot::RwLock<AppState>>;
