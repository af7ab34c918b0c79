//! # Application Orchestrator
//!
//! The [`App`] struct coordinates the UI rendering layer, background tasks,
//! and shared state.
//!
//! ## Architecture
//!
//! The application follows an event-driven pattern:
//!
//! ```text
//! ┌────────────────────────────────────────────────────┐
//! │                Main Thread (egui)                  │
//! │  App (orchestrator)                                │
//! │  - on_tick() - drains the event channel each frame │
//! │  - handle_*_click() - user action handlers         │
//! │                                                    │
//! │  State: Arc<RwLock<AppState>>                      │
//! └──────────────────────┬─────────────────────────────┘
//!                        │ async_channel (unbounded)
//! ┌──────────────────────▼─────────────────────────────┐
//! │           Background Tasks (Tokio)                 │
//! │  - mint pipeline (upload metadata, create token)   │
//! │  - random-NFT fetch (list, pick, load)             │
//! │  - balance refresh                                 │
//! └────────────────────────────────────────────────────┘
//! ```
//!
//! Locks are held briefly and never across an await. Tasks snapshot what
//! they need, run, and report back through [`AppEvent`].

pub mod event_handler;
pub mod events;
pub mod handlers;
pub mod state;
pub mod tasks;

pub use event_handler::AppEventHandler;
pub use events::{AppEvent, NotifyLevel};
pub use state::{AppState, MintForm, MintReceipt, Phase, SharedState, WalletState};

use std::sync::Arc;

use async_channel::{unbounded, Receiver, Sender};
use parking_lot::RwLock;

use crate::config::StudioConfig;
use crate::core::NftService;

/// Main application orchestrator.
///
/// Holds the shared state lock and both ends of the event channel. The SDK
/// gateway handle and configuration are injected at construction, so tests
/// can run the whole orchestrator against a mock gateway.
pub struct App {
    /// Thread-safe shared application state.
    pub state: SharedState,
    /// Receives task results; polled with `try_recv()` in [`App::on_tick`].
    pub event_rx: Receiver<AppEvent>,
    /// Cloned into tasks so they can report back.
    event_tx: Sender<AppEvent>,
}

impl App {
    /// Create the orchestrator with an injected gateway and config.
    pub fn new(sdk: Arc<dyn NftService>, config: StudioConfig) -> Self {
        let (event_tx, event_rx) = unbounded();

        tracing::info!(
            gateway = %config.gateway_url,
            rpc = %config.rpc_url,
            royalty_bps = config.seller_fee_basis_points,
            "App initialized"
        );

        App {
            state: Arc::new(RwLock::new(AppState::new(sdk, config))),
            event_rx,
            event_tx,
        }
    }

    /// Called every frame: applies all pending task results to state.
    pub fn on_tick(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.dispatch(event);
        }
    }

    // ========== GUI Action Methods - Delegating to Handlers ==========

    /// Connect with the configured or default keypair file.
    pub fn handle_connect_click(&mut self) {
        handlers::wallet::handle_connect(&self.state);
    }

    /// Connect with a keypair file the user browsed to.
    pub fn handle_connect_from_file(&mut self, path: std::path::PathBuf) {
        handlers::wallet::handle_connect_from_file(&self.state, path);
    }

    /// Generate a fresh keypair and connect with it.
    pub fn handle_generate_click(&mut self) {
        handlers::wallet::handle_generate(&self.state);
    }

    /// Disconnect and return to the connect screen.
    pub fn handle_disconnect_click(&mut self) {
        handlers::wallet::handle_disconnect(&self.state);
    }

    /// Validate the mint form and run the pipeline if it passes.
    pub fn handle_submit_click(&mut self) {
        handlers::mint::handle_submit(&self.state, self.event_tx.clone());
    }

    /// Fetch and display a random NFT from the connected wallet.
    pub fn handle_pick_random_click(&mut self) {
        handlers::mint::handle_pick_random(&self.state, self.event_tx.clone());
    }

    /// Dismiss the blocking alert modal.
    pub fn handle_alert_dismiss(&mut self) {
        self.state.write().alert = None;
    }

    /// Event sender for anything that needs to report back out-of-band.
    pub fn event_tx(&self) -> Sender<AppEvent> {
        self.event_tx.clone()
    }
}
