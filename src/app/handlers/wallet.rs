//! Wallet connect / generate / disconnect actions triggered from the UI.

use std::path::Path;

use tracing::{error, info, warn};

use crate::app::events::NotifyLevel;
use crate::app::state::{Phase, SharedState, WalletState};
use crate::core::Result;
use crate::services::wallet::{self, WalletService};
use crate::utils::runtime::TOKIO_RT;

/// Build a wallet service from a keypair file.
fn load_wallet(rpc_url: &str, path: &Path) -> Result<WalletService> {
    let mut service = WalletService::new(rpc_url);
    service.load_keypair_from_file(path)?;
    Ok(service)
}

/// Connect using the configured keypair path, or the default CLI location.
pub fn handle_connect(state: &SharedState) {
    let (rpc_url, path) = {
        let s = state.read();
        (s.config.rpc_url.clone(), s.config.keypair_path.clone())
    };

    let path = match path.or_else(wallet::default_keypair_path) {
        Some(p) => p,
        None => {
            warn!("No keypair path configured and no default CLI keypair found");
            state.write().notify(
                NotifyLevel::Warning,
                "No keypair found. Generate one or browse for a keypair file.",
            );
            return;
        }
    };

    match load_wallet(&rpc_url, &path) {
        Ok(service) => attach_wallet(state, service),
        Err(e) => {
            error!(path = %path.display(), "Failed to load keypair: {}", e);
            state
                .write()
                .notify(NotifyLevel::Error, format!("Failed to load keypair: {}", e));
        }
    }
}

/// Connect from an explicit keypair file the user browsed to.
pub fn handle_connect_from_file(state: &SharedState, path: std::path::PathBuf) {
    let rpc_url = state.read().config.rpc_url.clone();
    match load_wallet(&rpc_url, &path) {
        Ok(service) => attach_wallet(state, service),
        Err(e) => {
            error!(path = %path.display(), "Failed to load keypair: {}", e);
            state
                .write()
                .notify(NotifyLevel::Error, format!("Failed to load keypair: {}", e));
        }
    }
}

/// Generate a throwaway keypair and connect with it.
pub fn handle_generate(state: &SharedState) {
    let rpc_url = state.read().config.rpc_url.clone();
    let mut service = WalletService::new(&rpc_url);
    let address = service.generate_new_keypair();
    info!(%address, "Generated new wallet keypair");
    state.write().notify(
        NotifyLevel::Info,
        "Generated a new keypair. Fund it on devnet before minting.",
    );
    attach_wallet(state, service);
}

/// Install a loaded wallet into state and kick off a balance refresh.
fn attach_wallet(state: &SharedState, service: WalletService) {
    let address = match service.get_public_key() {
        Some(a) => a,
        None => {
            error!("attach_wallet called with a keyless wallet service");
            return;
        }
    };
    let rpc_url = service.rpc_url().to_string();

    info!(%address, "Wallet connected");
    {
        let mut s = state.write();
        s.wallet_service = Some(service);
        s.wallet = WalletState {
            address: address.clone(),
            sol_balance: 0.0,
        };
        s.phase = Phase::Idle;
        s.notify(NotifyLevel::Success, "Wallet connected");
    }

    refresh_balance(state, rpc_url, address);
}

/// Fetch the SOL balance off-thread and write it back when it arrives.
pub fn refresh_balance(state: &SharedState, rpc_url: String, address: String) {
    let state = state.clone();
    TOKIO_RT.spawn(async move {
        let result = tokio::task::spawn_blocking({
            let rpc_url = rpc_url.clone();
            let address = address.clone();
            move || wallet::query_balance(&rpc_url, &address)
        })
        .await;

        match result {
            Ok(Ok(balance)) => {
                let mut s = state.write();
                if s.wallet.address == address {
                    s.wallet.sol_balance = balance;
                }
            }
            Ok(Err(e)) => warn!("Balance query failed: {}", e),
            Err(e) => error!("Balance task panicked: {}", e),
        }
    });
}

/// Drop the wallet and return to the connect screen.
pub fn handle_disconnect(state: &SharedState) {
    let mut s = state.write();
    if let Some(service) = s.wallet_service.as_mut() {
        service.disconnect();
    }
    s.wallet_service = None;
    s.wallet = WalletState::default();
    s.phase = Phase::Disconnected;
    s.displayed_nft = None;
    info!("Wallet disconnected");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::AppState;
    use crate::config::StudioConfig;
    use crate::core::service::testing::MockNftService;
    use std::sync::Arc;

    fn shared_state() -> SharedState {
        Arc::new(parking_lot::RwLock::new(AppState::new(
            Arc::new(MockNftService::new()),
            StudioConfig::default(),
        )))
    }

    #[test]
    fn test_generate_connects_and_enables_studio() {
        let state = shared_state();
        handle_generate(&state);

        let s = state.read();
        assert_eq!(s.phase, Phase::Idle);
        assert!(!s.wallet.address.is_empty());
        assert!(s.wallet_service.as_ref().is_some_and(|w| w.is_connected()));
    }

    #[test]
    fn test_disconnect_clears_everything() {
        let state = shared_state();
        handle_generate(&state);
        handle_disconnect(&state);

        let s = state.read();
        assert_eq!(s.phase, Phase::Disconnected);
        assert!(s.wallet.address.is_empty());
        assert!(s.wallet_service.is_none());
        assert!(s.displayed_nft.is_none());
    }
}
