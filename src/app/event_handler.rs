//! Applies task outcomes to application state.

use tracing::{info, warn};

use crate::app::events::{AppEvent, NotifyLevel};
use crate::app::state::{MintReceipt, Phase};
use crate::app::App;
use crate::services::sdk::NftRecord;

/// Event application, one method per event variant.
pub trait AppEventHandler {
    fn dispatch(&mut self, event: AppEvent);
    fn handle_mint_result(&mut self, result: Result<MintReceipt, String>);
    fn handle_random_nft_result(&mut self, result: Result<NftRecord, String>);
    fn handle_nft_list_empty(&mut self);
    fn handle_notify(&mut self, level: NotifyLevel, message: String);
}

impl AppEventHandler for App {
    fn dispatch(&mut self, event: AppEvent) {
        match event {
            AppEvent::MintResult(result) => self.handle_mint_result(result),
            AppEvent::RandomNftResult(result) => self.handle_random_nft_result(result),
            AppEvent::NftListEmpty => self.handle_nft_list_empty(),
            AppEvent::Notify(level, message) => self.handle_notify(level, message),
        }
    }

    fn handle_mint_result(&mut self, result: Result<MintReceipt, String>) {
        let mut s = self.state.write();
        s.phase = Phase::Idle;
        match result {
            Ok(receipt) => {
                info!(address = %receipt.address, "Mint complete");
                s.notify(
                    NotifyLevel::Success,
                    format!("Minted \"{}\" at {}", receipt.name, receipt.address),
                );
                s.mint_form.reset();
                s.last_mint = Some(receipt);
            }
            Err(e) => {
                warn!("Mint failed: {}", e);
                s.notify(NotifyLevel::Error, format!("Mint failed: {}", e));
            }
        }
    }

    fn handle_random_nft_result(&mut self, result: Result<NftRecord, String>) {
        let mut s = self.state.write();
        s.phase = Phase::Idle;
        match result {
            Ok(record) => {
                info!(address = %record.address, "Displaying picked NFT");
                s.displayed_nft = Some(record);
            }
            Err(e) => {
                warn!("Random NFT fetch failed: {}", e);
                s.notify(NotifyLevel::Error, format!("Couldn't load an NFT: {}", e));
            }
        }
    }

    fn handle_nft_list_empty(&mut self) {
        let mut s = self.state.write();
        s.phase = Phase::Idle;
        // Whatever was on screen stays there; only the alert pops.
        s.alert = Some("Couldn't find NFTs in this wallet".to_string());
    }

    fn handle_notify(&mut self, level: NotifyLevel, message: String) {
        self.state.write().notify(level, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::MintForm;
    use crate::config::StudioConfig;
    use crate::core::service::testing::MockNftService;
    use chrono::Utc;
    use std::sync::Arc;

    fn app() -> App {
        App::new(Arc::new(MockNftService::new()), StudioConfig::default())
    }

    fn receipt() -> MintReceipt {
        MintReceipt {
            address: "Mint1111111111111111111111111111111111111".to_string(),
            name: "Rocket Monkey".to_string(),
            uri: "https://arweave.net/abc".to_string(),
            minted_at: Utc::now(),
        }
    }

    #[test]
    fn test_mint_success_resets_form_and_returns_to_idle() {
        let mut app = app();
        {
            let mut s = app.state.write();
            s.phase = Phase::Submitting;
            s.mint_form = MintForm {
                name: "Rocket Monkey".to_string(),
                description: "To the moon".to_string(),
                image: Some("/tmp/art.png".into()),
                ..Default::default()
            };
        }

        app.handle_mint_result(Ok(receipt()));

        let s = app.state.read();
        assert_eq!(s.phase, Phase::Idle);
        assert!(s.mint_form.name.is_empty());
        assert!(s.last_mint.is_some());
        assert!(s
            .pending_notifications
            .iter()
            .any(|(level, _)| *level == NotifyLevel::Success));
    }

    #[test]
    fn test_mint_failure_keeps_form_and_notifies() {
        let mut app = app();
        {
            let mut s = app.state.write();
            s.phase = Phase::Submitting;
            s.mint_form.name = "Rocket Monkey".to_string();
        }

        app.handle_mint_result(Err("Storage unavailable".to_string()));

        let s = app.state.read();
        assert_eq!(s.phase, Phase::Idle);
        assert_eq!(s.mint_form.name, "Rocket Monkey");
        assert!(s.last_mint.is_none());
        assert!(s
            .pending_notifications
            .iter()
            .any(|(level, _)| *level == NotifyLevel::Error));
    }

    #[test]
    fn test_picked_nft_replaces_display() {
        let mut app = app();
        app.state.write().phase = Phase::LoadingRandom;

        let record = NftRecord {
            address: "PickedMint111111111111111111111111111111".to_string(),
            name: "Picked".to_string(),
            json: None,
        };
        app.handle_random_nft_result(Ok(record));

        let s = app.state.read();
        assert_eq!(s.phase, Phase::Idle);
        assert_eq!(s.displayed_address(), "PickedMint111111111111111111111111111111");
    }

    #[test]
    fn test_empty_wallet_raises_alert_without_clearing_display() {
        let mut app = app();
        {
            let mut s = app.state.write();
            s.phase = Phase::LoadingRandom;
            s.displayed_nft = Some(NftRecord {
                address: "OldMint".to_string(),
                name: "Old".to_string(),
                json: None,
            });
        }

        app.handle_nft_list_empty();

        let s = app.state.read();
        assert_eq!(s.phase, Phase::Idle);
        assert_eq!(s.alert.as_deref(), Some("Couldn't find NFTs in this wallet"));
        assert!(s.displayed_nft.is_some());
    }
}
