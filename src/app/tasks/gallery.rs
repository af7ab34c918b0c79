//! Random-NFT fetch: list everything the wallet owns, pick one uniformly,
//! load its full record.

use std::sync::Arc;

use rand::Rng;
use tracing::{error, info};

use crate::app::events::AppEvent;
use crate::app::state::SharedState;
use crate::core::NftService;
use crate::services::sdk::NftRecord;
use crate::utils::runtime::TOKIO_RT;

/// What the pick flow produced.
#[derive(Debug, Clone)]
pub enum PickOutcome {
    /// The wallet owns no NFTs.
    Empty,
    Picked(NftRecord),
    Failed(String),
}

/// Uniform index into a list of `len` handles, `None` when empty.
pub fn pick_index(len: usize, rng: &mut impl Rng) -> Option<usize> {
    if len == 0 {
        None
    } else {
        Some(rng.random_range(0..len))
    }
}

/// Fetch the owner's NFTs and load one chosen uniformly at random.
pub async fn run_pick(sdk: &dyn NftService, owner: &str) -> PickOutcome {
    let handles = match sdk.find_all_by_owner(owner).await {
        Ok(h) => h,
        Err(e) => return PickOutcome::Failed(e),
    };

    let index = match pick_index(handles.len(), &mut rand::rng()) {
        Some(i) => i,
        None => return PickOutcome::Empty,
    };

    info!(owned = handles.len(), index, "Loading randomly picked NFT");

    match sdk.load_nft(&handles[index]).await {
        Ok(record) => PickOutcome::Picked(record),
        Err(e) => PickOutcome::Failed(e),
    }
}

/// Spawn the pick flow on the shared runtime.
///
/// The caller has already set `Phase::LoadingRandom`; outcomes come back as
/// `RandomNftResult` or `NftListEmpty` events.
pub fn fetch_random_nft(state: &SharedState, event_tx: async_channel::Sender<AppEvent>) {
    let (sdk, owner) = {
        let s = state.read();
        let owner = match s.public_key() {
            Some(key) => key,
            None => {
                error!("fetch_random_nft called without a connected wallet");
                return;
            }
        };
        (Arc::clone(&s.sdk), owner)
    };

    TOKIO_RT.spawn(async move {
        let event = match run_pick(sdk.as_ref(), &owner).await {
            PickOutcome::Picked(record) => AppEvent::RandomNftResult(Ok(record)),
            PickOutcome::Empty => AppEvent::NftListEmpty,
            PickOutcome::Failed(e) => {
                error!("Random NFT fetch failed: {}", e);
                AppEvent::RandomNftResult(Err(e))
            }
        };
        let _ = event_tx.send(event).await;
    });
}
