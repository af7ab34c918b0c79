//! Mint and pick-random actions triggered from the studio screen.

use tracing::info;

use crate::app::events::AppEvent;
use crate::app::state::{MintFormErrors, Phase, SharedState};
use crate::app::tasks;
use crate::utils::validation::{validate_description, validate_image, validate_name};

/// Validate the form in place, recording per-field errors.
///
/// Returns true when every field passes.
pub fn validate_form(state: &SharedState) -> bool {
    let mut s = state.write();
    let errors = MintFormErrors {
        name: validate_name(&s.mint_form.name).error,
        description: validate_description(&s.mint_form.description).error,
        image: validate_image(s.mint_form.image.as_deref()).error,
    };
    let ok = errors.is_clear();
    s.mint_form.errors = errors;
    ok
}

/// Submit the mint form.
///
/// Invalid input stops here with inline errors and never reaches the
/// gateway. Valid input moves to `Submitting` and hands off to the
/// pipeline.
pub fn handle_submit(state: &SharedState, event_tx: async_channel::Sender<AppEvent>) {
    if !state.read().can_submit() {
        return;
    }

    if !validate_form(state) {
        info!("Mint form rejected by validation");
        return;
    }

    state.write().phase = Phase::Submitting;
    tasks::submit_mint(state, event_tx);
}

/// Kick off the random-NFT fetch.
pub fn handle_pick_random(state: &SharedState, event_tx: async_channel::Sender<AppEvent>) {
    if !state.read().can_pick() {
        return;
    }

    state.write().phase = Phase::LoadingRandom;
    tasks::fetch_random_nft(state, event_tx);
}
