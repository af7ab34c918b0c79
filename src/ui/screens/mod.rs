//! Screen renderers.
//!
//! Each screen exposes a `render` function taking the egui `Ui` and the
//! [`crate::app::App`] orchestrator. Screens collect clicks into a local
//! action enum and dispatch after the state lock is released.

pub mod connect;
pub mod studio;
