//! UI action handlers.
//!
//! Handlers run on the UI thread: they validate, flip phases, and hand
//! anything slow to `tasks`.

pub mod mint;
pub mod wallet;
