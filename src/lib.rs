//! estate-suggest-rs
//! =================
//!
//! Umbrella crate for the workspace. It re-exports [`estate_suggest_core`]
//! so the demos in `demos/` can `use estate_suggest_rs::prelude::*`.
pub use estate_suggest_core::*;
