//! Playlist Editor WASM API
//!
//! This module provides the JavaScript-facing API for the playlist editor.
//!
//! # Module Structure
//!
//! - `helpers`: Logging macros and conversions between Rust and JavaScript values
//! - `types`: Result types handed back to JavaScript
//! - `core`: The exported session operations
//!
//! Every mutating export returns a fresh `SessionSnapshot` so the page can
//! re-render the list sidebar, the open playlist and the toolbar in one pass.

pub mod helpers;
pub mod types;
pub mod core;

pub use self::core::*;
pub use types::SessionSnapshot;
