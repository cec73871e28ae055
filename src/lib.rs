//! Playlist Editor WASM Module
//!
//! Owns the playlist editor's state in the browser. JavaScript renders the
//! page and forwards user actions to the exports in `api`; every song edit
//! goes through the undo/redo transaction stack in `undo`.

pub mod error;
pub mod models;
pub mod undo;
pub mod session;
pub mod storage;
pub mod api;

// Re-export commonly used types
pub use error::EditError;
pub use models::*;
pub use session::{Session, SessionObserver, ToolbarState};
pub use storage::{LocalStorage, MemoryStorage, Storage};
pub use undo::{Command, TransactionStack};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    init_logging();
    log::info!("Playlist editor WASM module initialized");
}

#[cfg(feature = "console_log")]
fn init_logging() {
    if console_log::init_with_level(log::Level::Debug).is_err() {
        web_sys::console::warn_1(&"[WASM] logger already initialized".into());
    }
}

#[cfg(not(feature = "console_log"))]
fn init_logging() {}
