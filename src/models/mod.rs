//! Models module for the playlist editor
//!
//! This module contains the song and playlist documents that
//! the undo/redo commands operate on.

pub mod song;
pub mod playlist;

// Re-export commonly used types
pub use song::*;
pub use playlist::*;
