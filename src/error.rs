//! Error types for playlist editing
//!
//! Undo/redo with nothing to do is not an error and never shows up here.
//! Everything else that can go wrong while editing or persisting is an
//! `EditError`.

use thiserror::Error;

/// Top-level error type for the playlist editor core
#[derive(Debug, Error)]
pub enum EditError {
    /// A song index outside the current playlist
    #[error("Invalid song index {index} (playlist has {len} songs)")]
    InvalidIndex { index: usize, len: usize },

    /// A song operation was requested with no playlist open
    #[error("No playlist is currently open")]
    NoListSelected,

    /// No playlist carries the requested id
    #[error("Playlist {0} not found")]
    ListNotFound(u32),

    /// The storage backend refused a read or write
    #[error("Storage error: {0}")]
    Storage(String),

    /// Stored playlists could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EditError>;

/// Check that `index` addresses an existing element of a sequence of `len`
pub fn validate_index(index: usize, len: usize) -> Result<()> {
    if index >= len {
        return Err(EditError::InvalidIndex { index, len });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_index() {
        assert!(validate_index(0, 1).is_ok());
        assert!(validate_index(2, 3).is_ok());

        match validate_index(3, 3) {
            Err(EditError::InvalidIndex { index, len }) => {
                assert_eq!(index, 3);
                assert_eq!(len, 3);
            }
            other => panic!("expected InvalidIndex, got {:?}", other),
        }

        assert!(validate_index(0, 0).is_err());
    }

    #[test]
    fn test_error_messages() {
        let err = EditError::InvalidIndex { index: 5, len: 2 };
        assert_eq!(err.to_string(), "Invalid song index 5 (playlist has 2 songs)");
        assert_eq!(EditError::ListNotFound(7).to_string(), "Playlist 7 not found");
    }
}
