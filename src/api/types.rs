//! Shared types for the WASM API

use serde::{Deserialize, Serialize};

use crate::models::Playlist;
use crate::session::{Session, ToolbarState};
use crate::storage::Storage;

/// Everything the page needs to redraw after an operation
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub playlists: Vec<Playlist>,
    pub current_list: Option<Playlist>,
    pub toolbar: ToolbarState,
    pub status: String,
}

impl SessionSnapshot {
    pub fn from_session<S: Storage>(session: &Session<S>) -> Self {
        Self {
            playlists: session.playlists().to_vec(),
            current_list: session.current_list().cloned(),
            toolbar: session.toolbar_state(),
            status: session.status_text(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn test_snapshot_of_open_list() {
        let mut session = Session::new(MemoryStorage::new());
        session.add_new_list("Other", Vec::new());
        session.create_new_list().unwrap();
        session.add_song().unwrap();

        let snapshot = SessionSnapshot::from_session(&session);
        assert_eq!(snapshot.playlists.len(), 2);
        assert_eq!(snapshot.status, "Untitled");
        assert_eq!(snapshot.current_list.unwrap().len(), 1);
        assert!(snapshot.toolbar.undo);
    }

    #[test]
    fn test_snapshot_json_shape() {
        let session = Session::new(MemoryStorage::new());
        let json = serde_json::to_value(SessionSnapshot::from_session(&session)).unwrap();

        assert!(json["currentList"].is_null());
        assert_eq!(json["toolbar"]["addList"], true);
        assert_eq!(json["toolbar"]["addSong"], false);
    }
}
