//! Exported session operations
//!
//! The session lives in WASM-owned storage; JavaScript only ever sees
//! snapshots of it.

use std::sync::Mutex;

use lazy_static::lazy_static;
use wasm_bindgen::prelude::*;

use crate::api::helpers::{edit_error, serialize};
use crate::api::types::SessionSnapshot;
use crate::error::EditError;
use crate::session::Session;
use crate::storage::LocalStorage;
use crate::{wasm_error, wasm_info, wasm_log, wasm_warn};

// WASM-owned session storage (canonical source of truth)
lazy_static! {
    static ref SESSION: Mutex<Option<Session<LocalStorage>>> = Mutex::new(None);
}

/// Run `f` against the session, creating it on first use
fn with_session<T>(
    context: &str,
    f: impl FnOnce(&mut Session<LocalStorage>) -> Result<T, EditError>,
) -> Result<T, JsValue> {
    let mut guard = SESSION.lock().map_err(|e| {
        wasm_error!("Failed to lock session: {:?}", e);
        JsValue::from_str("Session unavailable")
    })?;

    let session = guard.get_or_insert_with(|| Session::new(LocalStorage));
    f(session).map_err(|e| edit_error(context, e))
}

/// Run a mutating operation and hand back the resulting snapshot
fn mutate(
    context: &str,
    f: impl FnOnce(&mut Session<LocalStorage>) -> Result<(), EditError>,
) -> Result<JsValue, JsValue> {
    wasm_log!("{} called", context);
    let snapshot = with_session(context, |session| {
        f(session)?;
        Ok(SessionSnapshot::from_session(session))
    })?;
    serialize(&snapshot, "SessionSnapshot serialization error")
}

// ============================================================================
// Session lifecycle
// ============================================================================

/// Create a fresh session and load saved playlists from localStorage
#[wasm_bindgen(js_name = initSession)]
pub fn init_session() -> Result<JsValue, JsValue> {
    wasm_info!("initSession called");

    let snapshot = with_session("initSession", |session| {
        *session = Session::new(LocalStorage);
        match session.load_lists() {
            Ok(true) => wasm_info!("Restored {} playlists", session.playlists().len()),
            Ok(false) => wasm_info!("No saved playlists"),
            Err(e) => wasm_warn!("Ignoring saved playlists: {}", e),
        }
        Ok(SessionSnapshot::from_session(session))
    })?;
    serialize(&snapshot, "SessionSnapshot serialization error")
}

/// Get the current session snapshot
#[wasm_bindgen(js_name = getSnapshot)]
pub fn get_snapshot() -> Result<JsValue, JsValue> {
    let snapshot = with_session("getSnapshot", |session| Ok(SessionSnapshot::from_session(session)))?;
    serialize(&snapshot, "SessionSnapshot serialization error")
}

// ============================================================================
// Playlist operations
// ============================================================================

/// Create an untitled playlist and open it
#[wasm_bindgen(js_name = createNewList)]
pub fn create_new_list() -> Result<JsValue, JsValue> {
    mutate("createNewList", |session| session.create_new_list().map(|_| ()))
}

/// Create a named playlist without opening it
#[wasm_bindgen(js_name = addNewList)]
pub fn add_new_list(name: &str) -> Result<JsValue, JsValue> {
    mutate("addNewList", |session| {
        session.add_new_list(name, Vec::new());
        session.save_lists()
    })
}

#[wasm_bindgen(js_name = loadList)]
pub fn load_list(id: u32) -> Result<JsValue, JsValue> {
    mutate("loadList", |session| session.load_list(id))
}

#[wasm_bindgen(js_name = closeList)]
pub fn close_list() -> Result<JsValue, JsValue> {
    mutate("closeList", |session| {
        session.unselect_current_list();
        Ok(())
    })
}

#[wasm_bindgen(js_name = renameList)]
pub fn rename_list(id: u32, name: &str) -> Result<JsValue, JsValue> {
    mutate("renameList", |session| session.rename_list(id, name))
}

#[wasm_bindgen(js_name = deleteList)]
pub fn delete_list(id: u32) -> Result<JsValue, JsValue> {
    mutate("deleteList", |session| session.delete_list(id))
}

#[wasm_bindgen(js_name = toggleConfirmDialog)]
pub fn toggle_confirm_dialog() -> Result<bool, JsValue> {
    with_session("toggleConfirmDialog", |session| Ok(session.toggle_confirm_dialog()))
}

// ============================================================================
// Song operations (undoable)
// ============================================================================

#[wasm_bindgen(js_name = addSong)]
pub fn add_song() -> Result<JsValue, JsValue> {
    mutate("addSong", |session| session.add_song())
}

#[wasm_bindgen(js_name = removeSong)]
pub fn remove_song(index: usize) -> Result<JsValue, JsValue> {
    mutate("removeSong", |session| session.remove_song(index))
}

/// Overwrite a song's fields; empty strings fall back to the defaults
#[wasm_bindgen(js_name = editSong)]
pub fn edit_song(index: usize, title: &str, artist: &str, you_tube_id: &str) -> Result<JsValue, JsValue> {
    mutate("editSong", |session| session.edit_song(index, title, artist, you_tube_id))
}

/// Move a song; `to` is its resting index after the move
#[wasm_bindgen(js_name = moveSong)]
pub fn move_song(from: usize, to: usize) -> Result<JsValue, JsValue> {
    mutate("moveSong", |session| session.move_song(from, to))
}

// ============================================================================
// Undo/Redo operations
// ============================================================================

/// Undo the last song edit; does nothing when there is none
#[wasm_bindgen(js_name = undo)]
pub fn undo() -> Result<JsValue, JsValue> {
    mutate("undo", |session| session.undo())
}

/// Redo the last undone song edit; does nothing when there is none
#[wasm_bindgen(js_name = redo)]
pub fn redo() -> Result<JsValue, JsValue> {
    mutate("redo", |session| session.redo())
}

/// Check if undo is available
#[wasm_bindgen(js_name = canUndo)]
pub fn can_undo() -> Result<bool, JsValue> {
    with_session("canUndo", |session| Ok(session.transactions().has_transaction_to_undo()))
}

/// Check if redo is available
#[wasm_bindgen(js_name = canRedo)]
pub fn can_redo() -> Result<bool, JsValue> {
    with_session("canRedo", |session| Ok(session.transactions().has_transaction_to_redo()))
}
