//! Editing session
//!
//! The session is the Model of the playlist editor. It owns every playlist,
//! tracks which one is open, and binds a single `TransactionStack` to that
//! playlist. Switching or closing the open playlist clears the stack so
//! history never leaks from one playlist into another.
//!
//! Song edits go through the stack; list-level operations (create, rename,
//! delete) are not undoable. After each change the session notifies its
//! observer and saves all playlists to storage.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::error::{EditError, Result};
use crate::models::{Playlist, Song, DEFAULT_LIST_NAME};
use crate::storage::{load_playlists, save_playlists, Storage};
use crate::undo::{Command, TransactionStack};

/// Which toolbar actions are currently available
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ToolbarState {
    pub add_list: bool,
    pub add_song: bool,
    pub undo: bool,
    pub redo: bool,
    pub close: bool,
}

/// Receives change notifications so a view can re-render
///
/// Every method defaults to doing nothing.
pub trait SessionObserver {
    fn refresh_lists(&mut self, _playlists: &[Playlist]) {}

    fn refresh_playlist(&mut self, _playlist: &Playlist) {}

    fn clear_workspace(&mut self) {}

    fn update_toolbar(&mut self, _toolbar: &ToolbarState) {}

    fn update_status_bar(&mut self, _status: &str) {}
}

pub struct Session<S: Storage> {
    playlists: Vec<Playlist>,
    /// Id of the open playlist
    current_list: Option<u32>,
    tps: TransactionStack,
    next_list_id: u32,
    confirm_dialog_open: bool,
    storage: S,
    observer: Option<Box<dyn SessionObserver + Send>>,
}

impl<S: Storage> Session<S> {
    pub fn new(storage: S) -> Self {
        Self {
            playlists: Vec::new(),
            current_list: None,
            tps: TransactionStack::new(),
            next_list_id: 0,
            confirm_dialog_open: false,
            storage,
            observer: None,
        }
    }

    pub fn set_observer(&mut self, observer: Box<dyn SessionObserver + Send>) {
        self.observer = Some(observer);
    }

    pub fn playlists(&self) -> &[Playlist] {
        &self.playlists
    }

    pub fn playlist(&self, id: u32) -> Option<&Playlist> {
        self.playlists.iter().find(|list| list.id == id)
    }

    pub fn current_list(&self) -> Option<&Playlist> {
        self.current_list.and_then(|id| self.playlist(id))
    }

    pub fn has_current_list(&self) -> bool {
        self.current_list.is_some()
    }

    pub fn transactions(&self) -> &TransactionStack {
        &self.tps
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn is_confirm_dialog_open(&self) -> bool {
        self.confirm_dialog_open
    }

    /// Text for the status bar: the open playlist's name, or nothing
    pub fn status_text(&self) -> String {
        self.current_list()
            .map(|list| list.name.clone())
            .unwrap_or_default()
    }

    /// Toolbar availability; everything is disabled while a dialog is open
    pub fn toolbar_state(&self) -> ToolbarState {
        if self.confirm_dialog_open {
            return ToolbarState::default();
        }

        let has_list = self.has_current_list();
        ToolbarState {
            add_list: !has_list,
            add_song: has_list,
            undo: self.tps.has_transaction_to_undo(),
            redo: self.tps.has_transaction_to_redo(),
            close: has_list,
        }
    }

    // ------------------------------------------------------------------
    // Playlist management
    // ------------------------------------------------------------------

    /// Create a playlist and return its id; an empty name keeps the default
    pub fn add_new_list(&mut self, name: &str, songs: Vec<Song>) -> u32 {
        let id = self.next_list_id;
        self.next_list_id += 1;

        let mut list = Playlist::new(id);
        if !name.is_empty() {
            list.set_name(name);
        }
        list.songs = songs;
        self.playlists.push(list);
        self.sort_lists();

        info!("created playlist {} ({} total)", id, self.playlists.len());
        id
    }

    /// Create an untitled playlist, open it and save
    pub fn create_new_list(&mut self) -> Result<u32> {
        let id = self.add_new_list(DEFAULT_LIST_NAME, Vec::new());
        self.load_list(id)?;
        self.save_lists()?;
        Ok(id)
    }

    /// Order playlists by name, ignoring case
    fn sort_lists(&mut self) {
        self.playlists.sort_by_key(|list| list.name.to_uppercase());
        self.notify_lists();
    }

    fn list_index(&self, id: u32) -> Result<usize> {
        self.playlists
            .iter()
            .position(|list| list.id == id)
            .ok_or(EditError::ListNotFound(id))
    }

    /// Open a playlist for editing
    ///
    /// Reopening the playlist that is already open keeps its history.
    pub fn load_list(&mut self, id: u32) -> Result<()> {
        if self.current_list == Some(id) {
            return Ok(());
        }

        let index = self.list_index(id)?;
        self.current_list = Some(id);
        self.tps.clear_all_transactions();
        info!("opened playlist {}", id);

        if let Some(observer) = self.observer.as_mut() {
            observer.refresh_playlist(&self.playlists[index]);
        }
        self.notify_status();
        self.notify_toolbar();
        Ok(())
    }

    /// Close the open playlist, if any
    pub fn unselect_current_list(&mut self) {
        if self.current_list.take().is_none() {
            return;
        }

        self.tps.clear_all_transactions();
        info!("closed playlist");

        if let Some(observer) = self.observer.as_mut() {
            observer.clear_workspace();
        }
        self.notify_status();
        self.notify_toolbar();
    }

    /// Rename a playlist; an empty name becomes the default name
    pub fn rename_list(&mut self, id: u32, name: &str) -> Result<()> {
        let index = self.list_index(id)?;
        self.playlists[index].set_name(name);
        self.sort_lists();
        self.notify_status();
        self.save_lists()
    }

    /// Delete a playlist, closing it first if it is open
    pub fn delete_list(&mut self, id: u32) -> Result<()> {
        let index = self.list_index(id)?;
        self.playlists.remove(index);
        info!("deleted playlist {}", id);
        self.notify_lists();

        if self.current_list == Some(id) {
            self.unselect_current_list();
        }
        self.save_lists()
    }

    /// Flip the confirm-dialog flag and return the new value
    pub fn toggle_confirm_dialog(&mut self) -> bool {
        self.confirm_dialog_open = !self.confirm_dialog_open;
        self.notify_toolbar();
        self.confirm_dialog_open
    }

    // ------------------------------------------------------------------
    // Song editing, all through the transaction stack
    // ------------------------------------------------------------------

    fn current_index(&self) -> Result<usize> {
        let id = self.current_list.ok_or(EditError::NoListSelected)?;
        self.list_index(id)
    }

    fn add_transaction(&mut self, command: Command) -> Result<()> {
        let index = self.current_index()?;
        self.tps.add_command(command, &mut self.playlists[index])?;
        self.after_edit(index)
    }

    /// Append a default song to the open playlist
    pub fn add_song(&mut self) -> Result<()> {
        self.add_transaction(Command::add_song())
    }

    pub fn remove_song(&mut self, index: usize) -> Result<()> {
        let list = self.current_index()?;
        let command = Command::remove_song(&self.playlists[list], index)?;
        self.add_transaction(command)
    }

    pub fn edit_song(&mut self, index: usize, title: &str, artist: &str, you_tube_id: &str) -> Result<()> {
        let list = self.current_index()?;
        let command = Command::edit_song(&self.playlists[list], index, title, artist, you_tube_id)?;
        self.add_transaction(command)
    }

    /// Move a song; moving a song onto itself records nothing
    pub fn move_song(&mut self, from: usize, to: usize) -> Result<()> {
        let list = self.current_index()?;
        let command = Command::move_song(&self.playlists[list], from, to)?;
        if from == to {
            debug!("ignoring move of song {} onto itself", from);
            return Ok(());
        }
        self.add_transaction(command)
    }

    pub fn undo(&mut self) -> Result<()> {
        if !self.tps.has_transaction_to_undo() {
            return Ok(());
        }
        let index = self.current_index()?;
        self.tps.undo_transaction(&mut self.playlists[index])?;
        self.after_edit(index)
    }

    pub fn redo(&mut self) -> Result<()> {
        if !self.tps.has_transaction_to_redo() {
            return Ok(());
        }
        let index = self.current_index()?;
        self.tps.do_transaction(&mut self.playlists[index])?;
        self.after_edit(index)
    }

    fn after_edit(&mut self, index: usize) -> Result<()> {
        if let Some(observer) = self.observer.as_mut() {
            observer.refresh_playlist(&self.playlists[index]);
        }
        self.notify_toolbar();
        self.save_lists()
    }

    // ------------------------------------------------------------------
    // Persistence
    // ------------------------------------------------------------------

    pub fn save_lists(&mut self) -> Result<()> {
        save_playlists(&mut self.storage, &self.playlists)
    }

    /// Replace all playlists with the stored ones
    ///
    /// Returns `false` when storage holds nothing. Stored ids are not kept;
    /// playlists get fresh ids in load order.
    pub fn load_lists(&mut self) -> Result<bool> {
        let stored = match load_playlists(&self.storage)? {
            Some(stored) => stored,
            None => return Ok(false),
        };

        self.unselect_current_list();
        self.playlists.clear();
        for list in stored {
            self.add_new_list(&list.name, list.songs);
        }
        info!("loaded {} playlists", self.playlists.len());
        Ok(true)
    }

    // ------------------------------------------------------------------
    // Notifications
    // ------------------------------------------------------------------

    fn notify_lists(&mut self) {
        if let Some(observer) = self.observer.as_mut() {
            observer.refresh_lists(&self.playlists);
        }
    }

    fn notify_toolbar(&mut self) {
        let toolbar = self.toolbar_state();
        if let Some(observer) = self.observer.as_mut() {
            observer.update_toolbar(&toolbar);
        }
    }

    fn notify_status(&mut self) {
        let status = self.status_text();
        if let Some(observer) = self.observer.as_mut() {
            observer.update_status_bar(&status);
        }
    }
}
