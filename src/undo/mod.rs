//! Undo/redo transaction stack
//!
//! `TransactionStack` keeps every command in chronological order together
//! with a cursor. Commands below the cursor are done and can be undone;
//! commands at or above it were undone and can be redone until a new
//! command is added, which discards them.

use log::debug;

use crate::error::{validate_index, EditError, Result};
use crate::models::{Playlist, Song};

/// A reversible playlist edit
///
/// Commands never hold the playlist itself. The stack hands the current
/// playlist to `perform`/`reverse`. Each variant keeps only what it needs
/// to put the playlist back.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Append a default song
    AddSong,
    /// Remove the song at `index`
    RemoveSong {
        index: usize,
        /// The song taken out by the last perform (for restoration)
        removed: Option<Song>,
    },
    /// Overwrite all fields of the song at `index`
    EditSong {
        index: usize,
        title: String,
        artist: String,
        you_tube_id: String,
        /// The song as it was before this command existed
        original: Song,
    },
    /// Move the song at `from` so it comes to rest at `to`
    MoveSong { from: usize, to: usize },
}

impl Command {
    pub fn add_song() -> Self {
        Command::AddSong
    }

    /// Remove the song at `index` of `playlist`
    pub fn remove_song(playlist: &Playlist, index: usize) -> Result<Self> {
        validate_index(index, playlist.len())?;
        Ok(Command::RemoveSong { index, removed: None })
    }

    /// Edit the song at `index` of `playlist`, snapshotting its current values
    ///
    /// Empty inputs are kept as given; they are replaced by the defaults
    /// when the edit is performed.
    pub fn edit_song(
        playlist: &Playlist,
        index: usize,
        title: &str,
        artist: &str,
        you_tube_id: &str,
    ) -> Result<Self> {
        let original = playlist
            .song_at(index)
            .cloned()
            .ok_or(EditError::InvalidIndex { index, len: playlist.len() })?;

        Ok(Command::EditSong {
            index,
            title: title.to_string(),
            artist: artist.to_string(),
            you_tube_id: you_tube_id.to_string(),
            original,
        })
    }

    /// Move a song within `playlist`; both indices must address existing songs
    pub fn move_song(playlist: &Playlist, from: usize, to: usize) -> Result<Self> {
        validate_index(from, playlist.len())?;
        validate_index(to, playlist.len())?;
        Ok(Command::MoveSong { from, to })
    }

    /// Apply this command to the playlist
    pub fn perform(&mut self, playlist: &mut Playlist) -> Result<()> {
        match self {
            Command::AddSong => {
                playlist.add_song(Song::default());
                Ok(())
            }
            Command::RemoveSong { index, removed } => {
                *removed = Some(playlist.remove_song_at(*index)?);
                Ok(())
            }
            Command::EditSong { index, title, artist, you_tube_id, .. } => {
                playlist.edit_song_at(*index, Song::sanitized(title, artist, you_tube_id))?;
                Ok(())
            }
            Command::MoveSong { from, to } => playlist.move_song(*from, *to),
        }
    }

    /// Undo this command (reverse the operation)
    pub fn reverse(&mut self, playlist: &mut Playlist) -> Result<()> {
        match self {
            Command::AddSong => {
                playlist.remove_last_song()?;
                Ok(())
            }
            Command::RemoveSong { index, removed } => {
                let song = removed
                    .clone()
                    .ok_or(EditError::InvalidIndex { index: *index, len: playlist.len() })?;
                playlist.insert_song_at(*index, song)?;
                *removed = None;
                Ok(())
            }
            Command::EditSong { index, original, .. } => {
                playlist.edit_song_at(*index, original.clone())?;
                Ok(())
            }
            Command::MoveSong { from, to } => playlist.move_song(*to, *from),
        }
    }

    /// Short label for log lines
    pub fn name(&self) -> &'static str {
        match self {
            Command::AddSong => "AddSong",
            Command::RemoveSong { .. } => "RemoveSong",
            Command::EditSong { .. } => "EditSong",
            Command::MoveSong { .. } => "MoveSong",
        }
    }
}

/// Linear undo/redo history with branch-cut on new commands
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TransactionStack {
    transactions: Vec<Command>,
    /// Number of done transactions; `transactions[cursor..]` can be redone
    cursor: usize,
}

impl TransactionStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Perform `command` and record it, discarding anything left to redo
    ///
    /// A command that fails to perform is not recorded, and the history is
    /// left as it was.
    pub fn add_command(&mut self, mut command: Command, playlist: &mut Playlist) -> Result<()> {
        command.perform(playlist)?;

        let discarded = self.transactions.len() - self.cursor;
        // Truncate any redo history when new command is added
        self.transactions.truncate(self.cursor);
        self.transactions.push(command);
        self.cursor = self.transactions.len();

        debug!(
            "added {} (history {}, discarded {} redo)",
            self.transactions[self.cursor - 1].name(),
            self.transactions.len(),
            discarded
        );
        Ok(())
    }

    /// Redo the next undone transaction; does nothing if there is none
    pub fn do_transaction(&mut self, playlist: &mut Playlist) -> Result<()> {
        if !self.has_transaction_to_redo() {
            return Ok(());
        }

        let command = &mut self.transactions[self.cursor];
        command.perform(playlist)?;
        debug!("redo {} at {}", command.name(), self.cursor);
        self.cursor += 1;
        Ok(())
    }

    /// Undo the last done transaction; does nothing if there is none
    pub fn undo_transaction(&mut self, playlist: &mut Playlist) -> Result<()> {
        if !self.has_transaction_to_undo() {
            return Ok(());
        }

        let command = &mut self.transactions[self.cursor - 1];
        command.reverse(playlist)?;
        self.cursor -= 1;
        debug!("undo {} at {}", command.name(), self.cursor);
        Ok(())
    }

    pub fn has_transaction_to_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn has_transaction_to_redo(&self) -> bool {
        self.cursor < self.transactions.len()
    }

    /// Drop all history without reversing anything
    pub fn clear_all_transactions(&mut self) {
        self.transactions.clear();
        self.cursor = 0;
    }

    /// Get the number of available undo steps
    pub fn undo_count(&self) -> usize {
        self.cursor
    }

    /// Get the number of available redo steps
    pub fn redo_count(&self) -> usize {
        self.transactions.len() - self.cursor
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}
