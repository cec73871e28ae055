//! Playlist document
//!
//! The playlist is the mutable aggregate that undo/redo commands act on.
//! All song access is by index, and every primitive checks its indices
//! before touching the song list.

use serde::{Deserialize, Serialize};

use crate::error::{validate_index, EditError, Result};
use crate::models::song::Song;

/// Name given to new playlists and to renames with an empty name
pub const DEFAULT_LIST_NAME: &str = "Untitled";

/// An identified, ordered collection of songs
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Playlist {
    pub id: u32,
    pub name: String,
    pub songs: Vec<Song>,
}

impl Playlist {
    /// Create an empty playlist with the default name
    pub fn new(id: u32) -> Self {
        Self {
            id,
            name: DEFAULT_LIST_NAME.to_string(),
            songs: Vec::new(),
        }
    }

    pub fn with_songs(id: u32, name: impl Into<String>, songs: Vec<Song>) -> Self {
        Self {
            id,
            name: name.into(),
            songs,
        }
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    pub fn song_at(&self, index: usize) -> Option<&Song> {
        self.songs.get(index)
    }

    /// Set the name, falling back to the default for an empty string
    pub fn set_name(&mut self, name: &str) {
        self.name = if name.is_empty() {
            DEFAULT_LIST_NAME.to_string()
        } else {
            name.to_string()
        };
    }

    /// Append a song to the end of the list
    pub fn add_song(&mut self, song: Song) {
        self.songs.push(song);
    }

    /// Insert a song so that it ends up at `index` (`index == len` appends)
    pub fn insert_song_at(&mut self, index: usize, song: Song) -> Result<()> {
        if index > self.songs.len() {
            return Err(EditError::InvalidIndex {
                index,
                len: self.songs.len(),
            });
        }
        self.songs.insert(index, song);
        Ok(())
    }

    /// Remove and return the song at `index`
    pub fn remove_song_at(&mut self, index: usize) -> Result<Song> {
        validate_index(index, self.songs.len())?;
        Ok(self.songs.remove(index))
    }

    /// Remove and return the last song
    pub fn remove_last_song(&mut self) -> Result<Song> {
        self.songs
            .pop()
            .ok_or(EditError::InvalidIndex { index: 0, len: 0 })
    }

    /// Replace the song at `index`, returning the previous value
    pub fn edit_song_at(&mut self, index: usize, song: Song) -> Result<Song> {
        validate_index(index, self.songs.len())?;
        Ok(std::mem::replace(&mut self.songs[index], song))
    }

    /// Move the song at `from` so it comes to rest at `to`
    ///
    /// `to` is an index into the list after the song has been taken out, so
    /// both indices must address existing songs.
    pub fn move_song(&mut self, from: usize, to: usize) -> Result<()> {
        validate_index(from, self.songs.len())?;
        validate_index(to, self.songs.len())?;

        let song = self.songs.remove(from);
        self.songs.insert(to, song);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(list: &Playlist) -> Vec<&str> {
        list.songs.iter().map(|s| s.title.as_str()).collect()
    }

    fn create_test_playlist() -> Playlist {
        Playlist::with_songs(
            0,
            "Road Trip",
            vec![
                Song::new("A", "a", "1"),
                Song::new("B", "b", "2"),
                Song::new("C", "c", "3"),
            ],
        )
    }

    #[test]
    fn test_new_playlist_is_untitled() {
        let list = Playlist::new(4);
        assert_eq!(list.id, 4);
        assert_eq!(list.name, DEFAULT_LIST_NAME);
        assert!(list.is_empty());
    }

    #[test]
    fn test_set_name_empty_falls_back() {
        let mut list = create_test_playlist();
        list.set_name("");
        assert_eq!(list.name, "Untitled");
        list.set_name("Gym");
        assert_eq!(list.name, "Gym");
    }

    #[test]
    fn test_move_song_forward() {
        let mut list = create_test_playlist();
        list.move_song(0, 2).unwrap();
        assert_eq!(titles(&list), vec!["B", "C", "A"]);
    }

    #[test]
    fn test_move_song_backward() {
        let mut list = create_test_playlist();
        list.move_song(2, 0).unwrap();
        assert_eq!(titles(&list), vec!["C", "A", "B"]);
    }

    #[test]
    fn test_move_song_rejects_out_of_range() {
        let mut list = create_test_playlist();
        assert!(list.move_song(0, 3).is_err());
        assert!(list.move_song(3, 0).is_err());
        assert_eq!(titles(&list), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_remove_and_insert() {
        let mut list = create_test_playlist();
        let removed = list.remove_song_at(1).unwrap();
        assert_eq!(removed.title, "B");
        assert_eq!(titles(&list), vec!["A", "C"]);

        list.insert_song_at(1, removed).unwrap();
        assert_eq!(titles(&list), vec!["A", "B", "C"]);

        assert!(list.insert_song_at(5, Song::default()).is_err());
        list.insert_song_at(3, Song::default()).unwrap();
        assert_eq!(list.len(), 4);
    }

    #[test]
    fn test_remove_last_song_on_empty() {
        let mut list = Playlist::new(0);
        assert!(list.remove_last_song().is_err());
    }

    #[test]
    fn test_edit_song_returns_previous() {
        let mut list = create_test_playlist();
        let old = list.edit_song_at(0, Song::new("X", "x", "9")).unwrap();
        assert_eq!(old.title, "A");
        assert_eq!(list.song_at(0).unwrap().title, "X");
        assert!(list.edit_song_at(3, Song::default()).is_err());
    }
}
