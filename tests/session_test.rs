// End-to-end editing session: playlists, song edits, undo/redo and persistence

use playlister_wasm::storage::{load_playlists, STORAGE_KEY};
use playlister_wasm::{EditError, MemoryStorage, Session, Song, Storage};

fn titles(session: &Session<MemoryStorage>) -> Vec<String> {
    session
        .current_list()
        .expect("a playlist should be open")
        .songs
        .iter()
        .map(|s| s.title.clone())
        .collect()
}

#[test]
fn test_full_editing_workflow() {
    let mut session = Session::new(MemoryStorage::new());
    session.create_new_list().unwrap();

    session.add_song().unwrap();
    session.add_song().unwrap();
    session.add_song().unwrap();
    session.edit_song(0, "First", "Band", "aaa").unwrap();
    session.edit_song(1, "Second", "Band", "bbb").unwrap();
    session.edit_song(2, "Third", "Band", "ccc").unwrap();
    assert_eq!(titles(&session), vec!["First", "Second", "Third"]);

    session.move_song(0, 2).unwrap();
    assert_eq!(titles(&session), vec!["Second", "Third", "First"]);

    session.remove_song(1).unwrap();
    assert_eq!(titles(&session), vec!["Second", "First"]);

    session.undo().unwrap();
    session.undo().unwrap();
    assert_eq!(titles(&session), vec!["First", "Second", "Third"]);

    session.redo().unwrap();
    assert_eq!(titles(&session), vec!["Second", "Third", "First"]);

    // New edit discards the undone remove
    session.edit_song(0, "", "", "").unwrap();
    assert!(!session.toolbar_state().redo);
    session.redo().unwrap();
    assert_eq!(titles(&session), vec!["Untitled", "Third", "First"]);
}

#[test]
fn test_saved_state_survives_reload() {
    let mut session = Session::new(MemoryStorage::new());
    session.create_new_list().unwrap();
    let id = session.current_list().unwrap().id;
    session.rename_list(id, "Workout").unwrap();
    session.add_song().unwrap();
    session.edit_song(0, "Eye of the Tiger", "Survivor", "btPJPFnesV4").unwrap();

    let stored = session
        .storage()
        .get_item(STORAGE_KEY)
        .unwrap()
        .expect("playlists should be saved");

    let mut storage = MemoryStorage::new();
    storage.set_item(STORAGE_KEY, &stored).unwrap();

    let mut reloaded = Session::new(storage);
    assert!(reloaded.load_lists().unwrap());
    assert!(!reloaded.has_current_list());

    let list = &reloaded.playlists()[0];
    assert_eq!(list.name, "Workout");
    assert_eq!(list.songs, vec![Song::new("Eye of the Tiger", "Survivor", "btPJPFnesV4")]);

    // History is not persisted
    let id = list.id;
    reloaded.load_list(id).unwrap();
    assert!(!reloaded.toolbar_state().undo);
}

#[test]
fn test_undo_is_saved() {
    let mut session = Session::new(MemoryStorage::new());
    session.create_new_list().unwrap();
    session.add_song().unwrap();
    session.undo().unwrap();

    let stored = load_playlists(session.storage()).unwrap().unwrap();
    assert!(stored[0].songs.is_empty());
}

#[test]
fn test_invalid_indices_fail_fast() {
    let mut session = Session::new(MemoryStorage::new());
    session.create_new_list().unwrap();
    session.add_song().unwrap();

    assert!(matches!(
        session.remove_song(1),
        Err(EditError::InvalidIndex { index: 1, len: 1 })
    ));
    assert!(session.edit_song(4, "a", "b", "c").is_err());
    assert!(session.move_song(0, 1).is_err());

    // Rejected commands never reach the history
    assert_eq!(session.transactions().len(), 1);
}

#[test]
fn test_closing_list_drops_history() {
    let mut session = Session::new(MemoryStorage::new());
    let id = session.create_new_list().unwrap();
    session.add_song().unwrap();

    session.unselect_current_list();
    assert!(session.transactions().is_empty());
    assert!(matches!(session.add_song(), Err(EditError::NoListSelected)));

    session.load_list(id).unwrap();
    session.undo().unwrap();
    assert_eq!(session.current_list().unwrap().len(), 1);
}
