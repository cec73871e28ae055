//! WASM build test
//!
//! Exercises the exported API in a browser, where localStorage exists.

#![cfg(target_arch = "wasm32")]

use playlister_wasm::api::*;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn snapshot() -> SessionSnapshot {
    serde_wasm_bindgen::from_value(get_snapshot().unwrap()).unwrap()
}

#[wasm_bindgen_test]
fn test_add_song_undo_redo() {
    init_session().unwrap();
    create_new_list().unwrap();

    add_song().unwrap();
    assert!(can_undo().unwrap());
    assert_eq!(snapshot().current_list.unwrap().songs.len(), 1);

    undo().unwrap();
    assert!(!can_undo().unwrap());
    assert!(can_redo().unwrap());
    assert!(snapshot().current_list.unwrap().songs.is_empty());

    redo().unwrap();
    assert_eq!(snapshot().current_list.unwrap().songs.len(), 1);
}

#[wasm_bindgen_test]
fn test_bad_index_is_reported() {
    init_session().unwrap();
    create_new_list().unwrap();
    assert!(remove_song(3).is_err());
}
