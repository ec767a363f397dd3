use notebook::api::{NoteUpdate, NotebookApi, NotebookPaths};
use notebook::index::Position;
use notebook::store::fs::FileStore;
use notebook::store::DataStore;
use std::fs;
use tempfile::TempDir;

fn open(dir: &TempDir) -> NotebookApi<FileStore> {
    let notes_file = dir.path().join("notes.json");
    let paths = NotebookPaths {
        config_dir: dir.path().join("config"),
        notes_file: notes_file.clone(),
    };
    NotebookApi::new(FileStore::new(notes_file), paths)
}

#[test]
fn survives_a_restart() {
    let dir = TempDir::new().unwrap();
    {
        let mut api = open(&dir);
        api.add_note("Groceries", "milk eggs", "home").unwrap();
        api.add_note("Report", "quarterly numbers", "work, q3, work")
            .unwrap();
        api.edit_note(Position::new(1), NoteUpdate::from_raw("", "", "home, weekly"))
            .unwrap();
    }

    let reopened = open(&dir);
    let notes = reopened.notes();
    assert_eq!(notes.len(), 2);
    assert_eq!(notes.get(0).unwrap().tags, vec!["home", "weekly"]);
    assert_eq!(notes.get(1).unwrap().tags, vec!["work", "q3", "work"]);
}

#[test]
fn every_mutation_is_on_disk() {
    let dir = TempDir::new().unwrap();
    let mut api = open(&dir);
    let on_disk = || FileStore::new(dir.path().join("notes.json")).load();

    api.add_note("One", "", "").unwrap();
    assert_eq!(&on_disk(), api.notes());

    api.add_note("Two", "", "").unwrap();
    api.delete_note(Position::new(1), |_| true).unwrap();
    assert_eq!(&on_disk(), api.notes());
    assert_eq!(on_disk().get(0).unwrap().title, "Two");
}

#[test]
fn reads_records_without_tags_or_date() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("notes.json"),
        r#"[{"title": "Legacy", "content": "no extras"}]"#,
    )
    .unwrap();

    let api = open(&dir);
    let note = api.notes().get(0).unwrap();
    assert_eq!(note.title, "Legacy");
    assert!(note.tags.is_empty());
    assert_eq!(note.date, "");
}
