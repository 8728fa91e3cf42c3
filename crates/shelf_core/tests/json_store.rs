use shelf_core::{Book, BookRepository, Genre, JsonFileBookRepository, RepoError};
use std::fs;

#[test]
fn load_missing_file_returns_none() {
    let dir = tempfile::tempdir().unwrap();
    let repo = JsonFileBookRepository::new(dir.path().join("library.json"));

    assert!(repo.load().unwrap().is_none());
}

#[test]
fn save_then_load_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let repo = JsonFileBookRepository::new(dir.path().join("library.json"));
    let books = sample_books();

    repo.save(&books).unwrap();
    let loaded = repo.load().unwrap().unwrap();

    assert_eq!(loaded, books);
}

#[test]
fn save_is_byte_identical_when_repeated() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("library.json");
    let repo = JsonFileBookRepository::new(&path);
    let books = sample_books();

    repo.save(&books).unwrap();
    let first = fs::read(&path).unwrap();
    repo.save(&books).unwrap();
    let second = fs::read(&path).unwrap();

    assert_eq!(first, second);
}

#[test]
fn save_overwrites_previous_content() {
    let dir = tempfile::tempdir().unwrap();
    let repo = JsonFileBookRepository::new(dir.path().join("library.json"));

    repo.save(&sample_books()).unwrap();
    repo.save(&[]).unwrap();

    assert_eq!(repo.load().unwrap(), Some(Vec::new()));
}

#[test]
fn save_creates_missing_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("shelf").join("library.json");
    let repo = JsonFileBookRepository::new(&path);

    repo.save(&sample_books()).unwrap();

    assert!(path.exists());
}

#[test]
fn load_rejects_malformed_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("library.json");
    fs::write(&path, "{\"title\": \"not an array\"}").unwrap();

    let err = JsonFileBookRepository::new(&path).load().unwrap_err();
    assert!(matches!(err, RepoError::Parse { .. }));
    assert!(err.to_string().contains("malformed"));
}

#[test]
fn load_rejects_invalid_record() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("library.json");
    fs::write(
        &path,
        r#"[{"title":"Dune","author":"","publication_year":1965,"genre":"Science","read_status":true}]"#,
    )
    .unwrap();

    let err = JsonFileBookRepository::new(&path).load().unwrap_err();
    match err {
        RepoError::InvalidData(message) => assert!(message.contains("record 0")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn save_into_directory_path_reports_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let repo = JsonFileBookRepository::new(dir.path());

    let err = repo.save(&sample_books()).unwrap_err();
    assert!(matches!(err, RepoError::Io { .. }));
}

fn sample_books() -> Vec<Book> {
    vec![
        Book::new("Dune", "Herbert", 1965, Genre::Science, true),
        Book::new("Emma", "Austen", 1815, Genre::Romance, false),
    ]
}
