use shelf_core::{Book, CatalogService, Genre, MemoryBookRepository, SearchField, ServiceError};

#[test]
fn search_genre_is_case_insensitive() {
    let service = seeded_service();

    let hits = service.search("fic", SearchField::Genre);
    let titles: Vec<&str> = hits.iter().map(|book| book.title.as_str()).collect();

    assert_eq!(titles, ["Hyperion", "Cosmos"]);
}

#[test]
fn search_title_matches_substring_in_collection_order() {
    let service = seeded_service();

    let hits = service.search("ON", SearchField::Title);
    let titles: Vec<&str> = hits.iter().map(|book| book.title.as_str()).collect();

    assert_eq!(titles, ["Hyperion", "Foundation"]);
}

#[test]
fn search_author_returns_full_records() {
    let service = seeded_service();

    let hits = service.search("austen", SearchField::Author);

    assert_eq!(
        hits,
        vec![Book::new("Emma", "Austen", 1815, Genre::Romance, false)]
    );
}

#[test]
fn search_blank_term_returns_nothing() {
    let service = seeded_service();

    assert!(service.search("", SearchField::Title).is_empty());
    assert!(service.search("   ", SearchField::Author).is_empty());
}

#[test]
fn search_keeps_surrounding_whitespace_in_term() {
    let service = CatalogService::open(MemoryBookRepository::with_books(vec![
        Book::new("Theory", "Kuhn", 1965, Genre::Science, true),
        Book::new("The Hobbit", "Tolkien", 1937, Genre::Fantasy, false),
    ]))
    .unwrap();

    let hits = service.search("the ", SearchField::Title);

    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title, "The Hobbit");
}

#[test]
fn search_without_matches_returns_empty() {
    let service = seeded_service();

    assert!(service.search("tolkien", SearchField::Author).is_empty());
}

#[test]
fn search_by_name_accepts_known_fields_case_insensitively() {
    let service = seeded_service();

    let hits = service.search_by_name("sagan", "Author").unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title, "Cosmos");
}

#[test]
fn search_by_name_rejects_unknown_field() {
    let service = seeded_service();

    let err = service.search_by_name("1965", "publication_year").unwrap_err();
    match err {
        ServiceError::InvalidArgument(message) => assert!(message.contains("publication_year")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn search_does_not_mutate_collection() {
    let service = seeded_service();
    let before = service.books().to_vec();

    let _ = service.search("e", SearchField::Title);

    assert_eq!(service.books(), before.as_slice());
}

fn seeded_service() -> CatalogService<MemoryBookRepository> {
    CatalogService::open(MemoryBookRepository::with_books(vec![
        Book::new("Dune", "Herbert", 1965, Genre::Science, true),
        Book::new("Emma", "Austen", 1815, Genre::Romance, false),
        Book::new("Hyperion", "Simmons", 1989, Genre::Fiction, false),
        Book::new("Foundation", "Asimov", 1951, Genre::Science, true),
        Book::new("Cosmos", "Sagan", 1980, Genre::NonFiction, true),
    ]))
    .unwrap()
}
