use shelf_core::{
    compute_statistics, decade_label, Book, CatalogService, Genre, LibraryStats,
    MemoryBookRepository,
};
use std::collections::BTreeMap;

#[test]
fn empty_collection_yields_zeroes() {
    let service = CatalogService::new(MemoryBookRepository::new());

    let stats = service.compute_statistics();

    assert_eq!(stats, LibraryStats::default());
    assert_eq!(stats.total_count, 0);
    assert_eq!(stats.read_count, 0);
    assert_eq!(stats.percent_read, 0.0);
    assert!(stats.genre_counts.is_empty());
    assert!(stats.author_counts.is_empty());
    assert!(stats.decade_counts.is_empty());
}

#[test]
fn two_book_example() {
    let stats = compute_statistics(&[
        Book::new("Dune", "Herbert", 1965, Genre::Science, true),
        Book::new("Emma", "Austen", 1815, Genre::Romance, false),
    ]);

    assert_eq!(stats.total_count, 2);
    assert_eq!(stats.read_count, 1);
    assert_eq!(stats.unread_count(), 1);
    assert_eq!(stats.percent_read, 50.0);
    assert_eq!(stats.decade_counts, BTreeMap::from([(1960, 1), (1810, 1)]));
    assert_eq!(
        stats.genre_counts,
        BTreeMap::from([(Genre::Science, 1), (Genre::Romance, 1)])
    );
    assert_eq!(
        stats.author_counts,
        BTreeMap::from([("Herbert".to_string(), 1), ("Austen".to_string(), 1)])
    );
}

#[test]
fn counts_group_repeated_keys() {
    let stats = compute_statistics(&[
        Book::new("Foundation", "Asimov", 1951, Genre::Science, true),
        Book::new("I, Robot", "Asimov", 1950, Genre::Science, false),
        Book::new("The Gods Themselves", "Asimov", 1972, Genre::Fiction, false),
    ]);

    assert_eq!(stats.author_counts.get("Asimov"), Some(&3));
    assert_eq!(stats.genre_counts.get(&Genre::Science), Some(&2));
    assert_eq!(stats.genre_counts.get(&Genre::Fiction), Some(&1));
    assert_eq!(stats.decade_counts, BTreeMap::from([(1950, 2), (1970, 1)]));
    assert!((stats.percent_read - 100.0 / 3.0).abs() < 1e-9);
}

#[test]
fn statistics_follow_mutations() {
    let mut service = CatalogService::new(MemoryBookRepository::new());
    service.add("Dune", "Herbert", 1965, Genre::Science, false).unwrap();
    assert_eq!(service.compute_statistics().read_count, 0);

    service.toggle_read(0).unwrap();
    let stats = service.compute_statistics();
    assert_eq!(stats.read_count, 1);
    assert_eq!(stats.percent_read, 100.0);

    service.remove(0).unwrap();
    assert_eq!(service.compute_statistics(), LibraryStats::default());
}

#[test]
fn stats_serialize_with_display_keys() {
    let stats = compute_statistics(&[Book::new("Cosmos", "Sagan", 1980, Genre::NonFiction, true)]);

    let json = serde_json::to_value(&stats).unwrap();
    assert_eq!(json["genre_counts"]["Non-Fiction"], 1);
    assert_eq!(json["decade_counts"]["1980"], 1);
    assert_eq!(decade_label(1980), "1980s");
}
