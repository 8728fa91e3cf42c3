//! Aggregate statistics over the book collection.
//!
//! # Responsibility
//! - Derive totals and per-genre/author/decade counts for chart views.
//!
//! # Invariants
//! - All counts come from one pass over the collection and are recomputed on
//!   every call; nothing is maintained incrementally.
//! - `percent_read` is `0.0` for an empty collection.
//! - Count maps only contain keys present in the collection.

use crate::model::book::{Book, Genre};
use serde::Serialize;
use std::collections::BTreeMap;

/// Snapshot of catalog aggregates.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct LibraryStats {
    pub total_count: usize,
    pub read_count: usize,
    pub percent_read: f64,
    pub genre_counts: BTreeMap<Genre, usize>,
    pub author_counts: BTreeMap<String, usize>,
    pub decade_counts: BTreeMap<i32, usize>,
}

impl LibraryStats {
    /// Books not yet read; the other half of the read-vs-unread chart.
    pub fn unread_count(&self) -> usize {
        self.total_count - self.read_count
    }
}

/// Computes aggregates for `books`.
pub fn compute_statistics(books: &[Book]) -> LibraryStats {
    let mut stats = LibraryStats {
        total_count: books.len(),
        ..LibraryStats::default()
    };

    for book in books {
        if book.read_status {
            stats.read_count += 1;
        }
        *stats.genre_counts.entry(book.genre).or_insert(0) += 1;
        *stats.author_counts.entry(book.author.clone()).or_insert(0) += 1;
        *stats
            .decade_counts
            .entry(decade_of(book.publication_year))
            .or_insert(0) += 1;
    }

    if stats.total_count > 0 {
        stats.percent_read = stats.read_count as f64 / stats.total_count as f64 * 100.0;
    }

    stats
}

/// Rounds a year down to the nearest multiple of ten.
pub fn decade_of(year: i32) -> i32 {
    year.div_euclid(10) * 10
}

/// Axis label for a decade bucket, e.g. `1960s`.
pub fn decade_label(decade: i32) -> String {
    format!("{decade}s")
}
