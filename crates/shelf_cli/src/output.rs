//! Result printing for the `shelf` binary.
//!
//! # Responsibility
//! - Emit either a `{ ok, data }` JSON envelope or tab-separated text rows.
//! - Render the statistics view as plain-text bar charts.

use serde::Serialize;
use shelf_core::{decade_label, Book, LibraryStats};

const BAR_WIDTH: usize = 30;

#[derive(Serialize)]
struct JsonOut<T: Serialize> {
    ok: bool,
    data: T,
}

#[derive(Serialize)]
pub struct IndexedBook<'a> {
    pub index: usize,
    #[serde(flatten)]
    pub book: &'a Book,
}

pub fn print_out<T: Serialize>(
    json: bool,
    data: &[T],
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        for d in data {
            println!("{}", row(d));
        }
    }
    Ok(())
}

pub fn print_one<T: Serialize>(
    json: bool,
    data: T,
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        println!("{}", row(&data));
    }
    Ok(())
}

pub fn book_row(index: usize, book: &Book) -> String {
    format!(
        "{index}\t{}\t{}\t{}\t{}\t{}",
        book.title,
        book.author,
        book.publication_year,
        book.genre,
        read_badge(book.read_status)
    )
}

pub fn read_badge(read_status: bool) -> &'static str {
    if read_status {
        "Read"
    } else {
        "Unread"
    }
}

/// Plain-text rendering of the statistics view.
pub fn stats_report(stats: &LibraryStats) -> String {
    if stats.total_count == 0 {
        return "No books to analyze.".to_string();
    }

    let mut lines = vec![
        format!("Total Books: {}", stats.total_count),
        format!("Books Read: {}", stats.read_count),
        format!("% Read: {:.1}%", stats.percent_read),
        String::new(),
        "Read vs Unread".to_string(),
        bar_row("Read", stats.read_count, stats.total_count),
        bar_row("Unread", stats.unread_count(), stats.total_count),
    ];

    lines.push(String::new());
    lines.push("Genres".to_string());
    for (genre, count) in &stats.genre_counts {
        lines.push(bar_row(genre.as_str(), *count, stats.total_count));
    }

    lines.push(String::new());
    lines.push("Decades".to_string());
    for (decade, count) in &stats.decade_counts {
        lines.push(bar_row(&decade_label(*decade), *count, stats.total_count));
    }

    lines.join("\n")
}

fn bar_row(label: &str, count: usize, total: usize) -> String {
    let filled = if total == 0 {
        0
    } else {
        count * BAR_WIDTH / total
    };
    format!(
        "{label:<12} {:<width$} {count}",
        "#".repeat(filled),
        width = BAR_WIDTH
    )
}
