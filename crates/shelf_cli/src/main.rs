//! Command-line front end for the Shelf book catalog.
//!
//! # Responsibility
//! - Collect user input, call `CatalogService`, and print results.
//! - Keep every catalog rule inside `shelf_core`.

mod cli;
mod output;

use clap::Parser;
use cli::{Cli, Commands};
use log::info;
use output::{book_row, print_one, print_out, read_badge, stats_report, IndexedBook};
use shelf_core::{CatalogConfig, CatalogService, Feedback, Genre};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = CatalogConfig::default().with_data_path(&cli.data);
    if let Some(level) = &cli.log_level {
        config = config.with_log_level(level);
    }
    if let Some(dir) = &cli.log_dir {
        config = config.with_log_dir(dir);
    }
    config.init_logging().map_err(anyhow::Error::msg)?;

    let mut service = CatalogService::open(config.repository())?;
    info!(
        "event=cli_command module=cli status=start command={} count={}",
        cli.command.name(),
        service.len()
    );

    match cli.command {
        Commands::List => {
            if service.is_empty() && !cli.json {
                println!("Your library is empty. Add some books!");
                return Ok(());
            }
            let rows: Vec<IndexedBook<'_>> = service
                .books()
                .iter()
                .enumerate()
                .map(|(index, book)| IndexedBook { index, book })
                .collect();
            print_out(cli.json, &rows, |row| book_row(row.index, row.book))?;
        }
        Commands::Add {
            title,
            author,
            year,
            genre,
            read,
        } => {
            let index = service.add(title, author, year, genre, read)?;
            let message = feedback_message(service.take_feedback());
            let book = IndexedBook {
                index,
                book: &service.books()[index],
            };
            print_one(cli.json, book, |row| {
                format!("{message}\n{}", book_row(row.index, row.book))
            })?;
        }
        Commands::Remove { index } => match service.remove(index)? {
            Some(book) => {
                let message = feedback_message(service.take_feedback());
                print_one(cli.json, IndexedBook { index, book: &book }, |row| {
                    format!("{message}\n{}", book_row(row.index, row.book))
                })?;
            }
            None => print_one(cli.json, serde_json::Value::Null, |_| {
                format!("No book at index {index}; nothing removed.")
            })?,
        },
        Commands::Toggle { index } => {
            let read_status = service.toggle_read(index)?;
            print_one(
                cli.json,
                serde_json::json!({ "index": index, "read_status": read_status }),
                |_| format!("Book {index} marked as {}.", read_badge(read_status)),
            )?;
        }
        Commands::Search { term, by } => {
            let hits = service.search(&term, by);
            if hits.is_empty() && !cli.json {
                println!("No results found.");
                return Ok(());
            }
            print_out(cli.json, &hits, |book| {
                format!(
                    "{}\t{}\t{}\t{}\t{}",
                    book.title,
                    book.author,
                    book.publication_year,
                    book.genre,
                    read_badge(book.read_status)
                )
            })?;
        }
        Commands::Stats => {
            let stats = service.compute_statistics();
            print_one(cli.json, &stats, |stats| stats_report(stats))?;
        }
        Commands::Genres => {
            print_out(cli.json, &Genre::ALL, |genre| genre.to_string())?;
        }
    }

    Ok(())
}

fn feedback_message(feedback: Option<Feedback>) -> &'static str {
    match feedback {
        Some(Feedback::Added) => "Book added successfully!",
        Some(Feedback::Removed) => "Book removed.",
        None => "",
    }
}
