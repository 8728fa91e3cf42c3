//! Book domain model.
//!
//! # Responsibility
//! - Define the canonical book record persisted in the catalog file.
//! - Own the fixed genre vocabulary and record-level validation.
//!
//! # Invariants
//! - The serialized record has exactly the fields `title`, `author`,
//!   `publication_year`, `genre` and `read_status`.
//! - `genre` is serialized by its display name (`"Non-Fiction"`, ...).
//! - A valid record has non-blank title/author and a year inside
//!   `[MIN_PUBLICATION_YEAR, current_year]`.

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Lowest publication year accepted by validation.
pub const MIN_PUBLICATION_YEAR: i32 = 1000;

/// Fixed genre vocabulary offered by input widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Genre {
    Fiction,
    #[serde(rename = "Non-Fiction")]
    NonFiction,
    Science,
    Tech,
    Fantasy,
    Romance,
    Poetry,
    Religious,
    Art,
    Other,
}

impl Genre {
    /// All genres in selector order.
    pub const ALL: [Genre; 10] = [
        Genre::Fiction,
        Genre::NonFiction,
        Genre::Science,
        Genre::Tech,
        Genre::Fantasy,
        Genre::Romance,
        Genre::Poetry,
        Genre::Religious,
        Genre::Art,
        Genre::Other,
    ];

    /// Display name, identical to the persisted value.
    pub fn as_str(self) -> &'static str {
        match self {
            Genre::Fiction => "Fiction",
            Genre::NonFiction => "Non-Fiction",
            Genre::Science => "Science",
            Genre::Tech => "Tech",
            Genre::Fantasy => "Fantasy",
            Genre::Romance => "Romance",
            Genre::Poetry => "Poetry",
            Genre::Religious => "Religious",
            Genre::Art => "Art",
            Genre::Other => "Other",
        }
    }
}

impl Display for Genre {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Genre {
    type Err = BookValidationError;

    /// Parses a display name case-insensitively.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        Genre::ALL
            .into_iter()
            .find(|genre| genre.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| BookValidationError::UnknownGenre(trimmed.to_string()))
    }
}

/// Validation failures for book records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookValidationError {
    EmptyTitle,
    EmptyAuthor,
    YearOutOfRange { year: i32, min: i32, max: i32 },
    UnknownGenre(String),
}

impl Display for BookValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "title cannot be empty"),
            Self::EmptyAuthor => write!(f, "author cannot be empty"),
            Self::YearOutOfRange { year, min, max } => {
                write!(f, "publication_year ({year}) must be within {min}..={max}")
            }
            Self::UnknownGenre(value) => write!(f, "unknown genre `{value}`"),
        }
    }
}

impl Error for BookValidationError {}

/// One catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub publication_year: i32,
    pub genre: Genre,
    pub read_status: bool,
}

impl Book {
    /// Builds a record without validating it.
    ///
    /// Use [`Book::validate`] before persisting.
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        publication_year: i32,
        genre: Genre,
        read_status: bool,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            publication_year,
            genre,
            read_status,
        }
    }

    /// Checks record invariants against the local current year.
    pub fn validate(&self) -> Result<(), BookValidationError> {
        self.validate_with_max_year(current_year())
    }

    /// Checks record invariants with an explicit upper year bound.
    pub fn validate_with_max_year(&self, max_year: i32) -> Result<(), BookValidationError> {
        if self.title.trim().is_empty() {
            return Err(BookValidationError::EmptyTitle);
        }
        if self.author.trim().is_empty() {
            return Err(BookValidationError::EmptyAuthor);
        }
        if self.publication_year < MIN_PUBLICATION_YEAR || self.publication_year > max_year {
            return Err(BookValidationError::YearOutOfRange {
                year: self.publication_year,
                min: MIN_PUBLICATION_YEAR,
                max: max_year,
            });
        }
        Ok(())
    }

    /// Flips read status and returns the new value.
    pub fn toggle_read(&mut self) -> bool {
        self.read_status = !self.read_status;
        self.read_status
    }
}

/// Current calendar year from the local clock.
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}
