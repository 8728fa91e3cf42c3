//! Catalog use-case service.
//!
//! # Responsibility
//! - Own the in-memory book collection for one logical session.
//! - Provide add/remove/toggle/search/statistics entry points.
//! - Flush the full collection through the repository after each mutation.
//!
//! # Invariants
//! - Write-through: a mutating call returns only after `save` succeeded or
//!   its error was returned. On save failure the in-memory change is kept
//!   and memory and disk diverge until the next successful save.
//! - Records are addressed by position; indices shift after add/remove.
//! - `remove` ignores out-of-range indices; `toggle_read` reports them.

use crate::model::book::{Book, BookValidationError, Genre};
use crate::repo::book_repo::{BookRepository, RepoError};
use crate::stats::{compute_statistics, LibraryStats};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Service error for catalog use-cases.
#[derive(Debug)]
pub enum ServiceError {
    /// Input record violates model invariants.
    Validation(BookValidationError),
    /// Persistence-layer failure.
    Repo(RepoError),
    /// Index outside `[0, len)`.
    NotFound { index: usize, len: usize },
    /// Caller passed an unsupported argument value.
    InvalidArgument(String),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
            Self::NotFound { index, len } => {
                write!(f, "no book at index {index} (collection has {len})")
            }
            Self::InvalidArgument(message) => write!(f, "invalid argument: {message}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<BookValidationError> for ServiceError {
    fn from(value: BookValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Record field searched by [`CatalogService::search`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Title,
    Author,
    Genre,
}

impl SearchField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Author => "author",
            Self::Genre => "genre",
        }
    }

    fn value_of(self, book: &Book) -> &str {
        match self {
            Self::Title => &book.title,
            Self::Author => &book.author,
            Self::Genre => book.genre.as_str(),
        }
    }
}

impl FromStr for SearchField {
    type Err = ServiceError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "title" => Ok(Self::Title),
            "author" => Ok(Self::Author),
            "genre" => Ok(Self::Genre),
            other => Err(ServiceError::InvalidArgument(format!(
                "unsupported search field `{other}`; expected title|author|genre"
            ))),
        }
    }
}

/// One-shot feedback for the presentation layer after a mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    Added,
    Removed,
}

/// Session-scoped catalog over a repository.
pub struct CatalogService<R: BookRepository> {
    repo: R,
    books: Vec<Book>,
    feedback: Option<Feedback>,
}

impl<R: BookRepository> CatalogService<R> {
    /// Creates a service with an empty collection, without loading.
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            books: Vec::new(),
            feedback: None,
        }
    }

    /// Creates a service and loads the persisted collection.
    ///
    /// # Errors
    /// - Returns `ServiceError::Repo` when the backing data is unreadable,
    ///   malformed or invalid.
    pub fn open(repo: R) -> ServiceResult<Self> {
        let mut service = Self::new(repo);
        service.load()?;
        Ok(service)
    }

    /// Replaces the in-memory collection with the persisted one.
    ///
    /// Keeps the current collection when nothing has been persisted yet.
    pub fn load(&mut self) -> ServiceResult<()> {
        if let Some(books) = self.repo.load()? {
            self.books = books;
        }
        Ok(())
    }

    /// Writes the whole collection through the repository.
    pub fn save(&self) -> ServiceResult<()> {
        self.repo.save(&self.books)?;
        Ok(())
    }

    /// Appends a validated book and persists. Returns its index.
    pub fn add(
        &mut self,
        title: impl Into<String>,
        author: impl Into<String>,
        publication_year: i32,
        genre: Genre,
        read_status: bool,
    ) -> ServiceResult<usize> {
        self.add_book(Book::new(
            title,
            author,
            publication_year,
            genre,
            read_status,
        ))
    }

    /// Appends an already built record. See [`CatalogService::add`].
    pub fn add_book(&mut self, book: Book) -> ServiceResult<usize> {
        book.validate()?;
        self.books.push(book);
        let index = self.books.len() - 1;
        self.save()?;
        self.feedback = Some(Feedback::Added);
        info!(
            "event=book_add module=service status=ok index={} count={}",
            index,
            self.books.len()
        );
        Ok(index)
    }

    /// Removes the book at `index` and persists.
    ///
    /// Out-of-range indices are a silent no-op returning `Ok(None)`.
    pub fn remove(&mut self, index: usize) -> ServiceResult<Option<Book>> {
        if index >= self.books.len() {
            warn!(
                "event=book_remove module=service status=skipped index={} count={}",
                index,
                self.books.len()
            );
            return Ok(None);
        }

        let removed = self.books.remove(index);
        self.save()?;
        self.feedback = Some(Feedback::Removed);
        info!(
            "event=book_remove module=service status=ok index={} count={}",
            index,
            self.books.len()
        );
        Ok(Some(removed))
    }

    /// Flips read status of the book at `index`, persists, and returns the
    /// new status.
    pub fn toggle_read(&mut self, index: usize) -> ServiceResult<bool> {
        let len = self.books.len();
        let book = self
            .books
            .get_mut(index)
            .ok_or(ServiceError::NotFound { index, len })?;
        let read_status = book.toggle_read();
        self.save()?;
        info!(
            "event=book_toggle_read module=service status=ok index={} read_status={}",
            index, read_status
        );
        Ok(read_status)
    }

    /// Case-insensitive substring search over one field.
    ///
    /// Blank terms return no results. Other terms match as given, including
    /// surrounding whitespace. Matches keep collection order.
    pub fn search(&self, term: &str, field: SearchField) -> Vec<Book> {
        if term.trim().is_empty() {
            return Vec::new();
        }
        let needle = term.to_lowercase();

        self.books
            .iter()
            .filter(|book| field.value_of(book).to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    /// Like [`CatalogService::search`] with the field given by name.
    ///
    /// # Errors
    /// - `ServiceError::InvalidArgument` when `field` is not one of
    ///   `title|author|genre` (case-insensitive).
    pub fn search_by_name(&self, term: &str, field: &str) -> ServiceResult<Vec<Book>> {
        let field = field.parse::<SearchField>()?;
        Ok(self.search(term, field))
    }

    /// Fresh aggregates over the current collection.
    pub fn compute_statistics(&self) -> LibraryStats {
        compute_statistics(&self.books)
    }

    /// Snapshot of the collection for rendering.
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn get(&self, index: usize) -> Option<&Book> {
        self.books.get(index)
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Returns and clears the pending feedback flag.
    pub fn take_feedback(&mut self) -> Option<Feedback> {
        self.feedback.take()
    }

    /// Underlying repository.
    pub fn repository(&self) -> &R {
        &self.repo
    }
}
