//! Book collection repository contracts and JSON file implementation.
//!
//! # Responsibility
//! - Load the full collection at startup and overwrite it on every save.
//! - Keep file format details inside the persistence boundary.
//!
//! # Invariants
//! - A missing backing file means "no data yet", not an error.
//! - Malformed or invalid persisted content fails fast; it is never masked
//!   by starting from an empty or partial collection.
//! - Saves always write the whole collection. Saving the same collection
//!   twice produces byte-identical content.

use crate::model::book::Book;
use log::{error, info};
use std::cell::{Cell, RefCell};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Instant;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for collection load/save.
#[derive(Debug)]
pub enum RepoError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "catalog file `{}` i/o failure: {source}", path.display())
            }
            Self::Parse { path, source } => {
                write!(f, "catalog file `{}` is malformed: {source}", path.display())
            }
            Self::InvalidData(message) => write!(f, "invalid persisted book data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            Self::InvalidData(_) => None,
        }
    }
}

/// Storage contract for the whole book collection.
pub trait BookRepository {
    /// Returns the stored collection, or `None` when nothing was stored yet.
    fn load(&self) -> RepoResult<Option<Vec<Book>>>;
    /// Replaces the stored collection with `books`.
    fn save(&self, books: &[Book]) -> RepoResult<()>;
}

impl<R: BookRepository + ?Sized> BookRepository for &R {
    fn load(&self) -> RepoResult<Option<Vec<Book>>> {
        (**self).load()
    }

    fn save(&self, books: &[Book]) -> RepoResult<()> {
        (**self).save(books)
    }
}

/// Flat JSON file repository.
#[derive(Debug, Clone)]
pub struct JsonFileBookRepository {
    path: PathBuf,
}

impl JsonFileBookRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> RepoError {
        RepoError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl BookRepository for JsonFileBookRepository {
    fn load(&self) -> RepoResult<Option<Vec<Book>>> {
        let started_at = Instant::now();
        let bytes = match std::fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!("event=catalog_load module=repo status=ok source=missing");
                return Ok(None);
            }
            Err(err) => {
                error!(
                    "event=catalog_load module=repo status=error error_code=read_failed error={}",
                    err
                );
                return Err(self.io_error(err));
            }
        };

        let books = decode_books(&bytes).map_err(|err| {
            let err = match err {
                DecodeError::Json(source) => RepoError::Parse {
                    path: self.path.clone(),
                    source,
                },
                DecodeError::Invalid(message) => RepoError::InvalidData(message),
            };
            error!(
                "event=catalog_load module=repo status=error error_code=decode_failed error={}",
                err
            );
            err
        })?;

        info!(
            "event=catalog_load module=repo status=ok source=file count={} duration_ms={}",
            books.len(),
            started_at.elapsed().as_millis()
        );
        Ok(Some(books))
    }

    fn save(&self, books: &[Book]) -> RepoResult<()> {
        let started_at = Instant::now();
        let bytes =
            encode_books(books).map_err(|err| RepoError::InvalidData(err.to_string()))?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|err| self.io_error(err))?;
            }
        }

        // Write failures leave memory and disk diverged until the next save.
        if let Err(err) = std::fs::write(&self.path, bytes) {
            error!(
                "event=catalog_save module=repo status=error error_code=write_failed error={}",
                err
            );
            return Err(self.io_error(err));
        }

        info!(
            "event=catalog_save module=repo status=ok count={} duration_ms={}",
            books.len(),
            started_at.elapsed().as_millis()
        );
        Ok(())
    }
}

/// In-process repository holding the last saved collection.
#[derive(Debug, Default)]
pub struct MemoryBookRepository {
    stored: RefCell<Option<Vec<Book>>>,
    save_count: Cell<usize>,
}

impl MemoryBookRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with `books` already stored.
    pub fn with_books(books: Vec<Book>) -> Self {
        Self {
            stored: RefCell::new(Some(books)),
            save_count: Cell::new(0),
        }
    }

    /// Number of successful `save` calls.
    pub fn save_count(&self) -> usize {
        self.save_count.get()
    }

    /// Copy of the currently stored collection.
    pub fn stored(&self) -> Option<Vec<Book>> {
        self.stored.borrow().clone()
    }
}

impl BookRepository for MemoryBookRepository {
    fn load(&self) -> RepoResult<Option<Vec<Book>>> {
        Ok(self.stored.borrow().clone())
    }

    fn save(&self, books: &[Book]) -> RepoResult<()> {
        *self.stored.borrow_mut() = Some(books.to_vec());
        self.save_count.set(self.save_count.get() + 1);
        Ok(())
    }
}

enum DecodeError {
    Json(serde_json::Error),
    Invalid(String),
}

fn decode_books(bytes: &[u8]) -> Result<Vec<Book>, DecodeError> {
    let books: Vec<Book> = serde_json::from_slice(bytes).map_err(DecodeError::Json)?;
    for (index, book) in books.iter().enumerate() {
        book.validate()
            .map_err(|err| DecodeError::Invalid(format!("record {index}: {err}")))?;
    }
    Ok(books)
}

fn encode_books(books: &[Book]) -> Result<Vec<u8>, serde_json::Error> {
    serde_json::to_vec(books)
}
