//! Core domain logic for Shelf, a personal book catalog.
//! This crate is the single source of truth for catalog invariants.

pub mod config;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod stats;

pub use config::{CatalogConfig, DATA_PATH_ENV, DEFAULT_DATA_FILE};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::book::{current_year, Book, BookValidationError, Genre, MIN_PUBLICATION_YEAR};
pub use repo::book_repo::{
    BookRepository, JsonFileBookRepository, MemoryBookRepository, RepoError, RepoResult,
};
pub use service::catalog_service::{
    CatalogService, Feedback, SearchField, ServiceError, ServiceResult,
};
pub use stats::{compute_statistics, decade_label, decade_of, LibraryStats};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
