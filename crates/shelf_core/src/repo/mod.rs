//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the whole-collection load/save contract used by services.
//! - Isolate file format details from catalog orchestration.
//!
//! # Invariants
//! - Read paths reject malformed or invalid persisted state instead of
//!   masking it.

pub mod book_repo;
