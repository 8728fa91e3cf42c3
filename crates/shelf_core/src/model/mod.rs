//! Domain model for the book catalog.
//!
//! # Responsibility
//! - Define the record shape stored in the catalog collection.
//!
//! # Invariants
//! - Records carry no identity of their own; callers address them by
//!   position in the collection.

pub mod book;
