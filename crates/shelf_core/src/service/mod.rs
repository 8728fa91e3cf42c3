//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate collection mutations and repository flushes.
//! - Keep presentation layers decoupled from storage details.

pub mod catalog_service;
