//! Persistence layer for the festival registration backend.
//!
//! This crate contains:
//! - Database connection management
//! - Entity definitions (database row mappings)
//! - Repository implementations
//! - Embedded SQL migrations

pub mod db;
pub mod entities;
pub mod metrics;
pub mod repositories;
