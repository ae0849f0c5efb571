//! Domain layer for the festival registration backend.
//!
//! This crate contains:
//! - Domain models (events, registrations, API payloads)
//! - The event catalog service
//! - Catalog-aware registration validation

pub mod models;
pub mod services;
