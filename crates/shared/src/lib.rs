//! Shared utilities for the festival registration backend.
//!
//! This crate provides common functionality used across the other crates:
//! - Field validation helpers for request payloads

pub mod validation;
