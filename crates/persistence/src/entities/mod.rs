//! Database entity definitions.
//!
//! Entities are direct mappings to database rows.

pub mod registration;

pub use registration::RegistrationEntity;
