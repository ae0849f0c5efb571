//! Domain models for the registration backend.

pub mod event;
pub mod registration;

pub use event::{Event, EventKind, Tier};
pub use registration::{EventSelection, EventSnapshot, Registration};
