//! Catalog-aware registration validation.
//!
//! Structural checks (blank fields, phone shape, empty selection list) are
//! handled by the validator derive on the request payload. The rules here
//! need the live catalog: event names must resolve, and participant rules
//! depend on the catalog's event kind rather than the client's snapshot.

use std::collections::HashSet;

use crate::models::event::EventKind;
use crate::models::registration::EventSelection;
use crate::services::catalog::EventCatalog;

/// A single business rule violation for one selection.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("Unknown event \"{name}\"")]
    UnknownEvent { name: String },

    #[error("\"{name}\" is selected more than once")]
    DuplicateSelection { name: String },

    #[error("Participant names are required for \"{event}\"")]
    MissingParticipants { event: String },

    #[error("Participant names for \"{event}\" must not be blank")]
    BlankParticipant { event: String },

    #[error("\"{event}\" allows a team of {team_size}, got {got}")]
    TooManyParticipants {
        event: String,
        team_size: u8,
        got: usize,
    },

    #[error("\"{event}\" is an individual event and takes no participants")]
    UnexpectedParticipants { event: String },
}

/// Checks every selection against the catalog, collecting all violations.
///
/// All selections are examined before reporting so a submitter sees the
/// complete list of problems at once.
pub fn validate_selections(
    catalog: &EventCatalog,
    selections: &[EventSelection],
) -> Result<(), Vec<SelectionError>> {
    let mut errors = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();

    for selection in selections {
        let name = selection.event.name.as_str();

        if !seen.insert(name) {
            errors.push(SelectionError::DuplicateSelection {
                name: name.to_string(),
            });
            continue;
        }

        let Some(event) = catalog.by_name(name) else {
            errors.push(SelectionError::UnknownEvent {
                name: name.to_string(),
            });
            continue;
        };

        match event.kind {
            EventKind::Individual => {
                if !selection.participants.is_empty() {
                    errors.push(SelectionError::UnexpectedParticipants {
                        event: event.name.clone(),
                    });
                }
            }
            EventKind::Group { team_size } => {
                if selection.participants.is_empty() {
                    errors.push(SelectionError::MissingParticipants {
                        event: event.name.clone(),
                    });
                    continue;
                }
                if selection
                    .participants
                    .iter()
                    .any(|p| p.trim().is_empty())
                {
                    errors.push(SelectionError::BlankParticipant {
                        event: event.name.clone(),
                    });
                }
                if selection.participants.len() > team_size as usize {
                    errors.push(SelectionError::TooManyParticipants {
                        event: event.name.clone(),
                        team_size,
                        got: selection.participants.len(),
                    });
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
