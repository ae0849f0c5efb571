//! Event catalog, availability, and roster endpoint handlers.

use axum::{
    extract::{Path, State},
    Json,
};

use domain::models::event::{Event, EventAvailability, TierGroup};
use domain::models::registration::{EventRegistrant, EventRegistrations};
use persistence::repositories::RegistrationRepository;

use crate::app::AppState;
use crate::error::ApiError;

/// Full catalog grouped by tier, highest tier first.
///
/// GET /api/v1/events
pub async fn list_events(State(state): State<AppState>) -> Json<Vec<TierGroup>> {
    Json(state.catalog.grouped_by_tier())
}

/// One catalog entry.
///
/// GET /api/v1/events/:event_id
pub async fn get_event(
    State(state): State<AppState>,
    Path(event_id): Path<u32>,
) -> Result<Json<Event>, ApiError> {
    state
        .catalog
        .by_id(event_id)
        .cloned()
        .map(Json)
        .ok_or_else(|| event_not_found(event_id))
}

/// Capacity gate view of one event.
///
/// GET /api/v1/events/:event_id/availability
///
/// Clients use this to disable full events in the form; the authoritative
/// check still happens when the registration is inserted.
pub async fn get_availability(
    State(state): State<AppState>,
    Path(event_id): Path<u32>,
) -> Result<Json<EventAvailability>, ApiError> {
    let event = state
        .catalog
        .by_id(event_id)
        .ok_or_else(|| event_not_found(event_id))?;

    let repo = RegistrationRepository::new(state.pool.clone());
    let (taken, capacity) = repo
        .slot_usage(&event.name)
        .await?
        .unwrap_or((0, event.capacity as i32));

    Ok(Json(EventAvailability {
        event_id: event.id,
        event_name: event.name.clone(),
        registered: taken.max(0) as u32,
        capacity: capacity.max(0) as u32,
        open: taken < capacity,
    }))
}

/// Roster of registrants for one event, polled by viewers.
///
/// GET /api/v1/events/:event_id/registrations
///
/// Participants come only from the selection matching this event; other
/// selections by the same registrant stay out of this view.
pub async fn get_event_registrations(
    State(state): State<AppState>,
    Path(event_id): Path<u32>,
) -> Result<Json<EventRegistrations>, ApiError> {
    let event = state
        .catalog
        .by_id(event_id)
        .ok_or_else(|| event_not_found(event_id))?;

    let repo = RegistrationRepository::new(state.pool.clone());
    let entities = repo.find_by_event(&event.name).await?;

    let registrations: Vec<EventRegistrant> = entities
        .into_iter()
        .filter_map(|entity| {
            let participants = entity
                .events
                .0
                .iter()
                .find(|selection| selection.event.name == event.name)
                .map(|selection| selection.participants.clone())?;
            Some(EventRegistrant {
                id: entity.id,
                name: entity.name,
                course: entity.course,
                participants,
            })
        })
        .collect();

    Ok(Json(EventRegistrations {
        event_name: event.name.clone(),
        total: registrations.len(),
        registrations,
    }))
}

fn event_not_found(event_id: u32) -> ApiError {
    ApiError::NotFound(format!("No event with id {}", event_id))
}
