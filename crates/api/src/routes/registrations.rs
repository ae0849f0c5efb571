//! Registration submission handler.

use axum::{extract::State, http::StatusCode, Json};
use tracing::info;
use validator::Validate;

use domain::models::registration::{CreateRegistrationRequest, Registration};
use domain::services::validation::validate_selections;
use persistence::repositories::{
    NewRegistration, RegistrationRepository, RegistrationStoreError,
};

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::metrics::{record_capacity_rejection, record_registration_created};

/// Submit a registration.
///
/// POST /api/v1/registrations
///
/// Structural validation first, then the catalog-aware rules, then a single
/// transaction that claims one slot per selected event and persists the
/// registration.
pub async fn create_registration(
    State(state): State<AppState>,
    Json(request): Json<CreateRegistrationRequest>,
) -> Result<(StatusCode, Json<Registration>), ApiError> {
    request.validate()?;
    validate_selections(&state.catalog, &request.events)?;

    let repo = RegistrationRepository::new(state.pool.clone());
    let entity = repo
        .insert(NewRegistration {
            name: request.name,
            phone: request.phone,
            reg_no: request.reg_no,
            course: request.course,
            events: request.events,
        })
        .await
        .map_err(|err| {
            if let RegistrationStoreError::CapacityExceeded { ref event } = err {
                record_capacity_rejection(event);
                info!(event = %event, "Registration rejected: event full");
            }
            ApiError::from(err)
        })?;

    let registration: Registration = entity.into();
    record_registration_created(registration.events.len());

    info!(
        registration_id = %registration.id,
        selections = registration.events.len(),
        "Registration created"
    );

    Ok((StatusCode::CREATED, Json(registration)))
}
