//! Registration entity (database row mapping).

use chrono::{DateTime, Utc};
use domain::models::registration::{EventSelection, Registration};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

/// Database row mapping for the registrations table.
///
/// The selections list lives in one jsonb column, so a registration is
/// always written and read as a single atomic document.
#[derive(Debug, Clone, FromRow)]
pub struct RegistrationEntity {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    pub reg_no: String,
    pub course: String,
    pub events: Json<Vec<EventSelection>>,
    pub created_at: DateTime<Utc>,
}

impl From<RegistrationEntity> for Registration {
    fn from(entity: RegistrationEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            phone: entity.phone,
            reg_no: entity.reg_no,
            course: entity.course,
            events: entity.events.0,
            created_at: entity.created_at,
        }
    }
}
