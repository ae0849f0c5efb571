//! Registration repository for database operations.

use domain::models::registration::EventSelection;
use domain::services::catalog::EventCatalog;
use sqlx::types::Json;
use sqlx::PgPool;
use tracing::debug;

use crate::entities::RegistrationEntity;
use crate::metrics::QueryTimer;

/// Error from registration writes.
#[derive(Debug, thiserror::Error)]
pub enum RegistrationStoreError {
    /// The named event has no open slots left.
    #[error("\"{event}\" has reached its capacity")]
    CapacityExceeded { event: String },

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Input for inserting a new registration.
///
/// Already validated; the id and timestamp are generated by the database.
#[derive(Debug, Clone)]
pub struct NewRegistration {
    pub name: String,
    pub phone: String,
    pub reg_no: String,
    pub course: String,
    pub events: Vec<EventSelection>,
}

/// Repository for registration-related database operations.
#[derive(Clone)]
pub struct RegistrationRepository {
    pool: PgPool,
}

impl RegistrationRepository {
    /// Creates a new RegistrationRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Seed the per-event slot counters from the catalog.
    ///
    /// Capacities are upserted so a catalog change takes effect on restart;
    /// existing `taken` counts are preserved.
    pub async fn seed_slots(&self, catalog: &EventCatalog) -> Result<(), sqlx::Error> {
        let mut tx = self.pool.begin().await?;
        for event in catalog.all() {
            sqlx::query(
                r#"
                INSERT INTO event_slots (event_name, capacity, taken)
                VALUES ($1, $2, 0)
                ON CONFLICT (event_name) DO UPDATE SET
                    capacity = EXCLUDED.capacity
                "#,
            )
            .bind(&event.name)
            .bind(event.capacity as i32)
            .execute(&mut *tx)
            .await?;
        }
        tx.commit().await?;
        debug!(events = catalog.len(), "Event slot counters seeded");
        Ok(())
    }

    /// Insert one registration, claiming a slot for every selected event.
    ///
    /// The slot claims and the row insert commit together. A full event
    /// aborts the whole transaction, so two submissions racing for the last
    /// slot cannot both be admitted.
    pub async fn insert(
        &self,
        new: NewRegistration,
    ) -> Result<RegistrationEntity, RegistrationStoreError> {
        let timer = QueryTimer::new("insert_registration");
        let mut tx = self.pool.begin().await?;

        for selection in &new.events {
            let claimed = sqlx::query(
                r#"
                UPDATE event_slots
                SET taken = taken + 1
                WHERE event_name = $1 AND taken < capacity
                "#,
            )
            .bind(&selection.event.name)
            .execute(&mut *tx)
            .await?
            .rows_affected();

            // Zero rows means the conditional failed: the event is full.
            // Dropping the transaction rolls back earlier claims.
            if claimed == 0 {
                return Err(RegistrationStoreError::CapacityExceeded {
                    event: selection.event.name.clone(),
                });
            }
        }

        let entity = sqlx::query_as::<_, RegistrationEntity>(
            r#"
            INSERT INTO registrations (name, phone, reg_no, course, events)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, phone, reg_no, course, events, created_at
            "#,
        )
        .bind(&new.name)
        .bind(&new.phone)
        .bind(&new.reg_no)
        .bind(&new.course)
        .bind(Json(&new.events))
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        timer.record();
        Ok(entity)
    }

    /// All registrations containing a selection for the given event name,
    /// oldest first.
    pub async fn find_by_event(
        &self,
        event_name: &str,
    ) -> Result<Vec<RegistrationEntity>, sqlx::Error> {
        sqlx::query_as::<_, RegistrationEntity>(
            r#"
            SELECT id, name, phone, reg_no, course, events, created_at
            FROM registrations
            WHERE events @> $1
            ORDER BY created_at, id
            "#,
        )
        .bind(event_filter(event_name))
        .fetch_all(&self.pool)
        .await
    }

    /// Slot usage for one event as `(taken, capacity)`, if seeded.
    pub async fn slot_usage(&self, event_name: &str) -> Result<Option<(i32, i32)>, sqlx::Error> {
        sqlx::query_as(
            r#"
            SELECT taken, capacity
            FROM event_slots
            WHERE event_name = $1
            "#,
        )
        .bind(event_name)
        .fetch_optional(&self.pool)
        .await
    }
}

/// jsonb containment filter matching any selection of the named event.
fn event_filter(event_name: &str) -> serde_json::Value {
    serde_json::json!([{ "event": { "name": event_name } }])
}
