//! Common test utilities for integration tests.
//!
//! These helpers run the app against a real PostgreSQL database. Tests are
//! skipped when `TEST_DATABASE_URL` is not set.

// Helper utilities shared across integration test binaries; not every
// binary uses every helper.
#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, Method, Request};
use axum::response::Response;
use axum::Router;
use domain::services::catalog::EventCatalog;
use festreg_api::app::create_app;
use festreg_api::config::{
    Config, DatabaseConfig, LoggingConfig, SecurityConfig, ServerConfig,
};
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::sync::Arc;
use std::time::Duration;

/// Serializes tests that touch the database within one test binary.
pub static DB_LOCK: tokio::sync::Mutex<()> = tokio::sync::Mutex::const_new(());

/// Create a test database pool, or `None` when `TEST_DATABASE_URL` is unset.
pub async fn try_create_test_pool() -> Option<PgPool> {
    let database_url = std::env::var("TEST_DATABASE_URL").ok()?;

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .min_connections(1)
        .acquire_timeout(Duration::from_secs(30))
        .connect(&database_url)
        .await
        .expect("Failed to connect to test database");

    Some(pool)
}

/// Run migrations on the test database.
pub async fn run_migrations(pool: &PgPool) {
    sqlx::migrate!("../persistence/src/migrations")
        .run(pool)
        .await
        .expect("Failed to run migrations");
}

/// Remove all registrations and reset the slot counters to the catalog.
pub async fn reset_test_data(pool: &PgPool) {
    sqlx::query("TRUNCATE registrations")
        .execute(pool)
        .await
        .expect("Failed to truncate registrations");

    sqlx::query("UPDATE event_slots SET taken = 0")
        .execute(pool)
        .await
        .expect("Failed to reset event slots");
}

/// Test configuration; the database url mirrors the pool's.
pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
            request_timeout_secs: 30,
        },
        database: DatabaseConfig {
            url: std::env::var("TEST_DATABASE_URL").unwrap_or_default(),
            max_connections: 10,
            min_connections: 1,
            connect_timeout_secs: 5,
            idle_timeout_secs: 60,
        },
        logging: LoggingConfig {
            level: "warn".to_string(),
            format: "pretty".to_string(),
        },
        security: SecurityConfig {
            cors_origins: vec![],
        },
    }
}

/// Build the app with the builtin catalog and seeded slot counters.
pub async fn create_test_app(pool: PgPool) -> Router {
    let catalog = Arc::new(EventCatalog::builtin());
    let repo = persistence::repositories::RegistrationRepository::new(pool.clone());
    repo.seed_slots(&catalog)
        .await
        .expect("Failed to seed event slots");
    create_app(test_config(), pool, catalog)
}

/// Build a JSON request.
pub fn json_request(method: Method, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Build a GET request.
pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Read a response body as JSON.
pub async fn parse_response_body(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");
    serde_json::from_slice(&bytes).expect("Response body was not valid JSON")
}

/// A valid single-event submission for the Duologue group event.
pub fn duologue_payload(name: &str, participants: &[&str]) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "phone": "9876543210",
        "regNo": format!("R-{}", name),
        "course": "BCA",
        "events": [{
            "event": {
                "name": "Duologue",
                "type": "Group (2 in a team)",
                "description": "Perform an engaging dialogue with your partner."
            },
            "participants": participants
        }]
    })
}

/// A valid single-event submission for an individual event.
pub fn individual_payload(name: &str, event_name: &str) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "phone": "9876543210",
        "regNo": format!("R-{}", name),
        "course": "BCA",
        "events": [{
            "event": {
                "name": event_name,
                "type": "Individual",
                "description": ""
            },
            "participants": []
        }]
    })
}
