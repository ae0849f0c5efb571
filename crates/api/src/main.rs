use anyhow::Result;
use std::sync::Arc;
use tracing::info;

mod app;
mod config;
mod error;
mod middleware;
mod routes;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Load configuration
    let config = config::Config::load()?;

    // Initialize logging and metrics
    middleware::logging::init_logging(&config.logging);
    middleware::metrics::init_metrics();

    info!("Starting FestReg API v{}", env!("CARGO_PKG_VERSION"));

    // Create database pool
    let pool = persistence::db::create_pool(&config.database.pool_config()).await?;

    // Run migrations
    info!("Running database migrations...");
    sqlx::migrate!("../persistence/src/migrations")
        .run(&pool)
        .await?;
    info!("Migrations completed");

    // Load the event catalog and seed the per-event slot counters before
    // accepting traffic
    let catalog = Arc::new(domain::services::catalog::EventCatalog::builtin());
    let repo = persistence::repositories::RegistrationRepository::new(pool.clone());
    repo.seed_slots(&catalog).await?;
    info!(events = catalog.len(), "Event catalog loaded");

    // Build application
    let app = app::create_app(config.clone(), pool, catalog);

    // Start server
    let addr = config.socket_addr();
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
