use std::net::SocketAddr;
use std::sync::Arc;

use aerolink_api::{app, AppState};
use aerolink_store::{DbClient, PgAirlineRepository, PgAirportRepository};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "aerolink_api=debug,tower_http=debug,axum::rejection=trace".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = aerolink_store::app_config::Config::load().expect("Failed to load config");
    tracing::info!("Starting Aerolink API on port {}", config.server.port);

    let db = DbClient::new(&config.database.url)
        .await
        .expect("Failed to connect to Postgres");
    db.migrate().await.expect("Failed to run migrations");

    let airline_repo = Arc::new(PgAirlineRepository::new(db.pool.clone()));
    let airport_repo = Arc::new(PgAirportRepository::new(db.pool.clone()));

    let app = app(AppState::new(airline_repo, airport_repo));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
