mod model;
mod server;

use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::server::{
    config::Config,
    error::AppError,
    router,
    scheduler::data_retention::{self, RetentionSettings},
    service::pet::pet_enrichment,
    startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let http_client = startup::setup_reqwest_client()?;

    tracing::info!("Starting server");

    // Held until shutdown so the retention job keeps firing
    let _scheduler = data_retention::start_scheduler(
        db.clone(),
        &config.purge_cron,
        RetentionSettings::from_config(&config),
    )
    .await?;

    let app = router::router()
        .with_state(AppState::new(db, pet_enrichment(http_client, &config)))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    tracing::info!("Listening on {}", config.bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
