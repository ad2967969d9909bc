//! attend-server: AttendEase HTTP service
//!
//! Loads configuration, sets up logging, opens and migrates the database,
//! then serves the API until interrupted.

use std::time::Duration;

use attend_server::{AppState, BoxError, Config, api, db, logger};

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    // Load .env file
    let _ = dotenvy::dotenv();

    let config = Config::from_env()?;
    logger::init_logger_with_file(&config.log_level, config.log_json, config.log_dir.as_deref())?;

    tracing::info!("Starting attend-server (env: {})", config.environment);

    let state = AppState::new(&config).await?;

    // Expired session cleanup (hourly)
    let pool = state.pool.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(3600));
        loop {
            interval.tick().await;
            match db::sessions::delete_expired(&pool, attend_server::util::now_millis()).await {
                Ok(0) => {}
                Ok(n) => tracing::info!(removed = n, "Expired sessions removed"),
                Err(e) => tracing::error!(error = %e, "Session cleanup failed"),
            }
        }
    });

    let app = api::build_app(state);

    let addr = format!("0.0.0.0:{}", config.http_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("attend-server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutdown signal received");
        })
        .await?;

    Ok(())
}
