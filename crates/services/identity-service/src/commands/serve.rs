//! Serve command - Starts the HTTP server.

use common::{AppError, AppResult};

use crate::api::{create_router, AppState};
use crate::cli::ServeArgs;
use crate::config::IdentityServiceConfig;
use crate::infra::Database;

/// Execute the serve command
pub async fn execute(args: ServeArgs, mut config: IdentityServiceConfig) -> AppResult<()> {
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    tracing::info!("Starting identity service...");

    let db = Database::connect(&config.database)
        .await
        .map_err(|e| AppError::internal(format!("Database connection failed: {}", e)))?;

    let app = create_router(AppState::from_database(&db, &config.jwt));

    let addr = config.server.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind to {}: {}", addr, e)))?;

    tracing::info!("Identity service listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    Ok(())
}
