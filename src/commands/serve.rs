//! Serve command - Starts the HTTP server.

use std::sync::Arc;

use crate::api::{create_router, AppState};
use crate::cli::args::ServeArgs;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::{Database, InMemoryUserRepository, UserStore};

/// Execute the serve command
pub async fn execute(args: ServeArgs, config: Config) -> AppResult<()> {
    tracing::info!("Starting server...");

    let app_state = if args.in_memory {
        tracing::warn!("Using in-memory storage; users are lost on shutdown");
        AppState::from_repository(Arc::new(InMemoryUserRepository::new()))
    } else {
        let db = Database::connect(&config.database_url)
            .await
            .map_err(|e| AppError::internal(format!("Database connection failed: {}", e)))?;
        let user_repo = Arc::new(UserStore::new(db.get_connection()));
        AppState::from_repository(user_repo).with_database(Arc::new(db))
    };

    let app = create_router(app_state);

    let addr = format!("{}:{}", args.host, args.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind to {}: {}", addr, e)))?;

    tracing::info!("Server running on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    Ok(())
}
