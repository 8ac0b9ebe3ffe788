//! Migrate command - Database migration management.

use common::{AppError, AppResult, DatabaseConfig};

use crate::cli::MigrateAction;
use crate::infra::Database;

/// Execute the migrate command
pub async fn execute(action: MigrateAction, config: &DatabaseConfig) -> AppResult<()> {
    let db = Database::connect_without_migrations(config)
        .await
        .map_err(|e| AppError::internal(format!("Database connection failed: {}", e)))?;

    match action {
        MigrateAction::Up => {
            tracing::info!("Running pending migrations...");
            db.run_migrations().await.map_err(migration_failed)?;
            tracing::info!("Migrations completed");
        }
        MigrateAction::Down => {
            tracing::info!("Rolling back last migration...");
            db.rollback_migration().await.map_err(migration_failed)?;
            tracing::info!("Rollback completed");
        }
        MigrateAction::Status => {
            for (name, applied) in db.migration_status().await.map_err(migration_failed)? {
                println!("{}: {}", name, if applied { "applied" } else { "pending" });
            }
        }
        MigrateAction::Fresh => {
            tracing::warn!("Dropping all tables and re-running migrations...");
            db.fresh_migrations().await.map_err(migration_failed)?;
            tracing::info!("Fresh migrations completed");
        }
    }

    Ok(())
}

fn migration_failed(err: sea_orm::DbErr) -> AppError {
    AppError::internal(format!("Migration failed: {}", err))
}
