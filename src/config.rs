use anyhow::Result;
use sea_orm::Database;

use crate::schemas::AppState;

/// Initialize application state for the given database URL.
///
/// The reports recompute from source rows on every call, so the state is
/// just the connection pool; there is no cache to warm.
pub async fn initialize_app_state_with_url(database_url: &str) -> Result<AppState> {
    tracing::info!("Connecting to database: {}", database_url);
    let db = Database::connect(database_url).await?;

    Ok(AppState { db })
}
