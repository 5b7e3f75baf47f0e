//! Test database setup
//!
//! Every test gets its own in-memory SQLite database. The pool is capped at a
//! single connection because each SQLite connection opens a separate
//! in-memory database.

use sea_orm::{DatabaseConnection, DbErr};
use survey_api::app_config::DatabaseConfig;

/// Open a fresh database with every table created
pub async fn setup_test_database() -> Result<DatabaseConnection, DbErr> {
    let config = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
        min_connections: 1,
        sqlx_logging: false,
        create_schema: true,
    };

    let db = survey_api::db::connect(&config).await?;
    survey_api::db::create_schema(&db).await?;

    Ok(db)
}
