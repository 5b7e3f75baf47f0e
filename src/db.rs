//! Connection pool and table bootstrap.

use crate::app_config::DatabaseConfig;
use crate::orm::{answers, questions, responses, surveys, users};
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, EntityTrait, Schema,
};

/// Open a connection pool for the configured database URL.
pub async fn connect(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let mut opt = ConnectOptions::new(config.url.clone());
    opt.max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .sqlx_logging(config.sqlx_logging);

    let db = Database::connect(opt).await?;
    log::info!("Connected to database ({:?})", db.get_database_backend());
    Ok(db)
}

/// Create every table that does not exist yet.
///
/// Tables are derived from the entity definitions. Existing tables are left
/// untouched; there is no migration support.
pub async fn create_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    create_table(db, users::Entity).await?;
    create_table(db, surveys::Entity).await?;
    create_table(db, questions::Entity).await?;
    create_table(db, responses::Entity).await?;
    create_table(db, answers::Entity).await?;
    Ok(())
}

async fn create_table<E>(db: &DatabaseConnection, entity: E) -> Result<(), DbErr>
where
    E: EntityTrait,
{
    let table = entity.table_name().to_owned();
    let backend = db.get_database_backend();
    let mut stmt = Schema::new(backend).create_table_from_entity(entity);
    stmt.if_not_exists();

    db.execute(backend.build(&stmt)).await?;
    log::debug!("Ensured table {}", table);
    Ok(())
}
