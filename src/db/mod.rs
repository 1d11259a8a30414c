use anyhow::Result;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use std::time::Duration;

pub mod migrator;

pub type OrmConn = DatabaseConnection;

/// Create a SeaORM connection.
///
/// In-memory SQLite databases live and die with a single connection, so the
/// pool is pinned to one connection for those URLs.
pub async fn create_orm_conn(database_url: &str) -> Result<OrmConn> {
    let mut opt = ConnectOptions::new(database_url.to_string());
    if database_url.contains(":memory:") {
        opt.max_connections(1).min_connections(1);
    } else {
        opt.max_connections(5).min_connections(1);
    }
    opt.connect_timeout(Duration::from_secs(10))
        .acquire_timeout(Duration::from_secs(10))
        .sqlx_logging(false);

    let conn = Database::connect(opt).await?;
    Ok(conn)
}

/// Apply every pending migration. Safe to call on an already migrated database.
pub async fn run_migrations(conn: &OrmConn) -> Result<()> {
    migrator::Migrator::up(conn, None).await?;
    tracing::info!("migrations applied");
    Ok(())
}
