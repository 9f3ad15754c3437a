//! Database maintenance command handlers.

use clap::Subcommand;

/// Sub-commands available under `db`.
#[derive(Debug, Subcommand)]
pub enum DbCommands {
    /// Apply pending migrations
    Migrate,
    /// Check database connectivity
    Ping,
}

/// Apply all pending migrations.
///
/// # Errors
///
/// Returns an error if any migration fails.
pub(crate) async fn run_db_migrate(pool: &sqlx::PgPool) -> anyhow::Result<()> {
    let applied = woosync_db::run_migrations(pool).await?;
    println!("applied {applied} migrations");
    Ok(())
}

/// Verify the database answers a `SELECT 1`.
///
/// # Errors
///
/// Returns an error if the query fails.
pub(crate) async fn run_db_ping(pool: &sqlx::PgPool) -> anyhow::Result<()> {
    woosync_db::ping(pool).await?;
    println!("database connection ok");
    Ok(())
}
