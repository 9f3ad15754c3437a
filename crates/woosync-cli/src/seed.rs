//! Reference-data seeding command handlers for the CLI.
//!
//! The importer expects the countries table and a root territory to exist
//! before the first sync run; these commands put them in place.

use clap::Subcommand;

/// Name given to the root territory when none exists yet.
const ROOT_TERRITORY: &str = "All Territories";

/// Sub-commands available under `seed`.
#[derive(Debug, Subcommand)]
pub enum SeedCommands {
    /// Load the countries file into the database and ensure a root territory
    Countries,
}

/// Seed the countries table from the configured YAML file and make sure a
/// root territory exists for imports to fall back to.
///
/// # Errors
///
/// Returns an error if the countries file cannot be read or validated, or if
/// the database writes fail.
pub(crate) async fn run_seed_countries(
    pool: &sqlx::PgPool,
    config: &woosync_core::AppConfig,
) -> anyhow::Result<()> {
    let countries_file = woosync_core::load_countries(&config.countries_path)?;
    let seeded = woosync_db::seed_countries(pool, &countries_file.countries).await?;

    if woosync_db::ensure_root_territory(pool, ROOT_TERRITORY).await? {
        println!("created root territory '{ROOT_TERRITORY}'");
    }

    println!(
        "seeded {seeded} countries from {}",
        config.countries_path.display()
    );

    Ok(())
}
