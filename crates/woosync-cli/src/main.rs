mod db;
mod logs;
mod seed;
mod sync;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::db::DbCommands;
use crate::logs::LogsCommands;
use crate::seed::SeedCommands;
use crate::sync::SyncCommands;

#[derive(Debug, Parser)]
#[command(name = "woosync-cli")]
#[command(about = "WooCommerce backend sync command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Pull storefront records into the backend
    Sync {
        #[command(subcommand)]
        command: SyncCommands,
    },
    /// Seed reference data the importer depends on
    Seed {
        #[command(subcommand)]
        command: SeedCommands,
    },
    /// Inspect sync log rows
    Logs {
        #[command(subcommand)]
        command: LogsCommands,
    },
    /// Database maintenance
    Db {
        #[command(subcommand)]
        command: DbCommands,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let Some(command) = cli.command else {
        println!("woosync-cli: run with --help to see available commands");
        return Ok(());
    };

    let config = woosync_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let pool_config = woosync_db::PoolConfig::from_app_config(&config);
    let pool = woosync_db::connect_pool(&config.database_url, pool_config).await?;

    match command {
        Commands::Sync { command } => match command {
            SyncCommands::Customers { dry_run } => {
                sync::run_sync_customers(&pool, &config, dry_run).await?;
            }
        },
        Commands::Seed { command } => match command {
            SeedCommands::Countries => seed::run_seed_countries(&pool, &config).await?,
        },
        Commands::Logs { command } => match command {
            LogsCommands::List { limit } => logs::run_logs_list(&pool, limit).await?,
        },
        Commands::Db { command } => match command {
            DbCommands::Migrate => db::run_db_migrate(&pool).await?,
            DbCommands::Ping => db::run_db_ping(&pool).await?,
        },
    }

    Ok(())
}
