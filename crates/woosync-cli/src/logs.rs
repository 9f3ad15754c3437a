//! Read-only sync log query handlers.

use clap::Subcommand;

/// Sub-commands available under `logs`.
#[derive(Debug, Subcommand)]
pub enum LogsCommands {
    /// Show recent sync log rows
    List {
        /// Maximum number of rows to show
        #[arg(long, default_value = "20")]
        limit: i64,
    },
}

/// Show recent sync log rows, newest first.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub(crate) async fn run_logs_list(pool: &sqlx::PgPool, limit: i64) -> anyhow::Result<()> {
    let logs = woosync_db::list_sync_logs(pool, limit).await?;

    if logs.is_empty() {
        println!("no sync log rows found; run `sync customers` first");
        return Ok(());
    }

    let header = format!(
        "{:<21}{:<9}{:<25}{:<6}TITLE",
        "CREATED", "STATUS", "METHOD", "EXC"
    );
    println!("{header}");
    for log in &logs {
        let created = log.created_at.format("%Y-%m-%d %H:%M:%S").to_string();
        let exception = if log.is_exception { "yes" } else { "" };
        let title_display = if log.title.chars().count() > 60 {
            format!("{}...", log.title.chars().take(60).collect::<String>())
        } else {
            log.title.clone()
        };
        println!(
            "{:<21}{:<9}{:<25}{:<6}{}",
            created, log.status, log.method, exception, title_display
        );
    }

    Ok(())
}
