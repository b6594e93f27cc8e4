//! Migrate command - Database migration management.

use crate::cli::args::{MigrateAction, MigrateArgs};
use crate::config::Config;
use crate::errors::AppResult;
use crate::infra::Database;

/// Execute the migrate command
pub async fn execute(args: MigrateArgs, config: Config) -> AppResult<()> {
    // Connect without auto-running migrations for manual control
    let db = Database::connect_without_migrations(&config).await?;

    for line in run(&db, args.action).await? {
        println!("{}", line);
    }
    Ok(())
}

/// Apply `action` and return the lines to report.
pub async fn run(db: &Database, action: MigrateAction) -> AppResult<Vec<String>> {
    tracing::info!(?action, "running migration command");

    let report = match action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            vec!["Migrations applied".to_string()]
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            vec!["Last migration rolled back".to_string()]
        }
        MigrateAction::Status => db
            .migration_status()
            .await?
            .into_iter()
            .map(|(name, applied)| {
                format!("{}: {}", name, if applied { "applied" } else { "pending" })
            })
            .collect(),
        MigrateAction::Fresh => {
            tracing::warn!("dropping every table before re-running migrations");
            db.fresh_migrations().await?;
            vec!["Database reset and migrations applied".to_string()]
        }
    };

    Ok(report)
}
