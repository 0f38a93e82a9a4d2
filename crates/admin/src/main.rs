use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;

use commands::{competitions::CompetitionCommand, types::TypeCommand};
use config::DatabaseConfig;

#[derive(Parser)]
#[command(name = "catalog-admin")]
#[command(about = "Administer the competition and project category catalog", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    database: DatabaseConfig,

    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply pending database migrations
    Migrate,
    /// Manage competitions
    #[command(subcommand)]
    Competitions(CompetitionCommand),
    /// Manage project categories
    #[command(subcommand)]
    Types(TypeCommand),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("catalog_admin={},storage={}", log_level, log_level).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let db = cli.database.connect().await?;
    tracing::info!("Database connection established");

    match cli.command {
        Commands::Migrate => {
            tracing::info!("Running database migrations");
            db.run_migrations()
                .await
                .context("Failed to run migrations")?;
            tracing::info!("Database migrations completed successfully");
        }
        Commands::Competitions(command) => commands::competitions::run(&db, command).await?,
        Commands::Types(command) => commands::types::run(&db, command).await?,
    }

    Ok(())
}
