use anyhow::{Context, Result, bail};
use clap::Subcommand;
use serde::Serialize;
use storage::Database;
use storage::dto::competition_type::CreateTypeRequest;
use storage::models::CompetitionType;
use storage::repository::TypeRepository;

use super::print_json;

#[derive(Debug, Subcommand)]
pub enum TypeCommand {
    /// List all project categories
    List,
    /// Show one category by id
    Show { id: i64 },
    /// Create a category; names may repeat
    Create {
        #[arg(long)]
        name: String,

        #[arg(long, default_value = "")]
        describe: String,
    },
    /// Insert the default categories when none exist yet
    Seed,
}

#[derive(Debug, Serialize)]
struct SeedReport {
    skipped: bool,
    created: Vec<CompetitionType>,
}

pub async fn run(db: &Database, command: TypeCommand) -> Result<()> {
    match command {
        TypeCommand::List => {
            let mut conn = db.pool().acquire().await?;
            let types = TypeRepository::new(&mut conn).list().await;
            print_json(&types)
        }
        TypeCommand::Show { id } => {
            let mut conn = db.pool().acquire().await?;
            let competition_type = TypeRepository::new(&mut conn).find_by_id(id).await;
            if competition_type.is_zero() {
                bail!("Type {} not found", id);
            }
            print_json(&competition_type)
        }
        TypeCommand::Create { name, describe } => {
            let req = CreateTypeRequest { name, describe };

            let mut tx = db.pool().begin().await?;
            let competition_type = TypeRepository::new(&mut tx)
                .create(&req)
                .await
                .context("Failed to create type")?;
            tx.commit().await?;

            tracing::info!("Created type {} ({})", competition_type.id, competition_type.name);
            print_json(&competition_type)
        }
        TypeCommand::Seed => {
            let mut tx = db.pool().begin().await?;
            let mut repo = TypeRepository::new(&mut tx);

            let report = if repo.try_list().await?.is_empty() {
                let mut created = Vec::new();
                for req in CreateTypeRequest::defaults() {
                    created.push(repo.create(&req).await?);
                }
                SeedReport {
                    skipped: false,
                    created,
                }
            } else {
                tracing::info!("Types already present, skipping seed");
                SeedReport {
                    skipped: true,
                    created: Vec::new(),
                }
            };
            tx.commit().await?;

            print_json(&report)
        }
    }
}
