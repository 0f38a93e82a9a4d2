use anyhow::{Context, Result, bail};
use clap::Subcommand;
use storage::{Database, StorageError};
use storage::dto::competition::CreateCompetitionRequest;
use storage::models::CompetitionProject;
use storage::repository::CompetitionRepository;

use super::print_json;

#[derive(Debug, Subcommand)]
pub enum CompetitionCommand {
    /// List all competitions
    List,
    /// Show one competition with its files and projects
    Show { name: String },
    /// Create a competition
    Create {
        #[arg(long)]
        name: String,

        #[arg(long, default_value = "")]
        description: String,

        #[arg(long, default_value = "")]
        image_url: String,

        #[arg(long, default_value = "")]
        home_page_url: String,

        /// Free-form schedule text
        #[arg(long, default_value = "")]
        time: String,

        /// Attached file id, repeatable; order is kept
        #[arg(long = "file")]
        files: Vec<i64>,

        /// Linked project id, repeatable
        #[arg(long = "project")]
        projects: Vec<i64>,
    },
    /// Link a project to a competition
    Link {
        competition_id: i64,
        project_id: i64,
    },
}

pub async fn run(db: &Database, command: CompetitionCommand) -> Result<()> {
    match command {
        CompetitionCommand::List => {
            let mut conn = db.pool().acquire().await?;
            let competitions = CompetitionRepository::new(&mut conn).list().await;
            print_json(&competitions)
        }
        CompetitionCommand::Show { name } => {
            let mut conn = db.pool().acquire().await?;
            let competition = match CompetitionRepository::new(&mut conn)
                .find_detailed_by_name(&name)
                .await
            {
                Ok(competition) => competition,
                Err(StorageError::NotFound) => bail!("Competition '{}' not found", name),
                Err(e) => return Err(e).context("Failed to load competition"),
            };
            print_json(&competition)
        }
        CompetitionCommand::Create {
            name,
            description,
            image_url,
            home_page_url,
            time,
            files,
            projects,
        } => {
            let req = CreateCompetitionRequest {
                name,
                description,
                image_url,
                home_page_url,
                time,
                file_ids: files,
                project_ids: projects,
            };

            let mut tx = db.pool().begin().await?;
            let competition = CompetitionRepository::new(&mut tx)
                .create(&req)
                .await
                .with_context(|| format!("Failed to create competition '{}'", req.name))?;
            tx.commit().await?;

            tracing::info!("Created competition {} ({})", competition.id, competition.name);
            print_json(&competition)
        }
        CompetitionCommand::Link {
            competition_id,
            project_id,
        } => {
            let mut tx = db.pool().begin().await?;
            let mut repo = CompetitionRepository::new(&mut tx);
            match repo
                .add_project(CompetitionProject {
                    project_id,
                    competition_id,
                })
                .await
            {
                Ok(()) => {}
                Err(StorageError::NotFound) => {
                    bail!("Competition {} not found", competition_id)
                }
                Err(e) => return Err(e).context("Failed to link project"),
            }
            let projects = repo.project_ids(competition_id).await?;
            tx.commit().await?;

            tracing::info!("Linked project {} to competition {}", project_id, competition_id);
            print_json(&projects)
        }
    }
}
