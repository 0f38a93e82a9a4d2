use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Row of the `competition_projects` join table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, FromRow)]
pub struct CompetitionProject {
    pub project_id: i64,
    pub competition_id: i64,
}
