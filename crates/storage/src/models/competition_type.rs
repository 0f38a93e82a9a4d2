use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::Timestamps;

/// Project category such as "industry collaboration" or "faculty research".
///
/// Stored in the `types` table. Not tied to `Competition` here; other parts
/// of the application tag projects with it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct CompetitionType {
    pub id: i64,
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub timestamps: Timestamps,
    pub name: String,
    pub describe: String,
}

impl CompetitionType {
    pub fn is_zero(&self) -> bool {
        self.id == 0
    }
}
