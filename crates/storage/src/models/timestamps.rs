use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Audit columns shared by every catalog table.
///
/// Rows with `deleted_at` set are soft-deleted and never returned by the
/// repositories in this crate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Timestamps {
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Timestamps {
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}
