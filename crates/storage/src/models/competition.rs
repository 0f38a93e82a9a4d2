use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::Timestamps;

/// A competition created by an administrator. Users only pick from
/// existing competitions when describing their projects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Competition {
    pub id: i64,
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub timestamps: Timestamps,
    pub name: String,
    pub description: String,
    /// Usually the poster of the competition.
    pub image_url: String,
    pub home_page_url: String,
    /// Free-form schedule, e.g. "proposal: Jun 10 - Jul 15; first review: mid July".
    pub time: String,
    /// Ids of attached files, in upload order. Only populated by detailed lookups.
    #[sqlx(skip)]
    pub files: Vec<i64>,
    /// Ids of linked projects. Only populated by detailed lookups.
    #[sqlx(skip)]
    pub projects: Vec<i64>,
}

impl Competition {
    /// True for the value returned when a lookup finds nothing.
    pub fn is_zero(&self) -> bool {
        self.id == 0
    }
}
