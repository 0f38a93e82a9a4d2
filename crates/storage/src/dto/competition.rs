use serde::{Deserialize, Serialize};

/// Payload for creating a new competition
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateCompetitionRequest {
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub image_url: String,

    #[serde(default)]
    pub home_page_url: String,

    #[serde(default)]
    pub time: String,

    /// Attached file ids; order is kept.
    #[serde(default)]
    pub file_ids: Vec<i64>,

    #[serde(default)]
    pub project_ids: Vec<i64>,
}

impl CreateCompetitionRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}
