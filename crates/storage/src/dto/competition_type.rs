use serde::{Deserialize, Serialize};

/// Payload for creating a new project category
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateTypeRequest {
    pub name: String,

    #[serde(default)]
    pub describe: String,
}

impl CreateTypeRequest {
    pub fn new(name: impl Into<String>, describe: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            describe: describe.into(),
        }
    }

    /// The categories a fresh installation starts with.
    pub fn defaults() -> Vec<Self> {
        vec![
            Self::new(
                "industry collaboration",
                "Projects run together with a partner company",
            ),
            Self::new(
                "faculty research",
                "Projects derived from a supervisor's research work",
            ),
            Self::new(
                "student self-initiated",
                "Projects proposed and led by students",
            ),
        ]
    }
}
