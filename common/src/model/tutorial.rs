use serde::{Deserialize, Serialize};

/// A tutorial entry: title, description and a published flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tutorial {
    /// Generated identifier, populated on insert.
    #[serde(default)]
    pub id: Option<i64>,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub published: bool,
}
