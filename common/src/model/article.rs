use serde::{Deserialize, Serialize};

/// A content item: title, body and a published flag
/// (true = published, false = draft).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Generated identifier, populated on insert.
    #[serde(default)]
    pub id: Option<i64>,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub published: bool,
}
