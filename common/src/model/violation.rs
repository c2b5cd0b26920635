use serde::{Deserialize, Serialize};

/// A single field-level validation failure. Validation runs before any
/// persistence call and returns every violation at once, so a client can
/// redisplay the whole form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Field path, e.g. "delivery_name" or "tacos[1].ingredients".
    pub field: String,
    pub message: String,
}

impl Violation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}
