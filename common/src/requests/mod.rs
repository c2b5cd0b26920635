use serde::{Deserialize, Serialize};

/// Response payload returned when a new ordering session is opened.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionOpened {
    pub session_id: String,
}

/// Request payload for setting the delivery and payment details of an
/// in-progress session order. Tacos already accumulated in the session are
/// kept untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderDetails {
    #[serde(default)]
    pub delivery_name: String,
    #[serde(default)]
    pub delivery_street: String,
    #[serde(default)]
    pub delivery_city: String,
    #[serde(default)]
    pub delivery_state: String,
    #[serde(default)]
    pub delivery_zip: String,
    #[serde(default)]
    pub cc_number: String,
    #[serde(default)]
    pub cc_expiration: String,
    #[serde(default)]
    pub cc_cvv: String,
}

/// Optional title filter for the tutorial and article listing endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TitleFilter {
    pub title: Option<String>,
}

/// Location filter for `GET /api/runs/search?location=INDOOR`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationFilter {
    pub location: String,
}
