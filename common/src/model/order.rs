use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::taco::Taco;

/// A customer's order: delivery and payment details plus an ordered list of
/// tacos. The taco order is meaningful and round-trips through persistence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TacoOrder {
    /// Generated identifier, populated when the order is persisted.
    #[serde(default)]
    pub id: Option<i64>,
    /// Placement timestamp, assigned server-side at save time. Any
    /// caller-supplied value is overwritten.
    #[serde(default)]
    pub placed_at: Option<DateTime<Utc>>,
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
    /// Expiration in MM/YY format.
    #[serde(default)]
    pub cc_expiration: String,
    /// 3-digit CVV code.
    #[serde(default)]
    pub cc_cvv: String,
    #[serde(default)]
    pub tacos: Vec<Taco>,
}

impl TacoOrder {
    pub fn add_taco(&mut self, taco: Taco) {
        self.tacos.push(taco);
    }
}
