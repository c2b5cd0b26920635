use serde::{Deserialize, Serialize};

/// A single catalog ingredient, identified by a short code such as "CHED".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Short code identifying the ingredient (caller-supplied, not generated).
    pub id: String,
    /// Display name, e.g. "Cheddar".
    pub name: String,
    /// Category the ingredient belongs to.
    #[serde(rename = "type")]
    pub ingredient_type: IngredientType,
}

/// Closed set of ingredient categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum IngredientType {
    Wrap,
    Protein,
    Veggies,
    Cheese,
    Sauce,
}

impl IngredientType {
    /// Stable text code used in the database `type` column.
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::Wrap => "WRAP",
            Self::Protein => "PROTEIN",
            Self::Veggies => "VEGGIES",
            Self::Cheese => "CHEESE",
            Self::Sauce => "SAUCE",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "WRAP" => Some(Self::Wrap),
            "PROTEIN" => Some(Self::Protein),
            "VEGGIES" => Some(Self::Veggies),
            "CHEESE" => Some(Self::Cheese),
            "SAUCE" => Some(Self::Sauce),
            _ => None,
        }
    }
}
