use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::ingredient::Ingredient;

/// A single taco creation: a name plus an ordered list of ingredient
/// references. The order of `ingredients` is meaningful and is preserved
/// through persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Taco {
    /// Generated identifier, populated when the taco is persisted.
    #[serde(default)]
    pub id: Option<i64>,
    /// Creation timestamp, assigned server-side at save time.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    pub name: String,
    /// Ordered ingredient references; at least one is required to pass validation.
    #[serde(default)]
    pub ingredients: Vec<IngredientRef>,
}

impl Taco {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            created_at: None,
            name: name.into(),
            ingredients: Vec::new(),
        }
    }

    pub fn add_ingredient(&mut self, ingredient: &Ingredient) {
        self.ingredients.push(IngredientRef {
            ingredient: ingredient.id.clone(),
        });
    }
}

/// A lightweight link from a taco to an ingredient by code. Carries no data
/// of its own beyond the code; its position within the taco's list is its
/// only identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IngredientRef {
    pub ingredient: String,
}

impl IngredientRef {
    pub fn new(ingredient: impl Into<String>) -> Self {
        Self {
            ingredient: ingredient.into(),
        }
    }
}
