//! SQLite-backed ingredient repository, exposing only the operations the
//! services actually use: find-all, find-by-id and save.

use common::model::ingredient::{Ingredient, IngredientType};
use rusqlite::types::Type;
use rusqlite::{params, OptionalExtension, Row};

use crate::db::Database;
use crate::error::ApiError;

/// The ten-ingredient catalog every taco design picks from.
const CATALOG: [(&str, &str, IngredientType); 10] = [
    ("FLTO", "Flour Tortilla", IngredientType::Wrap),
    ("COTO", "Corn Tortilla", IngredientType::Wrap),
    ("GRBF", "Ground Beef", IngredientType::Protein),
    ("CARN", "Carnitas", IngredientType::Protein),
    ("TMTO", "Diced Tomatoes", IngredientType::Veggies),
    ("LETC", "Lettuce", IngredientType::Veggies),
    ("CHED", "Cheddar", IngredientType::Cheese),
    ("JACK", "Monterrey Jack", IngredientType::Cheese),
    ("SLSA", "Salsa", IngredientType::Sauce),
    ("SRCR", "Sour Cream", IngredientType::Sauce),
];

pub struct IngredientRepository {
    db: Database,
}

impl IngredientRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub fn find_all(&self) -> Result<Vec<Ingredient>, ApiError> {
        let conn = self.db.open()?;
        let mut stmt = conn.prepare("SELECT id, name, type FROM ingredient ORDER BY id")?;
        let ingredients = stmt
            .query_map([], map_ingredient)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(ingredients)
    }

    pub fn find_by_id(&self, id: &str) -> Result<Option<Ingredient>, ApiError> {
        let conn = self.db.open()?;
        let ingredient = conn
            .query_row(
                "SELECT id, name, type FROM ingredient WHERE id = ?1",
                params![id],
                map_ingredient,
            )
            .optional()?;
        Ok(ingredient)
    }

    pub fn save(&self, ingredient: &Ingredient) -> Result<(), ApiError> {
        let conn = self.db.open()?;
        // Upsert rather than INSERT OR REPLACE: REPLACE deletes the old row,
        // which trips the foreign key from ingredient_ref on a re-seed.
        conn.execute(
            "INSERT INTO ingredient (id, name, type) VALUES (?1, ?2, ?3) \
             ON CONFLICT(id) DO UPDATE SET name = excluded.name, type = excluded.type",
            params![
                ingredient.id,
                ingredient.name,
                ingredient.ingredient_type.as_code()
            ],
        )?;
        Ok(())
    }

    /// Seeds the fixed catalog. Idempotent, called once at startup.
    pub fn seed_catalog(&self) -> Result<(), ApiError> {
        for (id, name, ingredient_type) in CATALOG {
            self.save(&Ingredient {
                id: id.to_string(),
                name: name.to_string(),
                ingredient_type,
            })?;
        }
        Ok(())
    }
}

fn map_ingredient(row: &Row<'_>) -> rusqlite::Result<Ingredient> {
    let code: String = row.get("type")?;
    let ingredient_type = IngredientType::from_code(&code).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            2,
            Type::Text,
            format!("unknown ingredient type '{code}'").into(),
        )
    })?;
    Ok(Ingredient {
        id: row.get("id")?,
        name: row.get("name")?,
        ingredient_type,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_support::fresh_database;

    #[test]
    fn seeded_catalog_is_retrievable_by_code() {
        let (db, _file) = fresh_database();
        let repo = IngredientRepository::new(db);
        repo.seed_catalog().expect("seed");

        let salsa = repo.find_by_id("SLSA").expect("query").expect("present");
        assert_eq!(salsa.name, "Salsa");
        assert_eq!(salsa.ingredient_type, IngredientType::Sauce);
    }

    #[test]
    fn unknown_code_is_an_explicit_empty_result() {
        let (db, _file) = fresh_database();
        let repo = IngredientRepository::new(db);
        repo.seed_catalog().expect("seed");

        assert!(repo.find_by_id("ZZZZ").expect("query").is_none());
    }

    #[test]
    fn find_all_returns_the_whole_catalog() {
        let (db, _file) = fresh_database();
        let repo = IngredientRepository::new(db);
        repo.seed_catalog().expect("seed");

        let all = repo.find_all().expect("query");
        assert_eq!(all.len(), 10);
    }

    #[test]
    fn save_replaces_an_existing_code() {
        let (db, _file) = fresh_database();
        let repo = IngredientRepository::new(db);
        repo.seed_catalog().expect("seed");

        repo.save(&Ingredient {
            id: "SLSA".into(),
            name: "Salsa Verde".into(),
            ingredient_type: IngredientType::Sauce,
        })
        .expect("save");

        let salsa = repo.find_by_id("SLSA").expect("query").expect("present");
        assert_eq!(salsa.name, "Salsa Verde");
        assert_eq!(repo.find_all().expect("query").len(), 10);
    }
}
