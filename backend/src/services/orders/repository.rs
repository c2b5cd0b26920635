//! Multi-table order persistence and retrieval.
//!
//! An order aggregate spans three tables: `taco_order`, `taco` and
//! `ingredient_ref`. Child rows carry an explicit position column
//! (`taco_order_key`, `taco_key`) because SQLite does not guarantee row
//! return order without an ORDER BY; the read path always sorts by those
//! columns, never by insertion order.

use chrono::Utc;
use common::model::order::TacoOrder;
use common::model::taco::{IngredientRef, Taco};
use rusqlite::{params, Connection};

use crate::db::Database;
use crate::error::ApiError;

pub struct OrderRepository {
    db: Database,
}

impl OrderRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Persists a fully-validated order aggregate and returns it with
    /// generated identifiers and server-assigned timestamps populated.
    ///
    /// All inserts run inside one transaction: the order row, one `taco` row
    /// per taco carrying the parent order id and its zero-based position,
    /// and one `ingredient_ref` row per reference carrying the taco id and
    /// its zero-based position. A failure at any step rolls everything back,
    /// so no partial aggregate is ever observable.
    pub fn save(&self, mut order: TacoOrder) -> Result<TacoOrder, ApiError> {
        let mut conn = self.db.open()?;
        let tx = conn.transaction()?;

        // Placement time is server-assigned; any caller value is overridden.
        order.placed_at = Some(Utc::now());
        tx.execute(
            "INSERT INTO taco_order \
             (delivery_name, delivery_street, delivery_city, delivery_state, delivery_zip, \
              cc_number, cc_expiration, cc_cvv, placed_at) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            params![
                order.delivery_name,
                order.delivery_street,
                order.delivery_city,
                order.delivery_state,
                order.delivery_zip,
                order.cc_number,
                order.cc_expiration,
                order.cc_cvv,
                order.placed_at,
            ],
        )?;
        let order_id = tx.last_insert_rowid();
        order.id = Some(order_id);

        for (order_key, taco) in order.tacos.iter_mut().enumerate() {
            taco.created_at = Some(Utc::now());
            tx.execute(
                "INSERT INTO taco (name, created_at, taco_order, taco_order_key) \
                 VALUES (?1, ?2, ?3, ?4)",
                params![taco.name, taco.created_at, order_id, order_key as i64],
            )?;
            let taco_id = tx.last_insert_rowid();
            taco.id = Some(taco_id);

            for (taco_key, ingredient_ref) in taco.ingredients.iter().enumerate() {
                tx.execute(
                    "INSERT INTO ingredient_ref (ingredient, taco, taco_key) \
                     VALUES (?1, ?2, ?3)",
                    params![ingredient_ref.ingredient, taco_id, taco_key as i64],
                )?;
            }
        }

        tx.commit()?;
        Ok(order)
    }

    /// Reconstructs the full aggregate for an order id, or `None` when the
    /// id matches no row. A match count other than exactly one is treated
    /// the same as absence.
    pub fn find_by_id(&self, id: i64) -> Result<Option<TacoOrder>, ApiError> {
        let conn = self.db.open()?;

        let mut stmt = conn.prepare(
            "SELECT delivery_name, delivery_street, delivery_city, delivery_state, \
             delivery_zip, cc_number, cc_expiration, cc_cvv, placed_at \
             FROM taco_order WHERE id = ?1",
        )?;
        let mut orders = stmt
            .query_map(params![id], |row| {
                Ok(TacoOrder {
                    id: Some(id),
                    delivery_name: row.get("delivery_name")?,
                    delivery_street: row.get("delivery_street")?,
                    delivery_city: row.get("delivery_city")?,
                    delivery_state: row.get("delivery_state")?,
                    delivery_zip: row.get("delivery_zip")?,
                    cc_number: row.get("cc_number")?,
                    cc_expiration: row.get("cc_expiration")?,
                    cc_cvv: row.get("cc_cvv")?,
                    placed_at: Some(row.get("placed_at")?),
                    tacos: Vec::new(),
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        if orders.len() != 1 {
            return Ok(None);
        }
        let mut order = orders.remove(0);
        order.tacos = find_tacos(&conn, id)?;
        Ok(Some(order))
    }
}

/// Tacos of one order, sorted by their stored position.
fn find_tacos(conn: &Connection, order_id: i64) -> Result<Vec<Taco>, ApiError> {
    let mut stmt = conn.prepare(
        "SELECT id, name, created_at FROM taco \
         WHERE taco_order = ?1 ORDER BY taco_order_key",
    )?;
    let mut tacos = stmt
        .query_map(params![order_id], |row| {
            Ok(Taco {
                id: Some(row.get("id")?),
                name: row.get("name")?,
                created_at: Some(row.get("created_at")?),
                ingredients: Vec::new(),
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;

    for taco in &mut tacos {
        if let Some(taco_id) = taco.id {
            taco.ingredients = find_ingredient_refs(conn, taco_id)?;
        }
    }
    Ok(tacos)
}

/// Ingredient references of one taco, sorted by their stored position.
fn find_ingredient_refs(conn: &Connection, taco_id: i64) -> Result<Vec<IngredientRef>, ApiError> {
    let mut stmt = conn.prepare(
        "SELECT ingredient FROM ingredient_ref WHERE taco = ?1 ORDER BY taco_key",
    )?;
    let refs = stmt
        .query_map(params![taco_id], |row| {
            Ok(IngredientRef {
                ingredient: row.get("ingredient")?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(refs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_support::fresh_database;
    use crate::services::ingredients::repository::IngredientRepository;

    fn seeded_repo() -> (OrderRepository, tempfile::NamedTempFile) {
        let (db, file) = fresh_database();
        IngredientRepository::new(db.clone())
            .seed_catalog()
            .expect("seed catalog");
        (OrderRepository::new(db), file)
    }

    fn taco(name: &str, ingredients: &[&str]) -> Taco {
        Taco {
            id: None,
            created_at: None,
            name: name.to_string(),
            ingredients: ingredients.iter().map(|code| IngredientRef::new(*code)).collect(),
        }
    }

    fn ada_order(tacos: Vec<Taco>) -> TacoOrder {
        TacoOrder {
            delivery_name: "Ada Lovelace".into(),
            delivery_street: "12 Analytical Way".into(),
            delivery_city: "London".into(),
            delivery_state: "LN".into(),
            delivery_zip: "12345".into(),
            cc_number: "4111111111111111".into(),
            cc_expiration: "10/28".into(),
            cc_cvv: "123".into(),
            tacos,
            ..TacoOrder::default()
        }
    }

    #[test]
    fn save_populates_ids_and_timestamps() {
        let (repo, _file) = seeded_repo();
        let saved = repo
            .save(ada_order(vec![taco("Veggie Taco", &["FLTO", "LETC", "CHED"])]))
            .expect("save");

        assert!(saved.id.is_some());
        assert!(saved.placed_at.is_some());
        assert!(saved.tacos[0].id.is_some());
        assert!(saved.tacos[0].created_at.is_some());
    }

    #[test]
    fn ingredient_sequence_round_trips_exactly() {
        let (repo, _file) = seeded_repo();
        let saved = repo
            .save(ada_order(vec![taco("Veggie Taco", &["FLTO", "LETC", "CHED"])]))
            .expect("save");

        let loaded = repo
            .find_by_id(saved.id.expect("generated id"))
            .expect("query")
            .expect("present");

        assert_eq!(loaded.delivery_name, "Ada Lovelace");
        assert_eq!(loaded.tacos.len(), 1);
        let codes: Vec<&str> = loaded.tacos[0]
            .ingredients
            .iter()
            .map(|r| r.ingredient.as_str())
            .collect();
        assert_eq!(codes, vec!["FLTO", "LETC", "CHED"]);
    }

    #[test]
    fn taco_sequence_round_trips_in_submission_order() {
        let (repo, _file) = seeded_repo();
        // Names chosen so alphabetical order would differ from submission order.
        let saved = repo
            .save(ada_order(vec![
                taco("Taco B", &["COTO", "GRBF"]),
                taco("Taco A", &["FLTO", "CARN", "SLSA"]),
            ]))
            .expect("save");

        let loaded = repo
            .find_by_id(saved.id.expect("generated id"))
            .expect("query")
            .expect("present");

        let names: Vec<&str> = loaded.tacos.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Taco B", "Taco A"]);
    }

    #[test]
    fn absent_id_is_an_explicit_empty_result() {
        let (repo, _file) = seeded_repo();
        assert!(repo.find_by_id(9999).expect("query").is_none());
    }

    #[test]
    fn mid_aggregate_failure_rolls_back_every_row() {
        let (repo, file) = seeded_repo();
        // The second taco references a code missing from the catalog; with
        // foreign keys on, its ingredient_ref insert fails after the order
        // row and the first taco have already been written.
        let result = repo.save(ada_order(vec![
            taco("Taco A", &["FLTO", "LETC"]),
            taco("Taco B", &["ZZZZ"]),
        ]));
        assert!(matches!(result, Err(ApiError::Storage(_))));

        let db = Database::new(file.path());
        let conn = db.open().expect("open");
        for table in ["taco_order", "taco", "ingredient_ref"] {
            let count: i64 = conn
                .query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| row.get(0))
                .expect("count");
            assert_eq!(count, 0, "expected zero rows in {table} after rollback");
        }
    }
}
