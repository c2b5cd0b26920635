//! SQLite-backed tutorial repository. An explicit per-entity interface
//! exposing only the operations the controller uses; no generic CRUD
//! abstraction behind it.

use common::model::tutorial::Tutorial;
use rusqlite::{params, OptionalExtension, Row};

use crate::db::Database;
use crate::error::ApiError;

pub struct TutorialRepository {
    db: Database,
}

impl TutorialRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub fn find_all(&self) -> Result<Vec<Tutorial>, ApiError> {
        let conn = self.db.open()?;
        let mut stmt =
            conn.prepare("SELECT id, title, description, published FROM tutorial ORDER BY id")?;
        let tutorials = stmt.query_map([], map_tutorial)?.collect::<Result<Vec<_>, _>>()?;
        Ok(tutorials)
    }

    pub fn find_by_title_containing(&self, title: &str) -> Result<Vec<Tutorial>, ApiError> {
        let conn = self.db.open()?;
        let mut stmt = conn.prepare(
            "SELECT id, title, description, published FROM tutorial \
             WHERE title LIKE '%' || ?1 || '%' ORDER BY id",
        )?;
        let tutorials = stmt
            .query_map(params![title], map_tutorial)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(tutorials)
    }

    pub fn find_by_published(&self, published: bool) -> Result<Vec<Tutorial>, ApiError> {
        let conn = self.db.open()?;
        let mut stmt = conn.prepare(
            "SELECT id, title, description, published FROM tutorial \
             WHERE published = ?1 ORDER BY id",
        )?;
        let tutorials = stmt
            .query_map(params![published], map_tutorial)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(tutorials)
    }

    pub fn find_by_id(&self, id: i64) -> Result<Option<Tutorial>, ApiError> {
        let conn = self.db.open()?;
        let tutorial = conn
            .query_row(
                "SELECT id, title, description, published FROM tutorial WHERE id = ?1",
                params![id],
                map_tutorial,
            )
            .optional()?;
        Ok(tutorial)
    }

    /// Inserts a new tutorial. New entries always start unpublished.
    pub fn create(&self, title: &str, description: &str) -> Result<Tutorial, ApiError> {
        let conn = self.db.open()?;
        conn.execute(
            "INSERT INTO tutorial (title, description, published) VALUES (?1, ?2, 0)",
            params![title, description],
        )?;
        Ok(Tutorial {
            id: Some(conn.last_insert_rowid()),
            title: title.to_string(),
            description: description.to_string(),
            published: false,
        })
    }

    /// Full update of one entry; `None` when the id matches nothing.
    pub fn update(&self, id: i64, tutorial: &Tutorial) -> Result<Option<Tutorial>, ApiError> {
        let conn = self.db.open()?;
        let updated = conn.execute(
            "UPDATE tutorial SET title = ?1, description = ?2, published = ?3 WHERE id = ?4",
            params![tutorial.title, tutorial.description, tutorial.published, id],
        )?;
        if updated == 0 {
            return Ok(None);
        }
        Ok(Some(Tutorial {
            id: Some(id),
            title: tutorial.title.clone(),
            description: tutorial.description.clone(),
            published: tutorial.published,
        }))
    }

    /// Returns whether a row was actually deleted.
    pub fn delete_by_id(&self, id: i64) -> Result<bool, ApiError> {
        let conn = self.db.open()?;
        let deleted = conn.execute("DELETE FROM tutorial WHERE id = ?1", params![id])?;
        Ok(deleted > 0)
    }

    pub fn delete_all(&self) -> Result<usize, ApiError> {
        let conn = self.db.open()?;
        Ok(conn.execute("DELETE FROM tutorial", [])?)
    }
}

fn map_tutorial(row: &Row<'_>) -> rusqlite::Result<Tutorial> {
    Ok(Tutorial {
        id: Some(row.get("id")?),
        title: row.get("title")?,
        description: row.get("description")?,
        published: row.get("published")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_support::fresh_database;

    #[test]
    fn create_starts_unpublished_and_assigns_an_id() {
        let (db, _file) = fresh_database();
        let repo = TutorialRepository::new(db);

        let created = repo.create("Rust Basics", "Ownership and borrowing").expect("create");
        assert!(created.id.is_some());
        assert!(!created.published);

        let loaded = repo
            .find_by_id(created.id.expect("id"))
            .expect("query")
            .expect("present");
        assert_eq!(loaded, created);
    }

    #[test]
    fn title_search_matches_substrings() {
        let (db, _file) = fresh_database();
        let repo = TutorialRepository::new(db);
        repo.create("Rust Basics", "a").expect("create");
        repo.create("Advanced Rust", "b").expect("create");
        repo.create("Spring Boot", "c").expect("create");

        let hits = repo.find_by_title_containing("Rust").expect("query");
        assert_eq!(hits.len(), 2);
        assert!(repo.find_by_title_containing("Kotlin").expect("query").is_empty());
    }

    #[test]
    fn update_flips_published_and_reports_missing_ids() {
        let (db, _file) = fresh_database();
        let repo = TutorialRepository::new(db);
        let created = repo.create("Rust Basics", "a").expect("create");
        let id = created.id.expect("id");

        let updated = repo
            .update(
                id,
                &Tutorial {
                    id: None,
                    title: "Rust Basics".into(),
                    description: "a".into(),
                    published: true,
                },
            )
            .expect("update")
            .expect("present");
        assert!(updated.published);
        assert_eq!(repo.find_by_published(true).expect("query").len(), 1);

        let missing = repo
            .update(
                9999,
                &Tutorial {
                    id: None,
                    title: "x".into(),
                    description: "y".into(),
                    published: false,
                },
            )
            .expect("update");
        assert!(missing.is_none());
    }

    #[test]
    fn delete_reports_whether_anything_was_there() {
        let (db, _file) = fresh_database();
        let repo = TutorialRepository::new(db);
        let created = repo.create("Rust Basics", "a").expect("create");

        assert!(repo.delete_by_id(created.id.expect("id")).expect("delete"));
        assert!(!repo.delete_by_id(9999).expect("delete"));
    }

    #[test]
    fn delete_all_clears_the_table() {
        let (db, _file) = fresh_database();
        let repo = TutorialRepository::new(db);
        repo.create("a", "a").expect("create");
        repo.create("b", "b").expect("create");

        assert_eq!(repo.delete_all().expect("delete all"), 2);
        assert!(repo.find_all().expect("query").is_empty());
    }
}
