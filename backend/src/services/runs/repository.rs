//! Run storage behind a trait, with an in-memory variant and a SQLite
//! variant. Both report a missing id as `ApiError::NotFound` from `update`
//! and `delete`, so the handlers need no per-backend handling.

use std::sync::Mutex;

use common::model::run::{Location, Run};
use rusqlite::types::Type;
use rusqlite::{params, OptionalExtension, Row};

use crate::db::Database;
use crate::error::ApiError;

pub trait RunRepository: Send + Sync {
    fn find_all(&self) -> Result<Vec<Run>, ApiError>;
    fn find_by_id(&self, id: i32) -> Result<Option<Run>, ApiError>;
    fn find_by_location(&self, location: Location) -> Result<Vec<Run>, ApiError>;
    fn create(&self, run: &Run) -> Result<(), ApiError>;
    fn update(&self, id: i32, run: &Run) -> Result<(), ApiError>;
    fn delete(&self, id: i32) -> Result<(), ApiError>;
    fn count(&self) -> Result<usize, ApiError>;
}

/// Mutex-guarded in-memory list. State is lost on restart; useful for demos
/// and tests.
#[derive(Default)]
pub struct InMemoryRunRepository {
    runs: Mutex<Vec<Run>>,
}

impl RunRepository for InMemoryRunRepository {
    fn find_all(&self) -> Result<Vec<Run>, ApiError> {
        Ok(self.runs.lock().unwrap_or_else(|e| e.into_inner()).clone())
    }

    fn find_by_id(&self, id: i32) -> Result<Option<Run>, ApiError> {
        let runs = self.runs.lock().unwrap_or_else(|e| e.into_inner());
        Ok(runs.iter().find(|run| run.id == id).cloned())
    }

    fn find_by_location(&self, location: Location) -> Result<Vec<Run>, ApiError> {
        let runs = self.runs.lock().unwrap_or_else(|e| e.into_inner());
        Ok(runs.iter().filter(|run| run.location == location).cloned().collect())
    }

    fn create(&self, run: &Run) -> Result<(), ApiError> {
        let mut runs = self.runs.lock().unwrap_or_else(|e| e.into_inner());
        runs.push(run.clone());
        Ok(())
    }

    fn update(&self, id: i32, run: &Run) -> Result<(), ApiError> {
        let mut runs = self.runs.lock().unwrap_or_else(|e| e.into_inner());
        match runs.iter_mut().find(|existing| existing.id == id) {
            Some(existing) => {
                *existing = Run { id, ..run.clone() };
                Ok(())
            }
            None => Err(ApiError::NotFound("run")),
        }
    }

    fn delete(&self, id: i32) -> Result<(), ApiError> {
        let mut runs = self.runs.lock().unwrap_or_else(|e| e.into_inner());
        let before = runs.len();
        runs.retain(|run| run.id != id);
        if runs.len() == before {
            return Err(ApiError::NotFound("run"));
        }
        Ok(())
    }

    fn count(&self) -> Result<usize, ApiError> {
        Ok(self.runs.lock().unwrap_or_else(|e| e.into_inner()).len())
    }
}

/// SQLite-backed variant over the `run` table.
pub struct SqliteRunRepository {
    db: Database,
}

impl SqliteRunRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

impl RunRepository for SqliteRunRepository {
    fn find_all(&self) -> Result<Vec<Run>, ApiError> {
        let conn = self.db.open()?;
        let mut stmt = conn.prepare(
            "SELECT id, title, started_on, completed_on, miles, location FROM run ORDER BY id",
        )?;
        let runs = stmt.query_map([], map_run)?.collect::<Result<Vec<_>, _>>()?;
        Ok(runs)
    }

    fn find_by_id(&self, id: i32) -> Result<Option<Run>, ApiError> {
        let conn = self.db.open()?;
        let run = conn
            .query_row(
                "SELECT id, title, started_on, completed_on, miles, location \
                 FROM run WHERE id = ?1",
                params![id],
                map_run,
            )
            .optional()?;
        Ok(run)
    }

    fn find_by_location(&self, location: Location) -> Result<Vec<Run>, ApiError> {
        let conn = self.db.open()?;
        let mut stmt = conn.prepare(
            "SELECT id, title, started_on, completed_on, miles, location \
             FROM run WHERE location = ?1 ORDER BY id",
        )?;
        let runs = stmt
            .query_map(params![location.as_code()], map_run)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(runs)
    }

    fn create(&self, run: &Run) -> Result<(), ApiError> {
        let conn = self.db.open()?;
        conn.execute(
            "INSERT INTO run (id, title, started_on, completed_on, miles, location) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                run.id,
                run.title,
                run.started_on,
                run.completed_on,
                run.miles,
                run.location.as_code(),
            ],
        )?;
        Ok(())
    }

    fn update(&self, id: i32, run: &Run) -> Result<(), ApiError> {
        let conn = self.db.open()?;
        let updated = conn.execute(
            "UPDATE run SET title = ?1, started_on = ?2, completed_on = ?3, \
             miles = ?4, location = ?5 WHERE id = ?6",
            params![
                run.title,
                run.started_on,
                run.completed_on,
                run.miles,
                run.location.as_code(),
                id,
            ],
        )?;
        if updated == 0 {
            return Err(ApiError::NotFound("run"));
        }
        Ok(())
    }

    fn delete(&self, id: i32) -> Result<(), ApiError> {
        let conn = self.db.open()?;
        let deleted = conn.execute("DELETE FROM run WHERE id = ?1", params![id])?;
        if deleted == 0 {
            return Err(ApiError::NotFound("run"));
        }
        Ok(())
    }

    fn count(&self) -> Result<usize, ApiError> {
        let conn = self.db.open()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM run", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

fn map_run(row: &Row<'_>) -> rusqlite::Result<Run> {
    let code: String = row.get("location")?;
    let location = Location::from_code(&code).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            5,
            Type::Text,
            format!("unknown location '{code}'").into(),
        )
    })?;
    Ok(Run {
        id: row.get("id")?,
        title: row.get("title")?,
        started_on: row.get("started_on")?,
        completed_on: row.get("completed_on")?,
        miles: row.get("miles")?,
        location,
    })
}
