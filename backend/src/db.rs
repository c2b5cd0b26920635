//! SQLite access shared by every repository.
//!
//! `Database` owns the database path only; each repository call opens its own
//! connection, so the handle is freely clonable across worker threads without
//! any locking of its own. Foreign-key enforcement is switched on per
//! connection (SQLite leaves it off by default), which is what makes the
//! order-aggregate rollback property observable under constraint violations.

use std::path::PathBuf;

use rusqlite::Connection;

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS ingredient (
    id   TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    type TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS taco_order (
    id              INTEGER PRIMARY KEY AUTOINCREMENT,
    delivery_name   TEXT NOT NULL,
    delivery_street TEXT NOT NULL,
    delivery_city   TEXT NOT NULL,
    delivery_state  TEXT NOT NULL,
    delivery_zip    TEXT NOT NULL,
    cc_number       TEXT NOT NULL,
    cc_expiration   TEXT NOT NULL,
    cc_cvv          TEXT NOT NULL,
    placed_at       TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS taco (
    id             INTEGER PRIMARY KEY AUTOINCREMENT,
    name           TEXT NOT NULL,
    created_at     TEXT NOT NULL,
    taco_order     INTEGER NOT NULL REFERENCES taco_order(id),
    taco_order_key INTEGER NOT NULL
);

CREATE TABLE IF NOT EXISTS ingredient_ref (
    ingredient TEXT NOT NULL REFERENCES ingredient(id),
    taco       INTEGER NOT NULL REFERENCES taco(id),
    taco_key   INTEGER NOT NULL
);

CREATE TABLE IF NOT EXISTS tutorial (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    title       TEXT NOT NULL,
    description TEXT NOT NULL,
    published   INTEGER NOT NULL DEFAULT 0
);

CREATE TABLE IF NOT EXISTS article (
    id        INTEGER PRIMARY KEY AUTOINCREMENT,
    title     TEXT NOT NULL,
    content   TEXT NOT NULL,
    published INTEGER NOT NULL DEFAULT 0
);

CREATE TABLE IF NOT EXISTS run (
    id           INTEGER PRIMARY KEY,
    title        TEXT NOT NULL,
    started_on   TEXT NOT NULL,
    completed_on TEXT NOT NULL,
    miles        INTEGER NOT NULL,
    location     TEXT NOT NULL
);
";

/// Handle to the SQLite database file. Cheap to clone; connections are
/// opened per operation.
#[derive(Debug, Clone)]
pub struct Database {
    path: PathBuf,
}

impl Database {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Opens a connection with foreign keys enforced.
    pub fn open(&self) -> Result<Connection, rusqlite::Error> {
        let conn = Connection::open(&self.path)?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        Ok(conn)
    }

    /// Creates all tables if they do not exist yet. Called once at startup.
    pub fn init_schema(&self) -> Result<(), rusqlite::Error> {
        self.open()?.execute_batch(SCHEMA)
    }
}

#[cfg(test)]
pub mod test_support {
    use super::Database;
    use tempfile::NamedTempFile;

    /// A fresh on-disk database with the schema applied. The temp file is
    /// returned alongside so it lives as long as the test needs it.
    pub fn fresh_database() -> (Database, NamedTempFile) {
        let file = NamedTempFile::new().expect("temp database file");
        let db = Database::new(file.path());
        db.init_schema().expect("init schema");
        (db, file)
    }
}
