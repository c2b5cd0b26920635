use std::env;

use log::warn;

/// Which backing store the runs service uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunsBackend {
    /// Mutex-guarded in-memory list, lost on restart.
    Memory,
    /// The shared SQLite database.
    Sqlite,
}

/// Server configuration, loaded once at startup from environment variables.
/// Every value has a default so the server starts with no environment at all.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Path of the SQLite database file.
    pub database_path: String,
    pub runs_backend: RunsBackend,
}

impl AppConfig {
    pub fn load() -> Self {
        Self {
            host: var_or("HOST", "127.0.0.1"),
            port: var_or("PORT", "8080").parse().unwrap_or_else(|e| {
                warn!("Invalid PORT value ({e}), falling back to 8080");
                8080
            }),
            database_path: var_or("DATABASE_PATH", "tacocloud.sqlite"),
            runs_backend: match var_or("RUNS_BACKEND", "sqlite").as_str() {
                "memory" => RunsBackend::Memory,
                "sqlite" => RunsBackend::Sqlite,
                other => {
                    warn!("Unknown RUNS_BACKEND '{other}', falling back to sqlite");
                    RunsBackend::Sqlite
                }
            },
        }
    }
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
