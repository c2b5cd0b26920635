//! # Run Service
//!
//! A running log. The storage behind it is swappable: the `RunRepository`
//! trait has an in-memory implementation and a SQLite one, selected by the
//! `RUNS_BACKEND` configuration at startup and injected as trait-object app
//! data. Run identifiers are caller-supplied, not generated.
//!
//! The provided routes are:
//! - `GET /api/runs`: every run.
//! - `GET /api/runs/search?location=INDOOR`: runs filtered by location.
//! - `GET /api/runs/{run_id}`: one run or `404`.
//! - `POST /api/runs`: validates and creates a run, `201`.
//! - `PUT /api/runs/{run_id}`: validates and replaces a run, `204` or `404`.
//! - `DELETE /api/runs/{run_id}`: `204` or `404`.

use actix_web::web::{delete, get, post, put, scope};
use actix_web::Scope;

mod handlers;
pub mod repository;

const API_PATH: &str = "/api/runs";

/// Configures and returns the Actix scope for the run routes.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(handlers::list))
        .route("", post().to(handlers::create))
        .route("/search", get().to(handlers::search))
        .route("/{run_id}", get().to(handlers::get_one))
        .route("/{run_id}", put().to(handlers::update))
        .route("/{run_id}", delete().to(handlers::delete_one))
}
