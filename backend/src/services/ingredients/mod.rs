//! # Ingredient Catalog Service
//!
//! Read-only HTTP surface over the ingredient catalog. The catalog is seeded
//! at startup (see `repository::IngredientRepository::seed_catalog`) and
//! referenced by taco designs through ingredient codes.
//!
//! The provided routes are:
//! - `GET /api/ingredients`: returns the full catalog.
//! - `GET /api/ingredients/{ingredient_id}`: returns a single ingredient by
//!   its code, or `404` when no such code exists.

use actix_web::web::{get, scope};
use actix_web::Scope;

mod get_one;
mod list;
pub mod repository;

const API_PATH: &str = "/api/ingredients";

/// Configures and returns the Actix scope for the ingredient catalog routes.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(list::process))
        .route("/{ingredient_id}", get().to(get_one::process))
}
