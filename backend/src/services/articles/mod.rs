//! # Article Service
//!
//! CRUD over the `article` table. Unlike the tutorial service, handlers go
//! through an intermediate `ArticleService` that delegates to the repository
//! 1:1 — the layer carries no logic of its own but keeps the handlers
//! ignorant of the storage type.
//!
//! The provided routes are:
//! - `GET /api/articles[?title=...]`: all articles or a title substring
//!   search (`204` when empty).
//! - `GET /api/articles/published`: only published articles (`204` when none).
//! - `GET /api/articles/{article_id}`: one article or `404`.
//! - `POST /api/articles`: creates an article, `201`.
//! - `PUT /api/articles/{article_id}`: full update or `404`.
//! - `DELETE /api/articles/{article_id}`: `204` on delete, `404` otherwise.
//! - `DELETE /api/articles`: clears the table, `204`.

use actix_web::web::{delete, get, post, put, scope};
use actix_web::Scope;

mod handlers;
pub mod repository;
pub mod service;

const API_PATH: &str = "/api/articles";

/// Configures and returns the Actix scope for the article routes.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(handlers::list))
        .route("", post().to(handlers::create))
        .route("", delete().to(handlers::delete_all))
        .route("/published", get().to(handlers::published))
        .route("/{article_id}", get().to(handlers::get_one))
        .route("/{article_id}", put().to(handlers::update))
        .route("/{article_id}", delete().to(handlers::delete_one))
}
