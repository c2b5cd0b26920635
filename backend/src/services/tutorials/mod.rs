//! # Tutorial Service
//!
//! Plain CRUD over the `tutorial` table.
//!
//! The provided routes are:
//! - `GET /api/tutorials`: all tutorials, or a `?title=` substring search.
//!   Responds `204` when nothing matches.
//! - `GET /api/tutorials/published`: only published entries (`204` when none).
//! - `GET /api/tutorials/{tutorial_id}`: one entry or `404`.
//! - `POST /api/tutorials`: creates an entry; new entries always start
//!   unpublished regardless of the payload. Responds `201`.
//! - `PUT /api/tutorials/{tutorial_id}`: full update of title, description
//!   and published flag; `404` for an unknown id.
//! - `DELETE /api/tutorials/{tutorial_id}`: `204` on delete, `404` when
//!   nothing was there.
//! - `DELETE /api/tutorials`: clears the table, `204`.

use actix_web::web::{delete, get, post, put, scope};
use actix_web::Scope;

mod handlers;
pub mod repository;

const API_PATH: &str = "/api/tutorials";

/// Configures and returns the Actix scope for the tutorial routes.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(handlers::list))
        .route("", post().to(handlers::create))
        .route("", delete().to(handlers::delete_all))
        .route("/published", get().to(handlers::published))
        .route("/{tutorial_id}", get().to(handlers::get_one))
        .route("/{tutorial_id}", put().to(handlers::update))
        .route("/{tutorial_id}", delete().to(handlers::delete_one))
}

#[cfg(test)]
mod http_tests {
    use actix_web::{test, web, App};
    use common::model::tutorial::Tutorial;

    use crate::db::test_support::fresh_database;

    #[actix_web::test]
    async fn crud_cycle_over_http() {
        let (db, _file) = fresh_database();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(db))
                .service(super::configure_routes()),
        )
        .await;

        // Empty table answers 204, not an empty array.
        let resp = test::call_service(
            &app,
            test::TestRequest::get().uri("/api/tutorials").to_request(),
        )
        .await;
        assert_eq!(resp.status(), 204);

        // Create ignores the payload's published flag.
        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/tutorials")
                .set_json(Tutorial {
                    id: None,
                    title: "Rust Basics".into(),
                    description: "Ownership and borrowing".into(),
                    published: true,
                })
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), 201);
        let created: Tutorial = test::read_body_json(resp).await;
        assert!(!created.published);
        let id = created.id.expect("generated id");

        // Publish through a full update, then find it under /published.
        let resp = test::call_service(
            &app,
            test::TestRequest::put()
                .uri(&format!("/api/tutorials/{id}"))
                .set_json(Tutorial {
                    published: true,
                    ..created.clone()
                })
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), 200);
        let resp = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/api/tutorials/published")
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), 200);

        // Title search hits, then a delete leaves a 404 behind.
        let resp = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/api/tutorials?title=Rust")
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), 200);

        let resp = test::call_service(
            &app,
            test::TestRequest::delete()
                .uri(&format!("/api/tutorials/{id}"))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), 204);
        let resp = test::call_service(
            &app,
            test::TestRequest::get()
                .uri(&format!("/api/tutorials/{id}"))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), 404);
    }
}
