//! # Order Service
//!
//! Persistence and retrieval of complete order aggregates: an order with its
//! ordered tacos, each with its ordered ingredient references. The
//! multi-table write sequence lives in `repository` and runs inside a single
//! SQLite transaction.
//!
//! The provided routes are:
//! - `POST /api/orders`: validates a caller-supplied aggregate and persists
//!   it. Responds `201` with the aggregate, now carrying generated ids and
//!   server-assigned timestamps, or `422` with the violation list.
//! - `GET /api/orders/{order_id}`: reconstructs the aggregate, tacos and
//!   ingredient references in their original sequence, or responds `404`.

use actix_web::web::{get, post, scope};
use actix_web::Scope;

mod get_one;
pub mod repository;
mod submit;

const API_PATH: &str = "/api/orders";

/// Configures and returns the Actix scope for the order routes.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", post().to(submit::process))
        .route("/{order_id}", get().to(get_one::process))
}

#[cfg(test)]
mod http_tests {
    use actix_web::{test, web, App};
    use common::model::order::TacoOrder;
    use common::model::taco::{IngredientRef, Taco};

    use crate::db::test_support::fresh_database;
    use crate::services::ingredients::repository::IngredientRepository;

    fn veggie_order() -> TacoOrder {
        let mut taco = Taco::new("Veggie Taco");
        taco.ingredients.push(IngredientRef::new("FLTO"));
        taco.ingredients.push(IngredientRef::new("LETC"));
        taco.ingredients.push(IngredientRef::new("CHED"));

        let mut order = TacoOrder {
            delivery_name: "Ada Lovelace".into(),
            delivery_street: "12 Analytical Way".into(),
            delivery_city: "London".into(),
            delivery_state: "LN".into(),
            delivery_zip: "12345".into(),
            cc_number: "4111111111111111".into(),
            cc_expiration: "10/28".into(),
            cc_cvv: "123".into(),
            ..TacoOrder::default()
        };
        order.add_taco(taco);
        order
    }

    #[actix_web::test]
    async fn submit_then_retrieve_preserves_ingredient_order() {
        let (db, _file) = fresh_database();
        IngredientRepository::new(db.clone()).seed_catalog().expect("seed");
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(db))
                .service(super::configure_routes()),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/orders")
            .set_json(veggie_order())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 201);
        let saved: TacoOrder = test::read_body_json(resp).await;
        let id = saved.id.expect("generated id");

        let req = test::TestRequest::get()
            .uri(&format!("/api/orders/{id}"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
        let loaded: TacoOrder = test::read_body_json(resp).await;
        let codes: Vec<&str> = loaded.tacos[0]
            .ingredients
            .iter()
            .map(|r| r.ingredient.as_str())
            .collect();
        assert_eq!(codes, vec!["FLTO", "LETC", "CHED"]);
    }

    #[actix_web::test]
    async fn invalid_order_is_422_and_missing_order_is_404() {
        let (db, _file) = fresh_database();
        IngredientRepository::new(db.clone()).seed_catalog().expect("seed");
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(db))
                .service(super::configure_routes()),
        )
        .await;

        let mut invalid = veggie_order();
        invalid.tacos.clear();
        let req = test::TestRequest::post()
            .uri("/api/orders")
            .set_json(invalid)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 422);

        let req = test::TestRequest::get().uri("/api/orders/9999").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);
    }
}
