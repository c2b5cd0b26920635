use actix_web::{web, HttpResponse};
use common::model::order::TacoOrder;
use log::info;

use super::repository::OrderRepository;
use crate::db::Database;
use crate::error::ApiError;
use crate::validation::validate_order;

/// Handler for `POST /api/orders`: validates the aggregate and persists it.
///
/// Validation happens entirely before the first write, so a rejected order
/// leaves no rows behind. On success the response carries the aggregate with
/// ids and timestamps assigned.
pub async fn process(
    db: web::Data<Database>,
    payload: web::Json<TacoOrder>,
) -> Result<HttpResponse, ApiError> {
    let order = payload.into_inner();

    let violations = validate_order(&order);
    if !violations.is_empty() {
        return Err(ApiError::Validation(violations));
    }

    let saved = OrderRepository::new(db.get_ref().clone()).save(order)?;
    info!(
        "Order {} placed with {} taco(s)",
        saved.id.unwrap_or_default(),
        saved.tacos.len()
    );
    Ok(HttpResponse::Created().json(saved))
}
