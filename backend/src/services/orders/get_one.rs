use actix_web::{web, HttpResponse};

use super::repository::OrderRepository;
use crate::db::Database;
use crate::error::ApiError;

/// Handler for `GET /api/orders/{order_id}`: the reconstructed aggregate as
/// JSON, or `404` when the id matches nothing.
pub async fn process(
    db: web::Data<Database>,
    order_id: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let repo = OrderRepository::new(db.get_ref().clone());
    match repo.find_by_id(*order_id)? {
        Some(order) => Ok(HttpResponse::Ok().json(order)),
        None => Err(ApiError::NotFound("order")),
    }
}
