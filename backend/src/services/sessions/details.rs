use actix_web::{web, HttpResponse};
use common::requests::OrderDetails;

use crate::error::ApiError;
use crate::session::SessionStore;

/// Handler for `PUT /api/sessions/{session_id}/order`: sets the delivery and
/// payment fields of the in-progress order. Accumulated tacos are kept.
///
/// The fields are validated only at submit time, so a client can save a
/// half-filled form.
pub async fn process(
    sessions: web::Data<SessionStore>,
    session_id: web::Path<String>,
    payload: web::Json<OrderDetails>,
) -> Result<HttpResponse, ApiError> {
    match sessions.set_details(&session_id, payload.into_inner()).await {
        Some(order) => Ok(HttpResponse::Ok().json(order)),
        None => Err(ApiError::NotFound("session")),
    }
}
