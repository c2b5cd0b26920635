use actix_web::{web, HttpResponse};
use common::model::taco::Taco;

use crate::error::ApiError;
use crate::session::SessionStore;
use crate::validation::validate_taco;

/// Handler for `POST /api/sessions/{session_id}/tacos`.
///
/// Validates the taco (name length, at least one ingredient) and appends it
/// to the session's in-progress order. Responds with the updated order.
pub async fn process(
    sessions: web::Data<SessionStore>,
    session_id: web::Path<String>,
    payload: web::Json<Taco>,
) -> Result<HttpResponse, ApiError> {
    let taco = payload.into_inner();

    let violations = validate_taco(&taco);
    if !violations.is_empty() {
        return Err(ApiError::Validation(violations));
    }

    match sessions.add_taco(&session_id, taco).await {
        Some(order) => Ok(HttpResponse::Ok().json(order)),
        None => Err(ApiError::NotFound("session")),
    }
}
