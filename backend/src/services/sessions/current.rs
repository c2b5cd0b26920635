use actix_web::{web, HttpResponse};

use crate::error::ApiError;
use crate::session::SessionStore;

/// Handler for `GET /api/sessions/{session_id}/order`: a snapshot of the
/// in-progress order.
pub async fn process(
    sessions: web::Data<SessionStore>,
    session_id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    match sessions.current(&session_id).await {
        Some(order) => Ok(HttpResponse::Ok().json(order)),
        None => Err(ApiError::NotFound("session")),
    }
}
