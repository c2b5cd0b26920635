use actix_web::{web, HttpResponse};
use log::info;

use crate::db::Database;
use crate::error::ApiError;
use crate::services::orders::repository::OrderRepository;
use crate::session::SessionStore;
use crate::validation::validate_order;

/// Handler for `POST /api/sessions/{session_id}/submit`.
///
/// Finalize-and-clear: validates the accumulated aggregate, persists it
/// through the transactional order repository, and closes the session. The
/// session entry is removed only after the save succeeds; a validation or
/// storage failure leaves it untouched for a retry.
pub async fn process(
    sessions: web::Data<SessionStore>,
    db: web::Data<Database>,
    session_id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let order = sessions
        .current(&session_id)
        .await
        .ok_or(ApiError::NotFound("session"))?;

    let violations = validate_order(&order);
    if !violations.is_empty() {
        return Err(ApiError::Validation(violations));
    }

    let saved = OrderRepository::new(db.get_ref().clone()).save(order)?;
    sessions.close(&session_id).await;
    info!(
        "Session {session_id} submitted as order {}",
        saved.id.unwrap_or_default()
    );
    Ok(HttpResponse::Created().json(saved))
}
