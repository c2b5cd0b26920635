use actix_web::{web, HttpResponse};
use common::requests::SessionOpened;
use log::info;

use crate::error::ApiError;
use crate::session::SessionStore;

/// Handler for `POST /api/sessions`: opens a fresh ordering session with an
/// empty order and returns its id.
pub async fn process(sessions: web::Data<SessionStore>) -> Result<HttpResponse, ApiError> {
    let session_id = sessions.open().await;
    info!("Opened ordering session {session_id}");
    Ok(HttpResponse::Created().json(SessionOpened { session_id }))
}
