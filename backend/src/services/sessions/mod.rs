//! # Ordering Session Service
//!
//! Accumulates an order across requests: a client opens a session, adds
//! tacos one at a time, fills in delivery and payment details, and finally
//! submits. The in-progress order lives in the server-side `SessionStore`
//! (see `crate::session`) keyed by a generated session id; nothing touches
//! the database until the submit.
//!
//! The provided routes are:
//! - `POST /api/sessions`: opens a session, returns `{ "session_id": ... }`.
//! - `POST /api/sessions/{session_id}/tacos`: validates the taco and appends
//!   it to the in-progress order. `422` with violations, `404` for an
//!   unknown session.
//! - `GET /api/sessions/{session_id}/order`: snapshot of the in-progress
//!   order.
//! - `PUT /api/sessions/{session_id}/order`: sets delivery/payment fields,
//!   keeping the accumulated tacos.
//! - `POST /api/sessions/{session_id}/submit`: validates the whole
//!   aggregate, persists it, and closes the session. The session survives a
//!   failed submit so the client can correct and retry.

use actix_web::web::{get, post, put, scope};
use actix_web::Scope;

mod add_taco;
mod current;
mod details;
mod start;
mod submit;

const API_PATH: &str = "/api/sessions";

/// Configures and returns the Actix scope for the ordering session routes.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", post().to(start::process))
        .route("/{session_id}/tacos", post().to(add_taco::process))
        .route("/{session_id}/order", get().to(current::process))
        .route("/{session_id}/order", put().to(details::process))
        .route("/{session_id}/submit", post().to(submit::process))
}
