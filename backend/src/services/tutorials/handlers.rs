use actix_web::{web, HttpResponse};
use common::model::tutorial::Tutorial;
use common::requests::TitleFilter;

use super::repository::TutorialRepository;
use crate::db::Database;
use crate::error::ApiError;

fn repo(db: &web::Data<Database>) -> TutorialRepository {
    TutorialRepository::new(db.get_ref().clone())
}

/// Empty result sets answer 204 rather than an empty JSON array, mirroring
/// the listing endpoints' contract.
fn list_response(tutorials: Vec<Tutorial>) -> HttpResponse {
    if tutorials.is_empty() {
        HttpResponse::NoContent().finish()
    } else {
        HttpResponse::Ok().json(tutorials)
    }
}

/// `GET /api/tutorials[?title=...]`
pub async fn list(
    db: web::Data<Database>,
    filter: web::Query<TitleFilter>,
) -> Result<HttpResponse, ApiError> {
    let tutorials = match &filter.title {
        Some(title) => repo(&db).find_by_title_containing(title)?,
        None => repo(&db).find_all()?,
    };
    Ok(list_response(tutorials))
}

/// `GET /api/tutorials/published`
pub async fn published(db: web::Data<Database>) -> Result<HttpResponse, ApiError> {
    Ok(list_response(repo(&db).find_by_published(true)?))
}

/// `GET /api/tutorials/{tutorial_id}`
pub async fn get_one(
    db: web::Data<Database>,
    tutorial_id: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    match repo(&db).find_by_id(*tutorial_id)? {
        Some(tutorial) => Ok(HttpResponse::Ok().json(tutorial)),
        None => Err(ApiError::NotFound("tutorial")),
    }
}

/// `POST /api/tutorials` — the published flag of the payload is ignored;
/// new entries always start as drafts.
pub async fn create(
    db: web::Data<Database>,
    payload: web::Json<Tutorial>,
) -> Result<HttpResponse, ApiError> {
    let created = repo(&db).create(&payload.title, &payload.description)?;
    Ok(HttpResponse::Created().json(created))
}

/// `PUT /api/tutorials/{tutorial_id}`
pub async fn update(
    db: web::Data<Database>,
    tutorial_id: web::Path<i64>,
    payload: web::Json<Tutorial>,
) -> Result<HttpResponse, ApiError> {
    match repo(&db).update(*tutorial_id, &payload)? {
        Some(updated) => Ok(HttpResponse::Ok().json(updated)),
        None => Err(ApiError::NotFound("tutorial")),
    }
}

/// `DELETE /api/tutorials/{tutorial_id}`
pub async fn delete_one(
    db: web::Data<Database>,
    tutorial_id: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    if repo(&db).delete_by_id(*tutorial_id)? {
        Ok(HttpResponse::NoContent().finish())
    } else {
        Err(ApiError::NotFound("tutorial"))
    }
}

/// `DELETE /api/tutorials`
pub async fn delete_all(db: web::Data<Database>) -> Result<HttpResponse, ApiError> {
    repo(&db).delete_all()?;
    Ok(HttpResponse::NoContent().finish())
}
