use actix_web::{web, HttpResponse};
use common::model::run::{Location, Run};
use common::requests::LocationFilter;
use common::model::violation::Violation;

use super::repository::RunRepository;
use crate::error::ApiError;

/// `GET /api/runs`
pub async fn list(repo: web::Data<dyn RunRepository>) -> Result<HttpResponse, ApiError> {
    Ok(HttpResponse::Ok().json(repo.find_all()?))
}

/// `GET /api/runs/search?location=INDOOR`
pub async fn search(
    repo: web::Data<dyn RunRepository>,
    filter: web::Query<LocationFilter>,
) -> Result<HttpResponse, ApiError> {
    let location = Location::from_code(&filter.location).ok_or_else(|| {
        ApiError::Validation(vec![Violation::new(
            "location",
            "Location must be INDOOR or OUTDOOR",
        )])
    })?;
    Ok(HttpResponse::Ok().json(repo.find_by_location(location)?))
}

/// `GET /api/runs/{run_id}`
pub async fn get_one(
    repo: web::Data<dyn RunRepository>,
    run_id: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    match repo.find_by_id(*run_id)? {
        Some(run) => Ok(HttpResponse::Ok().json(run)),
        None => Err(ApiError::NotFound("run")),
    }
}

/// `POST /api/runs` — the id is caller-supplied, part of the payload.
pub async fn create(
    repo: web::Data<dyn RunRepository>,
    payload: web::Json<Run>,
) -> Result<HttpResponse, ApiError> {
    let run = payload.into_inner();
    let violations = crate::validation::validate_run(&run);
    if !violations.is_empty() {
        return Err(ApiError::Validation(violations));
    }
    repo.create(&run)?;
    Ok(HttpResponse::Created().json(run))
}

/// `PUT /api/runs/{run_id}`
pub async fn update(
    repo: web::Data<dyn RunRepository>,
    run_id: web::Path<i32>,
    payload: web::Json<Run>,
) -> Result<HttpResponse, ApiError> {
    let run = payload.into_inner();
    let violations = crate::validation::validate_run(&run);
    if !violations.is_empty() {
        return Err(ApiError::Validation(violations));
    }
    repo.update(*run_id, &run)?;
    Ok(HttpResponse::NoContent().finish())
}

/// `DELETE /api/runs/{run_id}`
pub async fn delete_one(
    repo: web::Data<dyn RunRepository>,
    run_id: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    repo.delete(*run_id)?;
    Ok(HttpResponse::NoContent().finish())
}
