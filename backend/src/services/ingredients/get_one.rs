use actix_web::{web, HttpResponse};

use super::repository::IngredientRepository;
use crate::db::Database;
use crate::error::ApiError;

/// Handler for `GET /api/ingredients/{ingredient_id}`.
///
/// Returns the ingredient as JSON, or `404` when the code is unknown. The
/// absent case is an explicit empty result from the repository, never an
/// unwrap of a missing row.
pub async fn process(
    db: web::Data<Database>,
    ingredient_id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let repo = IngredientRepository::new(db.get_ref().clone());
    match repo.find_by_id(&ingredient_id)? {
        Some(ingredient) => Ok(HttpResponse::Ok().json(ingredient)),
        None => Err(ApiError::NotFound("ingredient")),
    }
}
