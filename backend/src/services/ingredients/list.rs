use actix_web::{web, HttpResponse};

use super::repository::IngredientRepository;
use crate::db::Database;
use crate::error::ApiError;

/// Handler for `GET /api/ingredients`: the full seeded catalog as JSON.
pub async fn process(db: web::Data<Database>) -> Result<HttpResponse, ApiError> {
    let ingredients = IngredientRepository::new(db.get_ref().clone()).find_all()?;
    Ok(HttpResponse::Ok().json(ingredients))
}
