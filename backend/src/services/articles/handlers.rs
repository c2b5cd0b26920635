use actix_web::{web, HttpResponse};
use common::model::article::Article;
use common::requests::TitleFilter;

use super::service::ArticleService;
use crate::db::Database;
use crate::error::ApiError;

fn service(db: &web::Data<Database>) -> ArticleService {
    ArticleService::new(db.get_ref().clone())
}

fn list_response(articles: Vec<Article>) -> HttpResponse {
    if articles.is_empty() {
        HttpResponse::NoContent().finish()
    } else {
        HttpResponse::Ok().json(articles)
    }
}

/// `GET /api/articles[?title=...]`
pub async fn list(
    db: web::Data<Database>,
    filter: web::Query<TitleFilter>,
) -> Result<HttpResponse, ApiError> {
    let articles = match &filter.title {
        Some(title) => service(&db).find_by_title_containing(title)?,
        None => service(&db).find_all()?,
    };
    Ok(list_response(articles))
}

/// `GET /api/articles/published`
pub async fn published(db: web::Data<Database>) -> Result<HttpResponse, ApiError> {
    Ok(list_response(service(&db).find_by_published(true)?))
}

/// `GET /api/articles/{article_id}`
pub async fn get_one(
    db: web::Data<Database>,
    article_id: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    match service(&db).find_by_id(*article_id)? {
        Some(article) => Ok(HttpResponse::Ok().json(article)),
        None => Err(ApiError::NotFound("article")),
    }
}

/// `POST /api/articles`
pub async fn create(
    db: web::Data<Database>,
    payload: web::Json<Article>,
) -> Result<HttpResponse, ApiError> {
    let created = service(&db).create(&payload)?;
    Ok(HttpResponse::Created().json(created))
}

/// `PUT /api/articles/{article_id}`
pub async fn update(
    db: web::Data<Database>,
    article_id: web::Path<i64>,
    payload: web::Json<Article>,
) -> Result<HttpResponse, ApiError> {
    match service(&db).update(*article_id, &payload)? {
        Some(updated) => Ok(HttpResponse::Ok().json(updated)),
        None => Err(ApiError::NotFound("article")),
    }
}

/// `DELETE /api/articles/{article_id}`
pub async fn delete_one(
    db: web::Data<Database>,
    article_id: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    if service(&db).delete_by_id(*article_id)? {
        Ok(HttpResponse::NoContent().finish())
    } else {
        Err(ApiError::NotFound("article"))
    }
}

/// `DELETE /api/articles`
pub async fn delete_all(db: web::Data<Database>) -> Result<HttpResponse, ApiError> {
    service(&db).delete_all()?;
    Ok(HttpResponse::NoContent().finish())
}
