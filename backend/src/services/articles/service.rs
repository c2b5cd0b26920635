//! Pass-through service layer between the article handlers and the
//! repository. It adds no logic of its own today; it exists so the handlers
//! depend on a service boundary rather than on storage directly.

use common::model::article::Article;

use super::repository::ArticleRepository;
use crate::db::Database;
use crate::error::ApiError;

pub struct ArticleService {
    repository: ArticleRepository,
}

impl ArticleService {
    pub fn new(db: Database) -> Self {
        Self {
            repository: ArticleRepository::new(db),
        }
    }

    pub fn find_all(&self) -> Result<Vec<Article>, ApiError> {
        self.repository.find_all()
    }

    pub fn find_by_title_containing(&self, title: &str) -> Result<Vec<Article>, ApiError> {
        self.repository.find_by_title_containing(title)
    }

    pub fn find_by_published(&self, published: bool) -> Result<Vec<Article>, ApiError> {
        self.repository.find_by_published(published)
    }

    pub fn find_by_id(&self, id: i64) -> Result<Option<Article>, ApiError> {
        self.repository.find_by_id(id)
    }

    pub fn create(&self, article: &Article) -> Result<Article, ApiError> {
        self.repository.create(article)
    }

    pub fn update(&self, id: i64, article: &Article) -> Result<Option<Article>, ApiError> {
        self.repository.update(id, article)
    }

    pub fn delete_by_id(&self, id: i64) -> Result<bool, ApiError> {
        self.repository.delete_by_id(id)
    }

    pub fn delete_all(&self) -> Result<usize, ApiError> {
        self.repository.delete_all()
    }
}
