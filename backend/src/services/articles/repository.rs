//! SQLite-backed article repository, same explicit per-entity shape as the
//! tutorial repository over the `article` table.

use common::model::article::Article;
use rusqlite::{params, OptionalExtension, Row};

use crate::db::Database;
use crate::error::ApiError;

pub struct ArticleRepository {
    db: Database,
}

impl ArticleRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub fn find_all(&self) -> Result<Vec<Article>, ApiError> {
        let conn = self.db.open()?;
        let mut stmt =
            conn.prepare("SELECT id, title, content, published FROM article ORDER BY id")?;
        let articles = stmt.query_map([], map_article)?.collect::<Result<Vec<_>, _>>()?;
        Ok(articles)
    }

    pub fn find_by_title_containing(&self, title: &str) -> Result<Vec<Article>, ApiError> {
        let conn = self.db.open()?;
        let mut stmt = conn.prepare(
            "SELECT id, title, content, published FROM article \
             WHERE title LIKE '%' || ?1 || '%' ORDER BY id",
        )?;
        let articles = stmt
            .query_map(params![title], map_article)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(articles)
    }

    pub fn find_by_published(&self, published: bool) -> Result<Vec<Article>, ApiError> {
        let conn = self.db.open()?;
        let mut stmt = conn.prepare(
            "SELECT id, title, content, published FROM article \
             WHERE published = ?1 ORDER BY id",
        )?;
        let articles = stmt
            .query_map(params![published], map_article)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(articles)
    }

    pub fn find_by_id(&self, id: i64) -> Result<Option<Article>, ApiError> {
        let conn = self.db.open()?;
        let article = conn
            .query_row(
                "SELECT id, title, content, published FROM article WHERE id = ?1",
                params![id],
                map_article,
            )
            .optional()?;
        Ok(article)
    }

    /// Inserts a new article, keeping the published flag as supplied.
    pub fn create(&self, article: &Article) -> Result<Article, ApiError> {
        let conn = self.db.open()?;
        conn.execute(
            "INSERT INTO article (title, content, published) VALUES (?1, ?2, ?3)",
            params![article.title, article.content, article.published],
        )?;
        Ok(Article {
            id: Some(conn.last_insert_rowid()),
            title: article.title.clone(),
            content: article.content.clone(),
            published: article.published,
        })
    }

    /// Full update of one article; `None` when the id matches nothing.
    pub fn update(&self, id: i64, article: &Article) -> Result<Option<Article>, ApiError> {
        let conn = self.db.open()?;
        let updated = conn.execute(
            "UPDATE article SET title = ?1, content = ?2, published = ?3 WHERE id = ?4",
            params![article.title, article.content, article.published, id],
        )?;
        if updated == 0 {
            return Ok(None);
        }
        Ok(Some(Article {
            id: Some(id),
            title: article.title.clone(),
            content: article.content.clone(),
            published: article.published,
        }))
    }

    pub fn delete_by_id(&self, id: i64) -> Result<bool, ApiError> {
        let conn = self.db.open()?;
        let deleted = conn.execute("DELETE FROM article WHERE id = ?1", params![id])?;
        Ok(deleted > 0)
    }

    pub fn delete_all(&self) -> Result<usize, ApiError> {
        let conn = self.db.open()?;
        Ok(conn.execute("DELETE FROM article", [])?)
    }
}

fn map_article(row: &Row<'_>) -> rusqlite::Result<Article> {
    Ok(Article {
        id: Some(row.get("id")?),
        title: row.get("title")?,
        content: row.get("content")?,
        published: row.get("published")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_support::fresh_database;

    fn draft(title: &str) -> Article {
        Article {
            id: None,
            title: title.into(),
            content: "body".into(),
            published: false,
        }
    }

    #[test]
    fn create_keeps_the_supplied_published_flag() {
        let (db, _file) = fresh_database();
        let repo = ArticleRepository::new(db);

        let published = repo
            .create(&Article {
                published: true,
                ..draft("Release Notes")
            })
            .expect("create");
        assert!(published.published);
        assert_eq!(repo.find_by_published(true).expect("query").len(), 1);
    }

    #[test]
    fn round_trip_by_id_and_absent_id() {
        let (db, _file) = fresh_database();
        let repo = ArticleRepository::new(db);
        let created = repo.create(&draft("Hello")).expect("create");

        let loaded = repo
            .find_by_id(created.id.expect("id"))
            .expect("query")
            .expect("present");
        assert_eq!(loaded, created);
        assert!(repo.find_by_id(9999).expect("query").is_none());
    }

    #[test]
    fn title_search_and_delete_all() {
        let (db, _file) = fresh_database();
        let repo = ArticleRepository::new(db);
        repo.create(&draft("Rust news")).expect("create");
        repo.create(&draft("Other")).expect("create");

        assert_eq!(repo.find_by_title_containing("Rust").expect("query").len(), 1);
        assert_eq!(repo.delete_all().expect("delete all"), 2);
        assert!(repo.find_all().expect("query").is_empty());
    }
}
