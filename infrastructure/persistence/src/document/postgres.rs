use async_trait::async_trait;
use serde_json::Value;
use sqlx::{FromRow, PgPool};

use super::revision;
use super::store::{Document, DocumentError, DocumentStore, WriteResult};

#[derive(Debug, FromRow)]
struct DocumentRow {
    id: String,
    rev: String,
    body: Value,
}

impl From<DocumentRow> for Document {
    fn from(row: DocumentRow) -> Self {
        Self {
            id: row.id,
            rev: row.rev,
            body: row.body,
        }
    }
}

/// Document store kept in the `documents` table, one JSONB body per row.
///
/// Revision checks run inside a transaction holding the row lock, so two
/// writers carrying the same revision cannot both succeed.
pub struct PostgresDocumentStore {
    pool: PgPool,
}

impl PostgresDocumentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DocumentStore for PostgresDocumentStore {
    async fn get(&self, id: &str) -> Result<Document, DocumentError> {
        let row = sqlx::query_as::<_, DocumentRow>(
            "SELECT id, rev, body FROM documents WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(DocumentError::NotFound)?;

        Ok(row.into())
    }

    async fn put(
        &self,
        id: Option<&str>,
        rev: Option<&str>,
        body: Value,
    ) -> Result<WriteResult, DocumentError> {
        let id = id.map(str::to_string).unwrap_or_else(revision::new_id);

        let mut tx = self.pool.begin().await?;
        let current: Option<String> =
            sqlx::query_scalar("SELECT rev FROM documents WHERE id = $1 FOR UPDATE")
                .bind(&id)
                .fetch_optional(&mut *tx)
                .await?;
        revision::check(current.as_deref(), rev)?;

        let next = revision::next(current.as_deref(), &body);
        let affected = match current {
            // A concurrent insert of the same id makes this a no-op
            None => sqlx::query(
                r#"INSERT INTO documents (id, rev, body, updated_at)
                VALUES ($1, $2, $3, NOW())
                ON CONFLICT (id) DO NOTHING"#,
            )
            .bind(&id)
            .bind(&next)
            .bind(&body)
            .execute(&mut *tx)
            .await?
            .rows_affected(),
            Some(_) => sqlx::query(
                "UPDATE documents SET rev = $2, body = $3, updated_at = NOW() WHERE id = $1",
            )
            .bind(&id)
            .bind(&next)
            .bind(&body)
            .execute(&mut *tx)
            .await?
            .rows_affected(),
        };
        if affected == 0 {
            return Err(DocumentError::Conflict);
        }
        tx.commit().await?;

        Ok(WriteResult { id, rev: next })
    }

    async fn remove(&self, id: &str, rev: &str) -> Result<WriteResult, DocumentError> {
        let mut tx = self.pool.begin().await?;
        let current: String =
            sqlx::query_scalar("SELECT rev FROM documents WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?
                .ok_or(DocumentError::NotFound)?;
        revision::check(Some(current.as_str()), Some(rev))?;

        sqlx::query("DELETE FROM documents WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;

        Ok(WriteResult {
            id: id.to_string(),
            rev: revision::next(Some(current.as_str()), &Value::Null),
        })
    }

    async fn all_docs(&self) -> Result<Vec<Document>, DocumentError> {
        let rows = sqlx::query_as::<_, DocumentRow>(
            "SELECT id, rev, body FROM documents ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Document::from).collect())
    }
}
