use std::env;
use std::sync::Arc;

use persistence::db::{DatabaseConfig, create_postgres_pool, ensure_documents_table};
use persistence::document::{DocumentStore, InMemoryDocumentStore, PostgresDocumentStore};

/// The document store selected at start-up, with a label for diagnostics.
pub struct StoreBackend {
    pub name: &'static str,
    pub store: Arc<dyn DocumentStore>,
}

/// Initialize the document store from environment variables
///
/// Environment variables:
/// - DATABASE_URL: PostgreSQL connection string (optional). When unset the
///   products live in memory and are lost on restart.
///
/// # Errors
/// Returns error if the connection fails or the documents table cannot be created
pub async fn init_document_store() -> anyhow::Result<StoreBackend> {
    match env::var("DATABASE_URL") {
        Ok(db_url) if !db_url.trim().is_empty() => {
            let pool = create_postgres_pool(&DatabaseConfig::new(db_url)).await?;
            ensure_documents_table(&pool).await?;
            tracing::info!("Using PostgreSQL document store");
            Ok(StoreBackend {
                name: "postgres",
                store: Arc::new(PostgresDocumentStore::new(pool)),
            })
        }
        _ => {
            tracing::warn!("DATABASE_URL not set, using in-memory document store");
            Ok(StoreBackend {
                name: "memory",
                store: Arc::new(InMemoryDocumentStore::new()),
            })
        }
    }
}
