pub mod db;
pub mod document {
    mod revision;

    pub mod memory;
    pub mod postgres;
    pub mod store;

    pub use memory::InMemoryDocumentStore;
    pub use postgres::PostgresDocumentStore;
    pub use store::{Document, DocumentError, DocumentStore, WriteResult};
}
pub mod product {
    pub mod entity;
    pub mod repository;
}
