use std::sync::Arc;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use mockall::mock;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::model::{NewProduct, Product, WriteAck};
use crate::domain::product::repository::ProductRepository;

mock! {
    pub ProductRepo {}

    #[async_trait]
    impl ProductRepository for ProductRepo {
        async fn get(&self, id: &str) -> Result<Product, RepositoryError>;
        async fn put_new(&self, product: &NewProduct) -> Result<WriteAck, RepositoryError>;
        async fn put(&self, product: &Product) -> Result<WriteAck, RepositoryError>;
        async fn remove(&self, product: &Product) -> Result<WriteAck, RepositoryError>;
        async fn all_docs(&self) -> Result<Vec<Product>, RepositoryError>;
    }
}

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

pub fn stored_product(id: &str) -> Product {
    Product {
        id: id.to_string(),
        rev: "1-5f1a".to_string(),
        name: "Lamp".to_string(),
        price: 19.99,
        stock_quantity: 5.0,
        description: Some("Brass desk lamp".to_string()),
        category: Some("lighting".to_string()),
        created_at: Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap(),
    }
}

pub fn ack(id: &str, rev: &str) -> WriteAck {
    WriteAck {
        ok: true,
        id: id.to_string(),
        rev: rev.to_string(),
    }
}
