use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::WriteAck;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};
use crate::domain::product::validator;

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    /// Existence is checked before the payload is validated, so a malformed
    /// update of an unknown id reports `NotFound`. Any store failure while
    /// reading or writing is reported as `NotFound` as well.
    async fn execute(&self, params: UpdateProductParams) -> Result<WriteAck, ProductError> {
        let (id, draft) = params.into_parts();
        self.logger.info(&format!("Updating product: {}", id));

        let existing = self.repository.get(&id).await.map_err(|e| {
            self.logger
                .warn(&format!("Product {} could not be read for update: {}", id, e));
            ProductError::NotFound
        })?;

        let changes = validator::validate(draft)?;
        let updated = existing.merge(changes);

        let ack = self.repository.put(&updated).await.map_err(|e| {
            self.logger
                .warn(&format!("Product {} could not be written: {}", id, e));
            ProductError::NotFound
        })?;

        self.logger
            .info(&format!("Product updated: {} rev: {}", ack.id, ack.rev));
        Ok(ack)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::product::test_support::{
        MockProductRepo, ack, mock_logger, stored_product,
    };
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::errors::{Field, ValidationError};

    fn params(id: &str) -> UpdateProductParams {
        UpdateProductParams {
            id: id.to_string(),
            name: Some("Lamp".to_string()),
            price: Some(24.99),
            stock_quantity: Some(3.0),
            description: None,
            category: Some("lighting".to_string()),
        }
    }

    #[tokio::test]
    async fn should_replace_fields_and_keep_identity() {
        let existing = stored_product("lamp-1");
        let created_at = existing.created_at;
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get()
            .returning(move |_| Ok(existing.clone()));
        mock_repo
            .expect_put()
            .withf(move |p| {
                p.id == "lamp-1"
                    && p.rev == "1-5f1a"
                    && p.created_at == created_at
                    && p.price == 24.99
                    && p.stock_quantity == 3.0
                    && p.description.is_none()
            })
            .times(1)
            .returning(|p| Ok(ack(&p.id, "2-bbb")));

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("lamp-1")).await;

        assert_eq!(result.unwrap(), ack("lamp-1", "2-bbb"));
    }

    #[tokio::test]
    async fn should_reject_invalid_payload_for_existing_product() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get()
            .returning(|id| Ok(stored_product(id)));
        mock_repo.expect_put().never();

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateProductParams {
                name: None,
                ..params("lamp-1")
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            ProductError::Validation(ValidationError::MissingField(Field::Name))
        ));
    }

    #[tokio::test]
    async fn should_reject_negative_price() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get()
            .returning(|id| Ok(stored_product(id)));
        mock_repo.expect_put().never();

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateProductParams {
                price: Some(-1.0),
                ..params("lamp-1")
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            ProductError::Validation(ValidationError::InvalidValue)
        ));
    }

    #[tokio::test]
    async fn should_report_not_found_before_validating() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateProductParams {
                name: None,
                price: Some(-5.0),
                stock_quantity: None,
                ..params("missing")
            })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::NotFound));
    }

    #[tokio::test]
    async fn should_report_not_found_when_write_conflicts() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get()
            .returning(|id| Ok(stored_product(id)));
        mock_repo
            .expect_put()
            .returning(|_| Err(RepositoryError::Conflict));

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("lamp-1")).await;

        assert!(matches!(result.unwrap_err(), ProductError::NotFound));
    }
}
