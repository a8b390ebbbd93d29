use std::sync::Arc;

use logger::TracingLogger;
use persistence::product::repository::ProductRepositoryDocumentStore;

use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::list::ListProductsUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;

use crate::config::database_config::StoreBackend;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub product_api: crate::api::product::routes::ProductApi,
}

impl DependencyContainer {
    pub fn new(backend: StoreBackend) -> Self {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new(backend.name);

        // Infrastructure adapters
        let product_repository = Arc::new(ProductRepositoryDocumentStore::new(backend.store));

        // Product use cases
        let create_use_case = Arc::new(CreateProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let list_use_case = Arc::new(ListProductsUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_by_id_use_case = Arc::new(GetProductByIdUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let update_use_case = Arc::new(UpdateProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let delete_use_case = Arc::new(DeleteProductUseCaseImpl {
            repository: product_repository,
            logger,
        });

        let product_api = crate::api::product::routes::ProductApi::new(
            create_use_case,
            list_use_case,
            get_by_id_use_case,
            update_use_case,
            delete_use_case,
        );

        Self {
            health_api,
            product_api,
        }
    }
}
