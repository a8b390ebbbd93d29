use std::sync::Arc;

use poem_openapi::{
    ApiResponse, OpenApi,
    param::{Path, Query},
    payload::Json,
    types::ParseFromJSON,
};

use business::domain::product::errors::ProductError;
use business::domain::product::listing::ProductListQuery;
use business::domain::product::use_cases::create::CreateProductUseCase;
use business::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::product::use_cases::list::ListProductsUseCase;
use business::domain::product::use_cases::update::UpdateProductUseCase;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::{
    CreateProductRequest, ProductPageResponse, ProductResponse, UpdateProductRequest,
    WriteAckResponse,
};
use crate::api::tags::ApiTags;

const INVALID_BODY: &str = "request.invalid_body";
const INVALID_QUERY: &str = "request.invalid_query";

pub struct ProductApi {
    create_use_case: Arc<dyn CreateProductUseCase>,
    list_use_case: Arc<dyn ListProductsUseCase>,
    get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    update_use_case: Arc<dyn UpdateProductUseCase>,
    delete_use_case: Arc<dyn DeleteProductUseCase>,
}

impl ProductApi {
    pub fn new(
        create_use_case: Arc<dyn CreateProductUseCase>,
        list_use_case: Arc<dyn ListProductsUseCase>,
        get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
        update_use_case: Arc<dyn UpdateProductUseCase>,
        delete_use_case: Arc<dyn DeleteProductUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            list_use_case,
            get_by_id_use_case,
            update_use_case,
            delete_use_case,
        }
    }

    /// Answers an update whose body does not decode. An unknown id is reported
    /// as not found before the body is judged.
    async fn reject_undecodable_update(&self, id: String) -> UpdateProductResponse {
        match self
            .get_by_id_use_case
            .execute(GetProductByIdParams { id })
            .await
        {
            Ok(_) => UpdateProductResponse::BadRequest(ErrorResponse::json(INVALID_BODY)),
            Err(_) => UpdateProductResponse::NotFound(ErrorResponse::json(
                ProductError::NotFound.to_string(),
            )),
        }
    }
}

/// Reads an optional price bound; an empty value means no bound.
fn parse_price_bound(raw: Option<String>) -> Result<Option<f64>, std::num::ParseFloatError> {
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some),
    }
}

/// Product inventory API
///
/// Endpoints for creating, listing, reading, updating, and deleting products.
#[OpenApi]
impl ProductApi {
    /// Create a new product
    ///
    /// `name`, `price` and `stockQuantity` are required; `price` cannot be
    /// negative. The store assigns an ID when none is given.
    #[oai(path = "/products", method = "post", tag = "ApiTags::Products")]
    async fn create_product(&self, body: Json<CreateProductRequest>) -> CreateProductResponse {
        match self.create_use_case.execute(body.0.into()).await {
            Ok(ack) => CreateProductResponse::Created(Json(ack.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateProductResponse::BadRequest(json),
                    _ => CreateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// List products
    ///
    /// Filters by `category` and the inclusive `minPrice`/`maxPrice` range, then
    /// paginates with `page` (from 1, default 1) and `limit` (default 10).
    /// Empty `category`, `minPrice` or `maxPrice` values apply no filter.
    /// `total` counts the filtered products before pagination.
    #[oai(path = "/products", method = "get", tag = "ApiTags::Products")]
    async fn list_products(
        &self,
        category: Query<Option<String>>,
        #[oai(name = "minPrice")]
        min_price: Query<Option<String>>,
        #[oai(name = "maxPrice")]
        max_price: Query<Option<String>>,
        page: Query<Option<u32>>,
        limit: Query<Option<u32>>,
    ) -> ListProductsResponse {
        let (Ok(min_price), Ok(max_price)) =
            (parse_price_bound(min_price.0), parse_price_bound(max_price.0))
        else {
            return ListProductsResponse::BadRequest(ErrorResponse::json(INVALID_QUERY));
        };

        let query = ProductListQuery {
            category: category.0,
            min_price,
            max_price,
            page: page.0,
            limit: limit.0,
        };

        match self.list_use_case.execute(query).await {
            Ok(page) => ListProductsResponse::Ok(Json(page.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                ListProductsResponse::InternalError(json)
            }
        }
    }

    /// Get a product by ID
    #[oai(path = "/products/:id", method = "get", tag = "ApiTags::Products")]
    async fn get_product_by_id(&self, id: Path<String>) -> GetProductByIdResponse {
        match self
            .get_by_id_use_case
            .execute(GetProductByIdParams { id: id.0 })
            .await
        {
            Ok(product) => GetProductByIdResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetProductByIdResponse::NotFound(json),
                    _ => GetProductByIdResponse::InternalError(json),
                }
            }
        }
    }

    /// Update a product
    ///
    /// Replaces name, price, stock quantity, description and category. The ID
    /// and creation timestamp are kept. The body has the shape of
    /// `UpdateProductRequest`; an unknown ID is reported before the body is
    /// checked.
    #[oai(path = "/products/:id", method = "put", tag = "ApiTags::Products")]
    async fn update_product(
        &self,
        id: Path<String>,
        body: Json<serde_json::Value>,
    ) -> UpdateProductResponse {
        let Ok(request) = UpdateProductRequest::parse_from_json(Some(body.0)) else {
            return self.reject_undecodable_update(id.0).await;
        };

        match self.update_use_case.execute(request.into_params(id.0)).await {
            Ok(ack) => UpdateProductResponse::Ok(Json(ack.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateProductResponse::BadRequest(json),
                    404 => UpdateProductResponse::NotFound(json),
                    _ => UpdateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a product
    #[oai(path = "/products/:id", method = "delete", tag = "ApiTags::Products")]
    async fn delete_product(&self, id: Path<String>) -> DeleteProductResponse {
        match self
            .delete_use_case
            .execute(DeleteProductParams { id: id.0 })
            .await
        {
            Ok(ack) => DeleteProductResponse::Ok(Json(ack.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteProductResponse::NotFound(json),
                    _ => DeleteProductResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(ApiResponse)]
#[oai(bad_request_handler = "create_bad_request")]
pub enum CreateProductResponse {
    /// Product created
    #[oai(status = 201)]
    Created(Json<WriteAckResponse>),
    /// Missing or invalid fields
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

fn create_bad_request(_: poem::Error) -> CreateProductResponse {
    CreateProductResponse::BadRequest(ErrorResponse::json(INVALID_BODY))
}

#[derive(ApiResponse)]
#[oai(bad_request_handler = "list_bad_request")]
pub enum ListProductsResponse {
    #[oai(status = 200)]
    Ok(Json<ProductPageResponse>),
    /// Unparsable query parameters
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

fn list_bad_request(_: poem::Error) -> ListProductsResponse {
    ListProductsResponse::BadRequest(ErrorResponse::json(INVALID_QUERY))
}

#[derive(ApiResponse)]
pub enum GetProductByIdResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    /// Product not found
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(ApiResponse)]
#[oai(bad_request_handler = "update_bad_request")]
pub enum UpdateProductResponse {
    /// Product updated
    #[oai(status = 200)]
    Ok(Json<WriteAckResponse>),
    /// Missing or invalid fields
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    /// Product not found
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

fn update_bad_request(_: poem::Error) -> UpdateProductResponse {
    UpdateProductResponse::BadRequest(ErrorResponse::json(INVALID_BODY))
}

#[derive(ApiResponse)]
pub enum DeleteProductResponse {
    /// Product removed
    #[oai(status = 200)]
    Ok(Json<WriteAckResponse>),
    /// Product not found
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
