use poem::{EndpointExt, Route, Server as PoemServer, listener::TcpListener, middleware::Tracing};
use poem_openapi::OpenApiService;

use crate::{config::app_config::AppConfig, setup::dependency_injection::DependencyContainer};

pub const API_PREFIX: &str = "/api";
pub const DOCS_PATH: &str = "/api-docs";
pub const SPEC_PATH: &str = "/openapi.json";

pub struct Server;

impl Server {
    /// Routes of the service: the API under `/api`, Swagger UI and the
    /// OpenAPI document. `base_url` is advertised as the API server.
    pub fn routes(container: DependencyContainer, base_url: &str) -> Route {
        let api_service = OpenApiService::new(
            (container.health_api, container.product_api),
            "Inventory API",
            env!("CARGO_PKG_VERSION"),
        )
        .description("Inventory management: create, list, retrieve, update and delete products")
        .server(format!("{}{}", base_url, API_PREFIX));
        let ui = api_service.swagger_ui();
        let spec = api_service.spec_endpoint();
        Route::new()
            .nest(API_PREFIX, api_service)
            .nest(DOCS_PATH, ui)
            .nest(SPEC_PATH, spec)
    }

    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let base_url = format!("http://{}", addr);
        let app = Self::routes(container, &base_url)
            .with(config.cors)
            .with(Tracing);
        tracing::info!("Server running at {}{}", base_url, API_PREFIX);
        tracing::info!("Swagger UI at {}{}", base_url, DOCS_PATH);
        tracing::info!("OpenAPI JSON at {}{}", base_url, SPEC_PATH);
        PoemServer::new(TcpListener::bind(&addr)).run(app).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use persistence::document::InMemoryDocumentStore;
    use poem::http::StatusCode;
    use poem::test::TestClient;
    use serde_json::json;

    use super::*;
    use crate::config::database_config::StoreBackend;

    fn client() -> TestClient<Route> {
        let container = DependencyContainer::new(StoreBackend {
            name: "memory",
            store: Arc::new(InMemoryDocumentStore::new()),
        });
        TestClient::new(Server::routes(container, "http://localhost:3000"))
    }

    async fn create(cli: &TestClient<Route>, body: serde_json::Value) -> String {
        let resp = cli.post("/api/products").body_json(&body).send().await;
        resp.assert_status(StatusCode::CREATED);
        let json = resp.json().await;
        json.value().object().get("id").string().to_string()
    }

    #[tokio::test]
    async fn should_create_read_update_and_delete_a_product() {
        let cli = client();

        // Create
        let resp = cli
            .post("/api/products")
            .body_json(&json!({"name": "Lamp", "price": 19.99, "stockQuantity": 5}))
            .send()
            .await;
        resp.assert_status(StatusCode::CREATED);
        let ack = resp.json().await;
        let ack = ack.value().object();
        assert!(ack.get("ok").bool());
        assert!(ack.get("rev").string().starts_with("1-"));
        let id = ack.get("id").string().to_string();
        assert!(!id.is_empty());

        // Read
        let resp = cli.get(format!("/api/products/{id}")).send().await;
        resp.assert_status_is_ok();
        let product = resp.json().await;
        let product = product.value().object();
        assert_eq!(product.get("id").string(), id);
        assert_eq!(product.get("name").string(), "Lamp");
        assert_eq!(product.get("price").f64(), 19.99);
        assert_eq!(product.get("stockQuantity").f64(), 5.0);
        let created_at = product.get("createdAt").string().to_string();

        // Update without id or createdAt in the body
        let resp = cli
            .put(format!("/api/products/{id}"))
            .body_json(&json!({"name": "Lamp", "price": 24.99, "stockQuantity": 3}))
            .send()
            .await;
        resp.assert_status_is_ok();
        let ack = resp.json().await;
        assert!(ack.value().object().get("rev").string().starts_with("2-"));

        let resp = cli.get(format!("/api/products/{id}")).send().await;
        resp.assert_status_is_ok();
        let product = resp.json().await;
        let product = product.value().object();
        assert_eq!(product.get("price").f64(), 24.99);
        assert_eq!(product.get("stockQuantity").f64(), 3.0);
        assert_eq!(product.get("createdAt").string(), created_at);

        // Delete
        let resp = cli.delete(format!("/api/products/{id}")).send().await;
        resp.assert_status_is_ok();

        let resp = cli.get(format!("/api/products/{id}")).send().await;
        resp.assert_status(StatusCode::NOT_FOUND);
        resp.assert_json(json!({"error": "product.not_found"})).await;

        let resp = cli.delete(format!("/api/products/{id}")).send().await;
        resp.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_reject_missing_and_negative_fields() {
        let cli = client();
        let cases = [
            (json!({"price": 1, "stockQuantity": 1}), "product.name_required"),
            (json!({"name": "", "price": 1, "stockQuantity": 1}), "product.name_required"),
            (json!({"name": "X", "stockQuantity": 1}), "product.price_required"),
            (json!({"name": "X", "price": 1}), "product.stock_quantity_required"),
            (json!({"name": "X", "price": -1, "stockQuantity": 1}), "product.negative_price"),
        ];

        for (body, error) in cases {
            let resp = cli.post("/api/products").body_json(&body).send().await;
            resp.assert_status(StatusCode::BAD_REQUEST);
            resp.assert_json(json!({ "error": error })).await;
        }

        let resp = cli
            .post("/api/products")
            .body_json(&json!({"name": "X", "price": "free", "stockQuantity": 1}))
            .send()
            .await;
        resp.assert_status(StatusCode::BAD_REQUEST);
        resp.assert_json(json!({"error": "request.invalid_body"})).await;
    }

    #[tokio::test]
    async fn should_accept_zero_price_and_stock() {
        let cli = client();

        let id = create(&cli, json!({"name": "X", "price": 0, "stockQuantity": 0})).await;

        cli.get(format!("/api/products/{id}"))
            .send()
            .await
            .assert_status_is_ok();
    }

    #[tokio::test]
    async fn should_keep_client_supplied_id_and_created_at() {
        let cli = client();

        let id = create(
            &cli,
            json!({
                "id": "lamp-1",
                "name": "Lamp",
                "price": 10,
                "stockQuantity": 1,
                "createdAt": "2024-03-01T09:30:00Z"
            }),
        )
        .await;
        assert_eq!(id, "lamp-1");

        let resp = cli.get("/api/products/lamp-1").send().await;
        let product = resp.json().await;
        let created_at = product.value().object().get("createdAt").string().to_string();
        assert_eq!(
            chrono::DateTime::parse_from_rfc3339(&created_at).unwrap(),
            chrono::DateTime::parse_from_rfc3339("2024-03-01T09:30:00Z").unwrap()
        );

        let resp = cli
            .post("/api/products")
            .body_json(&json!({"id": "lamp-1", "name": "Lamp", "price": 10, "stockQuantity": 1}))
            .send()
            .await;
        resp.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        resp.assert_json(json!({"error": "repository.conflict"})).await;
    }

    #[tokio::test]
    async fn should_report_not_found_before_validating_updates() {
        let cli = client();

        let resp = cli
            .put("/api/products/missing")
            .body_json(&json!({"price": -3}))
            .send()
            .await;

        resp.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_report_not_found_for_undecodable_update_of_unknown_id() {
        let cli = client();

        let resp = cli
            .put("/api/products/missing")
            .body_json(&json!({"name": "X", "price": "abc", "stockQuantity": 1}))
            .send()
            .await;

        resp.assert_status(StatusCode::NOT_FOUND);
        resp.assert_json(json!({"error": "product.not_found"})).await;
    }

    #[tokio::test]
    async fn should_reject_undecodable_update_of_existing_product() {
        let cli = client();
        let id = create(&cli, json!({"name": "Lamp", "price": 10, "stockQuantity": 1})).await;

        let resp = cli
            .put(format!("/api/products/{id}"))
            .body_json(&json!({"name": "Lamp", "price": "abc", "stockQuantity": 1}))
            .send()
            .await;

        resp.assert_status(StatusCode::BAD_REQUEST);
        resp.assert_json(json!({"error": "request.invalid_body"})).await;
    }

    #[tokio::test]
    async fn should_assign_an_id_when_the_supplied_one_is_empty() {
        let cli = client();

        let id = create(&cli, json!({"id": "", "name": "Lamp", "price": 1, "stockQuantity": 1})).await;
        assert!(!id.is_empty());

        cli.get(format!("/api/products/{id}"))
            .send()
            .await
            .assert_status_is_ok();
        cli.delete(format!("/api/products/{id}"))
            .send()
            .await
            .assert_status_is_ok();
    }

    #[tokio::test]
    async fn should_accept_whitespace_name() {
        let cli = client();

        let id = create(&cli, json!({"name": "   ", "price": 1, "stockQuantity": 1})).await;

        let resp = cli.get(format!("/api/products/{id}")).send().await;
        let product = resp.json().await;
        assert_eq!(product.value().object().get("name").string(), "   ");
    }

    #[tokio::test]
    async fn should_validate_updates_of_existing_products() {
        let cli = client();
        let id = create(&cli, json!({"name": "Lamp", "price": 10, "stockQuantity": 1})).await;

        let resp = cli
            .put(format!("/api/products/{id}"))
            .body_json(&json!({"name": "Lamp", "price": -3, "stockQuantity": 1}))
            .send()
            .await;

        resp.assert_status(StatusCode::BAD_REQUEST);
        resp.assert_json(json!({"error": "product.negative_price"})).await;
    }

    #[tokio::test]
    async fn should_paginate_and_filter_products() {
        let cli = client();
        for i in 0..15 {
            let category = if i % 2 == 0 { "lighting" } else { "garden" };
            create(
                &cli,
                json!({
                    "id": format!("p{i:02}"),
                    "name": format!("Product {i}"),
                    "price": i,
                    "stockQuantity": 1,
                    "category": category
                }),
            )
            .await;
        }

        for (page, expected) in [(1, 10), (2, 5), (3, 0)] {
            let resp = cli
                .get("/api/products")
                .query("page", &page)
                .query("limit", &10)
                .send()
                .await;
            resp.assert_status_is_ok();
            let json = resp.json().await;
            let body = json.value().object();
            assert_eq!(body.get("total").i64(), 15);
            assert_eq!(body.get("page").i64(), page);
            assert_eq!(body.get("limit").i64(), 10);
            body.get("data").array().assert_len(expected);
        }

        let resp = cli
            .get("/api/products")
            .query("category", &"lighting")
            .query("minPrice", &4)
            .query("maxPrice", &10)
            .send()
            .await;
        resp.assert_status_is_ok();
        let json = resp.json().await;
        let body = json.value().object();
        assert_eq!(body.get("total").i64(), 4);
        let data = body.get("data").array();
        data.assert_len(4);
        assert_eq!(data.get(0).object().get("id").string(), "p04");
        assert_eq!(data.get(3).object().get("id").string(), "p10");
    }

    #[tokio::test]
    async fn should_ignore_empty_price_bounds() {
        let cli = client();
        create(&cli, json!({"name": "Lamp", "price": 10, "stockQuantity": 1})).await;

        let resp = cli
            .get("/api/products")
            .query("minPrice", &"")
            .query("maxPrice", &"")
            .send()
            .await;

        resp.assert_status_is_ok();
        let json = resp.json().await;
        assert_eq!(json.value().object().get("total").i64(), 1);
    }

    #[tokio::test]
    async fn should_reject_unparsable_query() {
        let cli = client();

        let resp = cli
            .get("/api/products")
            .query("minPrice", &"cheap")
            .send()
            .await;

        resp.assert_status(StatusCode::BAD_REQUEST);
        resp.assert_json(json!({"error": "request.invalid_query"})).await;
    }

    #[tokio::test]
    async fn should_serve_health_and_api_description() {
        let cli = client();

        let resp = cli.get("/api/health").send().await;
        resp.assert_status_is_ok();
        let health = resp.json().await;
        assert_eq!(health.value().object().get("store").string(), "memory");

        let resp = cli.get("/openapi.json").send().await;
        resp.assert_status_is_ok();
        let spec = resp.json().await;
        let paths = spec.value().object().get("paths").object();
        paths.get("/products").object().get("post");
        paths.get("/products/{id}").object().get("put");
    }
}
