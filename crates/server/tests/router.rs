use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use models::RecordKind;
use mongodb::bson::{doc, Bson, Document};
use serde_json::{json, Value};
use service::storage::{DocumentStore, MemoryStore, StoreError};
use service::StoreGateway;
use tower::ServiceExt;

use server::routes::{self, ServerState};

fn app(store: StoreGateway) -> Router {
    routes::build_router(
        ServerState::new(store),
        tower_http::cors::CorsLayer::very_permissive(),
        Duration::from_secs(5),
    )
}

struct FailingStore;

#[async_trait]
impl DocumentStore for FailingStore {
    fn database_name(&self) -> &str { "shop" }
    async fn insert(&self, _: RecordKind, _: Document) -> Result<Bson, StoreError> {
        Err(StoreError::Backend("connection refused by upstream host at 10.0.0.7:27017".into()))
    }
    async fn find(&self, _: RecordKind, _: Document, _: i64) -> Result<Vec<Document>, StoreError> {
        Err(StoreError::Backend("connection refused".into()))
    }
    async fn list_collections(&self) -> Result<Vec<String>, StoreError> {
        Err(StoreError::Backend("connection refused by upstream host at 10.0.0.7:27017".into()))
    }
    async fn ping(&self) -> Result<(), StoreError> {
        Err(StoreError::Backend("connection refused".into()))
    }
}

async fn send(app: &Router, req: Request<Body>) -> anyhow::Result<(StatusCode, Value)> {
    let resp = app.clone().oneshot(req).await?;
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await?;
    let body = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes)? };
    Ok((status, body))
}

fn get(uri: &str) -> anyhow::Result<Request<Body>> {
    Ok(Request::builder().uri(uri).body(Body::empty())?)
}

fn post_json(uri: &str, body: &Value) -> anyhow::Result<Request<Body>> {
    Ok(Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body)?))?)
}

fn order_payload() -> Value {
    json!({
        "items": [
            {"sku": "HIDE-PRM-210", "title": "Gyuto", "price": 38500, "quantity": 1},
            {"sku": "HIDE-PET-150", "title": "Petty", "price": 19800, "quantity": 2}
        ],
        "customer_name": "Aiko",
        "customer_email": "aiko@example.com",
        "total": 78100
    })
}

#[tokio::test]
async fn root_and_health() -> anyhow::Result<()> {
    let app = app(StoreGateway::unconfigured());
    let (status, body) = send(&app, get("/")?).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Atelier API running"}));

    let (status, body) = send(&app, get("/health")?).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn products_fall_back_without_store() -> anyhow::Result<()> {
    let app = app(StoreGateway::unconfigured());
    let (status, body) = send(&app, get("/api/products")?).await?;
    assert_eq!(status, StatusCode::OK);
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["sku"], "HIDE-PRM-210");
    Ok(())
}

#[tokio::test]
async fn inserted_product_is_listed_with_string_id() -> anyhow::Result<()> {
    let store = Arc::new(MemoryStore::new("shop"));
    store.insert(RecordKind::Product, doc! {"sku": "X1", "title": "Knife", "price": 1000}).await?;
    let app = app(StoreGateway::new(store));

    let (status, body) = send(&app, get("/api/products?limit=20")?).await?;
    assert_eq!(status, StatusCode::OK);
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["sku"], "X1");
    assert_eq!(items[0]["price"], 1000);
    assert!(items[0]["_id"].is_string());
    Ok(())
}

#[tokio::test]
async fn product_limit_is_clamped() -> anyhow::Result<()> {
    let store = Arc::new(MemoryStore::new("shop"));
    for i in 0..3 {
        store.insert(RecordKind::Product, doc! {"sku": format!("S{i}"), "title": "t", "price": 1}).await?;
    }
    let app = app(StoreGateway::new(store));

    let (_, body) = send(&app, get("/api/products?limit=0")?).await?;
    assert_eq!(body.as_array().unwrap().len(), 1);
    let (_, body) = send(&app, get("/api/products?limit=500")?).await?;
    assert_eq!(body.as_array().unwrap().len(), 3);
    let (status, body) = send(&app, get("/api/products?limit=lots")?).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 3);
    Ok(())
}

#[tokio::test]
async fn contact_is_stored() -> anyhow::Result<()> {
    let store = Arc::new(MemoryStore::new("shop"));
    let app = app(StoreGateway::new(store.clone()));
    let payload = json!({"name": "Ken", "email": "ken@example.com", "message": "Is the gyuto in stock?", "language": "ja"});

    let (status, body) = send(&app, post_json("/api/contact", &payload)?).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["stored"], true);
    assert!(body["id"].is_string());
    assert_eq!(store.len(RecordKind::ContactInquiry).await, 1);
    Ok(())
}

#[tokio::test]
async fn contact_without_store_reports_not_stored() -> anyhow::Result<()> {
    let app = app(StoreGateway::unconfigured());
    let payload = json!({"name": "Ken", "email": "ken@example.com", "message": "hello"});
    let (status, body) = send(&app, post_json("/api/contact", &payload)?).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok", "id": null, "stored": false}));
    Ok(())
}

#[tokio::test]
async fn invalid_email_is_rejected_and_not_persisted() -> anyhow::Result<()> {
    let store = Arc::new(MemoryStore::new("shop"));
    let app = app(StoreGateway::new(store.clone()));
    let payload = json!({"name": "Ken", "email": "not-an-email", "message": "hello"});

    let (status, body) = send(&app, post_json("/api/contact", &payload)?).await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "Validation Error");
    assert_eq!(body["fields"][0]["field"], "email");
    assert_eq!(store.len(RecordKind::ContactInquiry).await, 0);
    Ok(())
}

#[tokio::test]
async fn missing_field_is_unprocessable() -> anyhow::Result<()> {
    let app = app(StoreGateway::unconfigured());
    let (status, body) = send(&app, post_json("/api/contact", &json!({"name": "Ken"}))?).await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].as_str().unwrap().contains("email"));
    assert!(body.get("fields").is_none());
    Ok(())
}

#[tokio::test]
async fn malformed_json_is_bad_request() -> anyhow::Result<()> {
    let app = app(StoreGateway::unconfigured());
    let req = Request::builder()
        .method("POST")
        .uri("/api/contact")
        .header("content-type", "application/json")
        .body(Body::from("{\"name\": "))?;
    let (status, body) = send(&app, req).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Bad Request");
    Ok(())
}

#[tokio::test]
async fn order_is_stored_with_total() -> anyhow::Result<()> {
    let store = Arc::new(MemoryStore::new("shop"));
    let app = app(StoreGateway::new(store.clone()));

    let (status, body) = send(&app, post_json("/api/orders", &order_payload())?).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["stored"], true);
    assert_eq!(body["total"], 78100.0);
    assert!(body["id"].is_string());
    assert_eq!(store.len(RecordKind::Order).await, 1);
    Ok(())
}

#[tokio::test]
async fn empty_order_is_bad_request() -> anyhow::Result<()> {
    let store = Arc::new(MemoryStore::new("shop"));
    let app = app(StoreGateway::new(store.clone()));
    let payload = json!({"items": [], "customer": {"name": "Aiko", "email": "aiko@example.com"}});

    let (status, body) = send(&app, post_json("/api/orders", &payload)?).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].as_str().unwrap().contains("No items provided"));
    assert_eq!(store.len(RecordKind::Order).await, 0);
    Ok(())
}

#[tokio::test]
async fn order_with_zero_quantity_names_the_item() -> anyhow::Result<()> {
    let app = app(StoreGateway::unconfigured());
    let mut payload = order_payload();
    payload["items"][1]["quantity"] = json!(0);

    let (status, body) = send(&app, post_json("/api/orders", &payload)?).await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["fields"][0]["field"], "items[1].quantity");
    Ok(())
}

#[tokio::test]
async fn negative_quantity_names_the_item_field() -> anyhow::Result<()> {
    let store = Arc::new(MemoryStore::new("shop"));
    let app = app(StoreGateway::new(store.clone()));
    let mut payload = order_payload();
    payload["items"][0]["quantity"] = json!(-1);

    let (status, body) = send(&app, post_json("/api/orders", &payload)?).await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["fields"][0]["field"], "items[0].quantity");
    assert_eq!(store.len(RecordKind::Order).await, 0);
    Ok(())
}

#[tokio::test]
async fn wrongly_typed_price_names_the_field() -> anyhow::Result<()> {
    let app = app(StoreGateway::unconfigured());
    let mut payload = order_payload();
    payload["items"][1]["price"] = json!("cheap");

    let (status, body) = send(&app, post_json("/api/orders", &payload)?).await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["fields"][0]["field"], "items[1].price");
    assert!(body["detail"].as_str().unwrap().contains("price"));
    Ok(())
}

#[tokio::test]
async fn failing_store_degrades_per_operation() -> anyhow::Result<()> {
    let app = app(StoreGateway::new(Arc::new(FailingStore)));

    let (status, body) = send(&app, get("/api/products")?).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);

    let payload = json!({"name": "Ken", "email": "ken@example.com", "message": "hello"});
    let (status, body) = send(&app, post_json("/api/contact", &payload)?).await?;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["error"], "Store Unavailable");
    assert!(!body.to_string().contains("10.0.0.7"));

    let (status, _) = send(&app, post_json("/api/orders", &order_payload())?).await?;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);

    let (status, body) = send(&app, get("/test")?).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["connection_status"], "failed");
    assert_eq!(body["database_url"], "set");
    let database = body["database"].as_str().unwrap();
    assert!(database.starts_with("error: "));
    assert!(database.chars().count() <= "error: ".len() + 50);
    Ok(())
}

#[tokio::test]
async fn diagnostic_reports_connected_store() -> anyhow::Result<()> {
    let store = Arc::new(MemoryStore::new("shop"));
    store.insert(RecordKind::Order, doc! {"total": 1}).await?;
    let app = app(StoreGateway::new(store));

    let (status, body) = send(&app, get("/test")?).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["backend"], "running");
    assert_eq!(body["database"], "connected");
    assert_eq!(body["database_name"], "shop");
    assert_eq!(body["collections"], json!(["order"]));
    Ok(())
}

#[tokio::test]
async fn diagnostic_without_store_is_skipped() -> anyhow::Result<()> {
    let app = app(StoreGateway::unconfigured());
    let (_, body) = send(&app, get("/test")?).await?;
    assert_eq!(body["database"], "not_configured");
    assert_eq!(body["database_url"], "not_set");
    assert_eq!(body["connection_status"], "skipped");
    assert_eq!(body["collections"], json!([]));
    Ok(())
}

#[tokio::test]
async fn openapi_document_is_served() -> anyhow::Result<()> {
    let app = app(StoreGateway::unconfigured());
    let (status, body) = send(&app, get("/api-docs/openapi.json")?).await?;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"].get("/api/orders").is_some());
    assert_eq!(body["info"]["title"], "Atelier API");
    Ok(())
}
