#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use chrono::{TimeZone, Utc};
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use salesboard_api::config::{SeedConfig, ServerConfig};
use salesboard_api::router::build_app_router;
use salesboard_api::seed::SeedClient;
use salesboard_api::state::AppState;
use salesboard_db::models::transaction::CreateTransaction;
use salesboard_db::repositories::TransactionRepo;

/// Seed URL for apps that never call the init endpoint. Nothing listens on
/// the discard port, so an accidental fetch fails fast.
const UNUSED_SEED_URL: &str = "http://127.0.0.1:9/seed.json";

/// Build a test `ServerConfig` with safe defaults.
///
/// Any CORS origin is allowed and the report year is 2022.
pub fn test_config(seed_url: &str) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        db_max_connections: 5,
        cors_origins: vec!["*".to_string()],
        request_timeout_secs: 30,
        report_year: 2022,
        seed: SeedConfig {
            url: seed_url.to_string(),
            timeout_secs: 5,
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_seed(pool, UNUSED_SEED_URL)
}

/// Same as [`build_test_app`] but fetching seed data from `seed_url`.
pub fn build_test_app_with_seed(pool: PgPool, seed_url: &str) -> Router {
    let config = test_config(seed_url);
    let seed_client = SeedClient::new(&config.seed).unwrap();

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        seed_client: Arc::new(seed_client),
    };

    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Send a GET request through the router without a TCP listener.
pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Serve `body` with `status` at `/seed.json` on a random local port and
/// return the full URL.
pub async fn serve_seed_fixture(status: StatusCode, body: String) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let app = Router::new().route(
        "/seed.json",
        axum::routing::get(move || {
            let body = body.clone();
            async move { (status, body) }
        }),
    );

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}/seed.json")
}

/// A transaction dated on the 15th of `month` 2022.
pub fn sale(title: &str, price: f64, category: &str, month: u32, sold: bool) -> CreateTransaction {
    CreateTransaction {
        title: title.to_string(),
        description: format!("{title} description"),
        price,
        category: category.to_string(),
        image: None,
        date_of_sale: Utc.with_ymd_and_hms(2022, month, 15, 10, 0, 0).unwrap(),
        sold,
    }
}

/// Replace the table contents with `entries`.
pub async fn load(pool: &PgPool, entries: &[CreateTransaction]) {
    TransactionRepo::replace_all(pool, entries).await.unwrap();
}
