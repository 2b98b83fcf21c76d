use axum::{extract::State, routing::get, Router};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::database::manager::Database;

mod config;
mod database;
mod error;
mod handlers;

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up DATABASE_URL etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = config::AppConfig::from_env();
    tracing::info!("Starting Coffee API in {:?} mode", config.environment);

    let db = Database::connect(&config.database)
        .await
        .unwrap_or_else(|e| panic!("failed to connect to database: {}", e));

    // Idempotent, safe to run on every boot
    db.ensure_schema()
        .await
        .unwrap_or_else(|e| panic!("failed to initialize schema: {}", e));

    let app = app(db.clone());

    // Allow tests or deployments to override port via env
    let port = std::env::var("COFFEE_API_PORT")
        .ok()
        .or_else(|| std::env::var("PORT").ok())
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(3000);

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    tracing::info!("Coffee API listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");

    db.close().await;
}

fn app(db: Database) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .merge(coffee_routes())
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(db)
}

fn coffee_routes() -> Router<Database> {
    use handlers::coffee;

    // The collection path is canonically "/coffees/"; axum 0.7 does not
    // redirect trailing slashes, so both spellings are registered.
    let collection = get(coffee::coffee_list).post(coffee::coffee_create);

    Router::new()
        .route("/coffees", collection.clone())
        .route("/coffees/", collection)
        .route(
            "/coffees/:id",
            get(coffee::coffee_show)
                .put(coffee::coffee_update)
                .delete(coffee::coffee_delete),
        )
}

async fn root() -> axum::response::Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    axum::response::Json(json!({
        "name": "Coffee API",
        "version": version,
        "description": "CRUD API for coffee catalog records",
        "endpoints": {
            "health": "GET /health",
            "list": "GET /coffees/",
            "create": "POST /coffees/",
            "show": "GET /coffees/:id",
            "update": "PUT /coffees/:id",
            "delete": "DELETE /coffees/:id",
        }
    }))
}

async fn health(State(db): State<Database>) -> impl axum::response::IntoResponse {
    let now = chrono::Utc::now();

    match db.health_check().await {
        Ok(_) => (
            axum::http::StatusCode::OK,
            axum::response::Json(json!({
                "status": "ok",
                "timestamp": now,
                "database": "ok"
            })),
        ),
        Err(e) => (
            axum::http::StatusCode::SERVICE_UNAVAILABLE,
            axum::response::Json(json!({
                "status": "degraded",
                "timestamp": now,
                "database_error": e.to_string()
            })),
        ),
    }
}
