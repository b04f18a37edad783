use axum::{
    http::{Method, Uri},
    routing::get,
    Router,
};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tera::Tera;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::web::{error::AppError, routes::*};

pub mod assets;
pub mod error;
pub mod models;
pub mod routes;
pub mod views;

pub struct AppState {
    pub db_pool: DatabaseConnection,
    pub templates: Tera,
}

async fn health_check_handler() -> &'static str {
    "OK"
}

async fn not_found_handler(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

pub fn create_axum_router(db_pool: DatabaseConnection, templates: Tera) -> Router {
    let app_state = Arc::new(AppState { db_pool, templates });

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    Router::new()
        .route("/api/health", get(health_check_handler))
        .nest("/api/todos", todo_routes::todo_api_router())
        .merge(page_routes::page_router())
        .route("/assets/{*path}", get(assets::static_asset_handler))
        .fallback(not_found_handler)
        .with_state(app_state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
