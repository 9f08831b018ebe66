//! Metro Fleet Planner
//!
//! Backend del dashboard de planificación de la flota de metro:
//! recomendaciones de asignación, simulador what-if, job cards,
//! exportaciones y simulación de la línea.

pub mod config;
pub mod controllers;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

use axum::{response::Json, routing::get, Router};
use serde_json::{json, Value};
use tower_http::compression::CompressionLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use middleware::cors::cors_middleware;
use state::AppState;

/// Router completo de la aplicación
pub fn create_app(state: AppState) -> Router {
    let cors = cors_middleware(&state.config.cors_origins);
    let timeout = TimeoutLayer::new(state.config.request_timeout());

    Router::new()
        .route("/health", get(health))
        .nest("/api/login", routes::auth_routes::create_auth_router())
        .nest("/api/mode", routes::mode_routes::create_mode_router())
        .nest("/api/trains", routes::fleet_routes::create_fleet_router())
        .nest("/api/job-cards", routes::job_card_routes::create_job_card_router())
        .nest("/api/planner", routes::planner_routes::create_planner_router())
        .nest("/api/what-if", routes::what_if_routes::create_what_if_router())
        .nest("/api/dashboard", routes::dashboard_routes::create_dashboard_router())
        .nest("/api/reports", routes::report_routes::create_report_router())
        .nest("/api/line", routes::line_routes::create_line_router())
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(timeout)
        .layer(cors)
        .with_state(state)
}

/// Endpoint de salud
async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "metro-fleet-planner",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
