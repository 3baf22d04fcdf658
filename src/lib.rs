//! Motor Repair Ops - API del taller de reparación de motores
//!
//! Empresas cliente, motores en servicio, trabajos de reparación,
//! facturas y garantías sobre PostgreSQL.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

use axum::{response::Json, routing::get, Router};
use serde_json::json;

use middleware::cors::{cors_middleware, cors_middleware_with_origins};
use state::AppState;

/// Armar el router completo de la aplicación. Sin orígenes configurados
/// el CORS queda permisivo (desarrollo).
pub fn create_app(app_state: AppState) -> Router {
    let cors = if app_state.config.cors_origins.is_empty() {
        cors_middleware()
    } else {
        cors_middleware_with_origins(app_state.config.cors_origins.clone())
    };

    Router::new()
        .route("/health", get(health_endpoint))
        .nest("/api/company", routes::company_routes::create_company_router())
        .nest("/api/motor", routes::motor_routes::create_motor_router())
        .nest("/api/job", routes::job_routes::create_job_router())
        .nest("/api/invoice", routes::invoice_routes::create_invoice_router())
        .nest("/api/warranty", routes::warranty_routes::create_warranty_router())
        .nest("/api/user", routes::user_routes::create_user_router())
        .layer(cors)
        .with_state(app_state)
}

/// Health check simple
async fn health_endpoint() -> Json<serde_json::Value> {
    Json(json!({
        "service": "motor-repair-ops",
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
