//! Health check endpoint.

use actix_web::{HttpResponse, web};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub storage: &'static str,
    pub timestamp: String,
}

/// GET /health
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    #[cfg(feature = "postgres")]
    if let Some(db) = &state.db {
        if !db.ping().await {
            tracing::warn!("Database ping failed");
        }
    }

    let response = HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        storage: state.storage(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    };

    HttpResponse::Ok().json(response)
}
