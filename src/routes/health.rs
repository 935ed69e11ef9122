use actix_web::{web, HttpResponse};

use crate::core::format_range;
use crate::models::{HealthResponse, PaginationQuery, PaginationResponse};
use crate::routes::{ApiError, AppState};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/pagination", web::get().to(pagination));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        active_sessions: state.sessions.count(),
    })
}

/// Page range for a pagination control
///
/// GET /api/v1/pagination?current={page}&total={totalPages}
async fn pagination(query: web::Query<PaginationQuery>) -> Result<HttpResponse, ApiError> {
    let range = format_range(query.current, query.total)?;

    Ok(HttpResponse::Ok().json(PaginationResponse {
        current: query.current,
        total: query.total,
        range,
    }))
}
