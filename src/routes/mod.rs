// Route exports
pub mod auth;
pub mod dogs;
pub mod error;
pub mod health;

use actix_web::{web, HttpRequest};
use std::sync::Arc;

use crate::config::UpstreamSettings;
use crate::services::{Session, SessionStore};

pub use error::{handle_json_payload_error, handle_query_payload_error, ApiError};

/// Header accepted in place of the session cookie
pub const SESSION_HEADER: &str = "X-Session-Id";

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub sessions: SessionStore,
    pub upstream: UpstreamSettings,
    pub cookie_name: String,
}

impl AppState {
    /// Resolve the caller's session from the cookie or the session header
    pub async fn session(&self, req: &HttpRequest) -> Result<Arc<Session>, ApiError> {
        let session_id = req
            .cookie(&self.cookie_name)
            .map(|c| c.value().to_string())
            .or_else(|| {
                req.headers()
                    .get(SESSION_HEADER)
                    .and_then(|v| v.to_str().ok())
                    .map(str::to_string)
            })
            .ok_or(ApiError::MissingSession)?;

        self.sessions
            .get(&session_id)
            .await
            .ok_or(ApiError::MissingSession)
    }
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(health::configure)
            .configure(auth::configure)
            .configure(dogs::configure),
    );
}
