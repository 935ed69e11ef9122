use actix_web::cookie::{Cookie, SameSite};
use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

use crate::core::Notice;
use crate::models::{LoginRequest, LoginResponse};
use crate::routes::{ApiError, AppState};
use crate::services::DogApiClient;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/auth/login", web::post().to(login))
        .route("/auth/logout", web::post().to(logout));
}

/// Login endpoint
///
/// POST /api/v1/auth/login
///
/// Request body:
/// ```json
/// { "name": "string", "email": "string" }
/// ```
async fn login(
    state: web::Data<AppState>,
    req: web::Json<LoginRequest>,
) -> Result<HttpResponse, ApiError> {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for login request: {:?}", errors);
        return Err(ApiError::Validation(errors.to_string()));
    }

    let client = DogApiClient::new(state.upstream.base_url.clone(), state.upstream.timeout_secs)?;

    if let Err(e) = client.login(&req.name, &req.email).await {
        tracing::warn!("Login failed for {}: {}", req.email, e);
        return Err(ApiError::LoginFailed);
    }

    let session = state.sessions.create(&req.name, &req.email, client).await;
    tracing::info!("User {} <{}> logged in (session {})", session.name, session.email, session.id);

    let cookie = Cookie::build(state.cookie_name.clone(), session.id.clone())
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .finish();

    Ok(HttpResponse::Ok().cookie(cookie).json(LoginResponse {
        session_id: session.id.clone(),
        name: session.name.clone(),
        created_at: session.created_at,
        notice: Notice::success("Login successful!"),
    }))
}

/// Logout endpoint
///
/// Drops the local session even when the catalog service refuses the logout.
async fn logout(state: web::Data<AppState>, http_req: HttpRequest) -> Result<HttpResponse, ApiError> {
    let session = state.session(&http_req).await?;
    state.sessions.remove(&session.id).await;

    if let Err(e) = session.client.logout().await {
        tracing::warn!("Upstream logout failed for session {}: {}", session.id, e);
    }

    tracing::info!(
        "Session {} for {} logged out after {}s",
        session.id,
        session.name,
        (chrono::Utc::now() - session.created_at).num_seconds()
    );

    let mut removal = Cookie::build(state.cookie_name.clone(), "").path("/").finish();
    removal.make_removal();

    Ok(HttpResponse::Ok().cookie(removal).json(serde_json::json!({
        "success": true,
    })))
}
