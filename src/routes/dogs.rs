use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

use crate::core::{Notice, SearchPageView, SearchSession};
use crate::models::{FavoriteResponse, MatchResponse, SearchRequest};
use crate::routes::{ApiError, AppState};
use crate::services::{DogApiError, Session};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/dogs/breeds", web::get().to(breeds))
        .route("/dogs/search", web::post().to(search))
        .route("/dogs/search/page/{page}", web::get().to(search_page))
        .route("/favorites", web::get().to(list_favorites))
        .route("/favorites/{dog_id}", web::post().to(toggle_favorite))
        .route("/match", web::post().to(generate_match))
        .route("/match", web::delete().to(dismiss_match));
}

async fn breeds(state: web::Data<AppState>, http_req: HttpRequest) -> Result<HttpResponse, ApiError> {
    let session = state.session(&http_req).await?;
    let breeds = session.client.fetch_breeds().await.map_err(|e| {
        tracing::error!("Failed to load breeds for session {}: {}", session.id, e);
        ApiError::Breeds(e)
    })?;
    Ok(HttpResponse::Ok().json(breeds))
}

/// Search with new filters
///
/// POST /api/v1/dogs/search
///
/// Request body:
/// ```json
/// { "breed": "Beagle", "sort": "asc" }
/// ```
async fn search(
    state: web::Data<AppState>,
    req: web::Json<SearchRequest>,
    http_req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    if let Err(errors) = req.validate() {
        return Err(ApiError::Validation(errors.to_string()));
    }

    let session = state.session(&http_req).await?;
    let req = req.into_inner();

    let mut search = session.state.lock().await;
    search.set_filters(req.breed, req.sort);
    let view = perform_search(&session, &mut search, 1).await?;
    Ok(HttpResponse::Ok().json(view))
}

/// Jump to a page of the current search
///
/// GET /api/v1/dogs/search/page/{page}
async fn search_page(
    state: web::Data<AppState>,
    page: web::Path<i64>,
    http_req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let session = state.session(&http_req).await?;
    let mut search = session.state.lock().await;
    let view = perform_search(&session, &mut search, page.into_inner()).await?;
    Ok(HttpResponse::Ok().json(view))
}

/// Run the catalog search for `page` and fold the results into `search`
///
/// Callers hold the session lock across the whole round trip so one user's
/// searches apply in order.
async fn perform_search(
    session: &Session,
    search: &mut SearchSession,
    page: i64,
) -> Result<SearchPageView, ApiError> {
    let params = search.search_params(page)?;

    let fail = |e: DogApiError| {
        tracing::error!("Search failed for session {}: {}", session.id, e);
        ApiError::Search(e)
    };
    let result = session.client.search_dogs(&params).await.map_err(fail)?;
    let dogs = session.client.fetch_dogs(&result.result_ids).await.map_err(fail)?;

    tracing::debug!(
        "Session {} page {}: {} dogs of {}",
        session.id,
        page,
        dogs.len(),
        result.total
    );

    search.apply_search(page, result.total, dogs);
    Ok(search.view()?)
}

async fn list_favorites(state: web::Data<AppState>, http_req: HttpRequest) -> Result<HttpResponse, ApiError> {
    let session = state.session(&http_req).await?;
    let favorites = session.state.lock().await.favorites().ids();
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "favorites": favorites,
        "count": favorites.len(),
    })))
}

/// Add or remove a dog from the favorites
async fn toggle_favorite(
    state: web::Data<AppState>,
    dog_id: web::Path<String>,
    http_req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let session = state.session(&http_req).await?;
    let dog_id = dog_id.into_inner();

    let mut search = session.state.lock().await;
    let (change, notice) = search.toggle_favorite(&dog_id, chrono::Utc::now());

    tracing::debug!("Session {} favorite {:?}: {}", session.id, change, dog_id);

    Ok(HttpResponse::Ok().json(FavoriteResponse {
        dog_id,
        change,
        favorites: search.favorites().ids(),
        notice,
    }))
}

/// Pick one dog from the favorites
///
/// POST /api/v1/match
async fn generate_match(state: web::Data<AppState>, http_req: HttpRequest) -> Result<HttpResponse, ApiError> {
    let session = state.session(&http_req).await?;
    let mut search = session.state.lock().await;

    let candidates = search.match_candidates()?;
    let fail = |e: DogApiError| {
        tracing::error!("Match generation failed for session {}: {}", session.id, e);
        ApiError::Match(e)
    };

    let result = session.client.match_dogs(&candidates).await.map_err(fail)?;
    let dog = session
        .client
        .fetch_dogs(std::slice::from_ref(&result.dog_id))
        .await
        .map_err(fail)?
        .into_iter()
        .next()
        .ok_or_else(|| {
            fail(DogApiError::InvalidResponse(format!(
                "Matched dog {} was not returned",
                result.dog_id
            )))
        })?;

    tracing::info!(
        "Session {} matched dog {} out of {} favorites",
        session.id,
        dog.id,
        candidates.len()
    );

    search.apply_match(dog.clone());

    Ok(HttpResponse::Ok().json(MatchResponse {
        dog,
        notice: Notice::success("Match generated!"),
    }))
}

/// Close the match popup
async fn dismiss_match(state: web::Data<AppState>, http_req: HttpRequest) -> Result<HttpResponse, ApiError> {
    let session = state.session(&http_req).await?;
    session.state.lock().await.clear_match();
    Ok(HttpResponse::NoContent().finish())
}
