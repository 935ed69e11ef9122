use crate::models::{Dog, DogSearchParams, MatchResult, SearchResult};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::json;
use std::time::Duration;
use thiserror::Error;

/// Default catalog service endpoint
pub const DEFAULT_BASE_URL: &str = "https://frontend-take-home-service.fetch.com";

/// Largest id batch accepted by `/dogs`; `/dogs/match` takes any number
pub const MAX_IDS_PER_REQUEST: usize = 100;

/// Errors that can occur when talking to the dog catalog service
#[derive(Debug, Error)]
pub enum DogApiError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Unauthorized: session expired or not logged in")]
    Unauthorized,

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Client for the dog catalog service
///
/// Authentication is an HTTP-only cookie set by `/auth/login`, so every
/// client carries its own cookie jar and stands for exactly one signed-in user.
#[derive(Debug, Clone)]
pub struct DogApiClient {
    base_url: String,
    client: Client,
}

impl DogApiClient {
    /// Create a new client with an empty cookie jar
    pub fn new(base_url: impl Into<String>, timeout_secs: u64) -> Result<Self, DogApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .cookie_store(true)
            .build()?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Sign in; the service answers with an auth cookie kept in this client's jar
    pub async fn login(&self, name: &str, email: &str) -> Result<(), DogApiError> {
        tracing::debug!("Logging in as {}", email);

        let response = self
            .client
            .post(self.url("/auth/login"))
            .json(&json!({ "name": name, "email": email }))
            .send()
            .await?;

        check_status(response, "login").await?;
        Ok(())
    }

    pub async fn logout(&self) -> Result<(), DogApiError> {
        let response = self.client.post(self.url("/auth/logout")).send().await?;
        check_status(response, "logout").await?;
        Ok(())
    }

    /// All breed names known to the catalog
    pub async fn fetch_breeds(&self) -> Result<Vec<String>, DogApiError> {
        let response = self.client.get(self.url("/dogs/breeds")).send().await?;
        let response = check_status(response, "fetch breeds").await?;
        parse_json(response, "breeds").await
    }

    /// Run a catalog search, returning one page of ids and the total count
    pub async fn search_dogs(&self, params: &DogSearchParams) -> Result<SearchResult, DogApiError> {
        let query = params.to_query();
        tracing::debug!("Searching dogs with {:?}", query);

        let response = self
            .client
            .get(self.url("/dogs/search"))
            .query(&query)
            .send()
            .await?;

        let response = check_status(response, "search dogs").await?;
        let result: SearchResult = parse_json(response, "search result").await?;

        tracing::debug!("Search returned {} ids (total: {})", result.result_ids.len(), result.total);
        Ok(result)
    }

    /// Resolve dog ids into full records
    pub async fn fetch_dogs(&self, dog_ids: &[String]) -> Result<Vec<Dog>, DogApiError> {
        if dog_ids.is_empty() {
            return Ok(Vec::new());
        }
        check_batch(dog_ids)?;

        let response = self
            .client
            .post(self.url("/dogs"))
            .json(dog_ids)
            .send()
            .await?;

        let response = check_status(response, "fetch dogs").await?;
        parse_json(response, "dogs").await
    }

    /// Ask the service to pick one dog out of `dog_ids`
    pub async fn match_dogs(&self, dog_ids: &[String]) -> Result<MatchResult, DogApiError> {
        if dog_ids.is_empty() {
            return Err(DogApiError::InvalidInput("at least one dog id is required".into()));
        }

        let response = self
            .client
            .post(self.url("/dogs/match"))
            .json(dog_ids)
            .send()
            .await?;

        let response = check_status(response, "match dogs").await?;
        parse_json(response, "match").await
    }
}

fn check_batch(dog_ids: &[String]) -> Result<(), DogApiError> {
    if dog_ids.len() > MAX_IDS_PER_REQUEST {
        return Err(DogApiError::InvalidInput(format!(
            "at most {} dog ids per request, got {}",
            MAX_IDS_PER_REQUEST,
            dog_ids.len()
        )));
    }
    Ok(())
}

async fn check_status(response: Response, action: &str) -> Result<Response, DogApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    if status == StatusCode::UNAUTHORIZED {
        tracing::warn!("Catalog service rejected {}: unauthorized", action);
        return Err(DogApiError::Unauthorized);
    }

    let body = response.text().await.unwrap_or_else(|_| "Unable to read body".to_string());
    tracing::error!("Failed to {}: {} - {}", action, status, body);
    Err(DogApiError::ApiError(format!("Failed to {}: {}", action, status)))
}

async fn parse_json<T: DeserializeOwned>(response: Response, what: &str) -> Result<T, DogApiError> {
    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes)
        .map_err(|e| DogApiError::InvalidResponse(format!("Failed to parse {}: {}", what, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation_trims_base_url() {
        let client = DogApiClient::new("https://dogs.test/", 5).unwrap();
        assert_eq!(client.base_url(), "https://dogs.test");
        assert_eq!(client.url("/dogs"), "https://dogs.test/dogs");
    }

    #[test]
    fn test_batch_limit() {
        let ids: Vec<String> = (0..=MAX_IDS_PER_REQUEST).map(|i| i.to_string()).collect();
        assert!(matches!(check_batch(&ids), Err(DogApiError::InvalidInput(_))));
        assert!(check_batch(&ids[..MAX_IDS_PER_REQUEST]).is_ok());
    }
}
