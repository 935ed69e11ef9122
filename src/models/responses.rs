use serde::{Deserialize, Serialize};

use crate::core::favorites::FavoriteChange;
use crate::core::notice::Notice;
use crate::core::pagination::PageToken;
use crate::models::domain::Dog;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub active_sessions: u64,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notice: Option<Notice>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(rename = "sessionId")]
    pub session_id: String,
    pub name: String,
    #[serde(rename = "createdAt")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub notice: Notice,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginationResponse {
    pub current: i64,
    pub total: i64,
    pub range: Vec<PageToken>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoriteResponse {
    #[serde(rename = "dogId")]
    pub dog_id: String,
    pub change: FavoriteChange,
    pub favorites: Vec<String>,
    pub notice: Option<Notice>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResponse {
    pub dog: Dog,
    pub notice: Notice,
}
