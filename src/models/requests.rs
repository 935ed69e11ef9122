use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::SortOrder;

/// Request to open a session
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(email)]
    pub email: String,
}

/// Request to (re)run the catalog search with new filters
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct SearchRequest {
    /// Empty or missing means all breeds
    #[serde(default)]
    #[validate(length(max = 200))]
    pub breed: Option<String>,
    #[serde(default)]
    pub sort: Option<SortOrder>,
}

/// Query for the standalone pagination endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginationQuery {
    pub current: i64,
    pub total: i64,
}
