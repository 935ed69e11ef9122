// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Dog, DogCard, DogSearchParams, MatchResult, SearchResult, SortOrder};
pub use requests::{LoginRequest, PaginationQuery, SearchRequest};
pub use responses::{ErrorResponse, FavoriteResponse, HealthResponse, LoginResponse, MatchResponse, PaginationResponse};
