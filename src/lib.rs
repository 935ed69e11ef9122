//! Shelter Match - backend for browsing and matching adoptable shelter dogs
//!
//! Wraps the dog catalog service behind per-user sessions and produces
//! ready-to-render search pages, including a compact pagination control.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{format_range, PageControls, PageToken, PaginationError, SearchSession};
pub use models::{Dog, DogSearchParams, SearchResult, SortOrder};
pub use services::{DogApiClient, DogApiError, SessionStore};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let range = format_range(10, 20).unwrap();
        assert_eq!(range.len(), 7);
        assert_eq!(range[1], PageToken::Ellipsis);
    }
}
