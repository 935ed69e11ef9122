use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::favorites::{FavoriteChange, Favorites};
use crate::core::notice::{Notice, NoticeThrottle};
use crate::core::pagination::{page_offset, total_pages, PageControls, PaginationError};
use crate::models::{Dog, DogCard, DogSearchParams, SortOrder};

/// Errors raised by search session transitions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("Please select at least one favorite dog.")]
    NoFavorites,

    #[error(transparent)]
    Pagination(#[from] PaginationError),
}

/// Snapshot of a session, shaped for the search page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchPageView {
    pub breed: Option<String>,
    pub sort: SortOrder,
    pub dogs: Vec<DogCard>,
    pub pagination: PageControls,
    pub favorites: Vec<String>,
    #[serde(rename = "match")]
    pub matched: Option<Dog>,
}

/// Search state for one signed-in user
///
/// Owns the filters, the current page of results, the favorites and the last
/// match. Network calls happen outside; their results are fed back in through
/// the `apply_*` methods.
#[derive(Debug, Clone)]
pub struct SearchSession {
    page_size: i64,
    breed: Option<String>,
    sort: SortOrder,
    current_page: i64,
    total_results: i64,
    dogs: Vec<Dog>,
    favorites: Favorites,
    matched: Option<Dog>,
    throttle: NoticeThrottle,
}

impl SearchSession {
    pub fn new(page_size: i64) -> Self {
        Self {
            page_size: page_size.max(1),
            breed: None,
            sort: SortOrder::default(),
            current_page: 1,
            total_results: 0,
            dogs: Vec::new(),
            favorites: Favorites::new(),
            matched: None,
            throttle: NoticeThrottle::new(),
        }
    }

    pub fn current_page(&self) -> i64 {
        self.current_page
    }

    pub fn total_results(&self) -> i64 {
        self.total_results
    }

    pub fn favorites(&self) -> &Favorites {
        &self.favorites
    }

    pub fn matched(&self) -> Option<&Dog> {
        self.matched.as_ref()
    }

    /// Replace the filters; the next search starts from the first page
    pub fn set_filters(&mut self, breed: Option<String>, sort: Option<SortOrder>) {
        self.breed = breed
            .map(|b| b.trim().to_string())
            .filter(|b| !b.is_empty());
        if let Some(sort) = sort {
            self.sort = sort;
        }
        self.current_page = 1;
    }

    /// Build the catalog query for `page` under the current filters
    pub fn search_params(&self, page: i64) -> Result<DogSearchParams, SessionError> {
        let last_page = total_pages(self.total_results, self.page_size).max(1);
        if page < 1 || page > last_page {
            return Err(PaginationError::InvalidArgument(format!(
                "page {} is outside [1, {}]",
                page, last_page
            ))
            .into());
        }

        Ok(DogSearchParams {
            breeds: self.breed.clone().map(|b| vec![b]),
            size: Some(self.page_size as u32),
            from: Some(page_offset(page, self.page_size).to_string()),
            sort: Some(self.sort.breed_sort()),
            ..Default::default()
        })
    }

    /// Record a completed search; any previous match is dismissed
    ///
    /// The catalog may report a smaller total than the one `page` was chosen
    /// from, so the page is pulled back onto the new last page.
    pub fn apply_search(&mut self, page: i64, total_results: i64, dogs: Vec<Dog>) {
        self.total_results = total_results.max(0);
        let last_page = total_pages(self.total_results, self.page_size).max(1);
        self.current_page = page.clamp(1, last_page);
        self.dogs = dogs;
        self.matched = None;
    }

    pub fn toggle_favorite(&mut self, dog_id: &str, now: DateTime<Utc>) -> (FavoriteChange, Option<Notice>) {
        let (favorites, change) = self.favorites.toggle(dog_id);
        self.favorites = favorites;

        let notice = match change {
            FavoriteChange::Added => Notice::success("Added to favorites"),
            FavoriteChange::Removed => Notice::info("Removed from favorites"),
        };

        (change, self.throttle.admit(notice, now))
    }

    /// Ids to submit for a match
    pub fn match_candidates(&self) -> Result<Vec<String>, SessionError> {
        if self.favorites.is_empty() {
            return Err(SessionError::NoFavorites);
        }
        Ok(self.favorites.ids())
    }

    pub fn apply_match(&mut self, dog: Dog) {
        self.matched = Some(dog);
    }

    pub fn clear_match(&mut self) {
        self.matched = None;
    }

    pub fn view(&self) -> Result<SearchPageView, SessionError> {
        let pagination = PageControls::new(self.current_page, self.total_results, self.page_size)?;

        let dogs = self
            .dogs
            .iter()
            .map(|dog| DogCard {
                is_favorite: self.favorites.contains(&dog.id),
                dog: dog.clone(),
            })
            .collect();

        Ok(SearchPageView {
            breed: self.breed.clone(),
            sort: self.sort,
            dogs,
            pagination,
            favorites: self.favorites.ids(),
            matched: self.matched.clone(),
        })
    }
}
