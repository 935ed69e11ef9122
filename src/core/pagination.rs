use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Number of slots shown before the range collapses into ellipsis form
pub const VISIBLE_WINDOW: i64 = 7;

/// Results requested from the catalog per page
pub const PAGE_SIZE: i64 = 25;

/// Pages shown next to a boundary when the current page sits near it
const EDGE_RUN: i64 = 5;

/// Errors produced by the pagination formatter
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaginationError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// A single slot in a pagination control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "page", rename_all = "lowercase")]
pub enum PageToken {
    Page(i64),
    Ellipsis,
}

impl PageToken {
    /// Page a click on this token should navigate to, if any
    pub fn target(&self) -> Option<i64> {
        match self {
            PageToken::Page(page) => Some(*page),
            PageToken::Ellipsis => None,
        }
    }

    pub fn is_ellipsis(&self) -> bool {
        matches!(self, PageToken::Ellipsis)
    }
}

impl fmt::Display for PageToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageToken::Page(page) => write!(f, "{}", page),
            PageToken::Ellipsis => f.write_str("…"),
        }
    }
}

/// Build the compact page range for a pagination control
///
/// Shows every page when they fit in the visible window, otherwise keeps the
/// first and last page and collapses the rest around the current page.
///
/// `current_page` must lie in `[1, max(total_pages, 1)]` and `total_pages`
/// must not be negative.
pub fn format_range(current_page: i64, total_pages: i64) -> Result<Vec<PageToken>, PaginationError> {
    validate(current_page, total_pages)?;

    if total_pages <= VISIBLE_WINDOW {
        return Ok((1..=total_pages).map(PageToken::Page).collect());
    }

    let range = if current_page <= EDGE_RUN - 1 {
        (1..=EDGE_RUN)
            .map(PageToken::Page)
            .chain([PageToken::Ellipsis, PageToken::Page(total_pages)])
            .collect()
    } else if current_page >= total_pages - (EDGE_RUN - 2) {
        [PageToken::Page(1), PageToken::Ellipsis]
            .into_iter()
            .chain((total_pages - EDGE_RUN + 1..=total_pages).map(PageToken::Page))
            .collect()
    } else {
        vec![
            PageToken::Page(1),
            PageToken::Ellipsis,
            PageToken::Page(current_page - 1),
            PageToken::Page(current_page),
            PageToken::Page(current_page + 1),
            PageToken::Ellipsis,
            PageToken::Page(total_pages),
        ]
    };

    Ok(range)
}

fn validate(current_page: i64, total_pages: i64) -> Result<(), PaginationError> {
    if total_pages < 0 {
        return Err(PaginationError::InvalidArgument(format!(
            "total pages must not be negative, got {}",
            total_pages
        )));
    }

    let last_page = total_pages.max(1);
    if current_page < 1 || current_page > last_page {
        return Err(PaginationError::InvalidArgument(format!(
            "current page {} is outside [1, {}]",
            current_page, last_page
        )));
    }

    Ok(())
}

/// Number of pages needed to show `total_results` at `page_size` per page
pub fn total_pages(total_results: i64, page_size: i64) -> i64 {
    if total_results <= 0 || page_size <= 0 {
        return 0;
    }
    total_results / page_size + i64::from(total_results % page_size != 0)
}

/// Zero-based result offset of the first entry on `page`
#[inline]
pub fn page_offset(page: i64, page_size: i64) -> i64 {
    (page - 1).max(0).saturating_mul(page_size)
}

/// "Showing X to Y of Z results" figures for a page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSummary {
    #[serde(rename = "currentPage")]
    pub current_page: i64,
    #[serde(rename = "totalPages")]
    pub total_pages: i64,
    #[serde(rename = "startResult")]
    pub start_result: i64,
    #[serde(rename = "endResult")]
    pub end_result: i64,
    #[serde(rename = "totalResults")]
    pub total_results: i64,
}

impl PageSummary {
    pub fn new(current_page: i64, total_results: i64, page_size: i64) -> Self {
        let total_results = total_results.max(0);
        let start_result = if total_results == 0 {
            0
        } else {
            page_offset(current_page, page_size).saturating_add(1)
        };
        let end_result = current_page.saturating_mul(page_size).min(total_results);

        Self {
            current_page,
            total_pages: total_pages(total_results, page_size),
            start_result,
            end_result,
            total_results,
        }
    }
}

/// Everything a UI needs to draw the pagination bar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageControls {
    #[serde(flatten)]
    pub summary: PageSummary,
    pub range: Vec<PageToken>,
    pub previous: Option<i64>,
    pub next: Option<i64>,
    /// Controls are hidden when everything fits on one page
    pub visible: bool,
}

impl PageControls {
    pub fn new(current_page: i64, total_results: i64, page_size: i64) -> Result<Self, PaginationError> {
        let summary = PageSummary::new(current_page, total_results, page_size);
        let range = format_range(current_page, summary.total_pages)?;

        let previous = (current_page > 1).then(|| current_page - 1);
        let next = (current_page < summary.total_pages).then(|| current_page + 1);

        Ok(Self {
            summary,
            range,
            previous,
            next,
            visible: summary.total_pages > 1,
        })
    }
}
