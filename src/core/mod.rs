// Core exports
pub mod favorites;
pub mod notice;
pub mod pagination;
pub mod session;

pub use favorites::{FavoriteChange, Favorites};
pub use notice::{Notice, NoticeLevel, NoticeThrottle};
pub use pagination::{format_range, PageControls, PageSummary, PageToken, PaginationError, PAGE_SIZE, VISIBLE_WINDOW};
pub use session::{SearchPageView, SearchSession, SessionError};
