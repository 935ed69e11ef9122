// Service exports
pub mod dog_api;
pub mod sessions;

pub use dog_api::{DogApiClient, DogApiError, DEFAULT_BASE_URL, MAX_IDS_PER_REQUEST};
pub use sessions::{Session, SessionStore};
