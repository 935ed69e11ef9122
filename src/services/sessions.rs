use crate::core::SearchSession;
use crate::services::dog_api::DogApiClient;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

/// One signed-in user: their catalog client and search state
#[derive(Debug)]
pub struct Session {
    pub id: String,
    pub name: String,
    pub email: String,
    pub client: DogApiClient,
    pub state: Mutex<SearchSession>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// In-memory session registry
///
/// Entries expire after `ttl_secs` without access, matching the lifetime of
/// the catalog service's auth cookie.
#[derive(Clone)]
pub struct SessionStore {
    sessions: moka::future::Cache<String, Arc<Session>>,
    page_size: i64,
}

impl SessionStore {
    pub fn new(max_sessions: u64, ttl_secs: u64, page_size: i64) -> Self {
        let sessions = moka::future::CacheBuilder::new(max_sessions)
            .time_to_idle(Duration::from_secs(ttl_secs))
            .build();

        Self { sessions, page_size }
    }

    /// Register a freshly logged-in client and return its session
    pub async fn create(&self, name: &str, email: &str, client: DogApiClient) -> Arc<Session> {
        let session = Arc::new(Session {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.to_string(),
            email: email.to_string(),
            client,
            state: Mutex::new(SearchSession::new(self.page_size)),
            created_at: chrono::Utc::now(),
        });

        self.sessions.insert(session.id.clone(), session.clone()).await;
        tracing::debug!("Created session {} for {}", session.id, email);
        session
    }

    pub async fn get(&self, session_id: &str) -> Option<Arc<Session>> {
        self.sessions.get(session_id).await
    }

    pub async fn remove(&self, session_id: &str) -> Option<Arc<Session>> {
        self.sessions.remove(session_id).await
    }

    /// Approximate number of live sessions
    pub fn count(&self) -> u64 {
        self.sessions.entry_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::pagination::PAGE_SIZE;

    fn client() -> DogApiClient {
        DogApiClient::new("http://127.0.0.1:9", 1).unwrap()
    }

    #[tokio::test]
    async fn test_create_get_remove() {
        let store = SessionStore::new(10, 60, PAGE_SIZE);

        let session = store.create("Ada", "ada@example.com", client()).await;
        let found = store.get(&session.id).await.expect("session should exist");
        assert_eq!(found.email, "ada@example.com");

        assert!(store.remove(&session.id).await.is_some());
        assert!(store.get(&session.id).await.is_none());
    }

    #[tokio::test]
    async fn test_sessions_are_isolated() {
        let store = SessionStore::new(10, 60, PAGE_SIZE);
        let a = store.create("A", "a@example.com", client()).await;
        let b = store.create("B", "b@example.com", client()).await;
        assert_ne!(a.id, b.id);

        a.state.lock().await.toggle_favorite("dog-1", chrono::Utc::now());
        assert_eq!(a.state.lock().await.favorites().len(), 1);
        assert!(b.state.lock().await.favorites().is_empty());
    }
}
