//! Session repository over the JSON store.

use async_trait::async_trait;
use onestop_core::error::Result;
use onestop_core::session::{SessionRepository, UserSession};

use crate::json_store::JsonStore;

/// Persisted key for the current session.
const USER_KEY: &str = "user";

/// Stores the single [`UserSession`] under the `user` key.
///
/// This type and the auth manager above it are the only writers of that key.
#[derive(Debug, Clone)]
pub struct JsonSessionRepository {
    store: JsonStore,
}

impl JsonSessionRepository {
    pub fn new(store: JsonStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl SessionRepository for JsonSessionRepository {
    async fn load(&self) -> Result<Option<UserSession>> {
        self.store.read_as(USER_KEY)
    }

    async fn save(&self, session: &UserSession) -> Result<()> {
        tracing::debug!(email = %session.email, "saving session");
        self.store.write(USER_KEY, session)
    }

    async fn clear(&self) -> Result<()> {
        tracing::debug!("clearing session");
        self.store.delete(USER_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn repository() -> (TempDir, JsonSessionRepository) {
        let dir = TempDir::new().unwrap();
        let repo = JsonSessionRepository::new(JsonStore::new(dir.path()));
        (dir, repo)
    }

    fn session() -> UserSession {
        UserSession {
            id: "user_abc123def".to_string(),
            email: "a@b.com".to_string(),
            name: "a".to_string(),
        }
    }

    #[tokio::test]
    async fn test_save_and_load() {
        let (_dir, repo) = repository();
        assert!(repo.load().await.unwrap().is_none());

        repo.save(&session()).await.unwrap();
        let loaded = repo.load().await.unwrap().unwrap();
        assert_eq!(loaded, session());
    }

    #[tokio::test]
    async fn test_clear() {
        let (_dir, repo) = repository();
        repo.save(&session()).await.unwrap();
        repo.clear().await.unwrap();
        assert!(repo.load().await.unwrap().is_none());
        // Clearing an absent session is Ok.
        repo.clear().await.unwrap();
    }

    #[tokio::test]
    async fn test_corrupt_session_loads_as_absent() {
        let (dir, repo) = repository();
        std::fs::write(dir.path().join("user.json"), "{{{{").unwrap();
        assert!(repo.load().await.unwrap().is_none());
    }
}
