//! Student data repository over the JSON store.

use async_trait::async_trait;
use onestop_core::error::Result;
use onestop_core::student::{Application, Document, StudentProfile, StudentRepository};

use crate::json_store::JsonStore;

const PROFILE_KEY: &str = "profile";
const APPLICATIONS_KEY: &str = "applications";
const DOCUMENTS_KEY: &str = "documents";

/// Persists the three student collections under their own keys, each as one
/// JSON document. Every save rewrites the whole collection; there is no
/// delta persistence.
#[derive(Debug, Clone)]
pub struct JsonStudentRepository {
    store: JsonStore,
}

impl JsonStudentRepository {
    pub fn new(store: JsonStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl StudentRepository for JsonStudentRepository {
    async fn load_profile(&self) -> Result<Option<StudentProfile>> {
        self.store.read_as(PROFILE_KEY)
    }

    async fn save_profile(&self, profile: &StudentProfile) -> Result<()> {
        self.store.write(PROFILE_KEY, profile)
    }

    async fn load_applications(&self) -> Result<Option<Vec<Application>>> {
        self.store.read_as(APPLICATIONS_KEY)
    }

    async fn save_applications(&self, applications: &[Application]) -> Result<()> {
        self.store.write(APPLICATIONS_KEY, &applications)
    }

    async fn load_documents(&self) -> Result<Option<Vec<Document>>> {
        self.store.read_as(DOCUMENTS_KEY)
    }

    async fn save_documents(&self, documents: &[Document]) -> Result<()> {
        self.store.write(DOCUMENTS_KEY, &documents)
    }

    async fn clear_all(&self) -> Result<()> {
        tracing::debug!("clearing student data");
        self.store.delete(PROFILE_KEY)?;
        self.store.delete(APPLICATIONS_KEY)?;
        self.store.delete(DOCUMENTS_KEY)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use onestop_core::student::ApplicationStatus;
    use tempfile::TempDir;

    fn repository() -> (TempDir, JsonStudentRepository) {
        let dir = TempDir::new().unwrap();
        let repo = JsonStudentRepository::new(JsonStore::new(dir.path()));
        (dir, repo)
    }

    fn application() -> Application {
        Application {
            id: "app_abc123def".to_string(),
            university_id: "1".to_string(),
            university_name: "IIT Delhi".to_string(),
            course: "B.Tech".to_string(),
            applied_date: "2024-01-15".to_string(),
            status: ApplicationStatus::Applied,
            fee: 2500,
        }
    }

    #[tokio::test]
    async fn test_profile_round_trip() {
        let (_dir, repo) = repository();
        assert!(repo.load_profile().await.unwrap().is_none());

        let profile = StudentProfile {
            full_name: "Asha".to_string(),
            ..Default::default()
        };
        repo.save_profile(&profile).await.unwrap();
        assert_eq!(repo.load_profile().await.unwrap().unwrap(), profile);
    }

    #[tokio::test]
    async fn test_applications_preserve_order() {
        let (_dir, repo) = repository();
        let first = application();
        let second = Application {
            id: "app_zzz999zzz".to_string(),
            university_id: "2".to_string(),
            university_name: "Delhi University".to_string(),
            course: "BA".to_string(),
            fee: 800,
            ..application()
        };
        repo.save_applications(&[first.clone(), second.clone()])
            .await
            .unwrap();

        let loaded = repo.load_applications().await.unwrap().unwrap();
        assert_eq!(loaded, vec![first, second]);
    }

    #[tokio::test]
    async fn test_clear_all_removes_every_key() {
        let (_dir, repo) = repository();
        repo.save_profile(&StudentProfile::default()).await.unwrap();
        repo.save_applications(&[application()]).await.unwrap();
        repo.save_documents(&[]).await.unwrap();

        repo.clear_all().await.unwrap();
        assert!(repo.load_profile().await.unwrap().is_none());
        assert!(repo.load_applications().await.unwrap().is_none());
        assert!(repo.load_documents().await.unwrap().is_none());
        // Idempotent.
        repo.clear_all().await.unwrap();
    }
}
