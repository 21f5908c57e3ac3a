//! Student state manager.
//!
//! Owns the in-memory profile, application list, and document vault, and is
//! the only writer of their persisted keys. Every mutation rewrites the
//! affected collection in full; persistence is best-effort by contract but
//! write failures are still surfaced to the caller.

use onestop_core::error::Result;
use onestop_core::student::{
    Application, ApplicationStatus, Document, ProfileUpdate, StudentProfile, StudentRepository,
};
use std::sync::Arc;
use tokio::sync::RwLock;

struct StudentState {
    profile: StudentProfile,
    applications: Vec<Application>,
    documents: Vec<Document>,
}

/// The single owner of the three student collections. Screens get read
/// access through the accessors and mutate only through the operations
/// below. Clone handles share state.
#[derive(Clone)]
pub struct StudentManager {
    state: Arc<RwLock<StudentState>>,
    repository: Arc<dyn StudentRepository>,
}

impl StudentManager {
    /// Creates a manager, initializing each collection from the repository
    /// and falling back to the canonical empty value when a key is absent
    /// (or unparseable, which the store reports as absent).
    pub async fn load(repository: Arc<dyn StudentRepository>) -> Result<Self> {
        let profile = repository.load_profile().await?.unwrap_or_default();
        let applications = repository.load_applications().await?.unwrap_or_default();
        let documents = repository.load_documents().await?.unwrap_or_default();

        Ok(Self {
            state: Arc::new(RwLock::new(StudentState {
                profile,
                applications,
                documents,
            })),
            repository,
        })
    }

    /// The current profile.
    pub async fn profile(&self) -> StudentProfile {
        self.state.read().await.profile.clone()
    }

    /// The application list, in insertion order.
    pub async fn applications(&self) -> Vec<Application> {
        self.state.read().await.applications.clone()
    }

    /// The document vault, in insertion order.
    pub async fn documents(&self) -> Vec<Document> {
        self.state.read().await.documents.clone()
    }

    /// Whether an application to this university already exists. Call sites
    /// use this to dedup before [`add_application`](Self::add_application).
    pub async fn has_applied(&self, university_id: &str) -> bool {
        self.state
            .read()
            .await
            .applications
            .iter()
            .any(|a| a.university_id == university_id)
    }

    /// Merges the given fields into the profile, last-write-wins per field,
    /// no validation, then persists the full profile.
    pub async fn update_profile(&self, update: ProfileUpdate) -> Result<()> {
        let profile = {
            let mut state = self.state.write().await;
            update.apply_to(&mut state.profile);
            state.profile.clone()
        };
        self.repository.save_profile(&profile).await
    }

    /// Appends an application to the end of the list and persists.
    ///
    /// Deliberately performs no duplicate check: callers are responsible
    /// for deduping by `university_id` via [`has_applied`](Self::has_applied).
    pub async fn add_application(&self, application: Application) -> Result<()> {
        let applications = {
            let mut state = self.state.write().await;
            state.applications.push(application);
            state.applications.clone()
        };
        tracing::debug!(count = applications.len(), "application added");
        self.repository.save_applications(&applications).await
    }

    /// Replaces the status of the matching application, leaving every other
    /// field untouched. Unknown ids are a silent no-op.
    pub async fn update_application_status(
        &self,
        id: &str,
        status: ApplicationStatus,
    ) -> Result<()> {
        let applications = {
            let mut state = self.state.write().await;
            match state.applications.iter_mut().find(|a| a.id == id) {
                Some(application) => application.status = status,
                None => {
                    tracing::debug!(id, "status update for unknown application ignored");
                    return Ok(());
                }
            }
            state.applications.clone()
        };
        self.repository.save_applications(&applications).await
    }

    /// Appends a document to the vault and persists.
    pub async fn add_document(&self, document: Document) -> Result<()> {
        let documents = {
            let mut state = self.state.write().await;
            state.documents.push(document);
            state.documents.clone()
        };
        self.repository.save_documents(&documents).await
    }

    /// Removes the document with the given id, if present, and persists.
    pub async fn remove_document(&self, id: &str) -> Result<()> {
        let documents = {
            let mut state = self.state.write().await;
            state.documents.retain(|d| d.id != id);
            state.documents.clone()
        };
        self.repository.save_documents(&documents).await
    }

    /// Restores the default profile, clears both lists, and deletes all
    /// three persisted keys. Runs on logout so one session's data never
    /// leaks into the next. Idempotent.
    pub async fn reset_student(&self) -> Result<()> {
        {
            let mut state = self.state.write().await;
            state.profile = StudentProfile::default();
            state.applications.clear();
            state.documents.clear();
        }
        tracing::info!("student state reset");
        self.repository.clear_all().await
    }
}
