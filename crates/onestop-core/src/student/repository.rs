//! Student data repository trait.

use super::{Application, Document, StudentProfile};
use crate::error::Result;
use async_trait::async_trait;

/// An abstract repository for the three student collections.
///
/// The student manager is the only caller; screens never touch storage
/// directly. Implementations persist each collection under its own key and
/// report unparseable stored values as absent rather than failing.
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// Loads the persisted profile, if any.
    async fn load_profile(&self) -> Result<Option<StudentProfile>>;

    /// Persists the full profile (no partial writes).
    async fn save_profile(&self, profile: &StudentProfile) -> Result<()>;

    /// Loads the persisted application list, if any.
    async fn load_applications(&self) -> Result<Option<Vec<Application>>>;

    /// Persists the full application list.
    async fn save_applications(&self, applications: &[Application]) -> Result<()>;

    /// Loads the persisted document list, if any.
    async fn load_documents(&self) -> Result<Option<Vec<Document>>>;

    /// Persists the full document list.
    async fn save_documents(&self, documents: &[Document]) -> Result<()>;

    /// Deletes all three persisted collections. Used on student reset so one
    /// session's data never leaks into the next.
    async fn clear_all(&self) -> Result<()>;
}
