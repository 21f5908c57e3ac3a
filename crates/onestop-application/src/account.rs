//! Cross-cutting sign-out coordination.
//!
//! Logout and student reset belong to different managers but must happen
//! together, otherwise the next session would inherit the previous
//! student's profile, applications, and documents.

use crate::auth_manager::AuthManager;
use crate::student_manager::StudentManager;
use onestop_core::error::Result;

/// Signs the current user out and wipes the student state, in that order.
pub async fn sign_out(auth: &AuthManager, student: &StudentManager) -> Result<()> {
    auth.logout().await?;
    student.reset_student().await?;
    tracing::info!("signed out and student state cleared");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use onestop_core::student::ProfileUpdate;
    use onestop_infrastructure::{JsonSessionRepository, JsonStore, JsonStudentRepository};
    use std::sync::Arc;
    use std::time::Duration;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_sign_out_clears_session_and_student_data() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::new(dir.path());
        let session_repo = Arc::new(JsonSessionRepository::new(store.clone()));
        let student_repo = Arc::new(JsonStudentRepository::new(store.clone()));

        let auth = AuthManager::with_delays(
            session_repo.clone(),
            Duration::ZERO,
            Duration::ZERO,
        );
        auth.load_session().await.unwrap();
        auth.signup("a@b.com", "abcdef", "A").await.unwrap();

        let student = StudentManager::load(student_repo.clone()).await.unwrap();
        student
            .update_profile(ProfileUpdate {
                full_name: Some("A".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        sign_out(&auth, &student).await.unwrap();

        assert!(auth.current_user().await.is_none());
        assert!(store.read("user").unwrap().is_none());
        assert!(store.read("profile").unwrap().is_none());
        assert!(store.read("applications").unwrap().is_none());
        assert!(store.read("documents").unwrap().is_none());
    }
}
