//! End-to-end flow over a real on-disk store: signup, edit the profile,
//! then rebuild every manager from the same directory and check what
//! survived the "reload".

use onestop_application::{sign_out, AuthManager, StudentManager};
use onestop_core::route::{Route, RouteGuard, RouteOutcome};
use onestop_core::student::ProfileUpdate;
use onestop_infrastructure::{JsonSessionRepository, JsonStore, JsonStudentRepository};
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

struct App {
    auth: AuthManager,
    student: StudentManager,
}

async fn start(dir: &TempDir) -> App {
    let store = JsonStore::new(dir.path());
    let auth = AuthManager::with_delays(
        Arc::new(JsonSessionRepository::new(store.clone())),
        Duration::ZERO,
        Duration::ZERO,
    );
    auth.load_session().await.unwrap();
    let student = StudentManager::load(Arc::new(JsonStudentRepository::new(store)))
        .await
        .unwrap();
    App { auth, student }
}

#[tokio::test]
async fn signup_edit_profile_and_reload() {
    let dir = TempDir::new().unwrap();

    // First visit: signup and fill in the name.
    {
        let app = start(&dir).await;
        let session = app.auth.signup("a@b.com", "abcdef", "A").await.unwrap();
        assert_eq!(session.email, "a@b.com");
        assert_eq!(session.name, "A");

        // Dashboard is reachable now.
        let user = app.auth.current_user().await;
        assert_eq!(
            RouteGuard::evaluate(&Route::DashboardProfile, user.as_ref(), false),
            RouteOutcome::Allow
        );

        app.student
            .update_profile(ProfileUpdate {
                full_name: Some("A".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
    }

    // Reload: fresh managers over the same store directory.
    {
        let app = start(&dir).await;
        let user = app.auth.current_user().await.expect("session survived reload");
        assert_eq!(user.email, "a@b.com");
        assert_eq!(app.student.profile().await.full_name, "A");
    }
}

#[tokio::test]
async fn guard_redirects_before_login_and_after_sign_out() {
    let dir = TempDir::new().unwrap();
    let app = start(&dir).await;

    // Nobody is signed in yet.
    assert_eq!(
        RouteGuard::evaluate(&Route::Dashboard, app.auth.current_user().await.as_ref(), false),
        RouteOutcome::RedirectToAuth
    );

    app.auth.login("a@b.com", "abcdef").await.unwrap();
    app.student
        .update_profile(ProfileUpdate {
            city: Some("Delhi".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    sign_out(&app.auth, &app.student).await.unwrap();
    assert_eq!(
        RouteGuard::evaluate(&Route::Dashboard, app.auth.current_user().await.as_ref(), false),
        RouteOutcome::RedirectToAuth
    );

    // A second visit starts from a clean slate.
    let next = start(&dir).await;
    assert!(next.auth.current_user().await.is_none());
    assert_eq!(next.student.profile().await.city, "");
}
