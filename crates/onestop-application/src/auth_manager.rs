//! Mock authentication state manager.
//!
//! There is no real credential check anywhere in this module: login and
//! signup succeed after a fixed artificial delay whenever the password has
//! at least 6 characters, and synthesize a fresh session. This mirrors a
//! demo backend and must not be mistaken for authentication.

use onestop_core::error::{OneStopError, Result};
use onestop_core::id::random_id;
use onestop_core::session::{display_name_from_email, SessionRepository, UserSession};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

/// Artificial delay before a login resolves.
pub const LOGIN_DELAY: Duration = Duration::from_millis(800);
/// Artificial delay before a signup resolves.
pub const SIGNUP_DELAY: Duration = Duration::from_millis(1000);

const MIN_PASSWORD_CHARS: usize = 6;
const LOGIN_ERROR: &str = "Invalid credentials. Password must be at least 6 characters.";
const SIGNUP_ERROR: &str = "Password must be at least 6 characters.";

struct AuthState {
    current_user: Option<UserSession>,
    /// True only until the initial load from the repository completes.
    is_loading: bool,
}

/// Owns the single optional current-user record and mediates all session
/// reads and writes. Clone handles share state.
#[derive(Clone)]
pub struct AuthManager {
    state: Arc<RwLock<AuthState>>,
    repository: Arc<dyn SessionRepository>,
    login_delay: Duration,
    signup_delay: Duration,
}

impl AuthManager {
    /// Creates a manager with the standard artificial delays. The manager
    /// reports `is_loading` until [`load_session`](Self::load_session) runs.
    pub fn new(repository: Arc<dyn SessionRepository>) -> Self {
        Self::with_delays(repository, LOGIN_DELAY, SIGNUP_DELAY)
    }

    /// Creates a manager with custom delays (tests use `Duration::ZERO`).
    pub fn with_delays(
        repository: Arc<dyn SessionRepository>,
        login_delay: Duration,
        signup_delay: Duration,
    ) -> Self {
        Self {
            state: Arc::new(RwLock::new(AuthState {
                current_user: None,
                is_loading: true,
            })),
            repository,
            login_delay,
            signup_delay,
        }
    }

    /// Performs the startup read of the persisted session and clears the
    /// loading flag. Run once before evaluating guarded routes.
    pub async fn load_session(&self) -> Result<Option<UserSession>> {
        let stored = self.repository.load().await?;
        let mut state = self.state.write().await;
        state.current_user = stored.clone();
        state.is_loading = false;
        Ok(stored)
    }

    /// The current session, if any.
    pub async fn current_user(&self) -> Option<UserSession> {
        self.state.read().await.current_user.clone()
    }

    /// Whether the initial session load is still pending.
    pub async fn is_loading(&self) -> bool {
        self.state.read().await.is_loading
    }

    /// Mock login: accepts any email as long as the password has at least
    /// 6 characters. The display name is the email local part.
    pub async fn login(&self, email: &str, password: &str) -> Result<UserSession> {
        tokio::time::sleep(self.login_delay).await;

        if password.chars().count() < MIN_PASSWORD_CHARS {
            return Err(OneStopError::invalid_credentials(LOGIN_ERROR));
        }

        let session = UserSession {
            id: random_id("user"),
            email: email.to_string(),
            name: display_name_from_email(email).to_string(),
        };
        self.set_current(session).await
    }

    /// Mock signup: same password rule as login, but the supplied name is
    /// used as-is.
    pub async fn signup(&self, email: &str, password: &str, name: &str) -> Result<UserSession> {
        tokio::time::sleep(self.signup_delay).await;

        if password.chars().count() < MIN_PASSWORD_CHARS {
            return Err(OneStopError::invalid_credentials(SIGNUP_ERROR));
        }

        let session = UserSession {
            id: random_id("user"),
            email: email.to_string(),
            name: name.to_string(),
        };
        self.set_current(session).await
    }

    /// Clears the current session and removes it from the store.
    pub async fn logout(&self) -> Result<()> {
        {
            let mut state = self.state.write().await;
            state.current_user = None;
        }
        self.repository.clear().await?;
        tracing::info!("logged out");
        Ok(())
    }

    async fn set_current(&self, session: UserSession) -> Result<UserSession> {
        self.repository.save(&session).await?;
        let mut state = self.state.write().await;
        state.current_user = Some(session.clone());
        tracing::info!(email = %session.email, "session created (mock)");
        Ok(session)
    }
}
