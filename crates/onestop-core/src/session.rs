//! User session domain model and repository trait.
//!
//! A session is the authenticated user record held for the duration of a
//! visit. There is at most one per store; it is created by login/signup and
//! destroyed by logout. No real credential ever backs it.

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// The authenticated user record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSession {
    /// Unique session identifier (`user_<random>`)
    pub id: String,
    /// Email address the user signed in with
    pub email: String,
    /// Display name
    pub name: String,
}

/// Derives a display name from an email address: the local part before `@`.
///
/// Used by login, where no name is supplied. Falls back to the whole input
/// when there is no `@`.
pub fn display_name_from_email(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}

/// An abstract repository for the single persisted session.
///
/// Decouples the auth manager from the storage mechanism. Implementations
/// own the `user` key of the persistent store and are its only writers.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Loads the persisted session, if any.
    ///
    /// A stored value that cannot be parsed is reported as absent, not as
    /// an error.
    async fn load(&self) -> Result<Option<UserSession>>;

    /// Persists the session, replacing any previous one.
    async fn save(&self, session: &UserSession) -> Result<()>;

    /// Removes the persisted session. Clearing an absent session is Ok.
    async fn clear(&self) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_is_local_part() {
        assert_eq!(display_name_from_email("a@b.com"), "a");
        assert_eq!(display_name_from_email("ravi.kumar@example.in"), "ravi.kumar");
    }

    #[test]
    fn test_display_name_without_at_sign() {
        assert_eq!(display_name_from_email("plainname"), "plainname");
    }
}
