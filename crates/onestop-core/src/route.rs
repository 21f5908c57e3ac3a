//! Route surface and the session guard.
//!
//! Routes map URL paths to screens. The five `/dashboard*` routes require a
//! current session; the guard is the only access control in the system and
//! is purely client-side. It is not a security boundary: anyone with access
//! to the store can fabricate a session.

use crate::session::UserSession;

/// Which view the auth screen opens in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    Login,
    Signup,
}

/// The full route surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Auth { mode: AuthMode },
    About,
    AiAssistance,
    Dashboard,
    DashboardProfile,
    DashboardUniversities,
    DashboardApplications,
    DashboardDeadlines,
    DashboardDocuments,
    /// Catch-all for any unrecognized path.
    NotFound,
}

impl Route {
    /// Parses a URL path (with optional query string) into a route.
    ///
    /// Unknown paths become [`Route::NotFound`]. The only recognized query
    /// parameter is `mode=signup` on `/auth`; anything else selects the
    /// login view.
    pub fn parse(path: &str) -> Route {
        let (path, query) = match path.split_once('?') {
            Some((p, q)) => (p, Some(q)),
            None => (path, None),
        };

        match path {
            "/" => Route::Home,
            "/auth" => {
                let signup = query
                    .map(|q| {
                        q.split('&')
                            .any(|pair| pair == "mode=signup")
                    })
                    .unwrap_or(false);
                Route::Auth {
                    mode: if signup {
                        AuthMode::Signup
                    } else {
                        AuthMode::Login
                    },
                }
            }
            "/about" => Route::About,
            "/ai-assistance" => Route::AiAssistance,
            "/dashboard" => Route::Dashboard,
            "/dashboard/profile" => Route::DashboardProfile,
            "/dashboard/universities" => Route::DashboardUniversities,
            "/dashboard/applications" => Route::DashboardApplications,
            "/dashboard/deadlines" => Route::DashboardDeadlines,
            "/dashboard/documents" => Route::DashboardDocuments,
            _ => Route::NotFound,
        }
    }

    /// The canonical path for this route.
    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Auth {
                mode: AuthMode::Login,
            } => "/auth",
            Route::Auth {
                mode: AuthMode::Signup,
            } => "/auth?mode=signup",
            Route::About => "/about",
            Route::AiAssistance => "/ai-assistance",
            Route::Dashboard => "/dashboard",
            Route::DashboardProfile => "/dashboard/profile",
            Route::DashboardUniversities => "/dashboard/universities",
            Route::DashboardApplications => "/dashboard/applications",
            Route::DashboardDeadlines => "/dashboard/deadlines",
            Route::DashboardDocuments => "/dashboard/documents",
            Route::NotFound => "/404",
        }
    }

    /// Whether this route sits behind the session guard.
    pub fn requires_session(&self) -> bool {
        matches!(
            self,
            Route::Dashboard
                | Route::DashboardProfile
                | Route::DashboardUniversities
                | Route::DashboardApplications
                | Route::DashboardDeadlines
                | Route::DashboardDocuments
        )
    }
}

/// The three render outcomes a guarded navigation can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteOutcome {
    /// Initial session load has not finished yet; show a placeholder.
    Loading,
    /// No current session; redirect to `/auth`.
    RedirectToAuth,
    /// Render the requested screen.
    Allow,
}

/// Stateless session guard.
pub struct RouteGuard;

impl RouteGuard {
    /// Evaluates a navigation against the current auth state.
    ///
    /// Public routes always pass through. For guarded routes the loading
    /// check comes first, so a persisted session is never mistaken for a
    /// missing one during startup.
    pub fn evaluate(
        route: &Route,
        current_user: Option<&UserSession>,
        is_loading: bool,
    ) -> RouteOutcome {
        if !route.requires_session() {
            return RouteOutcome::Allow;
        }
        if is_loading {
            return RouteOutcome::Loading;
        }
        if current_user.is_none() {
            return RouteOutcome::RedirectToAuth;
        }
        RouteOutcome::Allow
    }
}
