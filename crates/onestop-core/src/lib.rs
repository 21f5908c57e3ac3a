//! Domain layer for OneStop: models, repository traits, route guard, and the
//! fixed catalogs the demo runs on. No I/O happens here; persistence lives in
//! `onestop-infrastructure` and the state managers in `onestop-application`.

pub mod deadline;
pub mod error;
pub mod id;
pub mod route;
pub mod session;
pub mod student;
pub mod university;

// Re-export common types
pub use error::{OneStopError, Result};
pub use id::random_id;
pub use route::{AuthMode, Route, RouteGuard, RouteOutcome};
pub use session::{display_name_from_email, SessionRepository, UserSession};
pub use student::{
    format_file_size, Application, ApplicationStatus, Document, ProfileUpdate, StudentProfile,
    StudentRepository,
};
