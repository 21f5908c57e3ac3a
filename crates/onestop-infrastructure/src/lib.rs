//! Storage layer for OneStop: a JSON key-value store on the local
//! filesystem plus implementations of the core repository traits.

pub mod json_store;
pub mod paths;
pub mod session_repository;
pub mod student_repository;

pub use crate::json_store::JsonStore;
pub use crate::paths::OneStopPaths;
pub use crate::session_repository::JsonSessionRepository;
pub use crate::student_repository::JsonStudentRepository;
