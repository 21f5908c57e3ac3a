//! Student domain: profile, applications, and the document vault.

pub mod application;
pub mod document;
pub mod profile;
pub mod repository;

pub use application::{Application, ApplicationStatus};
pub use document::{format_file_size, Document};
pub use profile::{ProfileUpdate, StudentProfile};
pub use repository::StudentRepository;
