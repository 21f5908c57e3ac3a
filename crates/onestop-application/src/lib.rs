//! Application layer for OneStop: the two state managers, sign-out
//! coordination, and the mock external-service simulators.

pub mod account;
pub mod auth_manager;
pub mod checkout;
pub mod dates;
pub mod digilocker;
pub mod student_manager;
pub mod upload;

pub use account::sign_out;
pub use auth_manager::AuthManager;
pub use checkout::{ApplicationCheckout, CheckoutOutcome};
pub use digilocker::{DigiLockerImporter, AVAILABLE_DOCUMENTS};
pub use student_manager::StudentManager;
pub use upload::document_from_upload;
