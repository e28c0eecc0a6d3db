//! User domain module.
//!
//! # Module Structure
//!
//! - `model`: Credential payload shared by the login and user-creation
//!   endpoints

mod model;

// Re-export public API
pub use model::Credentials;
