//! Domain models and binding contracts for the taskform client.
//!
//! Everything in this crate is I/O-free: bindings are plain descriptions,
//! pages and transports are traits, and rendering produces strings. The
//! runtime that wires them to a real network and surface lives in
//! `taskform-client`.

pub mod binding;
pub mod config;
pub mod error;
pub mod form;
pub mod page;
pub mod task;
pub mod transport;
pub mod user;

// Re-export common error type
pub use error::{Result, TaskformError};
