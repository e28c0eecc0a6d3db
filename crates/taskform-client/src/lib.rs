//! The binder runtime and its production transport.
//!
//! `taskform-core` describes bindings; this crate executes them: an HTTP
//! transport over reqwest, the runtime that collects fields and applies
//! completion effects, and the thin per-endpoint call sites.

pub mod binder;
pub mod bindings;
pub mod http;

pub use binder::run_binding;
pub use http::HttpTransport;
