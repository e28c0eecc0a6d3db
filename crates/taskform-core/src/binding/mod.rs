//! Binding domain module.
//!
//! # Module Structure
//!
//! - `model`: The binding description (trigger, payload builder, endpoint,
//!   completion effect)
//! - `render`: List-item rendering for task responses

mod model;
pub mod render;

// Re-export public API
pub use model::{Binding, CompletionEffect, Method, PayloadFn, Trigger};
