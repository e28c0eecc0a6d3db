//! Binding descriptions.
//!
//! A binding is one instance of the trigger → collect → send → effect
//! pipeline: everything needed to turn a user event into a request and apply
//! the single effect its response gets. Bindings are plain descriptions; the
//! runtime that executes them lives in the client crate.

use crate::Result;
use crate::form::FieldSource;
use serde_json::Value;

/// HTTP method of a binding's request. Mutations POST, reads GET.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// The event that starts one request/response cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Trigger {
    /// Activation of a named element, e.g. a button click.
    Activate(String),
    /// The page finished loading. Load-triggered bindings read no fields.
    PageLoad,
}

/// Builds a request payload from the page's current field values.
///
/// Pure: reads fields, returns the JSON value to send, `None` for body-less
/// requests. Payload builders close over nothing; a plain function pointer
/// covers every call site.
pub type PayloadFn = fn(&dyn FieldSource) -> Result<Option<Value>>;

/// What to do once a response arrives.
///
/// Exactly one per binding. Arrival is treated as success unconditionally:
/// the status code is logged by the runtime but never branched on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionEffect {
    /// Set the page location to a fixed target URL.
    Navigate { target: String },
    /// Show a blocking notification, then navigate. Always in that order.
    NotifyAndNavigate { message: String, target: String },
    /// Reload the current page.
    Reload,
    /// Parse the body as a task list and append one item per task to the
    /// container, keeping whatever was already there.
    RenderList { container: String },
    /// Parse the body as a single task and replace the container's contents
    /// with its item.
    RenderOne { container: String },
}

/// One parameterized binder instance.
///
/// The endpoint `path` is relative; the runtime resolves it against the
/// configured base URL at send time.
pub struct Binding {
    pub trigger: Trigger,
    pub payload: PayloadFn,
    pub method: Method,
    pub path: String,
    pub effect: CompletionEffect,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_payload(_: &dyn FieldSource) -> Result<Option<Value>> {
        Ok(None)
    }

    #[test]
    fn test_binding_holds_description() {
        let binding = Binding {
            trigger: Trigger::Activate("buttonGetAll".to_string()),
            payload: empty_payload,
            method: Method::Get,
            path: "/getAllTasks".to_string(),
            effect: CompletionEffect::RenderList {
                container: "tasks".to_string(),
            },
        };
        assert_eq!(binding.method, Method::Get);
        assert_eq!(binding.path, "/getAllTasks");
    }
}
