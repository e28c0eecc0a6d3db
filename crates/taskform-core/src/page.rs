//! Host page abstraction.
//!
//! Completion effects act on the page through this seam instead of looking
//! elements up in a global document, so the binder and renderer can run
//! against an in-memory page in tests and against a terminal front end in
//! production.

use crate::form::FieldSource;
use std::collections::HashMap;

/// The surface a completion effect acts on.
///
/// Implementations own the document-side state: input fields, list
/// containers, and the current location.
pub trait Page: FieldSource {
    /// Sets the page location to `url`.
    fn navigate(&mut self, url: &str);

    /// Shows a blocking notification to the user.
    fn notify(&mut self, message: &str);

    /// Reloads the current page, discarding in-memory state.
    fn reload(&mut self);

    /// Appends markup to the container's existing contents.
    fn append_html(&mut self, container_id: &str, html: &str);

    /// Replaces the container's contents with `html`.
    fn set_html(&mut self, container_id: &str, html: &str);
}

/// Something a page did in response to a completion effect.
///
/// Recorded in occurrence order, so callers can assert not just what happened
/// but the sequence (a notification must precede its navigation).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    Navigated(String),
    Notified(String),
    Reloaded,
}

/// An in-memory page: field values seeded up front, effects recorded in order.
///
/// Backs the terminal front end and the binder tests. Container contents are
/// plain strings holding whatever markup was written into them.
#[derive(Debug, Default)]
pub struct MemoryPage {
    fields: HashMap<String, String>,
    containers: HashMap<String, String>,
    /// Every surface operation performed on this page, in order.
    pub events: Vec<PageEvent>,
}

impl MemoryPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a page with the given field values already filled in.
    pub fn with_fields<I, K, V>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            fields: fields
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            ..Self::default()
        }
    }

    pub fn set_field(&mut self, element_id: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(element_id.into(), value.into());
    }

    /// Current contents of a container; empty if nothing was ever written.
    pub fn html(&self, container_id: &str) -> &str {
        self.containers
            .get(container_id)
            .map(String::as_str)
            .unwrap_or("")
    }

    /// URLs navigated to, in order.
    pub fn navigations(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|event| match event {
                PageEvent::Navigated(url) => Some(url.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Notification messages shown, in order.
    pub fn notifications(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|event| match event {
                PageEvent::Notified(message) => Some(message.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn reload_count(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, PageEvent::Reloaded))
            .count()
    }
}

impl FieldSource for MemoryPage {
    fn value(&self, element_id: &str) -> Option<String> {
        self.fields.get(element_id).cloned()
    }
}

impl Page for MemoryPage {
    fn navigate(&mut self, url: &str) {
        self.events.push(PageEvent::Navigated(url.to_string()));
    }

    fn notify(&mut self, message: &str) {
        self.events.push(PageEvent::Notified(message.to_string()));
    }

    fn reload(&mut self) {
        self.events.push(PageEvent::Reloaded);
    }

    fn append_html(&mut self, container_id: &str, html: &str) {
        self.containers
            .entry(container_id.to_string())
            .or_default()
            .push_str(html);
    }

    fn set_html(&mut self, container_id: &str, html: &str) {
        self.containers
            .insert(container_id.to_string(), html.to_string());
    }
}
