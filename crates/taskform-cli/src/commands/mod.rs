//! CLI subcommand implementations, one module per host page.

pub mod create_task;
pub mod create_user;
pub mod login;
pub mod tasks;

use taskform_client::bindings::elements;
use taskform_core::page::{MemoryPage, PageEvent};

/// Prints what the page did after a binding run.
///
/// The terminal stands in for the browser surface: navigations, notices and
/// reloads become lines, and the listing container is printed verbatim.
/// A run that failed in transit prints nothing, matching the silent-failure
/// contract of the bindings.
pub(crate) fn report(page: &MemoryPage) {
    for event in &page.events {
        match event {
            PageEvent::Notified(message) => println!("notice: {}", message),
            PageEvent::Navigated(url) => println!("location -> {}", url),
            PageEvent::Reloaded => println!("page reloaded"),
        }
    }

    let html = page.html(elements::TASKS);
    if !html.is_empty() {
        println!("{}", html);
    }
}
