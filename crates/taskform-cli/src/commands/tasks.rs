//! The listing pages: `GET /getAllTasks` and `GET /getTaskByID`.

use taskform_client::bindings;
use taskform_client::{HttpTransport, run_binding};
use taskform_core::config::ClientConfig;
use taskform_core::page::MemoryPage;

/// The listing page with its button trigger.
pub async fn list(config: &ClientConfig) {
    let mut page = MemoryPage::new();
    let transport = HttpTransport::new();

    run_binding(&bindings::all_tasks(), &mut page, &transport, config).await;

    super::report(&page);
}

/// One task by id, replacing whatever the container held.
pub async fn show(config: &ClientConfig, id: i64) {
    let mut page = MemoryPage::new();
    let transport = HttpTransport::new();

    run_binding(&bindings::task_by_id(id), &mut page, &transport, config).await;

    super::report(&page);
}

/// The index page: the same listing request, fired on load.
pub async fn index(config: &ClientConfig) {
    let mut page = MemoryPage::new();
    let transport = HttpTransport::new();

    run_binding(&bindings::all_tasks_on_load(), &mut page, &transport, config).await;

    super::report(&page);
}
