//! The task-creation form → `POST /createTask`.

use taskform_client::bindings::{self, elements};
use taskform_client::{HttpTransport, run_binding};
use taskform_core::config::ClientConfig;
use taskform_core::page::MemoryPage;

pub async fn run(config: &ClientConfig, name: String) {
    let mut page = MemoryPage::with_fields([(elements::NAME_TASK, name)]);
    let transport = HttpTransport::new();

    run_binding(&bindings::create_task(), &mut page, &transport, config).await;

    super::report(&page);
}
