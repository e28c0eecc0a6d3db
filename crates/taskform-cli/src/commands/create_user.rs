//! The registration page: signup form → `POST /createUser`.

use taskform_client::bindings::{self, elements};
use taskform_client::{HttpTransport, run_binding};
use taskform_core::config::ClientConfig;
use taskform_core::page::MemoryPage;

pub async fn run(config: &ClientConfig, login: String, password: String) {
    let mut page = MemoryPage::with_fields([
        (elements::CREATE_LOGIN, login),
        (elements::CREATE_PASSWORD, password),
    ]);
    let transport = HttpTransport::new();

    run_binding(&bindings::create_user(config), &mut page, &transport, config).await;

    super::report(&page);
}
