//! The auth page: login form → `POST /login`.

use taskform_client::bindings::{self, elements};
use taskform_client::{HttpTransport, run_binding};
use taskform_core::config::ClientConfig;
use taskform_core::page::MemoryPage;

pub async fn run(config: &ClientConfig, login: String, password: String) {
    let mut page = MemoryPage::with_fields([
        (elements::AUTH_LOGIN, login),
        (elements::AUTH_PASSWORD, password),
    ]);
    let transport = HttpTransport::new();

    run_binding(&bindings::login(config), &mut page, &transport, config).await;

    super::report(&page);
}
