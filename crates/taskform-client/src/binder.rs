//! The binder runtime.
//!
//! Executes one binding: collect fields, build the JSON body, send the
//! request, apply the completion effect. Fire-and-forget semantics are the
//! contract here: a run that fails in transport, serialization, or response
//! parsing applies no effect and surfaces nothing to the user. Failures are
//! visible to an operator through tracing output only.

use taskform_core::Result;
use taskform_core::binding::render::{task_item, task_items};
use taskform_core::binding::{Binding, CompletionEffect};
use taskform_core::config::ClientConfig;
use taskform_core::page::Page;
use taskform_core::task::Task;
use taskform_core::transport::{ApiRequest, ApiResponse, Transport};

/// Runs one binding against a page and a transport.
///
/// There is no result to inspect: arrival of a response is treated as
/// success unconditionally, and any failure along the way is swallowed after
/// being logged. Nothing guards against a second concurrent run of the same
/// binding.
pub async fn run_binding<P>(
    binding: &Binding,
    page: &mut P,
    transport: &dyn Transport,
    config: &ClientConfig,
) where
    P: Page,
{
    tracing::debug!(trigger = ?binding.trigger, path = %binding.path, "binding fired");
    if let Err(e) = try_run(binding, page, transport, config).await {
        tracing::warn!(path = %binding.path, "binding aborted: {}", e);
    }
}

async fn try_run<P>(
    binding: &Binding,
    page: &mut P,
    transport: &dyn Transport,
    config: &ClientConfig,
) -> Result<()>
where
    P: Page,
{
    let body = match (binding.payload)(&*page)? {
        Some(value) => Some(serde_json::to_string(&value)?),
        None => None,
    };

    let request = ApiRequest {
        method: binding.method,
        url: config.endpoint_url(&binding.path),
        body,
    };

    let response = transport.send(request).await?;
    // The status is logged, never branched on.
    tracing::info!(status = response.status, path = %binding.path, "response arrived");

    apply_effect(&binding.effect, &response, page)
}

fn apply_effect<P>(effect: &CompletionEffect, response: &ApiResponse, page: &mut P) -> Result<()>
where
    P: Page + ?Sized,
{
    match effect {
        CompletionEffect::Navigate { target } => {
            page.navigate(target);
        }
        CompletionEffect::NotifyAndNavigate { message, target } => {
            page.notify(message);
            page.navigate(target);
        }
        CompletionEffect::Reload => {
            page.reload();
        }
        CompletionEffect::RenderList { container } => {
            let tasks: Vec<Task> = serde_json::from_str(&response.body)?;
            page.append_html(container, &task_items(&tasks));
        }
        CompletionEffect::RenderOne { container } => {
            let task: Task = serde_json::from_str(&response.body)?;
            page.set_html(container, &task_item(&task));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bindings::{self, elements};
    use serde_json::json;
    use std::sync::Mutex;
    use taskform_core::TaskformError;
    use taskform_core::binding::Method;
    use taskform_core::page::{MemoryPage, PageEvent};

    /// Records every request and replies with one canned outcome.
    struct MockTransport {
        requests: Mutex<Vec<ApiRequest>>,
        outcome: Outcome,
    }

    enum Outcome {
        Respond(ApiResponse),
        Fail,
    }

    impl MockTransport {
        fn respond(status: u16, body: &str) -> Self {
            Self {
                requests: Mutex::new(Vec::new()),
                outcome: Outcome::Respond(ApiResponse {
                    status,
                    body: body.to_string(),
                }),
            }
        }

        fn fail() -> Self {
            Self {
                requests: Mutex::new(Vec::new()),
                outcome: Outcome::Fail,
            }
        }

        fn sent(&self) -> Vec<ApiRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait::async_trait]
    impl Transport for MockTransport {
        async fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
            self.requests.lock().unwrap().push(request);
            match &self.outcome {
                Outcome::Respond(response) => Ok(response.clone()),
                Outcome::Fail => Err(TaskformError::transport("connection refused")),
            }
        }
    }

    fn config() -> ClientConfig {
        ClientConfig::default()
    }

    #[tokio::test]
    async fn test_login_sends_exact_field_mapping() {
        let mut page = MemoryPage::with_fields([
            (elements::AUTH_LOGIN, "a"),
            (elements::AUTH_PASSWORD, "b"),
        ]);
        let transport = MockTransport::respond(200, "");

        run_binding(&bindings::login(&config()), &mut page, &transport, &config()).await;

        let sent = transport.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].method, Method::Post);
        assert_eq!(sent[0].url, "http://localhost:8021/login");
        let body: serde_json::Value =
            serde_json::from_str(sent[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(body, json!({"login": "a", "password": "b"}));
    }

    #[tokio::test]
    async fn test_missing_fields_collect_as_empty_and_still_submit() {
        let mut page = MemoryPage::new();
        let transport = MockTransport::respond(200, "");

        run_binding(&bindings::login(&config()), &mut page, &transport, &config()).await;

        let sent = transport.sent();
        assert_eq!(sent.len(), 1);
        let body: serde_json::Value =
            serde_json::from_str(sent[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(body, json!({"login": "", "password": ""}));
    }

    #[tokio::test]
    async fn test_login_navigates_even_on_server_error_status() {
        let mut page = MemoryPage::with_fields([
            (elements::AUTH_LOGIN, "a"),
            (elements::AUTH_PASSWORD, "wrong"),
        ]);
        let transport = MockTransport::respond(500, "");

        run_binding(&bindings::login(&config()), &mut page, &transport, &config()).await;

        assert_eq!(
            page.navigations(),
            vec!["http://localhost:63342/ui/get_all_task.html"]
        );
    }

    #[tokio::test]
    async fn test_transport_failure_applies_no_effect() {
        let mut page = MemoryPage::with_fields([
            (elements::AUTH_LOGIN, "a"),
            (elements::AUTH_PASSWORD, "b"),
        ]);
        let transport = MockTransport::fail();

        run_binding(&bindings::login(&config()), &mut page, &transport, &config()).await;

        assert!(page.events.is_empty());
        assert_eq!(page.html(elements::TASKS), "");
    }

    #[tokio::test]
    async fn test_create_user_notifies_then_navigates() {
        let mut page = MemoryPage::with_fields([
            (elements::CREATE_LOGIN, "nina"),
            (elements::CREATE_PASSWORD, "secret"),
        ]);
        let transport = MockTransport::respond(201, "");

        run_binding(
            &bindings::create_user(&config()),
            &mut page,
            &transport,
            &config(),
        )
        .await;

        assert_eq!(
            page.events,
            vec![
                PageEvent::Notified(bindings::REGISTRATION_NOTICE.to_string()),
                PageEvent::Navigated("http://localhost:63342/ui/auth.html".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_create_task_posts_name_and_reloads() {
        let mut page = MemoryPage::with_fields([(elements::NAME_TASK, "Buy milk")]);
        let transport = MockTransport::respond(200, "");

        run_binding(
            &bindings::create_task(),
            &mut page,
            &transport,
            &config(),
        )
        .await;

        let sent = transport.sent();
        assert_eq!(sent[0].url, "http://localhost:8021/createTask");
        let body: serde_json::Value =
            serde_json::from_str(sent[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(body, json!({"name": "Buy milk"}));
        assert_eq!(page.reload_count(), 1);
    }

    #[tokio::test]
    async fn test_list_renders_exact_items_into_empty_container() {
        let mut page = MemoryPage::new();
        let transport = MockTransport::respond(
            200,
            r#"[{"name":"Buy milk","status":"open"},{"name":"File taxes","status":"done"}]"#,
        );

        run_binding(&bindings::all_tasks(), &mut page, &transport, &config()).await;

        let sent = transport.sent();
        assert_eq!(sent[0].method, Method::Get);
        assert_eq!(sent[0].body, None);
        assert_eq!(
            page.html(elements::TASKS),
            "<li>Buy milk: open</li><li>File taxes: done</li>"
        );
    }

    #[tokio::test]
    async fn test_list_render_is_append_only_and_not_idempotent() {
        let mut page = MemoryPage::new();
        let transport =
            MockTransport::respond(200, r#"[{"name":"Buy milk","status":"open"}]"#);

        run_binding(&bindings::all_tasks(), &mut page, &transport, &config()).await;
        run_binding(&bindings::all_tasks(), &mut page, &transport, &config()).await;

        assert_eq!(
            page.html(elements::TASKS),
            "<li>Buy milk: open</li><li>Buy milk: open</li>"
        );
    }

    #[tokio::test]
    async fn test_unparseable_list_body_is_silent() {
        let mut page = MemoryPage::new();
        let transport = MockTransport::respond(200, "not json");

        run_binding(&bindings::all_tasks(), &mut page, &transport, &config()).await;

        assert_eq!(page.html(elements::TASKS), "");
        assert!(page.events.is_empty());
    }

    #[tokio::test]
    async fn test_load_triggered_listing_reads_no_fields() {
        let mut page = MemoryPage::new();
        let transport =
            MockTransport::respond(200, r#"[{"name":"Buy milk","status":"open"}]"#);

        run_binding(
            &bindings::all_tasks_on_load(),
            &mut page,
            &transport,
            &config(),
        )
        .await;

        let sent = transport.sent();
        assert_eq!(sent[0].body, None);
        assert_eq!(page.html(elements::TASKS), "<li>Buy milk: open</li>");
    }

    #[tokio::test]
    async fn test_task_by_id_replaces_container_contents() {
        let mut page = MemoryPage::new();
        page.append_html(elements::TASKS, "<li>stale</li>");
        let transport =
            MockTransport::respond(200, r#"{"id":1,"name":"Buy milk","status":"done"}"#);

        run_binding(&bindings::task_by_id(1), &mut page, &transport, &config()).await;

        let sent = transport.sent();
        assert_eq!(sent[0].url, "http://localhost:8021/getTaskByID?id=1");
        assert_eq!(page.html(elements::TASKS), "<li>Buy milk: done</li>");
    }

    #[tokio::test]
    async fn test_base_url_override_is_used() {
        let config = ClientConfig {
            base_url: "http://tasks.example:9000".to_string(),
            ..ClientConfig::default()
        };
        let mut page = MemoryPage::new();
        let transport = MockTransport::respond(200, "[]");

        run_binding(&bindings::all_tasks(), &mut page, &transport, &config).await;

        assert_eq!(
            transport.sent()[0].url,
            "http://tasks.example:9000/getAllTasks"
        );
    }
}
