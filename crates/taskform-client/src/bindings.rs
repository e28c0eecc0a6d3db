//! The per-endpoint call sites.
//!
//! Each function here is one page's worth of wiring: which element triggers
//! the request, which fields feed the payload, which endpoint receives it,
//! and the single effect its response gets. Everything else is the shared
//! runtime in [`crate::binder`].

use serde_json::Value;
use taskform_core::Result;
use taskform_core::binding::{Binding, CompletionEffect, Method, Trigger};
use taskform_core::config::ClientConfig;
use taskform_core::form::{FieldSource, collect};
use taskform_core::task::NewTask;
use taskform_core::user::Credentials;

/// Element identifiers the host pages define.
pub mod elements {
    pub const BUTTON_AUTH: &str = "buttonAuth";
    pub const AUTH_LOGIN: &str = "auth_login";
    pub const AUTH_PASSWORD: &str = "auth_password";
    pub const BUTTON_CREATE_USER: &str = "buttonCreateUser";
    pub const CREATE_LOGIN: &str = "create_login";
    pub const CREATE_PASSWORD: &str = "create_password";
    pub const BUTTON_CREATE: &str = "buttonCreate";
    pub const NAME_TASK: &str = "nameTask";
    pub const BUTTON_GET_ALL: &str = "buttonGetAll";
    /// Container the listing effects render into.
    pub const TASKS: &str = "tasks";
}

/// Notification shown after user creation, before navigating to the auth page.
pub const REGISTRATION_NOTICE: &str = "Регистрация прошла успешно";

fn auth_payload(fields: &dyn FieldSource) -> Result<Option<Value>> {
    let credentials = Credentials {
        login: collect(fields, elements::AUTH_LOGIN),
        password: collect(fields, elements::AUTH_PASSWORD),
    };
    Ok(Some(serde_json::to_value(credentials)?))
}

fn registration_payload(fields: &dyn FieldSource) -> Result<Option<Value>> {
    let credentials = Credentials {
        login: collect(fields, elements::CREATE_LOGIN),
        password: collect(fields, elements::CREATE_PASSWORD),
    };
    Ok(Some(serde_json::to_value(credentials)?))
}

fn new_task_payload(fields: &dyn FieldSource) -> Result<Option<Value>> {
    let task = NewTask {
        name: collect(fields, elements::NAME_TASK),
    };
    Ok(Some(serde_json::to_value(task)?))
}

fn no_payload(_fields: &dyn FieldSource) -> Result<Option<Value>> {
    Ok(None)
}

/// `POST /login`, then navigate to the task-list page whatever the status.
pub fn login(config: &ClientConfig) -> Binding {
    Binding {
        trigger: Trigger::Activate(elements::BUTTON_AUTH.to_string()),
        payload: auth_payload,
        method: Method::Post,
        path: "/login".to_string(),
        effect: CompletionEffect::Navigate {
            target: config.task_list_page(),
        },
    }
}

/// `POST /createUser`, then notify and navigate to the auth page.
pub fn create_user(config: &ClientConfig) -> Binding {
    Binding {
        trigger: Trigger::Activate(elements::BUTTON_CREATE_USER.to_string()),
        payload: registration_payload,
        method: Method::Post,
        path: "/createUser".to_string(),
        effect: CompletionEffect::NotifyAndNavigate {
            message: REGISTRATION_NOTICE.to_string(),
            target: config.auth_page(),
        },
    }
}

/// `POST /createTask`, then reload the current page.
pub fn create_task() -> Binding {
    Binding {
        trigger: Trigger::Activate(elements::BUTTON_CREATE.to_string()),
        payload: new_task_payload,
        method: Method::Post,
        path: "/createTask".to_string(),
        effect: CompletionEffect::Reload,
    }
}

/// `GET /getAllTasks` from the listing button, appending into the container.
pub fn all_tasks() -> Binding {
    Binding {
        trigger: Trigger::Activate(elements::BUTTON_GET_ALL.to_string()),
        payload: no_payload,
        method: Method::Get,
        path: "/getAllTasks".to_string(),
        effect: CompletionEffect::RenderList {
            container: elements::TASKS.to_string(),
        },
    }
}

/// The index-page variant of [`all_tasks`]: fired on load, no button.
pub fn all_tasks_on_load() -> Binding {
    Binding {
        trigger: Trigger::PageLoad,
        ..all_tasks()
    }
}

/// `GET /getTaskByID?id=N` on load, replacing the container's contents.
pub fn task_by_id(id: i64) -> Binding {
    Binding {
        trigger: Trigger::PageLoad,
        payload: no_payload,
        method: Method::Get,
        path: format!("/getTaskByID?id={}", id),
        effect: CompletionEffect::RenderOne {
            container: elements::TASKS.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskform_core::page::MemoryPage;

    #[test]
    fn test_call_sites_declare_expected_endpoints() {
        let config = ClientConfig::default();
        assert_eq!(login(&config).path, "/login");
        assert_eq!(create_user(&config).path, "/createUser");
        assert_eq!(create_task().path, "/createTask");
        assert_eq!(all_tasks().path, "/getAllTasks");
        assert_eq!(task_by_id(7).path, "/getTaskByID?id=7");
    }

    #[test]
    fn test_mutations_post_reads_get() {
        let config = ClientConfig::default();
        assert_eq!(login(&config).method, Method::Post);
        assert_eq!(create_task().method, Method::Post);
        assert_eq!(all_tasks().method, Method::Get);
        assert_eq!(task_by_id(1).method, Method::Get);
    }

    #[test]
    fn test_load_variant_only_changes_trigger() {
        let clicked = all_tasks();
        let on_load = all_tasks_on_load();
        assert_eq!(on_load.trigger, Trigger::PageLoad);
        assert_eq!(on_load.path, clicked.path);
        assert_eq!(on_load.effect, clicked.effect);
    }

    #[test]
    fn test_registration_payload_reads_creation_fields() {
        let page = MemoryPage::with_fields([
            (elements::CREATE_LOGIN, "nina"),
            (elements::CREATE_PASSWORD, "secret"),
            // Present but belonging to the other form; must be ignored
            (elements::AUTH_LOGIN, "other"),
        ]);
        let body = registration_payload(&page).unwrap().unwrap();
        assert_eq!(
            body,
            serde_json::json!({"login": "nina", "password": "secret"})
        );
    }
}
