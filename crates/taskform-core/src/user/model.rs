//! Credential payload model.

use serde::{Deserialize, Serialize};

/// Login/password pair built from form input at trigger time.
///
/// Both the login and the user-creation endpoints take this exact shape, so
/// the two call sites share it. Values are sent once and discarded; nothing
/// is stored client-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub login: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_wire_shape() {
        let body = serde_json::to_value(Credentials {
            login: "a".to_string(),
            password: "b".to_string(),
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"login": "a", "password": "b"}));
    }
}
