use serde::{Deserialize, Serialize};

/// Transport configuration, explicit rather than ambient: the backend origin,
/// the CSRF double-submit names, and an optional pre-seeded session cookie.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    pub base_url: String,
    pub csrf_cookie_name: String,
    pub csrf_header_name: String,
    /// Cookie pairs to seed the jar with, e.g. `"sessionid=abc"` or
    /// `"sessionid=abc; csrftoken=def"`. Useful where no login flow runs
    /// inside this process.
    pub session_cookie: Option<String>,
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Self {
        ClientConfig {
            base_url: base_url.to_string(),
            csrf_cookie_name: "csrftoken".to_string(),
            csrf_header_name: "X-CSRFToken".to_string(),
            session_cookie: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_backend_conventions() {
        let config = ClientConfig::new("http://localhost:8000");
        assert_eq!(config.csrf_cookie_name, "csrftoken");
        assert_eq!(config.csrf_header_name, "X-CSRFToken");
        assert!(config.session_cookie.is_none());
    }
}
