use std::sync::Arc;

use reqwest::{
    cookie::{CookieStore, Jar},
    Method, RequestBuilder, Url,
};
use studyhall_interfaces::api::error::ServerError;

use crate::client::config::ClientConfig;

/// Shared HTTP state for every client talking to one backend: a reqwest
/// client wired to a cookie jar plus the CSRF double-submit configuration.
///
/// Session cookies arrive via `Set-Cookie` (or are seeded from the config)
/// and accompany every request. The CSRF token is whatever the jar currently
/// holds under the configured cookie name; it is echoed on the configured
/// header for every request that carries one.
#[derive(Debug, Clone)]
pub struct Transport {
    client: reqwest::Client,
    jar: Arc<Jar>,
    base_url: String,
    origin: Url,
    csrf_cookie_name: String,
    csrf_header_name: String,
}

impl Transport {
    pub fn new(config: &ClientConfig) -> Result<Self, ServerError> {
        let origin = Url::parse(&config.base_url)
            .map_err(|e| ServerError::MalformedUrl(format!("{}: {}", config.base_url, e)))?;
        let jar = Arc::new(Jar::default());
        if let Some(cookies) = &config.session_cookie {
            // Accept "sessionid=abc" or "sessionid=abc; csrftoken=def".
            for cookie in cookies.split(';') {
                let cookie = cookie.trim();
                if !cookie.is_empty() {
                    jar.add_cookie_str(cookie, &origin);
                }
            }
        }
        let client = reqwest::Client::builder()
            .cookie_provider(jar.clone())
            .build()
            .map_err(|e| ServerError::InternalError(e.to_string()))?;
        Ok(Transport {
            client,
            jar,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            origin,
            csrf_cookie_name: config.csrf_cookie_name.clone(),
            csrf_header_name: config.csrf_header_name.clone(),
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// The CSRF token currently in the jar, if any.
    pub fn csrf_token(&self) -> Option<String> {
        let header = self.jar.cookies(&self.origin)?;
        let header = header.to_str().ok()?;
        header.split(';').find_map(|pair| {
            let (name, value) = pair.trim().split_once('=')?;
            if name == self.csrf_cookie_name {
                Some(value.to_string())
            } else {
                None
            }
        })
    }

    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut builder = self.client.request(method, self.url(path));
        if let Some(token) = self.csrf_token() {
            builder = builder.header(self.csrf_header_name.as_str(), token);
        }
        builder
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csrf_token_read_from_seeded_jar() {
        let mut config = ClientConfig::new("http://localhost:8000");
        config.session_cookie = Some("sessionid=abc; csrftoken=tok123".to_string());
        let transport = Transport::new(&config).unwrap();
        assert_eq!(transport.csrf_token().as_deref(), Some("tok123"));
    }

    #[test]
    fn test_csrf_token_absent_from_empty_jar() {
        let config = ClientConfig::new("http://localhost:8000");
        let transport = Transport::new(&config).unwrap();
        assert_eq!(transport.csrf_token(), None);
    }

    #[test]
    fn test_rejects_malformed_base_url() {
        let config = ClientConfig::new("not a url");
        let result = Transport::new(&config);
        assert!(matches!(result, Err(ServerError::MalformedUrl(_))));
    }

    #[test]
    fn test_url_joins_base_and_path() {
        let config = ClientConfig::new("http://localhost:8000/");
        let transport = Transport::new(&config).unwrap();
        assert_eq!(
            transport.url("/api/topic/"),
            "http://localhost:8000/api/topic/"
        );
    }
}
