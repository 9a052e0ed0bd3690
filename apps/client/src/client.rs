//! Generic call wrappers around the backend's REST surface.
//!
//! Two entry points: [`ApiClient::call_json`] for JSON-body calls and
//! [`ApiClient::call_form`] for form-encoded calls. Both apply default
//! headers, merge caller overrides (caller wins on collision), send the
//! request with cookie-based credentials, and parse the body as JSON
//! regardless of HTTP status. Failures are logged and propagated unchanged;
//! there is no retry, timeout, or fallback.

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Method};
use serde::Serialize;
use serde_json::Value;
use tracing::error;

use crate::config::Config;
use crate::errors::ApiError;

/// Per-call overrides, shallow-merged over the wrapper defaults.
///
/// Headers merge key-wise with caller values winning; `method` and `body`
/// replace the wrapper's default wholesale when supplied.
#[derive(Debug, Default, Clone)]
pub struct CallOptions {
    /// Overrides the default verb (GET for JSON calls, POST for form calls).
    pub method: Option<Method>,
    /// Merged over the default headers.
    pub headers: HeaderMap,
    /// Pre-serialized request body.
    pub body: Option<String>,
}

/// The single HTTP entry point for all backend calls.
///
/// Owns a cookie store so the backend's session cookie rides along on every
/// request, the way a credentialed browser call would.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base: String,
}

impl ApiClient {
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let http = Client::builder().cookie_store(true).build()?;
        Ok(Self {
            http,
            base: config.api_base.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    pub(crate) fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        self.http.request(method, self.url(path))
    }

    /// Issues a JSON call: GET by default, `Content-Type: application/json`.
    ///
    /// The body is parsed as JSON regardless of HTTP status; the backend
    /// reports operation failures inside the JSON payload itself.
    pub async fn call_json(&self, path: &str, options: CallOptions) -> Result<Value, ApiError> {
        let headers = merged_headers(json_defaults(), &options.headers);
        let method = options.method.unwrap_or(Method::GET);

        let mut request = self.request(method, path).headers(headers);
        if let Some(body) = &options.body {
            request = request.body(body.clone());
        }
        self.dispatch(path, request).await
    }

    /// Issues a form-encoded call: POST by default,
    /// `Content-Type: application/x-www-form-urlencoded`, with `form` as the
    /// request body. A caller-supplied `body` option replaces the form
    /// payload wholesale, matching the merge policy for top-level options.
    pub async fn call_form<F: Serialize + ?Sized>(
        &self,
        path: &str,
        form: &F,
        options: CallOptions,
    ) -> Result<Value, ApiError> {
        let headers = merged_headers(form_defaults(), &options.headers);
        let method = options.method.unwrap_or(Method::POST);

        let request = self.request(method, path).headers(headers);
        let request = match &options.body {
            Some(body) => request.body(body.clone()),
            None => request.form(form),
        };
        self.dispatch(path, request).await
    }

    async fn dispatch(
        &self,
        path: &str,
        request: reqwest::RequestBuilder,
    ) -> Result<Value, ApiError> {
        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                error!("API call to {path} failed: {e}");
                return Err(ApiError::Http(e));
            }
        };

        let text = match response.text().await {
            Ok(text) => text,
            Err(e) => {
                error!("API call to {path} failed reading body: {e}");
                return Err(ApiError::Http(e));
            }
        };

        match serde_json::from_str(&text) {
            Ok(value) => Ok(value),
            Err(e) => {
                error!("API call to {path} returned invalid JSON: {e}");
                Err(ApiError::Parse(e))
            }
        }
    }
}

fn json_defaults() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers
}

fn form_defaults() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        CONTENT_TYPE,
        HeaderValue::from_static("application/x-www-form-urlencoded"),
    );
    headers
}

fn merged_headers(mut defaults: HeaderMap, overrides: &HeaderMap) -> HeaderMap {
    for (name, value) in overrides {
        defaults.insert(name, value.clone());
    }
    defaults
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::{HeaderName, ACCEPT};

    #[test]
    fn test_defaults_survive_when_not_overridden() {
        let mut overrides = HeaderMap::new();
        overrides.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let merged = merged_headers(json_defaults(), &overrides);
        assert_eq!(merged.get(CONTENT_TYPE).unwrap(), "application/json");
        assert_eq!(merged.get(ACCEPT).unwrap(), "application/json");
    }

    #[test]
    fn test_caller_wins_on_collision() {
        let mut overrides = HeaderMap::new();
        overrides.insert(CONTENT_TYPE, HeaderValue::from_static("text/plain"));

        let merged = merged_headers(json_defaults(), &overrides);
        assert_eq!(merged.get(CONTENT_TYPE).unwrap(), "text/plain");
        assert_eq!(merged.len(), 1);
    }

    #[test]
    fn test_custom_header_carried_through() {
        let mut overrides = HeaderMap::new();
        overrides.insert(
            HeaderName::from_static("x-requested-with"),
            HeaderValue::from_static("smartjobs"),
        );

        let merged = merged_headers(form_defaults(), &overrides);
        assert_eq!(
            merged.get(CONTENT_TYPE).unwrap(),
            "application/x-www-form-urlencoded"
        );
        assert_eq!(merged.get("x-requested-with").unwrap(), "smartjobs");
    }

    #[test]
    fn test_base_trailing_slash_is_trimmed() {
        let config = Config {
            api_base: "http://localhost:8080/".to_string(),
        };
        let client = ApiClient::new(&config).unwrap();
        assert_eq!(client.url("/api/jobs"), "http://localhost:8080/api/jobs");
    }

    #[test]
    fn test_call_options_default_is_empty() {
        let options = CallOptions::default();
        assert!(options.method.is_none());
        assert!(options.headers.is_empty());
        assert!(options.body.is_none());
    }
}
