//! HTTP client wrapper for the topics backend
//!
//! Every request is resolved against a single base origin. Failures of any
//! kind (transport, non-2xx status, undecodable body) collapse into
//! `ApiError::RequestFailed`. Status codes and bodies only reach the debug log.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// HTTP methods the topics backend understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Per-request options: method, headers and an already serialized body
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub method: Method,
    pub headers: BTreeMap<String, String>,
    pub body: Option<String>,
}

impl RequestOptions {
    /// Options for a bodyless request
    pub fn new(method: Method) -> Self {
        Self {
            method,
            ..Default::default()
        }
    }

    /// Options carrying a JSON payload with the matching Content-Type header
    pub fn json<T: Serialize>(method: Method, payload: &T) -> Result<Self, ApiError> {
        let body = serde_json::to_string(payload).map_err(|e| {
            tracing::debug!("Failed to serialize request body: {}", e);
            ApiError::RequestFailed
        })?;

        Ok(Self::new(method)
            .header("Content-Type", "application/json")
            .body(body))
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }
}

/// Error returned by every failed request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiError {
    /// Transport error, non-2xx status, or a body that is not JSON
    RequestFailed,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RequestFailed => write!(f, "Failed to fetch"),
        }
    }
}

impl std::error::Error for ApiError {}

/// JSON-over-HTTP client bound to one origin
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpClient {
    /// Create a client for the given origin (e.g. `https://example.com`)
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        // No timeout: a hung request simply never resolves
        let client = reqwest::Client::builder()
            .user_agent(concat!("topicdesk/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Resolve a path against the base origin
    pub fn url_for(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Issue a request and decode the response body as JSON
    ///
    /// An empty 2xx body decodes to `Value::Null`, so acknowledgements
    /// without content (204 on DELETE) still succeed.
    pub async fn request(&self, path: &str, options: RequestOptions) -> Result<Value, ApiError> {
        let url = self.url_for(path);
        let method = options.method;

        let mut req = self.client.request(method.into(), &url);
        for (name, value) in &options.headers {
            req = req.header(name, value);
        }
        if let Some(body) = options.body {
            req = req.body(body);
        }

        let response = req.send().await.map_err(|e| {
            tracing::debug!("{} {} failed: {}", method.as_str(), url, e);
            ApiError::RequestFailed
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!("{} {} returned {}", method.as_str(), url, status);
            return Err(ApiError::RequestFailed);
        }

        let bytes = response.bytes().await.map_err(|e| {
            tracing::debug!("{} {}: failed to read body: {}", method.as_str(), url, e);
            ApiError::RequestFailed
        })?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }

        serde_json::from_slice(&bytes).map_err(|e| {
            tracing::debug!("{} {}: invalid JSON body: {}", method.as_str(), url, e);
            ApiError::RequestFailed
        })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use axum::{
        http::{HeaderMap, StatusCode},
        routing::{delete, get, post},
        Json, Router,
    };
    use serde_json::json;

    /// Serve a router on an ephemeral local port and return its origin
    pub(crate) async fn spawn_server(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind test listener");
        let addr = listener.local_addr().expect("local addr");
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("test server");
        });
        format!("http://{}", addr)
    }

    fn router() -> Router {
        Router::new()
            .route("/ok", get(|| async { Json(json!({ "hello": "world" })) }))
            .route(
                "/broken",
                get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
            )
            .route("/missing", get(|| async { StatusCode::NOT_FOUND }))
            .route("/not-json", get(|| async { "plain text" }))
            .route("/empty", delete(|| async { StatusCode::NO_CONTENT }))
            .route(
                "/echo",
                post(|headers: HeaderMap, body: String| async move {
                    let content_type = headers
                        .get("content-type")
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or_default()
                        .to_string();
                    Json(json!({ "content_type": content_type, "body": body }))
                }),
            )
    }

    #[tokio::test]
    async fn test_get_decodes_json() {
        let client = HttpClient::new(spawn_server(router()).await).unwrap();
        let value = client.request("/ok", RequestOptions::default()).await;
        assert_eq!(value, Ok(json!({ "hello": "world" })));
    }

    #[tokio::test]
    async fn test_non_success_status_is_request_failed() {
        let client = HttpClient::new(spawn_server(router()).await).unwrap();
        assert_eq!(
            client.request("/broken", RequestOptions::default()).await,
            Err(ApiError::RequestFailed)
        );
        assert_eq!(
            client.request("/missing", RequestOptions::default()).await,
            Err(ApiError::RequestFailed)
        );
    }

    #[tokio::test]
    async fn test_invalid_json_is_request_failed() {
        let client = HttpClient::new(spawn_server(router()).await).unwrap();
        assert_eq!(
            client.request("/not-json", RequestOptions::default()).await,
            Err(ApiError::RequestFailed)
        );
    }

    #[tokio::test]
    async fn test_empty_body_decodes_to_null() {
        let client = HttpClient::new(spawn_server(router()).await).unwrap();
        let value = client
            .request("/empty", RequestOptions::new(Method::Delete))
            .await;
        assert_eq!(value, Ok(Value::Null));
    }

    #[tokio::test]
    async fn test_json_options_send_body_and_content_type() {
        let client = HttpClient::new(spawn_server(router()).await).unwrap();
        let options = RequestOptions::json(Method::Post, &json!({ "title": "B" })).unwrap();
        let value = client.request("/echo", options).await.unwrap();

        assert_eq!(value["content_type"], "application/json");
        assert_eq!(value["body"], r#"{"title":"B"}"#);
    }

    #[tokio::test]
    async fn test_unreachable_origin_is_request_failed() {
        // Port 9 (discard) on localhost is closed in test environments
        let client = HttpClient::new("http://127.0.0.1:9").unwrap();
        assert_eq!(
            client.request("/ok", RequestOptions::default()).await,
            Err(ApiError::RequestFailed)
        );
    }

    #[test]
    fn test_url_for_joins_without_double_slash() {
        let client = HttpClient::new("https://example.com/").unwrap();
        assert_eq!(
            client.url_for("/api/topics"),
            "https://example.com/api/topics"
        );
        assert_eq!(
            client.url_for("api/topics"),
            "https://example.com/api/topics"
        );
    }
}
