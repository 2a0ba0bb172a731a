//! Typed REST surface for `/api/topics`

use super::client::{ApiError, HttpClient, Method, RequestOptions};
use crate::topics::{TitlePayload, Topic};
use std::future::Future;

/// Collection path on the backend
pub const TOPICS_PATH: &str = "/api/topics";

/// Resource path for a single topic
pub fn topic_path(id: &str) -> String {
    format!("{}/{}", TOPICS_PATH, id)
}

/// Remote topic resource
///
/// The controller only talks to this trait, so tests can swap the HTTP
/// backend for an in-memory one.
pub trait TopicsApi: Send + Sync {
    /// GET the full list
    fn list(&self) -> impl Future<Output = Result<Vec<Topic>, ApiError>> + Send;

    /// POST a new title, returning the stored topic with its assigned id
    fn create(&self, title: &str) -> impl Future<Output = Result<Topic, ApiError>> + Send;

    /// PUT a new title; the response body is ignored
    fn update(&self, id: &str, title: &str) -> impl Future<Output = Result<(), ApiError>> + Send;

    /// DELETE a topic; the response body is ignored
    fn delete(&self, id: &str) -> impl Future<Output = Result<(), ApiError>> + Send;
}

/// `TopicsApi` backed by the HTTP client wrapper
#[derive(Debug, Clone)]
pub struct HttpTopicsApi {
    client: HttpClient,
}

impl HttpTopicsApi {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }
}

fn decode<T: serde::de::DeserializeOwned>(value: serde_json::Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|e| {
        tracing::debug!("Unexpected response shape: {}", e);
        ApiError::RequestFailed
    })
}

impl TopicsApi for HttpTopicsApi {
    async fn list(&self) -> Result<Vec<Topic>, ApiError> {
        let value = self
            .client
            .request(TOPICS_PATH, RequestOptions::default())
            .await?;
        decode(value)
    }

    async fn create(&self, title: &str) -> Result<Topic, ApiError> {
        let options = RequestOptions::json(Method::Post, &TitlePayload { title })?;
        let value = self.client.request(TOPICS_PATH, options).await?;
        decode(value)
    }

    async fn update(&self, id: &str, title: &str) -> Result<(), ApiError> {
        let options = RequestOptions::json(Method::Put, &TitlePayload { title })?;
        self.client.request(&topic_path(id), options).await?;
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.client
            .request(&topic_path(id), RequestOptions::new(Method::Delete))
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::client::tests::spawn_server;
    use axum::{
        extract::{Path, State},
        http::StatusCode,
        routing::{get, put},
        Json, Router,
    };
    use serde_json::{json, Value};
    use std::sync::{Arc, Mutex};

    /// Minimal in-memory backend speaking the topics protocol
    #[derive(Clone, Default)]
    struct Backend {
        topics: Arc<Mutex<Vec<Value>>>,
        next_id: Arc<Mutex<u32>>,
    }

    fn backend_router(backend: Backend) -> Router {
        Router::new()
            .route(
                "/api/topics",
                get(|State(b): State<Backend>| async move {
                    let topics = b.topics.lock().unwrap().clone();
                    Json(Value::Array(topics))
                })
                .post(
                    |State(b): State<Backend>, Json(body): Json<Value>| async move {
                        let mut next = b.next_id.lock().unwrap();
                        *next += 1;
                        let topic = json!({
                            "id": next.to_string(),
                            "title": body["title"],
                            "parentId": null,
                        });
                        b.topics.lock().unwrap().push(topic.clone());
                        (StatusCode::CREATED, Json(topic))
                    },
                ),
            )
            .route(
                "/api/topics/:id",
                put(
                    |State(b): State<Backend>,
                     Path(id): Path<String>,
                     Json(body): Json<Value>| async move {
                        let mut topics = b.topics.lock().unwrap();
                        let response = match topics.iter_mut().find(|t| t["id"] == id.as_str()) {
                            Some(topic) => {
                                topic["title"] = body["title"].clone();
                                (StatusCode::OK, Json(topic.clone()))
                            }
                            None => (StatusCode::NOT_FOUND, Json(Value::Null)),
                        };
                        response
                    },
                )
                .delete(
                    |State(b): State<Backend>, Path(id): Path<String>| async move {
                        let mut topics = b.topics.lock().unwrap();
                        let before = topics.len();
                        topics.retain(|t| t["id"] != id.as_str());
                        if topics.len() < before {
                            StatusCode::NO_CONTENT
                        } else {
                            StatusCode::NOT_FOUND
                        }
                    },
                ),
            )
            .with_state(backend)
    }

    async fn api() -> HttpTopicsApi {
        let origin = spawn_server(backend_router(Backend::default())).await;
        HttpTopicsApi::new(HttpClient::new(origin).unwrap())
    }

    #[tokio::test]
    async fn test_create_then_list() {
        let api = api().await;
        assert_eq!(api.list().await, Ok(vec![]));

        let created = api.create("B").await.unwrap();
        assert_eq!(created, Topic::new("1", "B"));
        assert_eq!(api.list().await, Ok(vec![Topic::new("1", "B")]));
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let api = api().await;
        let created = api.create("A").await.unwrap();

        assert_eq!(api.update(&created.id, "A2").await, Ok(()));
        assert_eq!(api.list().await, Ok(vec![Topic::new("1", "A2")]));

        assert_eq!(api.delete(&created.id).await, Ok(()));
        assert_eq!(api.list().await, Ok(vec![]));
    }

    #[tokio::test]
    async fn test_unknown_id_fails() {
        let api = api().await;
        assert_eq!(api.update("404", "x").await, Err(ApiError::RequestFailed));
        assert_eq!(api.delete("404").await, Err(ApiError::RequestFailed));
    }

    #[test]
    fn test_topic_path() {
        assert_eq!(topic_path("abc"), "/api/topics/abc");
    }
}
