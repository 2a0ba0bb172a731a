//! In-memory `TopicsApi` for tests

use super::Topic;
use crate::api::{ApiError, TopicsApi};
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::Mutex;

/// Backend double that records every call and can be told to fail
#[derive(Default)]
pub struct FakeTopicsApi {
    topics: Mutex<Vec<Topic>>,
    next_id: AtomicU32,
    failing: AtomicBool,
    calls: Mutex<Vec<String>>,
}

impl FakeTopicsApi {
    pub fn with_topics(topics: Vec<Topic>) -> Self {
        let next = topics.len() as u32;
        Self {
            topics: Mutex::new(topics),
            next_id: AtomicU32::new(next),
            ..Default::default()
        }
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn server_topics(&self) -> Vec<Topic> {
        self.topics.lock().unwrap().clone()
    }

    fn record(&self, call: String) -> Result<(), ApiError> {
        self.calls.lock().unwrap().push(call);
        if self.failing.load(Ordering::SeqCst) {
            Err(ApiError::RequestFailed)
        } else {
            Ok(())
        }
    }
}

impl TopicsApi for FakeTopicsApi {
    async fn list(&self) -> Result<Vec<Topic>, ApiError> {
        self.record("GET /api/topics".to_string())?;
        Ok(self.server_topics())
    }

    async fn create(&self, title: &str) -> Result<Topic, ApiError> {
        self.record(format!("POST /api/topics {}", title))?;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let topic = Topic::new(id.to_string(), title);
        self.topics.lock().unwrap().push(topic.clone());
        Ok(topic)
    }

    async fn update(&self, id: &str, title: &str) -> Result<(), ApiError> {
        self.record(format!("PUT /api/topics/{} {}", id, title))?;
        let mut topics = self.topics.lock().unwrap();
        match topics.iter_mut().find(|t| t.id == id) {
            Some(topic) => {
                topic.title = title.to_string();
                Ok(())
            }
            None => Err(ApiError::RequestFailed),
        }
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.record(format!("DELETE /api/topics/{}", id))?;
        let mut topics = self.topics.lock().unwrap();
        let before = topics.len();
        topics.retain(|t| t.id != id);
        if topics.len() < before {
            Ok(())
        } else {
            Err(ApiError::RequestFailed)
        }
    }
}
