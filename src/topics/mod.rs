//! Topic list controller
//!
//! Owns the in-memory topic list and keeps it in step with the backend.
//! Each operation is a request half (the free async functions below, which
//! resolve to a `TopicEvent` and log failures) and a reconcile half
//! (`TopicList::apply`). Local state only changes after a successful response.

mod controller;
mod model;

#[cfg(test)]
pub(crate) mod fake;

pub use controller::{validate_title, LoadState, TopicController, TopicList};
pub use model::{TitlePayload, Topic};

use crate::api::{ApiError, TopicsApi};
use crate::events::{TopicAction, TopicEvent};

fn failed(action: TopicAction, error: ApiError) -> TopicEvent {
    tracing::error!("Failed to {}: {}", action.describe(), error);
    TopicEvent::Failed { action, error }
}

/// GET the full list
pub async fn fetch<A: TopicsApi>(api: &A) -> TopicEvent {
    match api.list().await {
        Ok(topics) => {
            tracing::debug!("Fetched {} topic(s)", topics.len());
            TopicEvent::Fetched(topics)
        }
        Err(e) => failed(TopicAction::Fetch, e),
    }
}

/// POST a new topic. Callers validate the title first.
pub async fn add<A: TopicsApi>(api: &A, title: &str) -> TopicEvent {
    match api.create(title).await {
        Ok(topic) => {
            tracing::info!("Added topic {} ({:?})", topic.id, topic.title);
            TopicEvent::Added(topic)
        }
        Err(e) => failed(TopicAction::Add, e),
    }
}

/// PUT a new title; success echoes what was sent
pub async fn edit<A: TopicsApi>(api: &A, id: &str, title: &str) -> TopicEvent {
    match api.update(id, title).await {
        Ok(()) => {
            tracing::info!("Renamed topic {} to {:?}", id, title);
            TopicEvent::Renamed {
                id: id.to_string(),
                title: title.to_string(),
            }
        }
        Err(e) => failed(TopicAction::Edit, e),
    }
}

/// DELETE a topic
pub async fn delete<A: TopicsApi>(api: &A, id: &str) -> TopicEvent {
    match api.delete(id).await {
        Ok(()) => {
            tracing::info!("Deleted topic {}", id);
            TopicEvent::Deleted { id: id.to_string() }
        }
        Err(e) => failed(TopicAction::Delete, e),
    }
}
