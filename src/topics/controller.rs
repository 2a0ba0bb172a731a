// Topic list state and the controller that drives it

use super::Topic;
use crate::api::TopicsApi;
use crate::events::{TopicAction, TopicEvent};
use std::fmt;
use std::sync::Arc;

/// Load state of the topic list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    /// Not mounted yet
    #[default]
    Idle,
    /// Fetch in flight
    Loading,
    /// Fetch finished, successfully or not
    Loaded,
}

/// Client-side validation failures (no request is made)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopicError {
    EmptyTitle,
}

impl fmt::Display for TopicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "Topic title cannot be empty."),
        }
    }
}

impl std::error::Error for TopicError {}

/// Reject empty titles before anything reaches the network
pub fn validate_title(title: &str) -> Result<&str, TopicError> {
    if title.is_empty() {
        Err(TopicError::EmptyTitle)
    } else {
        Ok(title)
    }
}

/// Local cache of the server's topic list plus the new-topic draft
#[derive(Debug, Default)]
pub struct TopicList {
    topics: Vec<Topic>,
    state: LoadState,
    draft: String,
    last_failure: Option<TopicAction>,
}

impl TopicList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Topic> {
        self.topics.get(index)
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == LoadState::Loading
    }

    /// Action of the most recent request, if it failed
    pub fn last_failure(&self) -> Option<TopicAction> {
        self.last_failure
    }

    /// Text typed into the "Topic Title" input
    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut String {
        &mut self.draft
    }

    /// Mount: enter `Loading` ahead of the initial fetch
    pub fn begin_fetch(&mut self) {
        self.state = LoadState::Loading;
    }

    /// Unmount: drop cached topics and return to `Idle`
    pub fn reset(&mut self) {
        self.topics.clear();
        self.draft.clear();
        self.state = LoadState::Idle;
        self.last_failure = None;
    }

    /// Reconcile local state with a request outcome
    pub fn apply(&mut self, event: TopicEvent) {
        self.last_failure = None;
        match event {
            TopicEvent::Fetched(topics) => {
                self.topics = topics;
                self.state = LoadState::Loaded;
            }
            TopicEvent::Added(topic) => {
                // Ids stay unique: a reused id replaces the stale entry in place
                if let Some(existing) = self.topics.iter_mut().find(|t| t.id == topic.id) {
                    tracing::warn!("Server reused topic id {}", topic.id);
                    *existing = topic;
                } else {
                    self.topics.push(topic);
                }
                self.draft.clear();
            }
            TopicEvent::Renamed { id, title } => {
                for topic in self.topics.iter_mut().filter(|t| t.id == id) {
                    topic.title = title.clone();
                }
            }
            TopicEvent::Deleted { id } => {
                self.topics.retain(|t| t.id != id);
            }
            TopicEvent::Failed { action, .. } => {
                if action == TopicAction::Fetch {
                    self.state = LoadState::Loaded;
                }
                self.last_failure = Some(action);
            }
        }
    }
}

/// Drives a `TopicList` against a `TopicsApi`, one awaited request at a time
pub struct TopicController<A> {
    api: Arc<A>,
    list: TopicList,
}

impl<A: TopicsApi> TopicController<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self {
            api,
            list: TopicList::new(),
        }
    }

    pub fn list(&self) -> &TopicList {
        &self.list
    }

    #[cfg(test)]
    pub fn list_mut(&mut self) -> &mut TopicList {
        &mut self.list
    }

    pub fn topics(&self) -> &[Topic] {
        self.list.topics()
    }

    #[cfg(test)]
    pub fn state(&self) -> LoadState {
        self.list.state()
    }

    /// Replace the list with the server's. Failures are logged and leave it as is.
    pub async fn fetch_topics(&mut self) {
        self.list.begin_fetch();
        let event = super::fetch(&*self.api).await;
        self.list.apply(event);
    }

    /// Create a topic and append the server's copy
    pub async fn add_topic(&mut self, title: &str) -> Result<(), TopicError> {
        let title = validate_title(title)?;
        let event = super::add(&*self.api, title).await;
        self.list.apply(event);
        Ok(())
    }

    /// Rename a topic, patching the local entry once the server accepts
    pub async fn edit_topic(&mut self, id: &str, new_title: &str) {
        let event = super::edit(&*self.api, id, new_title).await;
        self.list.apply(event);
    }

    /// Delete a topic, dropping the local entry once the server accepts
    pub async fn delete_topic(&mut self, id: &str) {
        let event = super::delete(&*self.api, id).await;
        self.list.apply(event);
    }
}
