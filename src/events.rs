// Topic events - requests sent to the backend and the outcomes they produce
//
// The TUI never awaits the network on its own task. A `TopicRequest` is spawned
// onto the runtime, and the `TopicEvent` it resolves to comes back over an
// mpsc channel to be applied to the topic list.

use crate::api::{ApiError, TopicsApi};
use crate::topics::{self, Topic};

/// Which controller operation an event belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopicAction {
    Fetch,
    Add,
    Edit,
    Delete,
}

impl TopicAction {
    /// Phrase used in log lines, e.g. "Failed to add topic"
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Fetch => "fetch topics",
            Self::Add => "add topic",
            Self::Edit => "edit topic",
            Self::Delete => "delete topic",
        }
    }
}

/// A single request-then-patch unit of work
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TopicRequest {
    Fetch,
    Add { title: String },
    Edit { id: String, title: String },
    Delete { id: String },
}

impl TopicRequest {
    pub fn action(&self) -> TopicAction {
        match self {
            Self::Fetch => TopicAction::Fetch,
            Self::Add { .. } => TopicAction::Add,
            Self::Edit { .. } => TopicAction::Edit,
            Self::Delete { .. } => TopicAction::Delete,
        }
    }

    /// Perform the request against the backend
    pub async fn run<A: TopicsApi>(self, api: &A) -> TopicEvent {
        match self {
            Self::Fetch => topics::fetch(api).await,
            Self::Add { title } => topics::add(api, &title).await,
            Self::Edit { id, title } => topics::edit(api, &id, &title).await,
            Self::Delete { id } => topics::delete(api, &id).await,
        }
    }
}

/// Outcome of a `TopicRequest`, ready to be applied to local state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TopicEvent {
    /// Full list from the server, replaces local state verbatim
    Fetched(Vec<Topic>),
    /// Server-created topic to append
    Added(Topic),
    /// Title acknowledged by the server
    Renamed { id: String, title: String },
    /// Topic removed on the server
    Deleted { id: String },
    /// Request failed; local list stays as it was
    Failed { action: TopicAction, error: ApiError },
}

impl TopicEvent {
    pub fn action(&self) -> TopicAction {
        match self {
            Self::Fetched(_) => TopicAction::Fetch,
            Self::Added(_) => TopicAction::Add,
            Self::Renamed { .. } => TopicAction::Edit,
            Self::Deleted { .. } => TopicAction::Delete,
            Self::Failed { action, .. } => *action,
        }
    }
}
