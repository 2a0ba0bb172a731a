// API module - everything that talks to the topics backend over HTTP
//
// - client: generic JSON request wrapper bound to one origin
// - topics: typed `/api/topics` resource behind the `TopicsApi` trait

pub mod client;
pub mod topics;

pub use client::{ApiError, HttpClient};
pub use topics::{HttpTopicsApi, TopicsApi};
