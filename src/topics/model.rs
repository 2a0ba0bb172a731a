//! Topic records as exchanged with the backend

use serde::{Deserialize, Deserializer, Serialize};

/// A discussion topic owned by the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    /// Server-assigned identifier (numeric ids are accepted and kept as text)
    #[serde(deserialize_with = "id_as_string")]
    pub id: String,
    pub title: String,
    /// Parent topic, carried through but never traversed
    #[serde(
        rename = "parentId",
        default,
        deserialize_with = "optional_id_as_string"
    )]
    pub parent_id: Option<String>,
}

impl Topic {
    #[cfg(test)]
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            parent_id: None,
        }
    }
}

/// Request payload for create and update: `{"title": ...}`
#[derive(Debug, Serialize)]
pub struct TitlePayload<'a> {
    pub title: &'a str,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(serde_json::Number),
}

impl From<RawId> for String {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Text(s) => s,
            RawId::Number(n) => n.to_string(),
        }
    }
}

fn id_as_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    RawId::deserialize(deserializer).map(String::from)
}

fn optional_id_as_string<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    Ok(Option::<RawId>::deserialize(deserializer)?.map(String::from))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_topic_parses_backend_shape() {
        let topic: Topic =
            serde_json::from_value(json!({ "id": "1", "title": "A", "parentId": null })).unwrap();
        assert_eq!(topic, Topic::new("1", "A"));
    }

    #[test]
    fn test_numeric_ids_become_strings() {
        let topic: Topic =
            serde_json::from_value(json!({ "id": 7, "title": "A", "parentId": 3 })).unwrap();
        assert_eq!(topic.id, "7");
        assert_eq!(topic.parent_id.as_deref(), Some("3"));
    }

    #[test]
    fn test_missing_parent_defaults_to_none() {
        let topic: Topic = serde_json::from_value(json!({ "id": "x", "title": "T" })).unwrap();
        assert_eq!(topic.parent_id, None);
    }

    #[test]
    fn test_serializes_parent_id_in_camel_case() {
        let value = serde_json::to_value(Topic::new("1", "A")).unwrap();
        assert_eq!(value, json!({ "id": "1", "title": "A", "parentId": null }));
    }
}
