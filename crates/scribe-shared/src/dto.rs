//! Data Transfer Objects - request/response types for the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Tags or subcategories as sent by clients: a single label or a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TagInput {
    One(String),
    Many(Vec<String>),
}

impl TagInput {
    pub fn into_vec(self) -> Vec<String> {
        match self {
            TagInput::One(label) => vec![label],
            TagInput::Many(labels) => labels,
        }
    }
}

/// Reads a present key as `Some`, so an explicit `null` becomes `Some(None)`
/// while a missing key stays `None` through `#[serde(default)]`.
fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Names of the keys in `fields` that were sent as `null`, followed by the
/// unknown keys.
fn ignored_keys(fields: &[(&str, bool)], extra: &Map<String, Value>) -> Vec<String> {
    fields
        .iter()
        .filter(|(_, is_null)| *is_null)
        .map(|(name, _)| name.to_string())
        .chain(extra.keys().cloned())
        .collect()
}

fn is_null<T>(value: &Option<Option<T>>) -> bool {
    matches!(value, Some(None))
}

/// Request to create a post. Fields are optional so that the server can
/// report exactly which one is missing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    #[serde(default, deserialize_with = "nullable")]
    pub title: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub body: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub author_id: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub category: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub tags: Option<Option<TagInput>>,
    #[serde(default, deserialize_with = "nullable")]
    pub subcategory: Option<Option<TagInput>>,
    #[serde(default, deserialize_with = "nullable")]
    pub is_published: Option<Option<bool>>,
    /// Keys that are not post fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Partial update of a post.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePostRequest {
    #[serde(default, deserialize_with = "nullable")]
    pub title: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub body: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub category: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub tags: Option<Option<TagInput>>,
    #[serde(default, deserialize_with = "nullable")]
    pub subcategory: Option<Option<TagInput>>,
    #[serde(default, deserialize_with = "nullable")]
    pub is_published: Option<Option<bool>>,
    /// Keys that are not updatable post fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CreatePostRequest {
    /// Keys sent without a usable value: explicit nulls and unknown keys.
    pub fn ignored_keys(&self) -> Vec<String> {
        ignored_keys(
            &[
                ("title", is_null(&self.title)),
                ("body", is_null(&self.body)),
                ("authorId", is_null(&self.author_id)),
                ("category", is_null(&self.category)),
                ("tags", is_null(&self.tags)),
                ("subcategory", is_null(&self.subcategory)),
                ("isPublished", is_null(&self.is_published)),
            ],
            &self.extra,
        )
    }
}

impl UpdatePostRequest {
    /// Keys sent without a usable value: explicit nulls and unknown keys.
    pub fn ignored_keys(&self) -> Vec<String> {
        ignored_keys(
            &[
                ("title", is_null(&self.title)),
                ("body", is_null(&self.body)),
                ("category", is_null(&self.category)),
                ("tags", is_null(&self.tags)),
                ("subcategory", is_null(&self.subcategory)),
                ("isPublished", is_null(&self.is_published)),
            ],
            &self.extra,
        )
    }
}

/// Query string for listing and bulk deletion.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogQuery {
    pub author_id: Option<String>,
    pub category: Option<String>,
    pub tags: Option<String>,
    pub subcategory: Option<String>,
    pub is_published: Option<String>,
}

/// A post as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: String,
    pub title: String,
    pub body: String,
    pub author_id: String,
    pub category: String,
    pub tags: Vec<String>,
    pub subcategory: Vec<String>,
    pub is_published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub is_deleted: bool,
    pub deleted_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Outcome of a bulk delete.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletedCountResponse {
    pub deleted_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tag_input_accepts_string_or_list() {
        let one: UpdatePostRequest = serde_json::from_value(json!({ "tags": "x" })).unwrap();
        assert_eq!(one.tags.flatten().unwrap().into_vec(), vec!["x".to_string()]);

        let many: UpdatePostRequest =
            serde_json::from_value(json!({ "subcategory": ["a", "b"] })).unwrap();
        assert_eq!(many.subcategory.flatten().unwrap().into_vec(), vec!["a", "b"]);
    }

    #[test]
    fn test_tag_input_rejects_other_shapes() {
        let result = serde_json::from_value::<UpdatePostRequest>(json!({ "tags": { "a": 1 } }));
        assert!(result.is_err());

        let result = serde_json::from_value::<UpdatePostRequest>(json!({ "tags": [1, 2] }));
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_keys_are_collected() {
        let req: UpdatePostRequest =
            serde_json::from_value(json!({ "authorId": "x", "isPublished": false })).unwrap();

        assert_eq!(req.is_published, Some(Some(false)));
        assert!(req.extra.contains_key("authorId"));
        assert_eq!(req.ignored_keys(), vec!["authorId".to_string()]);
    }

    #[test]
    fn test_null_keys_are_kept_apart_from_missing_ones() {
        let req: UpdatePostRequest =
            serde_json::from_value(json!({ "tags": null, "isPublished": null })).unwrap();

        assert_eq!(req.tags, Some(None));
        assert_eq!(req.is_published, Some(None));
        assert_eq!(req.title, None);
        assert_eq!(
            req.ignored_keys(),
            vec!["tags".to_string(), "isPublished".to_string()]
        );

        let empty: UpdatePostRequest = serde_json::from_value(json!({})).unwrap();
        assert!(empty.ignored_keys().is_empty());
    }
}
