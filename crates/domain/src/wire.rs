use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::record_id::RecordId;

#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Int(i64),
    Float(f64),
}

/// Accepts `"12 L"`, `12` or `1.5` and keeps the textual form.
pub(crate) fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match TextOrNumber::deserialize(deserializer)? {
        TextOrNumber::Text(s) => s,
        TextOrNumber::Int(n) => n.to_string(),
        TextOrNumber::Float(f) => f.to_string(),
    })
}

/// Stored documents may carry `id`, Mongo's `_id`, or both.
#[derive(Deserialize)]
struct DocumentIds {
    #[serde(default)]
    id: Option<RecordId>,
    #[serde(default, rename = "_id")]
    mongo_id: Option<RecordId>,
}

#[derive(Serialize)]
struct DocumentIdRef<'a> {
    id: &'a RecordId,
}

/// For a flattened id field: prefers `id` and falls back to `_id` when
/// `id` is missing, null or empty.
pub(crate) fn document_id<'de, D>(deserializer: D) -> Result<RecordId, D::Error>
where
    D: Deserializer<'de>,
{
    let ids = DocumentIds::deserialize(deserializer)?;
    Ok(ids
        .id
        .filter(|id| !id.is_empty())
        .or(ids.mongo_id)
        .unwrap_or_default())
}

/// Writes a flattened id field back out as a plain `id` key.
pub(crate) fn serialize_document_id<S>(id: &RecordId, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    DocumentIdRef { id }.serialize(serializer)
}
