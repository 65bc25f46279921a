use serde::{Deserialize, Serialize};

use crate::catalog::{CatalogDomain, CatalogRecord};
use crate::record_id::RecordId;
use crate::wire::{document_id, serialize_document_id};

/// Group label for listings that carry no category.
pub const OTHER_CATEGORY: &str = "Other";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobListing {
    #[serde(
        flatten,
        deserialize_with = "document_id",
        serialize_with = "serialize_document_id"
    )]
    pub id: RecordId,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview: Option<String>,
    #[serde(default)]
    pub positions: u32,
    #[serde(default)]
    pub days_left: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl JobListing {
    /// Category used for grouping; blank and missing both map to [`OTHER_CATEGORY`].
    pub fn group_label(&self) -> &str {
        self.category
            .as_deref()
            .filter(|c| !c.is_empty())
            .unwrap_or(OTHER_CATEGORY)
    }
}

impl CatalogRecord for JobListing {
    const DOMAIN: CatalogDomain = CatalogDomain::Jobs;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    fn display_name(&self) -> &str {
        &self.title
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str()]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryGroup<T> {
    pub category: String,
    pub items: Vec<T>,
}
