use serde::{Deserialize, Serialize};

use crate::catalog::{CatalogDomain, CatalogRecord};
use crate::record_id::RecordId;
use crate::wire::{document_id, serialize_document_id, text_or_number};

const DEFAULT_CATEGORY_LABEL: &str = "Biofertilizer";

/// A benefit line: either plain text or a titled description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BenefitEntry {
    Text(String),
    Detailed {
        title: String,
        #[serde(default)]
        desc: String,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DosagePlan {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dosage: Option<String>,
    #[serde(default, alias = "details", skip_serializing_if = "Option::is_none")]
    pub timing: Option<String>,
}

/// A dosage line: free text or a method/dosage/timing triple.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DosageEntry {
    Text(String),
    Plan(DosagePlan),
}

impl DosageEntry {
    pub fn summary(&self) -> Option<&str> {
        match self {
            DosageEntry::Text(text) => Some(text.as_str()),
            DosageEntry::Plan(plan) => plan.dosage.as_deref().or(plan.timing.as_deref()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

/// One row of the technical data table. Older records use `key`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechSpec {
    #[serde(alias = "key")]
    pub label: String,
    #[serde(deserialize_with = "text_or_number")]
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CropList {
    List(Vec<String>),
    Text(String),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(
        flatten,
        deserialize_with = "document_id",
        serialize_with = "serialize_document_id"
    )]
    pub id: RecordId,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, alias = "img", skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overview: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub what_is: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub how_it_works: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub why_choose: Option<String>,
    #[serde(default)]
    pub benefits: Vec<BenefitEntry>,
    #[serde(default)]
    pub dosage: Vec<DosageEntry>,
    #[serde(default)]
    pub pack_sizes: Vec<String>,
    #[serde(default)]
    pub faqs: Vec<Faq>,
    #[serde(default)]
    pub tech_info: Vec<TechSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crops: Option<CropList>,
}

impl Product {
    /// Short text shown on listing cards.
    pub fn summary(&self) -> Option<&str> {
        self.desc
            .as_deref()
            .or(self.overview.as_deref())
            .or(self.description.as_deref())
    }

    pub fn category_label(&self) -> &str {
        self.category
            .as_deref()
            .filter(|c| !c.is_empty())
            .unwrap_or(DEFAULT_CATEGORY_LABEL)
    }

    pub fn suggested_dosage(&self) -> Option<&str> {
        self.dosage.first().and_then(DosageEntry::summary)
    }
}

impl CatalogRecord for Product {
    const DOMAIN: CatalogDomain = CatalogDomain::Products;

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
        &self.name
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str()];
        if let Some(category) = self.category.as_deref() {
            fields.push(category);
        }
        fields
    }
}
