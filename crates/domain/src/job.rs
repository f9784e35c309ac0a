//! Job-board records as seen on the wire.
//!
//! The harness never stores jobs. These types describe the payloads it sends
//! and the shape it expects back from the job-board API.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Fields every listed job must carry.
pub const LISTED_JOB_FIELDS: &[&str] = &[
    "id",
    "title",
    "company",
    "category",
    "location",
    "description",
    "postedDate",
];

/// Fields a freshly created job must carry in the creation response.
pub const CREATED_JOB_FIELDS: &[&str] = &[
    "id",
    "title",
    "company",
    "category",
    "location",
    "description",
];

/// Categories the job board accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JobCategory {
    /// Design roles
    Design,
    /// Engineering roles
    Development,
    /// Marketing roles
    Marketing,
    /// Sales roles
    Sales,
    /// Customer support roles
    Support,
    /// Anything else
    Other,
}

impl JobCategory {
    /// Every accepted category, in display order.
    pub const ALL: [Self; 6] = [
        Self::Design,
        Self::Development,
        Self::Marketing,
        Self::Sales,
        Self::Support,
        Self::Other,
    ];

    /// Wire name of the category.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Design => "Design",
            Self::Development => "Development",
            Self::Marketing => "Marketing",
            Self::Sales => "Sales",
            Self::Support => "Support",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for JobCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payload for `POST /api/jobs`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewJob {
    /// Job title
    pub title: String,
    /// Hiring company
    pub company: String,
    /// Job category
    pub category: JobCategory,
    /// Location, free text
    pub location: String,
    /// Description, free text
    pub description: String,
}

impl NewJob {
    /// A remote posting with placeholder company and description.
    #[must_use]
    pub fn remote(
        title: impl Into<String>,
        company: impl Into<String>,
        category: JobCategory,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            company: company.into(),
            category,
            location: "Remote".to_string(),
            description: description.into(),
        }
    }
}

/// A job as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRecord {
    /// Server-assigned identifier; numeric ids are kept as their decimal text
    #[serde(deserialize_with = "id_from_text_or_number")]
    pub id: String,
    /// Job title
    pub title: String,
    /// Hiring company
    pub company: String,
    /// Category as sent by the server; not restricted to [`JobCategory`]
    pub category: String,
    /// Location
    pub location: String,
    /// Description
    pub description: String,
    /// Posting timestamp
    #[serde(default)]
    pub posted_date: Option<DateTime<Utc>>,
}

fn id_from_text_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(id) => id,
        RawId::Number(id) => id.to_string(),
    })
}

/// Returns the entries of `fields` that are not keys of the JSON object
/// `record`. A non-object value is missing every field.
#[must_use]
pub fn missing_fields<'a>(record: &Value, fields: &[&'a str]) -> Vec<&'a str> {
    fields
        .iter()
        .copied()
        .filter(|field| record.get(field).is_none())
        .collect()
}

/// Returns the `id` of a JSON job record as text, if present.
#[must_use]
pub fn record_id(record: &Value) -> Option<String> {
    match record.get("id")? {
        Value::String(id) => Some(id.clone()),
        Value::Null => None,
        other => Some(other.to_string()),
    }
}
