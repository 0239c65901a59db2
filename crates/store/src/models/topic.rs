//! Topic entity model and DTOs.

use serde::{Deserialize, Serialize};

use kbase_core::types::DbId;

/// A named category grouping issues.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
}

/// DTO for creating a new topic.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateTopic {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}
