//! Issue entity model and DTOs.

use serde::{Deserialize, Serialize};

use kbase_core::types::{DbId, Timestamp};

/// A documented problem entry under a topic.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub content: String,
    pub topic_id: DbId,
    /// Bullet points extracted from `content` by the summarization
    /// collaborator at creation time.
    pub key_facts: Vec<String>,
    pub approved: bool,
    pub created_at: Timestamp,
}

/// DTO for creating a new issue.
///
/// `keyFacts`, `approved`, and `createdAt` are server-assigned and rejected
/// if present in the payload.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateIssue {
    pub title: String,
    pub description: String,
    pub content: String,
    pub topic_id: DbId,
}
