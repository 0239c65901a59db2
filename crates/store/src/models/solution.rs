//! Solution entity model and DTOs.

use serde::{Deserialize, Serialize};

use kbase_core::moderation::ModerationState;
use kbase_core::types::DbId;

/// A proposed resolution to an issue, citing a source.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Solution {
    pub id: DbId,
    pub title: String,
    pub content: String,
    /// Free-text or URL citation backing the proposal.
    pub source: String,
    pub issue_id: DbId,
    pub approved: bool,
    pub rejected: bool,
}

impl Solution {
    /// The moderation state encoded by the `approved`/`rejected` flag pair.
    pub fn moderation_state(&self) -> ModerationState {
        ModerationState::from_flags(self.approved, self.rejected)
    }
}

/// DTO for creating a new solution. Moderation flags are server-assigned.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateSolution {
    pub title: String,
    pub content: String,
    pub source: String,
    pub issue_id: DbId,
}
