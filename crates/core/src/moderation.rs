//! Solution moderation state machine and validation.
//!
//! A solution carries two booleans, `approved` and `rejected`, which together
//! encode exactly one of three states. The flags are only ever written
//! through [`ModerationState::flags`], so `approved && rejected` can never
//! be observed.

use crate::error::CoreError;
use crate::validation::FieldErrors;

/// Maximum length for a solution title (characters).
pub const MAX_TITLE_LENGTH: usize = 200;

/// Maximum length for a solution's content body.
pub const MAX_CONTENT_LENGTH: usize = 20_000;

/// Maximum length for the source citation (free text or URL).
pub const MAX_SOURCE_LENGTH: usize = 500;

/// The moderation state of a solution.
///
/// ```text
/// pending ──approve──> approved ──┐
///    │                            ├──delete──> (removed)
///    └────reject────> rejected ───┘
/// ```
///
/// Approve and reject are admin-only and idempotent; deletion is allowed
/// from any state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModerationState {
    Pending,
    Approved,
    Rejected,
}

impl ModerationState {
    /// Decode the state from the stored flag pair.
    pub fn from_flags(approved: bool, rejected: bool) -> Self {
        // approved && rejected is unrepresentable by construction; if a
        // record were ever hand-built that way, approval wins nothing --
        // treat it as rejected so it stays hidden from non-admin viewers.
        match (approved, rejected) {
            (_, true) => ModerationState::Rejected,
            (true, false) => ModerationState::Approved,
            (false, false) => ModerationState::Pending,
        }
    }

    /// The `(approved, rejected)` flag pair this state is stored as.
    pub fn flags(self) -> (bool, bool) {
        match self {
            ModerationState::Pending => (false, false),
            ModerationState::Approved => (true, false),
            ModerationState::Rejected => (false, true),
        }
    }

    /// Whether a solution in this state is visible to non-admin viewers.
    pub fn visible_to_public(self) -> bool {
        self == ModerationState::Approved
    }
}

/// Validate a solution creation payload.
pub fn validate(title: &str, content: &str, source: &str) -> Result<(), CoreError> {
    let mut errors = FieldErrors::new();
    errors.require("title", title);
    errors.max_len("title", title, MAX_TITLE_LENGTH);
    errors.require("content", content);
    errors.max_len("content", content, MAX_CONTENT_LENGTH);
    errors.require("source", source);
    errors.max_len("source", source, MAX_SOURCE_LENGTH);
    errors.into_result()
}
