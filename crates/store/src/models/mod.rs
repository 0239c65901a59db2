//! Entity models and creation DTOs.
//!
//! Each submodule defines one entity struct plus its `CreateX` input type.
//! JSON field names are camelCase for client compatibility.

pub mod issue;
pub mod solution;
pub mod topic;
pub mod user;

pub use issue::{CreateIssue, Issue};
pub use solution::{CreateSolution, Solution};
pub use topic::{CreateTopic, Topic};
pub use user::{CreateUser, User};
