//! The in-memory entity store.
//!
//! One [`RwLock`]-guarded table per entity type, each with its own
//! auto-incrementing id counter. Locking is coarse by design: contention is
//! negligible at this workload, and a single write lock per operation is
//! enough to keep concurrent moderation actions from corrupting a table
//! (last writer wins).

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::Utc;

use kbase_core::error::CoreError;
use kbase_core::moderation::ModerationState;
use kbase_core::types::DbId;

use crate::models::{
    CreateIssue, CreateSolution, CreateTopic, CreateUser, Issue, Solution, Topic, User,
};

/// An id-keyed table with an auto-incrementing counter.
#[derive(Debug)]
struct Table<T> {
    rows: HashMap<DbId, T>,
    next_id: DbId,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: HashMap::new(),
            next_id: 1,
        }
    }
}

impl<T> Table<T> {
    fn assign_id(&mut self) -> DbId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

/// The in-memory repository. Sole owner and mutator of all entity
/// collections; constructed empty at startup and seeded explicitly.
#[derive(Debug, Default)]
pub struct MemStore {
    users: RwLock<Table<User>>,
    topics: RwLock<Table<Topic>>,
    issues: RwLock<Table<Issue>>,
    solutions: RwLock<Table<Solution>>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    // -----------------------------------------------------------------------
    // Users
    // -----------------------------------------------------------------------

    /// Create a user. Usernames are unique; duplicates are a conflict.
    pub fn create_user(&self, input: CreateUser) -> Result<User, CoreError> {
        let mut users = self.users.write().unwrap();
        if users.rows.values().any(|u| u.username == input.username) {
            return Err(CoreError::Conflict(format!(
                "Username '{}' is already taken",
                input.username
            )));
        }
        let id = users.assign_id();
        let user = User {
            id,
            username: input.username,
            password_hash: input.password_hash,
            is_admin: input.is_admin,
        };
        users.rows.insert(id, user.clone());
        Ok(user)
    }

    pub fn get_user(&self, id: DbId) -> Option<User> {
        self.users.read().unwrap().rows.get(&id).cloned()
    }

    pub fn find_user_by_username(&self, username: &str) -> Option<User> {
        self.users
            .read()
            .unwrap()
            .rows
            .values()
            .find(|u| u.username == username)
            .cloned()
    }

    // -----------------------------------------------------------------------
    // Topics
    // -----------------------------------------------------------------------

    pub fn create_topic(&self, input: CreateTopic) -> Topic {
        let mut topics = self.topics.write().unwrap();
        let id = topics.assign_id();
        let topic = Topic {
            id,
            name: input.name,
            description: input.description,
        };
        topics.rows.insert(id, topic.clone());
        topic
    }

    pub fn get_topic(&self, id: DbId) -> Option<Topic> {
        self.topics.read().unwrap().rows.get(&id).cloned()
    }

    /// All topics, ordered by id.
    pub fn list_topics(&self) -> Vec<Topic> {
        let topics = self.topics.read().unwrap();
        let mut all: Vec<Topic> = topics.rows.values().cloned().collect();
        all.sort_by_key(|t| t.id);
        all
    }

    // -----------------------------------------------------------------------
    // Issues
    // -----------------------------------------------------------------------

    /// Create an issue. The referenced topic must exist; `key_facts` comes
    /// from the summarization collaborator (possibly empty).
    pub fn create_issue(
        &self,
        input: CreateIssue,
        key_facts: Vec<String>,
    ) -> Result<Issue, CoreError> {
        if self.get_topic(input.topic_id).is_none() {
            return Err(CoreError::NotFound {
                entity: "Topic",
                id: input.topic_id,
            });
        }
        let mut issues = self.issues.write().unwrap();
        let id = issues.assign_id();
        let issue = Issue {
            id,
            title: input.title,
            description: input.description,
            content: input.content,
            topic_id: input.topic_id,
            key_facts,
            approved: false,
            created_at: Utc::now(),
        };
        issues.rows.insert(id, issue.clone());
        Ok(issue)
    }

    pub fn get_issue(&self, id: DbId) -> Option<Issue> {
        self.issues.read().unwrap().rows.get(&id).cloned()
    }

    /// Issues ordered by id, optionally filtered by topic.
    pub fn list_issues(&self, topic_id: Option<DbId>) -> Vec<Issue> {
        let issues = self.issues.read().unwrap();
        let mut all: Vec<Issue> = issues
            .rows
            .values()
            .filter(|i| topic_id.is_none_or(|t| i.topic_id == t))
            .cloned()
            .collect();
        all.sort_by_key(|i| i.id);
        all
    }

    /// Mark an issue approved. Idempotent; NotFound if the id is absent.
    pub fn approve_issue(&self, id: DbId) -> Result<Issue, CoreError> {
        let mut issues = self.issues.write().unwrap();
        let issue = issues.rows.get_mut(&id).ok_or(CoreError::NotFound {
            entity: "Issue",
            id,
        })?;
        issue.approved = true;
        Ok(issue.clone())
    }

    // -----------------------------------------------------------------------
    // Solutions
    // -----------------------------------------------------------------------

    /// Create a solution in the pending state. The referenced issue must exist.
    pub fn create_solution(&self, input: CreateSolution) -> Result<Solution, CoreError> {
        if self.get_issue(input.issue_id).is_none() {
            return Err(CoreError::NotFound {
                entity: "Issue",
                id: input.issue_id,
            });
        }
        let mut solutions = self.solutions.write().unwrap();
        let id = solutions.assign_id();
        let (approved, rejected) = ModerationState::Pending.flags();
        let solution = Solution {
            id,
            title: input.title,
            content: input.content,
            source: input.source,
            issue_id: input.issue_id,
            approved,
            rejected,
        };
        solutions.rows.insert(id, solution.clone());
        Ok(solution)
    }

    pub fn get_solution(&self, id: DbId) -> Option<Solution> {
        self.solutions.read().unwrap().rows.get(&id).cloned()
    }

    /// Solutions for the given issue, ordered by id. Visibility filtering is
    /// the API layer's concern; this returns every moderation state.
    pub fn list_solutions(&self, issue_id: DbId) -> Vec<Solution> {
        let solutions = self.solutions.read().unwrap();
        let mut all: Vec<Solution> = solutions
            .rows
            .values()
            .filter(|s| s.issue_id == issue_id)
            .cloned()
            .collect();
        all.sort_by_key(|s| s.id);
        all
    }

    /// Transition a solution to approved. Idempotent.
    pub fn approve_solution(&self, id: DbId) -> Result<Solution, CoreError> {
        self.set_moderation_state(id, ModerationState::Approved)
    }

    /// Transition a solution to rejected. Always clears the approved flag so
    /// the two flags stay mutually exclusive.
    pub fn reject_solution(&self, id: DbId) -> Result<Solution, CoreError> {
        self.set_moderation_state(id, ModerationState::Rejected)
    }

    fn set_moderation_state(
        &self,
        id: DbId,
        state: ModerationState,
    ) -> Result<Solution, CoreError> {
        let mut solutions = self.solutions.write().unwrap();
        let solution = solutions.rows.get_mut(&id).ok_or(CoreError::NotFound {
            entity: "Solution",
            id,
        })?;
        let (approved, rejected) = state.flags();
        solution.approved = approved;
        solution.rejected = rejected;
        Ok(solution.clone())
    }

    /// Remove a solution. Allowed from any moderation state; NotFound if the
    /// id is absent, so the API layer can answer 404 rather than 500.
    pub fn delete_solution(&self, id: DbId) -> Result<(), CoreError> {
        let mut solutions = self.solutions.write().unwrap();
        match solutions.rows.remove(&id) {
            Some(_) => Ok(()),
            None => Err(CoreError::NotFound {
                entity: "Solution",
                id,
            }),
        }
    }
}
