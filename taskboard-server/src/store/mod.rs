pub mod memory;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A task record. `assigned_to` equals `owner_id` at creation time;
/// the creation surface has no way to assign someone else.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub body: String,
    pub owner_id: String,
    pub assigned_to: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A user record. Identity itself (passwords, sessions) belongs to the
/// external identity provider; the store only keeps the directory row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub roles: Vec<String>,
}

/// Abstract store for task and user records.
/// Implementations: MemoryStore (in-process); a production deployment
/// would back this with the relational store.
pub trait TaskStore: Send + Sync {
    /// Register a user. Email must be unique across the store.
    fn create_user(&self, name: &str, email: &str, roles: &[String]) -> Result<User, StoreError>;

    /// Look up a user by id.
    fn get_user(&self, user_id: &str) -> Result<User, StoreError>;

    /// Look up a user by email.
    fn find_user_by_email(&self, email: &str) -> Option<User>;

    /// Persist a new task owned by and assigned to `owner`.
    /// The id and timestamps are assigned by the store.
    fn create_task(&self, owner: &User, title: &str, body: &str) -> Result<Task, StoreError>;

    /// Look up a task by id.
    fn get_task(&self, task_id: &str) -> Result<Task, StoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Task not found: {0}")]
    TaskNotFound(String),

    #[error("Email already registered: {0}")]
    EmailTaken(String),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}
