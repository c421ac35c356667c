/// In-memory store: RwLock'd maps keyed by id.
///
/// Stands in for the relational store in tests and single-node runs.
/// Ids are UUID v4 strings assigned at creation and never reused;
/// timestamps are stamped here so callers never see a half-built row.
use std::collections::HashMap;
use std::sync::RwLock;

use chrono::Utc;

use super::{StoreError, Task, TaskStore, User};

#[derive(Default)]
pub struct MemoryStore {
    users: RwLock<HashMap<String, User>>,
    tasks: RwLock<HashMap<String, Task>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of persisted tasks. Test observability hook.
    pub fn task_count(&self) -> usize {
        self.tasks.read().map(|t| t.len()).unwrap_or(0)
    }
}

impl TaskStore for MemoryStore {
    fn create_user(&self, name: &str, email: &str, roles: &[String]) -> Result<User, StoreError> {
        let mut users = self
            .users
            .write()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        if users.values().any(|u| u.email == email) {
            return Err(StoreError::EmailTaken(email.to_string()));
        }
        let user = User {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.to_string(),
            email: email.to_string(),
            roles: roles.to_vec(),
        };
        users.insert(user.id.clone(), user.clone());
        log::info!("[taskboard.store] Registered user: {} ({})", user.email, user.id);
        Ok(user)
    }

    fn get_user(&self, user_id: &str) -> Result<User, StoreError> {
        let users = self
            .users
            .read()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        users
            .get(user_id)
            .cloned()
            .ok_or_else(|| StoreError::UserNotFound(user_id.to_string()))
    }

    fn find_user_by_email(&self, email: &str) -> Option<User> {
        let users = self.users.read().ok()?;
        users.values().find(|u| u.email == email).cloned()
    }

    fn create_task(&self, owner: &User, title: &str, body: &str) -> Result<Task, StoreError> {
        // Owner must still exist; the referential invariant lives here,
        // not with the caller.
        self.get_user(&owner.id)?;

        let mut tasks = self
            .tasks
            .write()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        let now = Utc::now();
        let task = Task {
            id: uuid::Uuid::new_v4().to_string(),
            title: title.to_string(),
            body: body.to_string(),
            owner_id: owner.id.clone(),
            assigned_to: owner.id.clone(),
            created_at: now,
            updated_at: now,
        };
        tasks.insert(task.id.clone(), task.clone());
        log::info!(
            "[taskboard.store] Created task {} for user {}",
            task.id,
            owner.id
        );
        Ok(task)
    }

    fn get_task(&self, task_id: &str) -> Result<Task, StoreError> {
        let tasks = self
            .tasks
            .read()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        tasks
            .get(task_id)
            .cloned()
            .ok_or_else(|| StoreError::TaskNotFound(task_id.to_string()))
    }
}
