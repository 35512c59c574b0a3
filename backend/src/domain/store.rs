//! In-memory store for the user and task collections.
//!
//! The store is owned by the application and injected into handlers rather
//! than living in a global. One `RwLock` guards both collections; every
//! mutating operation runs its validation and the write under a single lock
//! acquisition, so a task can never be appended against a user that was
//! deleted between check and insert.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde_json::Value;

use crate::domain::task::{NewTask, TASK_NOT_FOUND, Task, TaskPatch};
use crate::domain::user::{NewUser, USER_NOT_FOUND, User, UserPatch};
use crate::domain::Error;

#[derive(Debug, Default)]
struct Collections {
    users: Vec<User>,
    tasks: Vec<Task>,
}

impl Collections {
    fn user_exists(&self, id: i64) -> bool {
        self.users.iter().any(|user| user.id == id)
    }

    fn next_user_id(&self) -> i64 {
        self.users.iter().map(|user| user.id).max().unwrap_or(0) + 1
    }

    fn next_task_id(&self) -> i64 {
        self.tasks.iter().map(|task| task.id).max().unwrap_or(0) + 1
    }
}

/// Process-lifetime holder of the user and task collections.
///
/// Cheap, bounded, in-memory operations only; nothing here suspends, so the
/// synchronous lock is safe to take from async handlers.
#[derive(Debug, Default)]
pub struct Store {
    inner: RwLock<Collections>,
}

impl Store {
    /// Create a store with no users or tasks.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a store with the stock demo users and tasks.
    #[must_use]
    pub fn seeded() -> Self {
        let collections = Collections {
            users: vec![
                User {
                    id: 1,
                    name: "Alice".to_owned(),
                    age: 25,
                },
                User {
                    id: 2,
                    name: "Bob".to_owned(),
                    age: 30,
                },
            ],
            tasks: vec![
                Task {
                    id: 1,
                    title: "Learn REST".to_owned(),
                    description: "Study REST principles".to_owned(),
                    user_id: 1,
                    completed: true,
                },
                Task {
                    id: 2,
                    title: "Build API".to_owned(),
                    description: "Complete the assignment".to_owned(),
                    user_id: 2,
                    completed: false,
                },
            ],
        };
        Self {
            inner: RwLock::new(collections),
        }
    }

    // A poisoned lock only means another handler panicked mid-request; the
    // collections themselves have no intermediate invalid states, so the
    // guard is recovered rather than propagating the panic to every caller.
    fn read(&self) -> RwLockReadGuard<'_, Collections> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Collections> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// All users in insertion order.
    #[must_use]
    pub fn list_users(&self) -> Vec<User> {
        self.read().users.clone()
    }

    /// Look up a user by id.
    ///
    /// # Errors
    /// [`Error::not_found`] when no user has the given id.
    pub fn get_user(&self, id: i64) -> Result<User, Error> {
        self.read()
            .users
            .iter()
            .find(|user| user.id == id)
            .cloned()
            .ok_or_else(|| Error::not_found(USER_NOT_FOUND))
    }

    /// Append a new user, assigning the next id.
    ///
    /// Returns the stored record including the assigned id.
    #[must_use]
    pub fn create_user(&self, draft: NewUser) -> User {
        let mut collections = self.write();
        let user = User {
            id: collections.next_user_id(),
            name: draft.name,
            age: draft.age,
        };
        collections.users.push(user.clone());
        user
    }

    /// Apply a partial update to a user.
    ///
    /// # Errors
    /// [`Error::not_found`] when no user has the given id.
    pub fn update_user(&self, id: i64, patch: UserPatch) -> Result<User, Error> {
        let mut collections = self.write();
        let user = collections
            .users
            .iter_mut()
            .find(|user| user.id == id)
            .ok_or_else(|| Error::not_found(USER_NOT_FOUND))?;
        if let Some(name) = patch.name {
            user.name = name;
        }
        if let Some(age) = patch.age {
            user.age = age;
        }
        Ok(user.clone())
    }

    /// Remove a user if present.
    ///
    /// Deliberately a filter, not an existence-checked removal: deleting an
    /// absent user is a no-op, which keeps the operation idempotent. Tasks
    /// referencing the user are left in place (weak references).
    pub fn delete_user(&self, id: i64) {
        self.write().users.retain(|user| user.id != id);
    }

    /// Whether a user with the given id exists right now.
    #[must_use]
    pub fn user_exists(&self, id: i64) -> bool {
        self.read().user_exists(id)
    }

    /// All tasks in insertion order.
    #[must_use]
    pub fn list_tasks(&self) -> Vec<Task> {
        self.read().tasks.clone()
    }

    /// Look up a task by id.
    ///
    /// # Errors
    /// [`Error::not_found`] when no task has the given id.
    pub fn get_task(&self, id: i64) -> Result<Task, Error> {
        self.read()
            .tasks
            .iter()
            .find(|task| task.id == id)
            .cloned()
            .ok_or_else(|| Error::not_found(TASK_NOT_FOUND))
    }

    /// Validate a creation body and append the new task atomically.
    ///
    /// The body checks (including the `user_id` referential check) and the
    /// append share one write-lock acquisition, so the referenced user still
    /// exists at the moment the task lands in the collection.
    ///
    /// # Errors
    /// [`Error::invalid_request`] from the ordered field validation in
    /// [`NewTask::from_value`].
    pub fn create_task(&self, body: &Value) -> Result<Task, Error> {
        let mut collections = self.write();
        let draft = NewTask::from_value(body, |user_id| collections.user_exists(user_id))?;
        let task = Task {
            id: collections.next_task_id(),
            title: draft.title.into(),
            description: draft.description,
            user_id: draft.user_id,
            completed: draft.completed,
        };
        collections.tasks.push(task.clone());
        Ok(task)
    }

    /// Validate an update body and apply it to a task atomically.
    ///
    /// # Errors
    /// [`Error::not_found`] when no task has the given id, otherwise
    /// [`Error::invalid_request`] from the ordered field validation in
    /// [`TaskPatch::from_value`].
    pub fn update_task(&self, id: i64, body: &Value) -> Result<Task, Error> {
        let mut collections = self.write();
        let position = collections
            .tasks
            .iter()
            .position(|task| task.id == id)
            .ok_or_else(|| Error::not_found(TASK_NOT_FOUND))?;
        let patch = TaskPatch::from_value(body, |user_id| collections.user_exists(user_id))?;
        let task = collections
            .tasks
            .get_mut(position)
            .ok_or_else(|| Error::not_found(TASK_NOT_FOUND))?;
        if let Some(title) = patch.title {
            task.title = title.into();
        }
        if let Some(description) = patch.description {
            task.description = description;
        }
        if let Some(user_id) = patch.user_id {
            task.user_id = user_id;
        }
        if let Some(completed) = patch.completed {
            task.completed = completed;
        }
        Ok(task.clone())
    }

    /// Remove a task.
    ///
    /// Unlike user deletion this is existence checked.
    ///
    /// # Errors
    /// [`Error::not_found`] when no task has the given id.
    pub fn delete_task(&self, id: i64) -> Result<(), Error> {
        let mut collections = self.write();
        let position = collections
            .tasks
            .iter()
            .position(|task| task.id == id)
            .ok_or_else(|| Error::not_found(TASK_NOT_FOUND))?;
        collections.tasks.remove(position);
        Ok(())
    }

    /// Tasks belonging to the given user, in insertion order.
    ///
    /// An existing user with no tasks yields an empty list, not an error.
    ///
    /// # Errors
    /// [`Error::not_found`] when the user does not exist.
    pub fn tasks_for_user(&self, user_id: i64) -> Result<Vec<Task>, Error> {
        let collections = self.read();
        if !collections.user_exists(user_id) {
            return Err(Error::not_found(USER_NOT_FOUND));
        }
        Ok(collections
            .tasks
            .iter()
            .filter(|task| task.user_id == user_id)
            .cloned()
            .collect())
    }
}
