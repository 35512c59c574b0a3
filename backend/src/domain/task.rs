//! Task data model and request-body validation.
//!
//! This is the only part of the system with more than one rule: task bodies
//! are validated field by field in a fixed order, and `user_id` is checked
//! against the live user collection through the `user_exists` predicate so
//! the referential check happens at its exact position in the sequence.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::{Error, json_field};

/// Message returned whenever a task id does not resolve.
pub(crate) const TASK_NOT_FOUND: &str = "Task not found";

/// Task record referencing a user by id.
///
/// ## Invariants
/// - `id` is unique within the store and immutable once assigned.
/// - `title` is non-empty after trimming and stored trimmed.
/// - `user_id` referenced an existing user at creation or last update; the
///   reference is weak and never re-validated when users are deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier assigned by the store.
    pub id: i64,
    /// Trimmed, non-empty title.
    pub title: String,
    /// Free-form description; defaults to the empty string.
    pub description: String,
    /// Weak reference to the owning user.
    pub user_id: i64,
    /// Completion flag; defaults to `false`.
    pub completed: bool,
}

/// Title that is non-empty once trimmed of whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskTitle(String);

impl TaskTitle {
    /// Trim and validate a raw title. Returns `None` when nothing remains.
    #[must_use]
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_owned()))
        }
    }
}

impl AsRef<str> for TaskTitle {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<TaskTitle> for String {
    fn from(value: TaskTitle) -> Self {
        value.0
    }
}

/// Validated draft for `POST /tasks`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    /// Required, trimmed title.
    pub title: TaskTitle,
    /// Optional description, already defaulted.
    pub description: String,
    /// Referenced user id, confirmed to exist at validation time.
    pub user_id: i64,
    /// Optional completion flag, already defaulted.
    pub completed: bool,
}

impl NewTask {
    /// Build a draft from a parsed JSON body.
    ///
    /// Checks run strictly in this order and short-circuit on the first
    /// failure: title present and non-empty after trimming, `user_id`
    /// present, `user_id` an integer, `user_id` resolving through
    /// `user_exists`, then the optional `description` and `completed` types.
    ///
    /// # Errors
    /// Returns [`Error::invalid_request`] carrying the client-facing message
    /// for the first failed check.
    pub fn from_value(body: &Value, user_exists: impl Fn(i64) -> bool) -> Result<Self, Error> {
        let title = match json_field(body, "title") {
            None => return Err(missing_field("title")),
            Some(Value::String(raw)) => TaskTitle::new(raw).ok_or_else(|| missing_field("title"))?,
            Some(_) => return Err(Error::invalid_request("title must be a string")),
        };
        let user_id = parse_user_id_field(body, &user_exists, || missing_field("user_id"))?;
        let description = match json_field(body, "description") {
            None => String::new(),
            Some(Value::String(description)) => description.clone(),
            Some(_) => return Err(Error::invalid_request("description must be a string")),
        };
        let completed = parse_completed_field(body)?.unwrap_or(false);
        Ok(Self {
            title,
            description,
            user_id,
            completed,
        })
    }
}

/// Validated partial update for `PUT /tasks/{id}`.
///
/// Fields absent from the body stay `None` and leave the stored record
/// unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    /// Replacement title, when provided.
    pub title: Option<TaskTitle>,
    /// Replacement description, when provided.
    pub description: Option<String>,
    /// Replacement user reference, when provided; confirmed to exist.
    pub user_id: Option<i64>,
    /// Replacement completion flag, when provided.
    pub completed: Option<bool>,
}

impl TaskPatch {
    /// Build a partial update from a parsed JSON body.
    ///
    /// Field checks run in the order title, description, `user_id` (type
    /// first, then existence through `user_exists`), completed.
    ///
    /// # Errors
    /// Returns [`Error::invalid_request`] on the first failed check.
    pub fn from_value(body: &Value, user_exists: impl Fn(i64) -> bool) -> Result<Self, Error> {
        let title = match json_field(body, "title") {
            None => None,
            Some(Value::String(raw)) => Some(
                TaskTitle::new(raw)
                    .ok_or_else(|| Error::invalid_request("title cannot be empty"))?,
            ),
            Some(_) => return Err(Error::invalid_request("title must be a string")),
        };
        let description = match json_field(body, "description") {
            None => None,
            Some(Value::String(description)) => Some(description.clone()),
            Some(_) => return Err(Error::invalid_request("description must be a string")),
        };
        let user_id = match json_field(body, "user_id") {
            None => None,
            Some(_) => Some(parse_user_id_field(body, &user_exists, || {
                missing_field("user_id")
            })?),
        };
        let completed = parse_completed_field(body)?;
        Ok(Self {
            title,
            description,
            user_id,
            completed,
        })
    }
}

fn missing_field(field: &str) -> Error {
    Error::invalid_request(format!("Missing required field: {field}"))
}

fn parse_user_id_field(
    body: &Value,
    user_exists: &impl Fn(i64) -> bool,
    on_missing: impl FnOnce() -> Error,
) -> Result<i64, Error> {
    let user_id = match json_field(body, "user_id") {
        None => return Err(on_missing()),
        Some(Value::Number(user_id)) if user_id.is_i64() => match user_id.as_i64() {
            Some(user_id) => user_id,
            None => return Err(Error::invalid_request("user_id must be an integer")),
        },
        Some(_) => return Err(Error::invalid_request("user_id must be an integer")),
    };
    if !user_exists(user_id) {
        return Err(Error::invalid_request(
            "Invalid user_id (user doesn't exist)",
        ));
    }
    Ok(user_id)
}

fn parse_completed_field(body: &Value) -> Result<Option<bool>, Error> {
    match json_field(body, "completed") {
        None => Ok(None),
        Some(Value::Bool(completed)) => Ok(Some(*completed)),
        Some(_) => Err(Error::invalid_request("completed must be a boolean")),
    }
}
