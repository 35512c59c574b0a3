//! User data model and request-body validation.
//!
//! Bodies arrive as [`serde_json::Value`] and are checked field by field
//! before any record is constructed, so a mismatch rejects the request
//! without touching the store.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::{Error, json_field};

/// Message returned whenever a user id does not resolve.
pub(crate) const USER_NOT_FOUND: &str = "User not found";

/// Application user record.
///
/// ## Invariants
/// - `id` is unique within the store and immutable once assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier assigned by the store.
    pub id: i64,
    /// Display name; required on creation.
    pub name: String,
    /// Age in years; defaults to zero when not supplied.
    pub age: i64,
}

/// Validated draft for `POST /users`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    /// Required display name.
    pub name: String,
    /// Optional age, already defaulted.
    pub age: i64,
}

impl NewUser {
    /// Build a draft from a parsed JSON body.
    ///
    /// `name` must be present and a string; `age` is optional but must be an
    /// integer when supplied (absent and `null` both fall back to zero).
    ///
    /// # Errors
    /// Returns [`Error::invalid_request`] with the client-facing message for
    /// the first field that fails validation.
    pub fn from_value(body: &Value) -> Result<Self, Error> {
        let name = match json_field(body, "name") {
            None => return Err(Error::invalid_request("Missing required field: name")),
            Some(Value::String(name)) => name.clone(),
            Some(_) => return Err(Error::invalid_request("name must be a string")),
        };
        let age = parse_age_field(body)?.unwrap_or(0);
        Ok(Self { name, age })
    }
}

/// Validated partial update for `PUT /users/{id}`.
///
/// Fields absent from the body stay `None` and leave the stored record
/// unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    /// Replacement display name, when provided.
    pub name: Option<String>,
    /// Replacement age, when provided.
    pub age: Option<i64>,
}

impl UserPatch {
    /// Build a partial update from a parsed JSON body.
    ///
    /// # Errors
    /// Returns [`Error::invalid_request`] on the first type mismatch.
    pub fn from_value(body: &Value) -> Result<Self, Error> {
        let name = match json_field(body, "name") {
            None => None,
            Some(Value::String(name)) => Some(name.clone()),
            Some(_) => return Err(Error::invalid_request("name must be a string")),
        };
        let age = parse_age_field(body)?;
        Ok(Self { name, age })
    }
}

fn parse_age_field(body: &Value) -> Result<Option<i64>, Error> {
    match json_field(body, "age") {
        None => Ok(None),
        Some(Value::Number(age)) if age.is_i64() => Ok(age.as_i64()),
        Some(_) => Err(Error::invalid_request("age must be an integer")),
    }
}
