//! Domain types and the validation core.
//!
//! Purpose: define the strongly typed entities, their request-body
//! validation, and the in-memory store that owns them. Everything in here is
//! transport agnostic; the inbound HTTP adapter maps [`Error`] values to
//! status codes and response bodies.
//!
//! Public surface:
//! - [`Error`] / [`ErrorCode`] — category-coded failure payload.
//! - [`User`] / [`NewUser`] / [`UserPatch`] — user entity and its drafts.
//! - [`Task`] / [`NewTask`] / [`TaskPatch`] / [`TaskTitle`] — task entity,
//!   its drafts, and the trimmed-non-empty title newtype.
//! - [`Store`] — lock-guarded collections with seed data.

pub mod error;
pub mod store;
pub mod task;
pub mod user;

pub use self::error::{Error, ErrorCode};
pub use self::store::Store;
pub use self::task::{NewTask, Task, TaskPatch, TaskTitle};
pub use self::user::{NewUser, User, UserPatch};

use serde_json::Value;

/// Convenient result alias for fallible domain and handler operations.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use backend::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::not_found("Task not found"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;

/// Fetch a body field, treating an explicit `null` the same as absence.
///
/// Non-object bodies simply have no fields, so required-field validation
/// reports the first missing field rather than a shape error.
pub(crate) fn json_field<'a>(body: &'a Value, name: &str) -> Option<&'a Value> {
    match body.get(name) {
        None | Some(Value::Null) => None,
        present => present,
    }
}
