//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. The
//! wrappers here mirror the wire shapes of their corresponding domain types
//! and live in the inbound adapter layer where framework concerns belong.

use utoipa::ToSchema;

/// OpenAPI schema for the `{"error": ...}` envelope produced by
/// [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Human-readable message describing the failure.
    #[schema(example = "Task not found")]
    error: String,
}

/// OpenAPI schema for [`crate::domain::User`].
#[derive(ToSchema)]
#[schema(as = crate::domain::User)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserSchema {
    /// Unique identifier assigned by the store.
    #[schema(example = 1)]
    id: i64,
    /// Display name.
    #[schema(example = "Alice")]
    name: String,
    /// Age in years; zero when never supplied.
    #[schema(example = 25)]
    age: i64,
}

/// OpenAPI schema for [`crate::domain::Task`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Task)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct TaskSchema {
    /// Unique identifier assigned by the store.
    #[schema(example = 1)]
    id: i64,
    /// Trimmed, non-empty title.
    #[schema(example = "Learn REST")]
    title: String,
    /// Free-form description; empty when never supplied.
    #[schema(example = "Study REST principles")]
    description: String,
    /// Weak reference to the owning user.
    #[schema(example = 1)]
    user_id: i64,
    /// Completion flag.
    #[schema(example = false)]
    completed: bool,
}

/// Request body for `POST /users`.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct CreateUserRequest {
    /// Required display name.
    #[schema(example = "Carol")]
    name: String,
    /// Optional age; defaults to zero.
    #[schema(example = 41)]
    age: Option<i64>,
}

/// Request body for `PUT /users/{id}`; absent fields stay unchanged.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UpdateUserRequest {
    /// Replacement display name.
    name: Option<String>,
    /// Replacement age.
    age: Option<i64>,
}

/// Request body for `POST /tasks`.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct CreateTaskRequest {
    /// Required title; trimmed and must stay non-empty.
    #[schema(example = "Ship the release")]
    title: String,
    /// Optional description; defaults to the empty string.
    description: Option<String>,
    /// Required reference to an existing user.
    #[schema(example = 1)]
    user_id: i64,
    /// Optional completion flag; defaults to false.
    completed: Option<bool>,
}

/// Request body for `PUT /tasks/{id}`; absent fields stay unchanged.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UpdateTaskRequest {
    /// Replacement title; trimmed and must stay non-empty.
    title: Option<String>,
    /// Replacement description.
    description: Option<String>,
    /// Replacement user reference; must exist at update time.
    user_id: Option<i64>,
    /// Replacement completion flag.
    completed: Option<bool>,
}
