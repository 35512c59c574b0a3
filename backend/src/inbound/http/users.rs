//! Users API handlers.
//!
//! ```text
//! GET    /users            list users
//! GET    /users/{id}       fetch one user
//! POST   /users            create a user
//! PUT    /users/{id}       partially update a user
//! DELETE /users/{id}       remove a user (idempotent)
//! GET    /users/{id}/tasks tasks belonging to a user
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};

use crate::domain::{NewUser, Store, Task, User, UserPatch};
use crate::inbound::http::ApiResult;
use crate::inbound::http::validation::parse_body;

/// List all users in insertion order.
#[utoipa::path(
    get,
    path = "/users",
    responses((status = 200, description = "Users", body = [crate::inbound::http::schemas::UserSchema])),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(store: web::Data<Store>) -> web::Json<Vec<User>> {
    web::Json(store.list_users())
}

/// Fetch a single user by id.
#[utoipa::path(
    get,
    path = "/users/{id}",
    params(("id" = i64, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User", body = crate::inbound::http::schemas::UserSchema),
        (status = 404, description = "Unknown user", body = crate::inbound::http::schemas::ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{id}")]
pub async fn get_user(store: web::Data<Store>, path: web::Path<i64>) -> ApiResult<web::Json<User>> {
    Ok(web::Json(store.get_user(path.into_inner())?))
}

/// Create a user.
#[utoipa::path(
    post,
    path = "/users",
    request_body = crate::inbound::http::schemas::CreateUserRequest,
    responses(
        (status = 201, description = "Created user", body = crate::inbound::http::schemas::UserSchema),
        (status = 400, description = "Invalid body", body = crate::inbound::http::schemas::ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(store: web::Data<Store>, body: web::Bytes) -> ApiResult<HttpResponse> {
    let value = parse_body(&body)?;
    let draft = NewUser::from_value(&value)?;
    let user = store.create_user(draft);
    Ok(HttpResponse::Created().json(user))
}

/// Partially update a user.
///
/// The existence check runs before the body is parsed, so an unknown id is
/// reported as 404 even when the body is malformed.
#[utoipa::path(
    put,
    path = "/users/{id}",
    params(("id" = i64, Path, description = "User identifier")),
    request_body = crate::inbound::http::schemas::UpdateUserRequest,
    responses(
        (status = 200, description = "Updated user", body = crate::inbound::http::schemas::UserSchema),
        (status = 400, description = "Invalid body", body = crate::inbound::http::schemas::ErrorSchema),
        (status = 404, description = "Unknown user", body = crate::inbound::http::schemas::ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[put("/users/{id}")]
pub async fn update_user(
    store: web::Data<Store>,
    path: web::Path<i64>,
    body: web::Bytes,
) -> ApiResult<web::Json<User>> {
    let id = path.into_inner();
    store.get_user(id)?;
    let value = parse_body(&body)?;
    let patch = UserPatch::from_value(&value)?;
    Ok(web::Json(store.update_user(id, patch)?))
}

/// Remove a user.
///
/// Idempotent by design: deleting an absent user still answers 204. Tasks
/// referencing the user are left in place.
#[utoipa::path(
    delete,
    path = "/users/{id}",
    params(("id" = i64, Path, description = "User identifier")),
    responses((status = 204, description = "User removed (or was already absent)")),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/users/{id}")]
pub async fn delete_user(store: web::Data<Store>, path: web::Path<i64>) -> HttpResponse {
    store.delete_user(path.into_inner());
    HttpResponse::NoContent().finish()
}

/// List the tasks belonging to a user.
#[utoipa::path(
    get,
    path = "/users/{id}/tasks",
    params(("id" = i64, Path, description = "User identifier")),
    responses(
        (status = 200, description = "Tasks for the user", body = [crate::inbound::http::schemas::TaskSchema]),
        (status = 404, description = "Unknown user", body = crate::inbound::http::schemas::ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "listUserTasks"
)]
#[get("/users/{id}/tasks")]
pub async fn user_tasks(
    store: web::Data<Store>,
    path: web::Path<i64>,
) -> ApiResult<web::Json<Vec<Task>>> {
    Ok(web::Json(store.tasks_for_user(path.into_inner())?))
}
