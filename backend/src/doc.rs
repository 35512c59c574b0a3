//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! specification for the REST API. It registers:
//!
//! - **Paths**: All HTTP endpoints from the inbound layer (users, tasks,
//!   health)
//! - **Schemas**: Domain type wrappers ([`ErrorSchema`], [`UserSchema`],
//!   [`TaskSchema`]) and the request bodies, providing OpenAPI definitions
//!   without coupling domain types to the utoipa framework
//!
//! The generated specification backs Swagger UI in debug builds.

use crate::inbound::http::schemas::{
    CreateTaskRequest, CreateUserRequest, ErrorSchema, TaskSchema, UpdateTaskRequest,
    UpdateUserRequest, UserSchema,
};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Taskboard backend API",
        description = "HTTP interface for the in-memory users and tasks collections."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::health::index,
        crate::inbound::http::health::health,
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::users::user_tasks,
        crate::inbound::http::tasks::list_tasks,
        crate::inbound::http::tasks::get_task,
        crate::inbound::http::tasks::create_task,
        crate::inbound::http::tasks::update_task,
        crate::inbound::http::tasks::delete_task,
    ),
    components(schemas(
        ErrorSchema,
        UserSchema,
        TaskSchema,
        CreateUserRequest,
        UpdateUserRequest,
        CreateTaskRequest,
        UpdateTaskRequest,
    )),
    tags(
        (name = "users", description = "Operations on the users collection"),
        (name = "tasks", description = "Operations on the tasks collection"),
        (name = "health", description = "Banner and health probe")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::OpenApi;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    // Note: utoipa replaces :: with . in schema names
    const ERROR_SCHEMA_NAME: &str = "crate.domain.Error";
    const TASK_SCHEMA_NAME: &str = "crate.domain.Task";

    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[test]
    fn openapi_error_schema_has_the_envelope_field() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let error_schema = schemas.get(ERROR_SCHEMA_NAME).expect("Error schema");

        assert_object_schema_has_field(error_schema, "error");
    }

    #[test]
    fn openapi_task_schema_has_required_fields() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let task_schema = schemas.get(TASK_SCHEMA_NAME).expect("Task schema");

        for field in ["id", "title", "description", "user_id", "completed"] {
            assert_object_schema_has_field(task_schema, field);
        }
    }

    #[test]
    fn openapi_document_lists_every_endpoint() {
        let doc = ApiDoc::openapi();
        for path in ["/", "/health", "/users", "/users/{id}", "/users/{id}/tasks", "/tasks", "/tasks/{id}"] {
            assert!(
                doc.paths.paths.contains_key(path),
                "document should describe {path}"
            );
        }
    }
}
