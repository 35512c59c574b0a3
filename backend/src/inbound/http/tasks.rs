//! Tasks API handlers.
//!
//! ```text
//! GET    /tasks       list tasks
//! GET    /tasks/{id}  fetch one task
//! POST   /tasks       create a task (validates the user reference)
//! PUT    /tasks/{id}  partially update a task
//! DELETE /tasks/{id}  remove a task (existence checked)
//! ```
//!
//! Creation and update bodies are validated in a fixed order; see
//! [`crate::domain::NewTask::from_value`] and
//! [`crate::domain::TaskPatch::from_value`].

use actix_web::{HttpResponse, delete, get, post, put, web};

use crate::domain::{Store, Task};
use crate::inbound::http::ApiResult;
use crate::inbound::http::validation::parse_body;

/// List all tasks in insertion order.
#[utoipa::path(
    get,
    path = "/tasks",
    responses((status = 200, description = "Tasks", body = [crate::inbound::http::schemas::TaskSchema])),
    tags = ["tasks"],
    operation_id = "listTasks"
)]
#[get("/tasks")]
pub async fn list_tasks(store: web::Data<Store>) -> web::Json<Vec<Task>> {
    web::Json(store.list_tasks())
}

/// Fetch a single task by id.
#[utoipa::path(
    get,
    path = "/tasks/{id}",
    params(("id" = i64, Path, description = "Task identifier")),
    responses(
        (status = 200, description = "Task", body = crate::inbound::http::schemas::TaskSchema),
        (status = 404, description = "Unknown task", body = crate::inbound::http::schemas::ErrorSchema)
    ),
    tags = ["tasks"],
    operation_id = "getTask"
)]
#[get("/tasks/{id}")]
pub async fn get_task(store: web::Data<Store>, path: web::Path<i64>) -> ApiResult<web::Json<Task>> {
    Ok(web::Json(store.get_task(path.into_inner())?))
}

/// Create a task.
///
/// The store runs the ordered body validation and the append under one lock,
/// so the referenced user still exists when the task is inserted.
#[utoipa::path(
    post,
    path = "/tasks",
    request_body = crate::inbound::http::schemas::CreateTaskRequest,
    responses(
        (status = 201, description = "Created task", body = crate::inbound::http::schemas::TaskSchema),
        (status = 400, description = "Invalid body or unknown user reference", body = crate::inbound::http::schemas::ErrorSchema)
    ),
    tags = ["tasks"],
    operation_id = "createTask"
)]
#[post("/tasks")]
pub async fn create_task(store: web::Data<Store>, body: web::Bytes) -> ApiResult<HttpResponse> {
    let value = parse_body(&body)?;
    let task = store.create_task(&value)?;
    Ok(HttpResponse::Created().json(task))
}

/// Partially update a task.
///
/// The existence check runs before the body is parsed, so an unknown id is
/// reported as 404 even when the body is malformed.
#[utoipa::path(
    put,
    path = "/tasks/{id}",
    params(("id" = i64, Path, description = "Task identifier")),
    request_body = crate::inbound::http::schemas::UpdateTaskRequest,
    responses(
        (status = 200, description = "Updated task", body = crate::inbound::http::schemas::TaskSchema),
        (status = 400, description = "Invalid body or unknown user reference", body = crate::inbound::http::schemas::ErrorSchema),
        (status = 404, description = "Unknown task", body = crate::inbound::http::schemas::ErrorSchema)
    ),
    tags = ["tasks"],
    operation_id = "updateTask"
)]
#[put("/tasks/{id}")]
pub async fn update_task(
    store: web::Data<Store>,
    path: web::Path<i64>,
    body: web::Bytes,
) -> ApiResult<web::Json<Task>> {
    let id = path.into_inner();
    store.get_task(id)?;
    let value = parse_body(&body)?;
    Ok(web::Json(store.update_task(id, &value)?))
}

/// Remove a task.
#[utoipa::path(
    delete,
    path = "/tasks/{id}",
    params(("id" = i64, Path, description = "Task identifier")),
    responses(
        (status = 204, description = "Task removed"),
        (status = 404, description = "Unknown task", body = crate::inbound::http::schemas::ErrorSchema)
    ),
    tags = ["tasks"],
    operation_id = "deleteTask"
)]
#[delete("/tasks/{id}")]
pub async fn delete_task(store: web::Data<Store>, path: web::Path<i64>) -> ApiResult<HttpResponse> {
    store.delete_task(path.into_inner())?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test};
    use rstest::rstest;
    use serde_json::{Value, json};

    fn test_app() -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(Store::seeded()))
            .service(list_tasks)
            .service(get_task)
            .service(create_task)
            .service(update_task)
            .service(delete_task)
    }

    async fn error_message(res: actix_web::dev::ServiceResponse) -> String {
        let body: Value = actix_test::read_body_json(res).await;
        body.get("error")
            .and_then(Value::as_str)
            .expect("error field")
            .to_owned()
    }

    #[actix_web::test]
    async fn list_tasks_returns_the_seeded_records_in_order() {
        let app = actix_test::init_service(test_app()).await;
        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri("/tasks").to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(res).await;
        let tasks = body.as_array().expect("array body");
        assert_eq!(tasks.len(), 2);
        assert_eq!(
            tasks[0].get("title").and_then(Value::as_str),
            Some("Learn REST")
        );
        assert_eq!(
            tasks[1].get("title").and_then(Value::as_str),
            Some("Build API")
        );
    }

    #[actix_web::test]
    async fn get_task_answers_404_with_the_error_envelope() {
        let app = actix_test::init_service(test_app()).await;
        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri("/tasks/999").to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        assert_eq!(error_message(res).await, "Task not found");
    }

    #[actix_web::test]
    async fn create_task_trims_the_title_and_applies_defaults() {
        let app = actix_test::init_service(test_app()).await;
        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/tasks")
                .set_json(json!({"title": "  Write docs  ", "user_id": 1}))
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::CREATED);
        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(body.get("id").and_then(Value::as_i64), Some(3));
        assert_eq!(
            body.get("title").and_then(Value::as_str),
            Some("Write docs")
        );
        assert_eq!(body.get("description").and_then(Value::as_str), Some(""));
        assert_eq!(body.get("completed").and_then(Value::as_bool), Some(false));
    }

    #[actix_web::test]
    async fn create_task_rejects_a_malformed_body() {
        let app = actix_test::init_service(test_app()).await;
        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/tasks")
                .insert_header(("content-type", "application/json"))
                .set_payload("{not json")
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        assert_eq!(error_message(res).await, "Invalid JSON in request body");
    }

    // One case per rung of the validation ladder, in the order the checks run.
    #[rstest]
    #[case(json!({"user_id": 1}), "Missing required field: title")]
    #[case(json!({"title": "   ", "user_id": 1}), "Missing required field: title")]
    #[case(json!({"title": "Ship it"}), "Missing required field: user_id")]
    #[case(json!({"title": "Ship it", "user_id": "1"}), "user_id must be an integer")]
    #[case(
        json!({"title": "Ship it", "user_id": 999}),
        "Invalid user_id (user doesn't exist)"
    )]
    #[actix_web::test]
    async fn create_task_rejects_invalid_bodies(#[case] body: Value, #[case] message: &str) {
        let app = actix_test::init_service(test_app()).await;
        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/tasks")
                .set_json(body)
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        assert_eq!(error_message(res).await, message);
    }

    #[actix_web::test]
    async fn failed_creation_does_not_grow_the_collection() {
        let app = actix_test::init_service(test_app()).await;
        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/tasks")
                .set_json(json!({"title": "Orphan", "user_id": 999}))
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);

        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri("/tasks").to_request(),
        )
        .await;
        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(body.as_array().expect("array body").len(), 2);
    }

    #[actix_web::test]
    async fn update_task_changes_only_the_provided_fields() {
        let app = actix_test::init_service(test_app()).await;
        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::put()
                .uri("/tasks/2")
                .set_json(json!({"completed": true}))
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(body.get("completed").and_then(Value::as_bool), Some(true));
        assert_eq!(body.get("title").and_then(Value::as_str), Some("Build API"));
        assert_eq!(
            body.get("description").and_then(Value::as_str),
            Some("Complete the assignment")
        );
        assert_eq!(body.get("user_id").and_then(Value::as_i64), Some(2));
    }

    #[actix_web::test]
    async fn update_task_reports_unknown_ids_before_reading_the_body() {
        let app = actix_test::init_service(test_app()).await;
        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::put()
                .uri("/tasks/999")
                .insert_header(("content-type", "application/json"))
                .set_payload("{not json")
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        assert_eq!(error_message(res).await, "Task not found");
    }

    #[rstest]
    #[case(json!({"title": "   "}), "title cannot be empty")]
    #[case(json!({"user_id": "2"}), "user_id must be an integer")]
    #[case(json!({"user_id": 999}), "Invalid user_id (user doesn't exist)")]
    #[case(json!({"completed": "yes"}), "completed must be a boolean")]
    #[actix_web::test]
    async fn update_task_rejects_invalid_fields(#[case] body: Value, #[case] message: &str) {
        let app = actix_test::init_service(test_app()).await;
        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::put()
                .uri("/tasks/1")
                .set_json(body)
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        assert_eq!(error_message(res).await, message);
    }

    #[actix_web::test]
    async fn update_task_can_move_a_task_to_another_user() {
        let app = actix_test::init_service(test_app()).await;
        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::put()
                .uri("/tasks/1")
                .set_json(json!({"user_id": 2}))
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(body.get("user_id").and_then(Value::as_i64), Some(2));
    }

    #[actix_web::test]
    async fn delete_task_then_get_answers_404() {
        let app = actix_test::init_service(test_app()).await;
        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::delete().uri("/tasks/1").to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::NO_CONTENT);

        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri("/tasks/1").to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        assert_eq!(error_message(res).await, "Task not found");
    }

    #[actix_web::test]
    async fn delete_task_answers_404_for_unknown_ids() {
        let app = actix_test::init_service(test_app()).await;
        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::delete().uri("/tasks/999").to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        assert_eq!(error_message(res).await, "Task not found");
    }

    #[actix_web::test]
    async fn created_ids_keep_growing() {
        let app = actix_test::init_service(test_app()).await;
        let mut last = 2;
        for _ in 0..3 {
            let res = actix_test::call_service(
                &app,
                actix_test::TestRequest::post()
                    .uri("/tasks")
                    .set_json(json!({"title": "More work", "user_id": 1}))
                    .to_request(),
            )
            .await;
            assert_eq!(res.status(), StatusCode::CREATED);
            let body: Value = actix_test::read_body_json(res).await;
            let id = body.get("id").and_then(Value::as_i64).expect("task id");
            assert!(id > last);
            last = id;
        }
    }
}
