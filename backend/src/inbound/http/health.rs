//! Banner and health endpoints.

use actix_web::{HttpResponse, get};
use serde_json::json;

/// Plain-text banner pointing clients at the collections.
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Service banner", content_type = "text/plain")),
    tags = ["health"],
    operation_id = "index"
)]
#[get("/")]
pub async fn index() -> &'static str {
    "Welcome to the Taskboard API. Try /users to list users."
}

/// Health probe for load balancers and smoke tests.
///
/// The store is in-memory, so a process that can answer at all is healthy.
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is healthy")),
    tags = ["health"],
    operation_id = "health"
)]
#[get("/health")]
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "status": "healthy" }))
}
