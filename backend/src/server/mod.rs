//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::domain::{Error, Store};
use crate::inbound::http::health::{health, index};
use crate::inbound::http::tasks::{create_task, delete_task, get_task, list_tasks, update_task};
use crate::inbound::http::users::{
    create_user, delete_user, get_user, list_users, update_user, user_tasks,
};
use crate::middleware::Trace;

/// Path extractor configuration rejecting unparseable `{id}` segments.
///
/// The routes only match integer-shaped ids in spirit; a segment the typed
/// extractor cannot parse is treated as a missing resource rather than a bad
/// request, so `/tasks/abc` answers 404 like any other unknown path.
fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|_, _| Error::not_found("Not found").into())
}

/// Assemble the application with every route and middleware attached.
///
/// Exposed so integration tests can run the full stack in-process against
/// their own [`Store`].
#[must_use]
pub fn build_app(
    store: web::Data<Store>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(store)
        .app_data(path_config())
        .wrap(Trace)
        .service(index)
        .service(health)
        .service(list_users)
        .service(get_user)
        .service(create_user)
        .service(update_user)
        .service(delete_user)
        .service(user_tasks)
        .service(list_tasks)
        .service(get_task)
        .service(create_task)
        .service(update_task)
        .service(delete_task);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    #[cfg(not(debug_assertions))]
    let app = app;

    app
}

/// Construct an Actix HTTP server over the shared store.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(config: &ServerConfig, store: web::Data<Store>) -> std::io::Result<Server> {
    let server = HttpServer::new(move || build_app(store.clone()))
        .bind(config.bind_addr)?
        .run();
    Ok(server)
}
