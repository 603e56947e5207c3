//! Server construction and middleware wiring.

mod config;

pub use config::{ServerConfig, server_config_from_env};

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

use backend::Trace;
#[cfg(debug_assertions)]
use backend::doc::ApiDoc;
use backend::domain::RecordService;
use backend::inbound::http::health::{HealthState, health};
use backend::inbound::http::records::{
    create_interview_record, create_record_detail, delete_interview_record, delete_record_detail,
    get_interview_record, get_sidebar_data, update_interview_record, update_record_detail,
};
use backend::inbound::http::state::HttpState;
use backend::outbound::persistence::InMemoryRecordBookRepository;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use std::sync::Arc;

/// Build the shared HTTP state over the in-memory record book store.
///
/// Record books are process-local; a restart starts from an empty store.
fn build_http_state() -> web::Data<HttpState> {
    let repository = Arc::new(InMemoryRecordBookRepository::new());
    let service = Arc::new(RecordService::new(
        repository,
        Arc::new(mockable::DefaultClock),
    ));
    web::Data::new(HttpState::new(service.clone(), service))
}

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
    } = deps;

    let api = web::scope("/api/v1")
        .service(create_interview_record)
        .service(get_interview_record)
        .service(update_interview_record)
        .service(delete_interview_record)
        .service(create_record_detail)
        .service(update_record_detail)
        .service(delete_record_detail)
        .service(get_sidebar_data)
        .service(health);

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .service(api);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    #[cfg(not(debug_assertions))]
    let app = app;

    app
}

/// Bind the HTTP server and mark the service ready.
///
/// # Parameters
/// - `health_state`: readiness flag flipped once the listener is bound.
/// - `config`: listener settings, usually from [`server_config_from_env`].
///
/// # Returns
/// A [`Server`] future; await it to serve requests.
///
/// # Errors
/// Returns [`std::io::Error`] if the socket cannot be bound.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let http_state = build_http_state();
    let ServerConfig { bind_addr, workers } = config;

    let mut server = HttpServer::new(move || {
        build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
        })
    });
    if let Some(workers) = workers {
        server = server.workers(workers);
    }
    let server = server.bind(bind_addr)?.run();

    health_state.mark_ready();
    Ok(server)
}
