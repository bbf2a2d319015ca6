//! Server construction and middleware wiring.

mod config;
mod state_builders;

pub use config::ServerConfig;

use state_builders::build_http_state;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use scoreboard::Trace;
use scoreboard::doc::ApiDoc;
use scoreboard::inbound::http::health::{HealthState, live, ready};
use scoreboard::inbound::http::landing::index;
use scoreboard::inbound::http::scores::{json_config, list_scores, submit_score};
use scoreboard::inbound::http::state::HttpState;

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
    docs_enabled: bool,
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
        docs_enabled,
    } = deps;

    let mut app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .app_data(json_config())
        .wrap(Trace)
        .service(index)
        .service(list_scores)
        .service(submit_score)
        .service(ready)
        .service(live);

    if docs_enabled {
        app = app.service(
            SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
        );
    }

    app
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// # Parameters
/// - `health_state`: shared readiness state updated once the listener is bound.
/// - `config`: pre-built [`ServerConfig`] with the bind address, database
///   pool and docs flag.
///
/// # Returns
/// A spawned [`Server`] that must be awaited to drive the listener.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let ServerConfig {
        bind_addr,
        db_pool,
        docs_enabled,
    } = config;
    let http_state = build_http_state(&db_pool);

    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
            docs_enabled,
        })
    })
    .bind(bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use rstest::rstest;
    use scoreboard::outbound::persistence::{DbPool, PoolConfig, run_migrations};
    use serde_json::{Value, json};
    use tempfile::TempDir;

    /// App dependencies over a migrated store; keep the directory alive for
    /// the test's duration.
    async fn deps(docs_enabled: bool) -> (AppDependencies, TempDir) {
        let dir = tempfile::tempdir().expect("temp dir");
        let url = dir.path().join("scores.db").to_string_lossy().into_owned();
        run_migrations(&url).await.expect("migrations apply");
        let pool = DbPool::new(PoolConfig::new(url)).await.expect("pool builds");
        let deps = AppDependencies {
            health_state: web::Data::new(HealthState::new()),
            http_state: build_http_state(&pool),
            docs_enabled,
        };
        (deps, dir)
    }

    #[rstest]
    #[actix_web::test]
    async fn app_wires_every_route_with_trace_headers() {
        let (app_deps, _dir) = deps(false).await;
        let app = actix_test::init_service(build_app(app_deps)).await;

        for uri in ["/", "/api/scores", "/health/live"] {
            let response =
                actix_test::call_service(&app, actix_test::TestRequest::get().uri(uri).to_request())
                    .await;
            assert_eq!(response.status(), StatusCode::OK, "GET {uri}");
            assert!(response.headers().contains_key("trace-id"), "GET {uri}");
        }
    }

    #[rstest]
    #[actix_web::test]
    async fn app_applies_the_submission_json_config() {
        let (app_deps, _dir) = deps(false).await;
        let app = actix_test::init_service(build_app(app_deps)).await;

        let request = actix_test::TestRequest::post()
            .uri("/api/scores")
            .set_payload("not json")
            .to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(response.headers().contains_key("trace-id"));
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body, json!({"error": "Datos faltantes"}));
    }

    #[rstest]
    #[case(false, StatusCode::NOT_FOUND)]
    #[case(true, StatusCode::OK)]
    #[actix_web::test]
    async fn docs_are_served_only_when_enabled(
        #[case] docs_enabled: bool,
        #[case] expected: StatusCode,
    ) {
        let (app_deps, _dir) = deps(docs_enabled).await;
        let app = actix_test::init_service(build_app(app_deps)).await;
        let request = actix_test::TestRequest::get()
            .uri("/api-docs/openapi.json")
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), expected);
    }
}
