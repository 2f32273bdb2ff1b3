use std::sync::Arc;

use poem::{Endpoint, EndpointExt, Response, Route, middleware::CatchPanic};
use poem_openapi::OpenApiService;

use crate::{
    config::Config,
    domain::repositories::UserRepository,
    presentation::http::{
        endpoints::{root::ApiState, users::UsersEndpoints},
        middleware::{ApiKeyGate, RequestLogger},
    },
};

/// Namespace of the interactive API explorer; exempt from the API key.
pub const DOCS_PREFIX: &str = "/swagger";
pub const OPENAPI_DOCUMENT_PATH: &str = "/swagger.json";

/// Assembles routes and middleware. Outermost first: logger, panic guard,
/// API-key gate, router.
pub fn build_app(
    config: &Config,
    repo: Arc<dyn UserRepository>,
) -> impl Endpoint<Output = Response> + use<> {
    let state = Arc::new(ApiState::new(repo));

    let api_service =
        OpenApiService::new(UsersEndpoints::new(state), "User Management API", "0.1.0")
            .server(format!("{}/api", config.server_url()));
    let ui = api_service.swagger_ui();
    let document = api_service.spec_endpoint();

    Route::new()
        .nest("/api", api_service)
        .nest(DOCS_PREFIX, ui)
        .at(OPENAPI_DOCUMENT_PATH, document)
        .with(ApiKeyGate::new(config.api_key.clone(), DOCS_PREFIX))
        .with(CatchPanic::new())
        .with(RequestLogger)
}
