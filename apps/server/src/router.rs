use agk::domain::constants::{API_DOCS_PATH, API_SPEC_PATH};
use agk::kernel::server::ApiState;
use anyhow::{Context, Result};
use axum::Router;
use axum::http::header;
use axum::routing::get;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_scalar::{Scalar, Servable};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Agramkow API",
        description = "API documentation for Agramkow transaction tracking and analysis",
        version = "1.0"
    ),
    tags(
        (name = "transactions", description = "Transaction tracking endpoints"),
        (name = "summation", description = "Transaction summation and analysis endpoints")
    )
)]
struct ApiDoc;

#[allow(unreachable_pub)]
pub fn init(state: ApiState) -> Result<Router> {
    // Separate the OpenAPI routes and the API documentation object
    let (openapi_routes, api_doc) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(agk::server::router::system_router())
        .merge(agk::features::transactions::routes::router())
        .merge(agk::features::summation::routes::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
        .split_for_parts();

    // The artifact is serialized exactly once; every request sees the same bytes.
    let spec = Arc::<str>::from(
        serde_json::to_string(&api_doc).context("Failed to serialize OpenAPI document")?,
    );
    let artifact_routes = Router::new().route(
        API_SPEC_PATH,
        get(move || {
            let spec = Arc::clone(&spec);
            async move { ([(header::CONTENT_TYPE, "application/json")], spec.to_string()) }
        }),
    );

    // Create the Scalar UI routes
    let scalar_routes = Scalar::with_url(API_DOCS_PATH, api_doc);

    // Merge all routes
    Ok(Router::new().merge(openapi_routes).merge(scalar_routes).merge(artifact_routes))
}
