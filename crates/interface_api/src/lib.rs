//! HTTP API Layer
//!
//! Read-only REST API over the disaster claims dataset using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: one per analytical query, plus record listings
//! - **Catalogue**: static description of the published queries
//! - **Middleware**: request ids, tracing and request logging
//! - **DTOs**: typed path and query parameters and the `{"value": ...}` wrapper
//! - **Error Handling**: consistent JSON error responses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let dataset = JsonStore::open("data")?.load()?;
//! let app = create_router(Arc::new(dataset), config);
//! axum::serve(listener, app).await?;
//! ```

pub mod catalogue;
pub mod config;
pub mod error;
pub mod middleware;
pub mod handlers;
pub mod dto;

use std::sync::Arc;

use axum::{
    http::{HeaderName, Method},
    middleware as axum_middleware,
    routing::get,
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use domain_analytics::{Dataset, QueryEngine};

use crate::config::ApiConfig;
use crate::handlers::{health, queries, records};
use crate::middleware::request_log_middleware;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub dataset: Arc<Dataset>,
    pub config: ApiConfig,
}

impl AppState {
    pub fn engine(&self) -> QueryEngine<'_> {
        QueryEngine::new(&self.dataset)
    }
}

/// Creates the main API router
///
/// # Arguments
///
/// * `dataset` - The loaded dataset, shared read-only by every request
/// * `config` - API configuration
pub fn create_router(dataset: Arc<Dataset>, config: ApiConfig) -> Router {
    let state = AppState { dataset, config };

    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    let query_routes = Router::new()
        .route("/queries", get(queries::list_queries))
        .route("/claims/closed/count", get(queries::count_closed_claims))
        .route("/claims/top-months", get(queries::top_three_months_by_claim_volume))
        .route("/claim-handlers/:id/claims/count", get(queries::count_claims_for_handler))
        .route(
            "/claim-handlers/:id/claims/average-cost",
            get(queries::average_claim_cost_for_handler),
        )
        .route("/states/most-disasters", get(queries::state_with_most_disasters))
        .route("/states/least-disasters", get(queries::state_with_least_disasters))
        .route("/states/:state/disasters/count", get(queries::count_disasters_for_state))
        .route(
            "/states/:state/agent-language",
            get(queries::most_spoken_agent_language_by_state),
        )
        .route("/agents/claim-costs", get(queries::agent_total_claim_costs))
        .route("/agents/:id/open-claims", get(queries::open_claims_for_agent_and_severity))
        .route(
            "/disasters/declared-after-end/count",
            get(queries::disasters_declared_after_end_date),
        )
        .route("/disasters/:id/claims/total-cost", get(queries::total_claim_cost_for_disaster))
        .route("/disasters/:id/claims/density", get(queries::disaster_claim_density));

    let record_routes = Router::new()
        .route("/agents", get(records::list_agents))
        .route("/agents/:id", get(records::get_agent))
        .route("/claim-handlers", get(records::list_claim_handlers))
        .route("/claim-handlers/:id", get(records::get_claim_handler))
        .route("/claims", get(records::list_claims))
        .route("/claims/:id", get(records::get_claim))
        .route("/disasters", get(records::list_disasters))
        .route("/disasters/:id", get(records::get_disaster));

    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    Router::new()
        .merge(public_routes)
        .nest("/api/v1", query_routes.merge(record_routes))
        .layer(axum_middleware::from_fn(request_log_middleware))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(request_id.clone(), MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::new(request_id)),
        )
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET])
                .allow_headers(Any),
        )
        .with_state(state)
}
