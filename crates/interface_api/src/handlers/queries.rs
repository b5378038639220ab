//! Analytical query handlers

use std::collections::BTreeMap;

use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use tracing::debug;
use validator::Validate;

use core_kernel::{AgentId, ClaimHandlerId, DisasterId};
use domain_analytics::OpenClaims;

use crate::catalogue::{QueryDescriptor, QUERY_CATALOGUE};
use crate::dto::queries::{Money, QueryValue, SeverityQuery, StatePath};
use crate::{error::ApiError, AppState};

type QueryResult<T> = Result<Json<QueryValue<T>>, ApiError>;

fn value<T>(value: T) -> Json<QueryValue<T>> {
    Json(QueryValue::new(value))
}

/// Lists the published queries
pub async fn list_queries() -> Json<&'static [QueryDescriptor]> {
    Json(QUERY_CATALOGUE)
}

pub async fn count_closed_claims(State(state): State<AppState>) -> Json<QueryValue<usize>> {
    value(state.engine().count_closed_claims())
}

pub async fn count_claims_for_handler(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> QueryResult<usize> {
    let Path(id) = path?;
    debug!(handler_id = id, "count_claims_for_handler");
    Ok(value(state.engine().count_claims_for_handler(ClaimHandlerId::new(id))))
}

pub async fn average_claim_cost_for_handler(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> QueryResult<Option<Money>> {
    let Path(id) = path?;
    debug!(handler_id = id, "average_claim_cost_for_handler");
    let average = state.engine().average_claim_cost_for_handler(ClaimHandlerId::new(id));
    Ok(value(average.map(Money::from)))
}

pub async fn count_disasters_for_state(
    State(state): State<AppState>,
    path: Result<Path<StatePath>, PathRejection>,
) -> QueryResult<usize> {
    let Path(params) = path?;
    params.validate()?;
    Ok(value(state.engine().count_disasters_for_state(&params.state)))
}

pub async fn state_with_most_disasters(State(state): State<AppState>) -> Json<QueryValue<Option<String>>> {
    value(state.engine().state_with_most_disasters().map(str::to_string))
}

pub async fn state_with_least_disasters(State(state): State<AppState>) -> Json<QueryValue<Option<String>>> {
    value(state.engine().state_with_least_disasters().map(str::to_string))
}

pub async fn most_spoken_agent_language_by_state(
    State(state): State<AppState>,
    path: Result<Path<StatePath>, PathRejection>,
) -> QueryResult<String> {
    let Path(params) = path?;
    params.validate()?;
    let language = state.engine().most_spoken_agent_language_by_state(&params.state);
    Ok(value(language.to_string()))
}

pub async fn open_claims_for_agent_and_severity(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    query: Result<Query<SeverityQuery>, QueryRejection>,
) -> QueryResult<OpenClaims> {
    let Path(id) = path?;
    let Query(params) = query?;
    debug!(agent_id = id, min_severity = params.min_severity, "open_claims_for_agent_and_severity");
    Ok(value(
        state
            .engine()
            .open_claims_for_agent_and_severity(AgentId::new(id), params.min_severity),
    ))
}

pub async fn agent_total_claim_costs(State(state): State<AppState>) -> Json<QueryValue<BTreeMap<AgentId, Money>>> {
    let totals = state
        .engine()
        .agent_total_claim_costs()
        .into_iter()
        .map(|(agent, total)| (agent, Money(total)))
        .collect();
    value(totals)
}

pub async fn disasters_declared_after_end_date(State(state): State<AppState>) -> Json<QueryValue<usize>> {
    value(state.engine().disasters_declared_after_end_date())
}

pub async fn total_claim_cost_for_disaster(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> QueryResult<Option<Money>> {
    let Path(id) = path?;
    debug!(disaster_id = id, "total_claim_cost_for_disaster");
    let total = state.engine().total_claim_cost_for_disaster(DisasterId::new(id));
    Ok(value(total.map(Money::from)))
}

pub async fn disaster_claim_density(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> QueryResult<Option<f64>> {
    let Path(id) = path?;
    debug!(disaster_id = id, "disaster_claim_density");
    Ok(value(state.engine().disaster_claim_density(DisasterId::new(id))))
}

pub async fn top_three_months_by_claim_volume(State(state): State<AppState>) -> Json<QueryValue<Vec<String>>> {
    value(state.engine().top_three_months_by_claim_volume())
}
