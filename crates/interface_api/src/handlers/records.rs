//! Record listing and lookup handlers

use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};

use core_kernel::{AgentId, ClaimHandlerId, ClaimId, DisasterId};
use domain_analytics::{AgentFilter, ClaimFilter, ClaimHandlerFilter, DisasterFilter};
use domain_claims::{Claim, Disaster};
use domain_party::{Agent, ClaimHandler};

use crate::dto::records::RecordList;
use crate::{error::ApiError, AppState};

type ListResult<T> = Result<Json<RecordList<T>>, ApiError>;

/// Lists agents matching the query filters
pub async fn list_agents(
    State(state): State<AppState>,
    query: Result<Query<AgentFilter>, QueryRejection>,
) -> ListResult<Agent> {
    let Query(filter) = query?;
    let agents = state.engine().find_agents(&filter).into_iter().cloned().collect::<Vec<_>>();
    Ok(Json(agents.into()))
}

pub async fn get_agent(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Agent>, ApiError> {
    let Path(id) = path?;
    state
        .engine()
        .agent(AgentId::new(id))
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Agent", id))
}

pub async fn list_claim_handlers(
    State(state): State<AppState>,
    query: Result<Query<ClaimHandlerFilter>, QueryRejection>,
) -> ListResult<ClaimHandler> {
    let Query(filter) = query?;
    let handlers = state
        .engine()
        .find_claim_handlers(&filter)
        .into_iter()
        .cloned()
        .collect::<Vec<_>>();
    Ok(Json(handlers.into()))
}

pub async fn get_claim_handler(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<ClaimHandler>, ApiError> {
    let Path(id) = path?;
    state
        .engine()
        .claim_handler(ClaimHandlerId::new(id))
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Claim handler", id))
}

pub async fn list_claims(
    State(state): State<AppState>,
    query: Result<Query<ClaimFilter>, QueryRejection>,
) -> ListResult<Claim> {
    let Query(filter) = query?;
    let claims = state.engine().find_claims(&filter).into_iter().cloned().collect::<Vec<_>>();
    Ok(Json(claims.into()))
}

pub async fn get_claim(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Claim>, ApiError> {
    let Path(id) = path?;
    state
        .engine()
        .claim(ClaimId::new(id))
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Claim", id))
}

pub async fn list_disasters(
    State(state): State<AppState>,
    query: Result<Query<DisasterFilter>, QueryRejection>,
) -> ListResult<Disaster> {
    let Query(filter) = query?;
    let disasters = state
        .engine()
        .find_disasters(&filter)
        .into_iter()
        .cloned()
        .collect::<Vec<_>>();
    Ok(Json(disasters.into()))
}

pub async fn get_disaster(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Disaster>, ApiError> {
    let Path(id) = path?;
    state
        .engine()
        .disaster(DisasterId::new(id))
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Disaster", id))
}
