//! Record filters for the listing endpoints
//!
//! Each filter holds one optional value per record field. A record matches
//! when every supplied value matches; an empty filter matches everything.
//! Text compares case-insensitively, numbers and flags exactly.

use chrono::NaiveDate;
use serde::Deserialize;

use core_kernel::{AgentId, ClaimHandlerId, ClaimId, DisasterId};
use domain_claims::{Claim, Disaster};
use domain_party::{Agent, ClaimHandler, Region};

fn text_matches(wanted: &Option<String>, actual: &str) -> bool {
    wanted
        .as_deref()
        .map_or(true, |wanted| wanted.trim().eq_ignore_ascii_case(actual))
}

fn value_matches<T: PartialEq>(wanted: &Option<T>, actual: &T) -> bool {
    wanted.as_ref().map_or(true, |wanted| wanted == actual)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AgentFilter {
    pub id: Option<AgentId>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub state: Option<String>,
    /// Matched against the region derived from the agent's state
    pub region: Option<Region>,
    pub primary_language: Option<String>,
    pub secondary_language: Option<String>,
    pub years_active: Option<u32>,
}

impl AgentFilter {
    pub fn matches(&self, agent: &Agent) -> bool {
        value_matches(&self.id, &agent.id)
            && text_matches(&self.first_name, &agent.first_name)
            && text_matches(&self.last_name, &agent.last_name)
            && text_matches(&self.state, &agent.state)
            && self
                .region
                .map_or(true, |region| agent.derived_region() == Some(region))
            && text_matches(&self.primary_language, &agent.primary_language)
            && match self.secondary_language.as_deref() {
                None => true,
                Some(wanted) => agent
                    .secondary_language
                    .as_deref()
                    .is_some_and(|language| wanted.trim().eq_ignore_ascii_case(language)),
            }
            && value_matches(&self.years_active, &agent.years_active)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ClaimHandlerFilter {
    pub id: Option<ClaimHandlerId>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl ClaimHandlerFilter {
    pub fn matches(&self, handler: &ClaimHandler) -> bool {
        value_matches(&self.id, &handler.id)
            && text_matches(&self.first_name, &handler.first_name)
            && text_matches(&self.last_name, &handler.last_name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ClaimFilter {
    pub id: Option<ClaimId>,
    pub disaster_id: Option<DisasterId>,
    pub status: Option<String>,
    pub total_loss: Option<bool>,
    pub loss_of_life: Option<bool>,
    #[serde(rename = "type")]
    pub claim_type: Option<String>,
    pub severity_rating: Option<u8>,
    pub agent_assigned_id: Option<AgentId>,
    pub claim_handler_assigned_id: Option<ClaimHandlerId>,
}

impl ClaimFilter {
    pub fn matches(&self, claim: &Claim) -> bool {
        value_matches(&self.id, &claim.id)
            && value_matches(&self.disaster_id, &claim.disaster_id)
            && text_matches(&self.status, claim.status.label())
            && value_matches(&self.total_loss, &claim.total_loss)
            && value_matches(&self.loss_of_life, &claim.loss_of_life)
            && text_matches(&self.claim_type, &claim.claim_type)
            && value_matches(&self.severity_rating, &claim.severity_rating.value())
            && value_matches(&self.agent_assigned_id, &claim.agent_assigned_id)
            && value_matches(&self.claim_handler_assigned_id, &claim.claim_handler_assigned_id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DisasterFilter {
    pub id: Option<DisasterId>,
    #[serde(rename = "type")]
    pub disaster_type: Option<String>,
    pub state: Option<String>,
    pub name: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub declared_date: Option<NaiveDate>,
}

impl DisasterFilter {
    pub fn matches(&self, disaster: &Disaster) -> bool {
        value_matches(&self.id, &disaster.id)
            && text_matches(&self.disaster_type, &disaster.disaster_type)
            && text_matches(&self.state, &disaster.state)
            && text_matches(&self.name, &disaster.name)
            && value_matches(&self.start_date, &disaster.start_date)
            && value_matches(&self.end_date, &disaster.end_date)
            && value_matches(&self.declared_date, &disaster.declared_date)
    }
}
