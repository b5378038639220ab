//! The immutable record context every query reads from

use serde::Serialize;
use tracing::{debug, warn};

use core_kernel::{AgentId, ClaimHandlerId, ClaimId, DisasterId};
use domain_claims::{Claim, Disaster};
use domain_party::{Agent, ClaimHandler, PartyValidator};

use crate::error::AnalyticsError;

/// The four record collections, validated and sorted by id
///
/// Ids in every collection run densely from 1, so lookups are positional.
/// Nothing mutates a `Dataset` after [`Dataset::new`] returns.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    agents: Vec<Agent>,
    claim_handlers: Vec<ClaimHandler>,
    claims: Vec<Claim>,
    disasters: Vec<Disaster>,
}

/// Collection sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DatasetSummary {
    pub agents: usize,
    pub claim_handlers: usize,
    pub claims: usize,
    pub disasters: usize,
}

impl Dataset {
    /// Validates and assembles a dataset
    ///
    /// # Errors
    ///
    /// - `NonDenseIds` if any collection's ids are not exactly `1..=len`
    /// - `DanglingReference` if a claim points at a missing agent, claim
    ///   handler or disaster
    /// - `Party` / `Claim` if an individual record fails validation
    pub fn new(
        mut agents: Vec<Agent>,
        mut claim_handlers: Vec<ClaimHandler>,
        mut claims: Vec<Claim>,
        mut disasters: Vec<Disaster>,
    ) -> Result<Self, AnalyticsError> {
        agents.sort_by_key(|agent| agent.id);
        claim_handlers.sort_by_key(|handler| handler.id);
        claims.sort_by_key(|claim| claim.id);
        disasters.sort_by_key(|disaster| disaster.id);

        ensure_dense("agents", agents.iter().map(|a| a.id.get()))?;
        ensure_dense("claim handlers", claim_handlers.iter().map(|h| h.id.get()))?;
        ensure_dense("claims", claims.iter().map(|c| c.id.get()))?;
        ensure_dense("disasters", disasters.iter().map(|d| d.id.get()))?;

        for agent in &agents {
            let result = PartyValidator::ensure_agent(agent)?;
            for warning in result.warnings {
                warn!(agent_id = agent.id.get(), %warning, "Agent record warning");
            }
        }
        for handler in &claim_handlers {
            PartyValidator::ensure_claim_handler(handler)?;
        }
        for disaster in &disasters {
            disaster.validate()?;
        }

        let dataset = Self {
            agents,
            claim_handlers,
            claims,
            disasters,
        };

        for claim in &dataset.claims {
            claim.validate()?;
            dataset.ensure_references(claim)?;
        }

        debug!(summary = ?dataset.summary(), "Dataset assembled");
        Ok(dataset)
    }

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn claim_handlers(&self) -> &[ClaimHandler] {
        &self.claim_handlers
    }

    pub fn claims(&self) -> &[Claim] {
        &self.claims
    }

    pub fn disasters(&self) -> &[Disaster] {
        &self.disasters
    }

    pub fn agent(&self, id: AgentId) -> Option<&Agent> {
        self.agents.get(id.position()?)
    }

    pub fn claim_handler(&self, id: ClaimHandlerId) -> Option<&ClaimHandler> {
        self.claim_handlers.get(id.position()?)
    }

    pub fn claim(&self, id: ClaimId) -> Option<&Claim> {
        self.claims.get(id.position()?)
    }

    pub fn disaster(&self, id: DisasterId) -> Option<&Disaster> {
        self.disasters.get(id.position()?)
    }

    pub fn summary(&self) -> DatasetSummary {
        DatasetSummary {
            agents: self.agents.len(),
            claim_handlers: self.claim_handlers.len(),
            claims: self.claims.len(),
            disasters: self.disasters.len(),
        }
    }

    fn ensure_references(&self, claim: &Claim) -> Result<(), AnalyticsError> {
        let dangling = |target: &'static str, target_id: i64| AnalyticsError::DanglingReference {
            claim_id: claim.id.get(),
            target,
            target_id,
        };

        if self.agent(claim.agent_assigned_id).is_none() {
            return Err(dangling("agent", claim.agent_assigned_id.get()));
        }
        if self.claim_handler(claim.claim_handler_assigned_id).is_none() {
            return Err(dangling("claim handler", claim.claim_handler_assigned_id.get()));
        }
        if self.disaster(claim.disaster_id).is_none() {
            return Err(dangling("disaster", claim.disaster_id.get()));
        }
        Ok(())
    }
}

/// Checks that sorted ids are exactly 1, 2, 3, ...
fn ensure_dense(
    collection: &'static str,
    ids: impl Iterator<Item = i64>,
) -> Result<(), AnalyticsError> {
    for (expected, found) in (1i64..).zip(ids) {
        if found != expected {
            return Err(AnalyticsError::NonDenseIds {
                collection,
                expected,
                found,
            });
        }
    }
    Ok(())
}
