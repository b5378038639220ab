//! Aggregate queries over a loaded dataset
//!
//! Every query is a linear scan or a small tally over the borrowed
//! [`Dataset`]. Nothing here mutates the dataset, so one engine (or many)
//! can serve concurrent readers without locking.
//!
//! Absence is reported with `None`. The one invalid-argument case, a minimum
//! severity outside 1 to 10, has its own [`OpenClaims`] variant.

use std::collections::{BTreeMap, HashMap};

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use core_kernel::{
    average_amount, round_currency, round_to_places, AgentId, ClaimHandlerId, ClaimId, DisasterId,
    MonthOfYear, SeverityRating,
};
use domain_claims::{Claim, Disaster};
use domain_party::{Agent, ClaimHandler};

use crate::dataset::Dataset;
use crate::filters::{AgentFilter, ClaimFilter, ClaimHandlerFilter, DisasterFilter};

/// Decimal places reported for claim density
pub const DENSITY_DECIMAL_PLACES: i32 = 5;

/// Language left out of the most-spoken tally
pub const EXCLUDED_LANGUAGE: &str = "English";

/// How many months the top-months query reports
pub const TOP_MONTHS: usize = 3;

/// Outcome of counting an agent's open claims above a severity floor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenClaims {
    /// The requested minimum severity was outside 1 to 10
    SeverityOutOfRange,
    /// The agent does not exist or has no claims at all, open or closed
    NoClaims,
    /// Open claims at or above the floor; zero when every match is closed
    Count(usize),
}

impl OpenClaims {
    /// Sentinel encoding used on the wire: `-1`, `null`, or the count
    pub fn value(&self) -> Option<i64> {
        match self {
            OpenClaims::SeverityOutOfRange => Some(-1),
            OpenClaims::NoClaims => None,
            OpenClaims::Count(count) => Some(*count as i64),
        }
    }
}

impl Serialize for OpenClaims {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.value().serialize(serializer)
    }
}

/// Claims counted in one calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthlyVolume {
    pub month: MonthOfYear,
    pub claims: usize,
}

/// Read-only query surface over a [`Dataset`]
#[derive(Debug, Clone, Copy)]
pub struct QueryEngine<'a> {
    dataset: &'a Dataset,
}

impl<'a> QueryEngine<'a> {
    pub fn new(dataset: &'a Dataset) -> Self {
        Self { dataset }
    }

    pub fn dataset(&self) -> &'a Dataset {
        self.dataset
    }

    /// Number of claims whose status is exactly `Closed`
    pub fn count_closed_claims(&self) -> usize {
        self.dataset.claims().iter().filter(|c| c.is_closed()).count()
    }

    /// Number of claims assigned to a claim handler; 0 for unknown handlers
    pub fn count_claims_for_handler(&self, handler_id: ClaimHandlerId) -> usize {
        self.claims_for_handler(handler_id).count()
    }

    /// Number of disasters in a state, matched exactly
    pub fn count_disasters_for_state(&self, state: &str) -> usize {
        self.dataset
            .disasters()
            .iter()
            .filter(|d| d.state == state)
            .count()
    }

    /// Total estimated cost of a disaster's claims, rounded to cents
    ///
    /// Returns `None` when the total is zero, which covers disasters with no
    /// claims and unknown disaster ids alike.
    pub fn total_claim_cost_for_disaster(&self, disaster_id: DisasterId) -> Option<Decimal> {
        let total: Decimal = self
            .dataset
            .claims()
            .iter()
            .filter(|c| c.disaster_id == disaster_id)
            .map(|c| c.estimate_cost)
            .sum();

        debug!(%disaster_id, %total, "Total claim cost for disaster");
        (!total.is_zero()).then(|| round_currency(total))
    }

    /// Mean estimated cost of a handler's claims, rounded to cents
    pub fn average_claim_cost_for_handler(&self, handler_id: ClaimHandlerId) -> Option<Decimal> {
        average_amount(self.claims_for_handler(handler_id).map(|c| c.estimate_cost))
    }

    /// State with the most disasters; ties go to the alphabetically first name
    pub fn state_with_most_disasters(&self) -> Option<&'a str> {
        pick_by_count(&self.disaster_counts_by_state(), |candidate, best| candidate > best)
    }

    /// State with the fewest disasters among states that have any
    pub fn state_with_least_disasters(&self) -> Option<&'a str> {
        pick_by_count(&self.disaster_counts_by_state(), |candidate, best| candidate < best)
    }

    /// Most common non-English language among a state's agents
    ///
    /// Primary and secondary languages each count once per agent. Ties go to
    /// the alphabetically first language. Returns an empty string when the
    /// state has no agents or none of them speaks a language other than English.
    pub fn most_spoken_agent_language_by_state(&self, state: &str) -> &'a str {
        let mut tally: BTreeMap<&'a str, usize> = BTreeMap::new();
        for agent in self.dataset.agents().iter().filter(|a| a.state == state) {
            for language in agent.languages().filter(|l| *l != EXCLUDED_LANGUAGE) {
                *tally.entry(language).or_default() += 1;
            }
        }
        pick_by_count(&tally, |candidate, best| candidate > best).unwrap_or("")
    }

    /// Open claims for an agent at or above a minimum severity
    pub fn open_claims_for_agent_and_severity(&self, agent_id: AgentId, min_severity: i64) -> OpenClaims {
        let Ok(floor) = SeverityRating::new(min_severity) else {
            return OpenClaims::SeverityOutOfRange;
        };
        if self.dataset.agent(agent_id).is_none() {
            return OpenClaims::NoClaims;
        }

        let mut assigned = self
            .dataset
            .claims()
            .iter()
            .filter(|c| c.agent_assigned_id == agent_id)
            .peekable();
        if assigned.peek().is_none() {
            return OpenClaims::NoClaims;
        }

        OpenClaims::Count(
            assigned
                .filter(|c| c.is_open() && c.is_at_least(floor))
                .count(),
        )
    }

    /// Disasters declared strictly after their end date
    pub fn disasters_declared_after_end_date(&self) -> usize {
        self.dataset
            .disasters()
            .iter()
            .filter(|d| d.declared_after_end())
            .count()
    }

    /// Total claim cost per agent, rounded to cents
    ///
    /// Holds exactly one entry per agent in the dataset; agents without claims
    /// map to zero.
    pub fn agent_total_claim_costs(&self) -> BTreeMap<AgentId, Decimal> {
        let mut totals: BTreeMap<AgentId, Decimal> = self
            .dataset
            .agents()
            .iter()
            .map(|agent| (agent.id, Decimal::ZERO))
            .collect();

        for claim in self.dataset.claims() {
            if let Some(total) = totals.get_mut(&claim.agent_assigned_id) {
                *total += claim.estimate_cost;
            }
        }

        totals.values_mut().for_each(|total| *total = round_currency(*total));
        totals
    }

    /// Claims per square mile of a disaster's impact circle, to 5 places
    pub fn disaster_claim_density(&self, disaster_id: DisasterId) -> Option<f64> {
        let disaster = self.dataset.disaster(disaster_id)?;
        let claims = self
            .dataset
            .claims()
            .iter()
            .filter(|c| c.disaster_id == disaster_id)
            .count();

        let density = claims as f64 / disaster.impact_area_sq_miles();
        Some(round_to_places(density, DENSITY_DECIMAL_PLACES))
    }

    /// Claim counts per month of the owning disaster's declaration
    ///
    /// Sorted by volume, highest first, then chronologically. Months without
    /// claims are absent.
    pub fn monthly_claim_volume(&self) -> Vec<MonthlyVolume> {
        let mut per_month: HashMap<MonthOfYear, usize> = HashMap::new();
        for claim in self.dataset.claims() {
            if let Some(disaster) = self.dataset.disaster(claim.disaster_id) {
                *per_month.entry(disaster.declared_month()).or_default() += 1;
            }
        }

        let mut volumes: Vec<MonthlyVolume> = per_month
            .into_iter()
            .map(|(month, claims)| MonthlyVolume { month, claims })
            .collect();
        volumes.sort_by(|a, b| b.claims.cmp(&a.claims).then_with(|| a.month.cmp(&b.month)));
        volumes
    }

    /// The three busiest months, formatted like `April 2023`
    ///
    /// Fewer than three labels come back only when the claims span fewer
    /// than three months.
    pub fn top_three_months_by_claim_volume(&self) -> Vec<String> {
        self.monthly_claim_volume()
            .into_iter()
            .take(TOP_MONTHS)
            .map(|volume| volume.month.to_string())
            .collect()
    }

    pub fn agent(&self, id: AgentId) -> Option<&'a Agent> {
        self.dataset.agent(id)
    }

    pub fn claim_handler(&self, id: ClaimHandlerId) -> Option<&'a ClaimHandler> {
        self.dataset.claim_handler(id)
    }

    pub fn claim(&self, id: ClaimId) -> Option<&'a Claim> {
        self.dataset.claim(id)
    }

    pub fn disaster(&self, id: DisasterId) -> Option<&'a Disaster> {
        self.dataset.disaster(id)
    }

    pub fn find_agents(&self, filter: &AgentFilter) -> Vec<&'a Agent> {
        self.dataset.agents().iter().filter(|a| filter.matches(a)).collect()
    }

    pub fn find_claim_handlers(&self, filter: &ClaimHandlerFilter) -> Vec<&'a ClaimHandler> {
        self.dataset
            .claim_handlers()
            .iter()
            .filter(|h| filter.matches(h))
            .collect()
    }

    pub fn find_claims(&self, filter: &ClaimFilter) -> Vec<&'a Claim> {
        self.dataset.claims().iter().filter(|c| filter.matches(c)).collect()
    }

    pub fn find_disasters(&self, filter: &DisasterFilter) -> Vec<&'a Disaster> {
        self.dataset
            .disasters()
            .iter()
            .filter(|d| filter.matches(d))
            .collect()
    }

    fn claims_for_handler(&self, handler_id: ClaimHandlerId) -> impl Iterator<Item = &'a Claim> {
        self.dataset
            .claims()
            .iter()
            .filter(move |c| c.claim_handler_assigned_id == handler_id)
    }

    fn disaster_counts_by_state(&self) -> BTreeMap<&'a str, usize> {
        let mut counts = BTreeMap::new();
        for disaster in self.dataset.disasters() {
            *counts.entry(disaster.state.as_str()).or_default() += 1;
        }
        counts
    }
}

/// Walks a tally in key order and keeps the first key whose count beats the
/// current best, so ties resolve to the alphabetically first key
fn pick_by_count<'a>(tally: &BTreeMap<&'a str, usize>, beats: impl Fn(usize, usize) -> bool) -> Option<&'a str> {
    let mut best: Option<(&'a str, usize)> = None;
    for (&name, &count) in tally {
        match best {
            Some((_, best_count)) if !beats(count, best_count) => {}
            _ => best = Some((name, count)),
        }
    }
    best.map(|(name, _)| name)
}
