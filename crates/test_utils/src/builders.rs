//! Test Data Builders
//!
//! Builders for the four record types. Tests set only the fields they care
//! about; names are filled with fake data and everything else gets a valid
//! default.

use chrono::NaiveDate;
use fake::faker::name::en::{FirstName, LastName};
use fake::Fake;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::{AgentId, ClaimHandlerId, ClaimId, DisasterId, SeverityRating};
use domain_claims::{Claim, ClaimStatus, Disaster};
use domain_party::{Agent, ClaimHandler};

/// Builds a date from literal parts
///
/// # Panics
///
/// Panics if the parts do not form a calendar date
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap_or_else(|| panic!("invalid fixture date {year}-{month}-{day}"))
}

/// Builds a severity rating from a literal in range
///
/// # Panics
///
/// Panics if the value is outside 1 to 10
pub fn severity(value: i64) -> SeverityRating {
    SeverityRating::new(value).unwrap_or_else(|err| panic!("invalid fixture severity: {err}"))
}

/// Builder for agents
pub struct AgentBuilder {
    agent: Agent,
}

impl AgentBuilder {
    /// Creates a Texas agent who speaks English only
    pub fn new(id: i64) -> Self {
        Self {
            agent: Agent {
                id: AgentId::new(id),
                first_name: FirstName().fake(),
                last_name: LastName().fake(),
                state: "Texas".to_string(),
                region: "South".to_string(),
                primary_language: "English".to_string(),
                secondary_language: None,
                years_active: 5,
            },
        }
    }

    /// Sets the state and the recorded region to match it
    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.agent.state = state.into();
        self.agent.region = self
            .agent
            .derived_region()
            .map(|region| region.to_string())
            .unwrap_or_default();
        self
    }

    pub fn with_name(mut self, first: impl Into<String>, last: impl Into<String>) -> Self {
        self.agent.first_name = first.into();
        self.agent.last_name = last.into();
        self
    }

    pub fn with_primary_language(mut self, language: impl Into<String>) -> Self {
        self.agent.primary_language = language.into();
        self
    }

    pub fn with_secondary_language(mut self, language: impl Into<String>) -> Self {
        self.agent.secondary_language = Some(language.into());
        self
    }

    pub fn with_years_active(mut self, years: u32) -> Self {
        self.agent.years_active = years;
        self
    }

    pub fn build(self) -> Agent {
        self.agent
    }
}

/// Builds a claim handler with fake names
pub fn claim_handler(id: i64) -> ClaimHandler {
    let first: String = FirstName().fake();
    let last: String = LastName().fake();
    ClaimHandler::new(ClaimHandlerId::new(id), first, last)
}

/// Builder for claims
pub struct ClaimBuilder {
    claim: Claim,
}

impl ClaimBuilder {
    /// Creates an open claim of severity 5 against disaster, agent and
    /// handler 1
    pub fn new(id: i64) -> Self {
        Self {
            claim: Claim {
                id: ClaimId::new(id),
                disaster_id: DisasterId::new(1),
                status: ClaimStatus::from_label("Open"),
                total_loss: false,
                loss_of_life: false,
                claim_type: "Flood".to_string(),
                severity_rating: severity(5),
                estimate_cost: dec!(1000.00),
                agent_assigned_id: AgentId::new(1),
                claim_handler_assigned_id: ClaimHandlerId::new(1),
            },
        }
    }

    pub fn for_disaster(mut self, id: i64) -> Self {
        self.claim.disaster_id = DisasterId::new(id);
        self
    }

    pub fn with_status(mut self, label: &str) -> Self {
        self.claim.status = ClaimStatus::from_label(label);
        self
    }

    pub fn closed(self) -> Self {
        self.with_status("Closed")
    }

    pub fn with_severity(mut self, value: i64) -> Self {
        self.claim.severity_rating = severity(value);
        self
    }

    pub fn with_cost(mut self, cost: Decimal) -> Self {
        self.claim.estimate_cost = cost;
        self
    }

    pub fn with_type(mut self, claim_type: impl Into<String>) -> Self {
        self.claim.claim_type = claim_type.into();
        self
    }

    pub fn total_loss(mut self) -> Self {
        self.claim.total_loss = true;
        self
    }

    pub fn loss_of_life(mut self) -> Self {
        self.claim.loss_of_life = true;
        self
    }

    pub fn assigned_to(mut self, agent: i64, handler: i64) -> Self {
        self.claim.agent_assigned_id = AgentId::new(agent);
        self.claim.claim_handler_assigned_id = ClaimHandlerId::new(handler);
        self
    }

    pub fn build(self) -> Claim {
        self.claim
    }
}

/// Builder for disasters
pub struct DisasterBuilder {
    disaster: Disaster,
}

impl DisasterBuilder {
    /// Creates a one-day California wildfire declared on its start date
    pub fn new(id: i64) -> Self {
        let day = date(2023, 1, 1);
        Self {
            disaster: Disaster {
                id: DisasterId::new(id),
                disaster_type: "Wildfire".to_string(),
                state: "California".to_string(),
                name: format!("Disaster {id}"),
                description: "Fixture disaster".to_string(),
                start_date: day,
                end_date: day,
                declared_date: day,
                lat: 36.77,
                long: -119.41,
                radius_miles: 10.0,
            },
        }
    }

    pub fn in_state(mut self, state: impl Into<String>) -> Self {
        self.disaster.state = state.into();
        self
    }

    pub fn with_type(mut self, disaster_type: impl Into<String>) -> Self {
        self.disaster.disaster_type = disaster_type.into();
        self
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.disaster.name = name.into();
        self
    }

    pub fn between(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.disaster.start_date = start;
        self.disaster.end_date = end;
        self
    }

    pub fn declared_on(mut self, declared: NaiveDate) -> Self {
        self.disaster.declared_date = declared;
        self
    }

    pub fn with_radius(mut self, radius_miles: f64) -> Self {
        self.disaster.radius_miles = radius_miles;
        self
    }

    pub fn located_at(mut self, lat: f64, long: f64) -> Self {
        self.disaster.lat = lat;
        self.disaster.long = long;
        self
    }

    pub fn build(self) -> Disaster {
        self.disaster
    }
}
