//! Property-Based Test Generators
//!
//! Strategies that produce datasets satisfying every load-time invariant:
//! dense ids from 1, claims that only reference existing records, severities
//! in range and positive radii.

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use rust_decimal::Decimal;

use core_kernel::{AgentId, ClaimHandlerId, ClaimId, DisasterId, SeverityRating};
use domain_analytics::Dataset;
use domain_claims::{Claim, ClaimStatus, Disaster};
use domain_party::{Agent, ClaimHandler, Region};

use crate::builders::date;

/// States drawn on by the generators
pub const GENERATED_STATES: [&str; 5] = ["Texas", "California", "Florida", "Alaska", "Ohio"];

/// Languages drawn on by the generators, English included
pub const GENERATED_LANGUAGES: [&str; 5] = ["English", "Spanish", "French", "Arabic", "Tagalog"];

/// Status labels, including a lower-case spelling that does not close a claim
pub const GENERATED_STATUSES: [&str; 5] = ["Open", "Closed", "Received", "In Review", "closed"];

fn epoch() -> NaiveDate {
    date(2022, 1, 1)
}

pub fn state_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(GENERATED_STATES.to_vec())
}

pub fn language_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(GENERATED_LANGUAGES.to_vec())
}

pub fn status_strategy() -> impl Strategy<Value = ClaimStatus> {
    prop::sample::select(GENERATED_STATUSES.to_vec()).prop_map(|label| ClaimStatus::from_label(label))
}

pub fn severity_strategy() -> impl Strategy<Value = SeverityRating> {
    (i64::from(SeverityRating::MIN)..=i64::from(SeverityRating::MAX))
        .prop_filter_map("severity in range", |value| SeverityRating::new(value).ok())
}

/// Costs from zero to one hundred thousand dollars, in cents
pub fn cost_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..10_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Agents with ids `1..=count`
pub fn agents_strategy(count: usize) -> impl Strategy<Value = Vec<Agent>> {
    prop::collection::vec(
        (
            state_strategy(),
            language_strategy(),
            prop::option::of(language_strategy()),
            0u32..40,
        ),
        count,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(index, (state, primary, secondary, years_active))| Agent {
                id: AgentId::new(index as i64 + 1),
                first_name: format!("Agent{}", index + 1),
                last_name: "Generated".to_string(),
                state: state.to_string(),
                region: Region::for_state(state).map(|r| r.to_string()).unwrap_or_default(),
                primary_language: primary.to_string(),
                secondary_language: secondary.map(str::to_string),
                years_active,
            })
            .collect()
    })
}

pub fn claim_handlers(count: usize) -> Vec<ClaimHandler> {
    (1..=count as i64)
        .map(|id| ClaimHandler::new(ClaimHandlerId::new(id), format!("Handler{id}"), "Generated"))
        .collect()
}

/// Disasters with ids `1..=count`, spread over 2022 and 2023
pub fn disasters_strategy(count: usize) -> impl Strategy<Value = Vec<Disaster>> {
    prop::collection::vec((state_strategy(), 0i64..700, 0i64..30, 0i64..60, 1u32..200), count).prop_map(
        |rows| {
            rows.into_iter()
                .enumerate()
                .map(|(index, (state, start_offset, length, declared_offset, radius))| {
                    let start_date = epoch() + Duration::days(start_offset);
                    Disaster {
                        id: DisasterId::new(index as i64 + 1),
                        disaster_type: "Flood".to_string(),
                        state: state.to_string(),
                        name: format!("Disaster {}", index + 1),
                        description: "Generated".to_string(),
                        start_date,
                        end_date: start_date + Duration::days(length),
                        declared_date: start_date + Duration::days(declared_offset),
                        lat: 35.0,
                        long: -100.0,
                        radius_miles: f64::from(radius) / 2.0,
                    }
                })
                .collect()
        },
    )
}

/// Claims with ids `1..=count` referencing only the given collection sizes
pub fn claims_strategy(
    count: usize,
    agents: usize,
    handlers: usize,
    disasters: usize,
) -> impl Strategy<Value = Vec<Claim>> {
    prop::collection::vec(
        (
            1..=disasters as i64,
            status_strategy(),
            severity_strategy(),
            cost_strategy(),
            1..=agents as i64,
            1..=handlers as i64,
            any::<bool>(),
        ),
        count,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(index, (disaster, status, severity_rating, estimate_cost, agent, handler, total_loss))| Claim {
                id: ClaimId::new(index as i64 + 1),
                disaster_id: DisasterId::new(disaster),
                status,
                total_loss,
                loss_of_life: false,
                claim_type: "Flood".to_string(),
                severity_rating,
                estimate_cost,
                agent_assigned_id: AgentId::new(agent),
                claim_handler_assigned_id: ClaimHandlerId::new(handler),
            })
            .collect()
    })
}

/// Complete valid datasets with up to 40 claims
pub fn dataset_strategy() -> impl Strategy<Value = Dataset> {
    (1usize..8, 1usize..4, 1usize..8, 0usize..40)
        .prop_flat_map(|(agents, handlers, disasters, claims)| {
            (
                agents_strategy(agents),
                Just(claim_handlers(handlers)),
                claims_strategy(claims, agents, handlers, disasters),
                disasters_strategy(disasters),
            )
        })
        .prop_filter_map("dataset must load", |(agents, handlers, claims, disasters)| {
            Dataset::new(agents, handlers, claims, disasters).ok()
        })
}
