//! Query tests against the hand-checked fixture dataset

use rust_decimal_macros::dec;

use core_kernel::{AgentId, ClaimHandlerId, ClaimId, DisasterId, MonthOfYear};
use domain_analytics::{
    AgentFilter, ClaimFilter, ClaimHandlerFilter, DisasterFilter, MonthlyVolume, OpenClaims, QueryEngine,
};
use domain_party::Region;
use test_utils::{date, assert_amount_eq, assert_density_eq, assert_rounded_to_cents, small_dataset};

fn engine() -> QueryEngine<'static> {
    QueryEngine::new(small_dataset())
}

// ============================================================================
// Counting Tests
// ============================================================================

mod counting_tests {
    use super::*;

    #[test]
    fn test_count_closed_claims() {
        assert_eq!(engine().count_closed_claims(), 3);
    }

    #[test]
    fn test_count_claims_for_handler() {
        let engine = engine();
        assert_eq!(engine.count_claims_for_handler(ClaimHandlerId::new(1)), 4);
        assert_eq!(engine.count_claims_for_handler(ClaimHandlerId::new(2)), 4);
        assert_eq!(engine.count_claims_for_handler(ClaimHandlerId::new(3)), 0);
        assert_eq!(engine.count_claims_for_handler(ClaimHandlerId::new(99)), 0);
    }

    #[test]
    fn test_count_disasters_for_state() {
        let engine = engine();
        assert_eq!(engine.count_disasters_for_state("Texas"), 2);
        assert_eq!(engine.count_disasters_for_state("California"), 2);
        assert_eq!(engine.count_disasters_for_state("Alaska"), 1);
        assert_eq!(engine.count_disasters_for_state("Ohio"), 0);
    }

    #[test]
    fn test_state_match_is_exact() {
        assert_eq!(engine().count_disasters_for_state("texas"), 0);
    }

    #[test]
    fn test_disasters_declared_after_end_date() {
        assert_eq!(engine().disasters_declared_after_end_date(), 2);
    }
}

// ============================================================================
// Cost Tests
// ============================================================================

mod cost_tests {
    use super::*;

    #[test]
    fn test_total_claim_cost_for_disaster() {
        let engine = engine();
        assert_amount_eq(engine.total_claim_cost_for_disaster(DisasterId::new(1)), Some(dec!(5000.34)));
        assert_amount_eq(engine.total_claim_cost_for_disaster(DisasterId::new(2)), Some(dec!(12300.33)));
        assert_amount_eq(engine.total_claim_cost_for_disaster(DisasterId::new(3)), Some(dec!(4200.50)));
        assert_amount_eq(engine.total_claim_cost_for_disaster(DisasterId::new(5)), Some(dec!(150.00)));
    }

    #[test]
    fn test_total_claim_cost_absent_without_claims() {
        let engine = engine();
        assert_eq!(engine.total_claim_cost_for_disaster(DisasterId::new(4)), None);
        assert_eq!(engine.total_claim_cost_for_disaster(DisasterId::new(0)), None);
        assert_eq!(engine.total_claim_cost_for_disaster(DisasterId::new(99)), None);
    }

    #[test]
    fn test_average_claim_cost_rounds_half_up() {
        let engine = engine();
        // 16500.34 / 4 = 4125.085
        assert_amount_eq(engine.average_claim_cost_for_handler(ClaimHandlerId::new(1)), Some(dec!(4125.09)));
        // 5150.83 / 4 = 1287.7075
        assert_amount_eq(engine.average_claim_cost_for_handler(ClaimHandlerId::new(2)), Some(dec!(1287.71)));
    }

    #[test]
    fn test_average_claim_cost_absent_without_claims() {
        let engine = engine();
        assert_eq!(engine.average_claim_cost_for_handler(ClaimHandlerId::new(3)), None);
        assert_eq!(engine.average_claim_cost_for_handler(ClaimHandlerId::new(42)), None);
    }

    #[test]
    fn test_agent_total_claim_costs() {
        let totals = engine().agent_total_claim_costs();

        assert_eq!(totals.len(), 6);
        assert_eq!(totals[&AgentId::new(1)], dec!(3650.35));
        assert_eq!(totals[&AgentId::new(2)], dec!(12500.00));
        assert_eq!(totals[&AgentId::new(3)], dec!(4500.83));
        assert_eq!(totals[&AgentId::new(4)], dec!(999.99));
        assert_eq!(totals[&AgentId::new(5)], dec!(0));
        assert_eq!(totals[&AgentId::new(6)], dec!(0));
        totals.values().copied().for_each(assert_rounded_to_cents);
    }
}

// ============================================================================
// Ranking Tests
// ============================================================================

mod ranking_tests {
    use super::*;

    #[test]
    fn test_state_with_most_disasters_breaks_ties_alphabetically() {
        // California and Texas both have two
        assert_eq!(engine().state_with_most_disasters(), Some("California"));
    }

    #[test]
    fn test_state_with_least_disasters() {
        assert_eq!(engine().state_with_least_disasters(), Some("Alaska"));
    }

    #[test]
    fn test_most_spoken_language_excludes_english() {
        let engine = engine();
        assert_eq!(engine.most_spoken_agent_language_by_state("Texas"), "Spanish");
        assert_eq!(engine.most_spoken_agent_language_by_state("New Hampshire"), "Arabic");
        assert_eq!(engine.most_spoken_agent_language_by_state("Florida"), "Spanish");
    }

    #[test]
    fn test_most_spoken_language_empty_when_unanswerable() {
        let engine = engine();
        assert_eq!(engine.most_spoken_agent_language_by_state("Alaska"), "");
        assert_eq!(engine.most_spoken_agent_language_by_state("Wisconsin"), "");
    }

    #[test]
    fn test_monthly_claim_volume() {
        let volumes = engine().monthly_claim_volume();
        assert_eq!(
            volumes,
            vec![
                MonthlyVolume { month: MonthOfYear::of(date(2023, 4, 1)), claims: 4 },
                MonthlyVolume { month: MonthOfYear::of(date(2022, 11, 1)), claims: 3 },
                MonthlyVolume { month: MonthOfYear::of(date(2023, 2, 1)), claims: 1 },
            ]
        );
    }

    #[test]
    fn test_top_three_months_by_claim_volume() {
        assert_eq!(
            engine().top_three_months_by_claim_volume(),
            vec!["April 2023", "November 2022", "February 2023"]
        );
    }
}

// ============================================================================
// Open Claims Tests
// ============================================================================

mod open_claims_tests {
    use super::*;

    #[test]
    fn test_counts_open_claims_at_or_above_floor() {
        let engine = engine();
        assert_eq!(engine.open_claims_for_agent_and_severity(AgentId::new(1), 1), OpenClaims::Count(2));
        assert_eq!(engine.open_claims_for_agent_and_severity(AgentId::new(1), 5), OpenClaims::Count(1));
        assert_eq!(engine.open_claims_for_agent_and_severity(AgentId::new(1), 8), OpenClaims::Count(1));
        assert_eq!(engine.open_claims_for_agent_and_severity(AgentId::new(1), 9), OpenClaims::Count(0));
    }

    #[test]
    fn test_non_closed_labels_count_as_open() {
        // "Received" and "Open"
        assert_eq!(
            engine().open_claims_for_agent_and_severity(AgentId::new(2), 3),
            OpenClaims::Count(2)
        );
    }

    #[test]
    fn test_only_closed_claims_yield_zero() {
        assert_eq!(
            engine().open_claims_for_agent_and_severity(AgentId::new(4), 1),
            OpenClaims::Count(0)
        );
    }

    #[test]
    fn test_severity_out_of_range() {
        let engine = engine();
        assert_eq!(
            engine.open_claims_for_agent_and_severity(AgentId::new(1), 0),
            OpenClaims::SeverityOutOfRange
        );
        assert_eq!(
            engine.open_claims_for_agent_and_severity(AgentId::new(1), 11),
            OpenClaims::SeverityOutOfRange
        );
        // Checked before the agent lookup
        assert_eq!(
            engine.open_claims_for_agent_and_severity(AgentId::new(99), -3),
            OpenClaims::SeverityOutOfRange
        );
    }

    #[test]
    fn test_no_claims_for_idle_or_unknown_agent() {
        let engine = engine();
        assert_eq!(engine.open_claims_for_agent_and_severity(AgentId::new(5), 1), OpenClaims::NoClaims);
        assert_eq!(engine.open_claims_for_agent_and_severity(AgentId::new(99), 1), OpenClaims::NoClaims);
    }

    #[test]
    fn test_sentinel_values() {
        assert_eq!(OpenClaims::SeverityOutOfRange.value(), Some(-1));
        assert_eq!(OpenClaims::NoClaims.value(), None);
        assert_eq!(OpenClaims::Count(4).value(), Some(4));
        assert_eq!(serde_json::to_string(&OpenClaims::SeverityOutOfRange).unwrap(), "-1");
        assert_eq!(serde_json::to_string(&OpenClaims::NoClaims).unwrap(), "null");
        assert_eq!(serde_json::to_string(&OpenClaims::Count(0)).unwrap(), "0");
    }
}

// ============================================================================
// Density Tests
// ============================================================================

mod density_tests {
    use super::*;

    #[test]
    fn test_disaster_claim_density() {
        let engine = engine();
        assert_density_eq(engine.disaster_claim_density(DisasterId::new(1)), Some(0.01273));
        assert_density_eq(engine.disaster_claim_density(DisasterId::new(2)), Some(0.02546));
        assert_density_eq(engine.disaster_claim_density(DisasterId::new(3)), Some(0.0008));
        assert_density_eq(engine.disaster_claim_density(DisasterId::new(5)), Some(0.31831));
    }

    #[test]
    fn test_density_zero_without_claims() {
        assert_density_eq(engine().disaster_claim_density(DisasterId::new(4)), Some(0.0));
    }

    #[test]
    fn test_density_absent_for_unknown_disaster() {
        assert_eq!(engine().disaster_claim_density(DisasterId::new(99)), None);
        assert_eq!(engine().disaster_claim_density(DisasterId::new(0)), None);
    }
}

// ============================================================================
// Lookup and Filter Tests
// ============================================================================

mod lookup_tests {
    use super::*;

    #[test]
    fn test_positional_lookups() {
        let engine = engine();
        assert_eq!(engine.agent(AgentId::new(3)).map(|a| a.last_name.as_str()), Some("Haddad"));
        assert_eq!(engine.claim_handler(ClaimHandlerId::new(2)).map(|h| h.full_name()), Some("Paul Okafor".to_string()));
        assert_eq!(engine.claim(ClaimId::new(8)).map(|c| c.estimate_cost), Some(dec!(999.99)));
        assert_eq!(engine.disaster(DisasterId::new(4)).map(|d| d.state.as_str()), Some("Alaska"));
        assert!(engine.agent(AgentId::new(0)).is_none());
        assert!(engine.claim(ClaimId::new(9)).is_none());
    }

    #[test]
    fn test_empty_filters_match_everything() {
        let engine = engine();
        assert_eq!(engine.find_agents(&AgentFilter::default()).len(), 6);
        assert_eq!(engine.find_claim_handlers(&ClaimHandlerFilter::default()).len(), 3);
        assert_eq!(engine.find_claims(&ClaimFilter::default()).len(), 8);
        assert_eq!(engine.find_disasters(&DisasterFilter::default()).len(), 5);
    }

    #[test]
    fn test_agent_filter() {
        let engine = engine();

        let texans = engine.find_agents(&AgentFilter {
            state: Some("texas".to_string()),
            ..Default::default()
        });
        assert_eq!(texans.iter().map(|a| a.id.get()).collect::<Vec<_>>(), vec![1, 2]);

        let southern = engine.find_agents(&AgentFilter {
            region: Some(Region::South),
            ..Default::default()
        });
        assert_eq!(southern.len(), 4);

        let spanish_second = engine.find_agents(&AgentFilter {
            secondary_language: Some("Spanish".to_string()),
            ..Default::default()
        });
        assert_eq!(spanish_second.iter().map(|a| a.id.get()).collect::<Vec<_>>(), vec![1, 4]);
    }

    #[test]
    fn test_claim_filter() {
        let engine = engine();

        let closed = engine.find_claims(&ClaimFilter {
            status: Some("closed".to_string()),
            ..Default::default()
        });
        assert_eq!(closed.len(), 3);

        let fire_for_handler = engine.find_claims(&ClaimFilter {
            claim_type: Some("Fire".to_string()),
            claim_handler_assigned_id: Some(ClaimHandlerId::new(2)),
            ..Default::default()
        });
        assert_eq!(fire_for_handler.iter().map(|c| c.id.get()).collect::<Vec<_>>(), vec![5]);

        let worst = engine.find_claims(&ClaimFilter {
            severity_rating: Some(10),
            ..Default::default()
        });
        assert_eq!(worst.iter().map(|c| c.id.get()).collect::<Vec<_>>(), vec![8]);
    }

    #[test]
    fn test_claim_handler_and_disaster_filters() {
        let engine = engine();

        let handlers = engine.find_claim_handlers(&ClaimHandlerFilter {
            last_name: Some(" okafor ".to_string()),
            ..Default::default()
        });
        assert_eq!(handlers.len(), 1);

        let disasters = engine.find_disasters(&DisasterFilter {
            state: Some("California".to_string()),
            ..Default::default()
        });
        assert_eq!(disasters.iter().map(|d| d.id.get()).collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_filter_deserializes_from_query_fields() {
        let filter: ClaimFilter = serde_json::from_value(serde_json::json!({
            "type": "Flood",
            "agent_assigned_id": 1
        }))
        .unwrap();

        let claims = engine().find_claims(&filter);
        assert_eq!(claims.iter().map(|c| c.id.get()).collect::<Vec<_>>(), vec![1, 2, 7]);
    }
}
