//! Comprehensive tests for domain_party

use core_kernel::{AgentId, ClaimHandlerId};

use domain_party::agent::Agent;
use domain_party::claim_handler::ClaimHandler;
use domain_party::region::Region;
use domain_party::validation::PartyValidator;
use domain_party::error::PartyError;

fn create_test_agent() -> Agent {
    Agent {
        id: AgentId::new(1),
        first_name: "Maria".to_string(),
        last_name: "Lopez".to_string(),
        state: "Texas".to_string(),
        region: "South".to_string(),
        primary_language: "English".to_string(),
        secondary_language: Some("Spanish".to_string()),
        years_active: 12,
    }
}

// ============================================================================
// Agent Tests
// ============================================================================

mod agent_tests {
    use super::*;

    #[test]
    fn test_agent_full_name() {
        assert_eq!(create_test_agent().full_name(), "Maria Lopez");
    }

    #[test]
    fn test_agent_languages_include_secondary() {
        let agent = create_test_agent();
        let languages: Vec<&str> = agent.languages().collect();
        assert_eq!(languages, vec!["English", "Spanish"]);
        assert!(agent.speaks("Spanish"));
        assert!(!agent.speaks("French"));
    }

    #[test]
    fn test_agent_languages_skip_missing_secondary() {
        let mut agent = create_test_agent();
        agent.secondary_language = None;
        assert_eq!(agent.languages().count(), 1);

        agent.secondary_language = Some("  ".to_string());
        assert_eq!(agent.languages().count(), 1);
    }

    #[test]
    fn test_agent_derived_region() {
        let mut agent = create_test_agent();
        assert_eq!(agent.derived_region(), Some(Region::South));

        agent.state = "Oregon".to_string();
        assert_eq!(agent.derived_region(), Some(Region::West));
    }

    #[test]
    fn test_agent_deserializes_null_secondary_language() {
        let json = r#"{
            "id": 7,
            "first_name": "Sam",
            "last_name": "Lee",
            "state": "Ohio",
            "region": "Midwest",
            "primary_language": "English",
            "secondary_language": null,
            "years_active": 3
        }"#;
        let agent: Agent = serde_json::from_str(json).unwrap();
        assert_eq!(agent.id, AgentId::new(7));
        assert_eq!(agent.secondary_language, None);
    }

    #[test]
    fn test_agent_deserializes_without_region_field() {
        let json = r#"{
            "id": 8,
            "first_name": "Ana",
            "last_name": "Diaz",
            "state": "Florida",
            "primary_language": "Spanish",
            "years_active": 1
        }"#;
        let agent: Agent = serde_json::from_str(json).unwrap();
        assert!(agent.region.is_empty());
        assert_eq!(agent.derived_region(), Some(Region::South));
    }
}

// ============================================================================
// Region Tests
// ============================================================================

mod region_tests {
    use super::*;

    #[test]
    fn test_every_region_lookup() {
        assert_eq!(Region::for_state("Alaska"), Some(Region::West));
        assert_eq!(Region::for_state("Wisconsin"), Some(Region::Midwest));
        assert_eq!(Region::for_state("Georgia"), Some(Region::South));
        assert_eq!(Region::for_state("Maine"), Some(Region::Northeast));
    }

    #[test]
    fn test_state_lookup_is_exact() {
        assert_eq!(Region::for_state("texas"), None);
        assert!(!Region::is_known_state("Puerto Rico"));
    }

    #[test]
    fn test_states_belong_to_one_region_only() {
        for region in Region::ALL {
            for state in region.states() {
                assert_eq!(Region::for_state(state), Some(region), "{state}");
            }
        }
    }

    #[test]
    fn test_region_deserializes_case_insensitively() {
        let region: Region = serde_json::from_str("\"south\"").unwrap();
        assert_eq!(region, Region::South);
        assert!(serde_json::from_str::<Region>("\"Central\"").is_err());
    }

    #[test]
    fn test_unknown_region_error() {
        assert_eq!(
            "Pacific".parse::<Region>(),
            Err(PartyError::UnknownRegion("Pacific".to_string()))
        );
    }
}

// ============================================================================
// Validation Tests
// ============================================================================

mod validation_tests {
    use super::*;

    #[test]
    fn test_valid_agent_passes() {
        let result = PartyValidator::validate_agent(&create_test_agent());
        assert!(result.is_valid);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_unknown_state_is_an_error() {
        let mut agent = create_test_agent();
        agent.state = "Atlantis".to_string();
        let result = PartyValidator::validate_agent(&agent);
        assert!(!result.is_valid);
        assert!(result.errors.iter().any(|e| e.contains("Atlantis")));
    }

    #[test]
    fn test_region_mismatch_is_a_warning() {
        let mut agent = create_test_agent();
        agent.region = "West".to_string();
        let result = PartyValidator::validate_agent(&agent);
        assert!(result.is_valid);
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn test_ensure_agent_reports_id_and_reasons() {
        let mut agent = create_test_agent();
        agent.first_name = String::new();
        agent.primary_language = " ".to_string();

        match PartyValidator::ensure_agent(&agent) {
            Err(PartyError::InvalidAgent { id, reasons }) => {
                assert_eq!(id, 1);
                assert!(reasons.contains("First name"));
                assert!(reasons.contains("Primary language"));
            }
            other => panic!("Expected InvalidAgent, got {other:?}"),
        }
    }

    #[test]
    fn test_claim_handler_requires_names() {
        let handler = ClaimHandler::new(ClaimHandlerId::new(3), "", "Nguyen");
        assert!(matches!(
            PartyValidator::ensure_claim_handler(&handler),
            Err(PartyError::InvalidClaimHandler { id: 3, .. })
        ));

        let handler = ClaimHandler::new(ClaimHandlerId::new(3), "Linh", "Nguyen");
        assert!(PartyValidator::ensure_claim_handler(&handler).is_ok());
        assert_eq!(handler.full_name(), "Linh Nguyen");
    }
}

// ============================================================================
// Property Tests
// ============================================================================

mod property_tests {
    use super::*;
    use proptest::prelude::*;

    fn any_known_state() -> impl Strategy<Value = (Region, &'static str)> {
        let pairs: Vec<(Region, &'static str)> = Region::ALL
            .iter()
            .flat_map(|region| region.states().iter().map(move |state| (*region, *state)))
            .collect();
        prop::sample::select(pairs)
    }

    proptest! {
        #[test]
        fn prop_every_listed_state_maps_back_to_its_region((region, state) in any_known_state()) {
            prop_assert_eq!(Region::for_state(state), Some(region));
        }

        #[test]
        fn prop_region_parse_ignores_case(index in 0usize..4, upper in any::<bool>()) {
            let region = Region::ALL[index];
            let name = if upper { region.name().to_uppercase() } else { region.name().to_lowercase() };
            prop_assert_eq!(name.parse::<Region>().ok(), Some(region));
        }

        #[test]
        fn prop_languages_never_yield_blank_secondary(secondary in "[ ]{0,3}") {
            let mut agent = create_test_agent();
            agent.secondary_language = Some(secondary);
            prop_assert_eq!(agent.languages().count(), 1);
        }
    }
}
