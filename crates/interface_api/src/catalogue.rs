//! Static description of the analytical queries the API serves

use serde::Serialize;

/// Where a query parameter is read from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterLocation {
    Path,
    Query,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterKind {
    Integer,
    String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QueryParameter {
    pub name: &'static str,
    pub location: ParameterLocation,
    pub kind: ParameterKind,
}

/// One published query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QueryDescriptor {
    pub name: &'static str,
    /// Route under `/api/v1`, with `:name` path placeholders
    pub route: &'static str,
    pub description: &'static str,
    pub parameters: &'static [QueryParameter],
}

const HANDLER_ID: QueryParameter = QueryParameter {
    name: "id",
    location: ParameterLocation::Path,
    kind: ParameterKind::Integer,
};

const AGENT_ID: QueryParameter = HANDLER_ID;
const DISASTER_ID: QueryParameter = HANDLER_ID;

const STATE: QueryParameter = QueryParameter {
    name: "state",
    location: ParameterLocation::Path,
    kind: ParameterKind::String,
};

const MIN_SEVERITY: QueryParameter = QueryParameter {
    name: "min_severity",
    location: ParameterLocation::Query,
    kind: ParameterKind::Integer,
};

pub const QUERY_CATALOGUE: &[QueryDescriptor] = &[
    QueryDescriptor {
        name: "count_closed_claims",
        route: "/claims/closed/count",
        description: "Number of claims whose status is Closed",
        parameters: &[],
    },
    QueryDescriptor {
        name: "count_claims_for_handler",
        route: "/claim-handlers/:id/claims/count",
        description: "Number of claims assigned to a claim handler",
        parameters: &[HANDLER_ID],
    },
    QueryDescriptor {
        name: "average_claim_cost_for_handler",
        route: "/claim-handlers/:id/claims/average-cost",
        description: "Mean estimated cost of a claim handler's claims",
        parameters: &[HANDLER_ID],
    },
    QueryDescriptor {
        name: "count_disasters_for_state",
        route: "/states/:state/disasters/count",
        description: "Number of disasters in a state",
        parameters: &[STATE],
    },
    QueryDescriptor {
        name: "state_with_most_disasters",
        route: "/states/most-disasters",
        description: "State with the most disasters",
        parameters: &[],
    },
    QueryDescriptor {
        name: "state_with_least_disasters",
        route: "/states/least-disasters",
        description: "State with the fewest disasters",
        parameters: &[],
    },
    QueryDescriptor {
        name: "most_spoken_agent_language_by_state",
        route: "/states/:state/agent-language",
        description: "Most common non-English language among a state's agents",
        parameters: &[STATE],
    },
    QueryDescriptor {
        name: "open_claims_for_agent_and_severity",
        route: "/agents/:id/open-claims",
        description: "Open claims for an agent at or above a minimum severity; -1 for an invalid severity",
        parameters: &[AGENT_ID, MIN_SEVERITY],
    },
    QueryDescriptor {
        name: "agent_total_claim_costs",
        route: "/agents/claim-costs",
        description: "Total claim cost per agent",
        parameters: &[],
    },
    QueryDescriptor {
        name: "disasters_declared_after_end_date",
        route: "/disasters/declared-after-end/count",
        description: "Number of disasters declared after they ended",
        parameters: &[],
    },
    QueryDescriptor {
        name: "total_claim_cost_for_disaster",
        route: "/disasters/:id/claims/total-cost",
        description: "Total estimated cost of a disaster's claims",
        parameters: &[DISASTER_ID],
    },
    QueryDescriptor {
        name: "disaster_claim_density",
        route: "/disasters/:id/claims/density",
        description: "Claims per square mile of a disaster's impact area",
        parameters: &[DISASTER_ID],
    },
    QueryDescriptor {
        name: "top_three_months_by_claim_volume",
        route: "/claims/top-months",
        description: "The three months with the most claims",
        parameters: &[],
    },
];

/// Looks up a query by name
pub fn find_query(name: &str) -> Option<&'static QueryDescriptor> {
    QUERY_CATALOGUE.iter().find(|query| query.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalogue_has_thirteen_unique_queries() {
        assert_eq!(QUERY_CATALOGUE.len(), 13);

        let names: HashSet<_> = QUERY_CATALOGUE.iter().map(|q| q.name).collect();
        let routes: HashSet<_> = QUERY_CATALOGUE.iter().map(|q| q.route).collect();
        assert_eq!(names.len(), 13);
        assert_eq!(routes.len(), 13);
    }

    #[test]
    fn test_path_parameters_appear_in_route() {
        for query in QUERY_CATALOGUE {
            for parameter in query.parameters.iter().filter(|p| p.location == ParameterLocation::Path) {
                assert!(
                    query.route.contains(&format!(":{}", parameter.name)),
                    "{} is missing :{}",
                    query.route,
                    parameter.name
                );
            }
        }
    }

    #[test]
    fn test_find_query() {
        let query = find_query("open_claims_for_agent_and_severity").unwrap();
        assert_eq!(query.parameters.len(), 2);
        assert!(find_query("drop_tables").is_none());
    }
}
