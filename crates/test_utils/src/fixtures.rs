//! Pre-built Test Fixtures
//!
//! A small dataset whose query answers are worked out by hand. Tests that
//! check an aggregate against a literal should use [`DatasetFixtures`] so the
//! expected values stay in one place.
//!
//! | Disaster | State      | Declared   | Claims        |
//! |----------|------------|------------|---------------|
//! | 1        | California | 2023-04-05 | 1, 2, 3, 8    |
//! | 2        | California | 2022-11-10 | 4, 5          |
//! | 3        | Texas      | 2023-02-15 | 6             |
//! | 4        | Alaska     | 2023-01-07 | none          |
//! | 5        | Texas      | 2022-11-18 | 7             |

use std::fs;
use std::io;
use std::path::Path;

use once_cell::sync::Lazy;
use rust_decimal_macros::dec;

use core_kernel::ClaimHandlerId;
use domain_analytics::Dataset;
use domain_claims::{Claim, Disaster};
use domain_party::{Agent, ClaimHandler};

use crate::builders::{date, AgentBuilder, ClaimBuilder, DisasterBuilder};

static SMALL_DATASET: Lazy<Dataset> = Lazy::new(|| {
    Dataset::new(
        DatasetFixtures::agents(),
        DatasetFixtures::claim_handlers(),
        DatasetFixtures::claims(),
        DatasetFixtures::disasters(),
    )
    .unwrap_or_else(|err| panic!("fixture dataset is invalid: {err}"))
});

/// The shared fixture dataset
pub fn small_dataset() -> &'static Dataset {
    &SMALL_DATASET
}

/// Fixture records
pub struct DatasetFixtures;

impl DatasetFixtures {
    pub fn agents() -> Vec<Agent> {
        vec![
            AgentBuilder::new(1)
                .with_name("Maria", "Lopez")
                .with_state("Texas")
                .with_secondary_language("Spanish")
                .with_years_active(12)
                .build(),
            AgentBuilder::new(2)
                .with_name("Diego", "Ramos")
                .with_state("Texas")
                .with_primary_language("Spanish")
                .build(),
            AgentBuilder::new(3)
                .with_name("Omar", "Haddad")
                .with_state("New Hampshire")
                .with_secondary_language("Arabic")
                .build(),
            AgentBuilder::new(4)
                .with_name("Claire", "Dubois")
                .with_state("Florida")
                .with_primary_language("French")
                .with_secondary_language("Spanish")
                .build(),
            AgentBuilder::new(5)
                .with_name("Lucia", "Ortiz")
                .with_state("Florida")
                .with_primary_language("Spanish")
                .with_secondary_language("English")
                .build(),
            AgentBuilder::new(6)
                .with_name("Hank", "Miller")
                .with_state("Alaska")
                .with_years_active(30)
                .build(),
        ]
    }

    pub fn claim_handlers() -> Vec<ClaimHandler> {
        vec![
            ClaimHandler::new(ClaimHandlerId::new(1), "Linh", "Nguyen"),
            ClaimHandler::new(ClaimHandlerId::new(2), "Paul", "Okafor"),
            ClaimHandler::new(ClaimHandlerId::new(3), "Greta", "Olsen"),
        ]
    }

    pub fn claims() -> Vec<Claim> {
        vec![
            ClaimBuilder::new(1).for_disaster(1).closed().with_severity(5)
                .with_cost(dec!(1000.10)).assigned_to(1, 1).build(),
            ClaimBuilder::new(2).for_disaster(1).with_status("Open").with_severity(8)
                .with_cost(dec!(2500.25)).assigned_to(1, 1).total_loss().build(),
            ClaimBuilder::new(3).for_disaster(1).with_status("Received").with_severity(3)
                .with_cost(dec!(500.00)).assigned_to(2, 2).build(),
            ClaimBuilder::new(4).for_disaster(2).with_status("Open").with_severity(9)
                .with_cost(dec!(12000.00)).assigned_to(2, 1).with_type("Fire").loss_of_life().build(),
            ClaimBuilder::new(5).for_disaster(2).closed().with_severity(2)
                .with_cost(dec!(300.33)).assigned_to(3, 2).with_type("Fire").build(),
            ClaimBuilder::new(6).for_disaster(3).with_status("In Review").with_severity(7)
                .with_cost(dec!(4200.50)).assigned_to(3, 2).with_type("Wind").build(),
            ClaimBuilder::new(7).for_disaster(5).with_status("Open").with_severity(4)
                .with_cost(dec!(150.00)).assigned_to(1, 2).build(),
            ClaimBuilder::new(8).for_disaster(1).closed().with_severity(10)
                .with_cost(dec!(999.99)).assigned_to(4, 1).build(),
        ]
    }

    pub fn disasters() -> Vec<Disaster> {
        vec![
            DisasterBuilder::new(1)
                .in_state("California")
                .with_type("Flood")
                .named("Sierra Snowmelt Flood")
                .between(date(2023, 3, 20), date(2023, 4, 2))
                .declared_on(date(2023, 4, 5))
                .with_radius(10.0)
                .build(),
            DisasterBuilder::new(2)
                .in_state("California")
                .named("Ridge Fire")
                .between(date(2022, 11, 1), date(2022, 11, 20))
                .declared_on(date(2022, 11, 10))
                .with_radius(5.0)
                .build(),
            DisasterBuilder::new(3)
                .in_state("Texas")
                .with_type("Tornado")
                .named("Panhandle Tornado")
                .between(date(2023, 2, 1), date(2023, 2, 10))
                .declared_on(date(2023, 2, 15))
                .located_at(35.22, -101.83)
                .with_radius(20.0)
                .build(),
            DisasterBuilder::new(4)
                .in_state("Alaska")
                .with_type("Earthquake")
                .named("Kenai Quake")
                .between(date(2023, 1, 5), date(2023, 1, 30))
                .declared_on(date(2023, 1, 7))
                .located_at(60.55, -151.26)
                .with_radius(2.0)
                .build(),
            DisasterBuilder::new(5)
                .in_state("Texas")
                .with_type("Hurricane")
                .named("Hurricane Ana")
                .between(date(2022, 11, 15), date(2022, 12, 1))
                .declared_on(date(2022, 11, 18))
                .located_at(29.76, -95.36)
                .with_radius(1.0)
                .build(),
        ]
    }

    /// Writes the fixture records as the four JSON files the store reads
    pub fn write_json_files(dir: &Path) -> io::Result<()> {
        write_json(&dir.join("sfcc_2023_agents.json"), &Self::agents())?;
        write_json(&dir.join("sfcc_2023_claim_handlers.json"), &Self::claim_handlers())?;
        write_json(&dir.join("sfcc_2023_claims.json"), &Self::claims())?;
        write_json(&dir.join("sfcc_2023_disasters.json"), &Self::disasters())
    }
}

fn write_json<T: serde::Serialize>(path: &Path, records: &[T]) -> io::Result<()> {
    let bytes = serde_json::to_vec_pretty(records).map_err(io::Error::other)?;
    fs::write(path, bytes)
}
