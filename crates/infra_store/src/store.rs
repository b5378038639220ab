//! JSON file store
//!
//! The data directory holds one file per collection. File names default to
//! the published dataset names and can be overridden for fixtures.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tracing::{debug, info};

use domain_analytics::Dataset;
use domain_claims::{Claim, Disaster};
use domain_party::{Agent, ClaimHandler};

use crate::error::StoreError;

pub const AGENTS_FILE: &str = "sfcc_2023_agents.json";
pub const CLAIM_HANDLERS_FILE: &str = "sfcc_2023_claim_handlers.json";
pub const CLAIMS_FILE: &str = "sfcc_2023_claims.json";
pub const DISASTERS_FILE: &str = "sfcc_2023_disasters.json";

/// Where the four collections live
///
/// # Example
///
/// ```rust
/// use infra_store::StoreConfig;
///
/// let config = StoreConfig::new("data").claims_file("claims_fixture.json");
/// assert!(config.claims_path().ends_with("claims_fixture.json"));
/// ```
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Directory containing the data files
    pub data_dir: PathBuf,
    pub agents_file: String,
    pub claim_handlers_file: String,
    pub claims_file: String,
    pub disasters_file: String,
}

impl StoreConfig {
    /// Creates a configuration using the default file names
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            agents_file: AGENTS_FILE.to_string(),
            claim_handlers_file: CLAIM_HANDLERS_FILE.to_string(),
            claims_file: CLAIMS_FILE.to_string(),
            disasters_file: DISASTERS_FILE.to_string(),
        }
    }

    pub fn agents_file(mut self, name: impl Into<String>) -> Self {
        self.agents_file = name.into();
        self
    }

    pub fn claim_handlers_file(mut self, name: impl Into<String>) -> Self {
        self.claim_handlers_file = name.into();
        self
    }

    pub fn claims_file(mut self, name: impl Into<String>) -> Self {
        self.claims_file = name.into();
        self
    }

    pub fn disasters_file(mut self, name: impl Into<String>) -> Self {
        self.disasters_file = name.into();
        self
    }

    pub fn agents_path(&self) -> PathBuf {
        self.data_dir.join(&self.agents_file)
    }

    pub fn claim_handlers_path(&self) -> PathBuf {
        self.data_dir.join(&self.claim_handlers_file)
    }

    pub fn claims_path(&self) -> PathBuf {
        self.data_dir.join(&self.claims_file)
    }

    pub fn disasters_path(&self) -> PathBuf {
        self.data_dir.join(&self.disasters_file)
    }
}

/// Loads the dataset from a directory of JSON files
#[derive(Debug, Clone)]
pub struct JsonStore {
    config: StoreConfig,
}

impl JsonStore {
    /// Opens a store over a directory with the default file names
    ///
    /// # Errors
    ///
    /// Returns `MissingDirectory` if `data_dir` is not a directory
    pub fn open(data_dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        Self::with_config(StoreConfig::new(data_dir))
    }

    pub fn with_config(config: StoreConfig) -> Result<Self, StoreError> {
        if !config.data_dir.is_dir() {
            return Err(StoreError::MissingDirectory(config.data_dir));
        }
        Ok(Self { config })
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Reads all four files and validates them into a [`Dataset`]
    pub fn load(&self) -> Result<Dataset, StoreError> {
        info!(data_dir = %self.config.data_dir.display(), "Loading dataset");

        let agents: Vec<Agent> = read_collection(&self.config.agents_path())?;
        let claim_handlers: Vec<ClaimHandler> = read_collection(&self.config.claim_handlers_path())?;
        let claims: Vec<Claim> = read_collection(&self.config.claims_path())?;
        let disasters: Vec<Disaster> = read_collection(&self.config.disasters_path())?;

        let dataset = Dataset::new(agents, claim_handlers, claims, disasters)?;
        let summary = dataset.summary();

        info!(
            agents = summary.agents,
            claim_handlers = summary.claim_handlers,
            claims = summary.claims,
            disasters = summary.disasters,
            "Dataset loaded"
        );
        Ok(dataset)
    }
}

/// Parses one JSON array of records
fn read_collection<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, StoreError> {
    debug!(path = %path.display(), "Reading collection");

    let file = File::open(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_reader(BufReader::new(file)).map_err(|source| StoreError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
