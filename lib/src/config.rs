//! # Run configuration
//!
//! Defaults, overridden by an optional JSON file named by `ADWORDS_CONFIG`,
//! overridden in turn by individual `ADWORDS_*` environment variables.
use crate::error::{Error, Result};
use crate::simulation::EvaluationConfig;
use std::collections::HashMap;
use std::env::{self, VarError};
use std::path::PathBuf;

pub const CONFIG_ENV: &str = "ADWORDS_CONFIG";

/// Every environment variable the configuration reads
pub const ENV_VARS: [&str; 7] = [
  CONFIG_ENV,
  "ADWORDS_BIDDERS",
  "ADWORDS_QUERIES",
  "ADWORDS_TRIALS",
  "ADWORDS_SEED",
  "ADWORDS_PARALLEL",
  "ADWORDS_JSON",
];

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
  /// CSV file of advertiser bids
  pub bidders: PathBuf,
  /// Newline-delimited query keywords
  pub queries: PathBuf,
  pub trials: usize,
  pub seed: u64,
  /// Run the competitive-ratio trials on the rayon thread pool
  pub parallel: bool,
  /// Print the report as JSON instead of two lines
  pub json: bool,
}

impl Default for Config {
  fn default() -> Self {
    let evaluation = EvaluationConfig::default();
    Self {
      bidders: PathBuf::from("bidder_dataset.csv"),
      queries: PathBuf::from("queries.txt"),
      trials: evaluation.trials,
      seed: evaluation.seed,
      parallel: false,
      json: false,
    }
  }
}

impl Config {
  pub fn from_json_str(s: &str) -> Result<Self> {
    Ok(serde_json::from_str(s)?)
  }

  /// Returns the configuration described by the process environment.
  /// Only the `ADWORDS_*` variables are read; other variables may hold
  /// anything, including non-unicode data.
  pub fn from_env() -> Result<Self> {
    let mut vars = HashMap::new();
    for name in ENV_VARS.iter() {
      match env::var(name) {
        Ok(value) => {
          vars.insert(name.to_string(), value);
        }
        Err(VarError::NotPresent) => {}
        Err(VarError::NotUnicode(_)) => {
          return Err(Error::Config(format!("{} is not valid unicode", name)));
        }
      }
    }
    Self::from_vars(&vars)
  }

  /// Returns the configuration described by `vars`, read as environment variables
  pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self> {
    let mut config = match vars.get(CONFIG_ENV) {
      Some(path) => {
        info!("Loading configuration @ {}", path);
        Self::from_json_str(&std::fs::read_to_string(path)?)?
      }
      None => Self::default(),
    };
    if let Some(v) = vars.get("ADWORDS_BIDDERS") {
      config.bidders = PathBuf::from(v);
    }
    if let Some(v) = vars.get("ADWORDS_QUERIES") {
      config.queries = PathBuf::from(v);
    }
    if let Some(v) = vars.get("ADWORDS_TRIALS") {
      config.trials = parse_var("ADWORDS_TRIALS", v)?;
    }
    if let Some(v) = vars.get("ADWORDS_SEED") {
      config.seed = parse_var("ADWORDS_SEED", v)?;
    }
    if let Some(v) = vars.get("ADWORDS_PARALLEL") {
      config.parallel = parse_flag(v);
    }
    if let Some(v) = vars.get("ADWORDS_JSON") {
      config.json = parse_flag(v);
    }
    Ok(config)
  }

  pub fn evaluation(&self) -> EvaluationConfig {
    EvaluationConfig {
      trials: self.trials,
      seed: self.seed,
    }
  }
}

fn parse_var<T: std::str::FromStr>(name: &str, value: &str) -> Result<T> {
  value
    .trim()
    .parse()
    .map_err(|_| Error::Config(format!("{}={} is not a valid value", name, value)))
}

fn parse_flag(value: &str) -> bool {
  match value.trim().to_lowercase().as_str() {
    "1" | "true" | "yes" | "on" => true,
    _ => false,
  }
}
