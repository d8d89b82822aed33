//! # Run report
use crate::policy::PolicyKind;
use crate::simulation::Evaluation;
use std::fmt;

/// The outcome of one command line run: revenue of a single pass over the
/// queries in file order, and the competitive ratio over shuffled trials
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
  pub policy: PolicyKind,
  pub revenue: f64,
  pub competitive_ratio: f64,
  pub seed: u64,
  /// Trial statistics behind `competitive_ratio`
  pub evaluation: Evaluation,
}

impl Report {
  pub fn new(policy: PolicyKind, revenue: f64, evaluation: Evaluation, seed: u64) -> Self {
    Self {
      policy,
      revenue,
      competitive_ratio: evaluation.competitive_ratio(),
      seed,
      evaluation,
    }
  }

  pub fn to_json(&self) -> serde_json::Result<String> {
    serde_json::to_string_pretty(self)
  }
}

impl fmt::Display for Report {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "{:.2}", self.revenue)?;
    write!(f, "{:.2}", self.competitive_ratio)
  }
}

#[cfg(test)]
mod tests {
  use crate::policy::PolicyKind;
  use crate::report::*;

  fn report() -> Report {
    let evaluation = Evaluation {
      trials: 100,
      mean_revenue: 16000.0,
      min_revenue: 15500.0,
      max_revenue: 16400.0,
      total_initial_budget: 20000.0,
    };
    Report::new(PolicyKind::Balance, 16731.8, evaluation, 0)
  }

  #[test]
  fn prints_two_fixed_decimals() {
    assert_eq!(report().to_string(), "16731.80\n0.80");
  }

  #[test]
  fn json_carries_the_evaluation() {
    let json = report().to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["policy"], "balance");
    assert_eq!(value["competitive_ratio"], 0.8);
    assert_eq!(value["evaluation"]["trials"], 100);
    assert_eq!(value["evaluation"]["min_revenue"], 15500.0);
  }
}
