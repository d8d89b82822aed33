use crate::advertiser::Advertiser;
use crate::error::Error;
use crate::policy::{Balance, Greedy, Msvv, Policy};
use std::fmt;
use std::str::FromStr;

/// Names one of the built-in policies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyKind {
  Greedy,
  Msvv,
  Balance,
}

impl PolicyKind {
  pub fn all() -> [PolicyKind; 3] {
    [PolicyKind::Greedy, PolicyKind::Msvv, PolicyKind::Balance]
  }
}

impl Policy for PolicyKind {
  fn name(&self) -> &'static str {
    match self {
      Self::Greedy => Greedy.name(),
      Self::Msvv => Msvv.name(),
      Self::Balance => Balance.name(),
    }
  }

  fn score(&self, advertiser: &Advertiser, initial_budget: f64, bid: f64) -> f64 {
    match self {
      Self::Greedy => Greedy.score(advertiser, initial_budget, bid),
      Self::Msvv => Msvv.score(advertiser, initial_budget, bid),
      Self::Balance => Balance.score(advertiser, initial_budget, bid),
    }
  }
}

impl FromStr for PolicyKind {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "greedy" => Ok(Self::Greedy),
      "msvv" => Ok(Self::Msvv),
      "balance" => Ok(Self::Balance),
      _ => Err(Error::UnknownPolicy(s.to_string())),
    }
  }
}

impl fmt::Display for PolicyKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

#[cfg(test)]
mod tests {
  use crate::policy::*;

  #[test]
  fn parses_known_names() {
    for kind in PolicyKind::all().iter() {
      assert_eq!(kind.to_string().parse::<PolicyKind>().unwrap(), *kind);
    }
  }

  #[test]
  fn rejects_unknown_names() {
    assert!("Greedy".parse::<PolicyKind>().is_err());
    assert!("optimal".parse::<PolicyKind>().is_err());
  }

  #[test]
  fn serializes_lowercase() {
    let json = serde_json::to_string(&PolicyKind::Msvv).unwrap();
    assert_eq!(json, "\"msvv\"");
  }
}
