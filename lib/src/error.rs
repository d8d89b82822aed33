//! # Error types shared by the loader, the catalog, and the evaluator
use std::error;
use std::fmt;
use std::io;

#[derive(Debug)]
pub enum Error {
  Io(io::Error),
  Csv(csv::Error),
  Json(serde_json::Error),
  /// A bid row could not be turned into catalog data. `row` is 1-based
  /// and does not count the header line.
  Load { row: usize, reason: String },
  /// A query keyword that no advertiser bids on
  MissingKeyword(String),
  UnknownPolicy(String),
  /// A configuration value that could not be parsed
  Config(String),
  NoTrials,
  /// The catalog's total initial budget is zero, so no ratio can be formed
  EmptyBudget,
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
  pub fn load<S: Into<String>>(row: usize, reason: S) -> Self {
    Self::Load {
      row,
      reason: reason.into(),
    }
  }
}

impl fmt::Display for Error {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Io(e) => write!(f, "io error: {}", e),
      Self::Csv(e) => write!(f, "csv error: {}", e),
      Self::Json(e) => write!(f, "json error: {}", e),
      Self::Load { row, reason } => write!(f, "bad bid row {}: {}", row, reason),
      Self::MissingKeyword(k) => write!(f, "no advertiser bids on keyword \"{}\"", k),
      Self::UnknownPolicy(p) => write!(
        f,
        "unknown policy \"{}\", expected one of greedy, msvv, balance",
        p
      ),
      Self::Config(msg) => write!(f, "bad configuration: {}", msg),
      Self::NoTrials => write!(f, "at least one trial is required"),
      Self::EmptyBudget => write!(f, "total initial budget is zero"),
    }
  }
}

impl error::Error for Error {
  fn source(&self) -> Option<&(dyn error::Error + 'static)> {
    match self {
      Self::Io(e) => Some(e),
      Self::Csv(e) => Some(e),
      Self::Json(e) => Some(e),
      _ => None,
    }
  }
}

impl From<io::Error> for Error {
  fn from(error: io::Error) -> Self {
    Self::Io(error)
  }
}

impl From<csv::Error> for Error {
  fn from(error: csv::Error) -> Self {
    Self::Csv(error)
  }
}

impl From<serde_json::Error> for Error {
  fn from(error: serde_json::Error) -> Self {
    Self::Json(error)
  }
}

#[cfg(test)]
mod tests {
  use crate::error::*;

  #[test]
  fn load_error_names_the_row() {
    let e = Error::load(3, "missing Bid Value");
    assert_eq!(e.to_string(), "bad bid row 3: missing Bid Value");
  }

  #[test]
  fn io_errors_keep_their_source() {
    let e: Error = io::Error::new(io::ErrorKind::NotFound, "gone").into();
    assert!(error::Error::source(&e).is_some());
  }
}
