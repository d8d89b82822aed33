//! # Advertiser
//!
use std::collections::HashMap;

pub type AdvertiserId = u32;

/// An Advertiser bids on keywords and pays for every query it wins
/// out of a remaining `budget`. Within one auction run the budget only
/// goes down; it is reset by building a fresh catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Advertiser {
  pub id: AdvertiserId,
  pub budget: f64,
  pub bids: HashMap<String, f64>,
}

impl Advertiser {
  pub fn new(id: AdvertiserId, budget: f64) -> Self {
    Self {
      id,
      budget,
      bids: HashMap::new(),
    }
  }

  /// Returns the bid placed on `keyword`, if any
  pub fn bid(&self, keyword: &str) -> Option<f64> {
    self.bids.get(keyword).copied()
  }

  /// True if the remaining budget covers `bid`
  pub fn can_afford(&self, bid: f64) -> bool {
    self.budget >= bid
  }

  /// Returns the fraction of `initial_budget` already spent, in [0, 1].
  /// An advertiser that started with nothing counts as fully spent.
  pub fn fraction_spent(&self, initial_budget: f64) -> f64 {
    if initial_budget <= 0.0 {
      return 1.0;
    }
    let spent = (initial_budget - self.budget) / initial_budget;
    spent.max(0.0).min(1.0)
  }
}
