use crate::advertiser::{Advertiser, AdvertiserId};
use crate::catalog::BidCatalog;

/// The outcome of offering one query to a policy
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Allocation {
  Won { advertiser: AdvertiserId, bid: f64 },
  /// Nobody bidding on the query could pay for it
  NoWinner,
}

impl Allocation {
  pub fn revenue(&self) -> f64 {
    match self {
      Self::Won { bid, .. } => *bid,
      Self::NoWinner => 0.0,
    }
  }

  pub fn winner(&self) -> Option<AdvertiserId> {
    match self {
      Self::Won { advertiser, .. } => Some(*advertiser),
      Self::NoWinner => None,
    }
  }
}

/// The base trait for any allocation policy
///
/// A policy ranks the advertisers that can afford their bid on a query.
/// The highest `score` wins; on a tie the advertiser seen first, i.e. the
/// one with the lowest id, keeps the win.
pub trait Policy {
  fn name(&self) -> &'static str;

  /// Returns the ranking value of `advertiser` bidding `bid`
  ///
  /// # Arguments
  ///
  /// * `advertiser` - The candidate, with its current remaining budget
  /// * `initial_budget` - The candidate's budget at the start of the run
  /// * `bid` - The candidate's bid on the query, already known to be affordable
  fn score(&self, advertiser: &Advertiser, initial_budget: f64, bid: f64) -> f64;

  /// Returns the winner for `keyword` without touching the catalog
  fn select(&self, catalog: &BidCatalog, keyword: &str) -> Allocation {
    let bidders = match catalog.bidders(keyword) {
      Ok(bidders) => bidders,
      Err(_) => return Allocation::NoWinner,
    };
    let mut best: Option<(AdvertiserId, f64, f64)> = None;
    for &id in bidders {
      let advertiser = match catalog.advertiser(id) {
        Some(advertiser) => advertiser,
        None => continue,
      };
      let bid = match advertiser.bid(keyword) {
        Some(bid) if advertiser.can_afford(bid) => bid,
        _ => continue,
      };
      let initial_budget = catalog.initial_budget(id).unwrap_or(advertiser.budget);
      let score = self.score(advertiser, initial_budget, bid);
      match best {
        // Strictly greater, so the first advertiser to reach the max keeps it
        Some((_, _, best_score)) if score <= best_score => {}
        _ => best = Some((id, bid, score)),
      }
    }
    match best {
      Some((advertiser, bid, _)) => Allocation::Won { advertiser, bid },
      None => Allocation::NoWinner,
    }
  }

  /// Selects the winner for `keyword` and charges it its bid.
  /// `NoWinner` leaves every budget unchanged.
  fn allocate(&self, catalog: &mut BidCatalog, keyword: &str) -> Allocation {
    let allocation = self.select(catalog, keyword);
    if let Allocation::Won { advertiser, bid } = allocation {
      if !catalog.debit(advertiser, bid) {
        return Allocation::NoWinner;
      }
    }
    allocation
  }
}
