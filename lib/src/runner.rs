//! # Auction runner
//!
//! Replays a query sequence against a catalog, one query at a time, in the
//! order given. All budget changes land on the catalog passed in.
use crate::advertiser::AdvertiserId;
use crate::catalog::BidCatalog;
use crate::eligibility::has_sufficient_budget;
use crate::policy::{Allocation, Policy};
use std::collections::BTreeMap;

#[derive(Debug, Default, Clone, PartialEq)]
pub struct AuctionRun {
  pub revenue: f64,
  /// Queries that were awarded to an advertiser
  pub allocations: usize,
  /// Queries whose bidders could no longer pay
  pub unserved: usize,
  /// Queries for keywords nobody bids on
  pub missing_keywords: usize,
  /// Amount charged to each advertiser that won at least once
  pub spend: BTreeMap<AdvertiserId, f64>,
}

/// Returns the total revenue of offering every query in `queries` to `policy`
pub fn run<P: Policy + ?Sized, S: AsRef<str>>(
  queries: &[S],
  catalog: &mut BidCatalog,
  policy: &P,
) -> f64 {
  run_detailed(queries, catalog, policy).revenue
}

pub fn run_detailed<P: Policy + ?Sized, S: AsRef<str>>(
  queries: &[S],
  catalog: &mut BidCatalog,
  policy: &P,
) -> AuctionRun {
  let mut result = AuctionRun::default();
  for query in queries {
    let query = query.as_ref();
    if catalog.bidders(query).is_err() {
      debug!("No bidders for query \"{}\"", query);
      result.missing_keywords += 1;
      continue;
    }
    if !has_sufficient_budget(catalog, query) {
      result.unserved += 1;
      continue;
    }
    match policy.allocate(catalog, query) {
      Allocation::Won { advertiser, bid } => {
        result.revenue += bid;
        result.allocations += 1;
        *result.spend.entry(advertiser).or_insert(0.0) += bid;
      }
      Allocation::NoWinner => result.unserved += 1,
    }
  }
  result
}
