use crate::advertiser::Advertiser;
use crate::policy::Policy;

/// Greedy awards each query to the highest affordable bid,
/// ignoring how much budget the bidder has left
#[derive(Debug, Default, Clone, Copy)]
pub struct Greedy;

impl Policy for Greedy {
  fn name(&self) -> &'static str {
    "greedy"
  }

  fn score(&self, _advertiser: &Advertiser, _initial_budget: f64, bid: f64) -> f64 {
    bid
  }
}
