use crate::advertiser::Advertiser;
use crate::policy::Policy;

/// Returns the MSVV trade-off `1 - e^(x - 1)` for a spent fraction `x`.
/// Falls from `1 - 1/e` at `x = 0` to `0` at `x = 1`.
pub fn psi(fraction_spent: f64) -> f64 {
  1.0 - (fraction_spent - 1.0).exp()
}

/// MSVV scales each bid by how much of the bidder's budget is still
/// unspent, interpolating between Greedy and Balance
#[derive(Debug, Default, Clone, Copy)]
pub struct Msvv;

impl Policy for Msvv {
  fn name(&self) -> &'static str {
    "msvv"
  }

  fn score(&self, advertiser: &Advertiser, initial_budget: f64, bid: f64) -> f64 {
    bid * psi(advertiser.fraction_spent(initial_budget))
  }
}
