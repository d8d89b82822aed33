use crate::advertiser::Advertiser;
use crate::policy::Policy;

/// Balance awards each query to the affordable bidder with the most
/// budget left, spreading spend to avoid exhausting anyone early
#[derive(Debug, Default, Clone, Copy)]
pub struct Balance;

impl Policy for Balance {
  fn name(&self) -> &'static str {
    "balance"
  }

  fn score(&self, advertiser: &Advertiser, _initial_budget: f64, _bid: f64) -> f64 {
    advertiser.budget
  }
}

#[cfg(test)]
mod tests {
  use crate::catalog::*;
  use crate::policy::*;

  #[test]
  fn largest_remaining_budget_wins() {
    let mut catalog = BidCatalog::from_rows(vec![
      BidRow::new(1, 100.0, "x", 10.0),
      BidRow::new(2, 50.0, "x", 10.0),
    ])
    .unwrap();
    let winners: Vec<_> = (0..3)
      .map(|_| Balance.allocate(&mut catalog, "x").winner())
      .collect();
    // 100 -> 90 -> 80 -> 70, B never catches up
    assert_eq!(winners, vec![Some(1), Some(1), Some(1)]);
    assert_eq!(catalog.advertiser(1).unwrap().budget, 70.0);
    assert_eq!(catalog.advertiser(2).unwrap().budget, 50.0);
  }

  #[test]
  fn alternates_once_budgets_cross() {
    let mut catalog = BidCatalog::from_rows(vec![
      BidRow::new(1, 30.0, "x", 10.0),
      BidRow::new(2, 25.0, "x", 10.0),
    ])
    .unwrap();
    let winners: Vec<_> = (0..4)
      .map(|_| Balance.allocate(&mut catalog, "x").winner())
      .collect();
    // 30/25 -> 20/25 -> 20/15 -> 10/15 -> 10/5
    assert_eq!(winners, vec![Some(1), Some(2), Some(1), Some(2)]);
  }

  #[test]
  fn ignores_bid_size() {
    let catalog = BidCatalog::from_rows(vec![
      BidRow::new(1, 40.0, "x", 1.0),
      BidRow::new(2, 20.0, "x", 15.0),
    ])
    .unwrap();
    assert_eq!(Balance.select(&catalog, "x").winner(), Some(1));
  }

  #[test]
  fn equal_budgets_tie_to_lowest_id() {
    let catalog = BidCatalog::from_rows(vec![
      BidRow::new(5, 40.0, "x", 1.0),
      BidRow::new(3, 40.0, "x", 2.0),
    ])
    .unwrap();
    assert_eq!(Balance.select(&catalog, "x").winner(), Some(3));
  }
}
