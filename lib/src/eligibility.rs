use crate::catalog::BidCatalog;

/// Returns true if at least one advertiser bidding on `keyword` can still
/// pay its bid. A keyword nobody bids on is never servable.
pub fn has_sufficient_budget(catalog: &BidCatalog, keyword: &str) -> bool {
  let bidders = match catalog.bidders(keyword) {
    Ok(bidders) => bidders,
    Err(_) => return false,
  };
  bidders.iter().any(|&id| {
    match (catalog.advertiser(id), catalog.bid(id, keyword)) {
      (Some(advertiser), Some(bid)) => advertiser.can_afford(bid),
      _ => false,
    }
  })
}

#[cfg(test)]
mod tests {
  use crate::catalog::*;
  use crate::eligibility::*;

  #[test]
  fn one_affordable_bidder_is_enough() {
    let mut catalog = BidCatalog::from_rows(vec![
      BidRow::new(1, 5.0, "x", 10.0),
      BidRow::new(2, 10.0, "x", 10.0),
    ])
    .unwrap();
    assert!(has_sufficient_budget(&catalog, "x"));
    catalog.debit(2, 1.0);
    assert!(!has_sufficient_budget(&catalog, "x"));
  }

  #[test]
  fn unknown_keyword_is_not_servable() {
    let catalog = BidCatalog::from_rows(vec![BidRow::new(1, 5.0, "x", 1.0)]).unwrap();
    assert!(!has_sufficient_budget(&catalog, "y"));
  }

  #[test]
  fn depends_only_on_catalog_state() {
    let catalog = BidCatalog::from_rows(vec![
      BidRow::new(1, 5.0, "x", 1.0),
      BidRow::new(1, 5.0, "y", 9.0),
    ])
    .unwrap();
    let before = has_sufficient_budget(&catalog, "x");
    assert!(!has_sufficient_budget(&catalog, "y"));
    assert_eq!(has_sufficient_budget(&catalog, "x"), before);
  }
}
