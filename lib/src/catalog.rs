//! # Bid catalog
//!
//! The catalog owns every advertiser, a snapshot of each advertiser's
//! initial budget, and the reverse index from keyword to the advertisers
//! bidding on it.
use crate::advertiser::{Advertiser, AdvertiserId};
use crate::error::{Error, Result};
use std::collections::{BTreeMap, HashMap};

/// A single row of bid data: one (advertiser, keyword) pair
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BidRow {
  #[serde(rename = "Advertiser")]
  pub advertiser: AdvertiserId,
  #[serde(rename = "Keyword")]
  pub keyword: String,
  #[serde(rename = "Bid Value")]
  pub bid: f64,
  /// Only required on the first row of each advertiser
  #[serde(rename = "Budget")]
  pub budget: Option<f64>,
}

impl BidRow {
  pub fn new(advertiser: AdvertiserId, budget: f64, keyword: &str, bid: f64) -> Self {
    Self {
      advertiser,
      keyword: keyword.to_string(),
      bid,
      budget: Some(budget),
    }
  }
}

#[derive(Debug, Default, Clone)]
pub struct BidCatalog {
  advertisers: BTreeMap<AdvertiserId, Advertiser>,
  initial_budgets: BTreeMap<AdvertiserId, f64>,
  /// Bidders per keyword, ascending by id and free of duplicates
  keyword_index: HashMap<String, Vec<AdvertiserId>>,
}

impl BidCatalog {
  /// Returns a new catalog built from `rows`
  ///
  /// An advertiser's budget comes from its first row. If the same
  /// advertiser bids on the same keyword twice, the last bid wins.
  pub fn from_rows<I: IntoIterator<Item = BidRow>>(rows: I) -> Result<Self> {
    let mut catalog = Self::default();
    for (i, row) in rows.into_iter().enumerate() {
      let row_number = i + 1;
      if !row.bid.is_finite() || row.bid < 0.0 {
        return Err(Error::load(
          row_number,
          format!("bid value {} is not a non-negative number", row.bid),
        ));
      }
      if let Some(budget) = row.budget {
        if !budget.is_finite() || budget < 0.0 {
          return Err(Error::load(
            row_number,
            format!("budget {} is not a non-negative number", budget),
          ));
        }
      }
      let initial = match catalog.initial_budgets.get(&row.advertiser) {
        Some(&initial) => {
          if let Some(budget) = row.budget {
            if budget != initial {
              warn!(
                "Advertiser {} lists budget {} on row {}, keeping first budget {}",
                row.advertiser, budget, row_number, initial
              );
            }
          }
          initial
        }
        None => match row.budget {
          Some(budget) => {
            catalog.initial_budgets.insert(row.advertiser, budget);
            budget
          }
          None => {
            return Err(Error::load(
              row_number,
              format!("first row of advertiser {} has no budget", row.advertiser),
            ));
          }
        },
      };
      let advertiser = catalog
        .advertisers
        .entry(row.advertiser)
        .or_insert_with(|| Advertiser::new(row.advertiser, initial));
      advertiser.bids.insert(row.keyword.clone(), row.bid);
      catalog
        .keyword_index
        .entry(row.keyword)
        .or_insert_with(Vec::new)
        .push(row.advertiser);
    }
    for bidders in catalog.keyword_index.values_mut() {
      bidders.sort_unstable();
      bidders.dedup();
    }
    Ok(catalog)
  }

  /// Returns a copy of this catalog with every budget reset to its
  /// initial value. This is the per-trial catalog factory.
  pub fn fresh(&self) -> Self {
    let mut catalog = self.clone();
    for (id, advertiser) in catalog.advertisers.iter_mut() {
      advertiser.budget = self.initial_budgets[id];
    }
    catalog
  }

  /// Returns the advertisers bidding on `keyword`, ascending by id
  pub fn bidders(&self, keyword: &str) -> Result<&[AdvertiserId]> {
    self
      .keyword_index
      .get(keyword)
      .map(|v| v.as_slice())
      .ok_or_else(|| Error::MissingKeyword(keyword.to_string()))
  }

  pub fn advertiser(&self, id: AdvertiserId) -> Option<&Advertiser> {
    self.advertisers.get(&id)
  }

  /// Iterates advertisers in ascending id order
  pub fn advertisers(&self) -> impl Iterator<Item = &Advertiser> {
    self.advertisers.values()
  }

  pub fn len(&self) -> usize {
    self.advertisers.len()
  }

  pub fn is_empty(&self) -> bool {
    self.advertisers.is_empty()
  }

  pub fn bid(&self, id: AdvertiserId, keyword: &str) -> Option<f64> {
    self.advertisers.get(&id).and_then(|a| a.bid(keyword))
  }

  pub fn initial_budget(&self, id: AdvertiserId) -> Option<f64> {
    self.initial_budgets.get(&id).copied()
  }

  pub fn total_initial_budget(&self) -> f64 {
    self.initial_budgets.values().sum()
  }

  pub fn total_remaining_budget(&self) -> f64 {
    self.advertisers.values().map(|a| a.budget).sum()
  }

  /// Charges `amount` to advertiser `id`. Returns false, leaving the
  /// catalog untouched, if the advertiser is unknown or cannot pay.
  pub fn debit(&mut self, id: AdvertiserId, amount: f64) -> bool {
    match self.advertisers.get_mut(&id) {
      Some(advertiser) if amount >= 0.0 && advertiser.can_afford(amount) => {
        advertiser.budget -= amount;
        true
      }
      _ => false,
    }
  }
}
