//! # Loading bid data and query sequences
use crate::catalog::{BidCatalog, BidRow};
use crate::error::{Error, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Reads bid rows from CSV data with the header
/// `Advertiser,Keyword,Bid Value,Budget` (any column order)
pub fn read_bid_rows<R: io::Read>(reader: R) -> Result<Vec<BidRow>> {
  let mut csv_reader = csv::ReaderBuilder::new()
    .has_headers(true)
    .trim(csv::Trim::All)
    .from_reader(reader);
  let mut rows = Vec::new();
  for (i, record) in csv_reader.deserialize::<BidRow>().enumerate() {
    match record {
      Ok(row) => rows.push(row),
      Err(e) if e.is_io_error() => return Err(Error::Csv(e)),
      Err(e) => return Err(Error::load(i + 1, e.to_string())),
    }
  }
  Ok(rows)
}

/// Reads one keyword per line, skipping blank lines
pub fn read_queries<R: BufRead>(reader: R) -> Result<Vec<String>> {
  let mut queries = Vec::new();
  for line in reader.lines() {
    let line = line?;
    let query = line.trim();
    if !query.is_empty() {
      queries.push(query.to_string());
    }
  }
  Ok(queries)
}

pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<BidCatalog> {
  let path = path.as_ref();
  info!("Loading bid data @ {}", path.display());
  let rows = read_bid_rows(File::open(path)?)?;
  let catalog = BidCatalog::from_rows(rows)?;
  info!(
    "Loaded {} advertisers, total budget {:.2}",
    catalog.len(),
    catalog.total_initial_budget()
  );
  Ok(catalog)
}

pub fn load_queries<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
  let path = path.as_ref();
  info!("Loading queries @ {}", path.display());
  let queries = read_queries(BufReader::new(File::open(path)?))?;
  info!("Loaded {} queries", queries.len());
  Ok(queries)
}

#[cfg(test)]
mod tests {
  use crate::load::*;

  #[test]
  fn reads_rows_with_blank_budgets() {
    let data = "\
Advertiser,Keyword,Bid Value,Budget
0,running shoes,0.5,100
0,shoes,0.25,
1, shoes ,0.75,10.5
";
    let rows = read_bid_rows(data.as_bytes()).unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0], BidRow::new(0, 100.0, "running shoes", 0.5));
    assert_eq!(rows[1].budget, None);
    assert_eq!(rows[2].keyword, "shoes");
    assert_eq!(rows[2].budget, Some(10.5));
  }

  #[test]
  fn column_order_follows_header() {
    let data = "Budget,Bid Value,Keyword,Advertiser\n20,2,hats,4\n";
    let rows = read_bid_rows(data.as_bytes()).unwrap();
    assert_eq!(rows, vec![BidRow::new(4, 20.0, "hats", 2.0)]);
  }

  #[test]
  fn unparseable_bid_is_a_load_error() {
    let data = "Advertiser,Keyword,Bid Value,Budget\n0,a,1,5\n0,b,lots,5\n";
    match read_bid_rows(data.as_bytes()) {
      Err(Error::Load { row, .. }) => assert_eq!(row, 2),
      other => panic!("unexpected {:?}", other),
    }
  }

  #[test]
  fn queries_are_trimmed() {
    let data = "shoes\n  hats \n\nshoes\n";
    let queries = read_queries(data.as_bytes()).unwrap();
    assert_eq!(queries, vec!["shoes", "hats", "shoes"]);
  }

  #[test]
  fn missing_file_is_an_io_error() {
    match load_queries("/nonexistent/queries.txt") {
      Err(Error::Io(_)) => {}
      other => panic!("unexpected {:?}", other),
    }
  }
}
