#[macro_use]
extern crate log;
extern crate adwords;
extern crate env_logger;

use adwords::config::Config;
use adwords::load::{load_catalog, load_queries};
use adwords::report::Report;
use adwords::simulation::{evaluate_parallel, evaluate_seeded};
use adwords::{run, BidCatalog, PolicyKind};
use std::env;

const USAGE: &str = "usage: adwords <greedy|msvv|balance>";

/// Returns the policy named by the single positional argument
fn parse_args(args: &[String]) -> Result<PolicyKind, String> {
  if args.len() != 2 {
    return Err(format!("expected 1 argument, got {}", args.len().saturating_sub(1)));
  }
  args[1].parse::<PolicyKind>().map_err(|e| e.to_string())
}

pub fn main() -> Result<(), Box<dyn std::error::Error>> {
  let _ = env_logger::try_init();
  let args: Vec<String> = env::args().collect();
  let policy = match parse_args(&args) {
    Ok(policy) => policy,
    Err(msg) => {
      // Not a failure: report and stop before touching any input
      eprintln!("{}\n{}", msg, USAGE);
      return Ok(());
    }
  };
  let config = Config::from_env()?;
  debug!("{:?}", config);
  let catalog = load_catalog(&config.bidders)?;
  let queries = load_queries(&config.queries)?;

  let revenue = run(&queries, &mut catalog.fresh(), &policy);
  info!("{} revenue in file order: {:.2}", policy, revenue);

  let factory = || -> adwords::Result<BidCatalog> { Ok(catalog.fresh()) };
  let evaluation = if config.parallel {
    evaluate_parallel(&config.evaluation(), &queries, factory, &policy)?
  } else {
    evaluate_seeded(&config.evaluation(), &queries, factory, &policy)?
  };
  let report = Report::new(policy, revenue, evaluation, config.seed);
  if config.json {
    println!("{}", report.to_json()?);
  } else {
    println!("{}", report);
  }
  Ok(())
}
