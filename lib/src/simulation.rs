//! # Competitive-ratio evaluation
//!
//! Runs a policy many times over randomly reordered query sequences, each
//! time against a freshly built catalog, and compares the average revenue
//! with the total budget available.
use crate::catalog::BidCatalog;
use crate::error::{Error, Result};
use crate::policy::Policy;
use crate::runner::run;
use rand::prelude::*;
use rand::rngs::SmallRng;
use rayon::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvaluationConfig {
  pub trials: usize,
  pub seed: u64,
}

impl Default for EvaluationConfig {
  fn default() -> Self {
    Self {
      trials: 100,
      seed: 0,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
  pub trials: usize,
  pub mean_revenue: f64,
  pub min_revenue: f64,
  pub max_revenue: f64,
  /// Sum of initial budgets, taken once before the first trial
  pub total_initial_budget: f64,
}

impl Evaluation {
  fn from_revenues(revenues: &[f64], total_initial_budget: f64) -> Self {
    let trials = revenues.len();
    let sum: f64 = revenues.iter().sum();
    let min_revenue = revenues.iter().cloned().fold(f64::INFINITY, f64::min);
    let max_revenue = revenues.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    Self {
      trials,
      mean_revenue: sum / trials as f64,
      min_revenue,
      max_revenue,
      total_initial_budget,
    }
  }

  pub fn competitive_ratio(&self) -> f64 {
    self.mean_revenue / self.total_initial_budget
  }
}

/// Returns the evaluation of `trials` runs, each over `queries` reordered by `permute`
///
/// # Arguments
///
/// * `factory` - Builds the catalog for one trial, with every budget at its initial value
/// * `permute` - Reorders the query indices of one trial in place
pub fn evaluate_with<P, S, F, G>(
  trials: usize,
  queries: &[S],
  factory: F,
  policy: &P,
  mut permute: G,
) -> Result<Evaluation>
where
  P: Policy + ?Sized,
  S: AsRef<str>,
  F: Fn() -> Result<BidCatalog>,
  G: FnMut(&mut [usize]),
{
  if trials == 0 {
    return Err(Error::NoTrials);
  }
  let total_initial_budget = initial_budget(&factory)?;
  info!(
    "Evaluating {} over {} trials of {} queries",
    policy.name(),
    trials,
    queries.len()
  );
  // Shuffle an index range rather than the caller's query slice
  let mut order: Vec<usize> = (0..queries.len()).collect();
  let mut revenues = Vec::with_capacity(trials);
  for index in 0..trials {
    order.iter_mut().enumerate().for_each(|(i, o)| *o = i);
    permute(&mut order);
    revenues.push(trial(index, &order, queries, &factory, policy)?);
  }
  let evaluation = Evaluation::from_revenues(&revenues, total_initial_budget);
  info!(
    "{} competitive ratio {:.4}",
    policy.name(),
    evaluation.competitive_ratio()
  );
  Ok(evaluation)
}

/// Returns the evaluation of `trials` uniformly shuffled runs, drawing from `rng`
pub fn evaluate<P, S, F, R>(
  trials: usize,
  queries: &[S],
  factory: F,
  policy: &P,
  rng: &mut R,
) -> Result<Evaluation>
where
  P: Policy + ?Sized,
  S: AsRef<str>,
  F: Fn() -> Result<BidCatalog>,
  R: Rng + ?Sized,
{
  evaluate_with(trials, queries, factory, policy, |order| {
    order.shuffle(&mut *rng)
  })
}

/// Same as `evaluate`, with a `SmallRng` seeded from `config.seed`
pub fn evaluate_seeded<P, S, F>(
  config: &EvaluationConfig,
  queries: &[S],
  factory: F,
  policy: &P,
) -> Result<Evaluation>
where
  P: Policy + ?Sized,
  S: AsRef<str>,
  F: Fn() -> Result<BidCatalog>,
{
  let mut rng = SmallRng::seed_from_u64(config.seed);
  evaluate(config.trials, queries, factory, policy, &mut rng)
}

/// Runs the trials on the rayon thread pool. Trial `i` shuffles with its
/// own `SmallRng` seeded from `config.seed + i`, so the result does not
/// depend on how the trials are scheduled.
pub fn evaluate_parallel<P, S, F>(
  config: &EvaluationConfig,
  queries: &[S],
  factory: F,
  policy: &P,
) -> Result<Evaluation>
where
  P: Policy + Sync + ?Sized,
  S: AsRef<str> + Sync,
  F: Fn() -> Result<BidCatalog> + Sync,
{
  if config.trials == 0 {
    return Err(Error::NoTrials);
  }
  let total_initial_budget = initial_budget(&factory)?;
  info!(
    "Evaluating {} over {} parallel trials of {} queries",
    policy.name(),
    config.trials,
    queries.len()
  );
  let revenues = (0..config.trials)
    .into_par_iter()
    .map(|index| {
      let mut rng = SmallRng::seed_from_u64(config.seed.wrapping_add(index as u64));
      let mut order: Vec<usize> = (0..queries.len()).collect();
      order.shuffle(&mut rng);
      trial(index, &order, queries, &factory, policy)
    })
    .collect::<Result<Vec<f64>>>()?;
  let evaluation = Evaluation::from_revenues(&revenues, total_initial_budget);
  info!(
    "{} competitive ratio {:.4}",
    policy.name(),
    evaluation.competitive_ratio()
  );
  Ok(evaluation)
}

/// Runs one trial: `queries` visited in `order` against a fresh catalog
fn trial<P, S, F>(
  index: usize,
  order: &[usize],
  queries: &[S],
  factory: &F,
  policy: &P,
) -> Result<f64>
where
  P: Policy + ?Sized,
  S: AsRef<str>,
  F: Fn() -> Result<BidCatalog>,
{
  let trial_queries: Vec<&str> = order.iter().map(|&i| queries[i].as_ref()).collect();
  let mut catalog = factory()?;
  let revenue = run(&trial_queries, &mut catalog, policy);
  debug!("Trial {}: revenue {:.2}", index, revenue);
  Ok(revenue)
}

fn initial_budget<F: Fn() -> Result<BidCatalog>>(factory: &F) -> Result<f64> {
  let total = factory()?.total_initial_budget();
  if total <= 0.0 {
    return Err(Error::EmptyBudget);
  }
  Ok(total)
}
