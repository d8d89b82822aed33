//! # Online Ad-Auction Simulation Library
//!
//! adwords allocates a stream of search queries to budget-constrained
//! advertisers with one of three online policies (Greedy, Balance, MSVV)
//! and estimates each policy's competitive ratio by replaying the queries
//! in random order against a fresh catalog.

#[macro_use]
extern crate serde_derive;
extern crate serde;
#[macro_use]
extern crate log;
extern crate csv;
extern crate rand;
extern crate rayon;

pub mod advertiser;
pub mod catalog;
pub mod config;
pub mod eligibility;
pub mod error;
pub mod load;
pub mod policy;
pub mod report;
pub mod runner;
pub mod simulation;

pub use crate::catalog::{BidCatalog, BidRow};
pub use crate::error::{Error, Result};
pub use crate::policy::{Allocation, Policy, PolicyKind};
pub use crate::runner::run;
pub use crate::simulation::{evaluate, Evaluation, EvaluationConfig};
