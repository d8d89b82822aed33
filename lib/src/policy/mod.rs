//! # Allocation policies
//!
//! The `policy` module defines a `Policy` trait and the three online
//! allocation strategies: Greedy, Balance and MSVV. `PolicyKind` selects
//! one of them by name.

mod balance;
mod greedy;
mod kind;
pub mod msvv;
mod policy;

pub use balance::Balance;
pub use greedy::Greedy;
pub use kind::PolicyKind;
pub use msvv::Msvv;
pub use policy::{Allocation, Policy};
