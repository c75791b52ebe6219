//! Roster generation and coverage evaluation.
//!
//! Provides the greedy assignment engine and the derived coverage report.
//!
//! # Algorithm
//!
//! `RosterEngine` is a deterministic, single-pass, order-sensitive greedy
//! allocator. Assignment is irrevocable: once a member joins a zone team
//! they leave the pool for every later zone, so the zone processing order
//! is part of the contract, not an implementation detail.
//!
//! # Coverage
//!
//! `CoverageReport` compares covered against required hours per zone. It is
//! a pure derivation the shell re-runs after every manual team edit, with
//! the same hour rule the engine used.

mod coverage;
mod engine;

pub use coverage::{covered_hours_from_duties, CoverageReport, CoverageVerdict};
pub use engine::{RosterEngine, RosterRequest, EVENING_SPLIT_POOL_SIZE};
