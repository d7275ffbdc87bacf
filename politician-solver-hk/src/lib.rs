//! Exact Held-Karp solver for Politician tours.
//!
//! This crate provides [`HeldKarpSolver`], the default implementation of the
//! [`Solver`](politician_core::Solver) trait, and the underlying
//! [`held_karp`] dynamic programme.
//!
//! A request is resolved to coordinates through the injected
//! [`CoordinateLookup`](politician_core::CoordinateLookup), priced with the
//! injected [`DistanceMetric`](politician_core::DistanceMetric), and turned into
//! a [`TourMatrix`](politician_core::TourMatrix) whose synthetic closing node
//! forces the optimal cycle to finish at the requested end. Running time is
//! `O(n^2 * 2^n)` and memory `O(n * 2^n)`, so the solver refuses requests
//! beyond a configurable node budget.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod held_karp;
mod solver;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(all(docsrs, not(test)), doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use held_karp::{
    HeldKarpSolution, MAX_SUPPORTED_NODES, START_NODE, STATE_TABLE_BYTE_BUDGET, held_karp,
};
pub use solver::{DEFAULT_MAX_NODES, HeldKarpConfig, HeldKarpSolver};
