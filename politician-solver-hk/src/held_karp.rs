//! Exact Held-Karp dynamic programme over a [`DistanceMatrix`].
//!
//! Node `0` is the fixed start of the cycle. The remaining `n - 1` nodes are
//! encoded as bits `0..n - 1` of a subset mask (node `k` is bit `k - 1`), and
//! the table stores, for every `(subset, last)` pair with `last` in `subset`,
//! the cheapest path that leaves node `0`, visits exactly `subset` and stops at
//! `last`, together with the node visited just before `last`.
//!
//! Masks are filled in increasing numeric order. Removing a bit always yields
//! a smaller number, so every state a subset depends on is final by the time
//! the subset is visited.
//!
//! Ties are broken towards the lowest node index, both when picking a
//! predecessor and when picking the node that closes the cycle. The result is
//! therefore a pure function of the matrix.

use std::collections::TryReserveError;

use log::trace;
use politician_core::{DistanceMatrix, MatrixError, SolveError};

/// Index of the node every cycle starts and ends at.
pub const START_NODE: usize = 0;

/// Largest matrix accepted by [`held_karp`].
///
/// The table holds `(n - 1) * 2^(n - 1)` states of nine bytes each, so this
/// ceiling keeps it under [`STATE_TABLE_BYTE_BUDGET`].
pub const MAX_SUPPORTED_NODES: usize = 22;

/// Upper bound on the state table allocated for [`MAX_SUPPORTED_NODES`].
pub const STATE_TABLE_BYTE_BUDGET: usize = 512 << 20;

const STATE_BYTES: usize = size_of::<f64>() + size_of::<u8>();

/// Optimal Hamiltonian cycle found by [`held_karp`].
#[derive(Debug, Clone, PartialEq)]
pub struct HeldKarpSolution {
    /// Total cost of the cycle, including the edge back to the start.
    pub cost: f64,
    /// Visiting order: a permutation of `0..n` beginning with [`START_NODE`].
    pub order: Vec<usize>,
    /// Number of `(subset, last)` states filled.
    pub states_evaluated: u64,
}

/// Find a minimum-cost Hamiltonian cycle through every node of `matrix`.
///
/// `order` lists the nodes in visiting order starting at node `0`; the edge
/// from the last node back to node `0` is included in `cost`.
///
/// # Errors
///
/// - [`SolveError::TooManyNodes`] when the matrix exceeds
///   [`MAX_SUPPORTED_NODES`].
/// - [`SolveError::TooManyNodes`] with `limit` one below `nodes` when the state
///   table cannot be allocated.
/// - [`SolveError::Infeasible`] when every cycle uses an infinite edge.
///
/// # Examples
/// ```
/// use politician_core::DistanceMatrix;
/// use politician_solver_hk::held_karp;
///
/// let matrix = DistanceMatrix::from_rows(vec![
///     vec![0.0, 1.0, 9.0],
///     vec![9.0, 0.0, 1.0],
///     vec![1.0, 9.0, 0.0],
/// ])?;
/// let solution = held_karp(&matrix)?;
/// assert_eq!(solution.order, [0, 1, 2]);
/// assert_eq!(solution.cost, 3.0);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[expect(
    clippy::float_arithmetic,
    reason = "path costs are sums of floating-point edge weights"
)]
pub fn held_karp(matrix: &DistanceMatrix) -> Result<HeldKarpSolution, SolveError> {
    let nodes = matrix.size();
    if nodes > MAX_SUPPORTED_NODES {
        return Err(SolveError::TooManyNodes {
            nodes,
            limit: MAX_SUPPORTED_NODES,
        });
    }
    let others = nodes.saturating_sub(1);
    let full = (1_usize << others) - 1;
    let mut table = StateTable::new(others).map_err(|_| SolveError::TooManyNodes {
        nodes,
        limit: others,
    })?;
    let mut states_evaluated = 0_u64;

    for node in 1..nodes {
        table.record(bit(node), node, edge(matrix, START_NODE, node)?, START_NODE);
        states_evaluated += 1;
    }

    for subset in 1..=full {
        if subset.count_ones() < 2 {
            continue;
        }
        for last in members(subset) {
            let previous = subset & !bit(last);
            let mut best = (f64::INFINITY, START_NODE);
            for via in members(previous) {
                let candidate = table.cost(previous, via) + edge(matrix, via, last)?;
                if candidate < best.0 {
                    best = (candidate, via);
                }
            }
            table.record(subset, last, best.0, best.1);
            states_evaluated += 1;
        }
    }

    let mut closing = (f64::INFINITY, None);
    for last in members(full) {
        let candidate = table.cost(full, last) + edge(matrix, last, START_NODE)?;
        if candidate < closing.0 {
            closing = (candidate, Some(last));
        }
    }
    let (cost, Some(last)) = closing else {
        return Err(SolveError::Infeasible);
    };
    if !cost.is_finite() {
        return Err(SolveError::Infeasible);
    }

    let order = table.backtrack(full, last, nodes)?;
    trace!("held-karp filled {states_evaluated} states for {nodes} nodes, cost {cost}");
    Ok(HeldKarpSolution {
        cost,
        order,
        states_evaluated,
    })
}

/// Flat `(subset, last)` table of path costs and predecessors.
struct StateTable {
    width: usize,
    costs: Vec<f64>,
    /// Predecessor node per state; `0` is [`START_NODE`].
    parents: Vec<u8>,
}

impl StateTable {
    fn new(others: usize) -> Result<Self, TryReserveError> {
        let len = state_slots(others);
        trace!("allocating {} byte state table", len * STATE_BYTES);
        let mut costs = Vec::new();
        costs.try_reserve_exact(len)?;
        costs.resize(len, f64::INFINITY);
        let mut parents = Vec::new();
        parents.try_reserve_exact(len)?;
        parents.resize(len, 0);
        Ok(Self {
            width: others,
            costs,
            parents,
        })
    }

    const fn slot(&self, subset: usize, last: usize) -> usize {
        subset * self.width + (last - 1)
    }

    fn cost(&self, subset: usize, last: usize) -> f64 {
        self.costs
            .get(self.slot(subset, last))
            .copied()
            .unwrap_or(f64::INFINITY)
    }

    fn record(&mut self, subset: usize, last: usize, cost: f64, parent: usize) {
        let slot = self.slot(subset, last);
        if let (Some(cost_cell), Some(parent_cell), Ok(parent)) = (
            self.costs.get_mut(slot),
            self.parents.get_mut(slot),
            u8::try_from(parent),
        ) {
            *cost_cell = cost;
            *parent_cell = parent;
        }
    }

    fn backtrack(&self, full: usize, last: usize, nodes: usize) -> Result<Vec<usize>, SolveError> {
        let mut order = Vec::with_capacity(nodes);
        let mut subset = full;
        let mut node = last;
        while node != START_NODE {
            order.push(node);
            let parent = self
                .parents
                .get(self.slot(subset, node))
                .copied()
                .map(usize::from)
                .ok_or(MatrixError::OutOfBounds {
                    row: node,
                    column: node,
                    size: nodes,
                })?;
            subset &= !bit(node);
            node = parent;
        }
        order.push(START_NODE);
        order.reverse();
        Ok(order)
    }
}

/// `(subset, last)` slots needed when `others` nodes follow the start.
const fn state_slots(others: usize) -> usize {
    (1_usize << others) * others
}

const fn bit(node: usize) -> usize {
    1 << (node - 1)
}

/// Nodes encoded in `mask`, in ascending order.
fn members(mask: usize) -> impl Iterator<Item = usize> {
    let mut rest = mask;
    std::iter::from_fn(move || {
        if rest == 0 {
            return None;
        }
        let node = rest.trailing_zeros() as usize + 1;
        rest &= rest - 1;
        Some(node)
    })
}

fn edge(matrix: &DistanceMatrix, from: usize, to: usize) -> Result<f64, MatrixError> {
    matrix.get(from, to).ok_or(MatrixError::OutOfBounds {
        row: from,
        column: to,
        size: matrix.size(),
    })
}
