//! Sparse generation engine.
//!
//! Only cells within one step of a live cell can be alive next generation, so a
//! step evaluates the 3x3 neighbourhood of every live cell and nothing else.
//! Cost is proportional to population, never to grid extent.
//!
//! The current set is only read while the successor is built; callers swap the
//! returned set in once it is complete.

use std::collections::HashSet;

use rayon::prelude::*;
use tracing::debug;

use super::{Algorithm, Cell, CellSet, Rule};

/// What a single generation step evaluated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepStats {
    /// Distinct cells evaluated (at most 9 per live cell)
    pub candidates: usize,
    /// Live cells in the resulting generation
    pub population: usize,
}

/// Every cell in the 3x3 neighbourhood of a live cell, each exactly once.
pub fn candidates(cells: &CellSet) -> HashSet<Cell> {
    let mut out = HashSet::with_capacity(cells.len() * 9);
    for cell in cells.iter() {
        out.extend(cell.neighbourhood());
    }
    out
}

#[inline]
fn survives(cells: &CellSet, rule: &dyn Rule, candidate: Cell) -> bool {
    let alive = cells.contains(candidate);
    let neighbours = cells.live_neighbours(candidate);
    rule.next_state(alive, neighbours)
}

fn evolve(cells: &CellSet, rule: &dyn Rule, candidates: HashSet<Cell>) -> CellSet {
    candidates
        .into_iter()
        .filter(|&c| survives(cells, rule, c))
        .collect()
}

fn evolve_parallel(cells: &CellSet, rule: &dyn Rule, candidates: HashSet<Cell>) -> CellSet {
    let next: HashSet<Cell> = candidates
        .into_par_iter()
        .filter(|&c| survives(cells, rule, c))
        .collect();
    CellSet::from(next)
}

/// Compute the next generation (serial)
pub fn advance_generation(cells: &CellSet, rule: &dyn Rule) -> CellSet {
    evolve(cells, rule, candidates(cells))
}

/// Compute the next generation, evaluating candidates in parallel with rayon.
/// Produces exactly the same set as [`advance_generation`].
pub fn advance_generation_parallel(cells: &CellSet, rule: &dyn Rule) -> CellSet {
    evolve_parallel(cells, rule, candidates(cells))
}

/// Run one generation with the chosen algorithm and report what it evaluated
pub fn step(cells: &CellSet, rule: &dyn Rule, algorithm: Algorithm) -> (CellSet, StepStats) {
    let candidates = candidates(cells);
    let evaluated = candidates.len();

    let next = match algorithm {
        Algorithm::Sparse => evolve(cells, rule, candidates),
        Algorithm::SparseParallel => evolve_parallel(cells, rule, candidates),
    };

    let stats = StepStats {
        candidates: evaluated,
        population: next.len(),
    };
    debug!(
        rule = rule.name(),
        algorithm = algorithm.name(),
        candidates = stats.candidates,
        population = stats.population,
        "advanced generation"
    );

    (next, stats)
}
