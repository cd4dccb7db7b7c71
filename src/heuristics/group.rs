use crate::abstraction::{abstract_by_predicate, AbstractionCache};
use crate::heuristics::{Heuristic, HeuristicValue};
use crate::state::State;
use crate::Puzzle;

/// Group size for a partition of N tiles into `groups` contiguous ranges,
/// the last one absorbing whatever the ceiling split leaves over.
fn group_size(n: usize, groups: usize) -> usize {
    n.div_ceil(groups)
}

fn group_of(tile: u16, size: usize, groups: usize) -> usize {
    (((tile - 1) as usize) / size).min(groups - 1)
}

/// Partitions tiles into G contiguous value ranges (⌈N/G⌉ each, last one
/// absorbing the remainder). Each group is abstracted by predicate, solved
/// independently, and the heuristic returns the max of the per-group
/// solution lengths — the max of several admissible heuristics is itself
/// admissible.
#[derive(Debug)]
pub struct GroupHeuristic {
    groups: usize,
    cache: AbstractionCache,
}

impl GroupHeuristic {
    pub fn new(groups: usize) -> Self {
        Self { groups, cache: AbstractionCache::new() }
    }
}

impl Heuristic for GroupHeuristic {
    fn evaluate(&mut self, state: &State, puzzle: &Puzzle) -> HeuristicValue {
        let perm = state.as_slice();
        let size = group_size(puzzle.n, self.groups);
        (0..self.groups)
            .map(|g| {
                let abstraction =
                    abstract_by_predicate(perm, |tile| group_of(tile, size, self.groups) == g);
                self.cache.solution_length_predicate(&abstraction, puzzle.k)
            })
            .max()
            .unwrap_or(HeuristicValue::finite(0))
    }
}

/// Same shape as [`GroupHeuristic`] but partitions by residue class modulo
/// `modulus` instead of by contiguous range. The modulus-2 case is the
/// "odd/even" heuristic.
#[derive(Debug)]
pub struct ModDistanceHeuristic {
    modulus: u16,
    cache: AbstractionCache,
}

impl ModDistanceHeuristic {
    pub fn new(modulus: u16) -> Self {
        Self { modulus, cache: AbstractionCache::new() }
    }
}

impl Heuristic for ModDistanceHeuristic {
    fn evaluate(&mut self, state: &State, puzzle: &Puzzle) -> HeuristicValue {
        let perm = state.as_slice();
        (0..self.modulus)
            .map(|residue| {
                let abstraction =
                    abstract_by_predicate(perm, |tile| tile % self.modulus == residue);
                self.cache.solution_length_predicate(&abstraction, puzzle.k)
            })
            .max()
            .unwrap_or(HeuristicValue::finite(0))
    }
}
