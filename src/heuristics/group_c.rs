use crate::abstraction::{abstract_by_mapping, AbstractionCache};
use crate::heuristics::{Heuristic, HeuristicValue};
use crate::state::State;
use crate::Puzzle;
use crate::state::Tile;

fn group_size(n: usize, groups: usize) -> usize {
    n.div_ceil(groups)
}

fn group_of(tile: Tile, size: usize, groups: usize) -> Tile {
    (((tile - 1) as usize) / size).min(groups - 1) as Tile
}

/// The mapping-form twin of [`super::GroupHeuristic`]: every tile is
/// relabelled to its group index rather than kept-or-zeroed, producing one
/// abstracted graph instead of G, at the cost of collapsing tiles within a
/// group into a single equivalence class.
#[derive(Debug)]
pub struct GroupHeuristicC {
    groups: usize,
    cache: AbstractionCache,
}

impl GroupHeuristicC {
    pub fn new(groups: usize) -> Self {
        Self { groups, cache: AbstractionCache::new() }
    }
}

impl Heuristic for GroupHeuristicC {
    fn evaluate(&mut self, state: &State, puzzle: &Puzzle) -> HeuristicValue {
        let size = group_size(puzzle.n, self.groups);
        let mapping = |tile: Tile| group_of(tile, size, self.groups);
        let abstraction = abstract_by_mapping(state.as_slice(), mapping);
        self.cache.solution_length_mapping(&abstraction, puzzle.k, mapping)
    }
}

/// The mapping-form twin of [`super::ModDistanceHeuristic`]: every tile is
/// relabelled to its residue class modulo `modulus`.
#[derive(Debug)]
pub struct ModDistanceHeuristicC {
    modulus: Tile,
    cache: AbstractionCache,
}

impl ModDistanceHeuristicC {
    pub fn new(modulus: Tile) -> Self {
        Self { modulus, cache: AbstractionCache::new() }
    }
}

impl Heuristic for ModDistanceHeuristicC {
    fn evaluate(&mut self, state: &State, puzzle: &Puzzle) -> HeuristicValue {
        let modulus = self.modulus;
        let mapping = move |tile: Tile| tile % modulus;
        let abstraction = abstract_by_mapping(state.as_slice(), mapping);
        self.cache.solution_length_mapping(&abstraction, puzzle.k, mapping)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::State as S;

    fn puzzle(n: usize, k: usize, perm: Vec<u16>) -> Puzzle {
        Puzzle::new(n, k, S::new(perm).unwrap()).unwrap()
    }

    #[test]
    fn zero_on_goal_for_every_group_count() {
        for groups in [2, 3, 4] {
            let p = puzzle(7, 4, vec![1, 2, 3, 4, 5, 6, 7]);
            let mut h = GroupHeuristicC::new(groups);
            assert_eq!(h.evaluate(&p.initial_state, &p).get(), Some(0));
        }
    }

    #[test]
    fn zero_on_goal_for_every_modulus() {
        for modulus in [2, 3, 4] {
            let p = puzzle(7, 4, vec![1, 2, 3, 4, 5, 6, 7]);
            let mut h = ModDistanceHeuristicC::new(modulus);
            assert_eq!(h.evaluate(&p.initial_state, &p).get(), Some(0));
        }
    }

    #[test]
    fn nonzero_on_perturbed_state() {
        let p = puzzle(7, 4, vec![3, 1, 4, 2, 5, 7, 6]);
        let mut h = GroupHeuristicC::new(2);
        assert!(h.evaluate(&p.initial_state, &p).get().unwrap() > 0);
    }
}
