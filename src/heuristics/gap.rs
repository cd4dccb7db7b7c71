use crate::heuristics::{Heuristic, HeuristicValue};
use crate::state::State;
use crate::Puzzle;

/// Counts adjacent pairs whose values differ by more than 1, treating the
/// cyclic N-immediately-followed-by-1 wraparound as no gap, matching
/// `is_goal`'s own directional wraparound check (N then 1, never 1 then N).
/// Each reversal can remove at most two gap endpoints, so the count is
/// divided by two and rounded up.
#[derive(Debug, Clone, Copy, Default)]
pub struct GapHeuristic;

impl Heuristic for GapHeuristic {
    fn evaluate(&mut self, state: &State, puzzle: &Puzzle) -> HeuristicValue {
        HeuristicValue::finite(gap_count(state, puzzle.n))
    }
}

pub(crate) fn gap_count(state: &State, n: usize) -> u32 {
    let perm = state.as_slice();
    let count = (0..n)
        .filter(|&i| {
            let current = perm[i];
            let next = perm[(i + 1) % n];
            let wraps = current as usize == n && next == 1;
            !wraps && current.abs_diff(next) > 1
        })
        .count() as f64;
    (count / 2.0).ceil() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::State as S;

    fn puzzle(n: usize, k: usize, perm: Vec<u16>) -> Puzzle {
        Puzzle::new(n, k, S::new(perm).unwrap()).unwrap()
    }

    #[test]
    fn zero_on_goal() {
        let p = puzzle(5, 4, vec![1, 2, 3, 4, 5]);
        let mut h = GapHeuristic;
        assert_eq!(h.evaluate(&p.initial_state, &p).get(), Some(0));
    }

    #[test]
    fn counts_and_halves_gap_pairs() {
        let p = puzzle(4, 4, vec![2, 1, 4, 3]);
        let mut h = GapHeuristic;
        // only (1,4) is a gap; (4,3) wrap is exempt. 1 gap -> ceil(1/2) = 1.
        assert_eq!(h.evaluate(&p.initial_state, &p).get(), Some(1));
    }

    #[test]
    fn halves_two_real_gaps_to_one() {
        let p = puzzle(6, 4, vec![1, 3, 2, 4, 5, 6]);
        let mut h = GapHeuristic;
        // pairs (1,3) and (2,4) are gaps; (6,1) wrap is exempt. 2 gaps -> 1.
        assert_eq!(h.evaluate(&p.initial_state, &p).get(), Some(1));
    }

    #[test]
    fn zero_gap_count_iff_goal() {
        for perm in [
            vec![1u16, 2, 3, 4, 5],
            vec![3, 4, 5, 1, 2],
            vec![1, 3, 2, 4, 5],
        ] {
            let n = perm.len();
            let state = S::new(perm).unwrap();
            assert_eq!(gap_count(&state, n) == 0, state.is_goal());
        }
    }
}
