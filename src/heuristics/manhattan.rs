use crate::heuristics::{Heuristic, HeuristicValue};
use crate::state::State;
use crate::Puzzle;

/// For each rotation of the state, sums each tile's minimum cyclic distance
/// from its current position to its goal position, then takes the best
/// (smallest) sum over all rotations, since the goal itself is
/// rotation-invariant. Divided by the largest positional change a single
/// reversal can induce, so it stays admissible, and rounded up.
#[derive(Debug, Clone, Copy)]
pub struct ManhattanHeuristic {
    divisor: u32,
}

impl ManhattanHeuristic {
    pub fn new() -> Self {
        Self { divisor: 0 }
    }

    fn divisor_for(k: usize) -> u32 {
        (0..k)
            .map(|i| (i as i64 - (k as i64 - 1 - i as i64)).unsigned_abs() as u32)
            .sum::<u32>()
            .max(1)
    }
}

impl Default for ManhattanHeuristic {
    fn default() -> Self {
        Self::new()
    }
}

fn cyclic_distance(a: usize, b: usize, n: usize) -> u32 {
    let forward = (a + n - b % n) % n;
    let backward = (b + n - a % n) % n;
    forward.min(backward) as u32
}

/// Sum of per-tile cyclic distances for one particular rotation offset.
fn rotation_cost(perm: &[u16], n: usize, offset: usize) -> u32 {
    (0..n)
        .map(|i| {
            let position = (i + offset) % n;
            let goal_position = perm[i] as usize - 1;
            cyclic_distance(position, goal_position, n)
        })
        .sum()
}

impl Heuristic for ManhattanHeuristic {
    fn evaluate(&mut self, state: &State, puzzle: &Puzzle) -> HeuristicValue {
        if self.divisor == 0 {
            self.divisor = Self::divisor_for(puzzle.k);
        }
        let perm = state.as_slice();
        let n = puzzle.n;
        let best = (0..n)
            .map(|offset| rotation_cost(perm, n, offset))
            .min()
            .unwrap_or(0);
        let divided = (best as f64 / self.divisor as f64).ceil() as u32;
        HeuristicValue::finite(divided)
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
    fn zero_on_goal() {
        let p = puzzle(6, 4, vec![1, 2, 3, 4, 5, 6]);
        let mut h = ManhattanHeuristic::new();
        assert_eq!(h.evaluate(&p.initial_state, &p).get(), Some(0));
    }

    #[test]
    fn divisor_matches_window_formula() {
        // K=4: |0-3| + |1-2| + |2-1| + |3-0| = 3+1+1+3 = 8
        assert_eq!(ManhattanHeuristic::divisor_for(4), 8);
        // K=2: |0-1| + |1-0| = 2
        assert_eq!(ManhattanHeuristic::divisor_for(2), 2);
    }

    #[test]
    fn nonzero_on_non_goal_state() {
        let p = puzzle(6, 4, vec![2, 1, 3, 4, 5, 6]);
        let mut h = ManhattanHeuristic::new();
        assert!(h.evaluate(&p.initial_state, &p).get().unwrap() > 0);
    }

    #[test]
    fn is_rotation_invariant_over_rotated_goal() {
        let p = puzzle(5, 4, vec![3, 4, 5, 1, 2]);
        let mut h = ManhattanHeuristic::new();
        assert_eq!(h.evaluate(&p.initial_state, &p).get(), Some(0));
    }
}
