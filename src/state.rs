//! The TopSpin state space: permutations, the K-reversal operator, the
//! rotation-invariant goal test, and successor generation.

use crate::error::TopSpinError;
use std::collections::HashSet;
use std::fmt;

/// A tile identity, 1..=N. Small by construction (the puzzle sizes this
/// engine targets are modest), but wide enough to avoid an 8-bit ceiling
/// of 255.
pub type Tile = u16;

/// The don't-care sentinel used by predicate-form abstractions. Never a real
/// tile value, since tiles are 1..=N.
pub const DONT_CARE: Tile = 0;

/// A TopSpin permutation: an ordered sequence of N distinct tiles 1..=N laid
/// out around a circle. Value semantics throughout — every operation below
/// returns a fresh `State` rather than mutating in place.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct State {
    permutation: Vec<Tile>,
}

impl State {
    /// Build a state from a permutation, checking that it really is one.
    pub fn new(permutation: Vec<Tile>) -> Result<Self, TopSpinError> {
        let n = permutation.len();
        let mut seen = HashSet::with_capacity(n);
        let valid = permutation.iter().all(|&tile| {
            tile >= 1 && tile as usize <= n && seen.insert(tile)
        });
        if !valid {
            return Err(TopSpinError::InvalidPermutation { n, permutation });
        }
        Ok(Self { permutation })
    }

    /// The solved state 1,2,…,N.
    pub fn solved(n: usize) -> Self {
        Self {
            permutation: (1..=n as Tile).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.permutation.len()
    }

    pub fn is_empty(&self) -> bool {
        self.permutation.is_empty()
    }

    pub fn as_slice(&self) -> &[Tile] {
        &self.permutation
    }

    /// True iff this permutation is a cyclic rotation of 1,2,…,N. Checked by
    /// walking every cyclic neighbor pair, not by trying each rotation.
    pub fn is_goal(&self) -> bool {
        let n = self.permutation.len();
        (0..n).all(|i| {
            let current = self.permutation[i];
            let next = self.permutation[(i + 1) % n];
            if current as usize == n {
                next == 1
            } else {
                next == current + 1
            }
        })
    }

    /// Reverse the K-window starting at `r` (wraparound), returning the
    /// resulting state. Action cost is always 1; see [`Action::COST`].
    pub fn apply(&self, action: Action, k: usize) -> State {
        let n = self.permutation.len();
        let mut permutation = self.permutation.clone();
        let r = action.0;
        for i in 0..k / 2 {
            let left = (r + i) % n;
            let right = (r + k - 1 - i) % n;
            permutation.swap(left, right);
        }
        State { permutation }
    }

    /// Rotate so the tile `1` sits at index 0. The canonical representative
    /// of this state's rotation class; lossless for goal-testing since the
    /// goal is itself rotation-invariant.
    pub fn normalize(&self) -> State {
        let n = self.permutation.len();
        match self.permutation.iter().position(|&t| t == 1) {
            Some(idx) if idx != 0 => {
                let mut permutation = Vec::with_capacity(n);
                permutation.extend_from_slice(&self.permutation[idx..]);
                permutation.extend_from_slice(&self.permutation[..idx]);
                State { permutation }
            }
            _ => self.clone(),
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, tile) in self.permutation.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{tile}")?;
        }
        Ok(())
    }
}

/// An action: the starting position of the K-window to reverse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Action(pub usize);

impl Action {
    /// Every reversal costs the same fixed amount. Kept as a named constant,
    /// rather than inlined everywhere, so a caller could one day vary it
    /// without touching the search engines.
    pub const COST: u32 = 1;
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "reverse window at position {}", self.0)
    }
}

/// An (action, resulting-state) pair, the unit of search traversal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ActionStatePair {
    pub action: Action,
    pub state: State,
}

/// Every N×K reversal, applied to `state`, in index order 0..N. Search
/// tiebreakers must not rely on any other order.
pub fn successors(state: &State, k: usize) -> Vec<ActionStatePair> {
    let n = state.len();
    (0..n)
        .map(|r| {
            let action = Action(r);
            ActionStatePair {
                action,
                state: state.apply(action, k),
            }
        })
        .collect()
}

/// The fixed parameters of one puzzle instance: its size, its window, and
/// the state to start from.
#[derive(Debug, Clone)]
pub struct Puzzle {
    pub n: usize,
    pub k: usize,
    pub initial_state: State,
}

impl Puzzle {
    pub fn new(n: usize, k: usize, initial_state: State) -> Result<Self, TopSpinError> {
        if initial_state.len() != n {
            return Err(TopSpinError::InvalidPermutation {
                n,
                permutation: initial_state.as_slice().to_vec(),
            });
        }
        if k < 2 || k > n {
            return Err(TopSpinError::InvalidWindowSize { n, k });
        }
        Ok(Self { n, k, initial_state })
    }

    pub fn is_goal(&self, state: &State) -> bool {
        state.is_goal()
    }

    pub fn successors(&self, state: &State) -> Vec<ActionStatePair> {
        successors(state, self.k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn goal_detects_any_rotation() {
        let solved = State::solved(5);
        assert!(solved.is_goal());
        let rotated = State::new(vec![3, 4, 5, 1, 2]).unwrap();
        assert!(rotated.is_goal());
        let not_goal = State::new(vec![1, 3, 2, 4, 5]).unwrap();
        assert!(!not_goal.is_goal());
    }

    #[test]
    fn successors_has_n_elements() {
        let state = State::new(vec![2, 1, 4, 3]).unwrap();
        assert_eq!(successors(&state, 4).len(), 4);
    }

    #[test]
    fn reversal_is_an_involution() {
        let state = State::new(vec![1, 3, 2, 4, 5, 6]).unwrap();
        let k = 4;
        for pair in successors(&state, k) {
            let back = pair.state.apply(pair.action, k);
            assert_eq!(back, state);
        }
    }

    #[test]
    fn normalize_anchors_one_at_zero() {
        let state = State::new(vec![3, 4, 5, 1, 2]).unwrap();
        let normalized = state.normalize();
        assert_eq!(normalized.as_slice(), &[1, 2, 3, 4, 5]);
        // idempotent
        assert_eq!(normalized.normalize(), normalized);
    }

    #[test]
    fn rejects_invalid_permutation() {
        assert!(State::new(vec![1, 1, 3]).is_err());
        assert!(State::new(vec![1, 2, 4]).is_err());
    }

    #[test]
    fn puzzle_rejects_bad_window() {
        let state = State::solved(4);
        assert!(Puzzle::new(4, 1, state.clone()).is_err());
        assert!(Puzzle::new(4, 5, state).is_err());
    }
}
