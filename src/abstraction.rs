//! The abstraction engine: project a state under a predicate or a mapping,
//! then lazily BFS-solve the abstracted graph, memoizing by canonical key.
//!
//! This is the source of most of the heuristic speedup in this engine: every
//! group/mod-distance/"C" heuristic bottoms out in one of the two BFS solvers
//! here, and repeated calls on the same abstracted shape are answered from
//! the cache instead of re-searched.

use crate::heuristics::HeuristicValue;
use crate::state::{Tile, DONT_CARE};
use std::collections::{HashMap, HashSet, VecDeque};
use tracing::debug;

/// Abstract a state by keeping tiles the predicate accepts and zeroing the
/// rest. "0" is the don't-care sentinel; it is never a real tile value.
pub fn abstract_by_predicate(state: &[Tile], predicate: impl Fn(Tile) -> bool) -> Vec<Tile> {
    state
        .iter()
        .map(|&tile| if predicate(tile) { tile } else { DONT_CARE })
        .collect()
}

/// Abstract a state by relabelling every tile through a mapping, collapsing
/// tiles into equivalence classes (parity, group index, ...).
pub fn abstract_by_mapping(state: &[Tile], mapping: impl Fn(Tile) -> Tile) -> Vec<Tile> {
    state.iter().map(|&tile| mapping(tile)).collect()
}

/// Rotate so the smallest non-zero value sits at index 0. The predicate-form
/// analogue of [`crate::state::State::normalize`], generalized to tolerate
/// don't-care slots. An abstraction with no non-zero slots at all (a
/// degenerate, empty group) has no canonical rotation and is returned
/// unrotated — callers treat that case as trivially solved (see
/// `is_goal_predicate`).
fn normalize_predicate(abstraction: &[Tile]) -> Vec<Tile> {
    let n = abstraction.len();
    let Some(min_non_zero) = abstraction.iter().copied().filter(|&x| x != DONT_CARE).min() else {
        return abstraction.to_vec();
    };
    let current_index = abstraction.iter().position(|&x| x == min_non_zero).unwrap();
    let mut rotated = Vec::with_capacity(n);
    rotated.extend_from_slice(&abstraction[current_index..]);
    rotated.extend_from_slice(&abstraction[..current_index]);
    rotated
}

/// Rotate to the lexicographically smallest representative. Used for
/// mapping-form abstractions, where every slot carries a meaningful value
/// (including 0) so there is no privileged "non-zero" anchor to rotate on.
fn canonical_min_rotation(abstraction: &[Tile]) -> Vec<Tile> {
    let n = abstraction.len();
    (0..n)
        .map(|shift| {
            let mut rotated = Vec::with_capacity(n);
            rotated.extend_from_slice(&abstraction[shift..]);
            rotated.extend_from_slice(&abstraction[..shift]);
            rotated
        })
        .min()
        .unwrap_or_default()
}

/// Predicate-form abstract goal: after normalization, every non-zero slot i
/// holds i+1. A fully don't-care abstraction (no non-zero slots) imposes no
/// constraint and is trivially a goal.
fn is_goal_predicate(abstraction: &[Tile]) -> bool {
    let normalized = normalize_predicate(abstraction);
    normalized
        .iter()
        .enumerate()
        .all(|(i, &tile)| tile == DONT_CARE || tile as usize == i + 1)
}

/// Mapping-form abstract goal: some rotation of `abstraction` equals the
/// mapped identity sequence `goal_sequence`.
fn is_goal_mapping(abstraction: &[Tile], goal_sequence: &[Tile]) -> bool {
    let n = abstraction.len();
    (0..n).any(|rot| {
        (0..n).all(|i| abstraction[(i + rot) % n] == goal_sequence[i])
    })
}

/// Reverse the K-window starting at `pos` (wraparound) within an abstracted
/// sequence of arbitrary meaning.
fn reverse_window(state: &[Tile], pos: usize, k: usize) -> Vec<Tile> {
    let n = state.len();
    let mut next = state.to_vec();
    for i in 0..k / 2 {
        let left = (pos + i) % n;
        let right = (pos + k - 1 - i) % n;
        next.swap(left, right);
    }
    next
}

fn window_has_non_zero(state: &[Tile], pos: usize, k: usize) -> bool {
    let n = state.len();
    (0..k).any(|i| state[(pos + i) % n] != DONT_CARE)
}

/// Breadth-first search over the abstracted graph induced by K-window
/// reversal, starting at `start` and stopping at the first node `is_goal`
/// accepts. `skip_edge` prunes edges that would be no-ops in this
/// abstraction (the predicate form's all-don't-care windows); the mapping
/// form passes a predicate that never skips, relying on the visited set to
/// absorb the (rare, harmless) no-op reversal instead.
fn bfs_solution_length(
    start: &[Tile],
    k: usize,
    is_goal: impl Fn(&[Tile]) -> bool,
    skip_edge: impl Fn(&[Tile], usize, usize) -> bool,
) -> Option<u32> {
    if is_goal(start) {
        return Some(0);
    }
    let n = start.len();
    let mut visited: HashSet<Vec<Tile>> = HashSet::new();
    let mut queue: VecDeque<(Vec<Tile>, u32)> = VecDeque::new();
    visited.insert(start.to_vec());
    queue.push_back((start.to_vec(), 0));

    while let Some((current, depth)) = queue.pop_front() {
        for pos in 0..n {
            if skip_edge(&current, pos, k) {
                continue;
            }
            let next = reverse_window(&current, pos, k);
            if !visited.insert(next.clone()) {
                continue;
            }
            if is_goal(&next) {
                return Some(depth + 1);
            }
            queue.push_back((next, depth + 1));
        }
    }
    None
}

/// A memo from normalized abstracted state to its optimal solution length in
/// the abstracted graph, scoped to whichever heuristic instance owns it
/// (rather than exposed as an implicit process-wide global — see
/// DESIGN.md). Predicate-form and mapping-form results are kept in separate
/// tables, since the same raw sequence can mean two different abstracted
/// graphs depending on which goal test applies to it.
#[derive(Debug, Default)]
pub struct AbstractionCache {
    predicate_cache: HashMap<Vec<Tile>, HeuristicValue>,
    mapping_cache: HashMap<Vec<Tile>, HeuristicValue>,
}

impl AbstractionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Solve an abstraction produced by [`abstract_by_predicate`].
    pub fn solution_length_predicate(&mut self, abstraction: &[Tile], k: usize) -> HeuristicValue {
        let key = normalize_predicate(abstraction);
        if let Some(&cached) = self.predicate_cache.get(&key) {
            return cached;
        }
        let result = bfs_solution_length(
            &key,
            k,
            is_goal_predicate,
            |state, pos, k| !window_has_non_zero(state, pos, k),
        );
        let value = HeuristicValue::from_option(result);
        debug!(cache_size = self.predicate_cache.len(), ?value, "predicate abstraction cache miss");
        self.predicate_cache.insert(key, value);
        value
    }

    /// Solve an abstraction produced by [`abstract_by_mapping`]. `mapping`
    /// is applied to the real identity 1..=N to build the target goal
    /// pattern the BFS searches for.
    pub fn solution_length_mapping(
        &mut self,
        abstraction: &[Tile],
        k: usize,
        mapping: impl Fn(Tile) -> Tile,
    ) -> HeuristicValue {
        let n = abstraction.len();
        let goal_sequence: Vec<Tile> = (1..=n as Tile).map(&mapping).collect();
        let canonical = canonical_min_rotation(abstraction);
        // The cache key must disambiguate which mapping produced this raw
        // sequence, since two different mappings can coincide on it.
        let mut key = canonical.clone();
        key.extend_from_slice(&goal_sequence);
        if let Some(&cached) = self.mapping_cache.get(&key) {
            return cached;
        }
        let result = bfs_solution_length(
            &canonical,
            k,
            |state| is_goal_mapping(state, &goal_sequence),
            |_, _, _| false,
        );
        let value = HeuristicValue::from_option(result);
        self.mapping_cache.insert(key, value);
        value
    }
}
