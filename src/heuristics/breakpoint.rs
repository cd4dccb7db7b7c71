use crate::heuristics::{Heuristic, HeuristicValue};
use crate::state::{State, Tile};
use crate::Puzzle;
use std::collections::HashMap;

/// Undirected multigraph adjacency, kept sorted so every traversal this
/// module does is deterministic rather than dependent on hash iteration
/// order.
#[derive(Debug, Default, Clone)]
struct MultiAdj(HashMap<u32, Vec<u32>>);

impl MultiAdj {
    fn insert(&mut self, a: u32, b: u32) {
        self.0.entry(a).or_default().push(b);
        self.0.entry(b).or_default().push(a);
        self.0.get_mut(&a).unwrap().sort_unstable();
        self.0.get_mut(&b).unwrap().sort_unstable();
    }

    fn remove_one(&mut self, a: u32, b: u32) {
        if let Some(v) = self.0.get_mut(&a) {
            if let Some(pos) = v.iter().position(|&x| x == b) {
                v.remove(pos);
            }
        }
        if let Some(v) = self.0.get_mut(&b) {
            if let Some(pos) = v.iter().position(|&x| x == a) {
                v.remove(pos);
            }
        }
    }

    fn neighbors(&self, a: u32) -> &[u32] {
        self.0.get(&a).map(Vec::as_slice).unwrap_or(&[])
    }

    fn contains_edge(&self, a: u32, b: u32) -> bool {
        self.neighbors(a).contains(&b)
    }

    fn sorted_vertices(&self) -> Vec<u32> {
        let mut vertices: Vec<u32> = self.0.keys().copied().collect();
        vertices.sort_unstable();
        vertices
    }
}

/// Search for one simple alternating cycle of exactly `target_edges` edges,
/// starting with a black edge, alternating black/gray/black/..., and
/// returning to the start vertex. Vertices visited in the order the sorted
/// adjacency lists present them, so the result is deterministic.
fn find_alternating_cycle(
    black: &MultiAdj,
    gray: &MultiAdj,
    target_edges: usize,
) -> Option<Vec<(u32, u32, bool)>> {
    for start in black.sorted_vertices() {
        for &next in black.neighbors(start) {
            let mut path = vec![(start, next, true)];
            let mut visited = vec![start, next];
            if search_cycle(black, gray, start, next, true, target_edges, &mut path, &mut visited) {
                return Some(path);
            }
        }
    }
    None
}

#[allow(clippy::too_many_arguments)]
fn search_cycle(
    black: &MultiAdj,
    gray: &MultiAdj,
    start: u32,
    current: u32,
    last_was_black: bool,
    target_edges: usize,
    path: &mut Vec<(u32, u32, bool)>,
    visited: &mut Vec<u32>,
) -> bool {
    if path.len() == target_edges {
        return current == start;
    }
    let want_black = !last_was_black;
    let adj = if want_black { black } else { gray };
    let mut candidates: Vec<u32> = adj.neighbors(current).to_vec();
    candidates.sort_unstable();
    for next in candidates {
        let closing = path.len() + 1 == target_edges;
        if closing {
            if next != start {
                continue;
            }
        } else if visited.contains(&next) {
            continue;
        }
        path.push((current, next, want_black));
        visited.push(next);
        if closing {
            return true;
        }
        if search_cycle(black, gray, start, next, want_black, target_edges, path, visited) {
            return true;
        }
        path.pop();
        visited.pop();
    }
    false
}

/// Count and destructively remove simple alternating cycles at each even
/// length 4, 6, …, 20, in that order; each length is drained (repeatedly
/// searched) before moving to the next.
fn count_and_remove_cycles(black: &mut MultiAdj, gray: &mut MultiAdj) -> u32 {
    let mut cycles = 0u32;
    for half_length in 2..=10 {
        let target_edges = half_length * 2;
        loop {
            let Some(path) = find_alternating_cycle(black, gray, target_edges) else {
                break;
            };
            for &(u, v, is_black) in &path {
                if is_black {
                    black.remove_one(u, v);
                } else {
                    gray.remove_one(u, v);
                }
            }
            cycles += 1;
        }
    }
    cycles
}

/// The classical sorting-by-reversals breakpoint lower bound: rotate so tile
/// 1 is at index 0 (this single anchor already fixes the canonical
/// rotation — the breakpoint graph below is built from adjacent-value gaps,
/// which are rotation-invariant, so no other rotation could change the
/// result), pad with sentinels, build the black/gray breakpoint graph,
/// greedily decompose it into alternating cycles, and return
/// #black − #cycles (the non-ceiled form).
#[derive(Debug, Clone, Copy, Default)]
pub struct BreakpointHeuristic;

impl BreakpointHeuristic {
    pub fn new() -> Self {
        Self
    }
}

fn breakpoint_value(state: &State, n: usize) -> u32 {
    let normalized = state.normalize();
    let perm = normalized.as_slice();

    let mut extended: Vec<u32> = Vec::with_capacity(n + 2);
    extended.push(0);
    extended.extend(perm.iter().map(|&t| t as u32));
    extended.push(n as u32 + 1);

    let mut black = MultiAdj::default();
    let mut gray = MultiAdj::default();
    let mut black_count = 0u32;

    for window in extended.windows(2) {
        let (a, b) = (window[0], window[1]);
        if a.abs_diff(b) != 1 {
            black.insert(a, b);
            black_count += 1;
            if a > 0 {
                gray.insert(a, a - 1);
            }
            gray.insert(a, a + 1);
            if b > 0 {
                gray.insert(b, b - 1);
            }
            gray.insert(b, b + 1);
        }
    }

    // Remove gray edges that coincide with a black edge already joining the
    // same pair of numerically-adjacent values.
    let pairs: Vec<(u32, u32)> = gray
        .sorted_vertices()
        .into_iter()
        .flat_map(|v| {
            gray.neighbors(v)
                .iter()
                .filter(move |&&w| w > v)
                .map(move |&w| (v, w))
                .collect::<Vec<_>>()
        })
        .collect();
    for (u, v) in pairs {
        if black.contains_edge(u, v) {
            gray.remove_one(u, v);
        }
    }

    let cycles = count_and_remove_cycles(&mut black, &mut gray);
    black_count.saturating_sub(cycles)
}

impl Heuristic for BreakpointHeuristic {
    fn evaluate(&mut self, state: &State, puzzle: &Puzzle) -> HeuristicValue {
        HeuristicValue::finite(breakpoint_value(state, puzzle.n))
    }
}
