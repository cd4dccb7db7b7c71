//! Iterative-deepening A*: an iterated threshold depth-first search with a
//! per-iteration visited set, parent-move pruning, a bounded transposition
//! table, and an RBFS-style bound update that feeds the next iteration's
//! threshold from the minimum over-bound f this iteration saw.

use crate::heuristics::Heuristic;
use crate::search::search_statistics::SearchStatistics;
use crate::search::{SearchEngine, SearchResult};
use crate::state::{Action, State, Tile};
use crate::Puzzle;
use itertools::Itertools;
use lru::LruCache;
use std::collections::HashSet;
use std::num::NonZeroUsize;
use tracing::{debug, info};

/// Bound on the number of live (state -> best g) entries kept per
/// iteration; the table is rebuilt empty at the start of every bound, so
/// this only needs to be large enough to be useful within one iteration.
const TRANSPOSITION_TABLE_CAPACITY: usize = 1 << 20;

#[derive(Debug, Default)]
pub struct IdaStar;

impl IdaStar {
    pub fn new() -> Self {
        Self
    }
}

/// The result of one bounded DFS probe.
enum Probe {
    /// The goal was found; the actions taken to reach it, accumulated in
    /// reverse (deepest first) as the recursion unwinds.
    Found(Vec<Action>),
    /// No goal within this bound. The smallest f that exceeded the bound
    /// anywhere in the probed subtree becomes the next bound to try;
    /// `None` means every reachable successor was already exhausted, i.e.
    /// the state is provably unsolvable.
    NotFound(Option<u32>),
}

impl SearchEngine for IdaStar {
    fn search(
        &mut self,
        puzzle: &Puzzle,
        mut heuristic: Box<dyn Heuristic>,
    ) -> (SearchResult, SearchStatistics) {
        let mut statistics = SearchStatistics::new();

        if puzzle.is_goal(&puzzle.initial_state) {
            return (SearchResult::Success(vec![]), statistics);
        }

        let Some(mut bound) = heuristic
            .as_mut()
            .evaluate(&puzzle.initial_state, puzzle)
            .get()
        else {
            info!("IDA* found no admissible bound for the initial state");
            return (SearchResult::ProvablyUnsolvable, statistics);
        };

        info!(bound, "IDA* starting");
        loop {
            let capacity = NonZeroUsize::new(TRANSPOSITION_TABLE_CAPACITY)
                .expect("transposition table capacity is a nonzero constant");
            let mut transposition_table: LruCache<Vec<Tile>, u32> = LruCache::new(capacity);
            let mut path_visited: HashSet<Vec<Tile>> = HashSet::new();
            path_visited.insert(puzzle.initial_state.as_slice().to_vec());

            let probe = dfs(
                puzzle,
                heuristic.as_mut(),
                &puzzle.initial_state,
                0,
                bound,
                None,
                &mut path_visited,
                &mut transposition_table,
                &mut statistics,
            );

            match probe {
                Probe::Found(mut actions) => {
                    actions.reverse();
                    info!(
                        expanded = statistics.expanded_nodes,
                        plan_length = actions.len(),
                        "IDA* found a goal"
                    );
                    return (SearchResult::Success(actions), statistics);
                }
                Probe::NotFound(None) => {
                    info!(expanded = statistics.expanded_nodes, "IDA* exhausted the bound");
                    return (SearchResult::ProvablyUnsolvable, statistics);
                }
                Probe::NotFound(Some(next_bound)) => {
                    if next_bound <= bound {
                        // The bound stopped growing without a goal: nothing
                        // left to explore.
                        return (SearchResult::ProvablyUnsolvable, statistics);
                    }
                    debug!(old_bound = bound, new_bound = next_bound, "raising IDA* bound");
                    bound = next_bound;
                }
            }
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn dfs(
    puzzle: &Puzzle,
    heuristic: &mut dyn Heuristic,
    state: &State,
    g: u32,
    bound: u32,
    parent: Option<&State>,
    path_visited: &mut HashSet<Vec<Tile>>,
    transposition_table: &mut LruCache<Vec<Tile>, u32>,
    statistics: &mut SearchStatistics,
) -> Probe {
    statistics.increment_expanded_nodes();

    let successors = puzzle.successors(state);
    statistics.increment_generated_nodes(successors.len());

    // Evaluate every non-parent successor, drop the ones the heuristic
    // prunes outright, and sort the rest by f so the most promising branch
    // is tried first.
    let candidates = successors
        .into_iter()
        .filter(|pair| parent != Some(&pair.state))
        .filter_map(|pair| {
            let h = heuristic.evaluate(&pair.state, puzzle);
            statistics.increment_evaluated_nodes();
            let f = h.add_cost(g + Action::COST)?;
            Some((pair.action, pair.state, f))
        })
        .sorted_by_key(|&(_, _, f)| f)
        .collect::<Vec<_>>();

    let mut min_excess: Option<u32> = None;

    for (action, successor_state, f) in candidates {
        if f > bound {
            min_excess = Some(min_excess.map_or(f, |current| current.min(f)));
            continue;
        }

        let new_g = g + Action::COST;
        if puzzle.is_goal(&successor_state) {
            return Probe::Found(vec![action]);
        }

        let key = successor_state.as_slice().to_vec();
        if let Some(&best_g) = transposition_table.peek(&key) {
            if best_g <= new_g {
                continue;
            }
        }
        if !path_visited.insert(key.clone()) {
            continue;
        }
        transposition_table.put(key.clone(), new_g);

        let probe = dfs(
            puzzle,
            heuristic,
            &successor_state,
            new_g,
            bound,
            Some(state),
            path_visited,
            transposition_table,
            statistics,
        );

        path_visited.remove(&key);

        match probe {
            Probe::Found(mut actions) => {
                actions.push(action);
                return Probe::Found(actions);
            }
            Probe::NotFound(Some(child_excess)) => {
                min_excess = Some(min_excess.map_or(child_excess, |current| current.min(child_excess)));
            }
            Probe::NotFound(None) => {}
        }
    }

    Probe::NotFound(min_excess)
}
