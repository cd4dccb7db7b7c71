//! A* search: an arena-backed, reopening-tolerant best-first search ordered
//! by f = g + h, a greedy best-first search extended to track g alongside h
//! instead of ranking by h alone.

use crate::heuristics::{Heuristic, HeuristicValue};
use crate::search::search_node::SearchNodeStatus;
use crate::search::search_space::{SearchSpace, StateId};
use crate::search::search_statistics::SearchStatistics;
use crate::search::{SearchEngine, SearchResult};
use crate::state::Action;
use crate::Puzzle;
use priority_queue::PriorityQueue;
use std::cmp::Reverse;
use tracing::{debug, info};

#[derive(Debug, Default)]
pub struct AStar;

impl AStar {
    pub fn new() -> Self {
        Self
    }
}

impl SearchEngine for AStar {
    fn search(
        &mut self,
        puzzle: &Puzzle,
        mut heuristic: Box<dyn Heuristic>,
    ) -> (SearchResult, SearchStatistics) {
        let mut statistics = SearchStatistics::new();
        let mut search_space = SearchSpace::new(puzzle.initial_state.clone());
        let mut queue: PriorityQueue<StateId, (Reverse<HeuristicValue>, Reverse<HeuristicValue>)> =
            PriorityQueue::new();

        let h0 = heuristic.as_mut().evaluate(&puzzle.initial_state, puzzle);
        info!(?h0, "A* starting");
        let root_id = search_space.get_root_node_mut().get_state_id();
        search_space.get_root_node_mut().open(0, h0);
        if !h0.is_prune() {
            let f0 = search_space.get_node(root_id).get_f();
            queue.push(root_id, (Reverse(f0), Reverse(h0)));
        }

        if puzzle.is_goal(&puzzle.initial_state) {
            return (SearchResult::Success(vec![]), statistics);
        }

        while let Some((state_id, _)) = queue.pop() {
            let node = search_space.get_node(state_id);
            if node.get_status() == SearchNodeStatus::Closed {
                continue;
            }
            let g = node.get_g();
            search_space.get_node_mut(state_id).close();
            statistics.increment_expanded_nodes();

            let state = search_space.get_state(state_id).clone();
            if puzzle.is_goal(&state) {
                let goal_node = search_space.get_node(state_id);
                let plan = search_space.extract_plan(goal_node);
                info!(expanded = statistics.expanded_nodes, plan_length = plan.len(), "A* found a goal");
                return (SearchResult::Success(plan), statistics);
            }

            let successors = puzzle.successors(&state);
            statistics.increment_generated_nodes(successors.len());

            let successor_states: Vec<_> = successors.iter().map(|p| p.state.clone()).collect();
            let h_values = heuristic.evaluate_batch(&successor_states, puzzle);

            for (pair, h_value) in successors.into_iter().zip(h_values) {
                if h_value.is_prune() {
                    search_space
                        .insert_or_get_node(pair.state, pair.action, state_id)
                        .mark_as_deadend();
                    continue;
                }
                let child_id = search_space
                    .insert_or_get_node(pair.state, pair.action, state_id)
                    .get_state_id();
                let child_status = search_space.get_node(child_id).get_status();
                let new_g = g + Action::COST;

                let should_open = match child_status {
                    SearchNodeStatus::New => true,
                    SearchNodeStatus::Open | SearchNodeStatus::Closed => {
                        new_g < search_space.get_node(child_id).get_g()
                    }
                    SearchNodeStatus::Deadend => false,
                };

                if !should_open {
                    continue;
                }

                let was_new = child_status == SearchNodeStatus::New;
                let child_node = search_space.get_node_mut(child_id);
                let h = if was_new { h_value } else { child_node.get_h() };
                child_node.open(new_g, h);
                statistics.increment_evaluated_nodes();
                if !was_new {
                    statistics.increment_reopened_nodes();
                    debug!(state_id = ?child_id, new_g, "reopening node");
                }
                let f = search_space.get_node(child_id).get_f();
                queue.push(child_id, (Reverse(f), Reverse(h)));
            }
        }

        info!(expanded = statistics.expanded_nodes, "A* exhausted the open list");
        (SearchResult::ProvablyUnsolvable, statistics)
    }
}
