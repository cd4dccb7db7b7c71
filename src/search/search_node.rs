use crate::heuristics::HeuristicValue;
use crate::search::search_space::{StateId, NO_STATE};
use crate::state::Action;

/// The status of a search node, following the arena the node lives in rather
/// than any free-standing side map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchNodeStatus {
    /// New node, not yet opened
    New,
    /// Node is in the open list
    Open,
    /// Node is in the closed list
    Closed,
    /// Node is a deadend
    Deadend,
}

#[derive(Debug, Clone, Copy)]
pub struct SearchNode {
    state_id: StateId,
    status: SearchNodeStatus,
    f: HeuristicValue,
    g: u32,
    h: HeuristicValue,
    action: Option<Action>,
    parent_id: StateId,
}

impl SearchNode {
    /// Build the root node. Its id is assigned by the owning search space,
    /// not by the node itself, so ids stay local to one arena.
    pub fn new_without_parent(state_id: StateId) -> Self {
        Self {
            state_id,
            status: SearchNodeStatus::New,
            f: HeuristicValue::PRUNE,
            g: 0,
            h: HeuristicValue::PRUNE,
            action: None,
            parent_id: NO_STATE,
        }
    }

    pub fn new_with_parent(state_id: StateId, parent_id: StateId, action: Action) -> Self {
        Self {
            state_id,
            status: SearchNodeStatus::New,
            f: HeuristicValue::PRUNE,
            g: 0,
            h: HeuristicValue::PRUNE,
            action: Some(action),
            parent_id,
        }
    }

    pub fn open(&mut self, g: u32, h: HeuristicValue) {
        self.status = SearchNodeStatus::Open;
        self.g = g;
        self.h = h;
        self.f = HeuristicValue::from_option(h.add_cost(g));
    }

    pub fn mark_as_deadend(&mut self) {
        self.status = SearchNodeStatus::Deadend;
        self.f = HeuristicValue::PRUNE;
    }

    pub fn close(&mut self) {
        debug_assert_eq!(
            self.status,
            SearchNodeStatus::Open,
            "node must be open to close it"
        );
        self.status = SearchNodeStatus::Closed;
    }

    pub fn get_status(&self) -> SearchNodeStatus {
        self.status
    }

    pub fn get_state_id(&self) -> StateId {
        self.state_id
    }

    pub fn get_f(&self) -> HeuristicValue {
        self.f
    }

    pub fn get_g(&self) -> u32 {
        self.g
    }

    pub fn get_h(&self) -> HeuristicValue {
        self.h
    }

    pub fn get_parent_id(&self) -> StateId {
        self.parent_id
    }

    pub fn get_action(&self) -> Option<Action> {
        self.action
    }
}
