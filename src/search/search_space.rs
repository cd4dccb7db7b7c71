use crate::search::search_node::SearchNode;
use crate::state::{Action, State, Tile};
use segvec::{Linear, SegVec};
use std::collections::HashMap;

/// A node id, local to the [`SearchSpace`] that minted it: it is always
/// exactly the position of the node within that space's own arena. Kept as a
/// distinct type (rather than a bare `usize`) so a `StateId` from one search
/// can't accidentally index into another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StateId(usize);

pub const NO_STATE: StateId = StateId(usize::MAX);

/// The arena a single search owns for the lifetime of its run: one
/// [`SearchNode`] and one [`State`] per unique permutation seen, indexed by
/// [`StateId`]. `registered_states` maps a state's permutation to the id of
/// the node for it, so repeated visits to the same state resolve to the same
/// node instead of growing the arena.
#[derive(Debug)]
pub struct SearchSpace {
    root_state_id: StateId,
    nodes: SegVec<SearchNode, Linear>,
    states: SegVec<State, Linear>,
    registered_states: HashMap<Vec<Tile>, StateId>,
}

impl SearchSpace {
    pub fn new(initial_state: State) -> Self {
        let mut nodes = SegVec::new();
        let mut states = SegVec::new();
        let mut registered_states = HashMap::new();

        let root_state_id = StateId(0);
        let root_node = SearchNode::new_without_parent(root_state_id);
        registered_states.insert(initial_state.as_slice().to_vec(), root_state_id);
        nodes.push(root_node);
        states.push(initial_state);

        Self {
            root_state_id,
            nodes,
            states,
            registered_states,
        }
    }

    pub fn insert_or_get_node(
        &mut self,
        state: State,
        action: Action,
        parent_id: StateId,
    ) -> &mut SearchNode {
        if let Some(&state_id) = self.registered_states.get(state.as_slice()) {
            return self.get_node_mut(state_id);
        }
        let state_id = StateId(self.nodes.len());
        let new_node = SearchNode::new_with_parent(state_id, parent_id, action);
        self.registered_states.insert(state.as_slice().to_vec(), state_id);
        self.nodes.push(new_node);
        self.states.push(state);
        self.get_node_mut(state_id)
    }

    /// Walk parent pointers from `goal_node` back to the root, reversing to
    /// produce the plan in forward order.
    pub fn extract_plan(&self, goal_node: &SearchNode) -> Vec<Action> {
        let mut plan = vec![];
        let mut current_node = goal_node;
        while current_node.get_parent_id() != NO_STATE {
            plan.push(current_node.get_action().expect("non-root node has an action"));
            current_node = self.get_node(current_node.get_parent_id());
        }
        plan.reverse();
        plan
    }

    pub fn get_root_node_mut(&mut self) -> &mut SearchNode {
        self.get_node_mut(self.root_state_id)
    }

    pub fn get_node(&self, state_id: StateId) -> &SearchNode {
        self.nodes.get(state_id.0).expect("invalid state id")
    }

    pub fn get_node_mut(&mut self, state_id: StateId) -> &mut SearchNode {
        self.nodes.get_mut(state_id.0).expect("invalid state id")
    }

    pub fn get_state(&self, state_id: StateId) -> &State {
        self.states.get(state_id.0).expect("invalid state id")
    }

    pub fn len(&self) -> usize {
        self.registered_states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registered_states.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_node_resolves_to_itself() {
        let space = SearchSpace::new(State::solved(5));
        let root = space.get_node(space.root_state_id);
        assert_eq!(root.get_parent_id(), NO_STATE);
    }

    #[test]
    fn revisiting_a_state_returns_the_same_node() {
        let mut space = SearchSpace::new(State::solved(4));
        let root_id = space.root_state_id;
        let successor = State::solved(4).apply(Action(0), 4);
        let first = space
            .insert_or_get_node(successor.clone(), Action(0), root_id)
            .get_state_id();
        let second = space
            .insert_or_get_node(successor, Action(0), root_id)
            .get_state_id();
        assert_eq!(first, second);
        assert_eq!(space.len(), 2);
    }

    #[test]
    fn two_independent_search_spaces_do_not_collide() {
        let a = SearchSpace::new(State::solved(4));
        let b = SearchSpace::new(State::solved(6));
        assert_eq!(a.get_node(a.root_state_id).get_state_id(), StateId(0));
        assert_eq!(b.get_node(b.root_state_id).get_state_id(), StateId(0));
    }
}
