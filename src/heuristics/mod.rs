//! The heuristic library and its dispatch.
//!
//! Evaluation goes through one trait method (`Heuristic::evaluate`) on a
//! boxed implementation; `HeuristicName` is the closed, exhaustively-matched
//! tagged enum that picks which implementation to box, exposed to callers
//! only as the external CLI vocabulary via `clap::ValueEnum`.

mod breakpoint;
mod gap;
mod group;
mod group_c;
mod manhattan;

use crate::state::State;
use crate::Puzzle;
use std::cmp::Ordering;
use std::fmt::Debug;

pub use breakpoint::BreakpointHeuristic;
pub use gap::GapHeuristic;
pub use group::{GroupHeuristic, ModDistanceHeuristic};
pub use group_c::{GroupHeuristicC, ModDistanceHeuristicC};
pub use manhattan::ManhattanHeuristic;

/// A heuristic's estimate, or the *prune* sentinel meaning "no admissible
/// finite bound is available; treat this branch as a dead end". `None`
/// compares greater than every `Some`, so it behaves like +infinity under
/// both `Ord`-based aggregation (`max` over group/mod-distance components)
/// and priority-queue ordering, without risking the overflow a magic
/// `INT_MAX` sentinel invites under ordinary integer arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeuristicValue(Option<u32>);

impl HeuristicValue {
    /// No admissible finite bound; prune this branch.
    pub const PRUNE: Self = Self(None);

    pub fn finite(value: u32) -> Self {
        Self(Some(value))
    }

    pub fn from_option(value: Option<u32>) -> Self {
        Self(value)
    }

    pub fn get(self) -> Option<u32> {
        self.0
    }

    pub fn is_prune(self) -> bool {
        self.0.is_none()
    }

    /// g + h, saturating rather than overflowing, and propagating `PRUNE`.
    pub fn add_cost(self, g: u32) -> Option<u32> {
        self.0.map(|h| g.saturating_add(h))
    }
}

impl From<u32> for HeuristicValue {
    fn from(value: u32) -> Self {
        Self::finite(value)
    }
}

impl PartialOrd for HeuristicValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeuristicValue {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.0, other.0) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(a), Some(b)) => a.cmp(&b),
        }
    }
}

pub trait Heuristic: Debug {
    /// Evaluate the given state with respect to the given puzzle.
    fn evaluate(&mut self, state: &State, puzzle: &Puzzle) -> HeuristicValue;

    /// Evaluate a batch of states. The default implementation simply calls
    /// `evaluate` for each state in turn; override if a more efficient
    /// batched implementation is possible.
    fn evaluate_batch(&mut self, states: &[State], puzzle: &Puzzle) -> Vec<HeuristicValue> {
        states.iter().map(|state| self.evaluate(state, puzzle)).collect()
    }
}

/// The external vocabulary of heuristic names, exactly the literal strings
/// this engine's CLI surface accepts.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
#[clap(rename_all = "camelCase")]
pub enum HeuristicName {
    Gap,
    Manhattan,
    TwoGroup,
    ThreeGroup,
    FourGroup,
    FiveGroup,
    OddEven,
    ThreeDistance,
    FourDistance,
    TwoGroupC,
    ThreeGroupC,
    FourGroupC,
    OddEvenC,
    ThreeDistanceC,
    FourDistanceC,
    Breakpoint,
}

impl HeuristicName {
    pub fn create(&self) -> Box<dyn Heuristic> {
        match self {
            HeuristicName::Gap => Box::new(GapHeuristic),
            HeuristicName::Manhattan => Box::new(ManhattanHeuristic::new()),
            HeuristicName::TwoGroup => Box::new(GroupHeuristic::new(2)),
            HeuristicName::ThreeGroup => Box::new(GroupHeuristic::new(3)),
            HeuristicName::FourGroup => Box::new(GroupHeuristic::new(4)),
            HeuristicName::FiveGroup => Box::new(GroupHeuristic::new(5)),
            HeuristicName::OddEven => Box::new(ModDistanceHeuristic::new(2)),
            HeuristicName::ThreeDistance => Box::new(ModDistanceHeuristic::new(3)),
            HeuristicName::FourDistance => Box::new(ModDistanceHeuristic::new(4)),
            HeuristicName::TwoGroupC => Box::new(GroupHeuristicC::new(2)),
            HeuristicName::ThreeGroupC => Box::new(GroupHeuristicC::new(3)),
            HeuristicName::FourGroupC => Box::new(GroupHeuristicC::new(4)),
            HeuristicName::OddEvenC => Box::new(ModDistanceHeuristicC::new(2)),
            HeuristicName::ThreeDistanceC => Box::new(ModDistanceHeuristicC::new(3)),
            HeuristicName::FourDistanceC => Box::new(ModDistanceHeuristicC::new(4)),
            HeuristicName::Breakpoint => Box::new(BreakpointHeuristic::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prune_sorts_above_every_finite_value() {
        assert!(HeuristicValue::PRUNE > HeuristicValue::finite(u32::MAX));
        assert_eq!(
            [HeuristicValue::finite(3), HeuristicValue::PRUNE, HeuristicValue::finite(1)]
                .into_iter()
                .max()
                .unwrap(),
            HeuristicValue::PRUNE
        );
    }

    #[test]
    fn add_cost_propagates_prune() {
        assert_eq!(HeuristicValue::PRUNE.add_cost(5), None);
        assert_eq!(HeuristicValue::finite(3).add_cost(5), Some(8));
    }
}
