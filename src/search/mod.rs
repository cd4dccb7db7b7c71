//! The two search engines (A* and IDA*) and the arena they share.
//!
//! Both engines are pure functions of a [`crate::Puzzle`] and a boxed
//! [`crate::heuristics::Heuristic`]; neither owns any state that outlives a
//! single call to `search`.

mod astar;
mod idastar;
mod search_node;
mod search_space;
mod search_statistics;

pub use astar::AStar;
pub use idastar::IdaStar;
pub use search_space::{SearchSpace, StateId};
pub use search_statistics::SearchStatistics;

use crate::heuristics::Heuristic;
use crate::state::Action;
use crate::Puzzle;

/// The outcome of a search. A failure to find a solution is
/// [`SearchResult::ProvablyUnsolvable`], an ordinary value, never an `Err`:
/// an unsolvable instance is an expected outcome of search, not a fault.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResult {
    Success(Vec<Action>),
    ProvablyUnsolvable,
}

pub trait SearchEngine {
    fn search(
        &mut self,
        puzzle: &Puzzle,
        heuristic: Box<dyn Heuristic>,
    ) -> (SearchResult, SearchStatistics);
}

/// The external vocabulary of search engine names, one per CLI binary.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
#[clap(rename_all = "kebab-case")]
pub enum SearchEngineName {
    #[clap(help = "A* best-first search")]
    AStar,
    #[clap(help = "Iterative-deepening A*")]
    IdaStar,
}

impl SearchEngineName {
    pub fn create(&self) -> Box<dyn SearchEngine> {
        match self {
            SearchEngineName::AStar => Box::new(AStar::new()),
            SearchEngineName::IdaStar => Box::new(IdaStar::new()),
        }
    }
}
