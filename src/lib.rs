#![warn(missing_debug_implementations)]
#![deny(dead_code)]
#![deny(non_ascii_idents)]
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
#![deny(unit_bindings)]
#![warn(unused_crate_dependencies)]
#![warn(unused_qualifications)]

//! A heuristic-search engine for the TopSpin puzzle: a circular permutation
//! of 1..=N solved by reversing contiguous K-windows. This crate is the
//! engine and its heuristic library only — argument parsing, scramble
//! generation, and result formatting live in the `astar` and `idastar`
//! binaries under `src/bin/`, never in the library itself.

// Crate dependencies used by the binaries but not the library proper.
// Cargo has no per-binary dependency tables, so these are declared unused
// here rather than left to warn on every `cargo build`.
use rand as _;
use tracing_subscriber as _;

pub mod abstraction;
pub mod error;
pub mod heuristics;
pub mod search;
pub mod state;

pub use error::TopSpinError;
pub use state::{Action, ActionStatePair, Puzzle, State};
