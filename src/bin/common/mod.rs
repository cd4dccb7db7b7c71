//! Shared plumbing for the `astar` and `idastar` binaries: argument parsing,
//! scramble generation, and result formatting. None of this lives in the
//! library crate (see `src/lib.rs`) — it is external-collaborator territory
//! per the engine's own contract, so each binary pulls it in by path rather
//! than the library exposing it.

use clap::Parser;
use rand::Rng;
use topspin::heuristics::{Heuristic, HeuristicName, HeuristicValue};
use topspin::search::{SearchEngine, SearchResult, SearchStatistics};
use topspin::state::{Action, State};
use topspin::Puzzle;

use std::time::Instant;

#[derive(Parser, Debug)]
#[command(version, about = "Solve a scrambled TopSpin puzzle")]
pub struct Args {
    #[arg(help = "permutation length N")]
    pub n: usize,
    #[arg(help = "reversal window size K (2 <= K <= N)")]
    pub k: usize,
    #[arg(help = "number of random reversals used to scramble the solved state")]
    pub m: usize,
    #[arg(value_enum, help = "heuristic to guide the search with")]
    pub heuristic: HeuristicName,
}

/// Scramble the solved state of size `n` by `m` random legal K-reversals.
pub fn scramble(n: usize, k: usize, m: usize, rng: &mut impl Rng) -> State {
    let mut state = State::solved(n);
    for _ in 0..m {
        let r = rng.random_range(0..n);
        state = state.apply(Action(r), k);
    }
    state
}

fn format_h(h: HeuristicValue) -> String {
    match h.get() {
        Some(value) => value.to_string(),
        None => "inf".to_string(),
    }
}

/// Parse arguments, scramble an instance, run `engine` under `heuristic`,
/// and print the initial state, the search statistics, and the solution
/// path. Exits the process with a non-zero code on an argument error.
pub fn run(engine_name: &str, mut engine: Box<dyn SearchEngine>) {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let args = Args::parse();
    let mut rng = rand::rng();
    let initial_state = scramble(args.n, args.k, args.m, &mut rng);

    let puzzle = match Puzzle::new(args.n, args.k, initial_state) {
        Ok(puzzle) => puzzle,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    };

    let mut heuristic = args.heuristic.create();
    println!("initial state: {}", puzzle.initial_state);
    println!(
        "initial heuristic value: {}",
        format_h(heuristic.evaluate(&puzzle.initial_state, &puzzle))
    );

    let start = Instant::now();
    let (result, statistics) = engine.search(&puzzle, heuristic);
    let elapsed = start.elapsed();

    println!("search engine: {engine_name}");
    println!("elapsed seconds: {:.6}", elapsed.as_secs_f64());
    report_statistics(&statistics);

    match result {
        SearchResult::Success(actions) => {
            print_solution_path(&puzzle, &actions, args.heuristic.create().as_mut());
            println!("solution length: {}", actions.len());
            println!("total cost: {}", actions.len() as u32 * Action::COST);
        }
        SearchResult::ProvablyUnsolvable => {
            println!("no solution found");
        }
    }
}

fn report_statistics(statistics: &SearchStatistics) {
    println!("expanded nodes: {}", statistics.expanded_nodes);
    println!("generated nodes: {}", statistics.generated_nodes);
    println!("evaluated nodes: {}", statistics.evaluated_nodes);
    println!("reopened nodes: {}", statistics.reopened_nodes);
}

fn print_solution_path(puzzle: &Puzzle, actions: &[Action], heuristic: &mut dyn Heuristic) {
    println!("solution path:");
    let mut state = puzzle.initial_state.clone();
    for action in actions {
        state = state.apply(*action, puzzle.k);
        println!(
            "  {action} -> {state} (h={})",
            format_h(heuristic.evaluate(&state, puzzle))
        );
    }
}
