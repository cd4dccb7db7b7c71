//! End-to-end scenarios for the TopSpin search engine: the literal table of
//! initial instances, and cross-checks between A*, IDA*, and exhaustive BFS
//! on small permutations where an exhaustive search is tractable.

use std::collections::{HashSet, VecDeque};

use topspin::heuristics::{
    BreakpointHeuristic, GapHeuristic, GroupHeuristic, GroupHeuristicC, Heuristic,
    ManhattanHeuristic, ModDistanceHeuristic, ModDistanceHeuristicC,
};
use topspin::search::{AStar, IdaStar, SearchEngine, SearchResult};
use topspin::state::Tile;
use topspin::{Puzzle, State};

/// Exhaustive breadth-first search over the *real* state space, used as a
/// ground truth for optimal solution length on small N.
fn exhaustive_optimal_distance(puzzle: &Puzzle) -> Option<u32> {
    if puzzle.is_goal(&puzzle.initial_state) {
        return Some(0);
    }
    let mut visited: HashSet<Vec<Tile>> = HashSet::new();
    let mut queue: VecDeque<(State, u32)> = VecDeque::new();
    visited.insert(puzzle.initial_state.as_slice().to_vec());
    queue.push_back((puzzle.initial_state.clone(), 0));

    while let Some((state, depth)) = queue.pop_front() {
        for pair in puzzle.successors(&state) {
            if !visited.insert(pair.state.as_slice().to_vec()) {
                continue;
            }
            if puzzle.is_goal(&pair.state) {
                return Some(depth + 1);
            }
            queue.push_back((pair.state, depth + 1));
        }
    }
    None
}

fn solve_with(engine: &mut dyn SearchEngine, puzzle: &Puzzle, heuristic: Box<dyn Heuristic>) -> usize {
    match engine.search(puzzle, heuristic).0 {
        SearchResult::Success(plan) => plan.len(),
        SearchResult::ProvablyUnsolvable => panic!("expected a solution for {puzzle:?}"),
    }
}

fn puzzle(n: usize, k: usize, perm: Vec<Tile>) -> Puzzle {
    Puzzle::new(n, k, State::new(perm).unwrap()).unwrap()
}

// Row 1: N=4, K=4, [2,1,4,3], gap, optimal length 1.
#[test]
fn row_1_one_move_scramble() {
    let p = puzzle(4, 4, vec![2, 1, 4, 3]);
    assert_eq!(solve_with(&mut AStar::new(), &p, Box::new(GapHeuristic)), 1);
    assert_eq!(solve_with(&mut IdaStar::new(), &p, Box::new(GapHeuristic)), 1);
    assert_eq!(exhaustive_optimal_distance(&p), Some(1));
}

// Row 2: N=5, K=4, already solved, optimal length 0.
#[test]
fn row_2_already_solved() {
    let p = puzzle(5, 4, vec![1, 2, 3, 4, 5]);
    assert_eq!(solve_with(&mut AStar::new(), &p, Box::new(GapHeuristic)), 0);
    assert_eq!(solve_with(&mut IdaStar::new(), &p, Box::new(GapHeuristic)), 0);
    assert_eq!(exhaustive_optimal_distance(&p), Some(0));
}

// Row 3: N=6, K=4, [1,3,2,4,5,6], gap, optimal length 2.
#[test]
fn row_3_two_move_scramble() {
    let p = puzzle(6, 4, vec![1, 3, 2, 4, 5, 6]);
    assert_eq!(solve_with(&mut AStar::new(), &p, Box::new(GapHeuristic)), 2);
    assert_eq!(solve_with(&mut IdaStar::new(), &p, Box::new(GapHeuristic)), 2);
    assert_eq!(exhaustive_optimal_distance(&p), Some(2));
}

// Row 4: N=6, K=4, [6,5,4,3,2,1], breakpoint: A* and IDA* must agree, and
// both must match exhaustive BFS (N=6 is small enough to afford it).
#[test]
fn row_4_full_reversal_breakpoint() {
    let p = puzzle(6, 4, vec![6, 5, 4, 3, 2, 1]);
    let astar_len = solve_with(&mut AStar::new(), &p, Box::new(BreakpointHeuristic::new()));
    let ida_len = solve_with(&mut IdaStar::new(), &p, Box::new(BreakpointHeuristic::new()));
    assert_eq!(astar_len, ida_len);
    assert_eq!(exhaustive_optimal_distance(&p), Some(astar_len as u32));
}

// Row 5: N=7, K=4, [3,1,4,2,5,7,6], twoGroup: must match exhaustive BFS.
#[test]
fn row_5_two_group_matches_exhaustive() {
    let p = puzzle(7, 4, vec![3, 1, 4, 2, 5, 7, 6]);
    let astar_len = solve_with(&mut AStar::new(), &p, Box::new(GroupHeuristic::new(2)));
    assert_eq!(exhaustive_optimal_distance(&p), Some(astar_len as u32));
}

// Row 6: N=10, K=4, gap: A* and IDA* must agree on a nonzero optimal length.
// Exhaustive BFS is intractable at this size, so only cross-engine
// agreement is checked.
#[test]
fn row_6_large_instance_cross_engine_agreement() {
    let p = puzzle(10, 4, vec![7, 1, 4, 9, 3, 6, 2, 5, 10, 8]);
    let astar_len = solve_with(&mut AStar::new(), &p, Box::new(GapHeuristic));
    let ida_len = solve_with(&mut IdaStar::new(), &p, Box::new(GapHeuristic));
    assert!(astar_len > 0);
    assert_eq!(astar_len, ida_len);
}

// P5: every admissible heuristic must never exceed the true optimal
// distance, checked exhaustively on every permutation of a small N.
#[test]
fn p5_admissible_heuristics_never_overestimate() {
    use itertools::Itertools;

    let n = 5;
    let k = 4;
    for perm in (1..=n as Tile).permutations(n) {
        let p = puzzle(n, k, perm);
        let Some(optimal) = exhaustive_optimal_distance(&p) else {
            continue;
        };

        for (name, mut h) in heuristics_under_test() {
            let value = h.evaluate(&p.initial_state, &p);
            if let Some(estimate) = value.get() {
                assert!(
                    estimate <= optimal,
                    "{name} overestimated: h={estimate} > d*={optimal} for {:?}",
                    p.initial_state
                );
            }
        }
    }
}

fn heuristics_under_test() -> Vec<(&'static str, Box<dyn Heuristic>)> {
    vec![
        ("gap", Box::new(GapHeuristic)),
        ("manhattan", Box::new(ManhattanHeuristic::new())),
        ("breakpoint", Box::new(BreakpointHeuristic::new())),
        ("twoGroup", Box::new(GroupHeuristic::new(2))),
        ("threeGroup", Box::new(GroupHeuristic::new(3))),
        ("oddEven", Box::new(ModDistanceHeuristic::new(2))),
        ("threeDistance", Box::new(ModDistanceHeuristic::new(3))),
        ("twoGroupC", Box::new(GroupHeuristicC::new(2))),
        ("threeGroupC", Box::new(GroupHeuristicC::new(3))),
        ("oddEvenC", Box::new(ModDistanceHeuristicC::new(2))),
        ("threeDistanceC", Box::new(ModDistanceHeuristicC::new(3))),
    ]
}

// P6: A* and IDA* both return paths of length equal to the exhaustive-BFS
// optimum, on every permutation of a small N.
#[test]
fn p6_both_engines_find_optimal_paths() {
    use itertools::Itertools;

    let n = 5;
    let k = 4;
    for perm in (1..=n as Tile).permutations(n).take(30) {
        let p = puzzle(n, k, perm);
        let Some(optimal) = exhaustive_optimal_distance(&p) else {
            continue;
        };

        let astar_len = solve_with(&mut AStar::new(), &p, Box::new(GapHeuristic));
        let ida_len = solve_with(&mut IdaStar::new(), &p, Box::new(GapHeuristic));
        assert_eq!(astar_len as u32, optimal);
        assert_eq!(ida_len as u32, optimal);
    }
}
