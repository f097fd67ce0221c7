use cubesolve::cube::{Cube, CubeError, MoveSet};
use cubesolve::notation::{NotationError, parse_moves, replay};
use cubesolve::search::{Algorithm, ParallelConfig, SearchConfig, SolveError, Solver};

const SOLVED: &str = "000000000111111111222222222333333333444444444555555555";

fn scrambled(moves: &str, set: MoveSet) -> Cube {
    let mut cube = Cube::solved();
    replay(&mut cube, moves, set).unwrap();
    cube
}

fn solver(set: MoveSet, levels: usize, max_moves: usize, workers: usize) -> Solver {
    Solver::new(
        SearchConfig::default()
            .with_move_set(set)
            .with_bfs_levels(levels)
            .with_max_moves(max_moves),
        ParallelConfig::default().with_workers(workers),
    )
}

#[test]
fn test_solved_string_round_trip() {
    let cube: Cube = SOLVED.parse().unwrap();
    assert_eq!(cube, Cube::solved());
    assert_eq!(cube.to_string(), SOLVED);
    assert_eq!(Cube::from_state(cube.state()).unwrap(), cube);
}

#[test]
fn test_already_solved_input() {
    let result = solver(MoveSet::Official, 6, 20, 4)
        .solve(&SOLVED.parse().unwrap())
        .unwrap();
    assert!(result.solution.unwrap().is_empty());
    assert_eq!(result.statistics.workers, 0);
    assert_eq!(result.statistics.states_expanded, 0);
}

#[test]
fn test_single_slide() {
    let start = scrambled("L0", MoveSet::Layered);
    let result = solver(MoveSet::Layered, 6, 20, 2).solve(&start).unwrap();
    let solution = result.solution.unwrap();
    assert!(solution.len() <= 1);
    assert!(solution.verify(&start));
}

#[test]
fn test_layered_scramble_replays() {
    let start = scrambled("R1U0L0C1L0", MoveSet::Layered);
    let result = solver(MoveSet::Layered, 3, 8, 3).solve(&start).unwrap();
    let solution = result.solution.unwrap();
    assert!(solution.len() <= 6);

    // Replaying the printed labels must solve the cube too
    let mut cube = start;
    replay(&mut cube, &solution.to_string(), MoveSet::Layered).unwrap();
    assert!(cube.is_solved());
}

#[test]
fn test_official_scramble_replays() {
    let start = scrambled("R U' F2 L", MoveSet::Official);
    let result = solver(MoveSet::Official, 2, 6, 4).solve(&start).unwrap();
    let solution = result.solution.unwrap();
    assert!(solution.len() <= 4);

    let mut cube = start;
    replay(&mut cube, &solution.to_string(), MoveSet::Official).unwrap();
    assert!(cube.is_solved());
}

#[test]
fn test_deterministic_for_fixed_workers() {
    let start = scrambled("F R' D B", MoveSet::Official);
    let first = solver(MoveSet::Official, 2, 6, 3).solve(&start).unwrap();
    let second = solver(MoveSet::Official, 2, 6, 3).solve(&start).unwrap();
    assert!(first.is_solved());
    assert_eq!(first.solution, second.solution);
}

#[test]
fn test_every_algorithm_solves() {
    let start = scrambled("U R2 F'", MoveSet::Official);
    for algorithm in [
        Algorithm::Combined,
        Algorithm::Bidirectional,
        Algorithm::IterativeDeepening,
    ] {
        let config = SearchConfig::default()
            .with_algorithm(algorithm)
            .with_bfs_levels(1)
            .with_max_moves(4);
        let result = Solver::new(config, ParallelConfig::default().with_workers(2))
            .solve(&start)
            .unwrap();
        let solution = result.solution.unwrap();
        assert!(solution.verify(&start), "{} failed", algorithm);
        assert!(solution.len() <= 4);
    }
}

#[test]
fn test_explicit_goal() {
    let start = scrambled("R1", MoveSet::Layered);
    let result = solver(MoveSet::Layered, 2, 4, 2)
        .solve_towards(&start, &Cube::solved())
        .unwrap();
    assert!(result.solution.unwrap().verify(&start));
}

#[test]
fn test_budget_exhausted_is_not_an_error() {
    let start = scrambled("R U F L D", MoveSet::Official);
    let result = solver(MoveSet::Official, 1, 3, 2).solve(&start).unwrap();
    assert!(!result.is_solved());
    assert!(result.to_string().contains("No solution"));
}

#[test]
fn test_invalid_inputs() {
    assert_eq!("0123".parse::<Cube>(), Err(CubeError::IncorrectLength(4)));

    let swapped: Cube = "100000000011111111222222222333333333444444444555555555"
        .parse()
        .unwrap();
    assert!(matches!(
        Solver::default().solve(&swapped),
        Err(SolveError::InvalidStart(_))
    ));

    assert!(matches!(
        parse_moves("R Q", MoveSet::Official),
        Err(NotationError::UnknownMove { found: 'Q', .. })
    ));
}
