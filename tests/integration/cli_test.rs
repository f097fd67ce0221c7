use std::process::{Command, Output};

use cubesolve::cube::{Cube, MoveSet};
use cubesolve::notation::replay;

const SOLVED: &str = "000000000111111111222222222333333333444444444555555555";

fn cubesolve(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_cubesolve"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute cubesolve")
}

fn stdout_of(output: &Output) -> String {
    assert!(
        output.status.success(),
        "Command failed with status: {:?}\nstderr: {}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn state_after(moves: &str, set: MoveSet) -> String {
    let mut cube = Cube::solved();
    replay(&mut cube, moves, set).unwrap();
    cube.to_string()
}

/// Text following `prefix` on the first line that starts with it
fn field<'a>(stdout: &'a str, prefix: &str) -> Option<&'a str> {
    stdout
        .lines()
        .find_map(|line| line.trim_start().strip_prefix(prefix))
}

#[test]
fn test_solve_official() {
    let state = state_after("R U' F", MoveSet::Official);
    let stdout = stdout_of(&cubesolve(&["solve", &state, "-j", "2", "--depth", "2"]));

    assert!(stdout.contains("Solution found (3 moves):"), "{}", stdout);
    assert!(stdout.contains("Solved: true"));
    assert!(stdout.contains("Search Statistics:"));
    assert!(stdout.contains("Time:"));

    // The printed sequence solves the start state
    let solution = stdout
        .lines()
        .skip_while(|line| !line.starts_with("Solution found"))
        .nth(1)
        .unwrap()
        .trim();
    let mut cube: Cube = state.parse().unwrap();
    replay(&mut cube, solution, MoveSet::Official).unwrap();
    assert!(cube.is_solved());
}

#[test]
fn test_solve_layered() {
    let state = state_after("R1U0L0C1L0", MoveSet::Layered);
    let stdout = stdout_of(&cubesolve(&[
        "solve",
        &state,
        "--move-set",
        "layered",
        "--depth",
        "3",
        "--max-moves",
        "8",
        "-j",
        "3",
    ]));
    assert!(stdout.contains("Move set: layered"));
    assert!(stdout.contains("Goal: 0000"));
    assert!(stdout.contains("Solved: true"), "{}", stdout);
}

#[test]
fn test_solve_already_solved() {
    let stdout = stdout_of(&cubesolve(&["solve", SOLVED]));
    assert!(stdout.contains("The cube is already solved."));
    assert!(!stdout.contains("Search Statistics:"));
}

#[test]
fn test_solve_iterative_deepening() {
    let state = state_after("D2 B", MoveSet::Official);
    let stdout = stdout_of(&cubesolve(&[
        "solve",
        &state,
        "--algorithm",
        "iterative-deepening",
        "--max-moves",
        "3",
    ]));
    assert!(stdout.contains("Algorithm: iterative-deepening"));
    assert!(stdout.contains("Solution found (2 moves):"), "{}", stdout);
    assert!(!stdout.contains("Workers:"));
}

#[test]
fn test_solve_out_of_budget() {
    let state = state_after("R U F L D", MoveSet::Official);
    let stdout = stdout_of(&cubesolve(&[
        "solve",
        &state,
        "--depth",
        "1",
        "--max-moves",
        "3",
    ]));
    assert!(stdout.contains("No solution within 3 moves"));
}

#[test]
fn test_solve_rejects_invalid_state() {
    let output = cubesolve(&["solve", "12345"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error solving cube"), "{}", stderr);
    assert!(stderr.contains("expected 54, got 5"));
}

#[test]
fn test_solve_rejects_unsolved_goal() {
    let state = state_after("R", MoveSet::Official);
    let output = cubesolve(&["solve", &state, "--goal", &state]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("goal configuration is not solved"), "{}", stderr);
}

#[test]
fn test_scramble_is_reproducible() {
    let args = ["scramble", "--length", "12", "--seed", "42"];
    let first = stdout_of(&cubesolve(&args));
    let second = stdout_of(&cubesolve(&args));
    assert_eq!(first, second);

    // The printed moves produce the printed state
    let moves = field(&first, "Moves: ").unwrap();
    let state = field(&first, "State: ").unwrap();
    assert_eq!(state_after(moves, MoveSet::Official), state);

    let stdout = stdout_of(&cubesolve(&["validate", state]));
    assert!(stdout.contains("Valid cube configuration."));
}

#[test]
fn test_scramble_layered() {
    let stdout = stdout_of(&cubesolve(&[
        "scramble",
        "--length",
        "8",
        "--seed",
        "3",
        "--move-set",
        "layered",
    ]));
    let moves = field(&stdout, "Moves: ").unwrap();
    assert_eq!(moves.len(), 16);
    let state = field(&stdout, "State: ").unwrap();
    assert_eq!(state_after(moves, MoveSet::Layered), state);
}

#[test]
fn test_apply_and_undo() {
    let state = state_after("R U", MoveSet::Official);
    let stdout = stdout_of(&cubesolve(&["apply", &state, "U' R'"]));
    assert!(stdout.contains("Applied 2 moves"));
    assert!(stdout.contains(&format!("State: {}", SOLVED)));
    assert!(stdout.contains("Solved: true"));
}

#[test]
fn test_apply_rejects_bad_notation() {
    let output = cubesolve(&["apply", SOLVED, "R0", "--move-set", "official"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error applying moves"), "{}", stderr);
}

#[test]
fn test_validate_rejects_impossible_corner() {
    let output = cubesolve(&[
        "validate",
        "100000000011111111222222222333333333444444444555555555",
    ]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid cube"), "{}", stderr);
    assert!(stderr.contains("corner"));
}

#[test]
fn test_rejects_unknown_move_set() {
    let output = cubesolve(&["scramble", "--move-set", "mirror"]);
    assert!(!output.status.success());
}
