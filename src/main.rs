use clap::{Parser, Subcommand, ValueEnum};
use log::LevelFilter;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::Instant;

use cubesolve::cube::moves::format_sequence;
use cubesolve::cube::{Cube, MoveSet, validate};
use cubesolve::notation::replay;
use cubesolve::search::config::{DEFAULT_BFS_LEVELS, DEFAULT_MAX_MOVES};
use cubesolve::search::{Algorithm, ParallelConfig, SearchConfig, SearchStatistics, Solver};

// --- Command Line Arguments ---

#[derive(Parser)]
#[command(name = "cubesolve")]
#[command(about = "cubesolve - Bidirectional breadth-first cube solver")]
#[command(version)]
#[command(subcommand_required = true)]
#[command(arg_required_else_help = true)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

/// CLI algorithm selection
#[derive(Clone, Copy, Debug, ValueEnum)]
enum CliAlgorithm {
    /// Bidirectional BFS for --depth levels, then iterative deepening
    Combined,
    /// Bidirectional BFS only, spending the whole move budget on levels
    Bidirectional,
    /// Iterative deepening straight from the start
    IterativeDeepening,
}

impl From<CliAlgorithm> for Algorithm {
    fn from(cli: CliAlgorithm) -> Self {
        match cli {
            CliAlgorithm::Combined => Algorithm::Combined,
            CliAlgorithm::Bidirectional => Algorithm::Bidirectional,
            CliAlgorithm::IterativeDeepening => Algorithm::IterativeDeepening,
        }
    }
}

/// CLI move catalog selection
#[derive(Clone, Copy, Debug, ValueEnum)]
enum CliMoveSet {
    /// Face turns in official notation (R, R', R2)
    Official,
    /// Row, column and level slides with a layer depth (R0, C1, u1)
    Layered,
}

impl From<CliMoveSet> for MoveSet {
    fn from(cli: CliMoveSet) -> Self {
        match cli {
            CliMoveSet::Official => MoveSet::Official,
            CliMoveSet::Layered => MoveSet::Layered,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a cube given as a 54-digit color string
    Solve {
        /// Cube state: faces front, left, back, right, up, down, colors 0-5
        state: String,

        // --- Search budget ---
        /// Number of bidirectional BFS levels before falling back
        #[arg(long, default_value_t = DEFAULT_BFS_LEVELS)]
        depth: usize,
        /// Maximum solution length searched for
        #[arg(long, default_value_t = DEFAULT_MAX_MOVES)]
        max_moves: usize,

        // --- Algorithm selection ---
        /// Search algorithm to use
        #[arg(long, value_enum, default_value = "combined")]
        algorithm: CliAlgorithm,
        /// Move catalog to search with
        #[arg(long, value_enum, default_value = "official")]
        move_set: CliMoveSet,
        /// Solved configuration to search towards (defaults per move set)
        #[arg(long)]
        goal: Option<String>,

        // --- Parallel options ---
        /// Number of worker threads for BFS expansion
        #[arg(long, short = 'j')]
        cores: Option<usize>,

        /// Enable verbose output
        #[arg(long, short)]
        verbose: bool,
    },
    /// Generate a random scramble and print the resulting state
    Scramble {
        /// Number of moves in the scramble
        #[arg(long, default_value = "20")]
        length: usize,
        /// Random seed for reproducibility
        #[arg(long)]
        seed: Option<u64>,
        /// Move catalog to draw from
        #[arg(long, value_enum, default_value = "official")]
        move_set: CliMoveSet,
    },
    /// Apply a move sequence to a state and print the result
    Apply {
        /// Cube state as a 54-digit color string
        state: String,
        /// Moves to apply, e.g. "R U' F2" or "R1U0L0"
        moves: String,
        /// Label convention of the moves
        #[arg(long, value_enum, default_value = "official")]
        move_set: CliMoveSet,
    },
    /// Check that a state describes a reachable cube
    Validate {
        /// Cube state as a 54-digit color string
        state: String,
    },
}

/// Options for the solve command
struct SolveOptions {
    bfs_levels: usize,
    max_moves: usize,
    algorithm: Algorithm,
    move_set: MoveSet,
    goal: Option<String>,
    cores: Option<usize>,
}

// --- Commands ---

fn solve_cube(state: &str, options: &SolveOptions) -> Result<(), Box<dyn std::error::Error>> {
    let start: Cube = state.parse()?;
    validate(&start)?;
    println!("Start: {}", start);

    if start.is_solved() {
        println!("The cube is already solved.");
        return Ok(());
    }

    let config = SearchConfig::default()
        .with_algorithm(options.algorithm)
        .with_bfs_levels(options.bfs_levels)
        .with_max_moves(options.max_moves)
        .with_move_set(options.move_set);
    let parallel = ParallelConfig::default().with_workers_option(options.cores);
    let solver = Solver::new(config, parallel);

    let goal = match &options.goal {
        Some(goal) => goal.parse::<Cube>()?,
        None => solver.goal_for(&start),
    };

    println!("Goal: {}", goal);
    let config = solver.config();
    println!("Algorithm: {}", config.algorithm);
    println!("Move set: {}", config.move_set);
    if config.algorithm != Algorithm::IterativeDeepening {
        println!("Workers: {}", solver.parallel_config().num_workers);
    }

    let start_time = Instant::now();
    let result = solver.solve_towards(&start, &goal)?;
    let runtime = start_time.elapsed();

    match &result.solution {
        Some(solution) => {
            // Replay on a fresh copy so the printed sequence is known to work
            let mut check = start;
            check.apply_all(solution.moves());
            if !check.is_solved() {
                return Err(format!("solution {} does not solve the cube", solution).into());
            }
            print!("\n{}", result);
            println!("Solved: {}", check.is_solved());
        }
        None => {
            println!(
                "\nNo solution within {} moves. Try a larger --max-moves or --depth.",
                options.max_moves
            );
        }
    }

    print_search_statistics(&result.statistics);
    println!("Time: {:.2?}", runtime);

    Ok(())
}

fn scramble_cube(
    length: usize,
    seed: Option<u64>,
    move_set: MoveSet,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut rng: ChaCha8Rng = match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_os_rng(),
    };

    let moves = move_set.random_sequence(&mut rng, length);
    let mut cube = Cube::solved();
    cube.apply_all(&moves);

    println!("Moves: {}", format_sequence(&moves, move_set));
    println!("State: {}", cube);
    Ok(())
}

fn apply_moves(
    state: &str,
    moves: &str,
    move_set: MoveSet,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut cube: Cube = state.parse()?;
    let applied = replay(&mut cube, moves, move_set)?;
    println!("Applied {} moves", applied.len());
    println!("State: {}", cube);
    println!("Solved: {}", cube.is_solved());
    Ok(())
}

fn validate_cube(state: &str) -> Result<(), Box<dyn std::error::Error>> {
    let cube: Cube = state.parse()?;
    validate(&cube)?;
    println!("Valid cube configuration.");
    if cube.is_solved() {
        println!("The cube is already solved.");
    }
    Ok(())
}

/// Print search statistics
fn print_search_statistics(stats: &SearchStatistics) {
    println!("\nSearch Statistics:");
    for line in stats.format_summary().lines() {
        println!("  {}", line);
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Info
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn main() {
    let args = Args::parse();

    match args.command {
        Commands::Solve {
            state,
            depth,
            max_moves,
            algorithm,
            move_set,
            goal,
            cores,
            verbose,
        } => {
            init_logging(verbose);

            let options = SolveOptions {
                bfs_levels: depth,
                max_moves,
                algorithm: algorithm.into(),
                move_set: move_set.into(),
                goal,
                cores,
            };

            if let Err(e) = solve_cube(&state, &options) {
                eprintln!("Error solving cube: {}", e);
                std::process::exit(1);
            }
        }
        Commands::Scramble {
            length,
            seed,
            move_set,
        } => {
            init_logging(false);
            if let Err(e) = scramble_cube(length, seed, move_set.into()) {
                eprintln!("Error generating scramble: {}", e);
                std::process::exit(1);
            }
        }
        Commands::Apply {
            state,
            moves,
            move_set,
        } => {
            init_logging(false);
            if let Err(e) = apply_moves(&state, &moves, move_set.into()) {
                eprintln!("Error applying moves: {}", e);
                std::process::exit(1);
            }
        }
        Commands::Validate { state } => {
            init_logging(false);
            if let Err(e) = validate_cube(&state) {
                eprintln!("Invalid cube: {}", e);
                std::process::exit(1);
            }
        }
    }
}
