use anyhow::{Context, Result, bail};
use calcsolve::utils::validate_display_value;
use calcsolve::{BruteForceSolver, Operator, Solution};
use clap::{Parser, ValueEnum};
use log::{info, warn};

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Example levels of the calculator game
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Level {
    #[value(name = "level-123")]
    Level123,
    #[value(name = "level-5")]
    Level5,
}

impl Level {
    pub fn puzzle(&self) -> Puzzle {
        match self {
            Level::Level123 => Puzzle {
                start: 22,
                target: 3,
                moves: 4,
                operators: vec![
                    Operator::DigitSum,
                    Operator::Divide(2),
                    Operator::MirrorAppend,
                    Operator::Backspace,
                ],
            },
            Level::Level5 => Puzzle {
                start: 3,
                target: 4,
                moves: 3,
                operators: vec![Operator::Add(4), Operator::Multiply(4), Operator::Divide(4)],
            },
        }
    }
}

/// Calcsolve - Solve calculator number puzzles by brute force
#[derive(Parser, Debug)]
#[command(name = "calcsolve")]
#[command(
    about = "Find every sequence of calculator keys that turns the start number into the target"
)]
#[command(version)]
pub struct CliArgs {
    /// Number initially on the display
    #[arg(short, long, allow_negative_numbers = true, required_unless_present = "level")]
    pub start: Option<i64>,

    /// Number to reach
    #[arg(short, long, allow_negative_numbers = true, required_unless_present = "level")]
    pub target: Option<i64>,

    /// Exact number of key presses
    #[arg(short, long, required_unless_present = "level")]
    pub moves: Option<usize>,

    /// Available keys, e.g. x4 +3 -2 /2 1=>2 sum mirror << shift< shift> 5
    #[arg(value_name = "OPERATOR", allow_negative_numbers = true)]
    pub operators: Vec<Operator>,

    /// Solve a built-in example level instead
    #[arg(long, value_enum, conflicts_with_all = ["start", "target", "moves", "operators"])]
    pub level: Option<Level>,

    /// Spread the search over all cores
    #[arg(long)]
    pub parallel: bool,

    /// Stop at the first sequence found
    #[arg(long, conflicts_with = "parallel")]
    pub first: bool,

    /// Print the value after every key press of each sequence
    #[arg(long)]
    pub explain: bool,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Parameters of one puzzle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    pub start: i64,
    pub target: i64,
    pub moves: usize,
    pub operators: Vec<Operator>,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub puzzle: Puzzle,
    pub parallel: bool,
    pub first: bool,
    pub explain: bool,
    pub log_level: LogLevel,
}

/// Turn parsed arguments into a validated configuration
pub fn build_config(args: CliArgs) -> Result<CliConfig> {
    let puzzle = match (args.level, args.start, args.target, args.moves) {
        (Some(level), _, _, _) => level.puzzle(),
        (None, Some(start), Some(target), Some(moves)) => {
            validate_display_value(start).context("Invalid start value")?;
            validate_display_value(target).context("Invalid target value")?;
            if args.operators.is_empty() {
                bail!("At least one operator is required");
            }
            Puzzle {
                start,
                target,
                moves,
                operators: args.operators,
            }
        }
        _ => bail!("--start, --target and --moves are required unless --level is given"),
    };

    Ok(CliConfig {
        puzzle,
        parallel: args.parallel,
        first: args.first,
        explain: args.explain,
        log_level: args.log_level,
    })
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    build_config(CliArgs::parse())
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .try_init()
        .context("Failed to initialize logging")
}

/// One line per solution, plus the intermediate values when explaining
fn render_solution(
    solver: &BruteForceSolver,
    solution: &Solution,
    explain: bool,
) -> Result<String> {
    let mut out = format!("Desired sequence of operations: {}", solution);
    if explain {
        let trace = solver
            .pipeline()
            .trace(&solution.operators)
            .context("Failed to replay solution")?;
        out.push_str(&format!("\n    {}", trace));
    }
    Ok(out)
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    // Initialize logging
    init_logging(&config.log_level)?;

    let Puzzle {
        start,
        target,
        moves,
        operators,
    } = config.puzzle;

    info!(
        "Searching for {} key presses from {} to {} using {} operators",
        moves,
        start,
        target,
        operators.len()
    );

    let solver =
        BruteForceSolver::new(start, target, moves, operators).context("Invalid puzzle")?;

    let solutions = if config.first {
        solver.first_solution()?.into_iter().collect()
    } else if config.parallel {
        solver.run_parallel()?
    } else {
        solver.run()?
    };

    if solutions.is_empty() {
        warn!("No matching sequence found");
        println!("No sequence found.");
        return Ok(());
    }

    for solution in &solutions {
        println!("{}", render_solution(&solver, solution, config.explain)?);
    }
    Ok(())
}
