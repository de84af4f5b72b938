use std::{io::Write, process::ExitCode, time::Duration};

use amazeing::{
    app::{App, RunStatus},
    cli::{self, CliArgs, Command},
    config::MazeConfig,
    export,
    generators::{GeneratorOptions, generate_maze},
    maze::Maze,
    solvers::{SolveOutcome, Solver, solve_maze},
};
use tracing_appender::non_blocking::WorkerGuard;

/// Routes logs to `amazeing.log` so they never mix with the terminal UI.
/// The returned guard flushes the writer when dropped.
fn init_logging() -> WorkerGuard {
    let level = match std::env::var("DEBUG").as_deref() {
        Ok("1") => tracing::Level::DEBUG,
        _ => tracing::Level::INFO,
    };
    let file_appender = tracing_appender::rolling::never(".", "amazeing.log");
    let (writer, guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_max_level(level)
        .with_ansi(false)
        .init();
    guard
}

fn animate(maze: &mut Maze, args: &CliArgs) -> std::io::Result<Option<SolveOutcome>> {
    let app = App::new(Duration::from_millis(args.step_delay_ms));
    let mut stdout = std::io::stdout();
    App::setup_terminal(&mut stdout)?;
    let status = app.run(&mut stdout, maze, &args.config);
    App::restore_terminal(&mut stdout)?;
    match status? {
        RunStatus::Completed(outcome) => Ok(Some(outcome)),
        RunStatus::Cancelled => Ok(None),
    }
}

/// Generates and solves without a terminal UI. When `out` is given it receives
/// the maze in the output file format and nothing else.
fn run_batch<W: Write>(
    maze: &mut Maze,
    config: &MazeConfig,
    out: Option<&mut W>,
) -> std::io::Result<SolveOutcome> {
    generate_maze(maze, GeneratorOptions::from(config));
    let outcome = solve_maze(maze, Solver::BidirectionalBfs, config.entry, config.exit);
    if let Some(out) = out {
        export::write_maze(out, maze, config.entry, config.exit, outcome.path())?;
        out.flush()?;
    }
    Ok(outcome)
}

/// Human-readable summary. Goes to stderr so stdout can carry the maze itself.
fn report<W: Write>(status: &mut W, outcome: &SolveOutcome) -> std::io::Result<()> {
    match outcome {
        SolveOutcome::Found(path) => writeln!(status, "Path found: {} cells.", path.len()),
        SolveOutcome::NoPath => writeln!(status, "No path between entry and exit."),
        SolveOutcome::InvalidEndpoints => writeln!(status, "Entry or exit is outside the maze."),
    }
}

fn run(args: CliArgs) -> std::io::Result<ExitCode> {
    let mut maze = match Maze::from_config(&args.config) {
        Ok(maze) => maze,
        Err(e) => {
            tracing::error!("[main] invalid configuration: {}", e);
            eprintln!("Error: {}", e);
            return Ok(ExitCode::FAILURE);
        }
    };
    let config = &args.config;
    let mut status = std::io::stderr().lock();

    let outcome = if args.animate {
        match animate(&mut maze, &args)? {
            Some(outcome) => outcome,
            None => {
                writeln!(status, "Cancelled.")?;
                return Ok(ExitCode::SUCCESS);
            }
        }
    } else if args.output.is_none() {
        run_batch(&mut maze, config, Some(&mut std::io::stdout().lock()))?
    } else {
        run_batch::<std::io::Stdout>(&mut maze, config, None)?
    };
    report(&mut status, &outcome)?;

    if let Some(file) = &args.output {
        export::save_maze(file, &maze, config.entry, config.exit, outcome.path())?;
        writeln!(status, "Maze written to {}", file.display())?;
    }
    Ok(ExitCode::SUCCESS)
}

fn main() -> std::io::Result<ExitCode> {
    let _guard = init_logging();

    let command = match cli::parse_args(std::env::args().skip(1)) {
        Ok(command) => command,
        Err(msg) => {
            eprintln!("Error: {}\n\n{}", msg, cli::USAGE);
            return Ok(ExitCode::FAILURE);
        }
    };
    match command {
        Command::Help => {
            println!("{}", cli::USAGE);
            Ok(ExitCode::SUCCESS)
        }
        Command::Run(args) => {
            tracing::info!("[main] starting with {:?}", args.config);
            run(args)
        }
    }
}
