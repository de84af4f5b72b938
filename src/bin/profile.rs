use std::time::{Duration, Instant};

use amazeing::{
    config::MazeConfig,
    generators::{GeneratorOptions, generation_steps},
    maze::Maze,
    solvers::{Solver, solution_steps, solve_maze},
};

/// Runs generation and both solvers `num_iters` times on a large board without
/// rendering anything, so the step machinery can be profiled on its own.
fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt().with_target(false).init();

    let mut args = std::env::args();
    args.next(); // Skip executable name
    let num_iters = args
        .next()
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(1);

    let mut config = MazeConfig::with_size(200, 120);
    config.perfect = false;

    let mut generation = Duration::ZERO;
    let mut streamed_solve = Duration::ZERO;
    let mut plain_bfs = Duration::ZERO;
    let mut num_steps = 0usize;

    for i in 0..num_iters {
        config.seed = Some(i as u64);
        let mut maze = Maze::from_config(&config)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

        let started = Instant::now();
        num_steps += generation_steps(&mut maze, GeneratorOptions::from(&config)).count();
        generation += started.elapsed();

        let started = Instant::now();
        num_steps += solution_steps(&maze, config.entry, config.exit).count();
        streamed_solve += started.elapsed();

        let started = Instant::now();
        let outcome = solve_maze(&maze, Solver::Bfs, config.entry, config.exit);
        plain_bfs += started.elapsed();
        tracing::debug!("[profile] iteration {} solved: {}", i, outcome.is_found());
    }

    tracing::info!(
        "[profile] {} iterations on {}x{}, {} steps in total",
        num_iters,
        config.width,
        config.height,
        num_steps
    );
    tracing::info!("[profile] generation: {:?}", generation);
    tracing::info!("[profile] {}: {:?}", Solver::BidirectionalBfs, streamed_solve);
    tracing::info!("[profile] {}: {:?}", Solver::Bfs, plain_bfs);
    Ok(())
}
