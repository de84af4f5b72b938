mod renderer;

use std::{
    io::{Stdout, Write},
    time::Duration,
};

use crossterm::{
    cursor,
    event::{self, KeyCode},
    queue,
    terminal::{self, ClearType},
};

pub use renderer::{Glyph, Renderer};

use crate::{
    config::MazeConfig,
    generators::{GeneratorOptions, generation_steps},
    maze::Maze,
    solvers::{SolveOutcome, solution_steps},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunStatus {
    Completed(SolveOutcome),
    /// The user stopped the animation. The board keeps whatever was carved so far.
    Cancelled,
}

/// Terminal front end: animates generation and solving on one board.
///
/// Everything runs on the calling thread. Between two steps the app waits
/// for input for at most `step_delay`, which doubles as the animation speed.
/// Cancelling simply stops pulling the step stream.
pub struct App {
    step_delay: Duration,
}

impl Default for App {
    fn default() -> Self {
        Self {
            step_delay: Duration::from_millis(10),
        }
    }
}

impl App {
    pub fn new(step_delay: Duration) -> Self {
        Self { step_delay }
    }

    /// Set a panic hook to restore terminal state on panic
    /// This ensures that the terminal is not left in raw mode or alternate screen on panic
    fn set_panic_hook() {
        let hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = App::restore_terminal(&mut std::io::stdout()); // ignore any errors as we are already failing
            hook(panic_info);
        }));
    }

    /// Setup terminal in raw mode and enter alternate screen
    /// Also sets a panic hook to restore terminal on panic
    pub fn setup_terminal(stdout: &mut Stdout) -> std::io::Result<()> {
        terminal::enable_raw_mode()?;
        App::set_panic_hook();
        queue!(
            stdout,
            terminal::EnterAlternateScreen,
            terminal::Clear(ClearType::All),
            cursor::Hide,
            cursor::MoveTo(0, 0)
        )?;
        stdout.flush()?;
        Ok(())
    }

    /// Restore terminal to original state
    /// Leave alternate screen and disable raw mode
    pub fn restore_terminal(stdout: &mut Stdout) -> std::io::Result<()> {
        queue!(stdout, terminal::LeaveAlternateScreen, cursor::Show)?;
        stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Waits up to `timeout` for a key press and reports whether it asks to quit (Esc or q).
    fn quit_requested(timeout: Duration) -> std::io::Result<bool> {
        if !event::poll(timeout)? {
            return Ok(false);
        }
        Ok(matches!(
            event::read()?,
            event::Event::Key(event::KeyEvent {
                code: KeyCode::Esc | KeyCode::Char('q'),
                kind: event::KeyEventKind::Press,
                ..
            })
        ))
    }

    /// Wait for the user to press the Esc key
    /// This function blocks until Esc is pressed
    fn wait_for_esc() -> std::io::Result<()> {
        loop {
            if let event::Event::Key(event::KeyEvent { code, kind, .. }) = event::read()? {
                if code == KeyCode::Esc && kind == event::KeyEventKind::Press {
                    break;
                }
            }
        }
        Ok(())
    }

    /// Whether the terminal can show the whole board plus the status lines.
    fn fits_terminal(maze: &Maze) -> std::io::Result<bool> {
        let (term_width, term_height) = terminal::size()?;
        Ok(App::fits(maze, (term_width, term_height)))
    }

    /// Whether a board of this size plus two status lines fits in `terminal` columns and rows.
    fn fits(maze: &Maze, terminal: (u16, u16)) -> bool {
        u32::from(terminal.0) >= Renderer::<Stdout>::columns_for(maze.width())
            && u32::from(terminal.1) >= Renderer::<Stdout>::rows_for(maze.height()) + 2
    }

    /// Generates and then solves `maze`, drawing every step.
    /// Expects the terminal to be set up with [`App::setup_terminal`].
    pub fn run(
        &self,
        stdout: &mut Stdout,
        maze: &mut Maze,
        config: &MazeConfig,
    ) -> std::io::Result<RunStatus> {
        let mut renderer = Renderer::new(&mut *stdout);

        if !App::fits_terminal(maze)? {
            tracing::warn!(
                "[app] {}x{} maze does not fit the terminal",
                maze.width(),
                maze.height()
            );
            renderer.clear_screen()?;
            renderer.print_below(
                maze,
                0,
                "Terminal is too small for this maze. Press Esc to exit...",
            )?;
            App::wait_for_esc()?;
            return Ok(RunStatus::Cancelled);
        }

        tracing::info!("[app] animating generation");
        let mut steps = generation_steps(maze, GeneratorOptions::from(config));
        renderer.draw_board(steps.maze())?;
        renderer.print_below(steps.maze(), 0, "Generating... press Esc or q to abort")?;
        while let Some(step) = steps.next() {
            renderer.apply_step(steps.maze(), &step)?;
            if App::quit_requested(self.step_delay)? {
                tracing::info!("[app] generation aborted by user");
                return Ok(RunStatus::Cancelled);
            }
        }
        drop(steps);

        tracing::info!("[app] animating solver");
        renderer.clear_overlay();
        renderer.draw_board(maze)?;
        renderer.print_below(maze, 0, "Solving... press Esc or q to abort")?;
        let mut search = solution_steps(maze, config.entry, config.exit);
        while let Some(step) = search.next() {
            renderer.apply_step(maze, &step)?;
            if App::quit_requested(self.step_delay)? {
                tracing::info!("[app] solving aborted by user");
                return Ok(RunStatus::Cancelled);
            }
        }
        let outcome = search.outcome().cloned().unwrap_or(SolveOutcome::NoPath);
        drop(search);

        maze.clear_annotations();
        if let SolveOutcome::Found(path) = &outcome {
            maze.annotate_path(path);
        }
        renderer.clear_overlay();
        renderer.draw_board(maze)?;
        let msg = match &outcome {
            SolveOutcome::Found(path) => {
                format!("Path found! {} cells. Press Esc to exit...", path.len())
            }
            SolveOutcome::NoPath => "No path found. Press Esc to exit...".to_string(),
            SolveOutcome::InvalidEndpoints => {
                "Entry or exit is outside the maze. Press Esc to exit...".to_string()
            }
        };
        renderer.print_below(maze, 0, &msg)?;
        App::wait_for_esc()?;
        Ok(RunStatus::Completed(outcome))
    }
}
