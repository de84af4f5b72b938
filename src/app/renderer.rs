use std::{collections::HashMap, fmt, io::Write};

use crossterm::{
    QueueableCommand, cursor, queue,
    style::{self, Color, Stylize},
    terminal::{self, ClearType},
};

use crate::{
    maze::{Coord, Direction, Maze},
    step::{Step, StepAction},
};

/// What a single terminal slot shows. The board is drawn on a
/// `(2 * width + 1) x (2 * height + 1)` grid of glyphs: cells sit on odd
/// positions and the walls between them on the even ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Wall,
    Fixed,
    Empty,
    /// Cell the generator is working on
    Current,
    FromStart,
    FromGoal,
    Route,
    Start,
    Exit,
}

impl Glyph {
    /// The width of each glyph when rendered, in character widths.
    pub const WIDTH: u16 = 2;
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let styled_symbol = match self {
            Glyph::Wall => "⬜".with(Color::White),
            Glyph::Fixed => "🟪".with(Color::Magenta),
            Glyph::Empty => "  ".with(Color::Reset),
            Glyph::Current => "🟦".with(Color::Blue),
            Glyph::FromStart => "* ".with(Color::Green),
            Glyph::FromGoal => "* ".with(Color::Red),
            Glyph::Route => "🟨".with(Color::Yellow),
            Glyph::Start => "🟩".with(Color::Green),
            Glyph::Exit => "🟥".with(Color::Red),
        };

        #[cfg(debug_assertions)]
        {
            use unicode_width::UnicodeWidthStr;
            assert_eq!(
                styled_symbol.content().width(),
                Glyph::WIDTH as usize,
                "Each glyph must occupy exactly two character widths."
            );
        }

        write!(f, "{}", styled_symbol)
    }
}

/// Solver marks drawn over the board. The solver itself never writes to the maze.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Overlay {
    FromStart,
    FromGoal,
    Route,
}

/// Glyph-grid position of a cell.
fn cell_slot(coord: Coord) -> (u16, u16) {
    (coord.0 * 2 - 1, coord.1 * 2 - 1)
}

/// Draws a maze and applies step records to it incrementally.
pub struct Renderer<W: Write> {
    out: W,
    overlay: HashMap<Coord, Overlay>,
    /// Cell last highlighted by the generator
    current: Option<Coord>,
}

impl<W: Write> Renderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            overlay: HashMap::new(),
            current: None,
        }
    }

    /// Rows of glyphs needed to draw a maze of the given height.
    /// Widened so any board size can be compared against the terminal.
    pub fn rows_for(height: u16) -> u32 {
        u32::from(height) * 2 + 1
    }

    /// Columns of terminal cells needed to draw a maze of the given width.
    pub fn columns_for(width: u16) -> u32 {
        (u32::from(width) * 2 + 1) * u32::from(Glyph::WIDTH)
    }

    /// Glyph slots along one side of a board that already fits the terminal.
    fn slots_for(cells: u16) -> u16 {
        cells.saturating_mul(2).saturating_add(1)
    }

    /// Glyph shown for a cell.
    pub fn cell_glyph(&self, maze: &Maze, coord: Coord) -> Glyph {
        let cell = &maze[coord];
        if cell.is_fixed {
            Glyph::Fixed
        } else if cell.is_start {
            Glyph::Start
        } else if cell.is_exit {
            Glyph::Exit
        } else if cell.on_path {
            Glyph::Route
        } else if self.current == Some(coord) {
            Glyph::Current
        } else {
            match self.overlay.get(&coord) {
                Some(Overlay::Route) => Glyph::Route,
                Some(Overlay::FromStart) => Glyph::FromStart,
                Some(Overlay::FromGoal) => Glyph::FromGoal,
                // Uncarved cells look like solid rock
                None if !cell.visited => Glyph::Wall,
                None => Glyph::Empty,
            }
        }
    }

    /// Glyph shown for the wall slot between `coord` and its neighbor in `direction`.
    pub fn wall_glyph(&self, maze: &Maze, coord: Coord, direction: Direction) -> Glyph {
        let Some(other) = maze.neighbor(coord, direction) else {
            return Glyph::Wall;
        };
        if maze.has_wall(coord, direction) {
            return Glyph::Wall;
        }
        let on_route = |c: Coord| maze[c].on_path || self.overlay.get(&c) == Some(&Overlay::Route);
        if on_route(coord) && on_route(other) {
            Glyph::Route
        } else {
            Glyph::Empty
        }
    }

    fn print_at(&mut self, slot: (u16, u16), glyph: Glyph) -> std::io::Result<()> {
        queue!(
            self.out,
            cursor::MoveTo(slot.0 * Glyph::WIDTH, slot.1),
            style::Print(glyph)
        )
    }

    pub fn clear_screen(&mut self) -> std::io::Result<()> {
        queue!(
            self.out,
            terminal::Clear(ClearType::All),
            cursor::MoveTo(0, 0)
        )
    }

    /// Clears the screen and draws the whole board.
    pub fn draw_board(&mut self, maze: &Maze) -> std::io::Result<()> {
        self.clear_screen()?;
        // Outer frame and wall corners never change
        let (columns, rows) = (Self::slots_for(maze.width()), Self::slots_for(maze.height()));
        for y in 0..rows {
            for x in 0..columns {
                let on_frame = x == 0 || y == 0 || x == columns - 1 || y == rows - 1;
                if on_frame || (x % 2 == 0 && y % 2 == 0) {
                    self.print_at((x, y), Glyph::Wall)?;
                }
            }
        }
        let coords = maze.cells().map(|c| c.coord()).collect::<Vec<_>>();
        self.draw_cells(maze, &coords)?;
        self.out.flush()
    }

    /// Redraws the given cells and the walls around them.
    pub fn draw_cells(&mut self, maze: &Maze, coords: &[Coord]) -> std::io::Result<()> {
        for &coord in coords {
            if !maze.is_in_bounds(coord) {
                continue;
            }
            let slot = cell_slot(coord);
            self.print_at(slot, self.cell_glyph(maze, coord))?;
            for direction in Direction::ALL {
                if maze.neighbor(coord, direction).is_none() {
                    continue;
                }
                let (dx, dy) = direction.offset();
                let wall_slot = (
                    (slot.0 as i32 + dx) as u16,
                    (slot.1 as i32 + dy) as u16,
                );
                self.print_at(wall_slot, self.wall_glyph(maze, coord, direction))?;
            }
        }
        Ok(())
    }

    /// Updates the overlay from a step record and redraws what it changed.
    pub fn apply_step(&mut self, maze: &Maze, step: &Step) -> std::io::Result<()> {
        let previous = self.current.take();
        match step.action {
            StepAction::BreakingWall | StepAction::Backtracking => {
                self.current = step.changed.last().copied();
            }
            StepAction::AddingExtraPath | StepAction::NoSolution => {}
            StepAction::VisitingFromStart => self.mark(&step.changed, Overlay::FromStart),
            StepAction::VisitingFromGoal => self.mark(&step.changed, Overlay::FromGoal),
            StepAction::ClearVisited => {
                for coord in &step.changed {
                    self.overlay.remove(coord);
                }
            }
            StepAction::SolutionFound => self.mark(&step.changed, Overlay::Route),
        }
        if let Some(previous) = previous {
            self.draw_cells(maze, &[previous])?;
        }
        self.draw_cells(maze, &step.changed)?;
        self.out.flush()
    }

    fn mark(&mut self, coords: &[Coord], overlay: Overlay) {
        for &coord in coords {
            self.overlay.insert(coord, overlay);
        }
    }

    /// Drops every solver mark and the generator highlight.
    pub fn clear_overlay(&mut self) {
        self.overlay.clear();
        self.current = None;
    }

    /// Prints a line of text below the board.
    pub fn print_below(&mut self, maze: &Maze, line: u16, text: &str) -> std::io::Result<()> {
        self.out
            .queue(cursor::MoveTo(0, Self::slots_for(maze.height()).saturating_add(line)))?
            .queue(terminal::Clear(ClearType::CurrentLine))?
            .queue(style::Print(text))?;
        self.out.flush()
    }
}
