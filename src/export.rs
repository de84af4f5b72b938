//! Writer for the maze output file.
//!
//! Layout:
//! - one line per row, each cell's wall mask as an uppercase hex digit, no separators
//! - a blank line
//! - `entry.x,entry.y`
//! - `exit.x,exit.y`
//! - the number of cells on the path (0 without one)
//! - one `N`/`E`/`S`/`W` letter per move along the path

use std::{fs::File, io::Write, path::Path};

use crate::{
    maze::{Coord, Maze},
    solvers::path_directions,
};

pub fn write_maze<W: Write>(
    out: &mut W,
    maze: &Maze,
    entry: Coord,
    exit: Coord,
    path: Option<&[Coord]>,
) -> std::io::Result<()> {
    for y in 1..=maze.height() {
        let row = (1..=maze.width())
            .map(|x| format!("{:X}", maze[(x, y)].walls()))
            .collect::<String>();
        writeln!(out, "{}", row)?;
    }
    writeln!(out)?;
    writeln!(out, "{},{}", entry.0, entry.1)?;
    writeln!(out, "{},{}", exit.0, exit.1)?;

    let path = path.unwrap_or_default();
    writeln!(out, "{}", path.len())?;
    let moves = path_directions(path)
        .into_iter()
        .map(|dir| dir.letter())
        .collect::<String>();
    writeln!(out, "{}", moves)?;
    Ok(())
}

/// Writes the maze to the file at `path`, replacing any existing file.
pub fn save_maze(
    file: &Path,
    maze: &Maze,
    entry: Coord,
    exit: Coord,
    path: Option<&[Coord]>,
) -> std::io::Result<()> {
    let mut writer = std::io::BufWriter::new(File::create(file)?);
    write_maze(&mut writer, maze, entry, exit, path)?;
    writer.flush()?;
    tracing::info!("[export] maze written to {}", file.display());
    Ok(())
}
