use std::path::PathBuf;

use crate::{config::MazeConfig, maze::Coord};

pub const USAGE: &str = "\
Usage: amazeing WIDTH HEIGHT [OPTIONS]

Options:
  --entry X,Y       entry cell, 1-indexed (default 1,1)
  --exit X,Y        exit cell, 1-indexed (default WIDTH,HEIGHT)
  --imperfect       add extra paths so the maze has loops
  --seed N          seed for reproducible mazes
  --no-pattern      do not draw the fixed \"42\" pattern
  --output FILE     write the maze and its solution to FILE
  --no-animate      generate and solve without the terminal animation
  --delay MS        delay between animation steps (default 10)
  -h, --help        print this help";

/// Parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub config: MazeConfig,
    pub output: Option<PathBuf>,
    pub animate: bool,
    pub step_delay_ms: u64,
}

/// What the command line asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Run(CliArgs),
    Help,
}

fn parse_coord(flag: &str, value: Option<String>) -> Result<Coord, String> {
    let value = value.ok_or_else(|| format!("{} expects a value X,Y", flag))?;
    let (x, y) = value
        .split_once(',')
        .ok_or_else(|| format!("{} expects X,Y, got '{}'", flag, value))?;
    let parse = |s: &str| {
        s.trim()
            .parse::<u16>()
            .map_err(|_| format!("{} expects X,Y, got '{}'", flag, value))
    };
    Ok((parse(x)?, parse(y)?))
}

fn parse_number<T: std::str::FromStr>(flag: &str, value: Option<String>) -> Result<T, String> {
    let value = value.ok_or_else(|| format!("{} expects a number", flag))?;
    value
        .parse::<T>()
        .map_err(|_| format!("{} expects a number, got '{}'", flag, value))
}

/// Parses the arguments that follow the executable name.
/// Range checks on the resulting config are left to [`MazeConfig::validate`].
pub fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Command, String> {
    let mut args = args.into_iter();
    let mut dims = Vec::with_capacity(2);
    let mut entry = None;
    let mut exit = None;
    let mut perfect = true;
    let mut seed = None;
    let mut pattern = true;
    let mut output = None;
    let mut animate = true;
    let mut step_delay_ms = 10;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "--entry" => entry = Some(parse_coord("--entry", args.next())?),
            "--exit" => exit = Some(parse_coord("--exit", args.next())?),
            "--imperfect" => perfect = false,
            "--seed" => seed = Some(parse_number::<u64>("--seed", args.next())?),
            "--no-pattern" => pattern = false,
            "--output" => {
                let file = args.next().ok_or("--output expects a file name")?;
                output = Some(PathBuf::from(file));
            }
            "--no-animate" => animate = false,
            "--delay" => step_delay_ms = parse_number::<u64>("--delay", args.next())?,
            flag if flag.starts_with('-') => return Err(format!("unknown option '{}'", flag)),
            _ if dims.len() < 2 => dims.push(parse_number::<u16>("WIDTH and HEIGHT", Some(arg))?),
            _ => return Err(format!("unexpected argument '{}'", arg)),
        }
    }

    let [width, height] = dims[..] else {
        return Err("WIDTH and HEIGHT are required".to_string());
    };
    let defaults = MazeConfig::with_size(width, height);
    Ok(Command::Run(CliArgs {
        config: MazeConfig {
            entry: entry.unwrap_or(defaults.entry),
            exit: exit.unwrap_or(defaults.exit),
            perfect,
            seed,
            pattern,
            ..defaults
        },
        output,
        animate,
        step_delay_ms,
    }))
}
