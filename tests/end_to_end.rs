use amazeing::{
    config::MazeConfig,
    error::ConfigError,
    export,
    generators::{GeneratorOptions, generate_maze, generation_steps},
    maze::{Coord, Direction, Maze},
    solvers::{SolveOutcome, Solver, solution_steps, solve_maze},
    step::StepAction,
};

fn open_board(width: u16, height: u16) -> Maze {
    let mut maze = Maze::new(width, height).unwrap();
    for y in 1..=height {
        for x in 1..=width {
            for dir in [Direction::East, Direction::South] {
                if let Some(other) = maze.neighbor((x, y), dir) {
                    maze[(x, y)].remove_wall(dir);
                    maze[other].remove_wall(dir.opposite());
                }
            }
        }
    }
    maze
}

#[test]
fn open_three_by_three_corner_to_corner() {
    let maze = open_board(3, 3);
    let outcome = solve_maze(&maze, Solver::BidirectionalBfs, (1, 1), (3, 3));
    assert_eq!(outcome.path().map(<[Coord]>::len), Some(5));
}

#[test]
fn entry_equal_to_exit() {
    let maze = open_board(3, 3);
    let steps = solution_steps(&maze, (2, 2), (2, 2)).collect::<Vec<_>>();
    assert_eq!(steps.last().map(|s| s.action), Some(StepAction::SolutionFound));
    assert_eq!(steps.last().map(|s| s.changed.clone()), Some(vec![(2, 2)]));
}

#[test]
fn walled_pair_has_no_path() {
    let maze = Maze::new(2, 1).unwrap();
    let steps = solution_steps(&maze, (1, 1), (2, 1)).collect::<Vec<_>>();
    assert_eq!(steps.last().map(|s| s.action), Some(StepAction::NoSolution));
    assert_eq!(
        solve_maze(&maze, Solver::BidirectionalBfs, (1, 1), (2, 1)),
        SolveOutcome::NoPath
    );
}

#[test]
fn two_by_one_generation_stream() {
    let mut maze = Maze::new(2, 1).unwrap();
    let actions = generation_steps(&mut maze, GeneratorOptions::default())
        .map(|step| step.action)
        .collect::<Vec<_>>();
    assert_eq!(actions, vec![StepAction::BreakingWall, StepAction::Backtracking]);
    assert!(!maze[(1, 1)].has_wall(Direction::East));
    assert!(!maze[(2, 1)].has_wall(Direction::West));
}

#[test]
fn invalid_configuration_is_rejected_before_generation() {
    let config = MazeConfig {
        entry: (0, 1),
        ..MazeConfig::with_size(5, 5)
    };
    assert!(matches!(
        Maze::from_config(&config),
        Err(ConfigError::EndpointOutOfBounds { .. })
    ));
    assert!(matches!(
        Maze::from_config(&MazeConfig::with_size(0, 5)),
        Err(ConfigError::InvalidDimensions { .. })
    ));
}

#[test]
fn generate_solve_export() {
    let config = MazeConfig {
        seed: Some(42),
        perfect: false,
        ..MazeConfig::with_size(15, 11)
    };
    let mut maze = Maze::from_config(&config).unwrap();
    generate_maze(&mut maze, GeneratorOptions::from(&config));
    let outcome = solve_maze(&maze, Solver::BidirectionalBfs, config.entry, config.exit);
    let path = outcome.path().expect("free cells are connected");

    let mut out = Vec::new();
    export::write_maze(&mut out, &maze, config.entry, config.exit, Some(path)).unwrap();
    let text = String::from_utf8(out).unwrap();
    let mut lines = text.lines();

    for y in 1..=config.height {
        let row = lines.next().unwrap();
        assert_eq!(row.len(), usize::from(config.width));
        for (x, digit) in (1..).zip(row.chars()) {
            let bits = digit.to_digit(16).unwrap() as u8;
            assert_eq!(bits, maze[(x, y)].walls().bits());
        }
    }
    assert_eq!(lines.next(), Some(""));
    assert_eq!(lines.next(), Some("1,1"));
    assert_eq!(lines.next(), Some("15,11"));
    assert_eq!(lines.next(), Some(path.len().to_string().as_str()));

    // Replaying the moves walks from entry to exit through open walls only
    let moves = lines.next().unwrap();
    assert_eq!(moves.len(), path.len() - 1);
    let mut at = config.entry;
    for letter in moves.chars() {
        let dir = Direction::ALL
            .into_iter()
            .find(|d| d.letter() == letter)
            .unwrap();
        assert!(!maze.has_wall(at, dir));
        at = maze.neighbor(at, dir).unwrap();
    }
    assert_eq!(at, config.exit);
    assert_eq!(lines.next(), None);
}
