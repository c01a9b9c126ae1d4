use std::{
    error,
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;

mod area;
mod grid;
mod tile;
mod tracer;

pub use area::{enclosed_area, enclosed_count};
pub use grid::{Grid, GridBuilder};
pub use tile::{Corner, Tile};
pub use tracer::{find_loop, trace, LoopPath, LoopTrace};

#[derive(Debug)]
pub enum Error {
    InconsistentRow(usize, usize),
    InvalidChar(char),
    NoStart,
    MultipleStarts(Position, Position),
    NoLoop(Position),
    InvalidTraversal(Position, Direction),
    IterationBoundExceeded(usize),
    OddLoopLength(usize),
    UnresolvedStart(Direction, Direction),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InconsistentRow(expect_col_n, this_col_n) => write!(
                f,
                "Expect {} character(s) in each row, given {}.",
                expect_col_n, this_col_n
            ),
            Error::InvalidChar(c) => write!(f, "Invalid character({}) for pipe tile.", c),
            Error::NoStart => write!(f, "No start position in given pipe map."),
            Error::MultipleStarts(last_pos, pos) => write!(
                f,
                "Expect only one start position, given two({}, {}).",
                last_pos, pos
            ),
            Error::NoLoop(pos) => write!(
                f,
                "Failed to find any closed loop through the start position {}.",
                pos
            ),
            Error::InvalidTraversal(pos, dir) => write!(
                f,
                "Pipe at {} can't be entered when heading {}.",
                pos, dir
            ),
            Error::IterationBoundExceeded(bound) => write!(
                f,
                "Loop walk exceeds {} step(s) without closing, expect the grid to hold a simple loop.",
                bound
            ),
            Error::OddLoopLength(len) => write!(
                f,
                "Found loop with odd length({}), expect an even one on a square grid.",
                len
            ),
            Error::UnresolvedStart(first_dir, last_dir) => write!(
                f,
                "Can't resolve the start pipe, which is left heading {} and re-entered heading {}.",
                first_dir, last_dir
            ),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::North => write!(f, "north"),
            Direction::East => write!(f, "east"),
            Direction::South => write!(f, "south"),
            Direction::West => write!(f, "west"),
        }
    }
}

impl Direction {
    /// Directions in the order the start position is probed.
    pub fn all_dirs() -> &'static [Direction] {
        static ALL_DIRECTIONS: [Direction; 4] = [
            Direction::North,
            Direction::East,
            Direction::South,
            Direction::West,
        ];

        &ALL_DIRECTIONS
    }

    pub fn reverse(&self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    r: usize,
    c: usize,
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.r, self.c)
    }
}

impl Position {
    pub fn new(r: usize, c: usize) -> Self {
        Self { r, c }
    }

    pub fn r(&self) -> usize {
        self.r
    }

    pub fn c(&self) -> usize {
        self.c
    }

    pub fn neighbor(&self, dir: Direction) -> Option<Self> {
        match dir {
            Direction::North if self.r > 0 => Some(Self::new(self.r - 1, self.c)),
            Direction::East => Some(Self::new(self.r, self.c + 1)),
            Direction::South => Some(Self::new(self.r + 1, self.c)),
            Direction::West if self.c > 0 => Some(Self::new(self.r, self.c - 1)),
            _ => None,
        }
    }
}

/// Steps from the start position to the farthest point of the loop.
pub fn farthest_distance(grid: &Grid) -> Result<usize, Error> {
    find_loop(grid)?.farthest_distance()
}

/// Number of tiles enclosed by the loop through the start position.
pub fn enclosed_tiles(grid: &Grid) -> Result<usize, Error> {
    let path = find_loop(grid)?.into_path()?;
    Ok(enclosed_area(grid, &path))
}

pub fn read_grid<P: AsRef<Path>>(path: P) -> Result<Grid> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut builder = GridBuilder::new();
    for (ind, line) in reader.lines().enumerate() {
        let line = line.with_context(|| {
            format!(
                "Failed to read line {} of given file({}).",
                ind + 1,
                path.as_ref().display()
            )
        })?;
        builder.add_row(line.as_str())?;
    }

    Ok(builder.build()?)
}
