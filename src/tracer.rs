use std::collections::BTreeMap;

use log::{debug, info};

use crate::{Direction, Error, Grid, Position, Tile};

/// Tiles of a loop grouped by row, then ordered by column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoopPath {
    rows: BTreeMap<usize, BTreeMap<usize, Tile>>,
}

impl LoopPath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, pos: &Position, tile: Tile) -> Option<Tile> {
        self.rows.entry(pos.r()).or_default().insert(pos.c(), tile)
    }

    pub fn row(&self, r: usize) -> Option<&BTreeMap<usize, Tile>> {
        self.rows.get(&r)
    }

    /// Rows holding at least one loop tile, from north to south.
    pub fn rows(&self) -> impl Iterator<Item = &BTreeMap<usize, Tile>> {
        self.rows.values()
    }

    pub fn tile(&self, pos: &Position) -> Option<&Tile> {
        self.row(pos.r()).and_then(|row| row.get(&pos.c()))
    }

    pub fn contains(&self, pos: &Position) -> bool {
        self.tile(pos).is_some()
    }

    /// Number of tiles on the loop.
    pub fn tile_n(&self) -> usize {
        self.rows.values().map(|row| row.len()).sum()
    }
}

/// A closed walk from the start position back to itself.
#[derive(Debug, Clone)]
pub struct LoopTrace {
    first_dir: Direction,
    last_dir: Direction,
    cells: Vec<Position>,
    path: LoopPath,
}

impl LoopTrace {
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Direction taken to leave the start position.
    pub fn first_dir(&self) -> Direction {
        self.first_dir
    }

    /// Direction headed when coming back into the start position.
    pub fn last_dir(&self) -> Direction {
        self.last_dir
    }

    /// Loop positions in walking order, beginning with the start position.
    pub fn cells(&self) -> &[Position] {
        &self.cells
    }

    /// Loop membership with the start position still marked as `Tile::Start`.
    pub fn path(&self) -> &LoopPath {
        &self.path
    }

    pub fn farthest_distance(&self) -> Result<usize, Error> {
        let len = self.len();
        if len % 2 != 0 {
            return Err(Error::OddLoopLength(len));
        }

        Ok(len / 2)
    }

    /// The pipe hidden under the start marker.
    pub fn start_tile(&self) -> Result<Tile, Error> {
        Tile::connecting(self.first_dir, self.last_dir.reverse())
            .ok_or(Error::UnresolvedStart(self.first_dir, self.last_dir))
    }

    /// Loop membership with the start marker replaced by its real pipe.
    pub fn into_path(self) -> Result<LoopPath, Error> {
        let start_tile = self.start_tile()?;
        let mut path = self.path;
        if let Some(start) = self.cells.first() {
            path.insert(start, start_tile);
        }

        Ok(path)
    }
}

/// Walk the pipes from `start`, leaving it heading `first_dir`, until the walk comes back.
pub fn trace(grid: &Grid, start: &Position, first_dir: Direction) -> Result<LoopTrace, Error> {
    let step_bound = grid.row_n() * grid.col_n() + 1;
    let mut cur_pos = start.clone();
    let mut cur_dir = first_dir;
    let mut cells = Vec::new();
    let mut path = LoopPath::new();
    let mut is_first_step = true;
    loop {
        if cells.len() > step_bound {
            return Err(Error::IterationBoundExceeded(step_bound));
        }

        let tile = *grid
            .tile(&cur_pos)
            .ok_or_else(|| Error::InvalidTraversal(cur_pos.clone(), cur_dir))?;
        if tile == Tile::Start && !is_first_step {
            break;
        }

        // The start marker hides its shape, so the first step goes wherever it's told.
        let next_dir = if is_first_step {
            cur_dir
        } else {
            tile.step(cur_dir)
                .ok_or_else(|| Error::InvalidTraversal(cur_pos.clone(), cur_dir))?
        };
        path.insert(&cur_pos, tile);
        cells.push(cur_pos.clone());
        cur_pos = cur_pos
            .neighbor(next_dir)
            .ok_or_else(|| Error::InvalidTraversal(cur_pos.clone(), next_dir))?;
        cur_dir = next_dir;
        is_first_step = false;
    }

    Ok(LoopTrace {
        first_dir,
        last_dir: cur_dir,
        cells,
        path,
    })
}

/// Find the loop through the start position, probing north, east, south then west.
pub fn find_loop(grid: &Grid) -> Result<LoopTrace, Error> {
    let start = grid.locate_start()?;
    for dir in Direction::all_dirs() {
        match trace(grid, &start, *dir) {
            Ok(found) => {
                info!(
                    "Found loop of length {} leaving start{} heading {}.",
                    found.len(),
                    start,
                    dir
                );
                return Ok(found);
            }
            Err(e @ Error::InvalidTraversal(..)) => {
                debug!("No loop leaving start{} heading {}: {}", start, dir, e);
            }
            Err(e) => return Err(e),
        }
    }

    Err(Error::NoLoop(start))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SQUARE_LOOP: [&str; 5] = [".....", ".S-7.", ".|.|.", ".L-J.", "....."];
    const COMPLEX_LOOP: [&str; 5] = ["..F7.", ".FJ|.", "SJ.L7", "|F--J", "LJ..."];

    #[test]
    fn traces_square_loop() {
        let grid = Grid::from_lines(SQUARE_LOOP).unwrap();
        let found = find_loop(&grid).unwrap();
        assert_eq!(found.len(), 8);
        assert_eq!(found.farthest_distance().unwrap(), 4);
        assert_eq!(found.first_dir(), Direction::East);
        assert_eq!(found.last_dir(), Direction::North);
        assert_eq!(found.start_tile().unwrap(), Tile::try_from('F').unwrap());
        assert_eq!(found.cells()[0], Position::new(2, 2));
        assert_eq!(found.path().tile_n(), 8);
        assert_eq!(found.path().tile(&Position::new(2, 2)), Some(&Tile::Start));
        assert!(!found.path().contains(&Position::new(3, 3)));

        let path = found.into_path().unwrap();
        assert_eq!(
            path.tile(&Position::new(2, 2)),
            Some(&Tile::try_from('F').unwrap())
        );
    }

    #[test]
    fn resolves_start_at_every_loop_position() {
        let plain = [".....", ".F-7.", ".|.|.", ".L-J.", "....."];
        for (r, line) in plain.iter().enumerate() {
            for (c, ch) in line.chars().enumerate().filter(|(_, ch)| *ch != '.') {
                let lines = plain
                    .iter()
                    .enumerate()
                    .map(|(ind, l)| {
                        if ind == r {
                            l.chars()
                                .enumerate()
                                .map(|(i, x)| if i == c { 'S' } else { x })
                                .collect()
                        } else {
                            l.to_string()
                        }
                    })
                    .collect::<Vec<String>>();
                let grid = Grid::from_lines(lines.iter().map(|l| l.as_str())).unwrap();
                let found = find_loop(&grid).unwrap();
                assert_eq!(found.len(), 8);
                assert_eq!(found.start_tile().unwrap(), Tile::try_from(ch).unwrap());
            }
        }
    }

    #[test]
    fn half_length_is_farthest_loop_distance() {
        let grid = Grid::from_lines(COMPLEX_LOOP).unwrap();
        let found = find_loop(&grid).unwrap();
        let len = found.len();
        assert_eq!(len, 16);
        assert_eq!(len % 2, 0);

        // Distance along the cycle to each cell, either way round.
        let eccentricity = (0..len).map(|ind| ind.min(len - ind)).max().unwrap();
        assert_eq!(found.farthest_distance().unwrap(), eccentricity);
        assert_eq!(found.farthest_distance().unwrap(), 8);

        // Consecutive cells, including the wrap back to the start, are grid neighbors.
        for ind in 0..len {
            let (a, b) = (&found.cells()[ind], &found.cells()[(ind + 1) % len]);
            assert_eq!(a.r().abs_diff(b.r()) + a.c().abs_diff(b.c()), 1);
        }
    }

    #[test]
    fn skips_dead_end_direction() {
        let grid = Grid::from_lines([".|...", ".S-7.", ".|.|.", ".L-J."]).unwrap();
        let before = grid.to_string();
        let start = grid.locate_start().unwrap();

        let err = trace(&grid, &start, Direction::North).unwrap_err();
        match err {
            Error::InvalidTraversal(pos, dir) => {
                assert_eq!(pos, Position::new(0, 2));
                assert_eq!(dir, Direction::North);
            }
            other => panic!("unexpected error: {}", other),
        }
        assert!(matches!(
            trace(&grid, &start, Direction::West),
            Err(Error::InvalidTraversal(..))
        ));

        let found = find_loop(&grid).unwrap();
        assert_eq!(found.first_dir(), Direction::East);
        assert_eq!(found.len(), 8);
        assert_eq!(found.start_tile().unwrap(), Tile::try_from('F').unwrap());
        assert_eq!(grid.to_string(), before);
    }

    #[test]
    fn probes_directions_in_fixed_order() {
        // The loop can be walked either way round; north is probed first.
        let grid = Grid::from_lines([".F7", ".||", ".S|", ".||", ".LJ"]).unwrap();
        let found = find_loop(&grid).unwrap();
        assert_eq!(found.first_dir(), Direction::North);
        assert_eq!(found.last_dir(), Direction::North);
        assert_eq!(found.start_tile().unwrap(), Tile::Vertical);
    }

    #[test]
    fn reports_missing_loop() {
        let grid = Grid::from_lines(["S-", ".."]).unwrap();
        match find_loop(&grid).unwrap_err() {
            Error::NoLoop(pos) => assert_eq!(pos, Position::new(1, 1)),
            other => panic!("unexpected error: {}", other),
        }
    }
}
