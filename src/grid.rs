use std::fmt::Display;

use crate::{Error, Position, Tile};

/// Pipe map surrounded by a ring of ground tiles.
///
/// Every position handed out by the grid is in this padded frame, so the input's
/// top-left character lives at `(1, 1)`.
#[derive(Debug, Clone)]
pub struct Grid {
    tiles: Vec<Tile>,
    row_n: usize,
    col_n: usize,
}

impl Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.tiles.chunks(self.col_n.max(1)) {
            for tile in row {
                write!(f, "{}", tile)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

impl Grid {
    pub fn from_lines<'a, I: IntoIterator<Item = &'a str>>(lines: I) -> Result<Grid, Error> {
        let mut builder = GridBuilder::new();
        for line in lines {
            builder.add_row(line)?;
        }

        builder.build()
    }

    pub fn row_n(&self) -> usize {
        self.row_n
    }

    pub fn col_n(&self) -> usize {
        self.col_n
    }

    pub fn tile(&self, pos: &Position) -> Option<&Tile> {
        if pos.r() < self.row_n && pos.c() < self.col_n {
            self.tiles.get(pos.r() * self.col_n + pos.c())
        } else {
            None
        }
    }

    pub fn locate_start(&self) -> Result<Position, Error> {
        let mut start = None;
        for (ind, tile) in self.tiles.iter().enumerate() {
            if *tile == Tile::Start {
                let pos = Position::new(ind / self.col_n, ind % self.col_n);
                if let Some(last_pos) = start.replace(pos.clone()) {
                    return Err(Error::MultipleStarts(last_pos, pos));
                }
            }
        }

        start.ok_or(Error::NoStart)
    }
}

pub struct GridBuilder {
    rows: Vec<Vec<Tile>>,
    col_n: Option<usize>,
    start: Option<Position>,
}

impl GridBuilder {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            col_n: None,
            start: None,
        }
    }

    pub fn add_row(&mut self, text: &str) -> Result<(), Error> {
        let this_col_n = text.chars().count();
        let expect_col_n = *self.col_n.get_or_insert(this_col_n);
        if expect_col_n != this_col_n {
            return Err(Error::InconsistentRow(expect_col_n, this_col_n));
        }

        let row = text
            .chars()
            .map(Tile::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        for (ind, _) in row.iter().enumerate().filter(|(_, t)| **t == Tile::Start) {
            // Shifted by the ground border added in `build`.
            let pos = Position::new(self.rows.len() + 1, ind + 1);
            if let Some(last_pos) = self.start.replace(pos.clone()) {
                return Err(Error::MultipleStarts(last_pos, pos));
            }
        }
        self.rows.push(row);

        Ok(())
    }

    pub fn build(self) -> Result<Grid, Error> {
        if self.start.is_none() {
            return Err(Error::NoStart);
        }

        let col_n = self.col_n.unwrap_or(0) + 2;
        let row_n = self.rows.len() + 2;
        let mut tiles = Vec::with_capacity(row_n * col_n);
        tiles.extend((0..col_n).map(|_| Tile::Ground));
        for row in self.rows {
            tiles.push(Tile::Ground);
            tiles.extend(row);
            tiles.push(Tile::Ground);
        }
        tiles.extend((0..col_n).map(|_| Tile::Ground));

        Ok(Grid {
            tiles,
            row_n,
            col_n,
        })
    }
}

impl Default for GridBuilder {
    fn default() -> Self {
        Self::new()
    }
}
