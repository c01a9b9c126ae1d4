use std::fmt::Display;

use crate::{Direction, Error};

/// Orientation of a 90 degree bend, named by the two sides it connects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    NorthEast,
    NorthWest,
    SouthWest,
    SouthEast,
}

impl Corner {
    pub fn all_corners() -> &'static [Corner] {
        static ALL_CORNERS: [Corner; 4] = [
            Corner::NorthEast,
            Corner::NorthWest,
            Corner::SouthWest,
            Corner::SouthEast,
        ];

        &ALL_CORNERS
    }

    /// The side this bend leaves the row through.
    pub fn vertical_side(&self) -> Direction {
        match self {
            Corner::NorthEast | Corner::NorthWest => Direction::North,
            Corner::SouthWest | Corner::SouthEast => Direction::South,
        }
    }

    pub fn horizontal_side(&self) -> Direction {
        match self {
            Corner::NorthEast | Corner::SouthEast => Direction::East,
            Corner::NorthWest | Corner::SouthWest => Direction::West,
        }
    }

    /// Whether a horizontal run opened by `self` and closed by `other` crosses a row.
    ///
    /// A run crosses when its ends leave the row through opposite sides (`F-J`, `L-7`),
    /// and only touches it when both ends turn back to the same side (`F-7`, `L-J`).
    pub fn crosses_with(&self, other: Corner) -> bool {
        self.vertical_side() != other.vertical_side()
    }

    pub fn mirror(&self) -> Corner {
        match self {
            Corner::NorthEast => Corner::NorthWest,
            Corner::NorthWest => Corner::NorthEast,
            Corner::SouthWest => Corner::SouthEast,
            Corner::SouthEast => Corner::SouthWest,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    Vertical,
    Horizontal,
    Bend(Corner),
    Ground,
    Start,
}

impl TryFrom<char> for Tile {
    type Error = Error;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        Ok(match value {
            '|' => Tile::Vertical,
            '-' => Tile::Horizontal,
            'L' => Tile::Bend(Corner::NorthEast),
            'J' => Tile::Bend(Corner::NorthWest),
            '7' => Tile::Bend(Corner::SouthWest),
            'F' => Tile::Bend(Corner::SouthEast),
            '.' => Tile::Ground,
            'S' => Tile::Start,
            other => return Err(Error::InvalidChar(other)),
        })
    }
}

impl Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let c = match self {
            Tile::Vertical => '|',
            Tile::Horizontal => '-',
            Tile::Bend(Corner::NorthEast) => 'L',
            Tile::Bend(Corner::NorthWest) => 'J',
            Tile::Bend(Corner::SouthWest) => '7',
            Tile::Bend(Corner::SouthEast) => 'F',
            Tile::Ground => '.',
            Tile::Start => 'S',
        };
        write!(f, "{}", c)
    }
}

impl Tile {
    /// Direction to leave this tile when it's entered heading `incoming`.
    ///
    /// Returns `None` if the pipe has no opening on the side the traveller comes from.
    pub fn step(&self, incoming: Direction) -> Option<Direction> {
        use Direction::*;

        match (self, incoming) {
            (Tile::Vertical, North | South) => Some(incoming),
            (Tile::Horizontal, East | West) => Some(incoming),
            (Tile::Bend(Corner::NorthEast), South) => Some(East),
            (Tile::Bend(Corner::NorthEast), West) => Some(North),
            (Tile::Bend(Corner::NorthWest), East) => Some(North),
            (Tile::Bend(Corner::NorthWest), South) => Some(West),
            (Tile::Bend(Corner::SouthWest), East) => Some(South),
            (Tile::Bend(Corner::SouthWest), North) => Some(West),
            (Tile::Bend(Corner::SouthEast), North) => Some(East),
            (Tile::Bend(Corner::SouthEast), West) => Some(South),
            _ => None,
        }
    }

    /// The two sides a pipe is open to, `None` for ground and the unresolved start.
    pub fn sides(&self) -> Option<[Direction; 2]> {
        match self {
            Tile::Vertical => Some([Direction::North, Direction::South]),
            Tile::Horizontal => Some([Direction::East, Direction::West]),
            Tile::Bend(corner) => Some([corner.vertical_side(), corner.horizontal_side()]),
            Tile::Ground | Tile::Start => None,
        }
    }

    /// The pipe open to both `a` and `b`, if there is one.
    pub fn connecting(a: Direction, b: Direction) -> Option<Tile> {
        use Direction::*;

        Some(match (a, b) {
            (North, South) | (South, North) => Tile::Vertical,
            (East, West) | (West, East) => Tile::Horizontal,
            (North, East) | (East, North) => Tile::Bend(Corner::NorthEast),
            (North, West) | (West, North) => Tile::Bend(Corner::NorthWest),
            (South, West) | (West, South) => Tile::Bend(Corner::SouthWest),
            (South, East) | (East, South) => Tile::Bend(Corner::SouthEast),
            _ => return None,
        })
    }

    pub fn corner(&self) -> Option<Corner> {
        match self {
            Tile::Bend(corner) => Some(*corner),
            _ => None,
        }
    }

    /// The tile seen in a left-right mirror image of the grid.
    pub fn mirror(&self) -> Tile {
        match self {
            Tile::Bend(corner) => Tile::Bend(corner.mirror()),
            other => *other,
        }
    }
}
