use std::collections::BTreeMap;

use crate::{Corner, Grid, LoopPath, Tile};

/// Count tiles enclosed by the loop, sweeping each row of `col_n` columns from west to east.
///
/// `path` must have the start marker already replaced by its real pipe.
pub fn enclosed_count(path: &LoopPath, col_n: usize) -> usize {
    path.rows().map(|row| enclosed_in_row(row, col_n)).sum()
}

pub fn enclosed_area(grid: &Grid, path: &LoopPath) -> usize {
    enclosed_count(path, grid.col_n())
}

fn enclosed_in_row(row: &BTreeMap<usize, Tile>, col_n: usize) -> usize {
    let mut count = 0;
    let mut is_inside = false;
    // Bend that opened the horizontal run being crossed, if any.
    let mut pending_corner: Option<Corner> = None;
    for c in 0..col_n {
        match row.get(&c) {
            None => {
                if is_inside {
                    count += 1;
                }
            }
            Some(Tile::Vertical) => is_inside = !is_inside,
            Some(Tile::Horizontal) => (),
            Some(Tile::Bend(corner)) => match pending_corner.take() {
                None => pending_corner = Some(*corner),
                Some(open_corner) => {
                    if open_corner.crosses_with(*corner) {
                        is_inside = !is_inside;
                    }
                }
            },
            Some(Tile::Ground | Tile::Start) => (),
        }
    }

    count
}
