//! A* over the dungeon grid.
//!
//! 4-connected, Manhattan heuristic. Stepping onto Floor costs 1 and onto
//! Void costs 5, so routes prefer reusing existing rooms and corridors.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::grid::{Cell, Grid};

pub const FLOOR_COST: u32 = 1;
pub const VOID_COST: u32 = 5;

const NEIGHBORS: [(i64, i64); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Open-set entry. `seq` orders equal `f` values by insertion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct OpenNode {
    f: u32,
    g: u32,
    seq: u64,
    index: usize,
}

impl Ord for OpenNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for min-heap behavior in BinaryHeap.
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Cost of stepping onto `cell`.
#[inline]
pub fn step_cost(cell: Cell) -> u32 {
    match cell {
        Cell::Floor => FLOOR_COST,
        Cell::Void => VOID_COST,
    }
}

fn manhattan(a: (usize, usize), b: (usize, usize)) -> u32 {
    (a.0.abs_diff(b.0) + a.1.abs_diff(b.1)) as u32
}

/// Cheapest path from `start` to `goal`, both ends included.
///
/// Returns an empty path when either end lies outside the grid.
pub fn find_path(grid: &Grid, start: (usize, usize), goal: (usize, usize)) -> Vec<(usize, usize)> {
    let (width, height) = (grid.width(), grid.height());
    let inside = |(x, y): (usize, usize)| x < width && y < height;
    if !inside(start) || !inside(goal) {
        return Vec::new();
    }

    let coords = |index: usize| (index % width, index / width);
    let start_index = start.1 * width + start.0;
    let goal_index = goal.1 * width + goal.0;

    let mut g_score = vec![u32::MAX; width * height];
    let mut came_from = vec![usize::MAX; width * height];
    let mut open = BinaryHeap::new();
    let mut seq = 0u64;

    g_score[start_index] = 0;
    open.push(OpenNode {
        f: manhattan(start, goal),
        g: 0,
        seq,
        index: start_index,
    });

    while let Some(current) = open.pop() {
        if current.index == goal_index {
            let mut path = vec![goal];
            let mut at = goal_index;
            while at != start_index {
                at = came_from[at];
                path.push(coords(at));
            }
            path.reverse();
            return path;
        }
        // Stale entry superseded by a cheaper push.
        if current.g > g_score[current.index] {
            continue;
        }

        let (cx, cy) = coords(current.index);
        for (dx, dy) in NEIGHBORS {
            let (nx, ny) = (cx as i64 + dx, cy as i64 + dy);
            if !grid.in_bounds(nx, ny) {
                continue;
            }
            let next = (nx as usize, ny as usize);
            let next_index = next.1 * width + next.0;
            let tentative = current.g + step_cost(grid.get(next.0, next.1));
            if tentative < g_score[next_index] {
                g_score[next_index] = tentative;
                came_from[next_index] = current.index;
                seq += 1;
                open.push(OpenNode {
                    f: tentative + manhattan(next, goal),
                    g: tentative,
                    seq,
                    index: next_index,
                });
            }
        }
    }

    Vec::new()
}

/// Sum of step costs along `path`, excluding the starting cell.
pub fn path_cost(grid: &Grid, path: &[(usize, usize)]) -> u32 {
    path.iter()
        .skip(1)
        .map(|&(x, y)| step_cost(grid.get(x, y)))
        .sum()
}
