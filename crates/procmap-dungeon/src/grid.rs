//! Flat Void/Floor grid the layout is built on before committing.

/// One dungeon cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Cell {
    #[default]
    Void,
    Floor,
}

/// Row-major `width * height` cell buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// An all-Void grid.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Void; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Whether signed coordinates fall inside the grid.
    #[inline]
    pub fn in_bounds(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Cell {
        self.cells[self.index(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        let i = self.index(x, y);
        self.cells[i] = cell;
    }

    pub fn is_floor(&self, x: usize, y: usize) -> bool {
        self.get(x, y) == Cell::Floor
    }

    /// Mark `(x, y)` as Floor. Out-of-bounds coordinates are ignored.
    ///
    /// Returns `true` if the cell was Void before.
    pub fn carve(&mut self, x: i64, y: i64) -> bool {
        if !self.in_bounds(x, y) {
            return false;
        }
        let i = self.index(x as usize, y as usize);
        let was_void = self.cells[i] == Cell::Void;
        self.cells[i] = Cell::Floor;
        was_void
    }

    /// Carve every in-bounds cell of the inclusive rectangle
    /// `[x0, x1] x [y0, y1]`.
    pub fn carve_rect(&mut self, x0: i64, y0: i64, x1: i64, y1: i64) {
        for y in y0..=y1 {
            for x in x0..=x1 {
                self.carve(x, y);
            }
        }
    }

    /// A Void cell with at least one Floor among its 8 neighbours.
    pub fn is_wall_position(&self, x: usize, y: usize) -> bool {
        if self.is_floor(x, y) {
            return false;
        }
        (-1i64..=1)
            .flat_map(|dy| (-1i64..=1).map(move |dx| (dx, dy)))
            .filter(|&(dx, dy)| dx != 0 || dy != 0)
            .any(|(dx, dy)| {
                let (nx, ny) = (x as i64 + dx, y as i64 + dy);
                self.in_bounds(nx, ny) && self.is_floor(nx as usize, ny as usize)
            })
    }

    /// Number of Floor cells.
    pub fn floor_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c == Cell::Floor).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_void() {
        let grid = Grid::new(7, 3);
        assert_eq!(grid.width(), 7);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.floor_count(), 0);
    }

    #[test]
    fn test_carve_clips_and_reports_change() {
        let mut grid = Grid::new(4, 4);
        assert!(grid.carve(1, 1));
        assert!(!grid.carve(1, 1));
        assert!(!grid.carve(-1, 0));
        assert!(!grid.carve(4, 0));
        assert_eq!(grid.floor_count(), 1);
    }

    #[test]
    fn test_carve_rect_clips() {
        let mut grid = Grid::new(4, 4);
        grid.carve_rect(-2, -2, 1, 1);
        assert_eq!(grid.floor_count(), 4);
        assert!(grid.is_floor(0, 0));
        assert!(grid.is_floor(1, 1));
        assert!(!grid.is_floor(2, 2));
    }

    #[test]
    fn test_wall_position_uses_diagonals() {
        let mut grid = Grid::new(5, 5);
        grid.carve(2, 2);
        assert!(!grid.is_wall_position(2, 2));
        assert!(grid.is_wall_position(1, 1));
        assert!(grid.is_wall_position(3, 2));
        assert!(!grid.is_wall_position(0, 0));
        assert!(!grid.is_wall_position(4, 2));
    }
}
