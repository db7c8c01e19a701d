use crate::tile::Position;

/// A width x height rectangle of tiles on one floor, addressed locally from
/// its top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Region {
    pub origin_x: i32,
    pub origin_y: i32,
    pub floor: i32,
    pub width: usize,
    pub height: usize,
}

impl Region {
    pub fn new(origin_x: i32, origin_y: i32, floor: i32, width: usize, height: usize) -> Self {
        Self {
            origin_x,
            origin_y,
            floor,
            width,
            height,
        }
    }

    /// Number of cells in the rectangle.
    pub fn area(&self) -> usize {
        self.width * self.height
    }

    /// Map position of local cell `(x, y)`.
    pub fn position(&self, x: usize, y: usize) -> Position {
        Position::new(
            self.origin_x + x as i32,
            self.origin_y + y as i32,
            self.floor,
        )
    }

    /// Local cell of a map position, or `None` if it lies outside.
    pub fn local(&self, pos: Position) -> Option<(usize, usize)> {
        if pos.z != self.floor {
            return None;
        }
        let dx = i64::from(pos.x) - i64::from(self.origin_x);
        let dy = i64::from(pos.y) - i64::from(self.origin_y);
        if dx < 0 || dy < 0 || dx >= self.width as i64 || dy >= self.height as i64 {
            return None;
        }
        Some((dx as usize, dy as usize))
    }

    /// Whether local `(x, y)` lies inside the rectangle.
    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// Local cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + use<> {
        let (width, height) = (self.width, self.height);
        (0..height).flat_map(move |y| (0..width).map(move |x| (x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_offsets_origin() {
        let region = Region::new(100, -20, 7, 4, 3);
        assert_eq!(region.position(0, 0), Position::new(100, -20, 7));
        assert_eq!(region.position(3, 2), Position::new(103, -18, 7));
        assert_eq!(region.area(), 12);
    }

    #[test]
    fn test_local_round_trips_inside_only() {
        let region = Region::new(10, 10, 7, 5, 5);
        assert_eq!(region.local(Position::new(12, 14, 7)), Some((2, 4)));
        assert_eq!(region.local(Position::new(15, 10, 7)), None);
        assert_eq!(region.local(Position::new(9, 10, 7)), None);
        assert_eq!(region.local(Position::new(12, 12, 6)), None);
    }

    #[test]
    fn test_cells_are_row_major() {
        let region = Region::new(0, 0, 0, 3, 2);
        let cells: Vec<_> = region.cells().collect();
        assert_eq!(cells, vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]);
    }

    #[test]
    fn test_contains_rejects_negative() {
        let region = Region::new(0, 0, 0, 3, 3);
        assert!(region.contains(0, 2));
        assert!(!region.contains(-1, 0));
        assert!(!region.contains(3, 0));
    }
}
