//! Rectangular rooms and rejection-sampled placement.

use rand::Rng;
use serde::Serialize;

use crate::config::DungeonConfig;

/// Axis-aligned room in grid coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Room {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl Room {
    pub fn new(x: usize, y: usize, width: usize, height: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Integer center, rounded toward the top-left.
    pub fn center(&self) -> (usize, usize) {
        (self.x + self.width / 2, self.y + self.height / 2)
    }

    /// Inclusive intersection: rectangles that merely touch edges intersect.
    pub fn intersects(&self, other: &Room) -> bool {
        let (ax, ay, aw, ah) = self.signed();
        let (bx, by, bw, bh) = other.signed();
        ax <= bx + bw && ax + aw >= bx && ay <= by + bh && ay + ah >= by
    }

    /// Whether this room, grown by one tile on every side, touches `other`.
    ///
    /// Growing both rooms one tile right and down gives the same answer
    /// without stepping below zero.
    pub fn padded_intersects(&self, other: &Room) -> bool {
        self.grown().intersects(&other.grown())
    }

    fn grown(&self) -> Room {
        Room::new(self.x, self.y, self.width + 1, self.height + 1)
    }

    /// Whether `(x, y)` lies within `margin` tiles of the room's bounds.
    pub fn near(&self, x: i64, y: i64, margin: i64) -> bool {
        let (rx, ry, rw, rh) = self.signed();
        x >= rx - margin && x <= rx + rw + margin && y >= ry - margin && y <= ry + rh + margin
    }

    fn signed(&self) -> (i64, i64, i64, i64) {
        (
            self.x as i64,
            self.y as i64,
            self.width as i64,
            self.height as i64,
        )
    }
}

/// Largest start coordinate that keeps a `side`-long room one tile clear of
/// the far edge. Negative when the room cannot fit.
fn last_start(dim: usize, side: usize) -> i64 {
    let dim = i64::try_from(dim).unwrap_or(i64::MAX);
    let side = i64::try_from(side).unwrap_or(i64::MAX);
    dim.saturating_sub(side).saturating_sub(2)
}

/// Rejection-sample up to `room_count` non-touching rooms.
///
/// Each attempt draws a size, then a position inside `[1, width - w - 2]` x
/// `[1, height - h - 2]`. An attempt whose position range is empty is spent
/// without placing. Gives up after `10 * room_count` attempts, where the
/// target never exceeds the number of cells.
pub fn place_rooms<R: Rng>(
    rng: &mut R,
    config: &DungeonConfig,
    width: usize,
    height: usize,
) -> Vec<Room> {
    let target = config.room_count.min(width.saturating_mul(height));
    let mut rooms: Vec<Room> = Vec::new();
    let max_attempts = target.saturating_mul(10);
    let size_range = config.min_room_size..=config.max_room_size;

    let mut attempts = 0;
    while rooms.len() < target && attempts < max_attempts {
        attempts += 1;

        let w = rng.random_range(size_range.clone());
        let h = rng.random_range(size_range.clone());
        let max_x = last_start(width, w);
        let max_y = last_start(height, h);
        if max_x < 1 || max_y < 1 {
            continue;
        }
        let x = rng.random_range(1..=max_x) as usize;
        let y = rng.random_range(1..=max_y) as usize;

        let candidate = Room::new(x, y, w, h);
        if rooms.iter().all(|r| !candidate.padded_intersects(r)) {
            rooms.push(candidate);
        }
    }

    tracing::debug!(placed = rooms.len(), attempts, "Room placement finished");
    rooms
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_center_rounds_down() {
        assert_eq!(Room::new(10, 20, 5, 6).center(), (12, 23));
    }

    #[test]
    fn test_touching_rooms_intersect() {
        let a = Room::new(0, 0, 4, 4);
        assert!(a.intersects(&Room::new(4, 0, 3, 3)));
        assert!(!a.intersects(&Room::new(5, 0, 3, 3)));
    }

    #[test]
    fn test_padding_requires_two_tile_gap() {
        let a = Room::new(10, 10, 5, 5);
        assert!(Room::new(16, 10, 5, 5).padded_intersects(&a));
        assert!(!Room::new(17, 10, 5, 5).padded_intersects(&a));
    }

    #[test]
    fn test_padding_at_origin() {
        let corner = Room::new(0, 0, 3, 3);
        assert!(corner.padded_intersects(&Room::new(4, 0, 2, 2)));
        assert!(!corner.padded_intersects(&Room::new(5, 0, 2, 2)));
        assert!(Room::new(4, 0, 2, 2).padded_intersects(&corner));
    }

    #[test]
    fn test_near_is_inclusive() {
        let room = Room::new(20, 20, 4, 4);
        assert!(room.near(15, 20, 5));
        assert!(room.near(29, 29, 5));
        assert!(!room.near(14, 20, 5));
        assert!(!room.near(30, 22, 5));
    }

    #[test]
    fn test_rooms_stay_inside_and_apart() {
        let config = DungeonConfig {
            room_count: 40,
            ..Default::default()
        };
        for seed in 0..20 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let rooms = place_rooms(&mut rng, &config, 96, 64);
            assert!(!rooms.is_empty());
            for (i, room) in rooms.iter().enumerate() {
                assert!(room.x >= 1 && room.x + room.width <= 96 - 2);
                assert!(room.y >= 1 && room.y + room.height <= 64 - 2);
                assert!((config.min_room_size..=config.max_room_size).contains(&room.width));
                for other in &rooms[..i] {
                    assert!(!room.padded_intersects(other), "{room:?} touches {other:?}");
                }
            }
        }
    }

    #[test]
    fn test_too_small_area_places_nothing() {
        let config = DungeonConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert!(place_rooms(&mut rng, &config, 7, 7).is_empty());
    }

    #[test]
    fn test_unvalidated_extremes_do_not_panic() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let huge_count = DungeonConfig {
            room_count: usize::MAX,
            ..Default::default()
        };
        let rooms = place_rooms(&mut rng, &huge_count, 32, 32);
        assert!(!rooms.is_empty());
        assert!(rooms.len() <= 32 * 32);

        let huge_rooms = DungeonConfig {
            min_room_size: usize::MAX,
            max_room_size: usize::MAX,
            ..Default::default()
        };
        assert!(place_rooms(&mut rng, &huge_rooms, 32, 32).is_empty());
    }

    #[test]
    fn test_last_start() {
        assert_eq!(last_start(20, 5), 13);
        assert_eq!(last_start(7, 5), 0);
        assert!(last_start(32, usize::MAX) < 0);
    }

    #[test]
    fn test_zero_room_count_places_nothing() {
        let config = DungeonConfig {
            room_count: 0,
            ..Default::default()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert!(place_rooms(&mut rng, &config, 64, 64).is_empty());
    }
}
