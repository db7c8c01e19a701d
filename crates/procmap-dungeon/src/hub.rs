//! Hubs: open squares used as corridor waypoints.

use rand::Rng;
use serde::Serialize;

use crate::config::DungeonConfig;
use crate::grid::Grid;
use crate::room::Room;

/// Minimum distance between a hub center and the grid edge.
const EDGE_MARGIN: i64 = 10;

/// Hubs closer than this to a room's bounds are rejected.
const ROOM_CLEARANCE: i64 = 5;

const MAX_ATTEMPTS: usize = 100;

/// A hub center and its radius.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Hub {
    pub x: usize,
    pub y: usize,
    pub radius: usize,
}

impl Hub {
    /// Carve the `(2 * radius + 1)` square around the center.
    pub fn carve(&self, grid: &mut Grid) {
        let (x, y, r) = (self.x as i64, self.y as i64, self.radius as i64);
        grid.carve_rect(x - r, y - r, x + r, y + r);
    }
}

/// Sample up to `intersection_count` hub centers away from every room.
///
/// Centers are drawn from `[10, width - 10] x [10, height - 10]`; grids too
/// small for that range get no hubs.
pub fn place_hubs<R: Rng>(
    rng: &mut R,
    config: &DungeonConfig,
    rooms: &[Room],
    width: usize,
    height: usize,
) -> Vec<Hub> {
    let max_x = width as i64 - EDGE_MARGIN;
    let max_y = height as i64 - EDGE_MARGIN;
    if max_x < EDGE_MARGIN || max_y < EDGE_MARGIN {
        tracing::debug!(width, height, "Grid too small for hubs");
        return Vec::new();
    }

    let mut hubs = Vec::new();
    let mut attempts = 0;
    while hubs.len() < config.intersection_count && attempts < MAX_ATTEMPTS {
        attempts += 1;
        let x = rng.random_range(EDGE_MARGIN..=max_x);
        let y = rng.random_range(EDGE_MARGIN..=max_y);

        if rooms.iter().any(|room| room.near(x, y, ROOM_CLEARANCE)) {
            continue;
        }
        hubs.push(Hub {
            x: x as usize,
            y: y as usize,
            radius: config.intersection_size,
        });
    }

    tracing::debug!(placed = hubs.len(), attempts, "Hub placement finished");
    hubs
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_hub_carves_square() {
        let mut grid = Grid::new(20, 20);
        Hub {
            x: 10,
            y: 10,
            radius: 2,
        }
        .carve(&mut grid);
        assert_eq!(grid.floor_count(), 25);
        assert!(grid.is_floor(8, 8));
        assert!(grid.is_floor(12, 12));
        assert!(!grid.is_floor(13, 10));
    }

    #[test]
    fn test_hubs_avoid_rooms_and_edges() {
        let config = DungeonConfig::default();
        let rooms = [Room::new(20, 20, 10, 10), Room::new(60, 50, 8, 8)];
        for seed in 0..10 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let hubs = place_hubs(&mut rng, &config, &rooms, 100, 80);
            assert!(hubs.len() <= config.intersection_count);
            for hub in &hubs {
                assert!((10..=90).contains(&hub.x));
                assert!((10..=70).contains(&hub.y));
                for room in &rooms {
                    assert!(!room.near(hub.x as i64, hub.y as i64, 5));
                }
            }
        }
    }

    #[test]
    fn test_small_grid_has_no_hubs() {
        let config = DungeonConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        assert!(place_hubs(&mut rng, &config, &[], 19, 40).is_empty());
        // Exactly 20 wide leaves a single valid column.
        let hubs = place_hubs(&mut rng, &config, &[], 20, 20);
        assert!(hubs.iter().all(|h| h.x == 10 && h.y == 10));
        assert_eq!(hubs.len(), config.intersection_count);
    }
}
