//! Corridor carving between rooms and hubs.

use rand::Rng;

use crate::config::DungeonConfig;
use crate::grid::Grid;
use crate::hub::Hub;
use crate::pathfind::find_path;
use crate::room::Room;

/// How a corridor ended up being carved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CorridorShape {
    /// Followed an A* route.
    Routed,
    /// Plain two-leg corridor.
    LShaped,
}

/// Carve a corridor from `from` to `to`.
///
/// With smart pathfinding enabled, a `corridor_width` square is carved at
/// every cell of the A* route. An empty route, or disabled pathfinding,
/// falls back to [`carve_l_corridor`].
pub fn create_smart_corridor<R: Rng>(
    grid: &mut Grid,
    rng: &mut R,
    config: &DungeonConfig,
    from: (usize, usize),
    to: (usize, usize),
) -> CorridorShape {
    if config.use_smart_pathfinding {
        let path = find_path(grid, from, to);
        if !path.is_empty() {
            let extent = config.corridor_width as i64 - 1;
            for (x, y) in path {
                let (x, y) = (x as i64, y as i64);
                grid.carve_rect(x, y, x + extent, y + extent);
            }
            return CorridorShape::Routed;
        }
    }
    carve_l_corridor(grid, rng, from, to, config.corridor_width);
    CorridorShape::LShaped
}

/// Two-leg corridor, `width` tiles thick. A coin flip decides whether the
/// horizontal or vertical leg comes first.
pub fn carve_l_corridor<R: Rng>(
    grid: &mut Grid,
    rng: &mut R,
    from: (usize, usize),
    to: (usize, usize),
    width: usize,
) {
    let (mut cx, mut cy) = (from.0 as i64, from.1 as i64);
    let (tx, ty) = (to.0 as i64, to.1 as i64);
    let width = width as i64;

    let horizontal_first = rng.random_bool(0.5);
    for leg in 0..2 {
        let horizontal = (leg == 0) == horizontal_first;
        if horizontal {
            while cx != tx {
                cx += (tx - cx).signum();
                for w in 0..width {
                    grid.carve(cx, cy + w);
                }
            }
        } else {
            while cy != ty {
                cy += (ty - cy).signum();
                for w in 0..width {
                    grid.carve(cx + w, cy);
                }
            }
        }
    }
}

/// Connect consecutive room centers. Returns the number of corridors.
pub fn connect_sequential<R: Rng>(
    grid: &mut Grid,
    rng: &mut R,
    config: &DungeonConfig,
    rooms: &[Room],
) -> usize {
    for pair in rooms.windows(2) {
        create_smart_corridor(grid, rng, config, pair[0].center(), pair[1].center());
    }
    rooms.len().saturating_sub(1)
}

/// Connect every room to its nearest hub, then chain the hubs in order.
///
/// Distance is Manhattan between centers; the first hub wins ties. Returns
/// the number of corridors.
pub fn connect_via_hubs<R: Rng>(
    grid: &mut Grid,
    rng: &mut R,
    config: &DungeonConfig,
    rooms: &[Room],
    hubs: &[Hub],
) -> usize {
    if hubs.is_empty() {
        return 0;
    }

    let mut corridors = 0;
    for room in rooms {
        let (rx, ry) = room.center();
        let nearest = hubs
            .iter()
            .min_by_key(|hub| rx.abs_diff(hub.x) + ry.abs_diff(hub.y));
        if let Some(hub) = nearest {
            create_smart_corridor(grid, rng, config, (rx, ry), (hub.x, hub.y));
            corridors += 1;
        }
    }

    for pair in hubs.windows(2) {
        create_smart_corridor(grid, rng, config, (pair[0].x, pair[0].y), (pair[1].x, pair[1].y));
        corridors += 1;
    }
    corridors
}
