use procmap_map::ItemId;
use serde::{Deserialize, Serialize};

/// Upper bounds accepted by [`DungeonConfig::validate`].
pub const MAX_ROOM_COUNT: usize = 10_000;
pub const MAX_ROOM_SIZE: usize = 4096;
pub const MAX_CORRIDOR_WIDTH: usize = 64;
pub const MAX_INTERSECTION_SIZE: usize = 64;

/// Parameters for dungeon generation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DungeonConfig {
    /// Floor the dungeon is written to. Default: 7.
    pub target_floor: i32,
    /// Item stacked on wall cells. Default: 1030.
    pub wall_id: ItemId,
    /// Ground item for floor and wall cells. Default: 406.
    pub floor_id: ItemId,
    /// Rooms to aim for. Placement gives up after `10 * room_count`
    /// attempts. Default: 15.
    pub room_count: usize,
    /// Smallest room side. Default: 5.
    pub min_room_size: usize,
    /// Largest room side. Default: 12.
    pub max_room_size: usize,
    /// Corridor thickness in tiles, at least 1. Default: 2.
    pub corridor_width: usize,
    /// Overlay noise caves after routing. Default: true.
    pub generate_caves: bool,
    /// Noise above this becomes floor, in [0, 1]. Default: 0.4.
    pub cave_threshold: f64,
    /// Run an extra room-to-room pass after routing. Default: true.
    pub connect_all_rooms: bool,
    /// Grow short corridor stubs from existing floor. Default: true.
    pub add_dead_ends: bool,
    /// Route corridors with A* instead of plain L shapes. Default: true.
    pub use_smart_pathfinding: bool,
    /// Place hubs and route rooms through them. Default: true.
    pub add_intersections: bool,
    /// Hubs to aim for. Default: 5.
    pub intersection_count: usize,
    /// Hub radius; each hub is a `(2r + 1)` square. Default: 2.
    pub intersection_size: usize,
}

impl Default for DungeonConfig {
    fn default() -> Self {
        Self {
            target_floor: 7,
            wall_id: ItemId(1030),
            floor_id: ItemId(406),
            room_count: 15,
            min_room_size: 5,
            max_room_size: 12,
            corridor_width: 2,
            generate_caves: true,
            cave_threshold: 0.4,
            connect_all_rooms: true,
            add_dead_ends: true,
            use_smart_pathfinding: true,
            add_intersections: true,
            intersection_count: 5,
            intersection_size: 2,
        }
    }
}

impl DungeonConfig {
    /// Check parameter ranges, returning a description of the first problem.
    pub fn validate(&self) -> Result<(), String> {
        if self.room_count > MAX_ROOM_COUNT {
            return Err(format!(
                "room_count must be at most {MAX_ROOM_COUNT}, got {}",
                self.room_count
            ));
        }
        if self.min_room_size == 0 {
            return Err("min_room_size must be at least 1".to_string());
        }
        if self.min_room_size > self.max_room_size {
            return Err(format!(
                "min_room_size ({}) exceeds max_room_size ({})",
                self.min_room_size, self.max_room_size
            ));
        }
        if self.max_room_size > MAX_ROOM_SIZE {
            return Err(format!(
                "max_room_size must be at most {MAX_ROOM_SIZE}, got {}",
                self.max_room_size
            ));
        }
        if !(1..=MAX_CORRIDOR_WIDTH).contains(&self.corridor_width) {
            return Err(format!(
                "corridor_width must be in 1..={MAX_CORRIDOR_WIDTH}, got {}",
                self.corridor_width
            ));
        }
        if self.intersection_size > MAX_INTERSECTION_SIZE {
            return Err(format!(
                "intersection_size must be at most {MAX_INTERSECTION_SIZE}, got {}",
                self.intersection_size
            ));
        }
        if !(0.0..=1.0).contains(&self.cave_threshold) {
            return Err(format!(
                "cave_threshold must be in [0, 1], got {}",
                self.cave_threshold
            ));
        }
        Ok(())
    }
}
