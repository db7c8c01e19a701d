//! Height-to-terrain classification and tile placement.

use procmap_map::{HostMap, ItemId, Region};
use thiserror::Error;

use crate::config::IslandConfig;
use crate::heightmap::HeightField;

/// How many tiles are placed between progress ticks.
const TICK_INTERVAL: usize = 1000;

/// Progress range covered by placement ticks.
const TICK_BASE: u32 = 40;
const TICK_SPAN: f64 = 30.0;

/// Placement was stopped by the tick callback.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("tile placement stopped at {progress}% after {placed} tiles")]
pub struct PlacementStopped {
    /// The progress value the callback declined.
    pub progress: u32,
    /// Tiles already written before stopping.
    pub placed: usize,
}

/// Water below the land cutoff, ground at or above it.
pub fn classify_height(height: f64, config: &IslandConfig) -> ItemId {
    if height < config.land_cutoff() {
        config.water_id
    } else {
        config.ground_id
    }
}

/// Classify cell `(x, y)` of `field`.
pub fn classify(field: &HeightField, config: &IslandConfig, x: usize, y: usize) -> ItemId {
    classify_height(field.get(x, y), config)
}

/// Write the classified ground of every cell in `region` to `map`.
///
/// Each tile is fetched or created, its ground replaced by the classified
/// item. Every [`TICK_INTERVAL`] tiles `tick` receives a progress value in
/// `[40, 70]`; returning `false` stops placement with tiles written so far
/// left in place.
pub fn place_tiles<M: HostMap + ?Sized>(
    map: &mut M,
    field: &HeightField,
    config: &IslandConfig,
    region: &Region,
    mut tick: impl FnMut(u32) -> bool,
) -> Result<usize, PlacementStopped> {
    let total = region.area();
    let mut placed = 0;

    for (x, y) in region.cells() {
        let item = map.create_item(classify(field, config, x, y));
        map.create_tile(region.position(x, y)).set_ground(item);
        placed += 1;

        if placed % TICK_INTERVAL == 0 {
            let progress = TICK_BASE + (placed as f64 / total as f64 * TICK_SPAN) as u32;
            if !tick(progress) {
                tracing::debug!(progress, placed, "Tile placement stopped");
                return Err(PlacementStopped { progress, placed });
            }
        }
    }

    Ok(placed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use procmap_map::{Item, Position, TileMap};

    fn gradient_field(width: usize, height: usize) -> HeightField {
        let mut field = HeightField::filled(width, height, 0.0);
        for y in 0..height {
            for x in 0..width {
                field.set(x, y, x as f64 / (width - 1) as f64);
            }
        }
        field
    }

    #[test]
    fn test_classify_at_cutoff() {
        let config = IslandConfig::default();
        assert_eq!(classify_height(0.6499, &config), config.water_id);
        assert_eq!(classify_height(0.65, &config), config.ground_id);
        assert_eq!(classify_height(1.0, &config), config.ground_id);
    }

    #[test]
    fn test_place_tiles_covers_region() {
        let config = IslandConfig::default();
        let field = gradient_field(10, 4);
        let region = Region::new(-5, 3, config.target_floor, 10, 4);
        let mut map = TileMap::new();

        let placed = place_tiles(&mut map, &field, &config, &region, |_| true).unwrap();
        assert_eq!(placed, 40);
        for (x, y) in region.cells() {
            let id = map.ground_id(region.position(x, y));
            assert!(id == Some(config.water_id) || id == Some(config.ground_id));
        }
        assert_eq!(map.ground_id(Position::new(-5, 3, 7)), Some(config.water_id));
        assert_eq!(map.ground_id(Position::new(4, 6, 7)), Some(config.ground_id));
    }

    #[test]
    fn test_place_tiles_replaces_existing_ground_and_keeps_items() {
        let config = IslandConfig::default();
        let field = HeightField::filled(1, 1, 1.0);
        let region = Region::new(0, 0, 7, 1, 1);
        let mut map = TileMap::new();
        let tile = map.create_tile(Position::new(0, 0, 7));
        tile.set_ground(Some(Item::new(ItemId(1))));
        tile.add_item(Item::new(ItemId(2)));

        place_tiles(&mut map, &field, &config, &region, |_| true).unwrap();
        let tile = map.tile(Position::new(0, 0, 7)).unwrap();
        assert_eq!(tile.ground_id(), Some(config.ground_id));
        assert_eq!(tile.items.len(), 1);
    }

    #[test]
    fn test_ticks_are_in_range_and_ordered() {
        let config = IslandConfig::default();
        let field = HeightField::filled(50, 50, 0.0);
        let region = Region::new(0, 0, 7, 50, 50);
        let mut map = TileMap::new();
        let mut seen = Vec::new();

        place_tiles(&mut map, &field, &config, &region, |p| {
            seen.push(p);
            true
        })
        .unwrap();

        assert_eq!(seen, vec![52, 64]);
    }

    #[test]
    fn test_tick_can_stop_placement() {
        let config = IslandConfig::default();
        let field = HeightField::filled(50, 50, 0.0);
        let region = Region::new(0, 0, 7, 50, 50);
        let mut map = TileMap::new();

        let err = place_tiles(&mut map, &field, &config, &region, |_| false).unwrap_err();
        assert_eq!(
            err,
            PlacementStopped {
                progress: 52,
                placed: 1000
            }
        );
        assert_eq!(map.len(), 1000);
    }
}
