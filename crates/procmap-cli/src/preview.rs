//! Character preview of a generated region.

use procmap_gen::{DungeonConfig, IslandConfig};
use procmap_map::{HostMap, ItemCatalog, ItemId, Region, Tile, TileMap};

const EMPTY: char = ' ';
const UNKNOWN: char = '?';

/// Glyphs for the ids a generator writes.
#[derive(Debug, Clone)]
pub struct Legend {
    ground: Vec<(ItemId, char)>,
    /// Item drawn over any ground, such as a dungeon wall.
    overlay: Option<(ItemId, char)>,
}

impl Legend {
    pub fn island(config: &IslandConfig) -> Self {
        Self {
            ground: vec![(config.water_id, '~'), (config.ground_id, '#')],
            overlay: None,
        }
    }

    pub fn dungeon(config: &DungeonConfig) -> Self {
        Self {
            ground: vec![(config.floor_id, '.')],
            overlay: Some((config.wall_id, '#')),
        }
    }

    /// Glyph for `tile`. Ground ids without a legend entry fall back to the
    /// first letter of their catalog name, then to `?`.
    fn glyph(&self, tile: Option<&Tile>, catalog: Option<&ItemCatalog>) -> char {
        let Some(tile) = tile else {
            return EMPTY;
        };
        if let Some((id, glyph)) = self.overlay
            && tile.has_item(id)
        {
            return glyph;
        }
        match tile.ground_id() {
            None => EMPTY,
            Some(ground) => self
                .ground
                .iter()
                .find(|(id, _)| *id == ground)
                .map(|&(_, glyph)| glyph)
                .or_else(|| {
                    catalog
                        .and_then(|c| c.name(ground))
                        .and_then(|name| name.chars().next())
                })
                .unwrap_or(UNKNOWN),
        }
    }
}

/// Render `region` one row per line, sampling every n-th cell so the output
/// is at most `max_columns` wide.
pub fn render(map: &TileMap, region: &Region, legend: &Legend, max_columns: usize) -> String {
    let step = region.width.div_ceil(max_columns.max(1)).max(1);
    let mut out = String::new();
    for y in (0..region.height).step_by(step) {
        out.extend(
            (0..region.width)
                .step_by(step)
                .map(|x| legend.glyph(map.tile(region.position(x, y)), map.catalog())),
        );
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use procmap_map::Item;

    fn paint(map: &mut TileMap, region: &Region, x: usize, y: usize, id: u16) {
        map.create_tile(region.position(x, y))
            .set_ground(Some(Item::new(ItemId(id))));
    }

    #[test]
    fn test_island_glyphs() {
        let config = IslandConfig::default();
        let region = Region::new(10, 20, 7, 3, 2);
        let mut map = TileMap::new();
        paint(&mut map, &region, 0, 0, config.water_id.0);
        paint(&mut map, &region, 1, 0, config.ground_id.0);
        paint(&mut map, &region, 2, 0, 9999);

        let text = render(&map, &region, &Legend::island(&config), 80);
        assert_eq!(text, "~#?\n   \n");
    }

    #[test]
    fn test_catalog_names_fill_legend_gaps() {
        let config = IslandConfig::default();
        let mut catalog = ItemCatalog::new();
        catalog.register(config.water_id, "water").unwrap();
        catalog.register(ItemId(17), "sand").unwrap();
        let region = Region::new(0, 0, 7, 3, 1);
        let mut map = TileMap::with_catalog(catalog);
        paint(&mut map, &region, 0, 0, config.water_id.0);
        paint(&mut map, &region, 1, 0, 17);
        map.create_tile(region.position(2, 0));

        let text = render(&map, &region, &Legend::island(&config), 80);
        assert_eq!(text, "~s \n");
    }

    #[test]
    fn test_dungeon_walls_draw_over_floor() {
        let config = DungeonConfig::default();
        let region = Region::new(0, 0, 7, 2, 1);
        let mut map = TileMap::new();
        paint(&mut map, &region, 0, 0, config.floor_id.0);
        paint(&mut map, &region, 1, 0, config.floor_id.0);
        map.create_tile(region.position(1, 0))
            .add_item(Item::new(config.wall_id));

        let text = render(&map, &region, &Legend::dungeon(&config), 80);
        assert_eq!(text, ".#\n");
    }

    #[test]
    fn test_wide_regions_are_sampled() {
        let config = IslandConfig::default();
        let region = Region::new(0, 0, 7, 100, 10);
        let map = TileMap::new();

        let text = render(&map, &region, &Legend::island(&config), 40);
        let lines: Vec<&str> = text.lines().collect();
        // step 3: columns 0, 3, ..., 99 and rows 0, 3, 6, 9
        assert_eq!(lines.len(), 4);
        assert!(lines.iter().all(|line| line.chars().count() == 34));
    }
}
