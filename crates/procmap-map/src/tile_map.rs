//! Sparse in-memory [`HostMap`] keyed by position.

use hashbrown::HashMap;

use crate::catalog::ItemCatalog;
use crate::host::HostMap;
use crate::region::Region;
use crate::tile::{Item, ItemId, Position, Tile};

/// In-memory tile store.
///
/// Tiles are allocated on demand. When a catalog is attached, only catalogued
/// ids can be instantiated; otherwise every id is accepted.
#[derive(Clone, Debug, Default)]
pub struct TileMap {
    tiles: HashMap<Position, Tile>,
    catalog: Option<ItemCatalog>,
}

impl TileMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that only instantiates ids registered in `catalog`.
    pub fn with_catalog(catalog: ItemCatalog) -> Self {
        Self {
            tiles: HashMap::new(),
            catalog: Some(catalog),
        }
    }

    pub fn catalog(&self) -> Option<&ItemCatalog> {
        self.catalog.as_ref()
    }

    /// Number of allocated tiles.
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Ground ids of every cell in `region`, row-major.
    pub fn ground_ids(&self, region: &Region) -> Vec<Option<ItemId>> {
        region
            .cells()
            .map(|(x, y)| self.ground_id(region.position(x, y)))
            .collect()
    }

    /// Iterate over all allocated tiles.
    pub fn iter(&self) -> impl Iterator<Item = (&Position, &Tile)> {
        self.tiles.iter()
    }
}

impl HostMap for TileMap {
    fn tile(&self, pos: Position) -> Option<&Tile> {
        self.tiles.get(&pos)
    }

    fn tile_mut(&mut self, pos: Position) -> Option<&mut Tile> {
        self.tiles.get_mut(&pos)
    }

    fn create_tile(&mut self, pos: Position) -> &mut Tile {
        self.tiles.entry(pos).or_default()
    }

    fn set_tile(&mut self, pos: Position, tile: Tile) {
        self.tiles.insert(pos, tile);
    }

    fn create_item(&self, id: ItemId) -> Option<Item> {
        match &self.catalog {
            Some(catalog) if !catalog.contains(id) => None,
            _ => Some(Item::new(id)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_tile_allocates_once() {
        let mut map = TileMap::new();
        let pos = Position::new(1, 2, 7);
        assert!(map.tile(pos).is_none());

        map.create_tile(pos).add_item(Item::new(ItemId(5)));
        assert_eq!(map.len(), 1);

        // Second call returns the same tile.
        assert_eq!(map.create_tile(pos).items.len(), 1);
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_replace_ground_requires_existing_tile() {
        let mut map = TileMap::new();
        let pos = Position::new(0, 0, 7);
        assert!(!map.replace_ground(pos, ItemId(4608)));
        assert!(map.is_empty());

        map.create_tile(pos);
        assert!(map.replace_ground(pos, ItemId(4608)));
        assert_eq!(map.ground_id(pos), Some(ItemId(4608)));
    }

    #[test]
    fn test_catalog_restricts_items() {
        let mut catalog = ItemCatalog::new();
        catalog.register(ItemId(406), "floor").unwrap();
        let map = TileMap::with_catalog(catalog);

        assert_eq!(map.create_item(ItemId(406)), Some(Item::new(ItemId(406))));
        assert_eq!(map.create_item(ItemId(407)), None);
    }

    #[test]
    fn test_set_tile_overwrites() {
        let mut map = TileMap::new();
        let pos = Position::new(3, 3, 0);
        map.create_tile(pos).add_item(Item::new(ItemId(1)));

        let mut replacement = Tile::new();
        replacement.set_ground(Some(Item::new(ItemId(2))));
        map.set_tile(pos, replacement);

        let tile = map.tile(pos).unwrap();
        assert_eq!(tile.ground_id(), Some(ItemId(2)));
        assert!(tile.items.is_empty());
    }

    #[test]
    fn test_ground_ids_cover_region() {
        let mut map = TileMap::new();
        let region = Region::new(10, 20, 7, 2, 2);
        map.create_tile(region.position(1, 0));
        map.replace_ground(region.position(1, 0), ItemId(9));

        assert_eq!(
            map.ground_ids(&region),
            vec![None, Some(ItemId(9)), None, None]
        );
    }
}
