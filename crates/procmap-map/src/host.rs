//! The collaborator interface a host tile store implements.

use crate::tile::{Item, ItemId, Position, Tile};

/// A tile store addressable by `(x, y, floor)`.
///
/// The store owns every tile. Generators only ever replace a tile's ground
/// item and append stacked items, and they run single-threaded against one
/// store at a time (enforced by the `&mut` borrow).
pub trait HostMap {
    /// The tile at `pos`, if one exists.
    fn tile(&self, pos: Position) -> Option<&Tile>;

    /// Mutable access to the tile at `pos`, if one exists.
    fn tile_mut(&mut self, pos: Position) -> Option<&mut Tile>;

    /// Fetch the tile at `pos`, allocating an empty one first if needed.
    fn create_tile(&mut self, pos: Position) -> &mut Tile;

    /// Store `tile` at `pos`, replacing whatever was there.
    fn set_tile(&mut self, pos: Position, tile: Tile);

    /// Item factory. Returns `None` for ids the host cannot instantiate.
    fn create_item(&self, id: ItemId) -> Option<Item> {
        Some(Item::new(id))
    }

    /// Ground item id at `pos`, or `None` for a missing or bare tile.
    fn ground_id(&self, pos: Position) -> Option<ItemId> {
        self.tile(pos).and_then(Tile::ground_id)
    }

    /// Replace the ground of an existing tile with a new item of `id`.
    ///
    /// Returns `false` (and writes nothing) when no tile exists at `pos`.
    fn replace_ground(&mut self, pos: Position, id: ItemId) -> bool {
        let item = self.create_item(id);
        match self.tile_mut(pos) {
            Some(tile) => {
                tile.set_ground(item);
                true
            }
            None => false,
        }
    }
}
