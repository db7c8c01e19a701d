//! The host tile-map interface the generators write into, plus an in-memory store.
//!
//! Generators never own tiles. They ask a [`HostMap`] for a tile at
//! `(x, y, floor)`, replace its ground item, and append stacked items.

mod catalog;
mod host;
mod region;
mod tile;
mod tile_map;

pub use catalog::{CatalogError, ItemCatalog};
pub use host::HostMap;
pub use region::Region;
pub use tile::{Item, ItemId, Position, Tile};
pub use tile_map::TileMap;
