//! Positions, item identifiers, and the tile slot layout.

use serde::{Deserialize, Serialize};

/// Numeric item type identifier (a sprite/catalog id owned by the host).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u16);

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single item instance placed on a tile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Item {
    id: ItemId,
}

impl Item {
    pub fn new(id: ItemId) -> Self {
        Self { id }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }
}

/// Integer tile address: column, row, and floor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }
}

/// One map tile: an exclusively owned ground slot and a stack of items on top.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tile {
    /// The ground item, if any. Replaced wholesale, never stacked.
    pub ground: Option<Item>,
    /// Items stacked on the ground, in placement order.
    pub items: Vec<Item>,
}

impl Tile {
    pub fn new() -> Self {
        Self::default()
    }

    /// The ground item's id, or `None` for a bare tile.
    pub fn ground_id(&self) -> Option<ItemId> {
        self.ground.as_ref().map(Item::id)
    }

    /// Replace the ground item, returning the previous one.
    pub fn set_ground(&mut self, ground: Option<Item>) -> Option<Item> {
        std::mem::replace(&mut self.ground, ground)
    }

    /// Append an item to the stack.
    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Returns `true` if any stacked item has the given id.
    pub fn has_item(&self, id: ItemId) -> bool {
        self.items.iter().any(|item| item.id() == id)
    }
}
