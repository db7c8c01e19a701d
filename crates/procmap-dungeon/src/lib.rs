//! Dungeon layout: rooms, hubs, pathfound corridors, dead ends and a cave
//! overlay, built on an in-memory grid and committed to a host map in one pass.

mod config;
pub mod corridor;
mod grid;
mod hub;
mod layout;
pub mod pathfind;
mod room;

pub use config::DungeonConfig;
pub use grid::{Cell, Grid};
pub use hub::{Hub, place_hubs};
pub use layout::{CommitSummary, DungeonLayout};
pub use room::{Room, place_rooms};
