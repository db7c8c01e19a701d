//! Generation entry points: island and dungeon synthesis onto a host map,
//! with progress reporting and cancellation.

mod error;
mod generator;
mod placement;
mod progress;
mod report;

pub use error::GenerateError;
pub use generator::MapGenerator;
pub use placement::centered_origin;
pub use progress::ProgressCallback;
pub use report::{GenerationMode, GenerationReport};

pub use procmap_dungeon::DungeonConfig;
pub use procmap_terrain::IslandConfig;
