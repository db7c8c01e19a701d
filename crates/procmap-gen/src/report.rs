use std::fmt;
use std::str::FromStr;

use procmap_dungeon::{Hub, Room};
use serde::{Deserialize, Serialize};

/// Which generator produced a report.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationMode {
    #[default]
    Island,
    Dungeon,
}

impl fmt::Display for GenerationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationMode::Island => f.write_str("island"),
            GenerationMode::Dungeon => f.write_str("dungeon"),
        }
    }
}

impl FromStr for GenerationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "island" => Ok(GenerationMode::Island),
            "dungeon" => Ok(GenerationMode::Dungeon),
            other => Err(format!("unknown generation mode '{other}'")),
        }
    }
}

/// Outcome of a successful generation call.
///
/// Counters that do not apply to the mode stay at zero.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct GenerationReport {
    pub mode: GenerationMode,
    pub width: usize,
    pub height: usize,
    /// Numeric seed resolved from the seed text.
    pub seed: u64,
    /// Tiles fetched or created and rewritten.
    pub tiles_written: usize,

    // Island cleanup
    pub patches_removed: usize,
    pub holes_filled: usize,
    pub cells_smoothed: usize,

    // Dungeon layout
    pub rooms: Vec<Room>,
    pub hubs: Vec<Hub>,
    pub corridors: usize,
    pub dead_ends: usize,
    pub cave_cells: usize,
    pub walls: usize,
}

impl GenerationReport {
    pub(crate) fn new(mode: GenerationMode, width: usize, height: usize, seed: u64) -> Self {
        Self {
            mode,
            width,
            height,
            seed,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_parses_case_insensitively() {
        assert_eq!("Island".parse::<GenerationMode>(), Ok(GenerationMode::Island));
        assert_eq!(" dungeon ".parse::<GenerationMode>(), Ok(GenerationMode::Dungeon));
        assert!("cave".parse::<GenerationMode>().is_err());
        assert_eq!(GenerationMode::Dungeon.to_string(), "dungeon");
    }

    #[test]
    fn test_report_serializes_rooms() {
        let mut report = GenerationReport::new(GenerationMode::Dungeon, 10, 10, 7);
        report.rooms.push(Room::new(1, 2, 5, 6));
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["mode"], "dungeon");
        assert_eq!(json["seed"], 7);
        assert_eq!(json["rooms"][0]["width"], 5);
    }
}
