//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;
use procmap_gen::GenerationMode;

use crate::Config;

/// Generate an island or dungeon and print a report.
///
/// Values given here override `procmap.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "procmap", about = "Procedural island and dungeon generator")]
pub struct CliArgs {
    /// Generator to run (island or dungeon).
    #[arg(long)]
    pub mode: Option<GenerationMode>,

    /// Area width in tiles.
    #[arg(long)]
    pub width: Option<i32>,

    /// Area height in tiles.
    #[arg(long)]
    pub height: Option<i32>,

    /// Seed text.
    #[arg(long)]
    pub seed: Option<String>,

    /// Draw a fresh numeric seed, ignoring --seed and the config.
    #[arg(long)]
    pub random_seed: bool,

    /// X coordinate of the top-left corner (or center with --centered).
    #[arg(long, allow_negative_numbers = true)]
    pub origin_x: Option<i32>,

    /// Y coordinate of the top-left corner (or center with --centered).
    #[arg(long, allow_negative_numbers = true)]
    pub origin_y: Option<i32>,

    /// Treat the origin as the center of the area.
    #[arg(long)]
    pub centered: bool,

    /// Floor to write to, for either generator.
    #[arg(long)]
    pub floor: Option<i32>,

    /// Print a character preview of the result.
    #[arg(long)]
    pub preview: bool,

    /// Print the report as JSON instead of text.
    #[arg(long)]
    pub json: bool,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    ///
    /// `--random-seed` is left to the caller, which owns the entropy source.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(mode) = args.mode {
            self.output.mode = mode;
        }
        if let Some(w) = args.width {
            self.output.width = w;
        }
        if let Some(h) = args.height {
            self.output.height = h;
        }
        if let Some(ref seed) = args.seed {
            self.output.seed = seed.clone();
        }
        if let Some(x) = args.origin_x {
            self.output.origin_x = x;
        }
        if let Some(y) = args.origin_y {
            self.output.origin_y = y;
        }
        if args.centered {
            self.output.centered = true;
        }
        if let Some(floor) = args.floor {
            self.island.target_floor = floor;
            self.dungeon.target_floor = floor;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_override() {
        let mut config = Config::default();
        let args = CliArgs {
            mode: Some(GenerationMode::Dungeon),
            width: Some(128),
            seed: Some("dng1".to_string()),
            floor: Some(3),
            ..Default::default()
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config.output.mode, GenerationMode::Dungeon);
        assert_eq!(config.output.width, 128);
        assert_eq!(config.output.seed, "dng1");
        assert_eq!(config.island.target_floor, 3);
        assert_eq!(config.dungeon.target_floor, 3);
        // Untouched fields keep their defaults.
        assert_eq!(config.output.height, 256);
        assert_eq!(config.debug.log_level, "info");
    }

    #[test]
    fn test_empty_args_change_nothing() {
        let original = Config::default();
        let mut config = Config::default();
        config.apply_cli_overrides(&CliArgs::default());
        assert_eq!(config, original);
    }

    #[test]
    fn test_parse_from_args() {
        let args = CliArgs::try_parse_from([
            "procmap",
            "--mode",
            "dungeon",
            "--origin-x",
            "-40",
            "--centered",
            "--json",
        ])
        .unwrap();
        assert_eq!(args.mode, Some(GenerationMode::Dungeon));
        assert_eq!(args.origin_x, Some(-40));
        assert!(args.centered);
        assert!(args.json);
        assert!(!args.preview);
    }

    #[test]
    fn test_unknown_mode_rejected() {
        assert!(CliArgs::try_parse_from(["procmap", "--mode", "swamp"]).is_err());
    }
}
