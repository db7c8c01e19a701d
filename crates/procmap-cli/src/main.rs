//! `procmap`: generate an island or dungeon into an in-memory map and print
//! a report.
//!
//! Configuration is loaded from `procmap.ron` and can be overridden via CLI
//! flags. Run with `cargo run -p procmap-cli -- --mode dungeon --preview`.

mod platform;
mod preview;

use std::process::ExitCode;

use clap::Parser;
use procmap_config::{CliArgs, Config};
use procmap_gen::{GenerationMode, GenerationReport, MapGenerator};
use procmap_map::{ItemCatalog, ItemId, Region, TileMap};
use tracing::{debug, error, info, warn};

use crate::platform::PlatformDirs;
use crate::preview::Legend;

const PREVIEW_COLUMNS: usize = 120;

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let dirs = match &args.config {
        Some(dir) => PlatformDirs::rooted_at(dir),
        None => match PlatformDirs::resolve() {
            Ok(dirs) => dirs,
            Err(e) => {
                eprintln!("{e}, using current directory");
                PlatformDirs::rooted_at(std::path::Path::new("."))
            }
        },
    };

    let mut config = Config::load_or_create(&dirs.config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);
    if args.random_seed {
        config.output.seed = procmap_noise::random_seed();
    }

    procmap_log::init_logging(Some(&dirs.log_dir), cfg!(debug_assertions), Some(&config));
    info!(
        config_dir = %dirs.config_dir.display(),
        mode = %config.output.mode,
        seed = %config.output.seed,
        "Starting procmap"
    );

    match run(&config, &args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config, args: &CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    let output = &config.output;
    let (origin_x, origin_y) = output.top_left();

    let mut map = TileMap::with_catalog(catalog_for(config));
    let mut generator = MapGenerator::new();
    generator.set_progress_callback(|current, total| {
        debug!(current, total, "Progress");
        true
    });

    let (report, floor, legend) = match output.mode {
        GenerationMode::Island => (
            generator.generate_island_map(
                &mut map,
                &config.island,
                output.width,
                output.height,
                &output.seed,
                origin_x,
                origin_y,
            )?,
            config.island.target_floor,
            Legend::island(&config.island),
        ),
        GenerationMode::Dungeon => (
            generator.generate_dungeon_map(
                &mut map,
                &config.dungeon,
                output.width,
                output.height,
                &output.seed,
                origin_x,
                origin_y,
            )?,
            config.dungeon.target_floor,
            Legend::dungeon(&config.dungeon),
        ),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", summary(&report, &output.seed));
    }

    if args.preview {
        let region = Region::new(origin_x, origin_y, floor, report.width, report.height);
        print!("{}", preview::render(&map, &region, &legend, PREVIEW_COLUMNS));
    }
    Ok(())
}

/// Catalog holding every id the configured generator may place.
fn catalog_for(config: &Config) -> ItemCatalog {
    let entries: [(ItemId, &str); 2] = match config.output.mode {
        GenerationMode::Island => [
            (config.island.water_id, "water"),
            (config.island.ground_id, "ground"),
        ],
        GenerationMode::Dungeon => [
            (config.dungeon.floor_id, "floor"),
            (config.dungeon.wall_id, "wall"),
        ],
    };

    let mut catalog = ItemCatalog::new();
    for (id, name) in entries {
        if let Err(e) = catalog.register(id, name) {
            warn!("{e}, keeping the first name");
        }
    }
    catalog
}

fn summary(report: &GenerationReport, seed: &str) -> String {
    let mut lines = vec![
        format!(
            "{} {}x{} (seed {seed:?} -> {})",
            report.mode, report.width, report.height, report.seed
        ),
        format!("tiles written: {}", report.tiles_written),
    ];
    match report.mode {
        GenerationMode::Island => {
            lines.push(format!("patches removed: {}", report.patches_removed));
            lines.push(format!("holes filled: {}", report.holes_filled));
            lines.push(format!("cells smoothed: {}", report.cells_smoothed));
        }
        GenerationMode::Dungeon => {
            lines.push(format!("rooms: {}", report.rooms.len()));
            lines.push(format!("hubs: {}", report.hubs.len()));
            lines.push(format!("corridors: {}", report.corridors));
            lines.push(format!("dead ends: {}", report.dead_ends));
            lines.push(format!("cave cells: {}", report.cave_cells));
            lines.push(format!("walls: {}", report.walls));
        }
    }
    let mut text = lines.join("\n");
    text.push('\n');
    text
}
