//! The two generation entry points.
//!
//! Each call builds a fresh [`GenerationContext`] from the seed text, so equal
//! inputs always produce equal output. Input is validated before anything is
//! written; cancellation via the progress callback leaves earlier writes in
//! place.

use procmap_dungeon::{DungeonConfig, DungeonLayout};
use procmap_map::{HostMap, Region};
use procmap_noise::GenerationContext;
use procmap_terrain::cleanup::{fill_small_holes, remove_small_patches, smooth_coastline};
use procmap_terrain::{IslandConfig, apply_island_mask, build_height_map, place_tiles};

use crate::error::GenerateError;
use crate::progress::{ProgressCallback, ProgressTracker};
use crate::report::{GenerationMode, GenerationReport};

/// Runs island and dungeon generation against a host map.
#[derive(Default)]
pub struct MapGenerator {
    progress: Option<ProgressCallback>,
}

impl std::fmt::Debug for MapGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapGenerator")
            .field("has_progress_callback", &self.progress.is_some())
            .finish()
    }
}

impl MapGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the callback invoked at each progress checkpoint.
    ///
    /// Returning `false` from it cancels the running generation.
    pub fn set_progress_callback<F>(&mut self, callback: F)
    where
        F: FnMut(u32, u32) -> bool + 'static,
    {
        self.progress = Some(Box::new(callback));
    }

    pub fn clear_progress_callback(&mut self) {
        self.progress = None;
    }

    /// Generate an island with its top-left corner at `(origin_x, origin_y)`
    /// on `config.target_floor`.
    ///
    /// Checkpoints: 0, 20, 40, placement ticks up to 70, then 70, 80 and 90
    /// when cleanup runs, and 100 on completion.
    #[allow(clippy::too_many_arguments)]
    pub fn generate_island_map<M: HostMap + ?Sized>(
        &mut self,
        map: &mut M,
        config: &IslandConfig,
        width: i32,
        height: i32,
        seed: &str,
        origin_x: i32,
        origin_y: i32,
    ) -> Result<GenerationReport, GenerateError> {
        let (w, h) = validate_area(width, height, origin_x, origin_y)?;
        config.validate().map_err(GenerateError::InvalidInput)?;

        let ctx = GenerationContext::from_text(seed);
        let region = Region::new(origin_x, origin_y, config.target_floor, w, h);
        let mut report =
            GenerationReport::new(GenerationMode::Island, w, h, ctx.seed().value());
        let _span = tracing::info_span!("island", seed = ctx.seed().value(), width, height).entered();

        let mut progress = ProgressTracker::new(self.progress.as_mut());

        progress.checkpoint(0)?;
        let mut field = build_height_map(ctx.noise(), config, w, h);

        progress.checkpoint(20)?;
        apply_island_mask(&mut field, config);

        progress.checkpoint(40)?;
        report.tiles_written = place_tiles(map, &field, config, &region, |p| progress.report(p))
            .map_err(|stopped| {
                tracing::info!(progress = stopped.progress, "Generation cancelled");
                GenerateError::Cancelled {
                    progress: stopped.progress,
                }
            })?;

        if config.enable_cleanup {
            progress.checkpoint(70)?;
            report.patches_removed = remove_small_patches(map, &region, config);

            progress.checkpoint(80)?;
            report.holes_filled = fill_small_holes(map, &region, config);

            progress.checkpoint(90)?;
            report.cells_smoothed = smooth_coastline(map, &region, config);
        }

        progress.finish();
        tracing::info!(
            tiles = report.tiles_written,
            patches = report.patches_removed,
            holes = report.holes_filled,
            smoothed = report.cells_smoothed,
            "Island generated"
        );
        Ok(report)
    }

    /// Generate a dungeon with its top-left corner at `(origin_x, origin_y)`
    /// on `config.target_floor`.
    ///
    /// Checkpoints: 0, 30 after rooms, 60 after corridors and dead ends, 80
    /// before the commit, 100 on completion.
    #[allow(clippy::too_many_arguments)]
    pub fn generate_dungeon_map<M: HostMap + ?Sized>(
        &mut self,
        map: &mut M,
        config: &DungeonConfig,
        width: i32,
        height: i32,
        seed: &str,
        origin_x: i32,
        origin_y: i32,
    ) -> Result<GenerationReport, GenerateError> {
        let (w, h) = validate_area(width, height, origin_x, origin_y)?;
        config.validate().map_err(GenerateError::InvalidInput)?;

        let mut ctx = GenerationContext::from_text(seed);
        let region = Region::new(origin_x, origin_y, config.target_floor, w, h);
        let mut report =
            GenerationReport::new(GenerationMode::Dungeon, w, h, ctx.seed().value());
        let _span = tracing::info_span!("dungeon", seed = ctx.seed().value(), width, height).entered();

        let mut progress = ProgressTracker::new(self.progress.as_mut());

        progress.checkpoint(0)?;
        let mut layout = DungeonLayout::new(w, h);
        layout.place_rooms(ctx.rng(), config);

        progress.checkpoint(30)?;
        layout.place_hubs(ctx.rng(), config);
        report.corridors = layout.route_corridors(ctx.rng(), config);
        report.dead_ends = layout.grow_dead_ends(ctx.rng(), config);

        progress.checkpoint(60)?;
        if config.generate_caves {
            report.cave_cells = layout.overlay_caves(ctx.noise(), config.cave_threshold);
        }

        progress.checkpoint(80)?;
        let summary = layout.commit(map, &region, config);
        report.tiles_written = summary.tiles;
        report.walls = summary.walls;
        report.rooms = layout.rooms().to_vec();
        report.hubs = layout.hubs().to_vec();

        progress.finish();
        tracing::info!(
            rooms = report.rooms.len(),
            hubs = report.hubs.len(),
            corridors = report.corridors,
            dead_ends = report.dead_ends,
            cave_cells = report.cave_cells,
            "Dungeon generated"
        );
        Ok(report)
    }
}

/// Positive dimensions whose far edge still fits in `i32` coordinates.
fn validate_area(
    width: i32,
    height: i32,
    origin_x: i32,
    origin_y: i32,
) -> Result<(usize, usize), GenerateError> {
    if width <= 0 || height <= 0 {
        return Err(GenerateError::InvalidInput(format!(
            "dimensions must be positive, got {width}x{height}"
        )));
    }
    if origin_x.checked_add(width).is_none() || origin_y.checked_add(height).is_none() {
        return Err(GenerateError::InvalidInput(format!(
            "area {width}x{height} at ({origin_x}, {origin_y}) overflows map coordinates"
        )));
    }
    Ok((width as usize, height as usize))
}
