//! Post-placement cleanup over host-map tiles.
//!
//! All routines read and write ground ids directly on the host map and only
//! touch cells inside the given [`Region`]. Connectivity is 4-way for
//! components and 8-way for the coastline majority vote.

use std::collections::VecDeque;

use procmap_map::{HostMap, ItemId, Region};

use crate::config::IslandConfig;

const NEIGHBORS_4: [(i64, i64); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

const NEIGHBORS_8: [(i64, i64); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Collect the 4-connected component of `target` tiles containing `start`.
///
/// Cells are marked in `visited` as they are reached. Returns an empty list
/// when `start` is already visited or does not hold `target`.
fn collect_component<M: HostMap + ?Sized>(
    map: &M,
    region: &Region,
    start: (usize, usize),
    target: ItemId,
    visited: &mut [bool],
) -> Vec<(usize, usize)> {
    let index = |x: usize, y: usize| y * region.width + x;
    let (sx, sy) = start;
    if visited[index(sx, sy)] || map.ground_id(region.position(sx, sy)) != Some(target) {
        return Vec::new();
    }

    let mut component = Vec::new();
    let mut queue = VecDeque::new();
    visited[index(sx, sy)] = true;
    queue.push_back(start);

    while let Some((x, y)) = queue.pop_front() {
        component.push((x, y));
        for (dx, dy) in NEIGHBORS_4 {
            let (nx, ny) = (x as i64 + dx, y as i64 + dy);
            if !region.contains(nx, ny) {
                continue;
            }
            let (nx, ny) = (nx as usize, ny as usize);
            if visited[index(nx, ny)] || map.ground_id(region.position(nx, ny)) != Some(target) {
                continue;
            }
            visited[index(nx, ny)] = true;
            queue.push_back((nx, ny));
        }
    }

    component
}

fn refill<M: HostMap + ?Sized>(
    map: &mut M,
    region: &Region,
    cells: &[(usize, usize)],
    replacement: ItemId,
) {
    for &(x, y) in cells {
        map.replace_ground(region.position(x, y), replacement);
    }
}

/// Size of the `target` component containing local cell `start`.
///
/// When `replacement` is given every counted tile gets that ground instead;
/// `None` only measures. Returns 0 if `start` is outside the region or does
/// not hold `target`.
pub fn flood_fill_count<M: HostMap + ?Sized>(
    map: &mut M,
    region: &Region,
    start: (usize, usize),
    target: ItemId,
    replacement: Option<ItemId>,
) -> usize {
    if !region.contains(start.0 as i64, start.1 as i64) {
        return 0;
    }
    let mut visited = vec![false; region.area()];
    let component = collect_component(map, region, start, target, &mut visited);
    if let Some(replacement) = replacement {
        refill(map, region, &component, replacement);
    }
    component.len()
}

/// Convert every `target` component smaller than `threshold` to `opposite`.
///
/// One row-major scan; each component is measured once and marked visited
/// whether or not it is converted. Returns the number of converted cells.
pub fn remove_small_components<M: HostMap + ?Sized>(
    map: &mut M,
    region: &Region,
    target: ItemId,
    opposite: ItemId,
    threshold: usize,
) -> usize {
    let mut visited = vec![false; region.area()];
    let mut converted = 0;

    for (x, y) in region.cells() {
        let component = collect_component(map, region, (x, y), target, &mut visited);
        let size = component.len();
        if size > 0 && size < threshold {
            refill(map, region, &component, opposite);
            converted += size;
        }
    }

    converted
}

/// Sink land patches smaller than `min_land_patch_size`.
pub fn remove_small_patches<M: HostMap + ?Sized>(
    map: &mut M,
    region: &Region,
    config: &IslandConfig,
) -> usize {
    if config.min_land_patch_size == 0 {
        return 0;
    }
    let converted = remove_small_components(
        map,
        region,
        config.ground_id,
        config.water_id,
        config.min_land_patch_size,
    );
    tracing::debug!(converted, "Removed small land patches");
    converted
}

/// Fill water holes smaller than `max_water_hole_size`.
pub fn fill_small_holes<M: HostMap + ?Sized>(
    map: &mut M,
    region: &Region,
    config: &IslandConfig,
) -> usize {
    if config.max_water_hole_size == 0 {
        return 0;
    }
    let converted = remove_small_components(
        map,
        region,
        config.water_id,
        config.ground_id,
        config.max_water_hole_size,
    );
    tracing::debug!(converted, "Filled small water holes");
    converted
}

/// Majority-vote smoothing of the coastline, `smoothing_passes` times.
///
/// Each pass reads from a snapshot of the region so updates within a pass
/// do not cascade. Only interior cells change. Returns the total number of
/// flips across all passes.
pub fn smooth_coastline<M: HostMap + ?Sized>(
    map: &mut M,
    region: &Region,
    config: &IslandConfig,
) -> usize {
    let (width, height) = (region.width, region.height);
    if width < 3 || height < 3 {
        return 0;
    }

    let mut flipped = 0;
    for pass in 0..config.smoothing_passes {
        let snapshot: Vec<Option<ItemId>> = region
            .cells()
            .map(|(x, y)| map.ground_id(region.position(x, y)))
            .collect();

        let mut pass_flips = 0;
        for y in 1..height - 1 {
            for x in 1..width - 1 {
                let mut water = 0;
                let mut ground = 0;
                for (dx, dy) in NEIGHBORS_8 {
                    let n = (y as i64 + dy) as usize * width + (x as i64 + dx) as usize;
                    match snapshot[n] {
                        Some(id) if id == config.water_id => water += 1,
                        Some(id) if id == config.ground_id => ground += 1,
                        _ => {}
                    }
                }

                let current = snapshot[y * width + x];
                let flip_to = if current == Some(config.water_id) && ground > water {
                    Some(config.ground_id)
                } else if current == Some(config.ground_id) && water > ground {
                    Some(config.water_id)
                } else {
                    None
                };

                if let Some(id) = flip_to {
                    map.replace_ground(region.position(x, y), id);
                    pass_flips += 1;
                }
            }
        }

        tracing::debug!(pass, flips = pass_flips, "Coastline smoothing pass");
        flipped += pass_flips;
    }

    flipped
}
