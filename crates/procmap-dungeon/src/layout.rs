//! Staged dungeon construction over a [`Grid`], then a single commit to a
//! host map.
//!
//! The stages run in order: rooms, hubs, corridors, dead ends, caves,
//! commit. Each stage only ever turns Void into Floor.

use noise::NoiseFn;
use procmap_map::{HostMap, Region};
use rand::Rng;

use crate::config::DungeonConfig;
use crate::corridor::{connect_sequential, connect_via_hubs};
use crate::grid::{Cell, Grid};
use crate::hub::{Hub, place_hubs};
use crate::room::{Room, place_rooms};

const DEAD_END_ATTEMPTS: usize = 10;
const DEAD_END_MIN_LEN: i64 = 5;
const DEAD_END_MAX_LEN: i64 = 15;

/// Frequency applied to cell coordinates when sampling cave noise.
const CAVE_FREQUENCY: f64 = 0.1;

const DIRECTIONS: [(i64, i64); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// What the commit pass wrote.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CommitSummary {
    /// Tiles fetched or created and rewritten.
    pub tiles: usize,
    /// Tiles that received floor ground.
    pub floors: usize,
    /// Void tiles next to floor that received a wall.
    pub walls: usize,
}

/// A dungeon under construction.
#[derive(Clone, Debug)]
pub struct DungeonLayout {
    grid: Grid,
    rooms: Vec<Room>,
    hubs: Vec<Hub>,
}

impl DungeonLayout {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid: Grid::new(width, height),
            rooms: Vec::new(),
            hubs: Vec::new(),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn hubs(&self) -> &[Hub] {
        &self.hubs
    }

    /// Place rooms and carve them. Returns the number placed.
    pub fn place_rooms<R: Rng>(&mut self, rng: &mut R, config: &DungeonConfig) -> usize {
        self.rooms = place_rooms(rng, config, self.grid.width(), self.grid.height());
        for room in &self.rooms {
            self.grid.carve_rect(
                room.x as i64,
                room.y as i64,
                (room.x + room.width) as i64 - 1,
                (room.y + room.height) as i64 - 1,
            );
        }
        self.rooms.len()
    }

    /// Place and carve hubs when enabled. Returns the number placed.
    pub fn place_hubs<R: Rng>(&mut self, rng: &mut R, config: &DungeonConfig) -> usize {
        if !config.add_intersections {
            return 0;
        }
        self.hubs = place_hubs(
            rng,
            config,
            &self.rooms,
            self.grid.width(),
            self.grid.height(),
        );
        for hub in &self.hubs {
            hub.carve(&mut self.grid);
        }
        self.hubs.len()
    }

    /// Connect rooms through hubs when any exist, otherwise in sequence, then
    /// run the sequential pass again when `connect_all_rooms` is set.
    ///
    /// Returns the number of corridors carved.
    pub fn route_corridors<R: Rng>(&mut self, rng: &mut R, config: &DungeonConfig) -> usize {
        let mut corridors = if config.add_intersections && !self.hubs.is_empty() {
            connect_via_hubs(&mut self.grid, rng, config, &self.rooms, &self.hubs)
        } else {
            connect_sequential(&mut self.grid, rng, config, &self.rooms)
        };

        if config.connect_all_rooms && self.rooms.len() > 1 {
            corridors += connect_sequential(&mut self.grid, rng, config, &self.rooms);
        }

        tracing::debug!(corridors, "Corridors routed");
        corridors
    }

    /// Grow short straight stubs out of random floor cells, staying off the
    /// outer ring. Returns the number of stubs grown.
    pub fn grow_dead_ends<R: Rng>(&mut self, rng: &mut R, config: &DungeonConfig) -> usize {
        if !config.add_dead_ends {
            return 0;
        }
        let (width, height) = (self.grid.width() as i64, self.grid.height() as i64);
        if width < 3 || height < 3 {
            return 0;
        }

        let mut grown = 0;
        for _ in 0..DEAD_END_ATTEMPTS {
            let mut x = rng.random_range(1..=width - 2);
            let mut y = rng.random_range(1..=height - 2);
            if !self.grid.is_floor(x as usize, y as usize) {
                continue;
            }

            let length = rng.random_range(DEAD_END_MIN_LEN..=DEAD_END_MAX_LEN);
            let (dx, dy) = DIRECTIONS[rng.random_range(0..DIRECTIONS.len())];
            for _ in 0..length {
                x += dx;
                y += dy;
                if x > 0 && x < width - 1 && y > 0 && y < height - 1 {
                    self.grid.carve(x, y);
                }
            }
            grown += 1;
        }

        tracing::debug!(grown, "Dead ends grown");
        grown
    }

    /// Turn every cell whose noise at `(x * 0.1, y * 0.1)` exceeds
    /// `threshold` into floor. Returns the number of newly opened cells.
    pub fn overlay_caves(&mut self, noise: &impl NoiseFn<f64, 2>, threshold: f64) -> usize {
        let mut opened = 0;
        for y in 0..self.grid.height() {
            for x in 0..self.grid.width() {
                let n = noise.get([x as f64 * CAVE_FREQUENCY, y as f64 * CAVE_FREQUENCY]);
                if n > threshold && self.grid.carve(x as i64, y as i64) {
                    opened += 1;
                }
            }
        }
        tracing::debug!(opened, "Cave overlay applied");
        opened
    }

    /// Write the grid to `map` inside `region`.
    ///
    /// Every tile is fetched or created and its ground cleared. Floor gets
    /// `floor_id`; Void touching Floor (8-way) gets `floor_id` plus a
    /// stacked `wall_id`; other Void stays bare.
    pub fn commit<M: HostMap + ?Sized>(
        &self,
        map: &mut M,
        region: &Region,
        config: &DungeonConfig,
    ) -> CommitSummary {
        let mut summary = CommitSummary::default();

        for (x, y) in region.cells() {
            let cell = self.grid.get(x, y);
            let wall = cell == Cell::Void && self.grid.is_wall_position(x, y);

            let ground = match (cell, wall) {
                (Cell::Floor, _) | (Cell::Void, true) => map.create_item(config.floor_id),
                (Cell::Void, false) => None,
            };
            let wall_item = if wall {
                map.create_item(config.wall_id)
            } else {
                None
            };

            let tile = map.create_tile(region.position(x, y));
            tile.set_ground(ground);
            if let Some(item) = wall_item {
                tile.add_item(item);
            }

            summary.tiles += 1;
            match cell {
                Cell::Floor => summary.floors += 1,
                Cell::Void if wall => summary.walls += 1,
                Cell::Void => {}
            }
        }

        summary
    }
}
