//! Dense tile grid for one encounter
//!
//! Every in-range coordinate holds exactly one tile. Tiles are
//! immutable once generation finishes; door state changes and
//! destructible cover belong to a later stage.

use serde::{Deserialize, Serialize};

use crate::battlefield::generator::MapProfile;
use crate::battlefield::terrain::Terrain;
use crate::core::types::{GridPos, Team};

/// A single battlefield tile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tile {
    pub x: u32,
    pub y: u32,
    pub terrain: Terrain,
}

/// The full battlefield grid plus per-team deployment suggestions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Battlefield {
    pub profile: MapProfile,
    pub width: u32,
    pub height: u32,
    tiles: Vec<Tile>,
    pub blue_deployment: Vec<GridPos>,
    pub red_deployment: Vec<GridPos>,
}

impl Battlefield {
    /// Create a grid filled with the given base terrain
    pub fn filled(profile: MapProfile, width: u32, height: u32, base: Terrain) -> Self {
        let mut tiles = Vec::with_capacity((width * height) as usize);
        for y in 0..height {
            for x in 0..width {
                tiles.push(Tile {
                    x,
                    y,
                    terrain: base,
                });
            }
        }
        Self {
            profile,
            width,
            height,
            tiles,
            blue_deployment: Vec::new(),
            red_deployment: Vec::new(),
        }
    }

    fn index(&self, x: u32, y: u32) -> usize {
        (y * self.width + x) as usize
    }

    /// Check if coordinate is within grid bounds
    pub fn in_bounds(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height
    }

    /// Get the tile at a coordinate
    pub fn tile(&self, x: u32, y: u32) -> Option<&Tile> {
        if self.in_bounds(x, y) {
            let idx = self.index(x, y);
            self.tiles.get(idx)
        } else {
            None
        }
    }

    /// Terrain at a coordinate (None out of range)
    pub fn terrain(&self, x: u32, y: u32) -> Option<Terrain> {
        self.tile(x, y).map(|t| t.terrain)
    }

    /// Set terrain at a coordinate; out-of-range coordinates are ignored
    pub fn set_terrain(&mut self, x: u32, y: u32, terrain: Terrain) {
        if self.in_bounds(x, y) {
            let idx = self.index(x, y);
            self.tiles[idx].terrain = terrain;
        }
    }

    /// Iterate over all tiles in row-major order
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// Suggested spawn tiles for a team
    pub fn deployment(&self, team: Team) -> &[GridPos] {
        match team {
            Team::Blue => &self.blue_deployment,
            Team::Red => &self.red_deployment,
        }
    }
}
