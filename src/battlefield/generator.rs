//! Layered battlefield painting
//!
//! Every profile follows the same five-step shape: flood-fill a base
//! terrain, stamp walled structures, punch doors so no interior is
//! sealed, scatter low-wall cover, and optionally add a water hazard.
//! Generation always terminates with a complete grid; there is no
//! failure mode.

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::battlefield::grid::Battlefield;
use crate::battlefield::terrain::Terrain;
use crate::core::types::GridPos;

/// Named battlefield layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MapProfile {
    UrbanWarehouse,
    MilitaryCompound,
    CityStreets,
}

impl MapProfile {
    /// All available profiles, in selection order
    pub fn all() -> [MapProfile; 3] {
        [
            MapProfile::UrbanWarehouse,
            MapProfile::MilitaryCompound,
            MapProfile::CityStreets,
        ]
    }

    /// Grid dimensions this profile paints
    pub fn dimensions(&self) -> (u32, u32) {
        (30, 30)
    }

    pub fn name(&self) -> &'static str {
        match self {
            MapProfile::UrbanWarehouse => "urban-warehouse",
            MapProfile::MilitaryCompound => "military-compound",
            MapProfile::CityStreets => "city-streets",
        }
    }
}

/// Generate a battlefield for a uniformly random profile
pub fn generate_random(rng: &mut ChaCha8Rng) -> Battlefield {
    let profiles = MapProfile::all();
    let profile = profiles[rng.gen_range(0..profiles.len())];
    generate(profile)
}

/// Generate the battlefield for a specific profile
pub fn generate(profile: MapProfile) -> Battlefield {
    let mut map = match profile {
        MapProfile::UrbanWarehouse => paint_urban_warehouse(),
        MapProfile::MilitaryCompound => paint_military_compound(),
        MapProfile::CityStreets => paint_city_streets(),
    };

    // Opposing deployment columns on the west and east edges
    map.blue_deployment = vec![
        GridPos::new(2, 10),
        GridPos::new(2, 15),
        GridPos::new(2, 20),
    ];
    map.red_deployment = vec![
        GridPos::new(27, 10),
        GridPos::new(27, 15),
        GridPos::new(27, 20),
    ];

    map
}

/// Fill an inclusive rectangle with one terrain
fn fill_rect(map: &mut Battlefield, x0: u32, y0: u32, x1: u32, y1: u32, terrain: Terrain) {
    for y in y0..=y1 {
        for x in x0..=x1 {
            map.set_terrain(x, y, terrain);
        }
    }
}

/// Paint only the perimeter of an inclusive rectangle
fn frame_rect(map: &mut Battlefield, x0: u32, y0: u32, x1: u32, y1: u32, terrain: Terrain) {
    for x in x0..=x1 {
        map.set_terrain(x, y0, terrain);
        map.set_terrain(x, y1, terrain);
    }
    for y in y0..=y1 {
        map.set_terrain(x0, y, terrain);
        map.set_terrain(x1, y, terrain);
    }
}

/// Stamp a structure: interior fill bounded by a wall perimeter
fn stamp_structure(
    map: &mut Battlefield,
    x0: u32,
    y0: u32,
    x1: u32,
    y1: u32,
    interior: Terrain,
    wall: Terrain,
) {
    fill_rect(map, x0, y0, x1, y1, interior);
    frame_rect(map, x0, y0, x1, y1, wall);
}

/// Large central warehouse with exterior grounds: interior pillars for
/// cover, a low-walled office room, a concrete loading area, scattered
/// exterior cover, and a drainage hazard.
fn paint_urban_warehouse() -> Battlefield {
    let profile = MapProfile::UrbanWarehouse;
    let (w, h) = profile.dimensions();

    // Step 1: grass exterior
    let mut map = Battlefield::filled(profile, w, h, Terrain::Grass);

    // Step 2: main warehouse building
    stamp_structure(&mut map, 8, 10, 22, 20, Terrain::Concrete, Terrain::Wall);

    // Step 3: warehouse doors (multiple entry points)
    map.set_terrain(15, 10, Terrain::DoorClosed);
    map.set_terrain(22, 15, Terrain::DoorOpen);
    map.set_terrain(10, 20, Terrain::DoorClosed);

    // Interior pillars
    map.set_terrain(12, 13, Terrain::Wall);
    map.set_terrain(12, 17, Terrain::Wall);
    map.set_terrain(18, 13, Terrain::Wall);
    map.set_terrain(18, 17, Terrain::Wall);

    // Office room in the corner, low-walled with its own opening
    stamp_structure(&mut map, 9, 11, 12, 14, Terrain::Floor, Terrain::LowWall);
    map.set_terrain(12, 12, Terrain::DoorOpen);

    // Step 4: cover
    for x in 3..=5 {
        map.set_terrain(x, 15, Terrain::LowWall);
    }
    for x in 25..=27 {
        map.set_terrain(x, 15, Terrain::LowWall);
    }

    // Concrete loading area
    fill_rect(&mut map, 23, 13, 27, 17, Terrain::Concrete);

    // Scattered cover in the open
    map.set_terrain(5, 8, Terrain::LowWall);
    map.set_terrain(6, 8, Terrain::LowWall);
    map.set_terrain(24, 22, Terrain::LowWall);
    map.set_terrain(25, 22, Terrain::LowWall);

    // Step 5: drainage hazard
    for y in 5..=7 {
        map.set_terrain(15, y, Terrain::Water);
    }

    map
}

/// Fortified compound: outer perimeter with gates, a main building and
/// barracks, a grass courtyard, defensive sandbag positions, corner
/// guard towers, and connecting corridors.
fn paint_military_compound() -> Battlefield {
    let profile = MapProfile::MilitaryCompound;
    let (w, h) = profile.dimensions();

    // Step 1: concrete base
    let mut map = Battlefield::filled(profile, w, h, Terrain::Concrete);

    // Step 2: outer perimeter wall
    frame_rect(&mut map, 3, 3, 26, 26, Terrain::Wall);

    // Step 3: gate entrances
    map.set_terrain(15, 3, Terrain::DoorOpen);
    map.set_terrain(15, 26, Terrain::DoorOpen);
    map.set_terrain(3, 15, Terrain::DoorOpen);

    // Main building (northeast)
    stamp_structure(&mut map, 17, 5, 24, 12, Terrain::Floor, Terrain::Wall);
    map.set_terrain(17, 8, Terrain::DoorClosed);

    // Barracks (southwest)
    stamp_structure(&mut map, 5, 17, 12, 24, Terrain::Floor, Terrain::Wall);
    map.set_terrain(8, 17, Terrain::DoorClosed);
    map.set_terrain(12, 20, Terrain::DoorClosed);

    // Central courtyard
    fill_rect(&mut map, 13, 13, 16, 16, Terrain::Grass);

    // Step 4: sandbag positions
    map.set_terrain(7, 7, Terrain::LowWall);
    map.set_terrain(8, 7, Terrain::LowWall);
    map.set_terrain(22, 22, Terrain::LowWall);
    map.set_terrain(22, 23, Terrain::LowWall);

    // Central cover
    map.set_terrain(14, 9, Terrain::LowWall);
    map.set_terrain(15, 9, Terrain::LowWall);
    map.set_terrain(14, 20, Terrain::LowWall);
    map.set_terrain(15, 20, Terrain::LowWall);

    // Guard towers at the corners
    map.set_terrain(5, 5, Terrain::Wall);
    map.set_terrain(24, 5, Terrain::Wall);
    map.set_terrain(5, 24, Terrain::Wall);
    map.set_terrain(24, 24, Terrain::Wall);

    // Corridor system between areas
    for x in 13..=16 {
        map.set_terrain(x, 8, Terrain::Concrete);
        map.set_terrain(x, 21, Terrain::Concrete);
    }
    for y in 13..=16 {
        map.set_terrain(8, y, Terrain::Concrete);
        map.set_terrain(21, y, Terrain::Concrete);
    }

    map
}

/// Urban intersection: a main street crossing a vertical street, four
/// quadrant buildings with interior dividers, street and alleyway
/// cover, and a fountain at the intersection.
fn paint_city_streets() -> Battlefield {
    let profile = MapProfile::CityStreets;
    let (w, h) = profile.dimensions();

    // Step 1: grass vacant lots
    let mut map = Battlefield::filled(profile, w, h, Terrain::Grass);

    // Step 2: streets
    fill_rect(&mut map, 0, 13, w - 1, 16, Terrain::Concrete);
    fill_rect(&mut map, 13, 0, 16, h - 1, Terrain::Concrete);

    // Building 1 (northwest), with an interior room divider
    stamp_structure(&mut map, 3, 3, 11, 11, Terrain::Floor, Terrain::Wall);
    map.set_terrain(7, 11, Terrain::DoorOpen);
    for x in 4..=6 {
        map.set_terrain(x, 7, Terrain::LowWall);
    }
    map.set_terrain(5, 7, Terrain::DoorOpen);

    // Building 2 (northeast)
    stamp_structure(&mut map, 18, 3, 26, 11, Terrain::Floor, Terrain::Wall);
    map.set_terrain(22, 11, Terrain::DoorClosed);

    // Building 3 (southwest)
    stamp_structure(&mut map, 3, 18, 11, 26, Terrain::Floor, Terrain::Wall);
    map.set_terrain(7, 18, Terrain::DoorClosed);

    // Building 4 (southeast), multi-room
    stamp_structure(&mut map, 18, 18, 26, 26, Terrain::Floor, Terrain::Wall);
    map.set_terrain(22, 18, Terrain::DoorOpen);
    for y in 19..=25 {
        map.set_terrain(22, y, Terrain::LowWall);
    }
    map.set_terrain(22, 22, Terrain::DoorOpen);

    // Step 4: street cover (parked cars, barriers)
    map.set_terrain(2, 14, Terrain::LowWall);
    map.set_terrain(2, 15, Terrain::LowWall);
    map.set_terrain(27, 14, Terrain::LowWall);
    map.set_terrain(27, 15, Terrain::LowWall);
    map.set_terrain(14, 2, Terrain::LowWall);
    map.set_terrain(15, 2, Terrain::LowWall);
    map.set_terrain(14, 27, Terrain::LowWall);
    map.set_terrain(15, 27, Terrain::LowWall);

    // Alleyway cover
    map.set_terrain(12, 7, Terrain::LowWall);
    map.set_terrain(17, 7, Terrain::LowWall);
    map.set_terrain(12, 22, Terrain::LowWall);
    map.set_terrain(17, 22, Terrain::LowWall);

    // Step 5: fountain in the intersection
    map.set_terrain(14, 14, Terrain::Water);
    map.set_terrain(15, 14, Terrain::Water);
    map.set_terrain(14, 15, Terrain::Water);
    map.set_terrain(15, 15, Terrain::Water);

    map
}
