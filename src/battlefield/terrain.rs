//! Battlefield terrain kinds and their tactical properties

use serde::{Deserialize, Serialize};

/// How much cover a tile grants to a unit behind it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cover {
    None,
    Half,
    Full,
}

/// Terrain kind for a battlefield tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Terrain {
    #[default]
    Grass, // Open exterior ground
    Concrete,   // Paved ground, streets, loading areas
    Floor,      // Building interior
    Wall,       // Impassable, blocks sightlines
    LowWall,    // Passable cover: sandbags, barriers, parked cars
    DoorOpen,   // Passable structure opening
    DoorClosed, // Impassable until opened (later-stage concern)
    Water,      // Hazard, impassable
}

impl Terrain {
    /// Can a unit occupy this tile?
    pub fn is_walkable(&self) -> bool {
        match self {
            Terrain::Grass
            | Terrain::Concrete
            | Terrain::Floor
            | Terrain::LowWall
            | Terrain::DoorOpen => true,
            Terrain::Wall | Terrain::DoorClosed | Terrain::Water => false,
        }
    }

    /// Cover granted to a unit adjacent behind this tile
    pub fn cover(&self) -> Cover {
        match self {
            Terrain::Wall | Terrain::DoorClosed => Cover::Full,
            Terrain::LowWall => Cover::Half,
            _ => Cover::None,
        }
    }

    /// Does this tile block line of sight?
    pub fn blocks_los(&self) -> bool {
        matches!(self, Terrain::Wall | Terrain::DoorClosed)
    }

    /// Movement cost to enter (1.0 = normal)
    pub fn move_cost(&self) -> f32 {
        match self {
            Terrain::Grass | Terrain::Concrete | Terrain::Floor | Terrain::DoorOpen => 1.0,
            Terrain::LowWall => 2.0,
            Terrain::Water => 3.0,
            Terrain::Wall | Terrain::DoorClosed => f32::INFINITY,
        }
    }

    /// Is this either door kind?
    pub fn is_door(&self) -> bool {
        matches!(self, Terrain::DoorOpen | Terrain::DoorClosed)
    }
}
