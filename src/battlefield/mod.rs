//! Procedural battlefield generation
//!
//! One grid per encounter, painted in layers: base fill, structures,
//! doors, cover, hazard. Generated once before the first turn.

pub mod generator;
pub mod grid;
pub mod terrain;

pub use generator::{generate, generate_random, MapProfile};
pub use grid::{Battlefield, Tile};
pub use terrain::{Cover, Terrain};
