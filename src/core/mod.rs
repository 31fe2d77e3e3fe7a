pub mod config;
pub mod error;
pub mod types;

pub use config::EncounterConfig;
pub use error::{Result, TacticsError};
pub use types::{GridPos, Team, UnitId};
