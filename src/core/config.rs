//! Encounter configuration
//!
//! Tunable values an encounter is created with. Defaults match the
//! shipped balance; callers override per scenario.

use serde::{Deserialize, Serialize};

use crate::battlefield::MapProfile;

/// Configuration for a single encounter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncounterConfig {
    /// Battlefield layout to generate.
    ///
    /// `None` selects uniformly at random from the available profiles
    /// using the encounter's injected RNG, which keeps map choice
    /// reproducible under a fixed seed.
    pub map_profile: Option<MapProfile>,

    /// Rounds a unit stays stunned when the lethal gate resolves with
    /// stun-instead. The stun expires at the start of the stunned
    /// unit's team turn once this many turns have passed.
    pub stun_rounds: u32,
}

impl Default for EncounterConfig {
    fn default() -> Self {
        Self {
            map_profile: None,
            stun_rounds: 1,
        }
    }
}

impl EncounterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.stun_rounds == 0 {
            return Err("stun_rounds must be at least 1".into());
        }
        Ok(())
    }
}
