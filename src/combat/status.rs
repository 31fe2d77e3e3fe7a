//! Timed status effects attached to units
//!
//! Effects tick down at the start of the owning team's turn and expire
//! at zero remaining rounds.

use serde::{Deserialize, Serialize};

/// What a status effect does while active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusKind {
    /// Unit cannot act. Applied by the lethal gate's stun-instead path.
    Stunned,
    /// Loses hit points at the start of each owning-team turn; the
    /// loss runs through the normal shield-first resolver.
    Bleeding { damage_per_round: u32 },
}

impl StatusKind {
    pub fn name(&self) -> &'static str {
        match self {
            StatusKind::Stunned => "Stunned",
            StatusKind::Bleeding { .. } => "Bleeding",
        }
    }
}

/// One active effect instance on a unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusEffect {
    pub kind: StatusKind,
    pub remaining_rounds: u32,
}

impl StatusEffect {
    pub fn new(kind: StatusKind, rounds: u32) -> Self {
        Self {
            kind,
            remaining_rounds: rounds,
        }
    }

    pub fn expired(&self) -> bool {
        self.remaining_rounds == 0
    }
}
