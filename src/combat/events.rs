//! Structured combat notifications
//!
//! Fire-and-forget from the resolver's perspective: each event carries
//! enough data (unit ids, amounts, new totals) for a UI to render
//! without re-deriving state, plus a preformatted message line.

use serde::{Deserialize, Serialize};

use crate::battlefield::MapProfile;
use crate::combat::injury::{BodyPart, InjuryKind};
use crate::combat::status::StatusKind;
use crate::core::types::{Team, UnitId};

/// One notification from the resolver
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CombatEvent {
    pub round: u32,
    pub event_type: CombatEventType,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum CombatEventType {
    EncounterStarted {
        profile: MapProfile,
    },
    TurnStarted {
        team: Team,
        round: u32,
    },
    ShieldRegenerated {
        unit_id: UnitId,
        amount: u32,
        shield: u32,
        max_shield: u32,
    },
    ShieldBroken {
        unit_id: UnitId,
    },
    DamageResolved {
        attacker: UnitId,
        defender: UnitId,
        hp_damage: u32,
        shield_damage: u32,
        hit_points: u32,
    },
    StatusDamage {
        unit_id: UnitId,
        kind: StatusKind,
        hp_damage: u32,
        shield_damage: u32,
        hit_points: u32,
    },
    StatusApplied {
        unit_id: UnitId,
        kind: StatusKind,
    },
    StatusExpired {
        unit_id: UnitId,
        kind: StatusKind,
    },
    InjuryRolled {
        unit_id: UnitId,
        body_part: BodyPart,
        injury: Option<InjuryKind>,
    },
    UnitDefeated {
        unit_id: UnitId,
    },
    VictoryDeclared {
        winner: Team,
    },
    EncounterFled {
        team: Team,
    },
    EncounterAborted,
}

/// Accumulated notifications for one encounter
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CombatEventLog {
    pub events: Vec<CombatEvent>,
}

impl CombatEventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event_type: CombatEventType, message: String, round: u32) {
        self.events.push(CombatEvent {
            round,
            event_type,
            message,
        });
    }
}
