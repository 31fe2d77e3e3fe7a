//! Combat resolution - the encounter-scoped core
//!
//! Shields absorb before hit points, a lethal blow must be confirmed
//! before it commits, and health never goes negative.

pub mod damage;
pub mod encounter;
pub mod events;
pub mod injury;
pub mod lethal;
pub mod regen;
pub mod rounds;
pub mod status;
pub mod unit;

// Re-exports for convenient access
pub use damage::{resolve_damage, DamageResult};
pub use encounter::{AttackOutcome, AttackRequest, Encounter, EncounterSummary, UnitReport};
pub use events::{CombatEvent, CombatEventLog, CombatEventType};
pub use injury::{
    legal_consequences, medical_costs, recovery_time, roll_for_injury, BodyPart, InjuryInstance,
    InjuryKind, InjurySeverity,
};
pub use lethal::{is_projected_lethal, LethalDecision, PendingLethal};
pub use regen::regenerate_shield;
pub use rounds::{victor, CombatRoundState, EncounterOutcome, TurnPhase};
pub use status::{StatusEffect, StatusKind};
pub use unit::{Unit, UnitSpec};
