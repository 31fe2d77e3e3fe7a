//! Combat participants
//!
//! Units are created at encounter start from meta-game stat blocks,
//! mutated only by the damage resolver and regeneration scheduler, and
//! handed back in the encounter summary when combat ends.

use serde::{Deserialize, Serialize};

use crate::combat::injury::{InjuryInstance, InjuryKind};
use crate::combat::status::{StatusEffect, StatusKind};
use crate::core::types::{Team, UnitId};

/// Stat block supplied by the squad/meta-game layer at encounter start
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitSpec {
    pub name: String,
    pub team: Team,
    pub max_hit_points: u32,
    pub max_shield: u32,
    pub shield_regen: u32,
}

/// A combat participant, owned by the encounter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Unit {
    pub id: UnitId,
    pub name: String,
    pub team: Team,
    pub hit_points: u32,
    pub max_hit_points: u32,
    pub shield: u32,
    pub max_shield: u32,
    pub shield_regen: u32,
    pub status_effects: Vec<StatusEffect>,
    pub injuries: Vec<InjuryInstance>,
    /// Has this unit taken its action this team turn?
    pub acted: bool,
}

impl Unit {
    /// Create a fresh unit at full hit points and shield
    pub fn from_spec(spec: UnitSpec) -> Self {
        Self {
            id: UnitId::new(),
            name: spec.name,
            team: spec.team,
            hit_points: spec.max_hit_points,
            max_hit_points: spec.max_hit_points,
            shield: spec.max_shield,
            max_shield: spec.max_shield,
            shield_regen: spec.shield_regen,
            status_effects: Vec::new(),
            injuries: Vec::new(),
            acted: false,
        }
    }

    /// A unit at zero hit points is dead: no turns, no targeting,
    /// no regeneration.
    pub fn is_alive(&self) -> bool {
        self.hit_points > 0
    }

    pub fn is_stunned(&self) -> bool {
        self.status_effects
            .iter()
            .any(|e| e.kind == StatusKind::Stunned)
    }

    /// Can this unit take an action right now?
    pub fn can_act(&self) -> bool {
        self.is_alive() && !self.acted && !self.is_stunned()
    }

    pub fn apply_status(&mut self, effect: StatusEffect) {
        self.status_effects.push(effect);
    }

    /// Decrement every active effect by one round and drop the ones
    /// that expire. Returns the kinds that expired this tick.
    pub fn tick_status_effects(&mut self) -> Vec<StatusKind> {
        let mut expired = Vec::new();
        for effect in &mut self.status_effects {
            effect.remaining_rounds = effect.remaining_rounds.saturating_sub(1);
            if effect.expired() {
                expired.push(effect.kind);
            }
        }
        self.status_effects.retain(|e| !e.expired());
        expired
    }

    pub fn add_injury(&mut self, kind: InjuryKind) {
        self.injuries.push(InjuryInstance::new(kind));
    }

    /// Advance the external recovery clock by one day. Healed injuries
    /// are removed; their kinds are returned.
    pub fn advance_recovery_day(&mut self) -> Vec<InjuryKind> {
        let mut healed = Vec::new();
        for injury in &mut self.injuries {
            injury.days_remaining = injury.days_remaining.saturating_sub(1);
            if injury.healed() {
                healed.push(injury.kind);
            }
        }
        self.injuries.retain(|i| !i.healed());
        healed
    }

    /// Kinds of all injuries currently carried
    pub fn injury_kinds(&self) -> Vec<InjuryKind> {
        self.injuries.iter().map(|i| i.kind).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_unit() -> Unit {
        Unit::from_spec(UnitSpec {
            name: "Kestrel".into(),
            team: Team::Blue,
            max_hit_points: 20,
            max_shield: 5,
            shield_regen: 2,
        })
    }

    #[test]
    fn test_unit_spec_creates_full_unit() {
        let unit = test_unit();
        assert_eq!(unit.hit_points, 20);
        assert_eq!(unit.shield, 5);
        assert!(unit.is_alive());
        assert!(unit.can_act());
    }

    #[test]
    fn test_zero_hp_is_dead() {
        let mut unit = test_unit();
        unit.hit_points = 0;
        assert!(!unit.is_alive());
        assert!(!unit.can_act());
    }

    #[test]
    fn test_stunned_unit_cannot_act() {
        let mut unit = test_unit();
        unit.apply_status(StatusEffect::new(StatusKind::Stunned, 1));
        assert!(unit.is_stunned());
        assert!(!unit.can_act());

        let expired = unit.tick_status_effects();
        assert_eq!(expired, vec![StatusKind::Stunned]);
        assert!(!unit.is_stunned());
        assert!(unit.can_act());
    }

    #[test]
    fn test_acted_unit_cannot_act_again() {
        let mut unit = test_unit();
        unit.acted = true;
        assert!(!unit.can_act());
    }

    #[test]
    fn test_recovery_clock_removes_healed_injuries() {
        let mut unit = test_unit();
        unit.add_injury(InjuryKind::Concussion);
        let days = InjuryKind::Concussion.recovery_days();

        for _ in 0..days - 1 {
            assert!(unit.advance_recovery_day().is_empty());
        }
        assert_eq!(unit.advance_recovery_day(), vec![InjuryKind::Concussion]);
        assert!(unit.injuries.is_empty());
    }
}
