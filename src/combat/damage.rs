//! Damage and shield resolution
//!
//! Shields fully absorb incoming damage before hit points are touched.
//! All numeric inputs are clamped rather than rejected: combat must
//! never stall on a malformed value from an upstream ability
//! calculation. Callers exclude dead targets before invoking; the
//! resolver does not re-check liveness.

use serde::{Deserialize, Serialize};

use crate::combat::unit::Unit;

/// Outcome of one resolution call. Transient: exists for logging and
/// the caller's death check, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageResult {
    pub hp_damage: u32,
    pub shield_damage: u32,
    pub shield_broken: bool,
}

impl DamageResult {
    pub fn zero() -> Self {
        Self {
            hp_damage: 0,
            shield_damage: 0,
            shield_broken: false,
        }
    }

    /// Total damage actually applied
    pub fn total(&self) -> u32 {
        self.hp_damage + self.shield_damage
    }
}

/// Apply raw damage to a unit: shield absorbs first, remainder hits
/// hit points, floored at zero. Non-positive damage is a no-op.
pub fn resolve_damage(unit: &mut Unit, raw_damage: i32) -> DamageResult {
    if raw_damage <= 0 {
        return DamageResult::zero();
    }
    let raw = raw_damage as u32;

    let had_shield = unit.shield > 0;
    let shield_damage = unit.shield.min(raw);
    unit.shield -= shield_damage;
    let shield_broken = had_shield && unit.shield == 0;

    let hp_damage = (raw - shield_damage).min(unit.hit_points);
    unit.hit_points -= hp_damage;

    DamageResult {
        hp_damage,
        shield_damage,
        shield_broken,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::unit::UnitSpec;
    use crate::core::types::Team;

    fn unit_with(hp: u32, shield: u32) -> Unit {
        let mut unit = Unit::from_spec(UnitSpec {
            name: "Target".into(),
            team: Team::Red,
            max_hit_points: hp,
            max_shield: shield.max(10),
            shield_regen: 0,
        });
        unit.shield = shield;
        unit
    }

    #[test]
    fn test_shield_absorbs_before_hp() {
        let mut unit = unit_with(15, 5);
        let result = resolve_damage(&mut unit, 8);
        assert_eq!(result.shield_damage, 5);
        assert_eq!(result.hp_damage, 3);
        assert_eq!(unit.shield, 0);
        assert_eq!(unit.hit_points, 12);
    }

    #[test]
    fn test_break_flag_only_on_absorption_to_zero() {
        let mut unit = unit_with(15, 5);
        let result = resolve_damage(&mut unit, 5);
        assert!(result.shield_broken);
        assert_eq!(unit.shield, 0);
        assert_eq!(unit.hit_points, 15);

        // Already at zero shield: no second break
        let result = resolve_damage(&mut unit, 3);
        assert!(!result.shield_broken);
    }

    #[test]
    fn test_partial_absorption_does_not_break() {
        let mut unit = unit_with(15, 5);
        let result = resolve_damage(&mut unit, 3);
        assert!(!result.shield_broken);
        assert_eq!(unit.shield, 2);
        assert_eq!(result.hp_damage, 0);
    }

    #[test]
    fn test_hp_floors_at_zero() {
        let mut unit = unit_with(10, 0);
        let result = resolve_damage(&mut unit, 15);
        assert_eq!(unit.hit_points, 0);
        assert_eq!(result.hp_damage, 10);
        assert!(!unit.is_alive());
    }

    #[test]
    fn test_negative_and_zero_damage_are_noops() {
        let mut unit = unit_with(10, 4);
        assert_eq!(resolve_damage(&mut unit, 0), DamageResult::zero());
        assert_eq!(resolve_damage(&mut unit, -7), DamageResult::zero());
        assert_eq!(unit.hit_points, 10);
        assert_eq!(unit.shield, 4);
    }

    #[test]
    fn test_unshielded_hit_goes_straight_to_hp() {
        // A (20 hp) attacks B (15 hp, no shield) for 8
        let mut b = unit_with(15, 0);
        let result = resolve_damage(&mut b, 8);
        assert_eq!(b.hit_points, 7);
        assert_eq!(b.shield, 0);
        assert_eq!(result.shield_damage, 0);
        assert!(!result.shield_broken);
    }
}
