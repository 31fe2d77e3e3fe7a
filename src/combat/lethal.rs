//! Lethal-action gate
//!
//! The checkpoint between "damage computed" and "damage committed".
//! The projection compares raw incoming damage against current hit
//! points and deliberately ignores shield absorption, so it over-warns
//! for shielded targets. Preserve that: the resolver's shield-first
//! math still decides what actually happens on confirm.

use serde::{Deserialize, Serialize};

use crate::combat::injury::BodyPart;
use crate::combat::unit::Unit;
use crate::core::types::UnitId;

/// The acting collaborator's answer to a lethal warning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LethalDecision {
    /// Apply the full damage; the target dies if the resolver agrees.
    ConfirmKill,
    /// Substitute a non-lethal stun; no damage is applied.
    StunInstead,
    /// Discard the action entirely; no state is touched.
    Cancel,
}

/// An action parked at the gate, waiting for a decision. The gate
/// itself holds no state across calls; the encounter owns this while
/// the decision is outstanding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingLethal {
    pub attacker: UnitId,
    pub defender: UnitId,
    pub raw_damage: i32,
    pub body_part: Option<BodyPart>,
}

/// Would this raw damage project the unit to zero or fewer hit
/// points? Shield is not subtracted.
pub fn is_projected_lethal(unit: &Unit, raw_damage: i32) -> bool {
    raw_damage > 0 && unit.hit_points as i64 <= raw_damage as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::unit::UnitSpec;
    use crate::core::types::Team;

    fn unit_with(hp: u32, shield: u32) -> Unit {
        let mut unit = Unit::from_spec(UnitSpec {
            name: "Mark".into(),
            team: Team::Red,
            max_hit_points: hp,
            max_shield: shield.max(1),
            shield_regen: 0,
        });
        unit.shield = shield;
        unit
    }

    #[test]
    fn test_projection_triggers_at_exact_hp() {
        let unit = unit_with(10, 0);
        assert!(is_projected_lethal(&unit, 10));
        assert!(is_projected_lethal(&unit, 15));
        assert!(!is_projected_lethal(&unit, 9));
    }

    #[test]
    fn test_projection_ignores_shield() {
        // Shield would absorb everything, but the gate still warns
        let unit = unit_with(10, 50);
        assert!(is_projected_lethal(&unit, 12));
    }

    #[test]
    fn test_nonpositive_damage_never_warns() {
        let unit = unit_with(1, 0);
        assert!(!is_projected_lethal(&unit, 0));
        assert!(!is_projected_lethal(&unit, -4));
    }
}
