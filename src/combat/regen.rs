//! Shield regeneration
//!
//! Runs once at the start of each team's turn, never mid-turn, and
//! always before the first action of that turn is resolved. Liveness
//! filtering is the caller's job; this stays a pure per-unit
//! operation.

use crate::combat::unit::Unit;

/// Regenerate one unit's shield, capped at its maximum. Returns the
/// amount actually regained: zero if the shield is full or the unit
/// has no regeneration.
pub fn regenerate_shield(unit: &mut Unit) -> u32 {
    if unit.shield_regen == 0 || unit.shield >= unit.max_shield {
        return 0;
    }
    let before = unit.shield;
    unit.shield = unit.max_shield.min(unit.shield + unit.shield_regen);
    unit.shield - before
}
