//! Encounter orchestration
//!
//! One encounter owns its units, battlefield, round state, and event
//! log outright; nothing is shared with other encounters. Actions flow
//! through an explicit pipeline: lethal gate, then damage resolver,
//! then injury hook, then victory check. Regeneration and status
//! ticking run at turn boundaries, never mid-turn.

use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::battlefield::{generate, generate_random, Battlefield};
use crate::combat::damage::{resolve_damage, DamageResult};
use crate::combat::events::{CombatEvent, CombatEventLog, CombatEventType};
use crate::combat::injury::{roll_for_injury, BodyPart, InjuryInstance};
use crate::combat::lethal::{is_projected_lethal, LethalDecision, PendingLethal};
use crate::combat::regen::regenerate_shield;
use crate::combat::rounds::{victor, CombatRoundState, EncounterOutcome};
use crate::combat::status::{StatusEffect, StatusKind};
use crate::combat::unit::{Unit, UnitSpec};
use crate::core::config::EncounterConfig;
use crate::core::error::{Result, TacticsError};
use crate::core::types::{Team, UnitId};

/// An action request from the acting collaborator
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AttackRequest {
    pub attacker: UnitId,
    pub defender: UnitId,
    pub raw_damage: i32,
    /// Hit location for the end-of-action injury roll; `None` skips
    /// the roll.
    pub body_part: Option<BodyPart>,
}

/// What happened to an attack request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackOutcome {
    /// Damage was resolved and committed.
    Resolved(DamageResult),
    /// The lethal gate intercepted the action. Nothing was mutated;
    /// the caller must obtain a decision and call
    /// [`Encounter::resolve_lethal_decision`].
    PendingLethalDecision,
}

/// Final per-unit state handed back to the meta-game layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitReport {
    pub id: UnitId,
    pub name: String,
    pub team: Team,
    pub hit_points: u32,
    pub shield: u32,
    pub alive: bool,
    pub injuries: Vec<InjuryInstance>,
}

/// Everything the meta-game needs when an encounter ends
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncounterSummary {
    pub outcome: Option<EncounterOutcome>,
    pub rounds: u32,
    pub units: Vec<UnitReport>,
}

/// A single squad-vs-squad encounter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Encounter {
    config: EncounterConfig,
    units: Vec<Unit>,
    battlefield: Battlefield,
    rounds: CombatRoundState,
    pending: Option<PendingLethal>,
    log: CombatEventLog,
}

impl Encounter {
    /// Create an encounter from meta-game stat blocks. The battlefield
    /// is generated up front, before any turn begins. Blue acts first.
    pub fn new(
        config: EncounterConfig,
        specs: Vec<UnitSpec>,
        rng: &mut ChaCha8Rng,
    ) -> Result<Self> {
        config.validate().map_err(TacticsError::InvalidConfig)?;

        let blue = specs.iter().filter(|s| s.team == Team::Blue).count();
        let red = specs.iter().filter(|s| s.team == Team::Red).count();
        if blue == 0 || red == 0 {
            return Err(TacticsError::InvalidConfig(
                "both teams need at least one unit".into(),
            ));
        }
        if specs.iter().any(|s| s.max_hit_points == 0) {
            return Err(TacticsError::InvalidConfig(
                "units need nonzero hit points".into(),
            ));
        }

        let battlefield = match config.map_profile {
            Some(profile) => generate(profile),
            None => generate_random(rng),
        };

        let units: Vec<Unit> = specs.into_iter().map(Unit::from_spec).collect();
        let mut encounter = Self {
            config,
            units,
            battlefield,
            rounds: CombatRoundState::new(Team::Blue),
            pending: None,
            log: CombatEventLog::new(),
        };

        let profile = encounter.battlefield.profile;
        tracing::info!(profile = profile.name(), "encounter started");
        encounter.log.push(
            CombatEventType::EncounterStarted { profile },
            format!("Combat begins: {}", profile.name()),
            1,
        );
        encounter.begin_team_turn();
        Ok(encounter)
    }

    pub fn battlefield(&self) -> &Battlefield {
        &self.battlefield
    }

    pub fn round_state(&self) -> &CombatRoundState {
        &self.rounds
    }

    pub fn events(&self) -> &[CombatEvent] {
        &self.log.events
    }

    pub fn pending_lethal(&self) -> Option<&PendingLethal> {
        self.pending.as_ref()
    }

    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    pub fn unit(&self, id: UnitId) -> Result<&Unit> {
        self.units
            .iter()
            .find(|u| u.id == id)
            .ok_or(TacticsError::UnitNotFound(id))
    }

    fn unit_mut(&mut self, id: UnitId) -> Result<&mut Unit> {
        self.units
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or(TacticsError::UnitNotFound(id))
    }

    /// Living units of one team
    pub fn living_units(&self, team: Team) -> Vec<&Unit> {
        self.units
            .iter()
            .filter(|u| u.team == team && u.is_alive())
            .collect()
    }

    /// Does this team still have a unit that can act this turn?
    pub fn has_actionable(&self, team: Team) -> bool {
        self.units.iter().any(|u| u.team == team && u.can_act())
    }

    fn ensure_active(&self) -> Result<()> {
        if self.rounds.is_concluded() {
            return Err(TacticsError::EncounterConcluded);
        }
        Ok(())
    }

    /// Submit an attack. If the projection says the defender would
    /// drop to zero or fewer hit points, the action parks at the gate
    /// untouched and the caller must supply a decision; otherwise it
    /// resolves immediately.
    pub fn request_attack(
        &mut self,
        request: AttackRequest,
        rng: &mut ChaCha8Rng,
    ) -> Result<AttackOutcome> {
        self.ensure_active()?;
        if self.pending.is_some() {
            return Err(TacticsError::DecisionPending);
        }

        let attacker = self.unit(request.attacker)?;
        if attacker.team != self.rounds.active_team {
            return Err(TacticsError::OutOfTurn(request.attacker));
        }
        if !attacker.can_act() {
            return Err(TacticsError::UnitCannotAct(request.attacker));
        }

        let defender = self.unit(request.defender)?;
        if !defender.is_alive() {
            return Err(TacticsError::TargetDown(request.defender));
        }

        // Gate check runs strictly before any resolver call so that a
        // cancel leaves no partial mutation behind.
        if is_projected_lethal(defender, request.raw_damage) {
            tracing::debug!(
                defender = %defender.name,
                damage = request.raw_damage,
                "lethal projection - awaiting decision"
            );
            self.pending = Some(PendingLethal {
                attacker: request.attacker,
                defender: request.defender,
                raw_damage: request.raw_damage,
                body_part: request.body_part,
            });
            return Ok(AttackOutcome::PendingLethalDecision);
        }

        let result = self.commit_attack(request, rng)?;
        Ok(AttackOutcome::Resolved(result))
    }

    /// Answer an outstanding lethal warning. Returns the damage result
    /// for confirm-kill, `None` for stun-instead and cancel.
    pub fn resolve_lethal_decision(
        &mut self,
        decision: LethalDecision,
        rng: &mut ChaCha8Rng,
    ) -> Result<Option<DamageResult>> {
        let pending = self.pending.take().ok_or(TacticsError::NoDecisionPending)?;

        match decision {
            LethalDecision::Cancel => {
                // Indistinguishable from the action never having been
                // attempted: no mutation, no event.
                tracing::debug!("lethal action cancelled");
                Ok(None)
            }
            LethalDecision::StunInstead => {
                let round = self.rounds.round;
                let stun_rounds = self.config.stun_rounds;
                let (unit_id, message) = {
                    let defender = self.unit_mut(pending.defender)?;
                    defender.apply_status(StatusEffect::new(StatusKind::Stunned, stun_rounds));
                    (defender.id, format!("{} is stunned", defender.name))
                };
                self.log.push(
                    CombatEventType::StatusApplied {
                        unit_id,
                        kind: StatusKind::Stunned,
                    },
                    message,
                    round,
                );
                self.unit_mut(pending.attacker)?.acted = true;
                self.advance_if_exhausted();
                Ok(None)
            }
            LethalDecision::ConfirmKill => {
                let request = AttackRequest {
                    attacker: pending.attacker,
                    defender: pending.defender,
                    raw_damage: pending.raw_damage,
                    body_part: pending.body_part,
                };
                let result = self.commit_attack(request, rng)?;
                Ok(Some(result))
            }
        }
    }

    /// Resolve a vetted attack against unit state and run the
    /// end-of-action hooks.
    fn commit_attack(
        &mut self,
        request: AttackRequest,
        rng: &mut ChaCha8Rng,
    ) -> Result<DamageResult> {
        let round = self.rounds.round;
        let attacker_name = {
            let attacker = self.unit_mut(request.attacker)?;
            attacker.acted = true;
            attacker.name.clone()
        };

        let (result, defender_name, hit_points, defender_alive) = {
            let defender = self.unit_mut(request.defender)?;
            let result = resolve_damage(defender, request.raw_damage);
            (
                result,
                defender.name.clone(),
                defender.hit_points,
                defender.is_alive(),
            )
        };

        tracing::debug!(
            attacker = %attacker_name,
            defender = %defender_name,
            hp_damage = result.hp_damage,
            shield_damage = result.shield_damage,
            "damage resolved"
        );
        self.log.push(
            CombatEventType::DamageResolved {
                attacker: request.attacker,
                defender: request.defender,
                hp_damage: result.hp_damage,
                shield_damage: result.shield_damage,
                hit_points,
            },
            format!(
                "{} hits {} for {} ({} HP remaining)",
                attacker_name,
                defender_name,
                result.total(),
                hit_points
            ),
            round,
        );

        if result.shield_broken {
            self.log.push(
                CombatEventType::ShieldBroken {
                    unit_id: request.defender,
                },
                format!("{}'s shield breaks", defender_name),
                round,
            );
        }

        // End-of-action injury hook: only meaningful when the hit got
        // through to hit points and the target is still standing.
        if result.hp_damage > 0 && defender_alive {
            if let Some(body_part) = request.body_part {
                let injury = roll_for_injury(body_part, rng);
                let message = match injury {
                    Some(kind) => format!("{}: {}", defender_name, kind.description()),
                    None => format!("{} shrugs off the {:?} hit", defender_name, body_part),
                };
                if let Some(kind) = injury {
                    self.unit_mut(request.defender)?.add_injury(kind);
                }
                self.log.push(
                    CombatEventType::InjuryRolled {
                        unit_id: request.defender,
                        body_part,
                        injury,
                    },
                    message,
                    round,
                );
            }
        }

        if !defender_alive {
            self.log.push(
                CombatEventType::UnitDefeated {
                    unit_id: request.defender,
                },
                format!("{} is down", defender_name),
                round,
            );
        }

        self.maybe_declare_victory();
        self.advance_if_exhausted();
        Ok(result)
    }

    /// Attach a timed status effect to a living unit. This is the
    /// surface the external ability/effect layer applies stuns, bleeds,
    /// and similar through; the per-turn ticking stays in here.
    pub fn apply_status(&mut self, unit_id: UnitId, kind: StatusKind, rounds: u32) -> Result<()> {
        self.ensure_active()?;
        if self.pending.is_some() {
            return Err(TacticsError::DecisionPending);
        }
        let round = self.rounds.round;
        let message = {
            let unit = self.unit_mut(unit_id)?;
            if !unit.is_alive() {
                return Err(TacticsError::TargetDown(unit_id));
            }
            unit.apply_status(StatusEffect::new(kind, rounds));
            format!("{} is {}", unit.name, kind.name().to_lowercase())
        };
        self.log.push(
            CombatEventType::StatusApplied { unit_id, kind },
            message,
            round,
        );
        Ok(())
    }

    /// Explicit end-turn action
    pub fn end_turn(&mut self) -> Result<()> {
        self.ensure_active()?;
        if self.pending.is_some() {
            return Err(TacticsError::DecisionPending);
        }
        if self.maybe_declare_victory() {
            return Ok(());
        }
        self.advance_turn();
        self.advance_if_exhausted();
        Ok(())
    }

    /// The whole team retreats; the encounter ends without a victor.
    /// A second conclusion of any kind is a no-op.
    pub fn conclude_flee(&mut self, team: Team) -> Result<()> {
        if self.pending.is_some() {
            return Err(TacticsError::DecisionPending);
        }
        let round = self.rounds.round;
        if self.rounds.conclude(EncounterOutcome::Fled(team)) {
            tracing::info!(team = team.label(), "team fled the encounter");
            self.log.push(
                CombatEventType::EncounterFled { team },
                format!("{} Team retreats to safety", team.label()),
                round,
            );
        }
        Ok(())
    }

    /// External abort: the collaborator tears the encounter down.
    /// Discards any pending lethal decision.
    pub fn abort(&mut self) {
        self.pending = None;
        let round = self.rounds.round;
        if self.rounds.conclude(EncounterOutcome::Aborted) {
            self.log.push(
                CombatEventType::EncounterAborted,
                "Encounter aborted".into(),
                round,
            );
        }
    }

    /// Final state for the meta-game layer
    pub fn summary(&self) -> EncounterSummary {
        EncounterSummary {
            outcome: self.rounds.outcome,
            rounds: self.rounds.round,
            units: self
                .units
                .iter()
                .map(|u| UnitReport {
                    id: u.id,
                    name: u.name.clone(),
                    team: u.team,
                    hit_points: u.hit_points,
                    shield: u.shield,
                    alive: u.is_alive(),
                    injuries: u.injuries.clone(),
                })
                .collect(),
        }
    }

    fn maybe_declare_victory(&mut self) -> bool {
        let Some(winner) = victor(self.units.iter()) else {
            return false;
        };
        let round = self.rounds.round;
        if self.rounds.conclude(EncounterOutcome::Victory(winner)) {
            tracing::info!(winner = winner.label(), round, "victory declared");
            self.log.push(
                CombatEventType::VictoryDeclared { winner },
                format!("VICTORY! {} TEAM WINS!", winner.label()),
                round,
            );
        }
        true
    }

    /// Exhaustion of actionable units also ends the team turn. Keeps
    /// handing control over while the incoming team has nothing that
    /// can act (a fully stunned squad skips its turn outright); stun
    /// durations shrink on every hand-over, so this terminates.
    fn advance_if_exhausted(&mut self) {
        while !self.rounds.is_concluded() && !self.has_actionable(self.rounds.active_team) {
            self.advance_turn();
        }
    }

    fn advance_turn(&mut self) {
        self.rounds.begin_turn_end();
        self.rounds.begin_next_turn();
        // Turn boundary is also a victory checkpoint
        if self.maybe_declare_victory() {
            return;
        }
        self.begin_team_turn();
    }

    /// Start-of-turn sequence for the team now acting: reset action
    /// flags, skip stunned units, apply damage-over-time, tick effect
    /// durations, then regenerate shields - all before the first
    /// action of the turn can be resolved.
    fn begin_team_turn(&mut self) {
        let team = self.rounds.active_team;
        let round = self.rounds.round;

        for unit in self.units.iter_mut().filter(|u| u.team == team) {
            unit.acted = false;
        }

        // A stun consumes the turn it expires on
        for i in 0..self.units.len() {
            let unit = &mut self.units[i];
            if unit.team == team && unit.is_alive() && unit.is_stunned() {
                unit.acted = true;
                tracing::debug!(unit = %unit.name, "stunned - turn skipped");
            }
        }

        // Damage-over-time runs through the normal shield-first
        // resolver, then durations tick down
        for i in 0..self.units.len() {
            if self.units[i].team != team || !self.units[i].is_alive() {
                continue;
            }

            let bleeds: Vec<u32> = self.units[i]
                .status_effects
                .iter()
                .filter_map(|e| match e.kind {
                    StatusKind::Bleeding { damage_per_round } => Some(damage_per_round),
                    _ => None,
                })
                .collect();

            for damage in bleeds {
                let (unit_id, name, result, hit_points, alive) = {
                    let unit = &mut self.units[i];
                    let result = resolve_damage(unit, damage as i32);
                    (
                        unit.id,
                        unit.name.clone(),
                        result,
                        unit.hit_points,
                        unit.is_alive(),
                    )
                };
                self.log.push(
                    CombatEventType::StatusDamage {
                        unit_id,
                        kind: StatusKind::Bleeding {
                            damage_per_round: damage,
                        },
                        hp_damage: result.hp_damage,
                        shield_damage: result.shield_damage,
                        hit_points,
                    },
                    format!("{} bleeds for {}", name, result.total()),
                    round,
                );
                if !alive {
                    self.log.push(
                        CombatEventType::UnitDefeated { unit_id },
                        format!("{} is down", name),
                        round,
                    );
                    break;
                }
            }

            let (unit_id, name, expired) = {
                let unit = &mut self.units[i];
                let expired = unit.tick_status_effects();
                (unit.id, unit.name.clone(), expired)
            };
            for kind in expired {
                self.log.push(
                    CombatEventType::StatusExpired { unit_id, kind },
                    format!("{} is no longer {}", name, kind.name().to_lowercase()),
                    round,
                );
            }
        }

        // Damage-over-time can decide the encounter
        if self.maybe_declare_victory() {
            return;
        }

        // Shield regeneration, always before the first action
        for i in 0..self.units.len() {
            if self.units[i].team != team || !self.units[i].is_alive() {
                continue;
            }
            let (unit_id, name, amount, shield, max_shield) = {
                let unit = &mut self.units[i];
                let amount = regenerate_shield(unit);
                (unit.id, unit.name.clone(), amount, unit.shield, unit.max_shield)
            };
            if amount > 0 {
                tracing::debug!(unit = %name, amount, "shield regenerated");
                self.log.push(
                    CombatEventType::ShieldRegenerated {
                        unit_id,
                        amount,
                        shield,
                        max_shield,
                    },
                    format!(
                        "{}'s shield regenerates +{} ({}/{})",
                        name, amount, shield, max_shield
                    ),
                    round,
                );
            }
        }

        tracing::info!(team = team.label(), round, "turn started");
        self.log.push(
            CombatEventType::TurnStarted { team, round },
            format!("Turn: {} Team - Round {}", team.label(), round),
            round,
        );
    }
}
