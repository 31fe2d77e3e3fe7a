//! Turn and round progression
//!
//! One team acts at a time. Ending a turn hands control to the other
//! team; the round counter increments each time control returns to the
//! team that started the encounter. Conclusion is one-shot: declaring
//! an outcome a second time is a no-op.

use serde::{Deserialize, Serialize};

use crate::combat::unit::Unit;
use crate::core::types::Team;

/// Where the state machine currently sits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TurnPhase {
    #[default]
    AwaitingAction, // Within a team's turn
    TeamTurnEnding, // Transitioning to the other team
    Concluded,      // Terminal
}

/// How the encounter ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EncounterOutcome {
    Victory(Team),
    Fled(Team),
    Aborted,
}

/// Encounter-scoped turn/round record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CombatRoundState {
    pub active_team: Team,
    pub round: u32,
    pub starting_team: Team,
    pub phase: TurnPhase,
    pub outcome: Option<EncounterOutcome>,
}

impl CombatRoundState {
    pub fn new(starting_team: Team) -> Self {
        Self {
            active_team: starting_team,
            round: 1,
            starting_team,
            phase: TurnPhase::AwaitingAction,
            outcome: None,
        }
    }

    pub fn is_concluded(&self) -> bool {
        matches!(self.phase, TurnPhase::Concluded)
    }

    /// Explicit end-turn (or exhaustion of actionable units)
    pub fn begin_turn_end(&mut self) {
        if matches!(self.phase, TurnPhase::AwaitingAction) {
            self.phase = TurnPhase::TeamTurnEnding;
        }
    }

    /// Hand control to the other team. Returns true when a new round
    /// began (control came back to the starting team).
    pub fn begin_next_turn(&mut self) -> bool {
        if !matches!(self.phase, TurnPhase::TeamTurnEnding) {
            return false;
        }
        self.active_team = self.active_team.opponent();
        self.phase = TurnPhase::AwaitingAction;
        if self.active_team == self.starting_team {
            self.round += 1;
            true
        } else {
            false
        }
    }

    /// One-shot conclusion. Returns true if this call declared the
    /// outcome, false if the machine was already terminal.
    pub fn conclude(&mut self, outcome: EncounterOutcome) -> bool {
        if self.outcome.is_some() {
            return false;
        }
        self.outcome = Some(outcome);
        self.phase = TurnPhase::Concluded;
        true
    }
}

/// Victory rule: a team whose living units are exhausted loses.
/// Evaluated after every state-mutating action and at every turn
/// boundary; returns the winner if there is one.
pub fn victor<'a, I>(units: I) -> Option<Team>
where
    I: IntoIterator<Item = &'a Unit>,
{
    let mut blue_alive = 0u32;
    let mut red_alive = 0u32;
    for unit in units {
        if unit.is_alive() {
            match unit.team {
                Team::Blue => blue_alive += 1,
                Team::Red => red_alive += 1,
            }
        }
    }
    if blue_alive == 0 {
        Some(Team::Red)
    } else if red_alive == 0 {
        Some(Team::Blue)
    } else {
        None
    }
}
