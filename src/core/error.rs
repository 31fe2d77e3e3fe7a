use thiserror::Error;

use crate::core::types::UnitId;

#[derive(Error, Debug)]
pub enum TacticsError {
    #[error("Unit not found: {0:?}")]
    UnitNotFound(UnitId),

    #[error("Target is already down: {0:?}")]
    TargetDown(UnitId),

    #[error("Unit cannot act this turn: {0:?}")]
    UnitCannotAct(UnitId),

    #[error("Unit does not belong to the active team: {0:?}")]
    OutOfTurn(UnitId),

    #[error("A lethal decision is pending; resolve it before acting")]
    DecisionPending,

    #[error("No lethal decision is pending")]
    NoDecisionPending,

    #[error("Encounter has already concluded")]
    EncounterConcluded,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, TacticsError>;
