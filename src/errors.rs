use crate::battle::state::BattlerId;
use thiserror::Error;

/// Main error type for the trainer AI.
///
/// Decision logic itself never fails: a heuristic that finds nothing simply answers
/// "no". These errors describe snapshots or inputs the engine cannot read at all.
#[derive(Debug, Error)]
pub enum AiError {
    /// Error related to an inconsistent battle snapshot
    #[error("Battle state error: {0}")]
    BattleState(#[from] BattleStateError),
    /// Error loading configuration or fixtures
    #[error("Load error: {0}")]
    Load(#[from] LoadError),
}

/// Errors related to battle snapshot lookups
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BattleStateError {
    /// Battler id outside the four field positions
    #[error("Invalid battler id: {0}")]
    InvalidBattler(u8),
    /// No combatant on the field at the requested position
    #[error("No active combatant for battler {0}")]
    NoActiveCombatant(BattlerId),
    /// Party slot index out of range or pointing at an empty slot
    #[error("Invalid party index: {0}")]
    InvalidPartyIndex(usize),
    /// Inventory slot index out of range
    #[error("Invalid inventory slot: {0}")]
    InvalidInventorySlot(usize),
}

/// Errors related to reading configuration and battle fixtures from disk
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: ron::error::SpannedError,
    },
}

/// Type alias for Results using AiError
pub type AiResult<T> = Result<T, AiError>;

/// Type alias for Results using BattleStateError
pub type BattleStateResult<T> = Result<T, BattleStateError>;
