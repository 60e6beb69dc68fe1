//! Trainer AI Decision Engine
//!
//! Decides, once per turn, whether a trainer-controlled battler should switch out,
//! use one of its trainer's items, or attack. The engine reads an immutable battle
//! snapshot and writes only its own decision state.

// --- MODULE DECLARATIONS ---
pub mod ai;
pub mod battle;
pub mod config;
pub mod errors;

// --- PUBLIC API RE-EXPORTS ---

// --- From the `schema` crate ---
pub use schema::{
    Ability, BattleStat, HealAmount, Item, ItemEffects, Move, MoveCategory, MoveData, PokemonType,
    Species, TeamCondition,
};

// --- From this crate's modules (`src/`) ---

// Decision entry points.
pub use ai::{Behavior, TrainerAi};

// Battle snapshot and decision context.
pub use battle::context::{ActionSink, AiAction, BattleContext, DecisionState};
pub use battle::damage::{DamageCalculator, StandardDamageCalculator};
pub use battle::rng::{RandomSource, ScriptedRandom, SeededRandom};
pub use battle::state::{
    BattleFlags, BattleSnapshot, BattlerId, Combatant, Inventory, MoveSlot, PartyMon, SideState,
    Stats,
};

// Configuration and fixtures.
pub use config::{AiConfig, BattleFixture};

// Crate-specific error and result types.
pub use errors::{AiError, AiResult, BattleStateError, BattleStateResult, LoadError};
