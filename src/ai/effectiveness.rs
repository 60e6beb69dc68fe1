//! Type matchups and the AI's coarse "will this move work" checks.

use crate::battle::rng::RandomSource;
use crate::battle::state::Combatant;
use bitflags::bitflags;
use schema::{Ability, Item, Move, PokemonType, TYPE_MUL_NORMAL};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Effectiveness {
    Immune,
    NotVeryEffective,
    Normal,
    SuperEffective,
}

/// Combined multiplier of one attacking type against a defender's typing, on a x10 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeMatchup {
    pub value: u16,
    pub class: Effectiveness,
}

impl TypeMatchup {
    fn from_value(value: u16) -> Self {
        let class = match value {
            0 => Effectiveness::Immune,
            v if v < TYPE_MUL_NORMAL => Effectiveness::NotVeryEffective,
            v if v == TYPE_MUL_NORMAL => Effectiveness::Normal,
            _ => Effectiveness::SuperEffective,
        };
        Self { value, class }
    }

    pub fn is_super_effective(&self) -> bool {
        self.class == Effectiveness::SuperEffective
    }
}

/// Multiply the per-type multipliers together. A mono-typed defender carries
/// its type twice and only counts it once.
pub fn type_matchup(attacking: PokemonType, defending: [PokemonType; 2]) -> TypeMatchup {
    let [first, second] = defending;
    let mut value = TYPE_MUL_NORMAL;
    value = value * PokemonType::type_effectiveness(attacking, first).scaled() / TYPE_MUL_NORMAL;
    if second != first {
        value =
            value * PokemonType::type_effectiveness(attacking, second).scaled() / TYPE_MUL_NORMAL;
    }
    TypeMatchup::from_value(value)
}

bitflags! {
    /// Outcome flags of running a move against a defender's typing and ability.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct MoveResult: u8 {
        const MISSED             = 1 << 0;
        const SUPER_EFFECTIVE    = 1 << 1;
        const NOT_VERY_EFFECTIVE = 1 << 2;
        const DOESNT_AFFECT_FOE  = 1 << 3;
    }
}

/// How `move_` would land on a defender with `types` and `ability`.
///
/// Moves without base power report nothing.
pub fn move_result(move_: Move, types: [PokemonType; 2], ability: Ability) -> MoveResult {
    let data = move_.data();
    if !data.is_damaging() {
        return MoveResult::empty();
    }

    if ability == Ability::Levitate && data.move_type == PokemonType::Ground {
        return MoveResult::MISSED | MoveResult::DOESNT_AFFECT_FOE;
    }

    let matchup = type_matchup(data.move_type, types);
    let mut flags = match matchup.class {
        Effectiveness::Immune => MoveResult::DOESNT_AFFECT_FOE,
        Effectiveness::NotVeryEffective => MoveResult::NOT_VERY_EFFECTIVE,
        Effectiveness::Normal => MoveResult::empty(),
        Effectiveness::SuperEffective => MoveResult::SUPER_EFFECTIVE,
    };

    if ability == Ability::WonderGuard && !flags.contains(MoveResult::SUPER_EFFECTIVE) {
        flags |= MoveResult::MISSED;
    }

    flags
}

/// Whether the defender's ability or held item blunts `move_` enough that the AI
/// should not count on it. A held Focus Band vetoes one time in ten.
pub fn is_move_effective_against_ability(
    move_: Move,
    defender: &Combatant,
    rng: &mut dyn RandomSource,
) -> bool {
    let move_type = move_.data().move_type;

    let blocked = match defender.ability {
        Ability::Levitate => move_type == PokemonType::Ground,
        Ability::FlashFire => move_type == PokemonType::Fire,
        Ability::WaterAbsorb => move_type == PokemonType::Water,
        Ability::VoltAbsorb | Ability::LightningRod => move_type == PokemonType::Electric,
        Ability::ThickFat => matches!(move_type, PokemonType::Fire | PokemonType::Ice),
        Ability::Sturdy => defender.hp == defender.max_hp,
        _ => false,
    };
    if blocked {
        return false;
    }

    if defender.held_item == Some(Item::FocusBand)
        && rng.next_random("focus band veto") % 10 == 0
    {
        return false;
    }

    true
}
