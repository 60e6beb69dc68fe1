use serde::{Deserialize, Serialize};
use std::fmt;
use strum::EnumIter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash, EnumIter)]
pub enum PokemonType {
    Normal,
    Fighting,
    Flying,
    Poison,
    Ground,
    Rock,
    Bug,
    Ghost,
    Steel,
    Fire,
    Water,
    Grass,
    Electric,
    Psychic,
    Ice,
    Dragon,
    Dark,
    Typeless,
}

impl fmt::Display for PokemonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Damage multiplier for one attacking type against one defending type, on a x10 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeMultiplier {
    NoEffect,
    NotVeryEffective,
    Normal,
    SuperEffective,
}

impl TypeMultiplier {
    /// The multiplier scaled by ten (0, 5, 10, 20).
    pub const fn scaled(self) -> u16 {
        match self {
            TypeMultiplier::NoEffect => 0,
            TypeMultiplier::NotVeryEffective => 5,
            TypeMultiplier::Normal => 10,
            TypeMultiplier::SuperEffective => 20,
        }
    }
}

/// Neutral value of the x10 multiplier scale.
pub const TYPE_MUL_NORMAL: u16 = 10;

use PokemonType::*;
use TypeMultiplier::{NoEffect as X0, NotVeryEffective as HALF, SuperEffective as X2};

/// Every non-neutral matchup. Pairs that are not listed deal normal damage.
pub const TYPE_EFFECTIVENESS: &[(PokemonType, PokemonType, TypeMultiplier)] = &[
    (Normal, Rock, HALF),
    (Normal, Steel, HALF),
    (Normal, Ghost, X0),
    (Fire, Fire, HALF),
    (Fire, Water, HALF),
    (Fire, Grass, X2),
    (Fire, Ice, X2),
    (Fire, Bug, X2),
    (Fire, Rock, HALF),
    (Fire, Dragon, HALF),
    (Fire, Steel, X2),
    (Water, Fire, X2),
    (Water, Water, HALF),
    (Water, Grass, HALF),
    (Water, Ground, X2),
    (Water, Rock, X2),
    (Water, Dragon, HALF),
    (Electric, Water, X2),
    (Electric, Electric, HALF),
    (Electric, Grass, HALF),
    (Electric, Ground, X0),
    (Electric, Flying, X2),
    (Electric, Dragon, HALF),
    (Grass, Fire, HALF),
    (Grass, Water, X2),
    (Grass, Grass, HALF),
    (Grass, Poison, HALF),
    (Grass, Ground, X2),
    (Grass, Flying, HALF),
    (Grass, Bug, HALF),
    (Grass, Rock, X2),
    (Grass, Dragon, HALF),
    (Grass, Steel, HALF),
    (Ice, Water, HALF),
    (Ice, Grass, X2),
    (Ice, Ice, HALF),
    (Ice, Ground, X2),
    (Ice, Flying, X2),
    (Ice, Dragon, X2),
    (Ice, Steel, HALF),
    (Ice, Fire, HALF),
    (Fighting, Normal, X2),
    (Fighting, Ice, X2),
    (Fighting, Poison, HALF),
    (Fighting, Flying, HALF),
    (Fighting, Psychic, HALF),
    (Fighting, Bug, HALF),
    (Fighting, Rock, X2),
    (Fighting, Dark, X2),
    (Fighting, Steel, X2),
    (Fighting, Ghost, X0),
    (Poison, Grass, X2),
    (Poison, Poison, HALF),
    (Poison, Ground, HALF),
    (Poison, Rock, HALF),
    (Poison, Ghost, HALF),
    (Poison, Steel, X0),
    (Ground, Fire, X2),
    (Ground, Electric, X2),
    (Ground, Grass, HALF),
    (Ground, Poison, X2),
    (Ground, Flying, X0),
    (Ground, Bug, HALF),
    (Ground, Rock, X2),
    (Ground, Steel, X2),
    (Flying, Electric, HALF),
    (Flying, Grass, X2),
    (Flying, Fighting, X2),
    (Flying, Bug, X2),
    (Flying, Rock, HALF),
    (Flying, Steel, HALF),
    (Psychic, Fighting, X2),
    (Psychic, Poison, X2),
    (Psychic, Psychic, HALF),
    (Psychic, Dark, X0),
    (Psychic, Steel, HALF),
    (Bug, Fire, HALF),
    (Bug, Grass, X2),
    (Bug, Fighting, HALF),
    (Bug, Poison, HALF),
    (Bug, Flying, HALF),
    (Bug, Psychic, X2),
    (Bug, Ghost, HALF),
    (Bug, Dark, X2),
    (Bug, Steel, HALF),
    (Rock, Fire, X2),
    (Rock, Ice, X2),
    (Rock, Fighting, HALF),
    (Rock, Ground, HALF),
    (Rock, Flying, X2),
    (Rock, Bug, X2),
    (Rock, Steel, HALF),
    (Ghost, Normal, X0),
    (Ghost, Psychic, X2),
    (Ghost, Dark, HALF),
    (Ghost, Steel, HALF),
    (Ghost, Ghost, X2),
    (Dragon, Dragon, X2),
    (Dragon, Steel, HALF),
    (Dark, Fighting, HALF),
    (Dark, Psychic, X2),
    (Dark, Ghost, X2),
    (Dark, Dark, HALF),
    (Dark, Steel, HALF),
    (Steel, Fire, HALF),
    (Steel, Water, HALF),
    (Steel, Electric, HALF),
    (Steel, Ice, X2),
    (Steel, Rock, X2),
    (Steel, Steel, HALF),
];

impl PokemonType {
    /// Look up the multiplier of `attacking` against a single `defending` type.
    pub fn type_effectiveness(attacking: PokemonType, defending: PokemonType) -> TypeMultiplier {
        TYPE_EFFECTIVENESS
            .iter()
            .find(|(atk, def, _)| *atk == attacking && *def == defending)
            .map(|(_, _, multiplier)| *multiplier)
            .unwrap_or(TypeMultiplier::Normal)
    }

    pub fn is_immune(attacking: PokemonType, defending: PokemonType) -> bool {
        Self::type_effectiveness(attacking, defending) == TypeMultiplier::NoEffect
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_chart_lists_each_pair_at_most_once() {
        for attacking in PokemonType::iter() {
            for defending in PokemonType::iter() {
                let entries = TYPE_EFFECTIVENESS
                    .iter()
                    .filter(|(atk, def, _)| *atk == attacking && *def == defending)
                    .count();
                assert!(entries <= 1, "{} -> {} listed {} times", attacking, defending, entries);
            }
        }
    }

    #[test]
    fn test_typeless_is_neutral_both_ways() {
        for other in PokemonType::iter() {
            assert_eq!(PokemonType::type_effectiveness(Typeless, other), TypeMultiplier::Normal);
            assert_eq!(PokemonType::type_effectiveness(other, Typeless), TypeMultiplier::Normal);
        }
    }

    #[test]
    fn test_immunities() {
        assert!(PokemonType::is_immune(Ground, Flying));
        assert!(PokemonType::is_immune(Electric, Ground));
        assert!(!PokemonType::is_immune(Water, Fire));
    }
}
