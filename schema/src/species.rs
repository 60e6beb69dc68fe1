use crate::{Ability, PokemonType};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Species {
    Alakazam,
    Arcanine,
    Blaziken,
    Blissey,
    Claydol,
    Donphan,
    Dugtrio,
    Flareon,
    Forretress,
    Gengar,
    Gyarados,
    Jolteon,
    Lanturn,
    Machamp,
    Magneton,
    Metagross,
    Pikachu,
    Salamence,
    Sceptile,
    Shedinja,
    Skarmory,
    Snorlax,
    Starmie,
    Swampert,
    Tyranitar,
    Vaporeon,
    Weezing,
    Wobbuffet,
}

/// Static typing and ability pair of a species.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesInfo {
    /// Both slots hold the same type for mono-typed species.
    pub types: [PokemonType; 2],
    pub abilities: [Ability; 2],
}

impl Species {
    pub fn info(self) -> SpeciesInfo {
        use Ability as A;
        use PokemonType as T;
        let info = |types: [PokemonType; 2], abilities: [Ability; 2]| SpeciesInfo { types, abilities };

        match self {
            Species::Alakazam => info([T::Psychic, T::Psychic], [A::Synchronize, A::InnerFocus]),
            Species::Arcanine => info([T::Fire, T::Fire], [A::Intimidate, A::FlashFire]),
            Species::Blaziken => info([T::Fire, T::Fighting], [A::Blaze, A::Blaze]),
            Species::Blissey => info([T::Normal, T::Normal], [A::NaturalCure, A::SereneGrace]),
            Species::Claydol => info([T::Ground, T::Psychic], [A::Levitate, A::Levitate]),
            Species::Donphan => info([T::Ground, T::Ground], [A::Sturdy, A::Sturdy]),
            Species::Dugtrio => info([T::Ground, T::Ground], [A::SandStream, A::ArenaTrap]),
            Species::Flareon => info([T::Fire, T::Fire], [A::FlashFire, A::FlashFire]),
            Species::Forretress => info([T::Bug, T::Steel], [A::Sturdy, A::Sturdy]),
            Species::Gengar => info([T::Ghost, T::Poison], [A::Levitate, A::Levitate]),
            Species::Gyarados => info([T::Water, T::Flying], [A::Intimidate, A::Intimidate]),
            Species::Jolteon => info([T::Electric, T::Electric], [A::VoltAbsorb, A::VoltAbsorb]),
            Species::Lanturn => info([T::Water, T::Electric], [A::VoltAbsorb, A::Illuminate]),
            Species::Machamp => info([T::Fighting, T::Fighting], [A::Guts, A::Guts]),
            Species::Magneton => info([T::Electric, T::Steel], [A::MagnetPull, A::Sturdy]),
            Species::Metagross => info([T::Steel, T::Psychic], [A::ClearBody, A::ClearBody]),
            Species::Pikachu => info([T::Electric, T::Electric], [A::Static, A::Static]),
            Species::Salamence => info([T::Dragon, T::Flying], [A::Intimidate, A::Intimidate]),
            Species::Sceptile => info([T::Grass, T::Grass], [A::Overgrow, A::Overgrow]),
            Species::Shedinja => info([T::Bug, T::Ghost], [A::WonderGuard, A::WonderGuard]),
            Species::Skarmory => info([T::Steel, T::Flying], [A::KeenEye, A::Sturdy]),
            Species::Snorlax => info([T::Normal, T::Normal], [A::Immunity, A::ThickFat]),
            Species::Starmie => info([T::Water, T::Psychic], [A::Illuminate, A::NaturalCure]),
            Species::Swampert => info([T::Water, T::Ground], [A::Torrent, A::Torrent]),
            Species::Tyranitar => info([T::Rock, T::Dark], [A::SandStream, A::SandStream]),
            Species::Vaporeon => info([T::Water, T::Water], [A::WaterAbsorb, A::WaterAbsorb]),
            Species::Weezing => info([T::Poison, T::Poison], [A::Levitate, A::Levitate]),
            Species::Wobbuffet => info([T::Psychic, T::Psychic], [A::ShadowTag, A::ShadowTag]),
        }
    }

    pub fn types(self) -> [PokemonType; 2] {
        self.info().types
    }

    /// Ability for the given slot; any slot other than 0 selects the second ability.
    pub fn ability(self, slot: u8) -> Ability {
        let abilities = self.info().abilities;
        if slot != 0 {
            abilities[1]
        } else {
            abilities[0]
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
