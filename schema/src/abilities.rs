use crate::PokemonType;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Ability {
    #[default]
    None,
    Levitate,
    FlashFire,
    WaterAbsorb,
    VoltAbsorb,
    LightningRod,
    ThickFat,
    Sturdy,
    WonderGuard,
    ShadowTag,
    ArenaTrap,
    MagnetPull,
    NaturalCure,
    Intimidate,
    Overgrow,
    Blaze,
    Torrent,
    SandStream,
    ClearBody,
    KeenEye,
    Illuminate,
    SereneGrace,
    InnerFocus,
    Synchronize,
    Static,
    Guts,
    Immunity,
    Pressure,
    ShedSkin,
}

impl Ability {
    /// The ability that turns a hit of `move_type` into a benefit, if there is one.
    pub fn absorber_of(move_type: PokemonType) -> Option<Ability> {
        match move_type {
            PokemonType::Fire => Some(Ability::FlashFire),
            PokemonType::Water => Some(Ability::WaterAbsorb),
            PokemonType::Electric => Some(Ability::VoltAbsorb),
            _ => None,
        }
    }

    /// Type whose damaging moves this ability shrugs off entirely.
    pub fn neutralized_type(self) -> Option<PokemonType> {
        match self {
            Ability::Levitate => Some(PokemonType::Ground),
            Ability::FlashFire => Some(PokemonType::Fire),
            Ability::WaterAbsorb => Some(PokemonType::Water),
            Ability::VoltAbsorb => Some(PokemonType::Electric),
            _ => None,
        }
    }
}

impl fmt::Display for Ability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
