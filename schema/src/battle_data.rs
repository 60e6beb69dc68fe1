use serde::{Deserialize, Serialize};
use std::fmt;

/// Timed effects that protect a whole side of the field.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, Copy)]
pub enum TeamCondition {
    Reflect,
    LightScreen,
    Mist,
    Safeguard,
}

impl fmt::Display for TeamCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let display_name = match self {
            TeamCondition::Reflect => "Reflect",
            TeamCondition::LightScreen => "Light Screen",
            TeamCondition::Mist => "Mist",
            TeamCondition::Safeguard => "Safeguard",
        };

        write!(f, "{}", display_name)
    }
}

/// The battle stats that can carry stages, in stage-array order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BattleStat {
    Atk,
    Def,
    Spe,
    SpAtk,
    SpDef,
    Acc,
    Eva,
}

impl BattleStat {
    pub const ALL: [BattleStat; 7] = [
        BattleStat::Atk,
        BattleStat::Def,
        BattleStat::Spe,
        BattleStat::SpAtk,
        BattleStat::SpDef,
        BattleStat::Acc,
        BattleStat::Eva,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for BattleStat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BattleStat::Atk => write!(f, "Attack"),
            BattleStat::Def => write!(f, "Defense"),
            BattleStat::Spe => write!(f, "Speed"),
            BattleStat::SpAtk => write!(f, "Special Attack"),
            BattleStat::SpDef => write!(f, "Special Defense"),
            BattleStat::Acc => write!(f, "Accuracy"),
            BattleStat::Eva => write!(f, "Evasion"),
        }
    }
}
