use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Item {
    // Healing
    FullRestore,
    MaxPotion,
    HyperPotion,
    SuperPotion,
    Potion,
    FreshWater,
    SodaPop,
    Lemonade,
    MoomooMilk,
    OranBerry,
    SitrusBerry,
    Revive,
    MaxRevive,
    // Status cures
    FullHeal,
    Antidote,
    BurnHeal,
    IceHeal,
    Awakening,
    ParalyzeHeal,
    LumBerry,
    PersimBerry,
    // Battle items
    XAttack,
    XDefend,
    XSpeed,
    XSpecial,
    XAccuracy,
    DireHit,
    GuardSpec,
    // Held items with no trainer-use effect
    FocusBand,
    Leftovers,
    Nugget,
}

bitflags! {
    /// Effect bundle of a consumable, one bit per independent effect.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct ItemEffects: u32 {
        const FULL_RESTORE    = 1 << 0;
        const HEAL_HP         = 1 << 1;
        const REVIVE          = 1 << 2;

        const CURE_SLEEP      = 1 << 3;
        const CURE_POISON     = 1 << 4;
        const CURE_BURN       = 1 << 5;
        const CURE_FREEZE     = 1 << 6;
        const CURE_PARALYSIS  = 1 << 7;
        const CURE_CONFUSION  = 1 << 8;

        const X_ATTACK        = 1 << 9;
        const X_DEFEND        = 1 << 10;
        const X_SPEED         = 1 << 11;
        const X_SPATK         = 1 << 12;
        const X_SPDEF         = 1 << 13;
        const X_ACCURACY      = 1 << 14;
        const X_EVASION       = 1 << 15;
        const DIRE_HIT        = 1 << 16;

        const GUARD_SPEC      = 1 << 17;

        const CURE_ALL = Self::CURE_SLEEP.bits()
            | Self::CURE_POISON.bits()
            | Self::CURE_BURN.bits()
            | Self::CURE_FREEZE.bits()
            | Self::CURE_PARALYSIS.bits()
            | Self::CURE_CONFUSION.bits();

        const STAT_BOOSTS = Self::X_ATTACK.bits()
            | Self::X_DEFEND.bits()
            | Self::X_SPEED.bits()
            | Self::X_SPATK.bits()
            | Self::X_SPDEF.bits()
            | Self::X_ACCURACY.bits()
            | Self::X_EVASION.bits()
            | Self::DIRE_HIT.bits();
    }
}

/// How much HP a healing item restores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealAmount {
    None,
    Fixed(u16),
    Half,
    Full,
}

impl HealAmount {
    /// Raw amount restored for a combatant with `max_hp`, before capping at missing HP.
    pub fn for_max_hp(self, max_hp: u16) -> u16 {
        match self {
            HealAmount::None => 0,
            HealAmount::Fixed(amount) => amount,
            HealAmount::Half => max_hp / 2,
            HealAmount::Full => max_hp,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemData {
    pub effects: ItemEffects,
    pub heal: HealAmount,
}

impl Item {
    pub fn data(self) -> ItemData {
        use ItemEffects as E;
        let heal = |amount: HealAmount| ItemData {
            effects: E::HEAL_HP,
            heal: amount,
        };
        let effect = |effects: ItemEffects| ItemData {
            effects,
            heal: HealAmount::None,
        };

        match self {
            Item::FullRestore => ItemData {
                effects: E::FULL_RESTORE | E::HEAL_HP | E::CURE_ALL,
                heal: HealAmount::Full,
            },
            Item::MaxPotion => heal(HealAmount::Full),
            Item::HyperPotion => heal(HealAmount::Fixed(200)),
            Item::SuperPotion => heal(HealAmount::Fixed(50)),
            Item::Potion => heal(HealAmount::Fixed(20)),
            Item::FreshWater => heal(HealAmount::Fixed(50)),
            Item::SodaPop => heal(HealAmount::Fixed(60)),
            Item::Lemonade => heal(HealAmount::Fixed(80)),
            Item::MoomooMilk => heal(HealAmount::Fixed(100)),
            Item::OranBerry => heal(HealAmount::Fixed(10)),
            Item::SitrusBerry => heal(HealAmount::Fixed(30)),
            Item::Revive => ItemData {
                effects: E::HEAL_HP | E::REVIVE,
                heal: HealAmount::Half,
            },
            Item::MaxRevive => ItemData {
                effects: E::HEAL_HP | E::REVIVE,
                heal: HealAmount::Full,
            },
            Item::FullHeal => effect(E::CURE_ALL),
            Item::LumBerry => effect(E::CURE_ALL),
            Item::Antidote => effect(E::CURE_POISON),
            Item::BurnHeal => effect(E::CURE_BURN),
            Item::IceHeal => effect(E::CURE_FREEZE),
            Item::Awakening => effect(E::CURE_SLEEP),
            Item::ParalyzeHeal => effect(E::CURE_PARALYSIS),
            Item::PersimBerry => effect(E::CURE_CONFUSION),
            Item::XAttack => effect(E::X_ATTACK),
            Item::XDefend => effect(E::X_DEFEND),
            Item::XSpeed => effect(E::X_SPEED),
            Item::XSpecial => effect(E::X_SPATK),
            Item::XAccuracy => effect(E::X_ACCURACY),
            Item::DireHit => effect(E::DIRE_HIT),
            Item::GuardSpec => effect(E::GUARD_SPEC),
            Item::FocusBand | Item::Leftovers | Item::Nugget => effect(E::empty()),
        }
    }

    pub fn effects(self) -> ItemEffects {
        self.data().effects
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
