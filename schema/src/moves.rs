use crate::PokemonType;
use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveCategory {
    Physical,
    Special,
    Status,
}

impl fmt::Display for MoveCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveCategory::Physical => write!(f, "Physical"),
            MoveCategory::Special => write!(f, "Special"),
            MoveCategory::Status => write!(f, "Status"),
        }
    }
}

bitflags! {
    /// Behavior markers the AI cares about.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct MoveFlags: u8 {
        /// Deals damage over time instead of on hit (poison, burn, seeding, weather).
        const INDIRECT_DAMAGE     = 1 << 0;
        /// Status move that still lands on a Wonder Guard holder.
        const HITS_WONDER_GUARD   = 1 << 1;
        /// User is off the field for the charging turn.
        const SEMI_INVULNERABLE   = 1 << 2;
        /// Removes entry hazards from the user's side.
        const CLEARS_HAZARDS      = 1 << 3;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    // Damaging
    Tackle,
    BodySlam,
    QuickAttack,
    ExtremeSpeed,
    HyperBeam,
    Swift,
    RapidSpin,
    Flamethrower,
    FireBlast,
    Surf,
    HydroPump,
    Thunderbolt,
    Thunder,
    GigaDrain,
    RazorLeaf,
    IceBeam,
    Psychic,
    ShadowBall,
    Earthquake,
    RockSlide,
    SludgeBomb,
    CrossChop,
    MachPunch,
    BrickBreak,
    AerialAce,
    Fly,
    Dig,
    Dive,
    DragonClaw,
    Crunch,
    IronTail,
    Megahorn,
    // Status
    Toxic,
    WillOWisp,
    LeechSeed,
    Sandstorm,
    Hail,
    PoisonPowder,
    Growl,
    Screech,
    TailWhip,
    MetalSound,
    Roar,
    Whirlwind,
    Spikes,
    PerishSong,
    Protect,
    Detect,
    MeanLook,
    SwordsDance,
    Recover,
    Splash,
}

/// Static description of a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveData {
    pub move_type: PokemonType,
    pub power: u8,
    /// `None` for moves that never miss.
    pub accuracy: Option<u8>,
    pub priority: i8,
    pub category: MoveCategory,
    pub flags: MoveFlags,
}

impl MoveData {
    const fn new(
        move_type: PokemonType,
        power: u8,
        accuracy: Option<u8>,
        priority: i8,
        category: MoveCategory,
        flags: MoveFlags,
    ) -> Self {
        Self {
            move_type,
            power,
            accuracy,
            priority,
            category,
            flags,
        }
    }

    pub fn is_damaging(&self) -> bool {
        self.power > 0
    }
}

impl Move {
    pub fn data(self) -> MoveData {
        use MoveCategory::{Physical as P, Special as S, Status as St};
        use PokemonType::*;
        let none = MoveFlags::empty();
        let indirect = MoveFlags::INDIRECT_DAMAGE;
        let wonder = MoveFlags::HITS_WONDER_GUARD;
        let semi = MoveFlags::SEMI_INVULNERABLE;

        match self {
            Move::Tackle => MoveData::new(Normal, 35, Some(95), 0, P, none),
            Move::BodySlam => MoveData::new(Normal, 85, Some(100), 0, P, none),
            Move::QuickAttack => MoveData::new(Normal, 40, Some(100), 1, P, none),
            Move::ExtremeSpeed => MoveData::new(Normal, 80, Some(100), 1, P, none),
            Move::HyperBeam => MoveData::new(Normal, 150, Some(90), 0, P, none),
            Move::Swift => MoveData::new(Normal, 60, None, 0, P, none),
            Move::RapidSpin => MoveData::new(Normal, 20, Some(100), 0, P, MoveFlags::CLEARS_HAZARDS),
            Move::Flamethrower => MoveData::new(Fire, 95, Some(100), 0, S, none),
            Move::FireBlast => MoveData::new(Fire, 120, Some(85), 0, S, none),
            Move::Surf => MoveData::new(Water, 95, Some(100), 0, S, none),
            Move::HydroPump => MoveData::new(Water, 120, Some(80), 0, S, none),
            Move::Thunderbolt => MoveData::new(Electric, 95, Some(100), 0, S, none),
            Move::Thunder => MoveData::new(Electric, 120, Some(70), 0, S, none),
            Move::GigaDrain => MoveData::new(Grass, 60, Some(100), 0, S, none),
            Move::RazorLeaf => MoveData::new(Grass, 55, Some(95), 0, S, none),
            Move::IceBeam => MoveData::new(Ice, 95, Some(100), 0, S, none),
            Move::Psychic => MoveData::new(Psychic, 90, Some(100), 0, S, none),
            Move::ShadowBall => MoveData::new(Ghost, 80, Some(100), 0, P, none),
            Move::Earthquake => MoveData::new(Ground, 100, Some(100), 0, P, none),
            Move::RockSlide => MoveData::new(Rock, 75, Some(90), 0, P, none),
            Move::SludgeBomb => MoveData::new(Poison, 90, Some(100), 0, P, none),
            Move::CrossChop => MoveData::new(Fighting, 100, Some(80), 0, P, none),
            Move::MachPunch => MoveData::new(Fighting, 40, Some(100), 1, P, none),
            Move::BrickBreak => MoveData::new(Fighting, 75, Some(100), 0, P, none),
            Move::AerialAce => MoveData::new(Flying, 60, None, 0, P, none),
            Move::Fly => MoveData::new(Flying, 70, Some(95), 0, P, semi),
            Move::Dig => MoveData::new(Ground, 60, Some(100), 0, P, semi),
            Move::Dive => MoveData::new(Water, 60, Some(100), 0, S, semi),
            Move::DragonClaw => MoveData::new(Dragon, 80, Some(100), 0, S, none),
            Move::Crunch => MoveData::new(Dark, 80, Some(100), 0, S, none),
            Move::IronTail => MoveData::new(Steel, 100, Some(75), 0, P, none),
            Move::Megahorn => MoveData::new(Bug, 120, Some(85), 0, P, none),
            Move::Toxic => MoveData::new(Poison, 0, Some(85), 0, St, indirect),
            Move::WillOWisp => MoveData::new(Fire, 0, Some(75), 0, St, indirect),
            Move::LeechSeed => MoveData::new(Grass, 0, Some(90), 0, St, indirect),
            Move::Sandstorm => MoveData::new(Rock, 0, None, 0, St, indirect),
            Move::Hail => MoveData::new(Ice, 0, None, 0, St, indirect),
            Move::PoisonPowder => MoveData::new(Poison, 0, Some(75), 0, St, indirect),
            Move::Growl => MoveData::new(Normal, 0, Some(100), 0, St, wonder),
            Move::Screech => MoveData::new(Normal, 0, Some(85), 0, St, wonder),
            Move::TailWhip => MoveData::new(Normal, 0, Some(100), 0, St, wonder),
            Move::MetalSound => MoveData::new(Steel, 0, Some(85), 0, St, wonder),
            Move::Roar => MoveData::new(Normal, 0, Some(100), -6, St, wonder),
            Move::Whirlwind => MoveData::new(Normal, 0, Some(100), -6, St, wonder),
            Move::Spikes => MoveData::new(Ground, 0, None, 0, St, none),
            Move::PerishSong => MoveData::new(Normal, 0, None, 0, St, none),
            Move::Protect => MoveData::new(Normal, 0, None, 3, St, none),
            Move::Detect => MoveData::new(Fighting, 0, None, 3, St, none),
            Move::MeanLook => MoveData::new(Normal, 0, None, 0, St, none),
            Move::SwordsDance => MoveData::new(Normal, 0, None, 0, St, none),
            Move::Recover => MoveData::new(Normal, 0, None, 0, St, none),
            Move::Splash => MoveData::new(Normal, 0, None, 0, St, none),
        }
    }

    pub fn is_indirect_damage(self) -> bool {
        self.data().flags.contains(MoveFlags::INDIRECT_DAMAGE)
    }

    pub fn hits_wonder_guard(self) -> bool {
        self.data().flags.contains(MoveFlags::HITS_WONDER_GUARD)
    }

    pub fn is_semi_invulnerable(self) -> bool {
        self.data().flags.contains(MoveFlags::SEMI_INVULNERABLE)
    }

    pub fn clears_hazards(self) -> bool {
        self.data().flags.contains(MoveFlags::CLEARS_HAZARDS)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
