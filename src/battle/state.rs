use crate::battle::conditions::{StatusFlags, Volatiles};
use crate::battle::stats::StatStages;
use crate::errors::{BattleStateError, BattleStateResult};
use bitflags::bitflags;
use schema::{Ability, Item, Move, PokemonType, Species, TeamCondition};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::ops::Range;

pub const PARTY_SIZE: usize = 6;
pub const MAX_MOVES: usize = 4;
pub const MAX_SPIKES_LAYERS: u8 = 3;

bitflags! {
    /// Properties of the battle as a whole.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct BattleFlags: u8 {
        const TRAINER          = 1 << 0;
        const DOUBLE           = 1 << 1;
        const ARENA            = 1 << 2;
        const TWO_OPPONENTS    = 1 << 3;
        const TOWER_LINK_MULTI = 1 << 4;
        const INGAME_PARTNER   = 1 << 5;
    }
}

/// A position on the field.
///
/// Bit 0 selects the side (0 = player, 1 = opponent) and bit 1 the flank
/// (0 = left, 2 = right). Singles only use the two left positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct BattlerId(u8);

impl BattlerId {
    pub const PLAYER_LEFT: BattlerId = BattlerId(0);
    pub const OPPONENT_LEFT: BattlerId = BattlerId(1);
    pub const PLAYER_RIGHT: BattlerId = BattlerId(2);
    pub const OPPONENT_RIGHT: BattlerId = BattlerId(3);

    pub const ALL: [BattlerId; 4] = [
        BattlerId::PLAYER_LEFT,
        BattlerId::OPPONENT_LEFT,
        BattlerId::PLAYER_RIGHT,
        BattlerId::OPPONENT_RIGHT,
    ];

    pub fn new(raw: u8) -> BattleStateResult<Self> {
        if raw < 4 {
            Ok(BattlerId(raw))
        } else {
            Err(BattleStateError::InvalidBattler(raw))
        }
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// 0 for the player side, 1 for the opponent side.
    pub const fn side(self) -> usize {
        (self.0 & 1) as usize
    }

    /// The battler directly across the field.
    pub const fn opposite(self) -> BattlerId {
        BattlerId(self.0 ^ 1)
    }

    /// The other battler on the same side.
    pub const fn partner(self) -> BattlerId {
        BattlerId(self.0 ^ 2)
    }

    pub const fn is_right_flank(self) -> bool {
        self.0 & 2 != 0
    }

    pub fn is_opposing(self, other: BattlerId) -> bool {
        self.side() != other.side()
    }
}

impl TryFrom<u8> for BattlerId {
    type Error = BattleStateError;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        BattlerId::new(raw)
    }
}

impl From<BattlerId> for u8 {
    fn from(id: BattlerId) -> u8 {
        id.0
    }
}

impl fmt::Display for BattlerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self.0 {
            0 => "player-left",
            1 => "opponent-left",
            2 => "player-right",
            _ => "opponent-right",
        };
        write!(f, "{} ({})", self.0, name)
    }
}

/// A known move and its remaining PP.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveSlot {
    #[serde(rename = "move")]
    pub move_: Move,
    pub pp: u8,
}

impl MoveSlot {
    pub fn new(move_: Move, pp: u8) -> Self {
        Self { move_, pp }
    }

    pub fn is_usable(&self) -> bool {
        self.pp > 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Stats {
    pub attack: u16,
    pub defense: u16,
    pub speed: u16,
    pub sp_attack: u16,
    pub sp_defense: u16,
}

/// A combatant currently on the field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Combatant {
    pub species: Species,
    pub level: u8,
    pub hp: u16,
    pub max_hp: u16,
    pub stats: Stats,
    /// Both slots hold the same type for mono-typed combatants.
    pub types: [PokemonType; 2],
    #[serde(default)]
    pub ability: Ability,
    #[serde(default)]
    pub held_item: Option<Item>,
    #[serde(default)]
    pub status: StatusFlags,
    #[serde(default)]
    pub volatiles: Volatiles,
    #[serde(default)]
    pub perish_count: u8,
    #[serde(default)]
    pub stat_stages: StatStages,
    pub moves: [Option<MoveSlot>; MAX_MOVES],
    pub party_index: usize,
    #[serde(default)]
    pub last_used_move: Option<Move>,
    #[serde(default)]
    pub last_landed_move: Option<Move>,
    #[serde(default)]
    pub last_hit_by: Option<BattlerId>,
    #[serde(default)]
    pub is_first_turn: bool,
}

impl Combatant {
    /// A full-HP combatant with its species' typing and first ability, knowing no moves.
    pub fn new(species: Species, level: u8, max_hp: u16, stats: Stats) -> Self {
        Self {
            species,
            level,
            hp: max_hp,
            max_hp,
            stats,
            types: species.types(),
            ability: species.ability(0),
            held_item: None,
            status: StatusFlags::empty(),
            volatiles: Volatiles::empty(),
            perish_count: 0,
            stat_stages: StatStages::default(),
            moves: [None; MAX_MOVES],
            party_index: 0,
            last_used_move: None,
            last_landed_move: None,
            last_hit_by: None,
            is_first_turn: false,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    pub fn has_type(&self, pokemon_type: PokemonType) -> bool {
        self.types.contains(&pokemon_type)
    }

    /// Every move the combatant knows, regardless of PP.
    pub fn known_moves(&self) -> impl Iterator<Item = Move> + '_ {
        self.moves.iter().flatten().map(|slot| slot.move_)
    }

    pub fn usable_moves(&self) -> impl Iterator<Item = Move> + '_ {
        self.moves
            .iter()
            .flatten()
            .filter(|slot| slot.is_usable())
            .map(|slot| slot.move_)
    }

    pub fn has_priority_move(&self) -> bool {
        self.known_moves().any(|m| m.data().priority > 0)
    }
}

/// A roster entry, on the field or waiting on the bench.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartyMon {
    pub species: Species,
    #[serde(default)]
    pub is_egg: bool,
    pub level: u8,
    pub hp: u16,
    pub max_hp: u16,
    #[serde(default)]
    pub ability_slot: u8,
    pub moves: [Option<MoveSlot>; MAX_MOVES],
    /// Boosts the next switch-in inherits. Neutral unless something like Baton Pass passed them on.
    #[serde(default)]
    pub stat_stages: StatStages,
}

impl PartyMon {
    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Alive and not an egg.
    pub fn can_battle(&self) -> bool {
        !self.is_egg && self.is_alive()
    }

    pub fn types(&self) -> [PokemonType; 2] {
        self.species.types()
    }

    pub fn has_type(&self, pokemon_type: PokemonType) -> bool {
        self.types().contains(&pokemon_type)
    }

    pub fn ability(&self) -> Ability {
        self.species.ability(self.ability_slot)
    }

    pub fn known_moves(&self) -> impl Iterator<Item = Move> + '_ {
        self.moves.iter().flatten().map(|slot| slot.move_)
    }

    pub fn knows(&self, move_: Move) -> bool {
        self.known_moves().any(|m| m == move_)
    }
}

pub type Party = [Option<PartyMon>; PARTY_SIZE];

/// Entry hazards and timed protections for one side of the field.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SideState {
    #[serde(default)]
    spikes: u8,
    #[serde(default)]
    pub stealth_rock: bool,
    #[serde(default)]
    pub conditions: HashMap<TeamCondition, u8>,
}

impl SideState {
    pub fn spikes(&self) -> u8 {
        self.spikes.min(MAX_SPIKES_LAYERS)
    }

    pub fn set_spikes(&mut self, layers: u8) {
        self.spikes = layers.min(MAX_SPIKES_LAYERS);
    }

    pub fn has_hazards(&self) -> bool {
        self.spikes() > 0 || self.stealth_rock
    }

    pub fn has_condition(&self, condition: TeamCondition) -> bool {
        self.conditions.get(&condition).is_some_and(|turns| *turns > 0)
    }
}

pub const MAX_TRAINER_ITEMS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventorySlot {
    pub item: Item,
    #[serde(default)]
    pub used: bool,
}

/// The consumables a trainer brought into battle.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Inventory {
    slots: Vec<InventorySlot>,
}

impl Inventory {
    /// Items beyond the fourth are dropped.
    pub fn new(items: impl IntoIterator<Item = Item>) -> Self {
        let slots = items
            .into_iter()
            .take(MAX_TRAINER_ITEMS)
            .map(|item| InventorySlot { item, used: false })
            .collect();
        Self { slots }
    }

    pub fn slots(&self) -> &[InventorySlot] {
        let len = self.slots.len().min(MAX_TRAINER_ITEMS);
        &self.slots[..len]
    }

    pub fn mark_used(&mut self, slot: usize) -> BattleStateResult<()> {
        match self.slots.get_mut(slot) {
            Some(entry) => {
                entry.used = true;
                Ok(())
            }
            None => Err(BattleStateError::InvalidInventorySlot(slot)),
        }
    }

    pub fn remaining(&self) -> impl Iterator<Item = Item> + '_ {
        self.slots().iter().filter(|slot| !slot.used).map(|slot| slot.item)
    }
}

/// Read-only picture of the battle the AI decides from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattleSnapshot {
    pub flags: BattleFlags,
    /// Indexed by `BattlerId::index`. `None` marks an absent position.
    pub battlers: [Option<Combatant>; 4],
    /// Indexed by side.
    pub parties: [Party; 2],
    #[serde(default)]
    pub sides: [SideState; 2],
}

impl BattleSnapshot {
    pub fn new(flags: BattleFlags) -> Self {
        Self {
            flags,
            battlers: [None, None, None, None],
            parties: [Default::default(), Default::default()],
            sides: [SideState::default(), SideState::default()],
        }
    }

    pub fn is_double(&self) -> bool {
        self.flags.contains(BattleFlags::DOUBLE)
    }

    pub fn battler(&self, id: BattlerId) -> Option<&Combatant> {
        self.battlers[id.index()].as_ref()
    }

    pub fn is_present(&self, id: BattlerId) -> bool {
        self.battler(id).is_some()
    }

    pub fn active(&self, id: BattlerId) -> BattleStateResult<&Combatant> {
        self.battler(id)
            .ok_or(BattleStateError::NoActiveCombatant(id))
    }

    /// Every combatant on the field with its position.
    pub fn present_battlers(&self) -> impl Iterator<Item = (BattlerId, &Combatant)> {
        BattlerId::ALL
            .into_iter()
            .filter_map(move |id| self.battler(id).map(|c| (id, c)))
    }

    /// Present combatants on the other side of the field from `id`.
    pub fn opponents_of(&self, id: BattlerId) -> impl Iterator<Item = (BattlerId, &Combatant)> {
        self.present_battlers()
            .filter(move |(other, _)| other.is_opposing(id))
    }

    /// The partner of `id` when it is actually on the field in a double battle.
    pub fn present_partner(&self, id: BattlerId) -> Option<BattlerId> {
        let partner = id.partner();
        (self.is_double() && self.is_present(partner)).then_some(partner)
    }

    /// The battler across the field, or its partner when that position is empty.
    pub fn primary_opponent(&self, id: BattlerId) -> Option<BattlerId> {
        let opposite = id.opposite();
        if self.is_present(opposite) {
            Some(opposite)
        } else {
            Some(opposite.partner()).filter(|partner| self.is_present(*partner))
        }
    }

    pub fn party(&self, id: BattlerId) -> &Party {
        &self.parties[id.side()]
    }

    pub fn party_mon(&self, id: BattlerId, index: usize) -> BattleStateResult<&PartyMon> {
        self.party(id)
            .get(index)
            .and_then(|slot| slot.as_ref())
            .ok_or(BattleStateError::InvalidPartyIndex(index))
    }

    pub fn side_state(&self, id: BattlerId) -> &SideState {
        &self.sides[id.side()]
    }

    /// Party slots the battler may draw from. In multi battles each trainer
    /// owns half the party, split by flank.
    pub fn party_range(&self, id: BattlerId) -> Range<usize> {
        if self
            .flags
            .intersects(BattleFlags::TWO_OPPONENTS | BattleFlags::TOWER_LINK_MULTI)
        {
            if id.is_right_flank() {
                PARTY_SIZE / 2..PARTY_SIZE
            } else {
                0..PARTY_SIZE / 2
            }
        } else {
            0..PARTY_SIZE
        }
    }

    /// Party indexes currently on the field for the battler's side of the field:
    /// its own slot and, in doubles, its present partner's slot.
    pub fn on_field_indexes(&self, id: BattlerId) -> Vec<usize> {
        let mut indexes = Vec::with_capacity(2);
        if let Some(active) = self.battler(id) {
            indexes.push(active.party_index);
        }
        if let Some(partner) = self.present_partner(id).and_then(|p| self.battler(p)) {
            indexes.push(partner.party_index);
        }
        indexes
    }

    /// True when any present combatant other than `id` has `ability`.
    pub fn ability_on_field_except(&self, id: BattlerId, ability: Ability) -> bool {
        self.present_battlers()
            .any(|(other, c)| other != id && c.ability == ability)
    }

    pub fn ability_on_opposing_field(&self, id: BattlerId, ability: Ability) -> bool {
        self.opponents_of(id).any(|(_, c)| c.ability == ability)
    }
}
