use crate::ai::{Behavior, TrainerAi};
use crate::battle::conditions::{StatusFlags, Volatiles};
use crate::battle::context::{AiAction, BattleContext, DecisionState};
use crate::battle::damage::DamageCalculator;
use crate::battle::rng::ScriptedRandom;
use crate::battle::state::{
    BattleFlags, BattleSnapshot, BattlerId, Combatant, Inventory, MoveSlot, PartyMon, Stats,
    MAX_MOVES,
};
use crate::battle::stats::StatStages;
use crate::errors::AiResult;
use schema::{Ability, BattleStat, Item, Move, Species, TeamCondition};

const TEST_MAX_HP: u16 = 100;
const TEST_PP: u8 = 10;

fn move_slots(moves: &[Move]) -> [Option<MoveSlot>; MAX_MOVES] {
    let mut slots = [None; MAX_MOVES];
    for (slot, move_) in slots.iter_mut().zip(moves) {
        *slot = Some(MoveSlot::new(*move_, TEST_PP));
    }
    slots
}

/// A builder for on-field combatants with 100 max HP and flat 100 stats.
///
/// # Example
/// ```ignore
/// let active = TestCombatantBuilder::new(Species::Snorlax)
///     .with_moves(&[Move::BodySlam])
///     .with_hp(20)
///     .build();
/// ```
pub struct TestCombatantBuilder {
    combatant: Combatant,
}

impl TestCombatantBuilder {
    pub fn new(species: Species) -> Self {
        let stats = Stats {
            attack: 100,
            defense: 100,
            speed: 100,
            sp_attack: 100,
            sp_defense: 100,
        };
        Self {
            combatant: Combatant::new(species, 50, TEST_MAX_HP, stats),
        }
    }

    pub fn with_moves(mut self, moves: &[Move]) -> Self {
        self.combatant.moves = move_slots(moves);
        self
    }

    pub fn with_hp(mut self, hp: u16) -> Self {
        self.combatant.hp = hp;
        self
    }

    pub fn with_stats(mut self, stats: Stats) -> Self {
        self.combatant.stats = stats;
        self
    }

    pub fn with_ability(mut self, ability: Ability) -> Self {
        self.combatant.ability = ability;
        self
    }

    pub fn with_held_item(mut self, item: Item) -> Self {
        self.combatant.held_item = Some(item);
        self
    }

    pub fn with_status(mut self, status: StatusFlags) -> Self {
        self.combatant.status = status;
        self
    }

    pub fn with_volatiles(mut self, volatiles: Volatiles) -> Self {
        self.combatant.volatiles = volatiles;
        self
    }

    pub fn with_perish_count(mut self, count: u8) -> Self {
        self.combatant.perish_count = count;
        self
    }

    pub fn with_stage(mut self, stat: BattleStat, stage: i8) -> Self {
        self.combatant.stat_stages.set(stat, stage);
        self
    }

    pub fn with_party_index(mut self, index: usize) -> Self {
        self.combatant.party_index = index;
        self
    }

    pub fn with_last_used(mut self, move_: Move) -> Self {
        self.combatant.last_used_move = Some(move_);
        self
    }

    /// Records `move_` as the last hit the combatant took, thrown by `attacker`.
    pub fn hit_by(mut self, move_: Move, attacker: BattlerId) -> Self {
        self.combatant.last_landed_move = Some(move_);
        self.combatant.last_hit_by = Some(attacker);
        self
    }

    pub fn first_turn(mut self) -> Self {
        self.combatant.is_first_turn = true;
        self
    }

    pub fn build(self) -> Combatant {
        self.combatant
    }
}

/// A builder for bench members with 100 max HP.
pub struct TestPartyMonBuilder {
    mon: PartyMon,
}

impl TestPartyMonBuilder {
    pub fn new(species: Species) -> Self {
        Self {
            mon: PartyMon {
                species,
                is_egg: false,
                level: 50,
                hp: TEST_MAX_HP,
                max_hp: TEST_MAX_HP,
                ability_slot: 0,
                moves: [None; MAX_MOVES],
                stat_stages: StatStages::default(),
            },
        }
    }

    pub fn with_moves(mut self, moves: &[Move]) -> Self {
        self.mon.moves = move_slots(moves);
        self
    }

    pub fn with_hp(mut self, hp: u16) -> Self {
        self.mon.hp = hp;
        self
    }

    pub fn as_egg(mut self) -> Self {
        self.mon.is_egg = true;
        self
    }

    pub fn with_stage(mut self, stat: BattleStat, stage: i8) -> Self {
        self.mon.stat_stages.set(stat, stage);
        self
    }

    pub fn build(self) -> PartyMon {
        self.mon
    }
}

/// Roster entry mirroring an on-field combatant.
fn party_entry(active: &Combatant) -> PartyMon {
    PartyMon {
        species: active.species,
        is_egg: false,
        level: active.level,
        hp: active.hp,
        max_hp: active.max_hp,
        ability_slot: 0,
        moves: active.moves,
        stat_stages: active.stat_stages,
    }
}

/// Assembles a `BattleSnapshot` piece by piece.
pub struct TestBattleBuilder {
    snapshot: BattleSnapshot,
}

impl TestBattleBuilder {
    /// A single trainer battle.
    pub fn singles() -> Self {
        Self {
            snapshot: BattleSnapshot::new(BattleFlags::TRAINER),
        }
    }

    /// A double trainer battle.
    pub fn doubles() -> Self {
        Self {
            snapshot: BattleSnapshot::new(BattleFlags::TRAINER | BattleFlags::DOUBLE),
        }
    }

    pub fn with_flags(mut self, flags: BattleFlags) -> Self {
        self.snapshot.flags |= flags;
        self
    }

    pub fn without_flags(mut self, flags: BattleFlags) -> Self {
        self.snapshot.flags -= flags;
        self
    }

    /// Puts `combatant` on the field and its roster entry at its party index.
    pub fn with_battler(mut self, id: BattlerId, combatant: Combatant) -> Self {
        let party = &mut self.snapshot.parties[id.side()];
        if party[combatant.party_index].is_none() {
            party[combatant.party_index] = Some(party_entry(&combatant));
        }
        self.snapshot.battlers[id.index()] = Some(combatant);
        self
    }

    pub fn with_bench(mut self, side: usize, index: usize, mon: PartyMon) -> Self {
        self.snapshot.parties[side][index] = Some(mon);
        self
    }

    pub fn with_spikes(mut self, side: usize, layers: u8) -> Self {
        self.snapshot.sides[side].set_spikes(layers);
        self
    }

    pub fn with_stealth_rock(mut self, side: usize) -> Self {
        self.snapshot.sides[side].stealth_rock = true;
        self
    }

    pub fn with_team_condition(mut self, side: usize, condition: TeamCondition, turns: u8) -> Self {
        self.snapshot.sides[side].conditions.insert(condition, turns);
        self
    }

    pub fn build(self) -> BattleSnapshot {
        self.snapshot
    }
}

/// Every damaging estimate comes back as the same number.
#[derive(Debug, Clone, Copy)]
pub struct FixedDamage(pub u32);

impl DamageCalculator for FixedDamage {
    fn calc_damage(&self, _: &Combatant, _: &Combatant, move_: Move) -> u32 {
        if move_.data().is_damaging() {
            self.0
        } else {
            0
        }
    }
}

/// Decisions with the given items in the side's inventory.
pub fn decisions_with_items(side: usize, items: &[Item]) -> DecisionState {
    DecisionState::default().with_inventory(side, Inventory::new(items.iter().copied()))
}

/// Outcome of one scripted decision.
pub struct Decision {
    pub action: AiAction,
    /// Random draws the decision consumed.
    pub rolls_used: usize,
}

/// Runs `TrainerAi` for `battler` against a scripted random source.
pub fn decide(
    snapshot: &BattleSnapshot,
    decisions: &mut DecisionState,
    damage: &dyn DamageCalculator,
    battler: BattlerId,
    rolls: Vec<u16>,
) -> Decision {
    let mut rng = ScriptedRandom::new_for_test(rolls);
    let result = {
        let mut ctx = BattleContext::new(snapshot, decisions, &mut rng, damage);
        TrainerAi::new().decide_action(battler, &mut ctx)
    };
    Decision {
        action: assert_ok(result),
        rolls_used: rng.consumed(),
    }
}

/// The attack the battler falls back to.
pub fn attack_on(battler: BattlerId) -> AiAction {
    AiAction::UseMove {
        target: battler.opposite(),
    }
}

/// Helper function to assert that a Result is Ok and return the value.
pub fn assert_ok<T>(result: AiResult<T>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("Expected Ok but got error: {}", err),
    }
}
