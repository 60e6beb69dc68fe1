//! Roster eligibility, entry hazards and trapping abilities.

use crate::ai::effectiveness::type_matchup;
use crate::battle::context::BattleContext;
use crate::battle::state::{BattleSnapshot, BattlerId, PartyMon, SideState};
use schema::{Ability, PokemonType};

/// A bench member the battler could send in, with its party slot.
pub type Candidate<'a> = (usize, &'a PartyMon);

/// Party members in the battler's range that are alive, not eggs, not already
/// on the field and not claimed by a pending switch.
pub fn switch_candidates<'s>(ctx: &BattleContext<'s>, battler: BattlerId) -> Vec<Candidate<'s>> {
    let snapshot: &'s BattleSnapshot = ctx.snapshot;
    let on_field = snapshot.on_field_indexes(battler);
    let party = snapshot.party(battler);

    snapshot
        .party_range(battler)
        .filter_map(|index| party[index].as_ref().map(|mon| (index, mon)))
        .filter(|(index, mon)| {
            mon.can_battle() && !on_field.contains(index) && !ctx.is_committed(battler, *index)
        })
        .collect()
}

/// Entry damage a combatant with `max_hp`, `types` and `ability` takes when switched into `side`.
///
/// Spikes deal an eighth of max HP per layer and skip airborne combatants;
/// Stealth Rock deals an eighth scaled by Rock effectiveness.
pub fn hazard_damage(
    side: &SideState,
    max_hp: u16,
    types: [PokemonType; 2],
    ability: Ability,
) -> u16 {
    let max_hp = max_hp as u32;
    let mut damage = 0u32;

    let airborne = types.contains(&PokemonType::Flying) || ability == Ability::Levitate;
    if !airborne {
        damage += side.spikes() as u32 * max_hp / 8;
    }

    if side.stealth_rock {
        let matchup = type_matchup(PokemonType::Rock, types);
        damage += max_hp * matchup.value as u32 / 80;
    }

    damage.min(u16::MAX as u32) as u16
}

pub fn party_mon_hazard_damage(side: &SideState, mon: &PartyMon) -> u16 {
    hazard_damage(side, mon.max_hp, mon.types(), mon.ability())
}

/// More than a quarter of max HP lost on entry.
pub fn will_take_significant_hazard_damage(side: &SideState, mon: &PartyMon) -> bool {
    party_mon_hazard_damage(side, mon) > mon.max_hp / 4
}

/// Whether trapping abilities on the field pin a combatant of `types` and
/// `ability` fighting from the battler's position.
pub fn is_trapped_by_abilities(
    snapshot: &BattleSnapshot,
    battler: BattlerId,
    types: [PokemonType; 2],
    ability: Ability,
) -> bool {
    if snapshot.ability_on_opposing_field(battler, Ability::ShadowTag) {
        return true;
    }

    let airborne = types.contains(&PokemonType::Flying) || ability == Ability::Levitate;
    if snapshot.ability_on_opposing_field(battler, Ability::ArenaTrap) && !airborne {
        return true;
    }

    snapshot.ability_on_field_except(battler, Ability::MagnetPull)
        && types.contains(&PokemonType::Steel)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use PokemonType::*;

    fn side(spikes: u8, stealth_rock: bool) -> SideState {
        let mut side = SideState::default();
        side.set_spikes(spikes);
        side.stealth_rock = stealth_rock;
        side
    }

    #[test]
    fn test_spikes_scale_with_layers() {
        assert_eq!(hazard_damage(&side(1, false), 160, [Normal, Normal], Ability::None), 20);
        assert_eq!(hazard_damage(&side(3, false), 160, [Normal, Normal], Ability::None), 60);
    }

    #[test]
    fn test_airborne_combatants_ignore_spikes() {
        assert_eq!(hazard_damage(&side(3, false), 160, [Water, Flying], Ability::None), 0);
        assert_eq!(hazard_damage(&side(3, false), 160, [Ghost, Poison], Ability::Levitate), 0);
    }

    #[test]
    fn test_stealth_rock_scales_with_rock_effectiveness() {
        // Fire/Flying takes four times the base eighth
        assert_eq!(hazard_damage(&side(0, true), 160, [Fire, Flying], Ability::None), 80);
        // Steel resists
        assert_eq!(hazard_damage(&side(0, true), 160, [Steel, Steel], Ability::None), 10);
    }
}
