//! Decides whether the active combatant should leave the field this turn.
//!
//! The evaluation runs in three stages:
//! 1. Entry gates. Any gate that holds means the combatant cannot or must not switch.
//! 2. Safe candidates. If every bench member would take a super-effective hit from
//!    the predicted opposing move, there is nowhere worth going.
//! 3. Triggers, in priority order. The first trigger with an opinion decides.

use crate::ai::effectiveness::{is_move_effective_against_ability, move_result, MoveResult};
use crate::ai::party::{
    is_trapped_by_abilities, party_mon_hazard_damage, switch_candidates, Candidate,
};
use crate::ai::prediction::{is_predicted_move_super_effective_against, predict_opponent_move};
use crate::battle::conditions::Volatiles;
use crate::battle::context::BattleContext;
use crate::battle::state::{BattleFlags, BattleSnapshot, BattlerId, Combatant};
use crate::errors::AiResult;
use schema::{Ability, BattleStat, Move, PokemonType};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Where a switch should go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SwitchTarget {
    /// Let the replacement scorer pick.
    BestAvailable,
    Specific(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SwitchVerdict {
    Stay,
    Switch(SwitchTarget),
}

/// What a single trigger concluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerOutcome {
    /// No opinion, ask the next trigger.
    Pass,
    /// Stay in and stop evaluating.
    Refuse,
    Switch(SwitchTarget),
}

pub type Gate = fn(&BattleSnapshot, BattlerId, &Combatant) -> bool;
pub type Trigger = fn(&mut BattleContext<'_>, &SwitchAssessment<'_>) -> TriggerOutcome;

/// Any of these holding keeps the combatant in.
pub const ENTRY_GATES: &[(&str, Gate)] = &[
    ("bound in place", is_bound_in_place),
    ("trapped by opposing ability", is_trapped_by_opposing_ability),
    ("held by magnet pull", is_held_by_magnet_pull),
    ("arena battle", is_arena_battle),
];

/// Evaluated in order; the first trigger that does not pass wins.
pub const SWITCH_TRIGGERS: &[(&str, Trigger)] = &[
    ("low hp", switch_if_low_hp),
    ("lethal hazards", refuse_if_hazard_lethal),
    ("perish song", switch_if_perish_song),
    ("wonder guard", switch_if_wonder_guard),
    ("absorbing ability", switch_to_absorber),
    ("natural cure", switch_if_natural_cure),
    ("super effective move", refuse_if_super_effective_move),
    ("raised stats", refuse_if_stats_raised),
    ("better matchup", switch_to_better_matchup),
    ("rapid spin", switch_to_rapid_spin_user),
];

pub fn is_bound_in_place(_: &BattleSnapshot, _: BattlerId, active: &Combatant) -> bool {
    active.volatiles.holds_in_place()
}

pub fn is_trapped_by_opposing_ability(
    snapshot: &BattleSnapshot,
    battler: BattlerId,
    active: &Combatant,
) -> bool {
    if snapshot.ability_on_opposing_field(battler, Ability::ShadowTag) {
        return true;
    }
    snapshot.ability_on_opposing_field(battler, Ability::ArenaTrap)
        && !active.has_type(PokemonType::Flying)
        && active.ability != Ability::Levitate
}

pub fn is_held_by_magnet_pull(
    snapshot: &BattleSnapshot,
    battler: BattlerId,
    active: &Combatant,
) -> bool {
    active.has_type(PokemonType::Steel)
        && snapshot.ability_on_field_except(battler, Ability::MagnetPull)
}

pub fn is_arena_battle(snapshot: &BattleSnapshot, _: BattlerId, _: &Combatant) -> bool {
    snapshot.flags.contains(BattleFlags::ARENA)
}

/// Everything the triggers share, computed once per evaluation.
#[derive(Debug, Clone)]
pub struct SwitchAssessment<'s> {
    pub battler: BattlerId,
    pub active: &'s Combatant,
    pub opponent: Option<(BattlerId, &'s Combatant)>,
    pub predicted_move: Option<Move>,
    /// Every bench member the battler could legally switch into.
    pub candidates: Vec<Candidate<'s>>,
    /// Candidates the predicted move would not hit super effectively.
    pub safe_candidates: Vec<Candidate<'s>>,
}

impl<'s> SwitchAssessment<'s> {
    pub fn new(ctx: &BattleContext<'s>, battler: BattlerId) -> AiResult<Self> {
        let snapshot: &'s BattleSnapshot = ctx.snapshot;
        let active = snapshot.active(battler)?;

        let opponent = snapshot
            .primary_opponent(battler)
            .and_then(|id| snapshot.battler(id).map(|c| (id, c)));
        let predicted_move = opponent.and_then(|(_, opp)| predict_opponent_move(opp, active));

        let candidates = switch_candidates(ctx, battler);
        let safe_candidates = candidates
            .iter()
            .copied()
            .filter(|(_, mon)| !is_predicted_move_super_effective_against(predicted_move, mon))
            .collect();

        Ok(Self {
            battler,
            active,
            opponent,
            predicted_move,
            candidates,
            safe_candidates,
        })
    }
}

/// Run the gates, the safe-candidate count and the triggers for `battler`.
pub fn evaluate_switch(ctx: &mut BattleContext<'_>, battler: BattlerId) -> AiResult<SwitchVerdict> {
    let snapshot = ctx.snapshot;
    let active = snapshot.active(battler)?;

    for (name, gate) in ENTRY_GATES {
        if gate(snapshot, battler, active) {
            debug!(%battler, gate = name, "switch blocked by gate");
            return Ok(SwitchVerdict::Stay);
        }
    }

    let assessment = SwitchAssessment::new(ctx, battler)?;
    if assessment.safe_candidates.is_empty() {
        debug!(
            %battler,
            predicted = ?assessment.predicted_move,
            "no safe switch candidates"
        );
        return Ok(SwitchVerdict::Stay);
    }

    for (name, trigger) in SWITCH_TRIGGERS {
        match trigger(ctx, &assessment) {
            TriggerOutcome::Pass => continue,
            TriggerOutcome::Refuse => {
                debug!(%battler, trigger = name, "switch refused");
                return Ok(SwitchVerdict::Stay);
            }
            TriggerOutcome::Switch(target) => {
                debug!(%battler, trigger = name, ?target, "switch approved");
                return Ok(SwitchVerdict::Switch(target));
            }
        }
    }

    Ok(SwitchVerdict::Stay)
}

/// Whether entry hazards on the acting side would knock out whoever comes in.
///
/// The replacement is not known yet, so the active combatant's own HP numbers stand
/// in for it, with no airborne or typing discount. A switch is also lethal when every
/// safe candidate would faint on entry.
pub fn is_hazard_lethal(snapshot: &BattleSnapshot, assessment: &SwitchAssessment<'_>) -> bool {
    let side = snapshot.side_state(assessment.battler);
    if !side.has_hazards() {
        return false;
    }

    let active = assessment.active;
    let max_hp = active.max_hp as u32;
    let mut estimate = side.spikes() as u32 * max_hp / 8;
    if side.stealth_rock {
        estimate += max_hp / 8;
    }
    if estimate >= active.hp as u32 {
        return true;
    }

    !assessment.safe_candidates.is_empty()
        && assessment
            .safe_candidates
            .iter()
            .all(|(_, mon)| party_mon_hazard_damage(side, mon) >= mon.hp)
}

pub fn switch_if_low_hp(ctx: &mut BattleContext<'_>, a: &SwitchAssessment<'_>) -> TriggerOutcome {
    if a.active.hp < a.active.max_hp / 4 && !is_hazard_lethal(ctx.snapshot, a) {
        TriggerOutcome::Switch(SwitchTarget::BestAvailable)
    } else {
        TriggerOutcome::Pass
    }
}

pub fn refuse_if_hazard_lethal(
    ctx: &mut BattleContext<'_>,
    a: &SwitchAssessment<'_>,
) -> TriggerOutcome {
    if is_hazard_lethal(ctx.snapshot, a) {
        TriggerOutcome::Refuse
    } else {
        TriggerOutcome::Pass
    }
}

pub fn switch_if_perish_song(
    ctx: &mut BattleContext<'_>,
    a: &SwitchAssessment<'_>,
) -> TriggerOutcome {
    let active = a.active;
    if !active.volatiles.contains(Volatiles::PERISH_SONG) || active.perish_count > 1 {
        return TriggerOutcome::Pass;
    }
    if active.last_used_move.is_some_and(Move::is_semi_invulnerable) {
        return TriggerOutcome::Pass;
    }
    if active.volatiles.contains(Volatiles::PROTECTED) {
        return TriggerOutcome::Pass;
    }
    if active.volatiles.contains(Volatiles::ESCAPE_PREVENTION)
        || is_trapped_by_abilities(ctx.snapshot, a.battler, active.types, active.ability)
    {
        return TriggerOutcome::Pass;
    }
    if a.candidates.is_empty() {
        return TriggerOutcome::Pass;
    }
    TriggerOutcome::Switch(SwitchTarget::BestAvailable)
}

fn bypasses_wonder_guard(move_: Move, guard: &Combatant) -> bool {
    move_result(move_, guard.types, guard.ability).contains(MoveResult::SUPER_EFFECTIVE)
        || move_.is_indirect_damage()
        || move_.hits_wonder_guard()
}

pub fn switch_if_wonder_guard(
    ctx: &mut BattleContext<'_>,
    a: &SwitchAssessment<'_>,
) -> TriggerOutcome {
    let snapshot = ctx.snapshot;
    let Some((_, guard)) = snapshot
        .opponents_of(a.battler)
        .find(|(_, c)| c.ability == Ability::WonderGuard)
    else {
        return TriggerOutcome::Pass;
    };

    if a.active.known_moves().any(|m| bypasses_wonder_guard(m, guard)) {
        return TriggerOutcome::Pass;
    }

    for (index, mon) in &a.candidates {
        for move_ in mon.known_moves() {
            if bypasses_wonder_guard(move_, guard) && ctx.roll("wonder guard switch") % 3 < 2 {
                return TriggerOutcome::Switch(SwitchTarget::Specific(*index));
            }
        }
    }
    TriggerOutcome::Pass
}

pub fn switch_to_absorber(ctx: &mut BattleContext<'_>, a: &SwitchAssessment<'_>) -> TriggerOutcome {
    if has_super_effective_move_against_opponents(ctx, a, true)
        && ctx.roll("absorb switch skip") % 3 != 0
    {
        return TriggerOutcome::Pass;
    }

    let Some(last_landed) = a.active.last_landed_move else {
        return TriggerOutcome::Pass;
    };
    let data = last_landed.data();
    if !data.is_damaging() {
        return TriggerOutcome::Pass;
    }
    let Some(absorber) = Ability::absorber_of(data.move_type) else {
        return TriggerOutcome::Pass;
    };
    if a.active.ability == absorber {
        return TriggerOutcome::Pass;
    }

    for (index, mon) in &a.candidates {
        if mon.ability() == absorber
            && mon.hp > mon.max_hp / 2
            && ctx.roll("absorb switch") % 2 == 0
        {
            return TriggerOutcome::Switch(SwitchTarget::Specific(*index));
        }
    }
    TriggerOutcome::Pass
}

pub fn switch_if_natural_cure(
    _: &mut BattleContext<'_>,
    a: &SwitchAssessment<'_>,
) -> TriggerOutcome {
    if a.active.ability == Ability::NaturalCure && !a.active.status.is_empty() {
        TriggerOutcome::Switch(SwitchTarget::BestAvailable)
    } else {
        TriggerOutcome::Pass
    }
}

/// Whether the active combatant has a super-effective move the target's ability
/// or item will not blunt. Without `no_rng`, each hit is confirmed nine times in ten.
pub fn has_super_effective_move_against_opponents(
    ctx: &mut BattleContext<'_>,
    a: &SwitchAssessment<'_>,
    no_rng: bool,
) -> bool {
    let snapshot = ctx.snapshot;
    let opposite = a.battler.opposite();
    let mut targets = vec![opposite];
    if snapshot.is_double() {
        targets.push(opposite.partner());
    }

    for target in targets {
        let Some(defender) = snapshot.battler(target) else {
            continue;
        };
        for move_ in a.active.known_moves() {
            let outcome = move_result(move_, defender.types, defender.ability);
            if !outcome.contains(MoveResult::SUPER_EFFECTIVE) {
                continue;
            }
            if !is_move_effective_against_ability(move_, defender, &mut *ctx.rng) {
                continue;
            }
            if no_rng || ctx.roll("super effective confirmation") % 10 != 0 {
                return true;
            }
        }
    }
    false
}

pub fn refuse_if_super_effective_move(
    ctx: &mut BattleContext<'_>,
    a: &SwitchAssessment<'_>,
) -> TriggerOutcome {
    if has_super_effective_move_against_opponents(ctx, a, false) {
        TriggerOutcome::Refuse
    } else {
        TriggerOutcome::Pass
    }
}

/// Raised stages weighted by how much they matter to the combatant's role.
pub fn weighted_stat_boosts(active: &Combatant) -> (u32, u32) {
    let is_attacker = active.stats.attack > active.stats.defense;
    let is_special_attacker = active.stats.sp_attack > active.stats.sp_defense;

    let total = active
        .stat_stages
        .raised()
        .map(|(stat, increase)| {
            let increase = increase as u32;
            match stat {
                BattleStat::Atk if is_attacker => increase * 2,
                BattleStat::SpAtk if is_special_attacker => increase * 2,
                BattleStat::Def | BattleStat::SpDef if !is_attacker && !is_special_attacker => {
                    increase * 2
                }
                _ => increase,
            }
        })
        .sum();

    let threshold = if is_attacker || is_special_attacker { 4 } else { 3 };
    (total, threshold)
}

pub fn refuse_if_stats_raised(
    _: &mut BattleContext<'_>,
    a: &SwitchAssessment<'_>,
) -> TriggerOutcome {
    let (total, threshold) = weighted_stat_boosts(a.active);
    if total >= threshold {
        TriggerOutcome::Refuse
    } else {
        TriggerOutcome::Pass
    }
}

/// Look for a bench member the last landed move would hit with `flags`, that
/// can hit back super effectively. Each such counter passes on `roll % modulo == 0`.
pub fn find_mon_with_flags_and_super_effective(
    ctx: &mut BattleContext<'_>,
    a: &SwitchAssessment<'_>,
    flags: MoveResult,
    modulo: u16,
) -> Option<usize> {
    let last_landed = a.active.last_landed_move?;
    if !last_landed.data().is_damaging() {
        return None;
    }
    let hitter = ctx.snapshot.battler(a.active.last_hit_by?)?;

    for (index, mon) in &a.candidates {
        let incoming = move_result(last_landed, mon.types(), mon.ability());
        if !incoming.intersects(flags) {
            continue;
        }
        for move_ in mon.known_moves() {
            let outgoing = move_result(move_, hitter.types, hitter.ability);
            if outgoing.contains(MoveResult::SUPER_EFFECTIVE)
                && ctx.roll("matchup switch") % modulo == 0
            {
                return Some(*index);
            }
        }
    }
    None
}

pub fn switch_to_better_matchup(
    ctx: &mut BattleContext<'_>,
    a: &SwitchAssessment<'_>,
) -> TriggerOutcome {
    let found = find_mon_with_flags_and_super_effective(ctx, a, MoveResult::DOESNT_AFFECT_FOE, 2)
        .or_else(|| {
            find_mon_with_flags_and_super_effective(ctx, a, MoveResult::NOT_VERY_EFFECTIVE, 3)
        });
    match found {
        Some(index) => TriggerOutcome::Switch(SwitchTarget::Specific(index)),
        None => TriggerOutcome::Pass,
    }
}

pub fn switch_to_rapid_spin_user(
    ctx: &mut BattleContext<'_>,
    a: &SwitchAssessment<'_>,
) -> TriggerOutcome {
    let snapshot = ctx.snapshot;
    if !snapshot.side_state(a.battler).has_hazards() {
        return TriggerOutcome::Pass;
    }

    a.candidates
        .iter()
        .find(|(_, mon)| {
            mon.known_moves().any(Move::clears_hazards)
                && !is_trapped_by_abilities(snapshot, a.battler, mon.types(), mon.ability())
        })
        .map_or(TriggerOutcome::Pass, |(index, _)| {
            TriggerOutcome::Switch(SwitchTarget::Specific(*index))
        })
}
