//! Picks the bench member to send in when a switch has no fixed target.

use crate::ai::effectiveness::{move_result, MoveResult};
use crate::ai::party::{switch_candidates, will_take_significant_hazard_damage};
use crate::battle::context::BattleContext;
use crate::battle::state::{BattleSnapshot, BattlerId, Combatant, PartyMon};
use crate::errors::AiResult;
use tracing::trace;

/// Starting score; any real candidate beats it.
pub const SCORE_SENTINEL: i32 = -10000;

/// How well the candidate's moves hit the opposing battler.
pub fn type_advantage_score(mon: &PartyMon, opponent: &Combatant) -> i32 {
    let mon_types = mon.types();
    let mut score = 0;

    for move_ in mon.known_moves() {
        let data = move_.data();
        let outcome = move_result(move_, opponent.types, opponent.ability);
        let super_effective = outcome.contains(MoveResult::SUPER_EFFECTIVE);
        let stab = mon_types.contains(&data.move_type);

        if super_effective {
            score += 15;
        } else if outcome.contains(MoveResult::NOT_VERY_EFFECTIVE) {
            score -= 10;
        }

        if stab {
            score += 5 + data.power as i32 / 20;
        }
        if super_effective && stab {
            score += 10 + data.power as i32 / 10;
        }

        if move_.is_indirect_damage() {
            score += 5;
        }
        if data.priority > 0 {
            score += 8;
        }
    }

    score
}

/// Bonus when the candidate's ability shrugs off one of the opponent's own types.
pub fn ability_advantage_score(mon: &PartyMon, opponent: &Combatant) -> i32 {
    match mon.ability().neutralized_type() {
        Some(neutralized) if opponent.has_type(neutralized) => 10,
        _ => 0,
    }
}

pub fn score_candidate(
    snapshot: &BattleSnapshot,
    battler: BattlerId,
    active: &Combatant,
    mon: &PartyMon,
    opponent: Option<&Combatant>,
) -> i32 {
    let mut score = 0;

    if let Some(opponent) = opponent {
        score += type_advantage_score(mon, opponent);
    }

    // Health bands are measured against the active combatant's max HP.
    if mon.hp > active.max_hp / 2 {
        score += 10;
    } else if mon.hp < active.max_hp / 4 {
        score -= 10;
    }

    if let Some(opponent) = opponent {
        score += ability_advantage_score(mon, opponent);
    }

    if will_take_significant_hazard_damage(snapshot.side_state(battler), mon) {
        score -= 15;
    }

    if mon.stat_stages.any_raised() {
        score += 20;
    }

    score
}

/// The battler the candidates are scored against. Doubles pick one of the two
/// opponents at random, falling back to whichever is present.
fn scoring_opponent(ctx: &mut BattleContext<'_>, battler: BattlerId) -> Option<BattlerId> {
    let snapshot = ctx.snapshot;
    if !snapshot.is_double() {
        return snapshot.primary_opponent(battler);
    }

    let opposite = battler.opposite();
    let pick = if ctx.roll("replacement opponent") % 2 == 0 {
        opposite
    } else {
        opposite.partner()
    };

    if snapshot.is_present(pick) {
        Some(pick)
    } else {
        Some(pick.partner()).filter(|other| snapshot.is_present(*other))
    }
}

/// Highest-scoring eligible bench member, first in roster order on ties.
pub fn best_replacement(ctx: &mut BattleContext<'_>, battler: BattlerId) -> AiResult<Option<usize>> {
    let snapshot = ctx.snapshot;
    let active = snapshot.active(battler)?;
    let opponent = scoring_opponent(ctx, battler).and_then(|id| snapshot.battler(id));

    let mut best_index = None;
    let mut best_score = SCORE_SENTINEL;

    for (index, mon) in switch_candidates(ctx, battler) {
        let score = score_candidate(snapshot, battler, active, mon, opponent);
        trace!(%battler, index, species = ?mon.species, score, "replacement score");
        if score > best_score {
            best_score = score;
            best_index = Some(index);
        }
    }

    Ok(best_index)
}

/// First eligible bench member in roster order.
pub fn first_available(ctx: &BattleContext<'_>, battler: BattlerId) -> Option<usize> {
    switch_candidates(ctx, battler)
        .first()
        .map(|(index, _)| *index)
}
