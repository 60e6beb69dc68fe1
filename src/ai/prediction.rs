//! One-ply guesses about what the opposing battler will do next.

use crate::ai::effectiveness::{move_result, type_matchup, MoveResult};
use crate::battle::damage::DamageCalculator;
use crate::battle::state::{Combatant, PartyMon};
use schema::Move;
use tracing::trace;

/// Score one of the opponent's moves as a hit on `defender`.
fn score_move(move_: Move, defender: &Combatant) -> i32 {
    let data = move_.data();
    let mut score = data.power as i32;

    let outcome = move_result(move_, defender.types, defender.ability);
    if outcome.contains(MoveResult::SUPER_EFFECTIVE) {
        score += 20;
    } else if outcome.contains(MoveResult::NOT_VERY_EFFECTIVE) {
        score -= 10;
    }

    if let Some(accuracy) = data.accuracy {
        if accuracy < 100 {
            score -= (100 - accuracy as i32) / 5;
        }
    }

    if data.priority > 0 {
        score += 10;
    }

    score
}

/// The move `opponent` is most likely to throw at `defender`.
///
/// Only moves with PP left are considered; the first best-scoring move wins ties.
pub fn predict_opponent_move(opponent: &Combatant, defender: &Combatant) -> Option<Move> {
    let mut best: Option<(Move, i32)> = None;
    for move_ in opponent.usable_moves() {
        let score = score_move(move_, defender);
        trace!(%move_, score, "predicted move score");
        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((move_, score));
        }
    }
    best.map(|(move_, _)| move_)
}

/// Whether the predicted move would hit a bench candidate super effectively.
/// No prediction means no threat. Only typing counts: a Levitate candidate
/// still reads as threatened by a Ground move.
pub fn is_predicted_move_super_effective_against(
    predicted: Option<Move>,
    candidate: &PartyMon,
) -> bool {
    let Some(move_) = predicted else {
        return false;
    };
    let data = move_.data();
    data.is_damaging() && type_matchup(data.move_type, candidate.types()).is_super_effective()
}

/// Highest damage any known move of `attacker` would do to `defender`.
pub fn estimate_incoming_damage(
    damage: &dyn DamageCalculator,
    attacker: &Combatant,
    defender: &Combatant,
) -> u32 {
    attacker
        .known_moves()
        .map(|move_| damage.calc_damage(attacker, defender, move_))
        .max()
        .unwrap_or(0)
}
