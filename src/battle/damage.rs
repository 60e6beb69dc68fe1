use crate::ai::effectiveness::{move_result, type_matchup, MoveResult};
use crate::battle::state::Combatant;
use crate::battle::stats::{effective_attack, effective_defense};
use schema::{Move, TYPE_MUL_NORMAL};

/// Estimates the damage one hit of a move would deal.
pub trait DamageCalculator {
    fn calc_damage(&self, attacker: &Combatant, defender: &Combatant, move_: Move) -> u32;
}

/// Deterministic third-generation damage estimate: no random roll, no crits.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardDamageCalculator;

/// `floor((floor(2 * level / 5 + 2) * power * attack / defense) / 50) + 2`
pub fn base_damage(level: u32, power: u32, attack: u32, defense: u32) -> u32 {
    if defense == 0 {
        return 0;
    }
    let level_factor = 2 * level / 5 + 2;
    level_factor * power * attack / defense / 50 + 2
}

impl DamageCalculator for StandardDamageCalculator {
    fn calc_damage(&self, attacker: &Combatant, defender: &Combatant, move_: Move) -> u32 {
        let data = move_.data();
        if !data.is_damaging() {
            return 0;
        }

        let outcome = move_result(move_, defender.types, defender.ability);
        if outcome.intersects(MoveResult::MISSED | MoveResult::DOESNT_AFFECT_FOE) {
            return 0;
        }
        if defender.ability.neutralized_type() == Some(data.move_type) {
            return 0;
        }

        let attack = effective_attack(attacker, data.category) as u32;
        let defense = effective_defense(defender, data.category) as u32;
        let mut damage = base_damage(attacker.level as u32, data.power as u32, attack, defense);

        if attacker.has_type(data.move_type) {
            damage = damage * 3 / 2;
        }

        let matchup = type_matchup(data.move_type, defender.types);
        damage * matchup.value as u32 / TYPE_MUL_NORMAL as u32
    }
}
