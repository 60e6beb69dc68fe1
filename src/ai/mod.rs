//! A module for defining AI behaviors for trainer-controlled battlers.

pub mod effectiveness;
pub mod items;
pub mod party;
pub mod prediction;
pub mod replacement;
pub mod switching;

#[cfg(test)]
mod tests;

use crate::battle::context::{ActionSink, AiAction, BattleContext};
use crate::battle::state::{BattleFlags, BattlerId};
use crate::errors::AiResult;
use replacement::{best_replacement, first_available};
use switching::{evaluate_switch, SwitchTarget, SwitchVerdict};
use tracing::{debug, warn};

/// A trait for any system that can decide on a battle action.
pub trait Behavior {
    /// Inspects the battle and decides the next action for the given battler.
    fn decide_action(&self, battler: BattlerId, ctx: &mut BattleContext<'_>) -> AiResult<AiAction>;
}

/// Switch if it is worth it, else use an item if one helps, else attack.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrainerAi;

impl TrainerAi {
    pub fn new() -> Self {
        Self
    }

    /// Decide and hand the action to `sink`.
    pub fn decide_and_emit(
        &self,
        battler: BattlerId,
        ctx: &mut BattleContext<'_>,
        sink: &mut dyn ActionSink,
    ) -> AiResult<AiAction> {
        let action = self.decide_action(battler, ctx)?;
        sink.emit(battler, action);
        Ok(action)
    }

    fn resolve_target(
        &self,
        battler: BattlerId,
        ctx: &mut BattleContext<'_>,
        target: SwitchTarget,
    ) -> AiResult<Option<usize>> {
        match target {
            SwitchTarget::Specific(index) => Ok(Some(index)),
            SwitchTarget::BestAvailable => {
                let best = best_replacement(ctx, battler)?;
                Ok(best.or_else(|| first_available(ctx, battler)))
            }
        }
    }
}

impl Behavior for TrainerAi {
    fn decide_action(&self, battler: BattlerId, ctx: &mut BattleContext<'_>) -> AiResult<AiAction> {
        let attack = AiAction::UseMove {
            target: battler.opposite(),
        };

        if !ctx.snapshot.flags.contains(BattleFlags::TRAINER) {
            return Ok(attack);
        }

        ctx.decisions.clear(battler);

        if let SwitchVerdict::Switch(target) = evaluate_switch(ctx, battler)? {
            match self.resolve_target(battler, ctx, target)? {
                Some(team_index) => {
                    let incoming = ctx.snapshot.party_mon(battler, team_index)?;
                    ctx.decisions.switch_targets[battler.index()] = Some(team_index);
                    debug!(%battler, team_index, species = %incoming.species, "decided to switch");
                    return Ok(AiAction::SwitchPokemon { team_index });
                }
                None => {
                    warn!(%battler, ?target, "switch approved but no party member can come in");
                    return Ok(attack);
                }
            }
        }

        if let Some(chosen) = items::evaluate_items(ctx, battler)? {
            return Ok(AiAction::UseItem {
                item: chosen.item,
                slot: chosen.slot,
            });
        }

        debug!(%battler, target = %battler.opposite(), "decided to attack");
        Ok(attack)
    }
}
