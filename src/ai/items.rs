//! Decides whether a trainer item is worth a turn, and which one.

use crate::ai::prediction::estimate_incoming_damage;
use crate::battle::conditions::{StatusFlags, Volatiles};
use crate::battle::context::BattleContext;
use crate::battle::state::{BattleFlags, BattlerId, Combatant, InventorySlot};
use crate::errors::AiResult;
use schema::{HealAmount, Item, ItemEffects, TeamCondition};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The one category an item is evaluated as, in precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemAction {
    FullRestore { amount: HealAmount },
    HealHp { amount: HealAmount },
    Revive,
    /// The cure bits the item carries.
    CureStatus(ItemEffects),
    /// The boost bits the item carries.
    BoostStat(ItemEffects),
    GuardSpec,
    Unrecognized,
}

pub fn classify_item(item: Item) -> ItemAction {
    let data = item.data();
    let effects = data.effects;

    if effects.contains(ItemEffects::FULL_RESTORE) {
        ItemAction::FullRestore { amount: data.heal }
    } else if effects.contains(ItemEffects::HEAL_HP) {
        if effects.contains(ItemEffects::REVIVE) {
            ItemAction::Revive
        } else {
            ItemAction::HealHp { amount: data.heal }
        }
    } else if effects.intersects(ItemEffects::CURE_ALL) {
        ItemAction::CureStatus(effects & ItemEffects::CURE_ALL)
    } else if effects.intersects(ItemEffects::STAT_BOOSTS) {
        ItemAction::BoostStat(effects & ItemEffects::STAT_BOOSTS)
    } else if effects.contains(ItemEffects::GUARD_SPEC) {
        ItemAction::GuardSpec
    } else {
        ItemAction::Unrecognized
    }
}

/// Boosts the AI knows how to value. X Evasion items are not among them.
pub const RECOGNIZED_BOOSTS: ItemEffects = ItemEffects::X_ATTACK
    .union(ItemEffects::X_DEFEND)
    .union(ItemEffects::X_SPEED)
    .union(ItemEffects::X_SPATK)
    .union(ItemEffects::X_SPDEF)
    .union(ItemEffects::X_ACCURACY)
    .union(ItemEffects::DIRE_HIT);

/// Conditions a cure item will fix on the active combatant, and how urgent that is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurePlan {
    pub conditions: ItemEffects,
    pub priority: u32,
}

/// What the chosen item is expected to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemPlan {
    Heal { amount: u16 },
    Cure(CurePlan),
    Boost(ItemEffects),
    GuardSpec,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChosenItem {
    pub item: Item,
    pub slot: usize,
    pub plan: ItemPlan,
}

/// HP the item would actually restore, capped at what is missing.
pub fn heal_amount(amount: HealAmount, hp: u16, max_hp: u16) -> u16 {
    amount.for_max_hp(max_hp).min(max_hp.saturating_sub(hp))
}

/// Whether healing now buys anything against the opponent's best hit.
///
/// `incoming` is the opponent's strongest estimated hit on the active combatant.
pub fn should_heal(active: &Combatant, incoming: u32, opponent_has_priority: bool, heal: u16) -> bool {
    let hp = active.hp as u32;
    let max_hp = active.max_hp as u32;
    let healed = hp + heal as u32;
    let critical = incoming.saturating_mul(3) / 2;

    if incoming >= healed || critical >= max_hp {
        return false;
    }
    if opponent_has_priority && incoming / 2 >= healed {
        return false;
    }
    if hp > max_hp / 2 && incoming < hp {
        return false;
    }
    true
}

/// Match the item's cures against the combatant's conditions.
///
/// Paralysis and burn weigh double for physical attackers, confusion for special
/// attackers. Returns `None` when the item fixes nothing.
pub fn plan_cure(active: &Combatant, cures: ItemEffects) -> Option<CurePlan> {
    let is_physical = active.stats.attack > active.stats.sp_attack;
    let is_special = active.stats.sp_attack > active.stats.attack;
    let status = active.status;

    let checks = [
        (ItemEffects::CURE_SLEEP, status.contains(StatusFlags::SLEEP), 1),
        (
            ItemEffects::CURE_PARALYSIS,
            status.contains(StatusFlags::PARALYSIS),
            if is_physical { 2 } else { 1 },
        ),
        (
            ItemEffects::CURE_CONFUSION,
            active.volatiles.contains(Volatiles::CONFUSION),
            if is_special { 2 } else { 1 },
        ),
        (
            ItemEffects::CURE_BURN,
            status.contains(StatusFlags::BURN),
            if is_physical { 2 } else { 1 },
        ),
        (ItemEffects::CURE_POISON, status.is_poisoned(), 1),
        (ItemEffects::CURE_FREEZE, status.contains(StatusFlags::FREEZE), 1),
    ];

    let mut plan = CurePlan {
        conditions: ItemEffects::empty(),
        priority: 0,
    };
    for (cure, afflicted, weight) in checks {
        if cures.contains(cure) && afflicted {
            plan.conditions |= cure;
            plan.priority += weight;
        }
    }

    (!plan.conditions.is_empty()).then_some(plan)
}

/// Scan the side's unused items in order and commit to the first worth using.
pub fn evaluate_items(ctx: &mut BattleContext<'_>, battler: BattlerId) -> AiResult<Option<ChosenItem>> {
    let snapshot = ctx.snapshot;
    if snapshot.flags.contains(BattleFlags::INGAME_PARTNER) && battler == BattlerId::PLAYER_RIGHT {
        return Ok(None);
    }

    let active = snapshot.active(battler)?;
    let opponent = snapshot
        .primary_opponent(battler)
        .and_then(|id| snapshot.battler(id));
    let side = battler.side();
    let slots: Vec<InventorySlot> = ctx.decisions.inventories[side].slots().to_vec();

    for (slot, entry) in slots.iter().enumerate() {
        if entry.used {
            continue;
        }

        let plan = match classify_item(entry.item) {
            ItemAction::FullRestore { amount } | ItemAction::HealHp { amount } => {
                let heal = heal_amount(amount, active.hp, active.max_hp);
                let incoming = opponent
                    .map(|opp| estimate_incoming_damage(ctx.damage, opp, active))
                    .unwrap_or(0);
                let priority = opponent.is_some_and(Combatant::has_priority_move);
                should_heal(active, incoming, priority, heal).then_some(ItemPlan::Heal { amount: heal })
            }
            // Reviving is for the bench; the active combatant is still standing.
            ItemAction::Revive => None,
            ItemAction::CureStatus(cures) => plan_cure(active, cures).map(ItemPlan::Cure),
            ItemAction::BoostStat(boosts) => {
                let recognized = boosts & RECOGNIZED_BOOSTS;
                (active.is_first_turn && !recognized.is_empty())
                    .then_some(ItemPlan::Boost(recognized))
            }
            ItemAction::GuardSpec => (active.is_first_turn
                && !snapshot.side_state(battler).has_condition(TeamCondition::Mist))
            .then_some(ItemPlan::GuardSpec),
            ItemAction::Unrecognized => {
                debug!(%battler, item = %entry.item, "unrecognized item, stopping scan");
                return Ok(None);
            }
        };

        if let Some(plan) = plan {
            ctx.decisions.inventories[side].mark_used(slot)?;
            let chosen = ChosenItem {
                item: entry.item,
                slot,
                plan,
            };
            ctx.decisions.chosen_items[battler.index()] = Some(chosen);
            debug!(%battler, item = %entry.item, slot, ?plan, "item chosen");
            return Ok(Some(chosen));
        }
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(Item::FullRestore, ItemAction::FullRestore { amount: HealAmount::Full })]
    #[case(Item::HyperPotion, ItemAction::HealHp { amount: HealAmount::Fixed(200) })]
    #[case(Item::MaxRevive, ItemAction::Revive)]
    #[case(Item::Antidote, ItemAction::CureStatus(ItemEffects::CURE_POISON))]
    #[case(Item::FullHeal, ItemAction::CureStatus(ItemEffects::CURE_ALL))]
    #[case(Item::XSpecial, ItemAction::BoostStat(ItemEffects::X_SPATK))]
    #[case(Item::DireHit, ItemAction::BoostStat(ItemEffects::DIRE_HIT))]
    #[case(Item::GuardSpec, ItemAction::GuardSpec)]
    #[case(Item::Leftovers, ItemAction::Unrecognized)]
    fn test_classify_item(#[case] item: Item, #[case] expected: ItemAction) {
        assert_eq!(classify_item(item), expected);
    }

    #[test]
    fn test_full_restore_outranks_its_cure_bits() {
        assert!(item_cures_too(Item::FullRestore));
        assert!(matches!(
            classify_item(Item::FullRestore),
            ItemAction::FullRestore { .. }
        ));
    }

    fn item_cures_too(item: Item) -> bool {
        item.effects().intersects(ItemEffects::CURE_ALL)
    }

    #[test]
    fn test_heal_amount_is_capped_at_missing_hp() {
        assert_eq!(heal_amount(HealAmount::Fixed(200), 150, 200), 50);
        assert_eq!(heal_amount(HealAmount::Fixed(20), 100, 200), 20);
        assert_eq!(heal_amount(HealAmount::Full, 0, 200), 200);
    }

    #[test]
    fn test_huge_damage_estimates_refuse_the_heal() {
        let mut active = Combatant::new(
            schema::Species::Snorlax,
            50,
            100,
            crate::battle::state::Stats::default(),
        );
        active.hp = 10;

        assert!(!should_heal(&active, u32::MAX, false, 90));
        assert!(!should_heal(&active, u32::MAX / 2 + 1, true, 90));
        assert!(should_heal(&active, 20, false, 90));
    }
}
