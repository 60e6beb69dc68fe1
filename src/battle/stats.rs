use crate::battle::state::Combatant;
use schema::{BattleStat, MoveCategory};
use serde::{Deserialize, Serialize};

pub const MIN_STAT_STAGE: i8 = -6;
pub const MAX_STAT_STAGE: i8 = 6;

/// Stage modifiers for the seven battle stats, neutral at 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct StatStages([i8; 7]);

impl StatStages {
    pub fn get(&self, stat: BattleStat) -> i8 {
        self.0[stat.index()].clamp(MIN_STAT_STAGE, MAX_STAT_STAGE)
    }

    pub fn set(&mut self, stat: BattleStat, stage: i8) {
        self.0[stat.index()] = stage.clamp(MIN_STAT_STAGE, MAX_STAT_STAGE);
    }

    /// Shift a stage by `delta`, saturating at the bounds.
    pub fn modify(&mut self, stat: BattleStat, delta: i8) {
        let current = self.get(stat);
        self.set(stat, current.saturating_add(delta));
    }

    pub fn with(mut self, stat: BattleStat, stage: i8) -> Self {
        self.set(stat, stage);
        self
    }

    /// Stages above neutral, stat by stat.
    pub fn raised(&self) -> impl Iterator<Item = (BattleStat, u8)> + '_ {
        BattleStat::ALL.into_iter().filter_map(|stat| {
            let stage = self.get(stat);
            (stage > 0).then_some((stat, stage as u8))
        })
    }

    pub fn any_raised(&self) -> bool {
        self.raised().next().is_some()
    }
}

/// Apply stat stage multipliers according to Pokemon formula
/// Stages range from -6 to +6
/// Negative stages: (2 / (2 + |stage|))
/// Positive stages: ((2 + stage) / 2)
pub fn apply_stat_stage_multiplier(base_stat: u16, stage: i8) -> u16 {
    let clamped_stage = stage.clamp(MIN_STAT_STAGE, MAX_STAT_STAGE);

    if clamped_stage == 0 {
        return base_stat;
    }

    let multiplier = if clamped_stage < 0 {
        2.0 / (2.0 + (-clamped_stage) as f64)
    } else {
        (2.0 + clamped_stage as f64) / 2.0
    };

    ((base_stat as f64) * multiplier).round() as u16
}

/// Attacking stat for a move category with stages applied. Status moves use none.
pub fn effective_attack(combatant: &Combatant, category: MoveCategory) -> u16 {
    match category {
        MoveCategory::Physical => apply_stat_stage_multiplier(
            combatant.stats.attack,
            combatant.stat_stages.get(BattleStat::Atk),
        ),
        MoveCategory::Special => apply_stat_stage_multiplier(
            combatant.stats.sp_attack,
            combatant.stat_stages.get(BattleStat::SpAtk),
        ),
        MoveCategory::Status => 0,
    }
}

/// Defending stat for a move category with stages applied. Status moves use none.
pub fn effective_defense(combatant: &Combatant, category: MoveCategory) -> u16 {
    match category {
        MoveCategory::Physical => apply_stat_stage_multiplier(
            combatant.stats.defense,
            combatant.stat_stages.get(BattleStat::Def),
        ),
        MoveCategory::Special => apply_stat_stage_multiplier(
            combatant.stats.sp_defense,
            combatant.stat_stages.get(BattleStat::SpDef),
        ),
        MoveCategory::Status => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_stat_stage_multipliers() {
        assert_eq!(apply_stat_stage_multiplier(100, 0), 100);
        assert_eq!(apply_stat_stage_multiplier(100, 1), 150);
        assert_eq!(apply_stat_stage_multiplier(100, 2), 200);
        assert_eq!(apply_stat_stage_multiplier(100, -1), 67);
        assert_eq!(apply_stat_stage_multiplier(100, -2), 50);
        assert_eq!(apply_stat_stage_multiplier(100, 6), 400);
        assert_eq!(apply_stat_stage_multiplier(100, -6), 25);
        // Out-of-range stages behave like the nearest bound
        assert_eq!(apply_stat_stage_multiplier(100, 9), 400);
    }

    #[test]
    fn test_stages_never_leave_bounds() {
        let mut stages = StatStages::default();
        stages.set(BattleStat::Atk, 10);
        assert_eq!(stages.get(BattleStat::Atk), 6);

        stages.modify(BattleStat::Atk, 3);
        assert_eq!(stages.get(BattleStat::Atk), 6);

        stages.modify(BattleStat::Def, -100);
        assert_eq!(stages.get(BattleStat::Def), -6);
    }

    #[test]
    fn test_raised_skips_neutral_and_lowered_stats() {
        let stages = StatStages::default()
            .with(BattleStat::Atk, 2)
            .with(BattleStat::Def, -1)
            .with(BattleStat::Spe, 1);

        let raised: Vec<_> = stages.raised().collect();
        assert_eq!(raised, vec![(BattleStat::Atk, 2), (BattleStat::Spe, 1)]);
        assert!(stages.any_raised());
        assert!(!StatStages::default().any_raised());
    }
}
