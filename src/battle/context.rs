use crate::ai::items::ChosenItem;
use crate::battle::damage::DamageCalculator;
use crate::battle::rng::RandomSource;
use crate::battle::state::{BattleSnapshot, BattlerId, Inventory};
use schema::Item;
use serde::{Deserialize, Serialize};

/// What a battler does this turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AiAction {
    SwitchPokemon { team_index: usize },
    UseItem { item: Item, slot: usize },
    UseMove { target: BattlerId },
}

/// Receives decided actions. The battle runtime implements this.
pub trait ActionSink {
    fn emit(&mut self, battler: BattlerId, action: AiAction);
}

impl ActionSink for Vec<(BattlerId, AiAction)> {
    fn emit(&mut self, battler: BattlerId, action: AiAction) {
        self.push((battler, action));
    }
}

/// Everything the AI is allowed to write while deciding.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DecisionState {
    /// Party slot each battler has committed to switch into this turn.
    #[serde(default)]
    pub switch_targets: [Option<usize>; 4],
    /// Item each battler has committed to use this turn.
    #[serde(default)]
    pub chosen_items: [Option<ChosenItem>; 4],
    /// Trainer items, indexed by side.
    #[serde(default)]
    pub inventories: [Inventory; 2],
}

impl DecisionState {
    pub fn with_inventory(mut self, side: usize, inventory: Inventory) -> Self {
        self.inventories[side] = inventory;
        self
    }

    pub fn switch_target(&self, battler: BattlerId) -> Option<usize> {
        self.switch_targets[battler.index()]
    }

    pub fn chosen_item(&self, battler: BattlerId) -> Option<&ChosenItem> {
        self.chosen_items[battler.index()].as_ref()
    }

    /// Forget whatever the battler decided on a previous pass.
    pub fn clear(&mut self, battler: BattlerId) {
        self.switch_targets[battler.index()] = None;
        self.chosen_items[battler.index()] = None;
    }
}

/// Read-only snapshot plus the handful of mutable collaborators a decision needs.
pub struct BattleContext<'a> {
    pub snapshot: &'a BattleSnapshot,
    pub decisions: &'a mut DecisionState,
    pub rng: &'a mut dyn RandomSource,
    pub damage: &'a dyn DamageCalculator,
}

impl<'a> BattleContext<'a> {
    pub fn new(
        snapshot: &'a BattleSnapshot,
        decisions: &'a mut DecisionState,
        rng: &'a mut dyn RandomSource,
        damage: &'a dyn DamageCalculator,
    ) -> Self {
        Self {
            snapshot,
            decisions,
            rng,
            damage,
        }
    }

    pub fn roll(&mut self, reason: &str) -> u16 {
        self.rng.next_random(reason)
    }

    /// True when `index` is already claimed as a switch target by the battler
    /// or by its partner on the field.
    pub fn is_committed(&self, battler: BattlerId, index: usize) -> bool {
        let mut owners = vec![battler];
        if let Some(partner) = self.snapshot.present_partner(battler) {
            owners.push(partner);
        }
        owners
            .into_iter()
            .any(|owner| self.decisions.switch_target(owner) == Some(index))
    }
}
