#[cfg(test)]
mod tests {
    use crate::ai::tests::common::{
        attack_on, decide, TestBattleBuilder, TestCombatantBuilder, TestPartyMonBuilder,
    };
    use crate::battle::conditions::Volatiles;
    use crate::battle::context::{AiAction, DecisionState};
    use crate::battle::damage::StandardDamageCalculator;
    use crate::battle::state::{BattleFlags, BattleSnapshot, BattlerId, Combatant};
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use schema::{Ability, Move, Species};

    const ME: BattlerId = BattlerId::OPPONENT_LEFT;

    /// A badly hurt active combatant with a healthy Machamp waiting at slot 1.
    /// Without a gate in the way it always switches.
    fn battle_with(active: Combatant, opponent: Combatant) -> BattleSnapshot {
        TestBattleBuilder::singles()
            .with_battler(BattlerId::PLAYER_LEFT, opponent)
            .with_battler(ME, active)
            .with_bench(
                1,
                1,
                TestPartyMonBuilder::new(Species::Machamp)
                    .with_moves(&[Move::CrossChop])
                    .build(),
            )
            .build()
    }

    fn snorlax() -> Combatant {
        TestCombatantBuilder::new(Species::Snorlax)
            .with_moves(&[Move::BodySlam])
            .build()
    }

    fn hurt(species: Species) -> TestCombatantBuilder {
        TestCombatantBuilder::new(species)
            .with_moves(&[Move::BodySlam])
            .with_hp(10)
    }

    #[test]
    fn test_no_gate_means_the_hurt_combatant_switches() {
        let snapshot = battle_with(hurt(Species::Snorlax).build(), snorlax());
        let mut decisions = DecisionState::default();

        let decision = decide(&snapshot, &mut decisions, &StandardDamageCalculator, ME, vec![]);

        assert_eq!(decision.action, AiAction::SwitchPokemon { team_index: 1 });
        assert_eq!(decisions.switch_target(ME), Some(1));
    }

    #[rstest]
    #[case::wrapped(Volatiles::WRAPPED)]
    #[case::mean_look(Volatiles::ESCAPE_PREVENTION)]
    #[case::ingrain(Volatiles::ROOTED)]
    fn test_bound_combatant_stays_in(#[case] volatiles: Volatiles) {
        let active = hurt(Species::Snorlax).with_volatiles(volatiles).build();
        let snapshot = battle_with(active, snorlax());
        let mut decisions = DecisionState::default();

        let decision = decide(&snapshot, &mut decisions, &StandardDamageCalculator, ME, vec![]);

        assert_eq!(decision.action, attack_on(ME));
        assert_eq!(decisions.switch_target(ME), None);
    }

    #[test]
    fn test_opposing_shadow_tag_traps_everyone() {
        let wobbuffet = TestCombatantBuilder::new(Species::Wobbuffet).build();
        let snapshot = battle_with(hurt(Species::Gyarados).build(), wobbuffet);
        let mut decisions = DecisionState::default();

        let decision = decide(&snapshot, &mut decisions, &StandardDamageCalculator, ME, vec![]);

        assert_eq!(decision.action, attack_on(ME));
    }

    #[rstest]
    #[case::grounded(Species::Snorlax, Ability::Immunity, false)]
    #[case::flying(Species::Gyarados, Ability::Intimidate, true)]
    #[case::levitating(Species::Gengar, Ability::Levitate, true)]
    fn test_arena_trap_only_holds_grounded_combatants(
        #[case] species: Species,
        #[case] ability: Ability,
        #[case] escapes: bool,
    ) {
        let dugtrio = TestCombatantBuilder::new(Species::Dugtrio)
            .with_ability(Ability::ArenaTrap)
            .build();
        let active = hurt(species).with_ability(ability).build();
        let snapshot = battle_with(active, dugtrio);
        let mut decisions = DecisionState::default();

        let decision = decide(&snapshot, &mut decisions, &StandardDamageCalculator, ME, vec![]);

        let expected = if escapes {
            AiAction::SwitchPokemon { team_index: 1 }
        } else {
            attack_on(ME)
        };
        assert_eq!(decision.action, expected);
    }

    #[rstest]
    #[case::steel(Species::Skarmory, false)]
    #[case::not_steel(Species::Gyarados, true)]
    fn test_magnet_pull_holds_steel_types(#[case] species: Species, #[case] escapes: bool) {
        let magneton = TestCombatantBuilder::new(Species::Magneton)
            .with_moves(&[Move::Thunderbolt])
            .build();
        let active = hurt(species).build();
        let snapshot = battle_with(active, magneton);
        let mut decisions = DecisionState::default();

        let decision = decide(&snapshot, &mut decisions, &StandardDamageCalculator, ME, vec![]);

        assert_eq!(
            matches!(decision.action, AiAction::SwitchPokemon { .. }),
            escapes
        );
    }

    #[test]
    fn test_arena_battles_never_switch() {
        let snapshot = TestBattleBuilder::singles()
            .with_flags(BattleFlags::ARENA)
            .with_battler(BattlerId::PLAYER_LEFT, snorlax())
            .with_battler(ME, hurt(Species::Snorlax).build())
            .with_bench(1, 1, TestPartyMonBuilder::new(Species::Blissey).build())
            .build();
        let mut decisions = DecisionState::default();

        let decision = decide(&snapshot, &mut decisions, &StandardDamageCalculator, ME, vec![]);

        assert_eq!(decision.action, attack_on(ME));
    }
}
