//! Property-based tests for the stepping engine.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated states and action sequences.

use handoff::builder::{MachineBuilder, TableBuilder};
use handoff::core::{Action, Machine, TransitionRule};
use handoff::dispatch::Dispatcher;
use handoff::mode_enum;
use handoff::naming::constant_case;
use proptest::prelude::*;

mode_enum! {
    enum TestMode {
        Counting,
        Frozen,
    }
}

fn counter(initial: i64) -> Machine<TestMode, i64, i64> {
    MachineBuilder::new()
        .initial_state(initial)
        .initial(TestMode::Counting)
        .table(
            TableBuilder::new(TestMode::Counting)
                .on(
                    "ADD",
                    TransitionRule::new().update(|count: &i64, action: &Action<i64>| {
                        count.wrapping_add(*action.payload())
                    }),
                )
                .on(
                    "FREEZE",
                    TransitionRule::new()
                        .next(|count: &i64, _: &Action<i64>| (*count % 2 == 0).then_some(TestMode::Frozen)),
                ),
        )
        .unwrap()
        .table(
            TableBuilder::new(TestMode::Frozen)
                .on("THAW", TransitionRule::new().goto(TestMode::Counting))
                .on("PEEK", TransitionRule::new()),
        )
        .unwrap()
        .build()
        .unwrap()
}

prop_compose! {
    fn arbitrary_action()(variant in 0..5u8, amount in -100i64..100) -> Action<i64> {
        let action_type = match variant {
            0 => "ADD",
            1 => "FREEZE",
            2 => "THAW",
            3 => "PEEK",
            _ => "SHRUG",
        };
        Action::new(action_type, amount)
    }
}

proptest! {
    #[test]
    fn reducer_is_pure(state in any::<i64>(), action in arbitrary_action()) {
        let machine = counter(0);
        let reducer = machine.reducer();
        let state_before = state;
        let action_before = action.clone();

        let first = reducer.reduce(&state, &action);
        let second = reducer.reduce(&state, &action);

        prop_assert_eq!(first, second);
        prop_assert_eq!(state, state_before);
        prop_assert_eq!(action, action_before);
    }

    #[test]
    fn replay_is_deterministic(
        initial in -1000i64..1000,
        actions in prop::collection::vec(arbitrary_action(), 0..20)
    ) {
        let machine = counter(initial);

        let first = machine.replay(actions.clone());
        let second = machine.replay(actions);

        match (first, second) {
            (Ok(a), Ok(b)) => {
                prop_assert_eq!(a.state(), b.state());
                prop_assert_eq!(a.mode(), b.mode());
                prop_assert!(a.same_reducer(&b));
            }
            (Err(a), Err(b)) => prop_assert_eq!(a, b),
            _ => prop_assert!(false, "replays diverged"),
        }
    }

    #[test]
    fn rule_without_next_keeps_reducer(initial in any::<i64>(), amount in any::<i64>()) {
        let machine = counter(initial);
        let next = machine.step(Action::new("ADD", amount)).unwrap();

        prop_assert!(next.same_reducer(&machine));
    }

    #[test]
    fn step_never_mutates_receiver(
        initial in -1000i64..1000,
        action in arbitrary_action()
    ) {
        let machine = counter(initial);
        let _ = machine.step(action);

        prop_assert_eq!(machine.state(), &initial);
        prop_assert_eq!(machine.mode(), &TestMode::Counting);
    }

    #[test]
    fn failed_dispatch_leaves_machine_unchanged(
        actions in prop::collection::vec(arbitrary_action(), 1..20)
    ) {
        let dispatcher = Dispatcher::new(counter(0))
            .with_formatter(handoff::naming::verbatim);

        for action in actions {
            let before = dispatcher.snapshot();
            let handled = before.can_handle(action.action_type());
            let action_type = action.action_type().to_string();
            let result = dispatcher.dispatch(&action_type, action.into_payload());

            prop_assert_eq!(result.is_ok(), handled);
            if !handled {
                let after = dispatcher.snapshot();
                prop_assert_eq!(after.state(), before.state());
                prop_assert!(after.same_reducer(&before));
            }
        }
    }

    #[test]
    fn constant_case_is_stable(raw in "[a-zA-Z_ -]{0,16}") {
        let formatted = constant_case(&raw);

        prop_assert_eq!(constant_case(&formatted), formatted.clone());
        prop_assert!(formatted.chars().all(|c| c.is_ascii_uppercase() || c == '_'));
        prop_assert!(!formatted.starts_with('_'));
        prop_assert!(!formatted.ends_with('_'));
        prop_assert!(!formatted.contains("__"));
    }
}
