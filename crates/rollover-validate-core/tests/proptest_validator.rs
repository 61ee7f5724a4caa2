// crates/rollover-validate-core/tests/proptest_validator.rs
// ============================================================================
// Module: Validator Property-Based Tests
// Description: Property tests for validation invariants over random snapshots.
// Purpose: Detect pairing violations and non-determinism across input ranges.
// ============================================================================

//! Property-based tests for validation-outcome invariants.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only assertions and helpers are permitted."
)]

use proptest::prelude::*;
use rollover_validate_core::ClusterMetadataView;
use rollover_validate_core::IndexName;
use rollover_validate_core::InMemoryClusterState;
use rollover_validate_core::RolloverTarget;
use rollover_validate_core::RolloverTargetName;
use rollover_validate_core::StepStatus;
use rollover_validate_core::ValidationStatus;
use rollover_validate_core::execute_validation;
use rollover_validate_core::validate_rollover;

/// Index-name universe for generated snapshots.
const INDICES: [&str; 3] = ["logs-000001", "logs-000002", "logs-000003"];

/// Target-name universe for generated snapshots.
const TARGETS: [&str; 3] = ["logs", "metrics", "logs-stream"];

/// Generated metadata plan for one index.
#[derive(Debug, Clone)]
struct IndexPlan {
    /// Rollover-skip setting.
    skip: bool,
    /// `rollover_alias` setting as an index into [`TARGETS`].
    alias_setting: Option<usize>,
    /// Alias entries as target indices with write-index flags.
    aliases: Vec<(usize, Option<bool>)>,
    /// Rollover-history entries as target indices.
    history: Vec<usize>,
    /// Parent data stream as an index into [`TARGETS`].
    parent: Option<usize>,
}

fn index_plan_strategy() -> impl Strategy<Value = IndexPlan> {
    (
        any::<bool>(),
        prop::option::of(0usize .. TARGETS.len()),
        prop::collection::vec((0usize .. TARGETS.len(), prop::option::of(any::<bool>())), 0 .. 3),
        prop::collection::vec(0usize .. TARGETS.len(), 0 .. 3),
        prop::option::of(0usize .. TARGETS.len()),
    )
        .prop_map(|(skip, alias_setting, aliases, history, parent)| IndexPlan {
            skip,
            alias_setting,
            aliases,
            history,
            parent,
        })
}

fn snapshot_strategy() -> impl Strategy<Value = InMemoryClusterState> {
    prop::collection::vec(index_plan_strategy(), 0 ..= INDICES.len()).prop_map(|plans| {
        let mut builder = InMemoryClusterState::builder();
        for (slot, plan) in plans.iter().enumerate() {
            let index = IndexName::new(INDICES[slot]);
            builder = builder.index(index.clone());
            if plan.skip {
                builder = builder.rollover_skip(index.clone(), true);
            }
            if let Some(target) = plan.alias_setting {
                builder =
                    builder.rollover_alias(index.clone(), RolloverTargetName::new(TARGETS[target]));
            }
            for (target, write_index) in &plan.aliases {
                builder = builder.alias(
                    index.clone(),
                    RolloverTargetName::new(TARGETS[*target]),
                    *write_index,
                );
            }
            for target in &plan.history {
                builder =
                    builder.rolled_over(index.clone(), RolloverTargetName::new(TARGETS[*target]));
            }
            if let Some(target) = plan.parent {
                builder = builder
                    .data_stream_member(index.clone(), RolloverTargetName::new(TARGETS[target]));
            }
        }
        builder.build()
    })
}

fn target_strategy() -> impl Strategy<Value = RolloverTarget> {
    (0usize .. TARGETS.len(), any::<bool>()).prop_map(|(target, data_stream)| {
        let name = RolloverTargetName::new(TARGETS[target]);
        if data_stream { RolloverTarget::data_stream(name) } else { RolloverTarget::alias(name) }
    })
}

proptest! {
    #[test]
    fn validation_is_idempotent_per_snapshot(
        state in snapshot_strategy(),
        slot in 0usize .. INDICES.len(),
    ) {
        let index = IndexName::new(INDICES[slot]);
        let first = execute_validation(&state, &index);
        let second = execute_validation(&state, &index);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn outcome_pairings_always_hold(
        state in snapshot_strategy(),
        slot in 0usize .. INDICES.len(),
    ) {
        let index = IndexName::new(INDICES[slot]);
        let outcome = execute_validation(&state, &index);
        match (outcome.step_status(), outcome.validation_status()) {
            (StepStatus::Completed, Some(ValidationStatus::Pass))
            | (StepStatus::ValidationFailed, Some(ValidationStatus::Revalidate)) => {
                prop_assert!(outcome.message().is_some(), "verdict without message: {:?}", outcome);
            }
            (StepStatus::Pending, None) => {
                prop_assert!(outcome.message().is_none(), "proceed with message: {:?}", outcome);
            }
            (step, validation) => {
                return Err(TestCaseError::fail(format!(
                    "invalid pairing: {step:?} with {validation:?}"
                )));
            }
        }
    }

    #[test]
    fn skip_and_history_always_complete(
        state in snapshot_strategy(),
        slot in 0usize .. INDICES.len(),
        target in target_strategy(),
    ) {
        let index = IndexName::new(INDICES[slot]);
        let outcome = validate_rollover(&state, &index, &target);

        if state.contains_index(&index) {
            if state.rollover_skip(&index) {
                prop_assert_eq!(outcome.step_status(), StepStatus::Completed);
            } else if state.rollover_history(&index).contains(&target.name) {
                prop_assert_eq!(outcome.step_status(), StepStatus::Completed);
            } else if target.is_data_stream() {
                prop_assert_eq!(outcome.step_status(), StepStatus::Pending);
            }
        } else {
            prop_assert_eq!(outcome.step_status(), StepStatus::ValidationFailed);
        }
    }
}
