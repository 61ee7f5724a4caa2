// crates/rollover-validate-core/tests/resolver.rs
// ============================================================================
// Module: Target Resolver Tests
// Description: Validate rollover-target resolution precedence.
// Purpose: Ensure data-stream membership wins over the alias setting.
// Dependencies: rollover-validate-core
// ============================================================================

//! Behavior tests for rollover-target resolution.

use rollover_validate_core::IndexName;
use rollover_validate_core::InMemoryClusterState;
use rollover_validate_core::RolloverTargetKind;
use rollover_validate_core::RolloverTargetName;
use rollover_validate_core::StepStatus;
use rollover_validate_core::resolve_rollover_target;

#[test]
fn parent_data_stream_wins_over_alias_setting() -> Result<(), Box<dyn std::error::Error>> {
    let index = IndexName::new(".ds-logs-000001");
    let state = InMemoryClusterState::builder()
        .data_stream_member(index.clone(), RolloverTargetName::new("logs-stream"))
        .rollover_alias(index.clone(), RolloverTargetName::new("logs"))
        .build();

    let target = resolve_rollover_target(&state, &index)
        .map_err(|outcome| format!("expected a target, got verdict {outcome:?}"))?;
    if target.kind != RolloverTargetKind::DataStream {
        return Err(format!("expected data-stream kind, got {:?}", target.kind).into());
    }
    if target.name != RolloverTargetName::new("logs-stream") {
        return Err(format!("unexpected target name: {}", target.name).into());
    }
    Ok(())
}

#[test]
fn alias_setting_resolves_alias_target() -> Result<(), Box<dyn std::error::Error>> {
    let index = IndexName::new("logs-000001");
    let state = InMemoryClusterState::builder()
        .rollover_alias(index.clone(), RolloverTargetName::new("logs"))
        .build();

    let target = resolve_rollover_target(&state, &index)
        .map_err(|outcome| format!("expected a target, got verdict {outcome:?}"))?;
    if target.kind != RolloverTargetKind::Alias {
        return Err(format!("expected alias kind, got {:?}", target.kind).into());
    }
    if target.name != RolloverTargetName::new("logs") {
        return Err(format!("unexpected target name: {}", target.name).into());
    }
    Ok(())
}

#[test]
fn no_target_yields_missing_setting_verdict() -> Result<(), Box<dyn std::error::Error>> {
    let index = IndexName::new("logs-000001");
    let state = InMemoryClusterState::builder().index(index.clone()).build();

    let Err(outcome) = resolve_rollover_target(&state, &index) else {
        return Err("expected a verdict for an index with no valid target".into());
    };
    if outcome.step_status() != StepStatus::ValidationFailed {
        return Err(format!("expected validation failure, got {:?}", outcome.step_status()).into());
    }
    let message = outcome.message().ok_or("expected a missing-setting message")?;
    if !message.contains("Missing rollover_alias index setting") {
        return Err(format!("unexpected message: {message}").into());
    }
    Ok(())
}

#[test]
fn unknown_index_yields_fail_closed_verdict() -> Result<(), Box<dyn std::error::Error>> {
    let index = IndexName::new("logs-000001");
    let state = InMemoryClusterState::builder().build();

    let Err(outcome) = resolve_rollover_target(&state, &index) else {
        return Err("expected a verdict for an index absent from the snapshot".into());
    };
    if outcome.step_status() != StepStatus::ValidationFailed {
        return Err(format!("expected validation failure, got {:?}", outcome.step_status()).into());
    }
    let message = outcome.message().ok_or("expected an index-not-found message")?;
    if !message.contains("Index not found in cluster state") {
        return Err(format!("unexpected message: {message}").into());
    }
    Ok(())
}

#[test]
fn data_stream_resolution_ignores_missing_settings() -> Result<(), Box<dyn std::error::Error>> {
    // A backing index needs no rollover_alias setting at all.
    let index = IndexName::new(".ds-logs-000001");
    let state = InMemoryClusterState::builder()
        .data_stream_member(index.clone(), RolloverTargetName::new("logs-stream"))
        .build();

    if resolve_rollover_target(&state, &index).is_err() {
        return Err("expected resolution to succeed from data-stream membership alone".into());
    }
    Ok(())
}
