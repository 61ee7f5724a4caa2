// crates/rollover-validate-core/src/runtime/validator.rs
// ============================================================================
// Module: Rollover Eligibility Validator
// Description: Ordered short-circuiting checks for rollover eligibility.
// Purpose: Classify one validation attempt into a verdict or "proceed".
// Dependencies: crate::core, crate::interfaces, crate::runtime::resolver, tracing
// ============================================================================

//! ## Overview
//! The validator is a decision tree, not a set of independent rules: checks
//! run in a fixed order and the first one that reaches a verdict terminates
//! evaluation. Each check is a pure function over the snapshot returning
//! either a terminal outcome or "continue". The pipeline order is skip,
//! already-rolled-over, then the alias checks (has-alias, is-write-index);
//! data-stream targets carry no alias ambiguity and skip the alias checks.
//!
//! The validator fails closed: metadata it cannot read (an index deleted
//! between scheduling and validation, for example) yields a revalidate
//! verdict, never a fault, because concurrent cluster-state changes are
//! routine.

// ============================================================================
// SECTION: Imports
// ============================================================================

use tracing::debug;
use tracing::warn;

use crate::core::identifiers::IndexName;
use crate::core::outcome::ValidationOutcome;
use crate::core::target::RolloverTarget;
use crate::interfaces::ClusterMetadataView;
use crate::runtime::resolver::resolve_rollover_target;

// ============================================================================
// SECTION: Validation Entry Point
// ============================================================================

/// Runs one full validation attempt: resolve the target, then validate.
///
/// This is the surface the external step-state machine invokes. A resolver
/// verdict (no valid target) is returned as-is.
#[must_use]
pub fn execute_validation<V>(view: &V, index: &IndexName) -> ValidationOutcome
where
    V: ClusterMetadataView + ?Sized,
{
    match resolve_rollover_target(view, index) {
        Ok(target) => validate_rollover(view, index, &target),
        Err(outcome) => outcome,
    }
}

// ============================================================================
// SECTION: Validation Pipeline
// ============================================================================

/// Validates rollover eligibility for an index against a resolved target.
///
/// Returns a terminal outcome for a verdict, or the proceed outcome when the
/// pipeline falls through with every check passed.
#[must_use]
pub fn validate_rollover<V>(
    view: &V,
    index: &IndexName,
    target: &RolloverTarget,
) -> ValidationOutcome
where
    V: ClusterMetadataView + ?Sized,
{
    if !view.contains_index(index) {
        let outcome = ValidationOutcome::index_not_found(index);
        warn!(index = %index, "index missing from snapshot during validation");
        return outcome;
    }

    if let Some(outcome) = check_skip(view, index) {
        return outcome;
    }
    if let Some(outcome) = check_already_rolled_over(view, index, target) {
        return outcome;
    }

    if !target.is_data_stream() {
        if let Some(outcome) = check_has_alias(view, index, target) {
            return outcome;
        }
        if let Some(outcome) = check_write_index(view, index, target) {
            return outcome;
        }
    }

    ValidationOutcome::proceed()
}

// ============================================================================
// SECTION: Individual Checks
// ============================================================================

/// Operator override: the rollover-skip setting short-circuits all checks.
fn check_skip<V>(view: &V, index: &IndexName) -> Option<ValidationOutcome>
where
    V: ClusterMetadataView + ?Sized,
{
    if view.rollover_skip(index) {
        return Some(ValidationOutcome::skipped(index));
    }
    None
}

/// Idempotence: a rollover already recorded for this target is a success,
/// even if the alias has since been removed.
fn check_already_rolled_over<V>(
    view: &V,
    index: &IndexName,
    target: &RolloverTarget,
) -> Option<ValidationOutcome>
where
    V: ClusterMetadataView + ?Sized,
{
    if view.rollover_history(index).contains(&target.name) {
        return Some(ValidationOutcome::already_rolled_over(index, &target.name));
    }
    None
}

/// The index must still hold the target alias; it may have been removed
/// concurrently between scheduling and validation.
fn check_has_alias<V>(
    view: &V,
    index: &IndexName,
    target: &RolloverTarget,
) -> Option<ValidationOutcome>
where
    V: ClusterMetadataView + ?Sized,
{
    let aliases = view.aliases_of(index);
    debug!(index = %index, ?aliases, "alias entries observed for index");
    if !aliases.contains_key(&target.name) {
        let outcome = ValidationOutcome::missing_alias(index);
        warn!(index = %index, target = %target.name, "target alias absent from index");
        return Some(outcome);
    }
    None
}

/// The index must be the write index for the alias. A flag not explicitly
/// `true` (false and unset are treated identically) is still acceptable when
/// the alias is bound to this one index; with two or more bound indices the
/// write index is ambiguous and must be re-observed.
fn check_write_index<V>(
    view: &V,
    index: &IndexName,
    target: &RolloverTarget,
) -> Option<ValidationOutcome>
where
    V: ClusterMetadataView + ?Sized,
{
    let entry = view.aliases_of(index).get(&target.name).copied()?;
    if entry.is_write_index() {
        return None;
    }

    let bound = view.indices_bound_to(&target.name);
    debug!(target = %target.name, ?bound, "indices bound to rollover target");
    if bound.len() > 1 {
        let outcome = ValidationOutcome::not_write_index(index);
        warn!(index = %index, target = %target.name, "write index ambiguous for target");
        return Some(outcome);
    }
    None
}
