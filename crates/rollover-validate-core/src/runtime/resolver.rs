// crates/rollover-validate-core/src/runtime/resolver.rs
// ============================================================================
// Module: Rollover Target Resolver
// Description: Resolve the alias or data-stream name a rollover acts on.
// Purpose: Produce a fresh rollover target for each validation attempt.
// Dependencies: crate::core, crate::interfaces, tracing
// ============================================================================

//! ## Overview
//! Target resolution runs once per validation attempt. Data-stream membership
//! wins over the `rollover_alias` index setting; when neither applies, the
//! index is misconfigured and the resolver yields a retry verdict instead of
//! a target. The external scheduler's own attempt cap turns persistent
//! misconfiguration into a user-visible failure.

// ============================================================================
// SECTION: Imports
// ============================================================================

use tracing::warn;

use crate::core::identifiers::IndexName;
use crate::core::outcome::ValidationOutcome;
use crate::core::target::RolloverTarget;
use crate::interfaces::ClusterMetadataView;

// ============================================================================
// SECTION: Target Resolution
// ============================================================================

/// Resolves the rollover target for an index against one snapshot.
///
/// # Errors
///
/// Returns a terminal [`ValidationOutcome`] when no valid target exists: the
/// index is absent from the snapshot, or it has neither a parent data stream
/// nor a `rollover_alias` setting. The `Err` side is a verdict for the
/// external state machine, not a fault.
pub fn resolve_rollover_target<V>(
    view: &V,
    index: &IndexName,
) -> Result<RolloverTarget, ValidationOutcome>
where
    V: ClusterMetadataView + ?Sized,
{
    if let Some(parent) = view.parent_data_stream(index) {
        return Ok(RolloverTarget::data_stream(parent));
    }

    if !view.contains_index(index) {
        let outcome = ValidationOutcome::index_not_found(index);
        warn!(index = %index, "index missing from snapshot during target resolution");
        return Err(outcome);
    }

    match view.rollover_alias(index) {
        Some(alias) => Ok(RolloverTarget::alias(alias)),
        None => {
            let outcome = ValidationOutcome::missing_rollover_alias(index);
            warn!(index = %index, "no parent data stream and no rollover_alias setting");
            Err(outcome)
        }
    }
}
