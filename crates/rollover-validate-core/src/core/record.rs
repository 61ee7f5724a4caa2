// crates/rollover-validate-core/src/core/record.rs
// ============================================================================
// Module: Managed Index Record
// Description: Persisted per-index lifecycle record and the outcome merge.
// Purpose: Let the external state machine fold outcomes into stored metadata.
// Dependencies: crate::core::{identifiers, outcome}, serde
// ============================================================================

//! ## Overview
//! The external step-state machine persists one record per managed index. The
//! core does not own that persistence; it only defines the record shape and
//! the merge that writes a validation outcome into it. Merging replaces the
//! previous outcome and leaves the unrelated action metadata untouched.
//!
//! Records are treated as untrusted on load, like any persisted state.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::identifiers::IndexName;
use crate::core::outcome::ValidationOutcome;

// ============================================================================
// SECTION: Action Metadata
// ============================================================================

/// Metadata the external framework tracks for the in-flight lifecycle action.
///
/// # Invariants
/// - Owned by the external framework; the core carries it through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionMetadata {
    /// Name of the lifecycle action (for rollover, `attempt_rollover`).
    pub name: String,
    /// Whether the last execution of the action failed.
    pub failed: bool,
    /// Retry attempts consumed so far by the external scheduler.
    pub consumed_retries: u32,
}

// ============================================================================
// SECTION: Managed Index Record
// ============================================================================

/// Persisted lifecycle record for one managed index.
///
/// # Invariants
/// - `validation` holds the most recent outcome, or `None` before the first
///   validation attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagedIndexRecord {
    /// Managed index the record belongs to.
    pub index: IndexName,
    /// Action metadata tracked by the external framework.
    pub action: Option<ActionMetadata>,
    /// Most recent validation outcome, if any.
    pub validation: Option<ValidationOutcome>,
}

impl ManagedIndexRecord {
    /// Creates a record with no action metadata and no outcome yet.
    #[must_use]
    pub const fn new(index: IndexName) -> Self {
        Self {
            index,
            action: None,
            validation: None,
        }
    }

    /// Merges a validation outcome into the record.
    ///
    /// Replaces the previous outcome; action metadata is not touched.
    #[must_use]
    pub fn merge_outcome(self, outcome: ValidationOutcome) -> Self {
        Self {
            validation: Some(outcome),
            ..self
        }
    }
}
