// crates/rollover-validate-core/src/interfaces/mod.rs
// ============================================================================
// Module: Rollover Validate Interfaces
// Description: Backend-agnostic read interface over cluster-state metadata.
// Purpose: Define the snapshot surface the resolver and validator consume.
// Dependencies: crate::core, serde
// ============================================================================

//! ## Overview
//! The cluster-state subsystem owns and mutates the metadata this core
//! inspects. The core only ever sees it through [`ClusterMetadataView`], a
//! point-in-time immutable snapshot: any two calls against the same view must
//! be mutually consistent, and no consistency is assumed across views taken
//! at different validation attempts.
//!
//! Implementations must be deterministic and must not block; all data is
//! expected to be materialized before validation starts. Absent metadata is
//! an expected shape, never an error: missing settings read as their
//! defaults, and unknown indices simply return empty lookups.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use serde::Deserialize;
use serde::Serialize;

use crate::core::identifiers::IndexName;
use crate::core::identifiers::RolloverTargetName;

// ============================================================================
// SECTION: Alias Entry
// ============================================================================

/// Alias entry held by an index in the snapshot.
///
/// # Invariants
/// - `write_index` preserves the tri-valued flag exactly: `Some(true)`,
///   `Some(false)`, and unset are distinct on the wire even though the
///   validator treats `Some(false)` and `None` identically.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasEntry {
    /// Write-index flag as stored in the cluster state, if set.
    pub write_index: Option<bool>,
}

impl AliasEntry {
    /// Returns `true` only when the flag is explicitly set to `true`.
    #[must_use]
    pub fn is_write_index(&self) -> bool {
        self.write_index == Some(true)
    }
}

// ============================================================================
// SECTION: Cluster Metadata View
// ============================================================================

/// Read-only view over one point-in-time cluster-state snapshot.
pub trait ClusterMetadataView {
    /// Reports whether the index exists in the snapshot.
    fn contains_index(&self, index: &IndexName) -> bool;

    /// Reads the rollover-skip index setting; absent reads as `false`.
    fn rollover_skip(&self, index: &IndexName) -> bool;

    /// Reads the configured `rollover_alias` index setting, if present.
    fn rollover_alias(&self, index: &IndexName) -> Option<RolloverTargetName>;

    /// Returns the alias entries currently held by the index.
    fn aliases_of(&self, index: &IndexName) -> BTreeMap<RolloverTargetName, AliasEntry>;

    /// Returns the targets the index has already completed a rollover for.
    fn rollover_history(&self, index: &IndexName) -> BTreeSet<RolloverTargetName>;

    /// Returns the parent data stream of the index, if it backs one.
    fn parent_data_stream(&self, index: &IndexName) -> Option<RolloverTargetName>;

    /// Returns all indices currently bound to the alias or data-stream name.
    fn indices_bound_to(&self, target: &RolloverTargetName) -> BTreeSet<IndexName>;
}
