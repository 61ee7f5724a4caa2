// crates/rollover-validate-core/src/runtime/snapshot.rs
// ============================================================================
// Module: In-Memory Cluster State
// Description: Owned, immutable snapshot implementing the metadata view.
// Purpose: Back tests and embedding harnesses without a live cluster.
// Dependencies: crate::core, crate::interfaces, serde
// ============================================================================

//! ## Overview
//! An in-memory snapshot of the cluster metadata the validator reads. Once
//! built it never changes, which gives it the same point-in-time consistency
//! contract as a real cluster-state view. Membership lookups are derived from
//! the per-index alias entries and data-stream parents, so the snapshot
//! cannot disagree with itself.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use serde::Deserialize;
use serde::Serialize;

use crate::core::identifiers::IndexName;
use crate::core::identifiers::RolloverTargetName;
use crate::interfaces::AliasEntry;
use crate::interfaces::ClusterMetadataView;

// ============================================================================
// SECTION: Per-Index State
// ============================================================================

/// Metadata held for one index in the snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
struct IndexState {
    /// Rollover-skip index setting.
    rollover_skip: bool,
    /// Configured `rollover_alias` index setting.
    rollover_alias: Option<RolloverTargetName>,
    /// Alias entries held by the index.
    aliases: BTreeMap<RolloverTargetName, AliasEntry>,
    /// Targets the index has already completed a rollover for.
    rollover_history: BTreeSet<RolloverTargetName>,
    /// Parent data stream, if the index backs one.
    parent_data_stream: Option<RolloverTargetName>,
}

// ============================================================================
// SECTION: In-Memory Cluster State
// ============================================================================

/// Owned, immutable cluster-state snapshot.
///
/// # Invariants
/// - Never mutated after [`InMemoryClusterStateBuilder::build`] returns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InMemoryClusterState {
    /// Per-index metadata keyed by index name.
    indices: BTreeMap<IndexName, IndexState>,
}

impl InMemoryClusterState {
    /// Starts building a snapshot.
    #[must_use]
    pub fn builder() -> InMemoryClusterStateBuilder {
        InMemoryClusterStateBuilder::default()
    }
}

impl ClusterMetadataView for InMemoryClusterState {
    fn contains_index(&self, index: &IndexName) -> bool {
        self.indices.contains_key(index)
    }

    fn rollover_skip(&self, index: &IndexName) -> bool {
        self.indices.get(index).is_some_and(|state| state.rollover_skip)
    }

    fn rollover_alias(&self, index: &IndexName) -> Option<RolloverTargetName> {
        self.indices.get(index).and_then(|state| state.rollover_alias.clone())
    }

    fn aliases_of(&self, index: &IndexName) -> BTreeMap<RolloverTargetName, AliasEntry> {
        self.indices.get(index).map(|state| state.aliases.clone()).unwrap_or_default()
    }

    fn rollover_history(&self, index: &IndexName) -> BTreeSet<RolloverTargetName> {
        self.indices.get(index).map(|state| state.rollover_history.clone()).unwrap_or_default()
    }

    fn parent_data_stream(&self, index: &IndexName) -> Option<RolloverTargetName> {
        self.indices.get(index).and_then(|state| state.parent_data_stream.clone())
    }

    fn indices_bound_to(&self, target: &RolloverTargetName) -> BTreeSet<IndexName> {
        self.indices
            .iter()
            .filter(|(_, state)| {
                state.aliases.contains_key(target)
                    || state.parent_data_stream.as_ref() == Some(target)
            })
            .map(|(name, _)| name.clone())
            .collect()
    }
}

// ============================================================================
// SECTION: Snapshot Builder
// ============================================================================

/// Builder for [`InMemoryClusterState`].
///
/// Every method registers the named index if it is not present yet, so a
/// snapshot can be described in any order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryClusterStateBuilder {
    /// Per-index metadata accumulated so far.
    indices: BTreeMap<IndexName, IndexState>,
}

impl InMemoryClusterStateBuilder {
    /// Registers an index with default metadata.
    #[must_use]
    pub fn index(mut self, index: IndexName) -> Self {
        self.indices.entry(index).or_default();
        self
    }

    /// Sets the rollover-skip setting for an index.
    #[must_use]
    pub fn rollover_skip(mut self, index: IndexName, skip: bool) -> Self {
        self.indices.entry(index).or_default().rollover_skip = skip;
        self
    }

    /// Sets the `rollover_alias` setting for an index.
    #[must_use]
    pub fn rollover_alias(mut self, index: IndexName, target: RolloverTargetName) -> Self {
        self.indices.entry(index).or_default().rollover_alias = Some(target);
        self
    }

    /// Adds an alias entry to an index, with the given write-index flag.
    #[must_use]
    pub fn alias(
        mut self,
        index: IndexName,
        target: RolloverTargetName,
        write_index: Option<bool>,
    ) -> Self {
        self.indices.entry(index).or_default().aliases.insert(
            target,
            AliasEntry {
                write_index,
            },
        );
        self
    }

    /// Records a completed rollover for an index and target.
    #[must_use]
    pub fn rolled_over(mut self, index: IndexName, target: RolloverTargetName) -> Self {
        self.indices.entry(index).or_default().rollover_history.insert(target);
        self
    }

    /// Marks an index as a backing index of a data stream.
    #[must_use]
    pub fn data_stream_member(mut self, index: IndexName, parent: RolloverTargetName) -> Self {
        self.indices.entry(index).or_default().parent_data_stream = Some(parent);
        self
    }

    /// Finalizes the snapshot.
    #[must_use]
    pub fn build(self) -> InMemoryClusterState {
        InMemoryClusterState {
            indices: self.indices,
        }
    }
}
