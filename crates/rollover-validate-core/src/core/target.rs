// crates/rollover-validate-core/src/core/target.rs
// ============================================================================
// Module: Rollover Target
// Description: Resolved rollover target and its kind.
// Purpose: Identify what a rollover transition acts on for one validation attempt.
// Dependencies: crate::core::identifiers, serde
// ============================================================================

//! ## Overview
//! A rollover target names the alias or data stream that the rollover
//! transition conceptually acts upon. Targets are resolved fresh for every
//! validation attempt and never persisted, because the cluster state may have
//! changed between attempts.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::identifiers::RolloverTargetName;

// ============================================================================
// SECTION: Target Kind
// ============================================================================

/// Kind of abstraction backing a rollover target.
///
/// # Invariants
/// - Variants are stable for serialization and contract matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RolloverTargetKind {
    /// The target is a data stream; write-index semantics are built in.
    DataStream,
    /// The target is an alias; write-index semantics come from alias flags.
    Alias,
}

// ============================================================================
// SECTION: Rollover Target
// ============================================================================

/// Resolved rollover target for a single validation attempt.
///
/// # Invariants
/// - Immutable once resolved; recomputed on every attempt, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RolloverTarget {
    /// Name the rollover acts on.
    pub name: RolloverTargetName,
    /// Kind of abstraction backing the target.
    pub kind: RolloverTargetKind,
}

impl RolloverTarget {
    /// Creates a data-stream-backed target.
    #[must_use]
    pub const fn data_stream(name: RolloverTargetName) -> Self {
        Self {
            name,
            kind: RolloverTargetKind::DataStream,
        }
    }

    /// Creates an alias-backed target.
    #[must_use]
    pub const fn alias(name: RolloverTargetName) -> Self {
        Self {
            name,
            kind: RolloverTargetKind::Alias,
        }
    }

    /// Returns `true` when the target is backed by a data stream.
    #[must_use]
    pub const fn is_data_stream(&self) -> bool {
        matches!(self.kind, RolloverTargetKind::DataStream)
    }
}
