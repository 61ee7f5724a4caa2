// crates/rollover-validate-core/src/core/identifiers.rs
// ============================================================================
// Module: Rollover Validate Identifiers
// Description: Canonical opaque identifiers for managed indices and rollover targets.
// Purpose: Provide strongly typed, serializable names with stable wire forms.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! This module defines the canonical names used throughout Rollover Validate.
//! Names are opaque and serialize as plain strings on the wire. Aliases and
//! data streams share the rollover-target namespace, so a single
//! [`RolloverTargetName`] type covers both.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Identifier Types
// ============================================================================

/// Name of a managed storage index.
///
/// # Invariants
/// - Opaque; the core never parses or normalizes index names.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IndexName(String);

impl IndexName {
    /// Creates an index name from a raw string.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the raw name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IndexName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Name of a rollover target: an alias or a data-stream name.
///
/// # Invariants
/// - Opaque; the core never parses or normalizes target names.
/// - The same type keys alias entries, rollover history, and membership
///   lookups, since rollover history records whichever name rollover acted on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RolloverTargetName(String);

impl RolloverTargetName {
    /// Creates a rollover-target name from a raw string.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the raw name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RolloverTargetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
