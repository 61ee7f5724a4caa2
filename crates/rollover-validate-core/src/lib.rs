// crates/rollover-validate-core/src/lib.rs
// ============================================================================
// Module: Rollover Validate Core Library
// Description: Pure rollover-eligibility validation over cluster-state snapshots.
// Purpose: Decide whether a managed index may execute a rollover transition.
// Dependencies: serde, thiserror, tracing
// ============================================================================

//! ## Overview
//! Rollover Validate Core is the decision procedure an index-lifecycle
//! manager runs before executing a rollover: given a read-only snapshot of
//! cluster metadata and a managed index, it classifies the attempt as an
//! already-satisfied success, a retry-later verdict, or an implicit
//! "proceed". It is pure validation, never mutation, so repeated invocations
//! against the same snapshot always yield the same outcome.
//!
//! The core holds no state across attempts and performs no I/O; everything it
//! reads arrives through the [`interfaces::ClusterMetadataView`] snapshot
//! borrowed for the duration of one call.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod interfaces;
pub mod runtime;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use crate::core::ActionMetadata;
pub use crate::core::IndexName;
pub use crate::core::ManagedIndexRecord;
pub use crate::core::OutcomeError;
pub use crate::core::RolloverTarget;
pub use crate::core::RolloverTargetKind;
pub use crate::core::RolloverTargetName;
pub use crate::core::StepStatus;
pub use crate::core::ValidationOutcome;
pub use crate::core::ValidationStatus;
pub use crate::interfaces::AliasEntry;
pub use crate::interfaces::ClusterMetadataView;
pub use crate::runtime::InMemoryClusterState;
pub use crate::runtime::InMemoryClusterStateBuilder;
pub use crate::runtime::execute_validation;
pub use crate::runtime::resolve_rollover_target;
pub use crate::runtime::validate_rollover;
