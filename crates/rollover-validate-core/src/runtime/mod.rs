// crates/rollover-validate-core/src/runtime/mod.rs
// ============================================================================
// Module: Rollover Validate Runtime
// Description: Target resolution, the validation pipeline, and test snapshots.
// Purpose: Group the executable parts of the validation core.
// Dependencies: crate::runtime submodules
// ============================================================================

//! ## Overview
//! The runtime holds the two operations of the core, target resolution and
//! eligibility validation, plus an in-memory snapshot for callers that need
//! one without a live cluster. Both operations are pure functions over a
//! borrowed [`crate::interfaces::ClusterMetadataView`].

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod resolver;
pub mod snapshot;
pub mod validator;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use resolver::resolve_rollover_target;
pub use snapshot::InMemoryClusterState;
pub use snapshot::InMemoryClusterStateBuilder;
pub use validator::execute_validation;
pub use validator::validate_rollover;
