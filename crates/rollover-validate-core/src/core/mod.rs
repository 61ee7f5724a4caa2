// crates/rollover-validate-core/src/core/mod.rs
// ============================================================================
// Module: Rollover Validate Core Types
// Description: Identifiers, targets, outcomes, and persisted records.
// Purpose: Group the value types shared by the resolver and validator.
// Dependencies: crate::core submodules
// ============================================================================

//! ## Overview
//! Value types for the validation core. Everything here is immutable once
//! constructed; per-attempt values are created fresh and discarded after the
//! external state machine merges them.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod identifiers;
pub mod outcome;
pub mod record;
pub mod target;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use identifiers::IndexName;
pub use identifiers::RolloverTargetName;
pub use outcome::OutcomeError;
pub use outcome::StepStatus;
pub use outcome::ValidationOutcome;
pub use outcome::ValidationStatus;
pub use record::ActionMetadata;
pub use record::ManagedIndexRecord;
pub use target::RolloverTarget;
pub use target::RolloverTargetKind;
