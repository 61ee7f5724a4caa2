// crates/rollover-validate-core/src/core/outcome.rs
// ============================================================================
// Module: Validation Outcome
// Description: Step status, validation status, and the outcome value they form.
// Purpose: Carry one validation verdict to the external step-state machine.
// Dependencies: crate::core::identifiers, serde, thiserror
// ============================================================================

//! ## Overview
//! A validation outcome is the immutable result of one validation attempt.
//! The step status mirrors the external step-execution contract, the
//! validation status tells the scheduler whether to retry, and the message is
//! the operator-facing diagnostic.
//!
//! Outcomes are built only through the constructors below, which enforce the
//! status pairings: `Completed` always carries `Pass`, `ValidationFailed`
//! always carries `Revalidate`, and the proceed outcome carries neither a
//! validation status nor a message. Persisted outcomes are untrusted on load;
//! deserialization re-checks the pairings and rejects invalid triplets.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::core::identifiers::IndexName;
use crate::core::identifiers::RolloverTargetName;

// ============================================================================
// SECTION: Status Enums
// ============================================================================

/// Step status consumed by the external step-execution state machine.
///
/// # Invariants
/// - Variants are stable for serialization and contract matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    /// The step goal is already satisfied; no rollover side effects needed.
    Completed,
    /// Validation reached a retry verdict; the scheduler should revalidate.
    ValidationFailed,
    /// No verdict this round; the caller may proceed with the rollover action.
    Pending,
}

/// Validation status consumed by the external retry loop.
///
/// # Invariants
/// - Variants are stable for serialization and contract matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationStatus {
    /// The rollover action may be treated as satisfied or safe to proceed.
    Pass,
    /// Validation must run again on the next scheduled attempt.
    Revalidate,
}

// ============================================================================
// SECTION: Outcome Errors
// ============================================================================

/// Errors raised when reconstituting a persisted outcome.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum OutcomeError {
    /// A terminal or retry verdict was loaded without a message.
    #[error("outcome with step status {0:?} requires a message")]
    MissingMessage(StepStatus),
    /// A pending outcome was loaded with a message attached.
    #[error("pending outcome must not carry a message")]
    UnexpectedMessage,
    /// The step status and validation status pairing is not a valid verdict.
    #[error("outcome pairs step status {step:?} with validation status {validation:?}")]
    StatusMismatch {
        /// Step status found in the persisted triplet.
        step: StepStatus,
        /// Validation status found in the persisted triplet.
        validation: Option<ValidationStatus>,
    },
}

// ============================================================================
// SECTION: Validation Outcome
// ============================================================================

/// Raw wire form of an outcome, checked before it becomes a [`ValidationOutcome`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct RawValidationOutcome {
    /// Step status of the persisted triplet.
    step_status: StepStatus,
    /// Validation status of the persisted triplet.
    validation_status: Option<ValidationStatus>,
    /// Message of the persisted triplet.
    message: Option<String>,
}

/// Immutable result of one validation attempt.
///
/// # Invariants
/// - `Completed` is paired with `Pass` and a message, and is produced only
///   for "skipped by configuration" or "already rolled over".
/// - `ValidationFailed` is paired with `Revalidate` and a message.
/// - `Pending` carries no validation status and no message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawValidationOutcome", into = "RawValidationOutcome")]
pub struct ValidationOutcome {
    /// Step status for the external step-execution contract.
    step_status: StepStatus,
    /// Retry guidance for the external scheduler.
    validation_status: Option<ValidationStatus>,
    /// Operator-facing diagnostic.
    message: Option<String>,
}

impl ValidationOutcome {
    /// Terminal success: rollover explicitly skipped by configuration.
    #[must_use]
    pub fn skipped(index: &IndexName) -> Self {
        Self::completed(format!("Skipped rollover action for [index={index}]"))
    }

    /// Terminal success: rollover already happened for this target.
    #[must_use]
    pub fn already_rolled_over(index: &IndexName, target: &RolloverTargetName) -> Self {
        Self::completed(format!(
            "This index has already been rolled over using this alias, \
             treating as a success [index={index}, alias={target}]"
        ))
    }

    /// Retry verdict: the index no longer holds the target alias.
    #[must_use]
    pub fn missing_alias(index: &IndexName) -> Self {
        Self::failed(format!("Missing alias when rollover [index={index}]"))
    }

    /// Retry verdict: another index is (or may become) the write index.
    #[must_use]
    pub fn not_write_index(index: &IndexName) -> Self {
        Self::failed(format!("Not the write index when rollover [index={index}]"))
    }

    /// Retry verdict: no parent data stream and no `rollover_alias` setting.
    #[must_use]
    pub fn missing_rollover_alias(index: &IndexName) -> Self {
        Self::failed(format!("Missing rollover_alias index setting [index={index}]"))
    }

    /// Retry verdict: the index is absent from the cluster-state snapshot.
    #[must_use]
    pub fn index_not_found(index: &IndexName) -> Self {
        Self::failed(format!("Index not found in cluster state when rollover [index={index}]"))
    }

    /// No verdict: every check passed and the rollover action may proceed.
    #[must_use]
    pub const fn proceed() -> Self {
        Self {
            step_status: StepStatus::Pending,
            validation_status: None,
            message: None,
        }
    }

    /// Builds a `Completed`/`Pass` outcome with the given message.
    fn completed(message: String) -> Self {
        Self {
            step_status: StepStatus::Completed,
            validation_status: Some(ValidationStatus::Pass),
            message: Some(message),
        }
    }

    /// Builds a `ValidationFailed`/`Revalidate` outcome with the given message.
    fn failed(message: String) -> Self {
        Self {
            step_status: StepStatus::ValidationFailed,
            validation_status: Some(ValidationStatus::Revalidate),
            message: Some(message),
        }
    }

    /// Returns the step status.
    #[must_use]
    pub const fn step_status(&self) -> StepStatus {
        self.step_status
    }

    /// Returns the validation status, if validation concluded this round.
    #[must_use]
    pub const fn validation_status(&self) -> Option<ValidationStatus> {
        self.validation_status
    }

    /// Returns the operator-facing diagnostic, if one was produced.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Returns `true` when the outcome is a terminal or retry verdict.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        !matches!(self.step_status, StepStatus::Pending)
    }

    /// Returns `true` when the caller may continue the rollover action itself.
    #[must_use]
    pub const fn should_proceed(&self) -> bool {
        matches!(self.step_status, StepStatus::Pending)
    }
}

impl TryFrom<RawValidationOutcome> for ValidationOutcome {
    type Error = OutcomeError;

    fn try_from(raw: RawValidationOutcome) -> Result<Self, Self::Error> {
        match (raw.step_status, raw.validation_status) {
            (StepStatus::Completed, Some(ValidationStatus::Pass))
            | (StepStatus::ValidationFailed, Some(ValidationStatus::Revalidate)) => {
                if raw.message.is_none() {
                    return Err(OutcomeError::MissingMessage(raw.step_status));
                }
            }
            (StepStatus::Pending, None) => {
                if raw.message.is_some() {
                    return Err(OutcomeError::UnexpectedMessage);
                }
            }
            (step, validation) => {
                return Err(OutcomeError::StatusMismatch {
                    step,
                    validation,
                });
            }
        }
        Ok(Self {
            step_status: raw.step_status,
            validation_status: raw.validation_status,
            message: raw.message,
        })
    }
}

impl From<ValidationOutcome> for RawValidationOutcome {
    fn from(outcome: ValidationOutcome) -> Self {
        Self {
            step_status: outcome.step_status,
            validation_status: outcome.validation_status,
            message: outcome.message,
        }
    }
}
