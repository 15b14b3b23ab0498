//! Onboarding domain models.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::errors::{Error, ValidationError};

/// Input for the initial profile creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRequest {
    pub user_id: String,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub birth_date: NaiveDate,
    #[serde(default)]
    pub activity_level: Option<String>,
}

impl ProfileRequest {
    /// Validates the request locally. Validation errors never reach the
    /// network layer.
    pub fn validate(&self) -> Result<(), Error> {
        if self.user_id.trim().is_empty() {
            return Err(ValidationError::MissingField("userId".to_string()).into());
        }
        if self.height_cm <= 0.0 {
            return Err(
                ValidationError::InvalidInput("Height must be a positive number".to_string())
                    .into(),
            );
        }
        if self.weight_kg <= 0.0 {
            return Err(
                ValidationError::InvalidInput("Weight must be a positive number".to_string())
                    .into(),
            );
        }
        Ok(())
    }
}

/// The three remote steps of onboarding, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OnboardingStep {
    Profile,
    Goal,
    Tracking,
}

impl fmt::Display for OnboardingStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OnboardingStep::Profile => "profile",
            OnboardingStep::Goal => "goal",
            OnboardingStep::Tracking => "tracking",
        };
        f.write_str(name)
    }
}

/// Observable progress of the onboarding sequence.
///
/// The failure state names the step that failed and keeps the profile id
/// that was already committed, so a caller can resume instead of re-running
/// the (non-idempotent) profile creation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OnboardingState {
    #[default]
    Idle,
    ProfileCreated {
        profile_id: String,
    },
    GoalDerived {
        profile_id: String,
    },
    TrackingReady {
        profile_id: String,
    },
    Complete {
        profile_id: String,
    },
    Failed {
        step: OnboardingStep,
        profile_id: Option<String>,
    },
}

/// A failed onboarding step, carrying what was already committed.
#[derive(Error, Debug)]
#[error("Step '{step}' failed")]
pub struct OnboardingError {
    pub step: OnboardingStep,
    /// Profile id committed before the failure, if any. The profile is not
    /// rolled back; callers persist this id and resume from the goal step.
    pub profile_id: Option<String>,
    #[source]
    pub source: Box<Error>,
}
