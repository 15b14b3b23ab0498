//! Core error types for the nutrition tracking application.
//!
//! This module defines transport-agnostic error types. Transport-specific
//! errors (from reqwest, platform storage, etc.) are converted to these
//! types by the API client and shell layers.

use thiserror::Error;

use crate::goals::GoalFormError;
use crate::keys::NotRecognizedError;
use crate::meal_plans::MealPlanError;
use crate::onboarding::OnboardingError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the application core.
///
/// Remote-call errors are wrapped in string form to keep this type
/// transport-agnostic.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Remote operation failed: {0}")]
    Remote(#[from] RemoteError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Goal form is incomplete: {0}")]
    GoalForm(#[from] GoalFormError),

    #[error("Key normalization failed: {0}")]
    Key(#[from] NotRecognizedError),

    #[error("Onboarding failed: {0}")]
    Onboarding(#[from] OnboardingError),

    #[error("Meal plan operation failed: {0}")]
    MealPlan(#[from] MealPlanError),

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Transport-agnostic error type for remote resource calls.
///
/// This enum uses `String` for all error details, allowing the API client
/// layer to convert transport-specific errors (reqwest, etc.) into this
/// format.
///
/// `NotFound` is absence, not failure: reads that can legitimately come back
/// empty (goal, tracking, current meal plan) recover it into an
/// "unconfigured" state instead of propagating it.
#[derive(Error, Debug)]
pub enum RemoteError {
    /// The requested resource does not exist on the server.
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// The server answered with a non-2xx status.
    #[error("Remote service returned HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// The request never produced a server answer (DNS, TLS, timeout, ...).
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered 2xx but the payload could not be decoded.
    #[error("Failed to decode response: {0}")]
    Deserialization(String),
}

/// Validation errors for user input, raised before any network call.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
