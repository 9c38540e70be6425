//! # Settings Errors
//!
//! Error types raised by setters and by segment resolution.
//!
//! ## Error Policy
//!
//! - Setters validate before writing, so a failed call leaves the store untouched
//! - Nothing is clamped or silently replaced by a default
//! - Errors carry the offending parameter name and value

use config::constants::ConfigError;
use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while configuring or reading script settings.
///
/// ## Example
///
/// ```rust
/// use script_settings::{SettingsError, SettingsStore};
///
/// let mut store = SettingsStore::new();
/// match store.set_min_circular_angle(0.0) {
///     Err(SettingsError::InvalidParameter { parameter, .. }) => {
///         assert_eq!(parameter, "angle");
///     }
///     other => unreachable!("unexpected {other:?}"),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SettingsError {
    /// A setter received a value outside its documented domain.
    #[error("Invalid parameter '{parameter}' = {value}: {reason}")]
    InvalidParameter {
        /// Script-facing name of the parameter.
        parameter: &'static str,
        /// The rejected value, rendered for display.
        value: String,
        /// What the value must satisfy.
        reason: &'static str,
    },

    /// The resolver was called with arguments outside its contract.
    #[error("Precondition violated for '{parameter}' = {value}: {reason}")]
    PreconditionViolation {
        /// Name of the offending argument.
        parameter: &'static str,
        /// The rejected value, rendered for display.
        value: String,
        /// What the value must satisfy.
        reason: &'static str,
    },
}

impl SettingsError {
    pub(crate) fn invalid(
        parameter: &'static str,
        value: impl ToString,
        reason: &'static str,
    ) -> Self {
        Self::InvalidParameter {
            parameter,
            value: value.to_string(),
            reason,
        }
    }

    pub(crate) fn precondition(
        parameter: &'static str,
        value: impl ToString,
        reason: &'static str,
    ) -> Self {
        Self::PreconditionViolation {
            parameter,
            value: value.to_string(),
            reason,
        }
    }
}

impl From<ConfigError> for SettingsError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::InvalidAngle(value) => {
                Self::invalid("angle", value, "must be a positive finite number of degrees")
            }
            ConfigError::InvalidEdgeLength(value) => {
                Self::invalid("length", value, "must be a positive finite length")
            }
        }
    }
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for settings operations.
pub type SettingsResult<T> = Result<T, SettingsError>;

// =============================================================================
// TESTS
// =============================================================================
