//! Centralized default values shared by the script settings layer.
//!
//! Each public item documents its purpose and carries a minimal usage example
//! so that downstream crates stay declarative and avoid scattering literals.

use std::fmt;

// =============================================================================
// CIRCULAR TESSELLATION DEFAULTS
// =============================================================================

/// Default maximum angle, in degrees, between adjacent segments on a circle.
///
/// With the default angle a full circle needs at least `ceil(360 / 10) = 36`
/// segments.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_MIN_CIRCULAR_ANGLE;
/// assert_eq!((360.0 / DEFAULT_MIN_CIRCULAR_ANGLE).ceil(), 36.0);
/// ```
pub const DEFAULT_MIN_CIRCULAR_ANGLE: f64 = 10.0;

/// Default minimum chord length between adjacent segments.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_MIN_CIRCULAR_EDGE_LENGTH;
/// let circumference = 2.0 * std::f64::consts::PI * 5.0;
/// assert_eq!((circumference / DEFAULT_MIN_CIRCULAR_EDGE_LENGTH).ceil(), 32.0);
/// ```
pub const DEFAULT_MIN_CIRCULAR_EDGE_LENGTH: f64 = 1.0;

/// Default explicit segment count. Zero means no override is applied.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_CIRCULAR_SEGMENTS;
/// assert_eq!(DEFAULT_CIRCULAR_SEGMENTS, 0);
/// ```
pub const DEFAULT_CIRCULAR_SEGMENTS: u32 = 0;

/// Derived segment counts are rounded up to a multiple of this value, so
/// cross-sections keep quadrant symmetry.
///
/// # Examples
/// ```
/// use config::constants::CIRCULAR_SEGMENT_QUANTUM;
/// let raw = 629_u32;
/// assert_eq!(raw.next_multiple_of(CIRCULAR_SEGMENT_QUANTUM), 632);
/// ```
pub const CIRCULAR_SEGMENT_QUANTUM: u32 = 4;

/// Ceiling for derived segment counts: the largest multiple of
/// [`CIRCULAR_SEGMENT_QUANTUM`] representable as `u32`.
///
/// # Examples
/// ```
/// use config::constants::{CIRCULAR_SEGMENT_QUANTUM, MAX_CIRCULAR_SEGMENTS};
/// assert_eq!(MAX_CIRCULAR_SEGMENTS % CIRCULAR_SEGMENT_QUANTUM, 0);
/// ```
pub const MAX_CIRCULAR_SEGMENTS: u32 = u32::MAX - (u32::MAX % CIRCULAR_SEGMENT_QUANTUM);

// =============================================================================
// ANIMATION DEFAULTS
// =============================================================================

/// Default animation length in seconds.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_ANIMATION_DURATION;
/// assert!(DEFAULT_ANIMATION_DURATION > 0.0);
/// ```
pub const DEFAULT_ANIMATION_DURATION: f64 = 1.0;

/// Default export frame rate in frames per second.
///
/// # Examples
/// ```
/// use config::constants::{DEFAULT_ANIMATION_DURATION, DEFAULT_ANIMATION_FPS};
/// assert_eq!((DEFAULT_ANIMATION_DURATION * DEFAULT_ANIMATION_FPS).round(), 30.0);
/// ```
pub const DEFAULT_ANIMATION_FPS: f64 = 30.0;

// =============================================================================
// TOLERANCE CONFIG
// =============================================================================

/// Validated snapshot of the circular tessellation tolerances.
///
/// # Examples
/// ```
/// use config::constants::ToleranceConfig;
/// let config = ToleranceConfig::default();
/// assert_eq!(config.min_angle, 10.0);
/// assert_eq!(config.segments, 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToleranceConfig {
    /// Maximum angle in degrees between adjacent segments.
    pub min_angle: f64,
    /// Minimum chord length between adjacent segments.
    pub min_edge_length: f64,
    /// Explicit segment count, 0 when unconstrained.
    pub segments: u32,
}

impl ToleranceConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// tolerances.
    ///
    /// # Examples
    /// ```
    /// use config::constants::ToleranceConfig;
    /// let cfg = ToleranceConfig::new(6.0, 0.5, 0).expect("valid config");
    /// assert_eq!(cfg.min_edge_length, 0.5);
    /// assert!(ToleranceConfig::new(0.0, 0.5, 0).is_err());
    /// ```
    pub fn new(min_angle: f64, min_edge_length: f64, segments: u32) -> Result<Self, ConfigError> {
        Ok(Self {
            min_angle: validate_min_angle(min_angle)?,
            min_edge_length: validate_min_edge_length(min_edge_length)?,
            segments,
        })
    }
}

impl Default for ToleranceConfig {
    fn default() -> Self {
        Self {
            min_angle: DEFAULT_MIN_CIRCULAR_ANGLE,
            min_edge_length: DEFAULT_MIN_CIRCULAR_EDGE_LENGTH,
            segments: DEFAULT_CIRCULAR_SEGMENTS,
        }
    }
}

/// Domain shared by every tolerance, duration, rate and radius: strictly
/// positive and finite.
///
/// # Examples
/// ```
/// use config::constants::is_positive_finite;
/// assert!(is_positive_finite(0.5));
/// assert!(!is_positive_finite(0.0));
/// assert!(!is_positive_finite(f64::NAN));
/// assert!(!is_positive_finite(f64::INFINITY));
/// ```
pub fn is_positive_finite(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Checks a minimum circular angle, returning it unchanged when valid.
///
/// # Examples
/// ```
/// use config::constants::{validate_min_angle, ConfigError};
/// assert_eq!(validate_min_angle(5.0), Ok(5.0));
/// assert_eq!(validate_min_angle(-1.0), Err(ConfigError::InvalidAngle(-1.0)));
/// ```
pub fn validate_min_angle(value: f64) -> Result<f64, ConfigError> {
    if is_positive_finite(value) {
        Ok(value)
    } else {
        Err(ConfigError::InvalidAngle(value))
    }
}

/// Checks a minimum circular edge length, returning it unchanged when valid.
///
/// # Examples
/// ```
/// use config::constants::validate_min_edge_length;
/// assert!(validate_min_edge_length(0.25).is_ok());
/// assert!(validate_min_edge_length(f64::INFINITY).is_err());
/// ```
pub fn validate_min_edge_length(value: f64) -> Result<f64, ConfigError> {
    if is_positive_finite(value) {
        Ok(value)
    } else {
        Err(ConfigError::InvalidEdgeLength(value))
    }
}

/// Error returned when invalid tolerance values are provided.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Raised when the angle is zero, negative or not finite.
    InvalidAngle(f64),
    /// Raised when the edge length is zero, negative or not finite.
    InvalidEdgeLength(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidAngle(value) => {
                write!(f, "min circular angle must be a positive finite number: {value}")
            }
            ConfigError::InvalidEdgeLength(value) => {
                write!(f, "min circular edge length must be a positive finite number: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
