//! # Circular Segment Resolution
//!
//! Converts the circular tessellation tolerances into the number of straight
//! segments used to approximate a circle of a given radius.
//!
//! ## Algorithm
//!
//! ```text
//! if segments > 0:
//!     return segments
//! else:
//!     by_angle  = ceil(360 / min_angle)
//!     by_length = ceil(2 * PI * radius / min_edge_length)
//!     return round_up_to_multiple_of_4(max(by_angle, by_length))
//! ```
//!
//! The larger bound wins: the angle bound keeps small shapes from looking
//! faceted, the length bound refines large ones. An explicit count is returned
//! untouched.

use std::f64::consts::TAU;

use config::constants::{
    is_positive_finite, ToleranceConfig, CIRCULAR_SEGMENT_QUANTUM, DEFAULT_CIRCULAR_SEGMENTS,
    DEFAULT_MIN_CIRCULAR_ANGLE, DEFAULT_MIN_CIRCULAR_EDGE_LENGTH, MAX_CIRCULAR_SEGMENTS,
};
use serde::{Deserialize, Serialize};

use crate::error::{SettingsError, SettingsResult};
use crate::store::SettingsStore;

// =============================================================================
// CIRCULAR SETTINGS
// =============================================================================

/// Circular tessellation tolerances.
///
/// A `Copy` snapshot the geometry kernel can hold without borrowing the
/// store. Every instance satisfies `min_angle > 0` and `min_edge_length > 0`.
///
/// ## Example
///
/// ```rust
/// use script_settings::CircularSettings;
///
/// let settings = CircularSettings::default();
/// assert_eq!(settings.segments_for(5.0).unwrap(), 36);
/// assert_eq!(settings.segments_for(100.0).unwrap(), 632);
///
/// let fixed = CircularSettings::new(10.0, 1.0, 7).unwrap();
/// assert_eq!(fixed.segments_for(100.0).unwrap(), 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCircularSettings")]
pub struct CircularSettings {
    #[serde(rename = "minCircularAngle")]
    min_angle: f64,
    #[serde(rename = "minCircularEdgeLength")]
    min_edge_length: f64,
    #[serde(rename = "circularSegments")]
    segments: u32,
}

#[derive(Deserialize)]
struct RawCircularSettings {
    #[serde(rename = "minCircularAngle")]
    min_angle: f64,
    #[serde(rename = "minCircularEdgeLength")]
    min_edge_length: f64,
    #[serde(rename = "circularSegments", default)]
    segments: u32,
}

impl TryFrom<RawCircularSettings> for CircularSettings {
    type Error = SettingsError;

    fn try_from(raw: RawCircularSettings) -> SettingsResult<Self> {
        Self::new(raw.min_angle, raw.min_edge_length, raw.segments)
    }
}

impl From<ToleranceConfig> for CircularSettings {
    fn from(cfg: ToleranceConfig) -> Self {
        Self {
            min_angle: cfg.min_angle,
            min_edge_length: cfg.min_edge_length,
            segments: cfg.segments,
        }
    }
}

impl Default for CircularSettings {
    fn default() -> Self {
        Self {
            min_angle: DEFAULT_MIN_CIRCULAR_ANGLE,
            min_edge_length: DEFAULT_MIN_CIRCULAR_EDGE_LENGTH,
            segments: DEFAULT_CIRCULAR_SEGMENTS,
        }
    }
}

impl CircularSettings {
    /// Creates validated settings. A `segments` of 0 leaves the count to the
    /// angle and edge-length tolerances.
    pub fn new(min_angle: f64, min_edge_length: f64, segments: u32) -> SettingsResult<Self> {
        Ok(ToleranceConfig::new(min_angle, min_edge_length, segments)?.into())
    }

    /// Maximum angle in degrees between adjacent segments.
    pub fn min_angle(&self) -> f64 {
        self.min_angle
    }

    /// Minimum chord length between adjacent segments.
    pub fn min_edge_length(&self) -> f64 {
        self.min_edge_length
    }

    /// Explicit segment count, 0 when unconstrained.
    pub fn segments(&self) -> u32 {
        self.segments
    }

    /// Whether an explicit segment count bypasses the tolerances.
    pub fn is_override_active(&self) -> bool {
        self.segments > 0
    }

    /// Whether all three fields hold their defaults.
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    pub(crate) fn set_min_angle(&mut self, value: f64) {
        self.min_angle = value;
    }

    pub(crate) fn set_min_edge_length(&mut self, value: f64) {
        self.min_edge_length = value;
    }

    pub(crate) fn set_segments(&mut self, value: u32) {
        self.segments = value;
    }

    /// Number of segments for a full circle of `radius`.
    ///
    /// Returns [`SettingsError::PreconditionViolation`] unless `radius` is
    /// positive and finite. Derived counts are multiples of 4 and saturate
    /// at [`MAX_CIRCULAR_SEGMENTS`].
    pub fn segments_for(&self, radius: f64) -> SettingsResult<u32> {
        require_positive("radius", radius)?;

        if self.segments > 0 {
            return Ok(self.segments);
        }

        let by_angle = (360.0 / self.min_angle).ceil();
        let by_length = (TAU * radius / self.min_edge_length).ceil();

        Ok(round_up_to_quantum(by_angle.max(by_length)))
    }
}

fn require_positive(parameter: &'static str, value: f64) -> SettingsResult<f64> {
    if is_positive_finite(value) {
        Ok(value)
    } else {
        Err(SettingsError::precondition(
            parameter,
            value,
            "must be a positive finite number",
        ))
    }
}

fn round_up_to_quantum(raw: f64) -> u32 {
    if raw >= f64::from(MAX_CIRCULAR_SEGMENTS) {
        return MAX_CIRCULAR_SEGMENTS;
    }
    // raw >= 1 here since both bounds are ceilings of positive ratios
    let raw = (raw as u32).max(1);
    raw.next_multiple_of(CIRCULAR_SEGMENT_QUANTUM)
}

// =============================================================================
// RESOLVER ENTRY POINTS
// =============================================================================

/// Resolves the segment count for a circle of `radius` from the store's
/// current tessellation fields.
///
/// ```rust
/// use script_settings::{resolve, SettingsStore};
///
/// let mut store = SettingsStore::new();
/// assert_eq!(resolve(5.0, &store).unwrap(), 36);
///
/// store.set_circular_segments(7);
/// assert_eq!(resolve(5.0, &store).unwrap(), 7);
///
/// assert!(resolve(0.0, &store).is_err());
/// ```
pub fn resolve(radius: f64, store: &SettingsStore) -> SettingsResult<u32> {
    store.circular().segments_for(radius)
}

/// Segments around a cylinder or cone, taken from the wider end.
///
/// Either radius may be zero (a cone apex) but not both; negative or
/// non-finite radii are rejected.
pub fn resolve_cylinder(
    radius_low: f64,
    radius_high: f64,
    store: &SettingsStore,
) -> SettingsResult<u32> {
    for (parameter, value) in [("radius_low", radius_low), ("radius_high", radius_high)] {
        if !(value.is_finite() && value >= 0.0) {
            return Err(SettingsError::precondition(
                parameter,
                value,
                "must be a non-negative finite number",
            ));
        }
    }
    resolve(radius_low.max(radius_high), store)
}

/// Segments around a sphere's equator and the number of latitude rings.
///
/// Rings are half the equator count, never fewer than 2.
pub fn resolve_sphere(radius: f64, store: &SettingsStore) -> SettingsResult<(u32, u32)> {
    let segments = resolve(radius, store)?;
    Ok((segments, (segments / 2).max(2)))
}
