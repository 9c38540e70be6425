//! Settings store holding tessellation and animation parameters for one
//! script evaluation.
//!
//! The store is the explicit, importable configuration API: library code that
//! wants to change circular resolution or animation timing receives a
//! `&mut SettingsStore` and calls these methods directly.

use config::constants::{validate_min_angle, validate_min_edge_length};
use serde::{Deserialize, Serialize};

use crate::animation::{AnimationMode, AnimationSettings};
use crate::error::{SettingsError, SettingsResult};
use crate::segments::{self, CircularSettings};

/// Current tessellation and animation parameters.
///
/// Setters validate before writing; a rejected value leaves every field
/// untouched. Repeated calls to the same setter are last-writer-wins.
///
/// # Examples
/// ```
/// use script_settings::{AnimationMode, SettingsStore};
/// let mut store = SettingsStore::new();
/// store.set_min_circular_angle(5.0).unwrap();
/// store.set_circular_segments(24);
/// assert_eq!(store.resolve_segments(10.0).unwrap(), 24);
///
/// store.reset_to_circular_defaults();
/// assert_eq!(store.resolve_segments(10.0).unwrap(), 64);
///
/// store.set_animation_mode(AnimationMode::PingPong);
/// assert_eq!(store.animation().mode(), AnimationMode::PingPong);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SettingsStore {
    circular: CircularSettings,
    #[serde(default)]
    animation: AnimationSettings,
}

impl SettingsStore {
    /// Creates a store holding every default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Tessellation fields as a `Copy` snapshot.
    pub fn circular(&self) -> CircularSettings {
        self.circular
    }

    /// Animation fields as a `Copy` snapshot.
    pub fn animation(&self) -> AnimationSettings {
        self.animation
    }

    /// Maximum angle in degrees between adjacent circle segments.
    pub fn min_circular_angle(&self) -> f64 {
        self.circular.min_angle()
    }

    /// Minimum chord length between adjacent circle segments.
    pub fn min_circular_edge_length(&self) -> f64 {
        self.circular.min_edge_length()
    }

    /// Explicit segment count, 0 when unconstrained.
    pub fn circular_segments(&self) -> u32 {
        self.circular.segments()
    }

    /// Whether an explicit segment count is in force.
    pub fn is_override_active(&self) -> bool {
        self.circular.is_override_active()
    }

    /// Sets the angle tolerance in degrees. Does not clear an active
    /// segment override.
    pub fn set_min_circular_angle(&mut self, angle: f64) -> SettingsResult<()> {
        let angle = validate_min_angle(angle)
            .map_err(SettingsError::from)
            .inspect_err(|err| log::warn!("setMinCircularAngle rejected: {err}"))?;
        log::debug!("setMinCircularAngle({angle})");
        self.circular.set_min_angle(angle);
        Ok(())
    }

    /// Sets the edge-length tolerance. Does not clear an active segment
    /// override.
    pub fn set_min_circular_edge_length(&mut self, length: f64) -> SettingsResult<()> {
        let length = validate_min_edge_length(length)
            .map_err(SettingsError::from)
            .inspect_err(|err| log::warn!("setMinCircularEdgeLength rejected: {err}"))?;
        log::debug!("setMinCircularEdgeLength({length})");
        self.circular.set_min_edge_length(length);
        Ok(())
    }

    /// Forces exactly `segments` segments per circle; 0 reverts to the
    /// angle and edge-length tolerances.
    pub fn set_circular_segments(&mut self, segments: u32) {
        log::debug!("setCircularSegments({segments})");
        self.circular.set_segments(segments);
    }

    /// Restores angle, edge length and segment override to their defaults.
    /// Animation fields are left alone.
    pub fn reset_to_circular_defaults(&mut self) {
        log::trace!("resetToCircularDefaults");
        self.circular = CircularSettings::default();
    }

    /// Sets the animation length in seconds.
    pub fn set_animation_duration(&mut self, seconds: f64) -> SettingsResult<()> {
        self.animation
            .set_duration(seconds)
            .inspect_err(|err| log::warn!("setAnimationDuration rejected: {err}"))?;
        log::debug!("setAnimationDuration({seconds})");
        Ok(())
    }

    /// Sets the export frame rate.
    pub fn set_animation_fps(&mut self, fps: f64) -> SettingsResult<()> {
        self.animation
            .set_fps(fps)
            .inspect_err(|err| log::warn!("setAnimationFPS rejected: {err}"))?;
        log::debug!("setAnimationFPS({fps})");
        Ok(())
    }

    /// Sets the frame sequencing policy.
    pub fn set_animation_mode(&mut self, mode: AnimationMode) {
        log::debug!("setAnimationMode({mode})");
        self.animation.set_mode(mode);
    }

    /// Restores every field, animation included.
    pub fn reset(&mut self) {
        log::trace!("settings store reset");
        *self = Self::default();
    }

    /// Segment count for a circle of `radius` under the current settings.
    pub fn resolve_segments(&self, radius: f64) -> SettingsResult<u32> {
        segments::resolve(radius, self)
    }
}
