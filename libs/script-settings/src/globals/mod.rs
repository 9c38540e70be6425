//! # Script Globals
//!
//! The implicit-context surface handed to top-level scripts.
//!
//! A [`Globals`] handle can only be obtained from [`evaluate`] or
//! [`evaluate_in`], which own the per-evaluation [`SettingsStore`]. Library
//! modules never see it; they take a `&mut SettingsStore` explicitly.
//!
//! ## Script Names
//!
//! | Call | Argument |
//! |------|----------|
//! | `resetToCircularDefaults` | none |
//! | `setAnimationDuration` | seconds > 0 |
//! | `setAnimationFPS` | fps > 0 |
//! | `setAnimationMode` | `"loop"` or `"ping-pong"` |
//! | `setCircularSegments` | integer >= 0 |
//! | `setMinCircularAngle` | degrees > 0 |
//! | `setMinCircularEdgeLength` | length > 0 |

use serde::{Deserialize, Serialize};

use crate::animation::AnimationMode;
use crate::error::{SettingsError, SettingsResult};
use crate::store::SettingsStore;

/// Script-facing names of every global call.
pub const GLOBAL_NAMES: [&str; 7] = [
    "resetToCircularDefaults",
    "setAnimationDuration",
    "setAnimationFPS",
    "setAnimationMode",
    "setCircularSegments",
    "setMinCircularAngle",
    "setMinCircularEdgeLength",
];

// =============================================================================
// DYNAMIC CALLS
// =============================================================================

/// One global call as it arrives from a script host.
///
/// Arguments are raw script values, so numeric arguments are `f64` and the
/// animation mode is a string; [`Globals::dispatch`] validates them.
///
/// ```rust
/// use script_settings::GlobalCall;
///
/// let call: GlobalCall =
///     serde_json::from_str(r#"{"call": "setCircularSegments", "arg": 12}"#).unwrap();
/// assert_eq!(call, GlobalCall::SetCircularSegments(12.0));
///
/// let call: GlobalCall =
///     serde_json::from_str(r#"{"call": "resetToCircularDefaults"}"#).unwrap();
/// assert_eq!(call.name(), "resetToCircularDefaults");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "call", content = "arg")]
pub enum GlobalCall {
    /// `resetToCircularDefaults()`
    #[serde(rename = "resetToCircularDefaults")]
    ResetToCircularDefaults,
    /// `setAnimationDuration(duration)`
    #[serde(rename = "setAnimationDuration")]
    SetAnimationDuration(f64),
    /// `setAnimationFPS(fps)`
    #[serde(rename = "setAnimationFPS")]
    SetAnimationFps(f64),
    /// `setAnimationMode(mode)`
    #[serde(rename = "setAnimationMode")]
    SetAnimationMode(String),
    /// `setCircularSegments(segments)`
    #[serde(rename = "setCircularSegments")]
    SetCircularSegments(f64),
    /// `setMinCircularAngle(angle)`
    #[serde(rename = "setMinCircularAngle")]
    SetMinCircularAngle(f64),
    /// `setMinCircularEdgeLength(length)`
    #[serde(rename = "setMinCircularEdgeLength")]
    SetMinCircularEdgeLength(f64),
}

impl GlobalCall {
    /// Script-facing name of the call.
    pub fn name(&self) -> &'static str {
        match self {
            GlobalCall::ResetToCircularDefaults => GLOBAL_NAMES[0],
            GlobalCall::SetAnimationDuration(_) => GLOBAL_NAMES[1],
            GlobalCall::SetAnimationFps(_) => GLOBAL_NAMES[2],
            GlobalCall::SetAnimationMode(_) => GLOBAL_NAMES[3],
            GlobalCall::SetCircularSegments(_) => GLOBAL_NAMES[4],
            GlobalCall::SetMinCircularAngle(_) => GLOBAL_NAMES[5],
            GlobalCall::SetMinCircularEdgeLength(_) => GLOBAL_NAMES[6],
        }
    }
}

fn segment_count(value: f64) -> SettingsResult<u32> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= f64::from(u32::MAX) {
        Ok(value as u32)
    } else {
        Err(SettingsError::invalid(
            "segments",
            value,
            "must be a non-negative integer",
        ))
    }
}

// =============================================================================
// GLOBALS HANDLE
// =============================================================================

/// Global settings calls available to one top-level script evaluation.
#[derive(Debug)]
pub struct Globals<'a> {
    store: &'a mut SettingsStore,
}

impl<'a> Globals<'a> {
    fn new(store: &'a mut SettingsStore) -> Self {
        Self { store }
    }

    /// `resetToCircularDefaults()`
    pub fn reset_to_circular_defaults(&mut self) {
        self.store.reset_to_circular_defaults();
    }

    /// `setAnimationDuration(duration)`
    pub fn set_animation_duration(&mut self, duration: f64) -> SettingsResult<()> {
        self.store.set_animation_duration(duration)
    }

    /// `setAnimationFPS(fps)`
    pub fn set_animation_fps(&mut self, fps: f64) -> SettingsResult<()> {
        self.store.set_animation_fps(fps)
    }

    /// `setAnimationMode(mode)`
    pub fn set_animation_mode(&mut self, mode: &str) -> SettingsResult<()> {
        let mode = mode
            .parse::<AnimationMode>()
            .inspect_err(|err| log::warn!("setAnimationMode rejected: {err}"))?;
        self.store.set_animation_mode(mode);
        Ok(())
    }

    /// `setCircularSegments(segments)`
    ///
    /// Script numbers are floats; negative, fractional and non-finite values
    /// are rejected before the store is touched.
    pub fn set_circular_segments(&mut self, segments: f64) -> SettingsResult<()> {
        let segments = segment_count(segments)
            .inspect_err(|err| log::warn!("setCircularSegments rejected: {err}"))?;
        self.store.set_circular_segments(segments);
        Ok(())
    }

    /// `setMinCircularAngle(angle)`
    pub fn set_min_circular_angle(&mut self, angle: f64) -> SettingsResult<()> {
        self.store.set_min_circular_angle(angle)
    }

    /// `setMinCircularEdgeLength(length)`
    pub fn set_min_circular_edge_length(&mut self, length: f64) -> SettingsResult<()> {
        self.store.set_min_circular_edge_length(length)
    }

    /// Applies a call received from a script host.
    pub fn dispatch(&mut self, call: &GlobalCall) -> SettingsResult<()> {
        match call {
            GlobalCall::ResetToCircularDefaults => {
                self.reset_to_circular_defaults();
                Ok(())
            }
            GlobalCall::SetAnimationDuration(value) => self.set_animation_duration(*value),
            GlobalCall::SetAnimationFps(value) => self.set_animation_fps(*value),
            GlobalCall::SetAnimationMode(mode) => self.set_animation_mode(mode),
            GlobalCall::SetCircularSegments(value) => self.set_circular_segments(*value),
            GlobalCall::SetMinCircularAngle(value) => self.set_min_circular_angle(*value),
            GlobalCall::SetMinCircularEdgeLength(value) => {
                self.set_min_circular_edge_length(*value)
            }
        }
    }

    /// Segment count for a circular primitive the script is about to build.
    pub fn resolve_segments(&self, radius: f64) -> SettingsResult<u32> {
        self.store.resolve_segments(radius)
    }

    /// Read access to the evaluation's settings.
    pub fn settings(&self) -> &SettingsStore {
        &*self.store
    }

    /// The explicit store reference to pass into library code.
    pub fn settings_mut(&mut self) -> &mut SettingsStore {
        &mut *self.store
    }
}

// =============================================================================
// EVALUATION
// =============================================================================

/// Result of one top-level script evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluated<T> {
    /// Whatever the script produced.
    pub output: T,
    /// Settings as the script left them, for the renderer.
    pub settings: SettingsStore,
}

/// Runs a top-level script against a fresh settings store.
///
/// The first error the script returns halts the evaluation and is passed
/// through unchanged.
///
/// ```rust
/// use script_settings::{evaluate, SettingsError};
///
/// let evaluated = evaluate(|globals| {
///     globals.set_animation_duration(2.0)?;
///     globals.set_animation_fps(24.0)?;
///     globals.resolve_segments(5.0)
/// })
/// .unwrap();
/// assert_eq!(evaluated.output, 36);
/// assert_eq!(evaluated.settings.animation().frame_count(), 48);
///
/// let failed = evaluate(|globals| globals.set_min_circular_angle(0.0));
/// assert!(matches!(failed, Err(SettingsError::InvalidParameter { .. })));
/// ```
pub fn evaluate<T, E, F>(script: F) -> Result<Evaluated<T>, E>
where
    F: FnOnce(&mut Globals<'_>) -> Result<T, E>,
{
    let mut settings = SettingsStore::new();
    let output = evaluate_in(&mut settings, script)?;
    Ok(Evaluated { output, settings })
}

/// Runs a top-level script against a host-owned store, resetting it first
/// so nothing leaks in from an earlier evaluation.
pub fn evaluate_in<T, E, F>(settings: &mut SettingsStore, script: F) -> Result<T, E>
where
    F: FnOnce(&mut Globals<'_>) -> Result<T, E>,
{
    settings.reset();
    log::debug!("script evaluation started");
    let mut globals = Globals::new(settings);
    let result = script(&mut globals);
    match &result {
        Ok(_) => log::debug!("script evaluation finished"),
        Err(_) => log::debug!("script evaluation halted by error"),
    }
    result
}

#[cfg(test)]
mod tests;
