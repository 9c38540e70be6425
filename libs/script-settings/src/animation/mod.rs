//! # Animation Settings
//!
//! Duration, frame rate and repeat mode read by the export pipeline, plus the
//! frame index sequence derived from them.
//!
//! ## Frame Sequencing
//!
//! ```text
//! frame_count = max(1, round(duration * fps))
//! loop:       0, 1, .., n-1, 0, 1, ..
//! ping-pong:  0, 1, .., n-1, n-2, .., 1, 0, 1, ..
//! ```

use std::fmt;
use std::str::FromStr;

use config::constants::{is_positive_finite, DEFAULT_ANIMATION_DURATION, DEFAULT_ANIMATION_FPS};
use serde::{Deserialize, Serialize};

use crate::error::{SettingsError, SettingsResult};

// =============================================================================
// ANIMATION MODE
// =============================================================================

/// Frame sequencing policy for exported animations.
///
/// Parses from and serializes to the script-facing names `"loop"` and
/// `"ping-pong"`.
///
/// ```rust
/// use script_settings::AnimationMode;
///
/// let mode: AnimationMode = "ping-pong".parse().unwrap();
/// assert_eq!(mode, AnimationMode::PingPong);
/// assert_eq!(AnimationMode::Loop.to_string(), "loop");
/// assert!("bounce".parse::<AnimationMode>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnimationMode {
    /// Replay frames forward only.
    #[default]
    Loop,
    /// Play forward, then backward, repeatedly.
    PingPong,
}

impl AnimationMode {
    /// Script-facing name of the mode.
    pub fn as_str(self) -> &'static str {
        match self {
            AnimationMode::Loop => "loop",
            AnimationMode::PingPong => "ping-pong",
        }
    }
}

impl fmt::Display for AnimationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnimationMode {
    type Err = SettingsError;

    fn from_str(s: &str) -> SettingsResult<Self> {
        match s {
            "loop" => Ok(AnimationMode::Loop),
            "ping-pong" => Ok(AnimationMode::PingPong),
            other => Err(SettingsError::invalid(
                "mode",
                format!("{other:?}"),
                "must be 'loop' or 'ping-pong'",
            )),
        }
    }
}

// =============================================================================
// VALIDATION
// =============================================================================

pub(crate) fn validate_duration(seconds: f64) -> SettingsResult<f64> {
    if is_positive_finite(seconds) {
        Ok(seconds)
    } else {
        Err(SettingsError::invalid(
            "duration",
            seconds,
            "must be a positive finite number of seconds",
        ))
    }
}

pub(crate) fn validate_fps(fps: f64) -> SettingsResult<f64> {
    if is_positive_finite(fps) {
        Ok(fps)
    } else {
        Err(SettingsError::invalid("fps", fps, "must be a positive finite frame rate"))
    }
}

// =============================================================================
// ANIMATION SETTINGS
// =============================================================================

/// Animation parameters for one script evaluation.
///
/// Fields are private so every instance satisfies `duration > 0` and
/// `fps > 0`; deserialization runs the same checks as the setters.
///
/// ```rust
/// use script_settings::{AnimationMode, AnimationSettings};
///
/// let anim = AnimationSettings::new(2.0, 24.0, AnimationMode::PingPong).unwrap();
/// assert_eq!(anim.frame_count(), 48);
/// assert_eq!(anim.period(), 94);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawAnimationSettings")]
pub struct AnimationSettings {
    duration: f64,
    fps: f64,
    mode: AnimationMode,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawAnimationSettings {
    duration: f64,
    fps: f64,
    #[serde(default)]
    mode: AnimationMode,
}

impl TryFrom<RawAnimationSettings> for AnimationSettings {
    type Error = SettingsError;

    fn try_from(raw: RawAnimationSettings) -> SettingsResult<Self> {
        Self::new(raw.duration, raw.fps, raw.mode)
    }
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            duration: DEFAULT_ANIMATION_DURATION,
            fps: DEFAULT_ANIMATION_FPS,
            mode: AnimationMode::Loop,
        }
    }
}

impl AnimationSettings {
    /// Creates validated animation settings.
    pub fn new(duration: f64, fps: f64, mode: AnimationMode) -> SettingsResult<Self> {
        Ok(Self {
            duration: validate_duration(duration)?,
            fps: validate_fps(fps)?,
            mode,
        })
    }

    /// Total animation length in seconds.
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Sampling rate in frames per second.
    pub fn fps(&self) -> f64 {
        self.fps
    }

    /// Frame sequencing policy.
    pub fn mode(&self) -> AnimationMode {
        self.mode
    }

    pub(crate) fn set_duration(&mut self, seconds: f64) -> SettingsResult<()> {
        self.duration = validate_duration(seconds)?;
        Ok(())
    }

    pub(crate) fn set_fps(&mut self, fps: f64) -> SettingsResult<()> {
        self.fps = validate_fps(fps)?;
        Ok(())
    }

    pub(crate) fn set_mode(&mut self, mode: AnimationMode) {
        self.mode = mode;
    }

    /// Number of distinct frames: `round(duration * fps)`, never below 1.
    pub fn frame_count(&self) -> u32 {
        // Float-to-int `as` saturates, so absurd products cap at u32::MAX.
        ((self.duration * self.fps).round() as u32).max(1)
    }

    /// Length of one repeat cycle of the frame sequence.
    pub fn period(&self) -> u64 {
        let n = u64::from(self.frame_count());
        match self.mode {
            AnimationMode::Loop => n,
            AnimationMode::PingPong if n >= 2 => 2 * n - 2,
            AnimationMode::PingPong => 1,
        }
    }

    /// Frame indices for one cycle, in playback order.
    ///
    /// ```rust
    /// use script_settings::{AnimationMode, AnimationSettings};
    ///
    /// let anim = AnimationSettings::new(0.1, 40.0, AnimationMode::PingPong).unwrap();
    /// let frames: Vec<u32> = anim.frames().collect();
    /// assert_eq!(frames, vec![0, 1, 2, 3, 2, 1]);
    /// ```
    pub fn frames(&self) -> impl Iterator<Item = u32> {
        let n = self.frame_count();
        let backward = match self.mode {
            AnimationMode::Loop => 0..0,
            AnimationMode::PingPong => 1..n.saturating_sub(1),
        };
        (0..n).chain(backward.rev())
    }

    /// Frame index shown at an unbounded playback step, repeating the cycle.
    pub fn frame_at(&self, step: u64) -> u32 {
        let n = u64::from(self.frame_count());
        let i = step % self.period();
        let index = if i < n { i } else { 2 * n - 2 - i };
        // index < n <= u32::MAX
        index as u32
    }

    /// Timestamp in seconds of a frame index.
    pub fn frame_time(&self, index: u32) -> f64 {
        f64::from(index) / self.fps
    }
}

#[cfg(test)]
mod tests;
