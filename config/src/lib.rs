//! # Config Crate
//!
//! Centralized default values for script settings: circular tessellation
//! tolerances and animation export parameters. Every tunable literal is
//! defined here so the settings store and its consumers agree on defaults.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEFAULT_CIRCULAR_SEGMENTS, DEFAULT_MIN_CIRCULAR_ANGLE};
//!
//! // A zero segment count means "derive from angle and edge length"
//! let segments_override = DEFAULT_CIRCULAR_SEGMENTS;
//! let by_angle = (360.0 / DEFAULT_MIN_CIRCULAR_ANGLE).ceil() as u32;
//! let segments = if segments_override > 0 { segments_override } else { by_angle };
//! assert_eq!(segments, 36);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All defaults defined once, used everywhere
//! - **Browser-Safe**: No platform-specific values
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
