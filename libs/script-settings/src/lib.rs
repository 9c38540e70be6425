//! # Script Settings
//!
//! Per-evaluation tessellation and animation settings for top-level modeling
//! scripts, and the resolver that turns them into circle segment counts.
//!
//! ## Architecture
//!
//! ```text
//! evaluate(script) → Globals → SettingsStore ── resolve(radius) → geometry kernel
//!                                     └── AnimationSettings → renderer
//! ```
//!
//! Each evaluation owns a fresh [`SettingsStore`]. Top-level scripts reach it
//! through the [`Globals`] handle; library code is handed `&mut SettingsStore`
//! and calls the same operations explicitly.
//!
//! ## Example
//!
//! ```rust
//! use script_settings::{evaluate, resolve, SettingsError};
//!
//! let evaluated = evaluate(|globals| {
//!     globals.set_min_circular_angle(10.0)?;
//!     globals.set_animation_mode("ping-pong")?;
//!     Ok::<_, SettingsError>(())
//! })
//! .unwrap();
//!
//! assert_eq!(resolve(100.0, &evaluated.settings).unwrap(), 632);
//! let frames: Vec<u32> = evaluated.settings.animation().frames().collect();
//! assert_eq!(frames.len(), 58);
//! ```

pub mod animation;
pub mod error;
pub mod globals;
pub mod segments;
pub mod store;

// Re-export public API
pub use animation::{AnimationMode, AnimationSettings};
pub use error::{SettingsError, SettingsResult};
pub use globals::{evaluate, evaluate_in, Evaluated, GlobalCall, Globals, GLOBAL_NAMES};
pub use segments::{resolve, resolve_cylinder, resolve_sphere, CircularSettings};
pub use store::SettingsStore;
