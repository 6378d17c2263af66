//! # Animation Utilities
//!
//! Minimal frame-driven animation primitives: float tweens with easing and
//! one-shot delayed calls. Controllers hold these in `Option` slots and
//! replace them whenever a new target arrives, which kills the running tween.

pub mod tween;

pub use tween::{duration_for_speed, DelayedCall, Ease, FloatTween};
