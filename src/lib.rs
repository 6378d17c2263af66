// src/lib.rs
//! Buddy UI
//!
//! Ring/sector mesh generation for flat UI graphics, plus the host-driven
//! state machines behind an animated login form buddy.

pub mod animation;
pub mod buddy;
pub mod error;
pub mod form;
pub mod gfx;
pub mod prelude;

// Re-export main types for convenience
pub use error::{Error, Result};
pub use gfx::geometry::{generate_ring, RingParameters, SmoothnessMode};
pub use gfx::GraphicRing;
