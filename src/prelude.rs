//! # Buddy UI Prelude
//!
//! Commonly used types in one import.
//!
//! ```rust
//! use buddy_ui::prelude::*;
//!
//! let params = RingParameters::default()
//!     .with_bounding_size(64.0, 64.0)
//!     .with_smoothness(SmoothnessMode::None, 0.0)
//!     .with_fill(0.0, 0.25);
//! let mesh = generate_ring(&params);
//! assert_eq!(mesh.triangle_count(), 32);
//! ```

// Re-export ring generation
pub use crate::gfx::geometry::{generate_ring, FeatherPlan, MeshData, RingParameters, SmoothnessMode};
pub use crate::gfx::{Color, GraphicRing, UiVertex};

// Re-export form and buddy state machines
pub use crate::buddy::{AnimatorParams, BuddyConfig, BuddyController, Field, FormEvent};
pub use crate::form::{
    FocusTracker, FormCommand, FormPresenter, InputTracker, PasswordVisibility, PlaceholderController,
    TabNavigator,
};

// Re-export animation helpers
pub use crate::animation::{DelayedCall, Ease, FloatTween};

pub use crate::error::{Error, Result};

// Re-export common external dependencies
pub use cgmath::Vector2;
