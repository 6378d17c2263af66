//! # Error Types
//!
//! Ring generation itself never fails: every out-of-range input is clamped.
//! The errors below come from the surrounding form glue, where a bad
//! configuration is a caller mistake worth reporting.

use thiserror::Error;

/// Errors produced by the form and configuration helpers.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// A smoothness mode name that is not one of `none`, `inside`, `outside`, `both`.
    #[error("unknown smoothness mode `{0}` (expected none, inside, outside or both)")]
    UnknownSmoothnessMode(String),

    /// The same selectable appears twice in a tab order.
    #[error("selectable {0} appears more than once in the tab order")]
    DuplicateSelectable(String),

    /// A scale fit was requested against a target with a zero-sized axis.
    #[error("cannot fit scale into a degenerate target of {width}x{height}")]
    DegenerateTarget { width: f32, height: f32 },
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
