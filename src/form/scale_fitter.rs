//! Scale a target rect so it visually matches a source rect.

use crate::error::{Error, Result};
use cgmath::{ElementWise, Vector2};

/// Per-axis `source / target` scale.
pub fn fit_scale(source: Vector2<f32>, target: Vector2<f32>) -> Result<Vector2<f32>> {
    if target.x == 0.0 || target.y == 0.0 {
        return Err(Error::DegenerateTarget {
            width: target.x,
            height: target.y,
        });
    }
    Ok(source.div_element_wise(target))
}
