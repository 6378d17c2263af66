//! # Ring Mesh Generation
//!
//! Builds a partial, optionally feathered annular sector that fits a
//! rectangle. Non-square rectangles stretch the ring into an ellipse, since
//! each axis is scaled independently.
//!
//! Angles follow the UI convention where a `fill_start` of `0.0` is twelve
//! o'clock and `0.25` is a quarter turn. Every vertex position is relative to
//! the rect centre.

use super::MeshData;
use crate::error::Error;
use crate::gfx::color::Color;
use crate::gfx::vertex::UiVertex;
use cgmath::{ElementWise, Vector2, VectorSpace, Zero};
use std::f32::consts::{PI, SQRT_2};
use std::fmt;
use std::str::FromStr;

/// Smallest segment count that still encloses an area.
pub const MIN_SEGMENT_COUNT: u32 = 3;

/// Outer radius scale that takes the ring from the rect's edges to its corners.
pub const TANGENTIAL_RADIUS_FACTOR: f32 = SQRT_2;

/// Which radial edges of the ring fade out to transparent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SmoothnessMode {
    None,
    Inside,
    Outside,
    #[default]
    Both,
}

impl fmt::Display for SmoothnessMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SmoothnessMode::None => "none",
            SmoothnessMode::Inside => "inside",
            SmoothnessMode::Outside => "outside",
            SmoothnessMode::Both => "both",
        };
        f.write_str(name)
    }
}

impl FromStr for SmoothnessMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(SmoothnessMode::None),
            "inside" => Ok(SmoothnessMode::Inside),
            "outside" => Ok(SmoothnessMode::Outside),
            "both" => Ok(SmoothnessMode::Both),
            _ => Err(Error::UnknownSmoothnessMode(s.to_string())),
        }
    }
}

/// Everything needed to generate one ring mesh.
///
/// Fields are public so callers can fill them directly; [`generate_ring`]
/// clamps them before use, so out-of-range values are never an error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingParameters {
    /// Angular subdivisions of the full circle (at least 3)
    pub segment_count: u32,
    /// Radial thickness in rect units; not clamped
    pub thickness: f32,
    /// Fraction of the full turn to draw, `[0, 1]`
    pub fill_amount: f32,
    /// Where the sweep starts as a fraction of a turn, `[0, 1]`, 0 = top
    pub fill_start: f32,
    /// Fraction of the thickness spent on the feathered edge, `[0, 1]`
    pub smoothness: f32,
    pub smoothness_mode: SmoothnessMode,
    pub clockwise: bool,
    /// Push the outer radius out to the rect corners
    pub tangential: bool,
    /// Width and height of the rect the ring fits into
    pub bounding_size: Vector2<f32>,
    pub color: Color,
}

impl Default for RingParameters {
    fn default() -> Self {
        Self {
            segment_count: 64,
            thickness: 1.0,
            fill_amount: 1.0,
            fill_start: 0.0,
            smoothness: 0.5,
            smoothness_mode: SmoothnessMode::Both,
            clockwise: true,
            tangential: false,
            bounding_size: Vector2::zero(),
            color: Color::WHITE,
        }
    }
}

impl RingParameters {
    pub fn with_segment_count(mut self, segment_count: u32) -> Self {
        self.segment_count = segment_count;
        self
    }

    pub fn with_thickness(mut self, thickness: f32) -> Self {
        self.thickness = thickness;
        self
    }

    pub fn with_fill(mut self, fill_start: f32, fill_amount: f32) -> Self {
        self.fill_start = fill_start;
        self.fill_amount = fill_amount;
        self
    }

    pub fn with_smoothness(mut self, mode: SmoothnessMode, smoothness: f32) -> Self {
        self.smoothness_mode = mode;
        self.smoothness = smoothness;
        self
    }

    pub fn with_clockwise(mut self, clockwise: bool) -> Self {
        self.clockwise = clockwise;
        self
    }

    pub fn with_tangential(mut self, tangential: bool) -> Self {
        self.tangential = tangential;
        self
    }

    pub fn with_bounding_size(mut self, width: f32, height: f32) -> Self {
        self.bounding_size = Vector2::new(width, height);
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Copy with every bounded field pulled into its valid range.
    pub fn clamped(&self) -> Self {
        Self {
            segment_count: self.segment_count.max(MIN_SEGMENT_COUNT),
            fill_amount: self.fill_amount.clamp(0.0, 1.0),
            fill_start: self.fill_start.clamp(0.0, 1.0),
            smoothness: self.smoothness.clamp(0.0, 1.0),
            ..*self
        }
    }

    /// Number of segments actually drawn for the current fill amount.
    ///
    /// A partial fill rounds up; the last segment is then cut short so the
    /// sector tip lands exactly on `fill_amount`.
    pub fn drawn_segments(&self) -> u32 {
        let p = self.clamped();
        (p.segment_count as f32 * p.fill_amount).ceil() as u32
    }
}

/// One vertex position along the radial cross-section of the ring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialStop {
    /// Fraction of the inner offset subtracted from the outer position
    pub depth: f32,
    /// Texture `v`: 0 at the outer edge, 1 at the inner edge
    pub v: f32,
    pub opaque: bool,
}

/// Radial vertex layout shared by every angular step of one ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatherPlan {
    /// Opaque outer and inner edge, nothing between.
    Hard,
    /// Transparent outer edge followed by an opaque mid-outer vertex.
    Outside,
    /// Transparent inner edge, with an opaque mid-inner vertex unless the
    /// feather covers the whole thickness.
    Inside { inner_mid: bool },
    Both { inner_mid: bool },
}

impl FeatherPlan {
    pub fn new(mode: SmoothnessMode, smoothness: f32) -> Self {
        if smoothness <= 0.0 {
            return FeatherPlan::Hard;
        }
        let inner_mid = smoothness < 1.0;
        match mode {
            SmoothnessMode::None => FeatherPlan::Hard,
            SmoothnessMode::Outside => FeatherPlan::Outside,
            SmoothnessMode::Inside => FeatherPlan::Inside { inner_mid },
            SmoothnessMode::Both => FeatherPlan::Both { inner_mid },
        }
    }

    fn fades_outside(self) -> bool {
        matches!(self, FeatherPlan::Outside | FeatherPlan::Both { .. })
    }

    fn fades_inside(self) -> bool {
        matches!(self, FeatherPlan::Inside { .. } | FeatherPlan::Both { .. })
    }

    fn has_inner_mid(self) -> bool {
        matches!(
            self,
            FeatherPlan::Inside { inner_mid: true } | FeatherPlan::Both { inner_mid: true }
        )
    }

    pub fn vertices_per_step(self) -> usize {
        2 + self.fades_outside() as usize + self.has_inner_mid() as usize
    }

    /// Radial stops ordered from the outer edge inwards.
    pub fn stops(self, smoothness: f32) -> Vec<RadialStop> {
        let half = smoothness * 0.5;
        let mut stops = Vec::with_capacity(self.vertices_per_step());

        stops.push(RadialStop {
            depth: 0.0,
            v: 0.0,
            opaque: !self.fades_outside(),
        });
        if self.fades_outside() {
            stops.push(RadialStop {
                depth: half,
                v: half,
                opaque: true,
            });
        }
        if self.has_inner_mid() {
            stops.push(RadialStop {
                depth: 1.0 - half,
                v: 1.0 - half,
                opaque: true,
            });
        }
        stops.push(RadialStop {
            depth: 1.0,
            v: 1.0,
            opaque: !self.fades_inside(),
        });

        stops
    }
}

fn unit(angle: f32) -> Vector2<f32> {
    Vector2::new(angle.cos(), angle.sin())
}

/// Inner edge direction at the cut end of a partial sweep.
///
/// The tip sits on the chord of the last segment, so its angle lags the full
/// step angle and its distance from the centre shrinks towards the chord
/// midpoint. The `cos(theta/2) / cos(diff)` factor scales the inner offset
/// to that chord radius.
///
/// The angle steps back against the sweep (`sign`), so counter-clockwise
/// cuts mirror clockwise ones instead of sharing their inner angle.
fn tip_inner_direction(alpha: f32, step: f32, t: f32, theta: f32, sign: f32, start: f32) -> Vector2<f32> {
    let inner_alpha = alpha - sign * theta * (1.0 - t);
    let middle_alpha = sign * theta * (step - 0.5) + start;
    let diff_alpha = (inner_alpha - middle_alpha).abs();
    let compensation = (theta * 0.5).cos() / diff_alpha.cos();
    unit(inner_alpha) * compensation
}

/// Generate the ring mesh for `params`.
///
/// Pure and deterministic. Returns an empty mesh when nothing would be
/// visible: a zero fill or a degenerate bounding size.
pub fn generate_ring(params: &RingParameters) -> MeshData {
    let p = params.clamped();

    let half_size = p.bounding_size * 0.5;
    if !(half_size.x > 0.0 && half_size.y > 0.0) {
        return MeshData::new();
    }

    let drawn = p.drawn_segments();
    if drawn == 0 {
        return MeshData::new();
    }

    let plan = FeatherPlan::new(p.smoothness_mode, p.smoothness);
    let stops = plan.stops(p.smoothness);
    let stride = stops.len() as u32;

    let opaque = p.color.to_array();
    let faded = p.color.transparent().to_array();

    let n = p.segment_count as f32;
    // +0.25 turns the trig zero (3 o'clock) into 12 o'clock
    let start_alpha = 2.0 * PI * (p.fill_start + 0.25);
    let theta = 2.0 * PI / n;
    let radius_factor = if p.tangential { TANGENTIAL_RADIUS_FACTOR } else { 1.0 };
    let sign = if p.clockwise { 1.0 } else { -1.0 };

    let step_count = drawn as usize + 1;
    let mut mesh = MeshData::with_capacity(
        step_count * stride as usize,
        drawn as usize * (stride as usize - 1) * 6,
    );

    let mut prev_pos = Vector2::zero();
    for i in 0..=drawn {
        let step = i as f32;
        let u = step / n;
        let alpha = sign * theta * step + start_alpha;
        let dir = unit(alpha) * radius_factor;
        let mut pos = dir.mul_element_wise(half_size);

        let inner_dir = if i == drawn {
            let t = (p.fill_amount - (step - 1.0) / n) * n;
            pos = prev_pos.lerp(pos, t);
            tip_inner_direction(alpha, step, t, theta, sign, start_alpha) * radius_factor
        } else {
            dir
        };
        prev_pos = pos;

        let inner_offset = inner_dir * p.thickness;
        for stop in &stops {
            let position = pos - inner_offset * stop.depth;
            mesh.vertices.push(UiVertex {
                position: position.into(),
                color: if stop.opaque { opaque } else { faded },
                uv: [u, stop.v],
            });
        }
    }

    for segment in 0..drawn {
        let outer = segment * stride;
        let next = outer + stride;
        for band in 0..stride - 1 {
            let a = outer + band;
            let b = next + band;
            mesh.indices.extend_from_slice(&[a, a + 1, b + 1, b + 1, b, a]);
        }
    }

    log::trace!(
        "ring: {drawn}/{} segments, {:?}, {} vertices, {} triangles",
        p.segment_count,
        plan,
        mesh.vertex_count(),
        mesh.triangle_count()
    );

    mesh
}
