//! # Graphic Ring
//!
//! The owner side of ring generation. A [`GraphicRing`] holds the ring's
//! parameters and the rect it lives in, clamps values as they are set, and
//! regenerates its cached mesh only after something actually changed.

use crate::gfx::color::Color;
use crate::gfx::geometry::{
    generate_ring, MeshBuffers, MeshData, RingParameters, SmoothnessMode, MIN_SEGMENT_COUNT,
};
use cgmath::{Matrix4, Rad, Vector2, Vector3, Zero};

/// A ring widget with cached geometry.
///
/// # Examples
///
/// ```
/// use buddy_ui::gfx::GraphicRing;
/// use cgmath::Vector2;
///
/// let mut ring = GraphicRing::new(Vector2::new(0.0, 0.0), Vector2::new(64.0, 64.0));
/// ring.set_fill_amount(0.5);
/// assert!(ring.is_dirty());
/// let triangles = ring.mesh().triangle_count();
/// assert!(triangles > 0);
/// assert!(!ring.is_dirty());
/// ```
#[derive(Debug, Clone)]
pub struct GraphicRing {
    params: RingParameters,
    center: Vector2<f32>,
    rotation: Rad<f32>,
    mesh: MeshData,
    dirty: bool,
}

macro_rules! clamped_setter {
    ($(#[$doc:meta])* $name:ident, $field:ident: $ty:ty => |$v:ident| $clamp:expr) => {
        $(#[$doc])*
        pub fn $name(&mut self, $v: $ty) {
            let value = $clamp;
            if self.params.$field != value {
                self.params.$field = value;
                self.dirty = true;
            }
        }
    };
}

impl GraphicRing {
    pub fn new(center: Vector2<f32>, size: Vector2<f32>) -> Self {
        Self::with_params(
            center,
            RingParameters {
                bounding_size: size,
                ..RingParameters::default()
            },
        )
    }

    /// Create a ring from explicit parameters. The parameters are clamped
    /// immediately so getters always report usable values.
    pub fn with_params(center: Vector2<f32>, params: RingParameters) -> Self {
        Self {
            params: params.clamped(),
            center,
            rotation: Rad::zero(),
            mesh: MeshData::new(),
            dirty: true,
        }
    }

    pub fn params(&self) -> &RingParameters {
        &self.params
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Force the next [`mesh`](Self::mesh) call to regenerate.
    pub fn set_dirty(&mut self) {
        self.dirty = true;
    }

    clamped_setter!(
        /// Segment count, clamped up to the three-segment minimum.
        set_segment_count, segment_count: u32 => |count| count.max(MIN_SEGMENT_COUNT)
    );
    clamped_setter!(set_thickness, thickness: f32 => |thickness| thickness);
    clamped_setter!(set_fill_amount, fill_amount: f32 => |amount| amount.clamp(0.0, 1.0));
    clamped_setter!(
        /// Start of the sweep as a fraction of a turn, 0 being twelve o'clock.
        set_fill_start, fill_start: f32 => |start| start.clamp(0.0, 1.0)
    );
    clamped_setter!(set_smoothness, smoothness: f32 => |s| s.clamp(0.0, 1.0));
    clamped_setter!(set_smoothness_mode, smoothness_mode: SmoothnessMode => |mode| mode);
    clamped_setter!(set_clockwise, clockwise: bool => |clockwise| clockwise);
    clamped_setter!(set_tangential, tangential: bool => |tangential| tangential);
    clamped_setter!(set_color, color: Color => |color| color);
    clamped_setter!(
        /// Resize the rect. Layout transients may pass a zero size; the
        /// mesh is then left empty until a real size arrives.
        set_size, bounding_size: Vector2<f32> => |size| size
    );

    pub fn center(&self) -> Vector2<f32> {
        self.center
    }

    /// Move the ring. Positions are centre-relative so this never dirties
    /// the mesh, only the transform.
    pub fn set_center(&mut self, center: Vector2<f32>) {
        self.center = center;
    }

    pub fn rotation(&self) -> Rad<f32> {
        self.rotation
    }

    pub fn set_rotation(&mut self, rotation: impl Into<Rad<f32>>) {
        self.rotation = rotation.into();
    }

    /// Model transform for the compositor: rotate about Z, then move to the centre.
    pub fn transform(&self) -> Matrix4<f32> {
        Matrix4::from_translation(Vector3::new(self.center.x, self.center.y, 0.0))
            * Matrix4::from_angle_z(self.rotation)
    }

    /// Current mesh, regenerated first if any parameter changed.
    pub fn mesh(&mut self) -> &MeshData {
        if self.dirty {
            self.rebuild();
        }
        &self.mesh
    }

    fn rebuild(&mut self) {
        let size = self.params.bounding_size;
        if size.x <= 0.0 || size.y <= 0.0 {
            log::debug!("ring: skipping generation for zero-sized rect {}x{}", size.x, size.y);
            self.mesh = MeshData::new();
        } else {
            self.mesh = generate_ring(&self.params);
            log::debug!(
                "ring: regenerated {} vertices, {} triangles",
                self.mesh.vertex_count(),
                self.mesh.triangle_count()
            );
        }
        self.dirty = false;
    }

    /// Upload the current mesh to the GPU, regenerating it first if needed.
    pub fn upload(&mut self, device: &wgpu::Device) -> Option<MeshBuffers> {
        self.mesh().create_buffers(device, "Graphic Ring")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::{Deg, Vector4};

    fn ring() -> GraphicRing {
        GraphicRing::new(Vector2::new(10.0, 20.0), Vector2::new(100.0, 100.0))
    }

    #[test]
    fn test_mesh_is_cached_until_changed() {
        let mut ring = ring();
        assert!(ring.is_dirty());
        let first = ring.mesh().clone();
        assert!(!ring.is_dirty());

        // Same value again does not dirty
        ring.set_fill_amount(1.0);
        assert!(!ring.is_dirty());

        ring.set_fill_amount(0.5);
        assert!(ring.is_dirty());
        assert!(ring.mesh().triangle_count() < first.triangle_count());
    }

    #[test]
    fn test_setters_clamp() {
        let mut ring = ring();
        ring.set_segment_count(0);
        ring.set_fill_amount(3.0);
        ring.set_fill_start(-1.0);
        ring.set_smoothness(2.0);
        let params = ring.params();
        assert_eq!(params.segment_count, MIN_SEGMENT_COUNT);
        assert_eq!(params.fill_amount, 1.0);
        assert_eq!(params.fill_start, 0.0);
        assert_eq!(params.smoothness, 1.0);
    }

    #[test]
    fn test_thickness_is_not_clamped() {
        let mut ring = ring();
        ring.set_thickness(500.0);
        assert_eq!(ring.params().thickness, 500.0);
        assert!(!ring.mesh().is_empty());
    }

    #[test]
    fn test_zero_size_yields_empty_mesh() {
        let mut ring = ring();
        ring.set_size(Vector2::new(0.0, 0.0));
        assert!(ring.mesh().is_empty());
        ring.set_size(Vector2::new(40.0, 40.0));
        assert!(!ring.mesh().is_empty());
    }

    #[test]
    fn test_moving_does_not_dirty() {
        let mut ring = ring();
        ring.mesh();
        ring.set_center(Vector2::new(-3.0, 4.0));
        ring.set_rotation(Deg(90.0));
        assert!(!ring.is_dirty());
    }

    #[test]
    fn test_transform_rotates_then_translates() {
        let mut ring = ring();
        ring.set_rotation(Deg(90.0));
        let p = ring.transform() * Vector4::new(1.0, 0.0, 0.0, 1.0);
        assert!((p.x - 10.0).abs() < 1e-5);
        assert!((p.y - 21.0).abs() < 1e-5);
    }
}
