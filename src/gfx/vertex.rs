//! # Vertex Data Structures
//!
//! This module defines the vertex format used for flat UI meshes such as
//! rings and sectors. It is GPU-compatible and can be uploaded as-is.

/// A 2D UI vertex with position, colour and texture coordinates.
///
/// # Memory Layout
///
/// The `#[repr(C)]` attribute ensures the struct has a C-compatible memory
/// layout, which is required for GPU buffer operations.
///
/// # Fields
///
/// - `position`: position relative to the owning rect's centre [x, y]
/// - `color`: linear RGBA tint [r, g, b, a]
/// - `uv`: texture coordinates [u, v]
///
/// # Examples
///
/// ```
/// use buddy_ui::gfx::vertex::UiVertex;
///
/// let vertex = UiVertex {
///     position: [0.0, 50.0],
///     color: [1.0, 1.0, 1.0, 1.0],
///     uv: [0.0, 0.0],
/// };
/// assert_eq!(vertex.position[1], 50.0);
/// ```
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct UiVertex {
    /// Position relative to the rect centre [x, y]
    pub position: [f32; 2],
    /// Linear RGBA colour
    pub color: [f32; 4],
    /// Texture coordinates [u, v]
    pub uv: [f32; 2],
}

impl UiVertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 3] =
        wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x4, 2 => Float32x2];

    /// Returns the vertex buffer layout for wgpu rendering.
    ///
    /// - Attribute 0: Position (Float32x2)
    /// - Attribute 1: Color (Float32x4)
    /// - Attribute 2: UV (Float32x2)
    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<UiVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}
