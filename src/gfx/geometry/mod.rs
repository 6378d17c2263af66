//! # Procedural Geometry Generation
//!
//! Flat UI geometry generated on the CPU and handed to the renderer as a
//! vertex/index pair.
//!
//! ## Supported Shapes
//!
//! - **Ring**: partial, feathered annular sector fitted into a rect
//!
//! ## Usage
//!
//! ```rust
//! use buddy_ui::gfx::geometry::{generate_ring, RingParameters};
//!
//! let params = RingParameters::default()
//!     .with_segment_count(32)
//!     .with_bounding_size(100.0, 100.0)
//!     .with_thickness(8.0);
//! let ring = generate_ring(&params);
//! assert!(ring.triangle_count() > 0);
//! ```

pub mod ring;

pub use ring::*;

use super::vertex::UiVertex;
use cgmath::Vector2;

/// Generated geometry ready for GPU upload
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshData {
    /// Vertices with position, colour and uv
    pub vertices: Vec<UiVertex>,
    /// Triangle indices, three per triangle
    pub indices: Vec<u32>,
}

/// GPU buffers created from a [`MeshData`]
#[derive(Debug)]
pub struct MeshBuffers {
    pub vertex_buffer: wgpu::Buffer,
    pub index_buffer: wgpu::Buffer,
    pub index_count: u32,
}

impl MeshData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(vertices: usize, indices: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertices),
            indices: Vec::with_capacity(indices),
        }
    }

    /// Get the number of vertices in this geometry
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of triangles in this geometry
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Iterate triangles as index triples
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// Copy of this mesh with every position shifted by `offset`.
    ///
    /// Used when a consumer wants rect-space positions instead of
    /// centre-relative ones.
    pub fn translated(&self, offset: Vector2<f32>) -> Self {
        let vertices = self
            .vertices
            .iter()
            .map(|v| UiVertex {
                position: [v.position[0] + offset.x, v.position[1] + offset.y],
                ..*v
            })
            .collect();

        Self {
            vertices,
            indices: self.indices.clone(),
        }
    }

    /// Upload vertices and indices into fresh GPU buffers.
    ///
    /// Returns `None` for an empty mesh, since wgpu rejects zero-sized
    /// buffer contents for drawing.
    pub fn create_buffers(&self, device: &wgpu::Device, label: &str) -> Option<MeshBuffers> {
        if self.is_empty() {
            return None;
        }

        let vertex_buffer = wgpu::util::DeviceExt::create_buffer_init(
            device,
            &wgpu::util::BufferInitDescriptor {
                label: Some(&format!("{label} Vertex Buffer")),
                contents: bytemuck::cast_slice(&self.vertices),
                usage: wgpu::BufferUsages::VERTEX,
            },
        );

        let index_buffer = wgpu::util::DeviceExt::create_buffer_init(
            device,
            &wgpu::util::BufferInitDescriptor {
                label: Some(&format!("{label} Index Buffer")),
                contents: bytemuck::cast_slice(&self.indices),
                usage: wgpu::BufferUsages::INDEX,
            },
        );

        log::trace!(
            "{label}: uploaded {} vertices, {} indices",
            self.vertices.len(),
            self.indices.len()
        );

        Some(MeshBuffers {
            vertex_buffer,
            index_buffer,
            index_count: self.indices.len() as u32,
        })
    }
}
