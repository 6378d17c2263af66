//! # Graphics Module
//!
//! CPU-side generation of flat UI geometry and its GPU vertex format.
//!
//! ## Architecture Overview
//!
//! - **Geometry** ([`geometry`]) - Procedural meshes, most notably the ring/sector
//! - **Graphic Ring** ([`graphic_ring`]) - Cached, dirty-tracked ring widget
//! - **Vertex Format** ([`vertex`]) - `UiVertex` and its wgpu layout
//! - **Colour** ([`color`]) - RGBA tint shared by vertices and widgets
//!
//! ## Usage
//!
//! ```
//! use buddy_ui::gfx::{GraphicRing, geometry::SmoothnessMode};
//! use cgmath::Vector2;
//!
//! let mut ring = GraphicRing::new(Vector2::new(0.0, 0.0), Vector2::new(120.0, 120.0));
//! ring.set_thickness(12.0);
//! ring.set_smoothness_mode(SmoothnessMode::Outside);
//! let mesh = ring.mesh();
//! assert_eq!(mesh.vertex_count() % 3, 0);
//! ```

pub mod color;
pub mod geometry;
pub mod graphic_ring;
pub mod vertex;

// Re-export commonly used types
pub use color::Color;
pub use geometry::{generate_ring, MeshBuffers, MeshData, RingParameters, SmoothnessMode};
pub use graphic_ring::GraphicRing;
pub use vertex::UiVertex;
