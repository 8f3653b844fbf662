use bytemuck::{Pod, Zeroable};

use crate::components::primitive::{Geometry, Primitive};

/// Geometry kind code written into [`PrimitiveRecord::kind`].
pub const KIND_POINT_CLOUD: f32 = 0.0;
pub const KIND_LINE_LOOP: f32 = 1.0;
pub const KIND_SURFACE_MESH: f32 = 2.0;

/// One geometry sample on the wire: 3 floats = 12 bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vertex {
    pub const FLOATS: usize = 3;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Per-primitive draw record: 12 floats = 48 bytes.
///
/// Vertex offsets index into the vertex section, in vertices (not floats).
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct PrimitiveRecord {
    pub kind: f32,
    pub tag: f32,
    pub vertex_offset: f32,
    pub vertex_count: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
    /// Line width or marker size.
    pub size: f32,
    pub opacity: f32,
    /// Surface grid rows (0 for points and lines).
    pub rows: f32,
    /// Surface grid columns (0 for points and lines).
    pub cols: f32,
}

impl PrimitiveRecord {
    pub const FLOATS: usize = 12;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;

    /// Describe `primitive` whose samples start at `vertex_offset`.
    pub fn describe(primitive: &Primitive, vertex_offset: usize) -> Self {
        let (kind, rows, cols) = match &primitive.geometry {
            Geometry::PointCloud(_) => (KIND_POINT_CLOUD, 0, 0),
            Geometry::LineLoop(_) => (KIND_LINE_LOOP, 0, 0),
            Geometry::SurfaceMesh(m) => (KIND_SURFACE_MESH, m.rows, m.cols),
        };
        Self {
            kind,
            tag: primitive.tag as u8 as f32,
            vertex_offset: vertex_offset as f32,
            vertex_count: primitive.geometry.vertex_count() as f32,
            r: primitive.color.r,
            g: primitive.color.g,
            b: primitive.color.b,
            a: primitive.color.a,
            size: primitive.style.size,
            opacity: primitive.style.opacity,
            rows: rows as f32,
            cols: cols as f32,
        }
    }
}
