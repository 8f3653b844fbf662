use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::components::color::Color;

/// What a primitive depicts. Renderers use it for layering and legends;
/// tests use it to count orbit rings and belts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum PrimitiveTag {
    Starfield = 0,
    AsteroidBelt,
    OrbitRing,
    Body,
    RingSystem,
    Satellite,
}

/// Unordered scatter of points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointCloud {
    pub points: Vec<Vec3>,
}

/// Polyline drawn as a loop. Generators repeat the first sample at the end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineLoop {
    pub points: Vec<Vec3>,
}

/// Parametric surface sampled on a `rows` × `cols` grid, row-major.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceMesh {
    pub rows: usize,
    pub cols: usize,
    pub points: Vec<Vec3>,
}

impl SurfaceMesh {
    /// Grid sample at (row, col).
    pub fn at(&self, row: usize, col: usize) -> Vec3 {
        self.points[row * self.cols + col]
    }

    /// Triangle list indices covering the grid, two triangles per cell.
    pub fn triangle_indices(&self) -> Vec<u32> {
        if self.rows < 2 || self.cols < 2 {
            return Vec::new();
        }
        let mut out = Vec::with_capacity((self.rows - 1) * (self.cols - 1) * 6);
        for r in 0..self.rows - 1 {
            for c in 0..self.cols - 1 {
                let a = (r * self.cols + c) as u32;
                let b = a + 1;
                let d = ((r + 1) * self.cols + c) as u32;
                let e = d + 1;
                out.extend_from_slice(&[a, d, b, b, d, e]);
            }
        }
        out
    }
}

/// Geometry payload of a primitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    PointCloud(PointCloud),
    LineLoop(LineLoop),
    SurfaceMesh(SurfaceMesh),
}

impl Geometry {
    pub fn points(&self) -> &[Vec3] {
        match self {
            Self::PointCloud(g) => &g.points,
            Self::LineLoop(g) => &g.points,
            Self::SurfaceMesh(g) => &g.points,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.points().len()
    }
}

/// Draw style. `size` is the line width for loops and the marker size for
/// point clouds; meshes ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Style {
    pub size: f32,
    pub opacity: f32,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            size: 1.0,
            opacity: 1.0,
        }
    }
}

/// One renderable object emitted by the assembler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Primitive {
    pub tag: PrimitiveTag,
    pub geometry: Geometry,
    pub color: Color,
    pub style: Style,
    /// Display name (legend / inspector key).
    pub name: Option<String>,
    /// Hover label. `None` means the primitive must not intercept pointer events.
    pub hover: Option<String>,
}

impl Primitive {
    pub fn new(tag: PrimitiveTag, geometry: Geometry, color: Color) -> Self {
        Self {
            tag,
            geometry,
            color,
            style: Style::default(),
            name: None,
            hover: None,
        }
    }

    // -- Builder pattern --

    pub fn with_style(mut self, size: f32, opacity: f32) -> Self {
        self.style = Style { size, opacity };
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_hover(mut self, hover: impl Into<String>) -> Self {
        self.hover = Some(hover.into());
        self
    }

    pub fn is_interactive(&self) -> bool {
        self.hover.is_some()
    }
}
