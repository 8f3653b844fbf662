pub mod color;
pub mod primitive;

pub use color::Color;
pub use primitive::{Geometry, LineLoop, PointCloud, Primitive, PrimitiveTag, Style, SurfaceMesh};
