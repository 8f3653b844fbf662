pub mod api;
pub mod bridge;
pub mod catalog;
pub mod components;
pub mod core;
pub mod error;
pub mod renderer;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::assembler::SceneAssembler;
pub use api::types::{ParticlePolicy, SceneOptions};
pub use bridge::protocol::{frame_to_json, pack_frame, FrameBuffer, ProtocolLayout};
pub use catalog::{
    BodyKind, Catalog, CatalogManifest, CelestialBody, Inspection, RingSystem, Satellite,
};
pub use components::color::Color;
pub use components::primitive::{
    Geometry, LineLoop, PointCloud, Primitive, PrimitiveTag, Style, SurfaceMesh,
};
pub use core::frame::Frame;
pub use core::kinematics::{
    body_position, orbital_angle, position, satellite_offset, satellite_position,
    SATELLITE_SPEED_MULTIPLIER, SATELLITE_TILT_FACTOR,
};
pub use core::time::TimeSlider;
pub use error::SceneError;
pub use renderer::config::{Margins, SceneConfig};
pub use renderer::record::{PrimitiveRecord, Vertex};
pub use systems::assemble::assemble_scene;
