pub mod body;
pub mod registry;
pub mod solar;

pub use body::{BodyKind, CelestialBody, RingSystem, Satellite};
pub use registry::{Catalog, CatalogManifest, Inspection};
pub use solar::solar_bodies;
