use serde::{Deserialize, Serialize};

use crate::components::primitive::{Primitive, PrimitiveTag};
use crate::renderer::config::SceneConfig;

/// One assembled frame: every primitive for a single simulation time,
/// plus the scene configuration the renderer applies to it.
///
/// Frames are plain values. Nothing is carried over from one to the next.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// Simulation time (years) the frame was built for.
    pub time: f64,
    pub config: SceneConfig,
    primitives: Vec<Primitive>,
}

impl Frame {
    pub fn new(time: f64, config: SceneConfig) -> Self {
        Self::with_capacity(time, config, 64)
    }

    /// Create a frame with a specific primitive capacity.
    pub fn with_capacity(time: f64, config: SceneConfig, capacity: usize) -> Self {
        Self {
            time,
            config,
            primitives: Vec::with_capacity(capacity),
        }
    }

    /// Wrap an already assembled primitive list.
    pub fn from_primitives(time: f64, config: SceneConfig, primitives: Vec<Primitive>) -> Self {
        Self {
            time,
            config,
            primitives,
        }
    }

    pub fn push(&mut self, primitive: Primitive) {
        self.primitives.push(primitive);
    }

    /// Primitives in draw order.
    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    pub fn into_primitives(self) -> Vec<Primitive> {
        self.primitives
    }

    pub fn iter(&self) -> impl Iterator<Item = &Primitive> {
        self.primitives.iter()
    }

    /// Iterate primitives with the given tag.
    pub fn iter_tagged(&self, tag: PrimitiveTag) -> impl Iterator<Item = &Primitive> {
        self.primitives.iter().filter(move |p| p.tag == tag)
    }

    pub fn count_tagged(&self, tag: PrimitiveTag) -> usize {
        self.iter_tagged(tag).count()
    }

    /// Find the first primitive carrying the given name.
    pub fn find_by_name(&self, name: &str) -> Option<&Primitive> {
        self.primitives
            .iter()
            .find(|p| p.name.as_deref() == Some(name))
    }

    /// Total geometry samples across all primitives.
    pub fn vertex_count(&self) -> usize {
        self.primitives.iter().map(|p| p.geometry.vertex_count()).sum()
    }

    /// Number of primitives in the frame.
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::color::Color;
    use crate::components::primitive::{Geometry, PointCloud};
    use glam::Vec3;

    fn cloud(tag: PrimitiveTag, n: usize) -> Primitive {
        let geometry = Geometry::PointCloud(PointCloud {
            points: vec![Vec3::ONE; n],
        });
        Primitive::new(tag, geometry, Color::WHITE)
    }

    #[test]
    fn push_and_count_by_tag() {
        let mut frame = Frame::new(0.0, SceneConfig::default());
        frame.push(cloud(PrimitiveTag::Starfield, 5));
        frame.push(cloud(PrimitiveTag::AsteroidBelt, 3));
        frame.push(cloud(PrimitiveTag::AsteroidBelt, 2));
        assert_eq!(frame.len(), 3);
        assert_eq!(frame.count_tagged(PrimitiveTag::AsteroidBelt), 2);
        assert_eq!(frame.count_tagged(PrimitiveTag::OrbitRing), 0);
        assert_eq!(frame.vertex_count(), 10);
    }

    #[test]
    fn find_by_name() {
        let mut frame = Frame::new(1.0, SceneConfig::default());
        frame.push(cloud(PrimitiveTag::Starfield, 1));
        frame.push(cloud(PrimitiveTag::AsteroidBelt, 1).with_name("Asteroid Belt"));
        let belt = frame.find_by_name("Asteroid Belt").unwrap();
        assert_eq!(belt.tag, PrimitiveTag::AsteroidBelt);
        assert!(frame.find_by_name("Earth").is_none());
    }

    #[test]
    fn empty_frame() {
        let frame = Frame::new(0.0, SceneConfig::default());
        assert!(frame.is_empty());
        assert_eq!(frame.vertex_count(), 0);
    }
}
