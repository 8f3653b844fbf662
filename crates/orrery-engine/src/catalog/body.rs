use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::components::color::Color;

/// Classification of a body. Only ring eligibility depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BodyKind {
    Star,
    Planet,
    #[serde(rename = "Gas Giant")]
    GasGiant,
    #[serde(rename = "Ice Giant")]
    IceGiant,
}

impl BodyKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Star => "Star",
            Self::Planet => "Planet",
            Self::GasGiant => "Gas Giant",
            Self::IceGiant => "Ice Giant",
        }
    }

    /// Whether a body of this kind may carry a ring system.
    pub fn ring_eligible(&self) -> bool {
        matches!(self, Self::GasGiant | Self::IceGiant)
    }
}

impl std::fmt::Display for BodyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Ring system drawn around a giant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RingSystem {
    #[serde(default = "default_ring_color")]
    pub color: Color,
}

impl Default for RingSystem {
    fn default() -> Self {
        Self {
            color: default_ring_color(),
        }
    }
}

fn default_ring_color() -> Color {
    Color::rgb8(0xA3, 0x92, 0x76)
}

/// Moon on a circular orbit around its parent body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Satellite {
    pub name: String,
    /// Distance from the parent's center.
    pub orbit_radius: f64,
    /// Stored rate; motion uses it times `SATELLITE_SPEED_MULTIPLIER`.
    pub angular_rate: f64,
    pub radius: f64,
    pub color: Color,
}

impl Satellite {
    pub fn new(
        name: impl Into<String>,
        orbit_radius: f64,
        angular_rate: f64,
        radius: f64,
        color: Color,
    ) -> Self {
        Self {
            name: name.into(),
            orbit_radius,
            angular_rate,
            radius,
            color,
        }
    }
}

/// Catalog entry for a star or planet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CelestialBody {
    pub name: String,
    pub kind: BodyKind,
    /// Display-scaled visual radius.
    pub radius: f64,
    /// Distance from the world origin. Zero for the central star.
    pub orbit_radius: f64,
    /// Radians of orbital progress per simulation year.
    pub angular_rate: f64,
    pub color: Color,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rings: Option<RingSystem>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub satellites: Vec<Satellite>,
    /// Informational label → value pairs for the inspector.
    #[serde(default)]
    pub stats: IndexMap<String, String>,
}

impl CelestialBody {
    pub fn new(
        name: impl Into<String>,
        kind: BodyKind,
        radius: f64,
        orbit_radius: f64,
        angular_rate: f64,
        color: Color,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            radius,
            orbit_radius,
            angular_rate,
            color,
            rings: None,
            satellites: Vec::new(),
            stats: IndexMap::new(),
        }
    }

    // -- Builder pattern --

    pub fn with_rings(mut self, rings: RingSystem) -> Self {
        self.rings = Some(rings);
        self
    }

    pub fn with_satellite(mut self, satellite: Satellite) -> Self {
        self.satellites.push(satellite);
        self
    }

    pub fn with_stat(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.stats.insert(label.into(), value.into());
        self
    }

    pub fn has_rings(&self) -> bool {
        self.rings.is_some()
    }

    /// The stationary body every other orbit is centered on.
    pub fn is_central(&self) -> bool {
        self.orbit_radius == 0.0 && self.angular_rate == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_giants_are_ring_eligible() {
        assert!(!BodyKind::Star.ring_eligible());
        assert!(!BodyKind::Planet.ring_eligible());
        assert!(BodyKind::GasGiant.ring_eligible());
        assert!(BodyKind::IceGiant.ring_eligible());
    }

    #[test]
    fn kind_labels_match_json_form() {
        let json = serde_json::to_string(&BodyKind::GasGiant).unwrap();
        assert_eq!(json, "\"Gas Giant\"");
        assert_eq!(BodyKind::IceGiant.to_string(), "Ice Giant");
    }

    #[test]
    fn stats_keep_insertion_order() {
        let body = CelestialBody::new("X", BodyKind::Planet, 1.0, 10.0, 1.0, Color::WHITE)
            .with_stat("Mass", "1 kg")
            .with_stat("Orbit Period", "2 days")
            .with_stat("Moons", "0");
        let labels: Vec<&str> = body.stats.keys().map(|k| k.as_str()).collect();
        assert_eq!(labels, ["Mass", "Orbit Period", "Moons"]);
    }

    #[test]
    fn optional_fields_default_when_absent() {
        let json = r##"{
            "name": "Vesta", "kind": "Planet", "radius": 0.5,
            "orbit_radius": 55.0, "angular_rate": 0.3, "color": "#888888"
        }"##;
        let body: CelestialBody = serde_json::from_str(json).unwrap();
        assert!(!body.has_rings());
        assert!(body.satellites.is_empty());
        assert!(body.stats.is_empty());
    }

    #[test]
    fn empty_rings_object_uses_default_color() {
        let rings: RingSystem = serde_json::from_str("{}").unwrap();
        assert_eq!(rings.color.to_hex(), "#A39276");
    }
}
