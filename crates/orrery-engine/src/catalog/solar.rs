//! Built-in solar system: display-scaled sizes and distances, one
//! angular rate per body in radians per simulation year.
//!
//! Distances are compressed for readability. Keep the asteroid belt band in
//! `systems::geometry::particles` between Mars and Jupiter if they change.

use crate::catalog::body::{BodyKind, CelestialBody, RingSystem, Satellite};
use crate::catalog::registry::Catalog;
use crate::components::color::Color;
use crate::error::SceneError;

/// Orbit radius of the outermost rocky planet (Mars).
pub const MARS_ORBIT: f64 = 42.0;
/// Orbit radius of the innermost giant (Jupiter).
pub const JUPITER_ORBIT: f64 = 70.0;

fn hex(value: &str) -> Result<Color, SceneError> {
    Color::from_hex(value)
}

/// The nine bodies shipped with the engine, in rendering order.
pub fn solar_bodies() -> Result<Vec<CelestialBody>, SceneError> {
    Ok(vec![
        CelestialBody::new("Sun", BodyKind::Star, 8.0, 0.0, 0.0, hex("#FDB813")?)
            .with_stat("Mass", "1.989 × 10^30 kg")
            .with_stat("Temp", "5,500°C")
            .with_stat("Diameter", "1.4M km"),
        CelestialBody::new("Mercury", BodyKind::Planet, 1.5, 14.0, 4.1, hex("#A5A5A5")?)
            .with_stat("Mass", "3.285 × 10^23 kg")
            .with_stat("Orbit Period", "88 days")
            .with_stat("Moons", "0"),
        CelestialBody::new("Venus", BodyKind::Planet, 3.0, 22.0, 1.6, hex("#E3BB76")?)
            .with_stat("Mass", "4.867 × 10^24 kg")
            .with_stat("Orbit Period", "225 days")
            .with_stat("Moons", "0"),
        CelestialBody::new("Earth", BodyKind::Planet, 3.2, 32.0, 1.0, hex("#22A6B3")?)
            .with_satellite(Satellite::new("Moon", 5.0, 12.0, 0.8, hex("#DDDDDD")?))
            .with_stat("Mass", "5.972 × 10^24 kg")
            .with_stat("Orbit Period", "365 days")
            .with_stat("Moons", "1"),
        CelestialBody::new("Mars", BodyKind::Planet, 2.8, MARS_ORBIT, 0.53, hex("#EB4D4B")?)
            .with_satellite(Satellite::new("Phobos", 4.0, 15.0, 0.4, hex("#999999")?))
            .with_stat("Mass", "6.39 × 10^23 kg")
            .with_stat("Orbit Period", "687 days")
            .with_stat("Moons", "2"),
        CelestialBody::new("Jupiter", BodyKind::GasGiant, 7.0, JUPITER_ORBIT, 0.08, hex("#D3A97C")?)
            .with_satellite(Satellite::new("Io", 9.0, 8.0, 1.0, hex("#F4E06D")?))
            .with_satellite(Satellite::new("Europa", 11.0, 6.0, 0.9, hex("#C4C9CE")?))
            .with_stat("Mass", "1.898 × 10^27 kg")
            .with_stat("Orbit Period", "12 years")
            .with_stat("Moons", "79"),
        CelestialBody::new("Saturn", BodyKind::GasGiant, 6.0, 95.0, 0.03, hex("#E0C898")?)
            .with_rings(RingSystem::default())
            .with_satellite(Satellite::new("Titan", 10.0, 5.0, 1.2, hex("#D4AC4E")?))
            .with_stat("Mass", "5.683 × 10^26 kg")
            .with_stat("Orbit Period", "29 years")
            .with_stat("Moons", "82"),
        CelestialBody::new("Uranus", BodyKind::IceGiant, 5.0, 120.0, 0.01, hex("#7DE3F4")?)
            .with_stat("Mass", "8.681 × 10^25 kg")
            .with_stat("Orbit Period", "84 years")
            .with_stat("Moons", "27"),
        CelestialBody::new("Neptune", BodyKind::IceGiant, 4.8, 140.0, 0.006, hex("#3C40C6")?)
            .with_stat("Mass", "1.024 × 10^26 kg")
            .with_stat("Orbit Period", "165 years")
            .with_stat("Moons", "14"),
    ])
}

impl Catalog {
    /// The built-in solar system catalog.
    pub fn solar_system() -> Result<Self, SceneError> {
        Self::new(solar_bodies()?)
    }
}
