use glam::DVec3;
use rand::Rng;

use crate::api::types::SceneOptions;
use crate::catalog::{Catalog, CelestialBody, Satellite};
use crate::components::color::Color;
use crate::components::primitive::{Geometry, Primitive, PrimitiveTag};
use crate::core::kinematics::{body_position, satellite_position};
use crate::error::SceneError;
use crate::systems::geometry::{
    asteroid_belt, orbit_ring, ring_system, sphere_mesh, starfield, BELT_RADIUS, ORBIT_SAMPLES,
    RING_BANDS, RING_SAMPLES, SPHERE_RESOLUTION,
};

/// Legend name of the belt point cloud.
pub const BELT_NAME: &str = "Asteroid Belt";

const STAR_SIZE: f32 = 2.0;
const STAR_OPACITY: f32 = 0.8;
const BELT_SIZE: f32 = 1.5;
const BELT_OPACITY: f32 = 0.6;
const ORBIT_WIDTH: f32 = 1.0;
const RING_WIDTH: f32 = 2.0;

/// Hover label shown for a catalog body.
pub fn body_hover(body: &CelestialBody) -> String {
    format!("{}\nType: {}", body.name, body.kind.label())
}

/// Names of bodies whose orbit falls inside the asteroid belt band.
pub fn belt_overlaps(catalog: &Catalog) -> Vec<&str> {
    catalog
        .iter()
        .filter(|b| b.orbit_radius >= BELT_RADIUS.0 && b.orbit_radius <= BELT_RADIUS.1)
        .map(|b| b.name.as_str())
        .collect()
}

/// Build every primitive for `time`, in draw order.
///
/// 1. starfield
/// 2. asteroid belt, if enabled
/// 3. per body in catalog order: orbit ring (if enabled and the body
///    orbits), sphere, ring bands, then each satellite's sphere
///
/// The starfield is always sampled before the belt, so a seeded `rng`
/// yields the same frame for the same inputs.
pub fn assemble_scene<R: Rng + ?Sized>(
    catalog: &Catalog,
    time: f64,
    options: SceneOptions,
    rng: &mut R,
) -> Result<Vec<Primitive>, SceneError> {
    let mut out = Vec::with_capacity(2 + catalog.len() * 4);

    let stars = starfield(rng)?;
    out.push(
        Primitive::new(PrimitiveTag::Starfield, Geometry::PointCloud(stars), Color::WHITE)
            .with_style(STAR_SIZE, STAR_OPACITY),
    );

    if options.show_asteroids {
        let belt = asteroid_belt(rng)?;
        out.push(
            Primitive::new(PrimitiveTag::AsteroidBelt, Geometry::PointCloud(belt), Color::GRAY)
                .with_style(BELT_SIZE, BELT_OPACITY)
                .with_name(BELT_NAME),
        );
    }

    for body in catalog.iter() {
        push_body(&mut out, body, time, options)?;
    }

    Ok(out)
}

fn push_body(
    out: &mut Vec<Primitive>,
    body: &CelestialBody,
    time: f64,
    options: SceneOptions,
) -> Result<(), SceneError> {
    let center = body_position(body.orbit_radius, body.angular_rate, time);

    if options.show_orbits && body.orbit_radius > 0.0 {
        let ring = orbit_ring(body.orbit_radius, ORBIT_SAMPLES)?;
        out.push(
            Primitive::new(PrimitiveTag::OrbitRing, Geometry::LineLoop(ring), Color::WHITE)
                .with_style(ORBIT_WIDTH, 1.0),
        );
    }

    let mesh = sphere_mesh(center, body.radius, SPHERE_RESOLUTION)?;
    out.push(
        Primitive::new(PrimitiveTag::Body, Geometry::SurfaceMesh(mesh), body.color)
            .with_name(body.name.as_str())
            .with_hover(body_hover(body)),
    );

    if let Some(rings) = &body.rings {
        for band in ring_system(center, body.radius, RING_BANDS, RING_SAMPLES)? {
            out.push(
                Primitive::new(PrimitiveTag::RingSystem, Geometry::LineLoop(band), rings.color)
                    .with_style(RING_WIDTH, 1.0),
            );
        }
    }

    for satellite in &body.satellites {
        out.push(satellite_primitive(center, satellite, time)?);
    }

    Ok(())
}

fn satellite_primitive(
    parent: DVec3,
    satellite: &Satellite,
    time: f64,
) -> Result<Primitive, SceneError> {
    let center = satellite_position(parent, satellite.orbit_radius, satellite.angular_rate, time);
    let mesh = sphere_mesh(center, satellite.radius, SPHERE_RESOLUTION)?;
    let primitive =
        Primitive::new(PrimitiveTag::Satellite, Geometry::SurfaceMesh(mesh), satellite.color)
            .with_name(satellite.name.as_str())
            .with_hover(satellite.name.as_str());
    Ok(primitive)
}
