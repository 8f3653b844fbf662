use std::f64::consts::TAU;

use glam::{DVec3, Vec3};

use super::linspace;
use crate::components::primitive::LineLoop;
use crate::error::{ensure_count, ensure_non_negative, SceneError};

/// Samples along one orbit path.
pub const ORBIT_SAMPLES: usize = 100;

/// Ring systems are drawn as this many concentric loops.
pub const RING_BANDS: usize = 6;
/// Samples along each ring band.
pub const RING_SAMPLES: usize = 50;
/// Innermost band radius, in body radii.
pub const RING_INNER_FACTOR: f64 = 1.4;
/// Outermost band radius, in body radii.
pub const RING_OUTER_FACTOR: f64 = 2.2;

fn circle(center: DVec3, radius: f64, samples: usize) -> Result<LineLoop, SceneError> {
    let points = linspace(0.0, TAU, samples)?
        .into_iter()
        .map(|theta| {
            let (sin, cos) = theta.sin_cos();
            Vec3::new(
                (center.x + radius * cos) as f32,
                (center.y + radius * sin) as f32,
                center.z as f32,
            )
        })
        .collect();
    Ok(LineLoop { points })
}

/// Orbit path of `radius` around the origin in the z = 0 plane.
/// The last sample repeats the first.
pub fn orbit_ring(radius: f64, samples: usize) -> Result<LineLoop, SceneError> {
    ensure_non_negative("orbit radius", radius)?;
    ensure_count("orbit samples", samples)?;
    circle(DVec3::ZERO, radius, samples)
}

/// Concentric bands approximating a flat ring disk around a body.
///
/// Band radii run evenly from `RING_INNER_FACTOR` to `RING_OUTER_FACTOR`
/// times `body_radius`, all in the plane of `center`.
pub fn ring_system(
    center: DVec3,
    body_radius: f64,
    bands: usize,
    samples: usize,
) -> Result<Vec<LineLoop>, SceneError> {
    ensure_non_negative("ring body radius", body_radius)?;
    ensure_count("ring bands", bands)?;
    ensure_count("ring samples", samples)?;

    let inner = body_radius * RING_INNER_FACTOR;
    let outer = body_radius * RING_OUTER_FACTOR;
    linspace(inner, outer, bands)?
        .into_iter()
        .map(|r| circle(center, r, samples))
        .collect()
}
