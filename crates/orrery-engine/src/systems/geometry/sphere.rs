use std::f64::consts::{PI, TAU};

use glam::{DVec3, Vec3};

use super::linspace;
use crate::components::primitive::SurfaceMesh;
use crate::error::{ensure_count, ensure_non_negative, SceneError};

/// Samples per side of the UV grid used for every body.
pub const SPHERE_RESOLUTION: usize = 20;

/// UV sphere sampled on a `resolution` × `resolution` grid.
///
/// Rows walk the azimuth θ over [0, 2π], columns walk the polar angle φ
/// over [0, π]; both ends are included so the seam and poles close.
pub fn sphere_mesh(
    center: DVec3,
    radius: f64,
    resolution: usize,
) -> Result<SurfaceMesh, SceneError> {
    ensure_non_negative("sphere radius", radius)?;
    ensure_count("sphere resolution", resolution)?;

    let thetas = linspace(0.0, TAU, resolution)?;
    let phis = linspace(0.0, PI, resolution)?;

    let mut points = Vec::with_capacity(resolution * resolution);
    for &theta in &thetas {
        let (sin_t, cos_t) = theta.sin_cos();
        for &phi in &phis {
            let (sin_p, cos_p) = phi.sin_cos();
            let p = center + radius * DVec3::new(cos_t * sin_p, sin_t * sin_p, cos_p);
            points.push(p.as_vec3());
        }
    }

    Ok(SurfaceMesh {
        rows: resolution,
        cols: resolution,
        points,
    })
}
