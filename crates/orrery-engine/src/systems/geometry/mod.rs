//! Procedural geometry: spheres, orbit loops, ring systems, particle fields.
//!
//! Every generator is a pure function of its parameters (plus an injected
//! random source for the particle fields) and validates its inputs.

mod loops;
mod particles;
mod sphere;

pub use loops::{
    orbit_ring, ring_system, ORBIT_SAMPLES, RING_BANDS, RING_INNER_FACTOR, RING_OUTER_FACTOR,
    RING_SAMPLES,
};
pub use particles::{
    asteroid_belt, scatter_annulus, scatter_shell, starfield, BELT_COUNT, BELT_HALF_HEIGHT,
    BELT_RADIUS, STAR_COUNT, STAR_RADIUS,
};
pub use sphere::{sphere_mesh, SPHERE_RESOLUTION};

use crate::error::{ensure_count, SceneError};

/// `n` evenly spaced values from `start` to `end`, both inclusive.
pub fn linspace(start: f64, end: f64, n: usize) -> Result<Vec<f64>, SceneError> {
    ensure_count("linspace samples", n)?;
    if n == 1 {
        return Ok(vec![start]);
    }
    let step = (end - start) / (n - 1) as f64;
    let mut out: Vec<f64> = (0..n).map(|i| start + step * i as f64).collect();
    // Pin the endpoint so closed loops close exactly.
    out[n - 1] = end;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linspace_includes_endpoints() {
        let v = linspace(1.4, 2.2, 6).unwrap();
        assert_eq!(v.len(), 6);
        assert_eq!(v[0], 1.4);
        assert_eq!(v[5], 2.2);
        for w in v.windows(2) {
            assert!((w[1] - w[0] - 0.16).abs() < 1e-12);
        }
    }

    #[test]
    fn linspace_single_sample() {
        assert_eq!(linspace(3.0, 9.0, 1).unwrap(), vec![3.0]);
    }

    #[test]
    fn linspace_zero_samples_is_invalid() {
        assert!(matches!(linspace(0.0, 1.0, 0), Err(SceneError::InvalidArgument { .. })));
    }
}
