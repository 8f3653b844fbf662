use std::f64::consts::{PI, TAU};

use glam::Vec3;
use rand::Rng;

use crate::components::primitive::PointCloud;
use crate::error::{ensure_count, ensure_non_negative, ensure_range, SceneError};

/// Asteroids per belt.
pub const BELT_COUNT: usize = 300;
/// Belt radius band. Must sit strictly between the Mars and Jupiter orbits
/// of the built-in catalog.
pub const BELT_RADIUS: (f64, f64) = (50.0, 60.0);
/// Belt thickness above and below the orbital plane.
pub const BELT_HALF_HEIGHT: f64 = 1.0;

/// Background stars per field.
pub const STAR_COUNT: usize = 500;
/// Starfield shell radius band.
pub const STAR_RADIUS: (f64, f64) = (200.0, 300.0);

fn check_band(what: &'static str, min: f64, max: f64) -> Result<(), SceneError> {
    ensure_non_negative(what, min)?;
    ensure_non_negative(what, max)?;
    ensure_range(what, min, max)
}

/// Points scattered in a flat annulus around the origin: radius uniform in
/// `[r_min, r_max]`, azimuth uniform in `[0, 2π)`, height uniform in
/// `[-half_height, half_height]`.
pub fn scatter_annulus<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    r_min: f64,
    r_max: f64,
    half_height: f64,
) -> Result<PointCloud, SceneError> {
    ensure_count("annulus count", count)?;
    check_band("annulus radius", r_min, r_max)?;
    ensure_non_negative("annulus half height", half_height)?;

    let points = (0..count)
        .map(|_| {
            let r = rng.gen_range(r_min..=r_max);
            let theta = rng.gen_range(0.0..TAU);
            let z = rng.gen_range(-half_height..=half_height);
            Vec3::new((r * theta.cos()) as f32, (r * theta.sin()) as f32, z as f32)
        })
        .collect();
    Ok(PointCloud { points })
}

/// Points scattered in a spherical shell: radius uniform in
/// `[r_min, r_max]`, azimuth uniform in `[0, 2π)`, polar angle uniform in
/// `[0, π]`.
///
/// Uniform in angle rather than solid angle, so points bunch slightly
/// toward the poles.
pub fn scatter_shell<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    r_min: f64,
    r_max: f64,
) -> Result<PointCloud, SceneError> {
    ensure_count("shell count", count)?;
    check_band("shell radius", r_min, r_max)?;

    let points = (0..count)
        .map(|_| {
            let r = rng.gen_range(r_min..=r_max);
            let theta = rng.gen_range(0.0..TAU);
            let phi = rng.gen_range(0.0..=PI);
            let (sin_p, cos_p) = phi.sin_cos();
            Vec3::new(
                (r * sin_p * theta.cos()) as f32,
                (r * sin_p * theta.sin()) as f32,
                (r * cos_p) as f32,
            )
        })
        .collect();
    Ok(PointCloud { points })
}

/// The asteroid belt between Mars and Jupiter.
pub fn asteroid_belt<R: Rng + ?Sized>(rng: &mut R) -> Result<PointCloud, SceneError> {
    scatter_annulus(rng, BELT_COUNT, BELT_RADIUS.0, BELT_RADIUS.1, BELT_HALF_HEIGHT)
}

/// The distant background starfield.
pub fn starfield<R: Rng + ?Sized>(rng: &mut R) -> Result<PointCloud, SceneError> {
    scatter_shell(rng, STAR_COUNT, STAR_RADIUS.0, STAR_RADIUS.1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    // f32 storage loses a little precision on the way out.
    const EPS: f32 = 1e-3;

    #[test]
    fn belt_points_stay_in_band() {
        let mut rng = StdRng::seed_from_u64(7);
        let belt = asteroid_belt(&mut rng).unwrap();
        assert_eq!(belt.points.len(), 300);
        for p in &belt.points {
            let r = p.truncate().length();
            assert!(r >= 50.0 - EPS && r <= 60.0 + EPS, "r = {}", r);
            assert!(p.z >= -1.0 && p.z <= 1.0, "z = {}", p.z);
        }
    }

    #[test]
    fn starfield_points_stay_in_shell() {
        let mut rng = StdRng::seed_from_u64(11);
        let stars = starfield(&mut rng).unwrap();
        assert_eq!(stars.points.len(), 500);
        for p in &stars.points {
            let r = p.length();
            assert!(r >= 200.0 - EPS * 10.0 && r <= 300.0 + EPS * 10.0, "r = {}", r);
        }
    }

    #[test]
    fn same_seed_same_field() {
        let a = starfield(&mut StdRng::seed_from_u64(3)).unwrap();
        let b = starfield(&mut StdRng::seed_from_u64(3)).unwrap();
        assert_eq!(a, b);
        let c = starfield(&mut StdRng::seed_from_u64(4)).unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn belt_spreads_around_full_circle() {
        let mut rng = StdRng::seed_from_u64(99);
        let belt = asteroid_belt(&mut rng).unwrap();
        let quadrants = belt.points.iter().fold([0usize; 4], |mut q, p| {
            let idx = match (p.x >= 0.0, p.y >= 0.0) {
                (true, true) => 0,
                (false, true) => 1,
                (false, false) => 2,
                (true, false) => 3,
            };
            q[idx] += 1;
            q
        });
        assert!(quadrants.iter().all(|&n| n > 30), "{:?}", quadrants);
    }

    #[test]
    fn degenerate_band_collapses_to_circle() {
        let mut rng = StdRng::seed_from_u64(1);
        let ring = scatter_annulus(&mut rng, 10, 5.0, 5.0, 0.0).unwrap();
        for p in &ring.points {
            assert!((p.length() - 5.0).abs() < 1e-4);
        }
    }

    #[test]
    fn rejects_bad_arguments() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(scatter_annulus(&mut rng, 0, 50.0, 60.0, 1.0).is_err());
        assert!(scatter_annulus(&mut rng, 10, 60.0, 50.0, 1.0).is_err());
        assert!(scatter_annulus(&mut rng, 10, -1.0, 50.0, 1.0).is_err());
        assert!(scatter_annulus(&mut rng, 10, 50.0, 60.0, -1.0).is_err());
        assert!(scatter_shell(&mut rng, 0, 200.0, 300.0).is_err());
        assert!(scatter_shell(&mut rng, 10, 300.0, 200.0).is_err());
    }
}
