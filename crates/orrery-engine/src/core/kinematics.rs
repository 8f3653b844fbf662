//! Circular-orbit kinematics. Pure math with no randomness and no state.
//!
//! Uses f64 throughout; render geometry converts to f32 only when samples
//! are emitted.

use std::f64::consts::TAU;

use glam::{DVec2, DVec3};

/// Moons sweep their orbits this many times faster than their stored rate.
pub const SATELLITE_SPEED_MULTIPLIER: f64 = 5.0;

/// Amplitude of a satellite's out-of-plane wobble, as a fraction of its
/// orbit radius.
pub const SATELLITE_TILT_FACTOR: f64 = 0.3;

/// Orbital phase at `time`, normalized to [0, 2π).
///
/// `time` is first reduced modulo one period, so the product never
/// overflows for any finite time.
pub fn orbital_angle(angular_rate: f64, time: f64) -> f64 {
    if angular_rate == 0.0 {
        return 0.0;
    }
    let period = TAU / angular_rate.abs();
    (angular_rate * time.rem_euclid(period)).rem_euclid(TAU)
}

/// Planar position on a circle of `orbit_radius` centered at the origin.
pub fn position(orbit_radius: f64, angular_rate: f64, time: f64) -> DVec2 {
    let angle = orbital_angle(angular_rate, time);
    DVec2::new(orbit_radius * angle.cos(), orbit_radius * angle.sin())
}

/// Position of a top-level body in world space (always in the z = 0 plane).
pub fn body_position(orbit_radius: f64, angular_rate: f64, time: f64) -> DVec3 {
    position(orbit_radius, angular_rate, time).extend(0.0)
}

/// Satellite offset relative to its parent.
///
/// Horizontal motion uses the amplified rate; the vertical wobble shares
/// the same phase.
pub fn satellite_offset(orbit_radius: f64, angular_rate: f64, time: f64) -> DVec3 {
    let rate = angular_rate * SATELLITE_SPEED_MULTIPLIER;
    let angle = orbital_angle(rate, time);
    let planar = DVec2::new(orbit_radius * angle.cos(), orbit_radius * angle.sin());
    let z = orbit_radius * SATELLITE_TILT_FACTOR * angle.sin();
    planar.extend(z)
}

/// Absolute satellite position: parent position plus the relative offset.
pub fn satellite_position(
    parent: DVec3,
    orbit_radius: f64,
    angular_rate: f64,
    time: f64,
) -> DVec3 {
    parent + satellite_offset(orbit_radius, angular_rate, time)
}
