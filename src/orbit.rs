//! Circular, coplanar orbits on the XZ plane.
//!
//! No inclination and no eccentricity: every orbiting body moves on a circle of
//! its `orbit_radius` at constant angular rate `2π / orbit_period_days`.

use crate::body::CelestialBody;
use crate::math::{Vec3, TAU};

/// Orbital angle in radians. Not wrapped; callers only take `cos`/`sin`.
pub fn orbit_angle(period_days: f64, simulated_days: f64) -> f64 {
    (simulated_days / period_days) * TAU
}

/// World position of `body` at `simulated_days`, or `None` when the body has
/// no orbit (the sun, the belts and the cloud).
pub fn position_of(body: &CelestialBody, simulated_days: f64) -> Option<Vec3> {
    let r = body.orbit_radius?;
    let period = body.orbit_period_days?;
    let (s, c) = orbit_angle(period, simulated_days).sin_cos();
    Some(Vec3::new(c * r, 0.0, s * r))
}

/// Spin increment for one frame. Negative periods spin backwards.
pub fn rotation_delta_of(body: &CelestialBody, frame_delta_days: f64, speed_multiplier: f64) -> f64 {
    match body.rotation_period_days {
        Some(p) => (TAU / p) * frame_delta_days * speed_multiplier,
        None => 0.0,
    }
}

/// Per-body mutable pose kept by the simulation between frames.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BodyPose {
    pub position: Vec3,
    /// Accumulated spin about the body's own axis. Never wrapped.
    pub spin: f64,
    /// Fixed tilt, radians.
    pub tilt: f64,
}

impl BodyPose {
    pub fn at_rest(body: &CelestialBody) -> Self {
        Self {
            position: position_of(body, 0.0).unwrap_or(Vec3::ZERO),
            spin: 0.0,
            tilt: body.axial_tilt_degrees.to_radians(),
        }
    }
}
