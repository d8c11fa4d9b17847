//! Text for the info panel, the moon list and the AU readout.

use crate::body::{CelestialBody, MoonInfo};
use crate::math::Vec3;

pub fn info_lines(body: &CelestialBody) -> Vec<String> {
    let mut out = Vec::new();
    if !body.description.is_empty() {
        out.push(body.description.to_string());
    }

    if let Some(r) = body.orbit_radius {
        out.push(format!("Orbit radius (units): {r}"));
        if let Some(p) = body.orbit_period_days {
            out.push(format!("Orbital period: {} days", p.round()));
        }
        if let Some(rot) = body.rotation_period_days {
            out.push(format!("Rotation: {} days", rot.abs()));
        }
    }

    if let Some(moons) = &body.moons {
        out.push(format!("Moons: {}", moons.count()));
    }

    if let Some(au) = body.mean_distance_au {
        out.push(format!("Mean distance: {au:.2} AU"));
    }
    out
}

pub fn moon_lines(body: &CelestialBody) -> Vec<String> {
    match &body.moons {
        Some(MoonInfo::Detailed(list)) if !list.is_empty() => {
            let mut out = vec![format!("Moons of {}:", body.display_name)];
            out.extend(list.iter().map(|m| format!("{}: {} ({})", m.name, m.fact, m.distance)));
            out
        }
        _ => vec![format!("{} has no detailed moon list.", body.display_name)],
    }
}

/// Distance of a world point from the sun, in AU.
pub fn distance_au(point: Vec3, units_per_au: f64) -> f64 {
    point.len() / units_per_au
}

pub fn format_au(au: f64) -> String {
    format!("{au:.2} AU")
}
