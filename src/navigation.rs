//! Where the camera should go when something is selected.

use crate::body::{BodyTable, CelestialBody};
use crate::catalog::PresetSpec;
use crate::math::Vec3;
use crate::orbit::position_of;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Destination {
    pub position: Vec3,
    pub look_at: Vec3,
}

/// Camera offset above and behind a body, scaled by its visual radius with a
/// floor so small planets are not framed from point-blank range.
pub fn body_offset(body: &CelestialBody, floor: (f64, f64)) -> Vec3 {
    let r = body.visual_radius;
    Vec3::new(0.0, (r * 3.0).max(floor.0), (r * 8.0).max(floor.1))
}

/// Resolve `key` to a camera destination.
///
/// Named regions use the preset's fixed views and ignore time. Orbiting bodies
/// are framed where they are at `simulated_days`. Anything else is `None`.
pub fn select_destination(
    table: &BodyTable,
    spec: &PresetSpec,
    key: &str,
    simulated_days: f64,
) -> Option<Destination> {
    if let Some(view) = spec.region(key) {
        return Some(Destination { position: view.position, look_at: Vec3::ZERO });
    }
    let body = table.get(key)?;
    let look_at = position_of(body, simulated_days)?;
    Some(Destination {
        position: look_at + body_offset(body, spec.planet_offset_floor),
        look_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Preset, ASTEROID_BELT, SOLAR_SYSTEM, SUN};

    #[test]
    fn whole_system_view_ignores_time() {
        let spec = Preset::Classic.spec();
        let table = Preset::Classic.table().unwrap();
        let a = select_destination(&table, &spec, SOLAR_SYSTEM, 0.0).unwrap();
        let b = select_destination(&table, &spec, SOLAR_SYSTEM, 12_345.678).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.position, Vec3::new(0.0, 15_000.0, 30_000.0));
        assert_eq!(a.look_at, Vec3::ZERO);
    }

    #[test]
    fn regions_differ_per_preset() {
        let classic = Preset::Classic.spec();
        let compact = Preset::Compact.spec();
        let t1 = Preset::Classic.table().unwrap();
        let t2 = Preset::Compact.table().unwrap();
        let a = select_destination(&t1, &classic, SUN, 0.0).unwrap();
        let b = select_destination(&t2, &compact, SUN, 0.0).unwrap();
        assert_eq!(a.position, Vec3::new(0.0, 150.0, 450.0));
        assert_eq!(b.position, Vec3::new(0.0, 50.0, 150.0));
        let belt = select_destination(&t2, &compact, ASTEROID_BELT, 9.0).unwrap();
        assert_eq!(belt.position, Vec3::new(0.0, 100.0, 500.0));
    }

    #[test]
    fn planet_is_framed_where_it_is_now() {
        let spec = Preset::Classic.spec();
        let table = Preset::Classic.table().unwrap();
        let d = select_destination(&table, &spec, "earth", 182.5).unwrap();
        assert!((d.look_at.x + 600.0).abs() < 1e-9);
        assert!(d.look_at.z.abs() < 1e-9);
        // earth r = 22.5: 3r = 67.5 < 120 floor, 8r = 180 < 240 floor
        let off = d.position - d.look_at;
        assert!((off - Vec3::new(0.0, 120.0, 240.0)).len() < 1e-9, "offset = {off:?}");
    }

    #[test]
    fn large_planet_offset_scales_with_radius() {
        let spec = Preset::Classic.spec();
        let table = Preset::Classic.table().unwrap();
        let d = select_destination(&table, &spec, "uranus", 0.0).unwrap();
        assert_eq!(d.look_at, Vec3::new(11_520.0, 0.0, 0.0));
        assert_eq!(d.position - d.look_at, Vec3::new(0.0, 225.0, 600.0));
    }

    #[test]
    fn compact_preset_has_no_floor() {
        let spec = Preset::Compact.spec();
        let table = Preset::Compact.table().unwrap();
        let d = select_destination(&table, &spec, "earth", 0.0).unwrap();
        assert_eq!(d.position - d.look_at, Vec3::new(0.0, 22.5, 60.0));
    }

    #[test]
    fn unknown_key_is_ignored() {
        let spec = Preset::Classic.spec();
        let table = Preset::Classic.table().unwrap();
        assert_eq!(select_destination(&table, &spec, "pluto", 0.0), None);
        assert_eq!(select_destination(&table, &spec, "", 0.0), None);
    }
}
