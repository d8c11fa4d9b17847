//! Celestial body descriptors and the validated body table.

use crate::error::{ConfigError, ConfigResult};
use std::collections::HashSet;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn hex(v: u32) -> Self {
        Self {
            r: ((v >> 16) & 0xff) as u8,
            g: ((v >> 8) & 0xff) as u8,
            b: (v & 0xff) as u8,
        }
    }

    pub fn scale(self, t: f64) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        Rgb {
            r: (self.r as f64 * t).round() as u8,
            g: (self.g as f64 * t).round() as u8,
            b: (self.b as f64 * t).round() as u8,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BodyKind {
    Star,
    Planet,
    /// Whole-system view or a background shell (belts, cloud).
    Region,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MoonRecord {
    pub name: &'static str,
    pub distance: &'static str,
    pub discovery: &'static str,
    pub fact: &'static str,
}

/// Either a bare count or a list of named moons. The simulation never looks
/// inside; only the info panel does.
#[derive(Clone, Debug, PartialEq)]
pub enum MoonInfo {
    Count(u32),
    Detailed(Vec<MoonRecord>),
}

impl MoonInfo {
    pub fn count(&self) -> usize {
        match self {
            MoonInfo::Count(n) => *n as usize,
            MoonInfo::Detailed(list) => list.len(),
        }
    }
}

/// Ring extent as offsets added to the body's visual radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingSpec {
    pub inner_offset: f64,
    pub outer_offset: f64,
    pub color: Rgb,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CelestialBody {
    pub key: &'static str,
    pub display_name: &'static str,
    pub description: &'static str,
    pub fun_fact: &'static str,
    pub kind: BodyKind,
    pub color: Rgb,
    pub visual_radius: f64,
    pub orbit_radius: Option<f64>,
    pub orbit_period_days: Option<f64>,
    pub rotation_period_days: Option<f64>,
    pub axial_tilt_degrees: f64,
    pub mean_distance_au: Option<f64>,
    pub moons: Option<MoonInfo>,
    pub rings: Option<RingSpec>,
}

impl CelestialBody {
    /// A body with only the mandatory fields filled; the catalog and tests
    /// build on this with struct update syntax.
    pub fn new(key: &'static str, display_name: &'static str, kind: BodyKind, visual_radius: f64) -> Self {
        Self {
            key,
            display_name,
            description: "",
            fun_fact: "",
            kind,
            color: Rgb::hex(0xffffff),
            visual_radius,
            orbit_radius: None,
            orbit_period_days: None,
            rotation_period_days: None,
            axial_tilt_degrees: 0.0,
            mean_distance_au: None,
            moons: None,
            rings: None,
        }
    }

    pub fn is_orbiting(&self) -> bool {
        self.orbit_radius.is_some()
    }

    fn validate(&self) -> ConfigResult<()> {
        let key = || self.key.to_string();

        if !(self.visual_radius.is_finite() && self.visual_radius > 0.0) {
            return Err(ConfigError::InvalidVisualRadius { key: key(), value: self.visual_radius });
        }
        if let Some(r) = self.orbit_radius {
            if !(r.is_finite() && r >= 0.0) {
                return Err(ConfigError::InvalidOrbitRadius { key: key(), value: r });
            }
            match self.orbit_period_days {
                None => return Err(ConfigError::MissingOrbitPeriod { key: key() }),
                Some(p) if !(p.is_finite() && p > 0.0) => {
                    return Err(ConfigError::InvalidOrbitPeriod { key: key(), value: p });
                }
                Some(_) => {}
            }
        }
        if let Some(p) = self.rotation_period_days {
            if !p.is_finite() || p == 0.0 {
                return Err(ConfigError::InvalidRotationPeriod { key: key(), value: p });
            }
        }
        Ok(())
    }
}

/// Read-only, validated set of bodies in display order.
#[derive(Clone, Debug)]
pub struct BodyTable {
    bodies: Vec<CelestialBody>,
}

impl BodyTable {
    pub fn new(bodies: Vec<CelestialBody>) -> ConfigResult<Self> {
        let mut seen = HashSet::new();
        for b in &bodies {
            if !seen.insert(b.key) {
                return Err(ConfigError::DuplicateKey { key: b.key.to_string() });
            }
            b.validate()?;
        }
        Ok(Self { bodies })
    }

    pub fn get(&self, key: &str) -> Option<&CelestialBody> {
        self.bodies.iter().find(|b| b.key == key)
    }

    pub fn index_of(&self, key: &str) -> Option<usize> {
        self.bodies.iter().position(|b| b.key == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CelestialBody> {
        self.bodies.iter()
    }

    pub fn orbiting(&self) -> impl Iterator<Item = &CelestialBody> {
        self.bodies.iter().filter(|b| b.is_orbiting())
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn planet(key: &'static str) -> CelestialBody {
        CelestialBody {
            orbit_radius: Some(600.0),
            orbit_period_days: Some(365.0),
            rotation_period_days: Some(1.0),
            ..CelestialBody::new(key, "Planet", BodyKind::Planet, 10.0)
        }
    }

    #[test]
    fn accepts_well_formed_table() {
        let sun = CelestialBody::new("sun", "Sun", BodyKind::Star, 120.0);
        let t = BodyTable::new(vec![sun, planet("earth")]).unwrap();
        assert_eq!(t.len(), 2);
        assert_eq!(t.orbiting().count(), 1);
        assert_eq!(t.index_of("earth"), Some(1));
        assert!(t.get("pluto").is_none());
    }

    #[test]
    fn rejects_orbit_without_period() {
        let b = CelestialBody { orbit_period_days: None, ..planet("earth") };
        let err = BodyTable::new(vec![b]).unwrap_err();
        assert_eq!(err, ConfigError::MissingOrbitPeriod { key: "earth".into() });
    }

    #[test]
    fn rejects_zero_orbit_period() {
        let b = CelestialBody { orbit_period_days: Some(0.0), ..planet("earth") };
        assert!(matches!(
            BodyTable::new(vec![b]),
            Err(ConfigError::InvalidOrbitPeriod { .. })
        ));
    }

    #[test]
    fn rejects_zero_rotation_but_allows_retrograde() {
        let zero = CelestialBody { rotation_period_days: Some(0.0), ..planet("venus") };
        assert!(matches!(
            BodyTable::new(vec![zero]),
            Err(ConfigError::InvalidRotationPeriod { .. })
        ));

        let retro = CelestialBody { rotation_period_days: Some(-243.0), ..planet("venus") };
        assert!(BodyTable::new(vec![retro]).is_ok());
    }

    #[test]
    fn rejects_duplicate_keys() {
        let err = BodyTable::new(vec![planet("earth"), planet("earth")]).unwrap_err();
        assert_eq!(err, ConfigError::DuplicateKey { key: "earth".into() });
    }

    #[test]
    fn rejects_bad_radii() {
        let b = CelestialBody { visual_radius: 0.0, ..planet("earth") };
        assert!(matches!(BodyTable::new(vec![b]), Err(ConfigError::InvalidVisualRadius { .. })));
        let b = CelestialBody { orbit_radius: Some(f64::NAN), ..planet("earth") };
        assert!(matches!(BodyTable::new(vec![b]), Err(ConfigError::InvalidOrbitRadius { .. })));
    }

    #[test]
    fn moon_count_covers_both_forms() {
        assert_eq!(MoonInfo::Count(95).count(), 95);
        let moon = MoonRecord { name: "Moon", distance: "384,400 km", discovery: "", fact: "" };
        assert_eq!(MoonInfo::Detailed(vec![moon]).count(), 1);
    }

    #[test]
    fn hex_color_unpacks() {
        assert_eq!(Rgb::hex(0x4facfe), Rgb { r: 0x4f, g: 0xac, b: 0xfe });
    }
}
