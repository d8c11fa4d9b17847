//! Compiled-in body table and the two scale presets.
//!
//! `classic` puts 1 AU at 600 scene units with large, readable planets;
//! `compact` puts 1 AU at 200 units with smaller bodies and slower camera moves.

use crate::body::{BodyKind, BodyTable, CelestialBody, MoonInfo, MoonRecord, Rgb, RingSpec};
use crate::camera::OrbitLimits;
use crate::cloud::{CloudShape, CloudSpec};
use crate::error::ConfigResult;
use crate::math::Vec3;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

pub const SOLAR_SYSTEM: &str = "solarSystem";
pub const SUN: &str = "sun";
pub const ASTEROID_BELT: &str = "asteroidBelt";
pub const KUIPER_BELT: &str = "kuiperBelt";
pub const OORT_CLOUD: &str = "oortCloud";
pub const STARS: &str = "stars";

/// Planet keys in order from the sun; index + 1 is the number key that selects it.
pub const PLANETS: [&str; 8] = [
    "mercury", "venus", "earth", "mars", "jupiter", "saturn", "uranus", "neptune",
];

// Source frames were 16 ms at speed 1, i.e. 0.016 simulated days per frame.
const SOURCE_FRAME_DAYS: f64 = 0.016;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    #[default]
    Classic,
    Compact,
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Preset::Classic => "classic",
            Preset::Compact => "compact",
        })
    }
}

impl FromStr for Preset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "classic" => Ok(Preset::Classic),
            "compact" | "au" => Ok(Preset::Compact),
            other => Err(format!("unknown preset '{other}' (expected classic or compact)")),
        }
    }
}

/// Fixed camera placement for a named region. The camera always looks at the sun.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RegionView {
    pub key: &'static str,
    pub position: Vec3,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PresetSpec {
    pub preset: Preset,
    pub units_per_au: f64,
    pub transition_ms: u64,
    /// Lower bounds for the (y, z) camera offset above and behind a planet.
    pub planet_offset_floor: (f64, f64),
    pub regions: Vec<RegionView>,
    pub clouds: Vec<CloudSpec>,
    pub initial_camera: Vec3,
    pub orbit_limits: OrbitLimits,
    pub fov_y_degrees: f64,
    pub far_plane: f64,
}

impl PresetSpec {
    pub fn region(&self, key: &str) -> Option<&RegionView> {
        self.regions.iter().find(|r| r.key == key)
    }
}

struct Sizes {
    sun: f64,
    // (visual radius, orbit radius) per planet, in PLANETS order
    planets: [(f64, f64); 8],
    saturn_ring: (f64, f64),
    asteroid: f64,
    kuiper: f64,
    oort: f64,
    system: f64,
}

impl Preset {
    pub const ALL: [Preset; 2] = [Preset::Classic, Preset::Compact];

    pub fn spec(self) -> PresetSpec {
        match self {
            Preset::Classic => PresetSpec {
                preset: self,
                units_per_au: 600.0,
                transition_ms: 1200,
                planet_offset_floor: (120.0, 240.0),
                regions: vec![
                    RegionView { key: SOLAR_SYSTEM, position: Vec3::new(0.0, 15_000.0, 30_000.0) },
                    RegionView { key: SUN, position: Vec3::new(0.0, 150.0, 450.0) },
                    RegionView { key: ASTEROID_BELT, position: Vec3::new(0.0, 300.0, 1500.0) },
                    RegionView { key: KUIPER_BELT, position: Vec3::new(0.0, 600.0, 6000.0) },
                    RegionView { key: OORT_CLOUD, position: Vec3::new(0.0, 1500.0, 210_000.0) },
                ],
                clouds: vec![
                    belt(ASTEROID_BELT, 1200.0, 2400.0, 30.0, 1600, 0x888888, 0.0009),
                    belt(KUIPER_BELT, 18_300.0, 30_000.0, 60.0, 2000, 0x4466aa, 0.0004),
                    oort(120_000.0, 180_000.0, 3000),
                    stars(4000),
                ],
                initial_camera: Vec3::new(0.0, 500.0, 1000.0),
                orbit_limits: OrbitLimits { min_distance: 10.0, max_distance: 150_000.0 },
                fov_y_degrees: 60.0,
                far_plane: 300_000.0,
            },
            Preset::Compact => PresetSpec {
                preset: self,
                units_per_au: 200.0,
                transition_ms: 2000,
                planet_offset_floor: (0.0, 0.0),
                regions: vec![
                    RegionView { key: SOLAR_SYSTEM, position: Vec3::new(0.0, 5000.0, 10_000.0) },
                    RegionView { key: SUN, position: Vec3::new(0.0, 50.0, 150.0) },
                    RegionView { key: ASTEROID_BELT, position: Vec3::new(0.0, 100.0, 500.0) },
                    RegionView { key: KUIPER_BELT, position: Vec3::new(0.0, 200.0, 2000.0) },
                    RegionView { key: OORT_CLOUD, position: Vec3::new(0.0, 500.0, 70_000.0) },
                ],
                clouds: vec![
                    belt(ASTEROID_BELT, 400.0, 800.0, 20.0, 2000, 0x888888, 0.001),
                    belt(KUIPER_BELT, 6100.0, 10_000.0, 50.0, 3000, 0x4466aa, 0.0005),
                    oort(40_000.0, 60_000.0, 5000),
                    stars(10_000),
                ],
                initial_camera: Vec3::new(0.0, 500.0, 1000.0),
                orbit_limits: OrbitLimits { min_distance: 10.0, max_distance: 50_000.0 },
                fov_y_degrees: 75.0,
                far_plane: 100_000.0,
            },
        }
    }

    fn sizes(self) -> Sizes {
        match self {
            Preset::Classic => Sizes {
                sun: 120.0,
                planets: [
                    (9.0, 234.0),
                    (21.0, 432.0),
                    (22.5, 600.0),
                    (12.0, 912.0),
                    (72.0, 3120.0),
                    (63.0, 5724.0),
                    (75.0, 11_520.0),
                    (72.0, 18_036.0),
                ],
                saturn_ring: (10.0, 85.0),
                asteroid: 1620.0,
                kuiper: 24_000.0,
                oort: 150_000.0,
                system: 30_000.0,
            },
            Preset::Compact => Sizes {
                sun: 20.0,
                planets: [
                    (3.0, 78.0),
                    (7.0, 144.0),
                    (7.5, 200.0),
                    (4.0, 304.0),
                    (40.0, 1040.0),
                    (35.0, 1908.0),
                    (25.0, 3840.0),
                    (24.0, 6012.0),
                ],
                saturn_ring: (10.0, 25.0),
                asteroid: 540.0,
                kuiper: 8000.0,
                oort: 50_000.0,
                system: 10_000.0,
            },
        }
    }

    pub fn bodies(self) -> Vec<CelestialBody> {
        let sz = self.sizes();
        let mut out = Vec::with_capacity(14);

        out.push(CelestialBody {
            description: "A view of the entire solar system.",
            fun_fact: "The solar system is over 4.5 billion years old!",
            color: Rgb::hex(0xffffff),
            ..CelestialBody::new(SOLAR_SYSTEM, "Solar System", BodyKind::Region, sz.system)
        });
        out.push(CelestialBody {
            description: "Our magnificent star at the center of the solar system, providing light and energy to all planets.",
            fun_fact: "The Sun contains 99.86% of the solar system mass.",
            color: Rgb::hex(0xffff00),
            mean_distance_au: Some(0.0),
            ..CelestialBody::new(SUN, "Sun", BodyKind::Star, sz.sun)
        });

        for (i, p) in planet_facts().into_iter().enumerate() {
            let (radius, orbit) = sz.planets[i];
            let rings = (p.key == "saturn").then_some(RingSpec {
                inner_offset: sz.saturn_ring.0,
                outer_offset: sz.saturn_ring.1,
                color: Rgb::hex(0xfad0c4),
            });
            out.push(CelestialBody {
                description: p.description,
                fun_fact: p.fun_fact,
                color: Rgb::hex(p.color),
                orbit_radius: Some(orbit),
                orbit_period_days: Some(p.period),
                rotation_period_days: Some(p.rotation),
                axial_tilt_degrees: p.tilt,
                mean_distance_au: Some(p.au),
                moons: Some(p.moons),
                rings,
                ..CelestialBody::new(p.key, p.name, BodyKind::Planet, radius)
            });
        }

        out.push(CelestialBody {
            description: "A region between Mars and Jupiter filled with rocky debris from the solar system's formation.",
            fun_fact: "The asteroid belt contains millions of asteroids, but they're very far apart!",
            color: Rgb::hex(0x888888),
            ..CelestialBody::new(ASTEROID_BELT, "Asteroid Belt", BodyKind::Region, sz.asteroid)
        });
        out.push(CelestialBody {
            description: "A vast region beyond Neptune containing icy bodies and dwarf planets.",
            fun_fact: "Pluto is the largest known object in the Kuiper Belt!",
            color: Rgb::hex(0x4466aa),
            ..CelestialBody::new(KUIPER_BELT, "Kuiper Belt", BodyKind::Region, sz.kuiper)
        });
        out.push(CelestialBody {
            description: "A spherical shell of icy bodies surrounding our solar system nearly a light-year away.",
            fun_fact: "The Oort Cloud may contain trillions of icy objects!",
            color: Rgb::hex(0x6644aa),
            ..CelestialBody::new(OORT_CLOUD, "Oort Cloud", BodyKind::Region, sz.oort)
        });
        out
    }

    pub fn table(self) -> ConfigResult<BodyTable> {
        BodyTable::new(self.bodies())
    }
}

fn belt(key: &'static str, inner: f64, outer: f64, thickness: f64, count: usize, color: u32, per_frame: f64) -> CloudSpec {
    CloudSpec {
        key,
        shape: CloudShape::Annulus { inner, outer, thickness },
        count,
        color: Rgb::hex(color),
        drift_per_day: per_frame / SOURCE_FRAME_DAYS,
    }
}

fn oort(inner: f64, outer: f64, count: usize) -> CloudSpec {
    CloudSpec {
        key: OORT_CLOUD,
        shape: CloudShape::Shell { inner, outer },
        count,
        color: Rgb::hex(0x6644aa),
        drift_per_day: 0.0,
    }
}

fn stars(count: usize) -> CloudSpec {
    CloudSpec {
        key: STARS,
        shape: CloudShape::Cube { extent: 100_000.0 },
        count,
        color: Rgb::hex(0xffffff),
        drift_per_day: 0.0,
    }
}

struct PlanetFacts {
    key: &'static str,
    name: &'static str,
    period: f64,
    rotation: f64,
    tilt: f64,
    color: u32,
    au: f64,
    moons: MoonInfo,
    description: &'static str,
    fun_fact: &'static str,
}

fn planet_facts() -> [PlanetFacts; 8] {
    [
        PlanetFacts {
            key: "mercury",
            name: "Mercury",
            period: 88.0,
            rotation: 58.6,
            tilt: 0.034,
            color: 0x8c7853,
            au: 0.39,
            moons: MoonInfo::Count(0),
            description: "The closest planet to the Sun and the fastest in our solar system!",
            fun_fact: "Mercury has no atmosphere and temperatures swing from 800°F to -290°F!",
        },
        PlanetFacts {
            key: "venus",
            name: "Venus",
            period: 225.0,
            rotation: -243.0,
            tilt: 177.4,
            color: 0xffc649,
            au: 0.72,
            moons: MoonInfo::Count(0),
            description: "The hottest planet with a thick toxic atmosphere and volcanic landscape.",
            fun_fact: "Venus spins backwards! A day on Venus is longer than its year!",
        },
        PlanetFacts {
            key: "earth",
            name: "Earth",
            period: 365.0,
            rotation: 1.0,
            tilt: 23.44,
            color: 0x4facfe,
            au: 1.00,
            moons: MoonInfo::Detailed(vec![MoonRecord {
                name: "Moon",
                distance: "384,400 km",
                discovery: "Known since prehistory",
                fact: "Always shows the same face to Earth.",
            }]),
            description: "Our beautiful home planet with perfect conditions for life as we know it.",
            fun_fact: "Earth is the only planet known to have liquid water and support life!",
        },
        PlanetFacts {
            key: "mars",
            name: "Mars",
            period: 687.0,
            rotation: 1.03,
            tilt: 25.19,
            color: 0xff6b6b,
            au: 1.52,
            moons: MoonInfo::Detailed(vec![
                MoonRecord {
                    name: "Phobos",
                    distance: "9,376 km",
                    discovery: "Asaph Hall, 1877",
                    fact: "Spirals slowly inward and will eventually break apart.",
                },
                MoonRecord {
                    name: "Deimos",
                    distance: "23,463 km",
                    discovery: "Asaph Hall, 1877",
                    fact: "Only about 12 km across.",
                },
            ]),
            description: "The Red Planet where scientists search for signs of ancient life.",
            fun_fact: "Mars has the largest volcano in the solar system - Olympus Mons!",
        },
        PlanetFacts {
            key: "jupiter",
            name: "Jupiter",
            period: 4333.0,
            rotation: 0.41,
            tilt: 3.13,
            color: 0xd2691e,
            au: 5.20,
            moons: MoonInfo::Count(95),
            description: "The giant gas planet with a famous Great Red Spot storm.",
            fun_fact: "Jupiter is so big that all other planets could fit inside it!",
        },
        PlanetFacts {
            key: "saturn",
            name: "Saturn",
            period: 10_759.0,
            rotation: 0.45,
            tilt: 26.73,
            color: 0xfad0c4,
            au: 9.54,
            moons: MoonInfo::Count(146),
            description: "The beautiful ringed planet with spectacular icy rings.",
            fun_fact: "Saturn would float in water - it's less dense than water!",
        },
        PlanetFacts {
            key: "uranus",
            name: "Uranus",
            period: 30_687.0,
            rotation: -0.72,
            tilt: 97.77,
            color: 0x4dd0e1,
            au: 19.20,
            moons: MoonInfo::Count(27),
            description: "The tilted ice giant with faint rings and methane atmosphere.",
            fun_fact: "Uranus rotates on its side like a rolling ball!",
        },
        PlanetFacts {
            key: "neptune",
            name: "Neptune",
            period: 60_190.0,
            rotation: 0.67,
            tilt: 28.32,
            color: 0x1e3c72,
            au: 30.06,
            moons: MoonInfo::Count(14),
            description: "The deep blue windy planet at the edge of our solar system.",
            fun_fact: "Neptune has the strongest winds in the solar system - up to 1,200 mph!",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_presets_validate() {
        for p in Preset::ALL {
            let t = p.table().unwrap();
            assert_eq!(t.len(), 13, "{p}");
            assert_eq!(t.orbiting().count(), 8);
        }
    }

    #[test]
    fn classic_earth_sits_at_one_au() {
        let spec = Preset::Classic.spec();
        let t = Preset::Classic.table().unwrap();
        let earth = t.get("earth").unwrap();
        assert_eq!(earth.orbit_radius, Some(spec.units_per_au));
        assert_eq!(earth.orbit_period_days, Some(365.0));
    }

    #[test]
    fn compact_earth_sits_at_one_au() {
        let spec = Preset::Compact.spec();
        let earth = Preset::Compact.table().unwrap().get("earth").cloned().unwrap();
        assert_eq!(earth.orbit_radius, Some(spec.units_per_au));
    }

    #[test]
    fn every_region_key_is_in_the_table() {
        for p in Preset::ALL {
            let t = p.table().unwrap();
            for r in &p.spec().regions {
                assert!(t.get(r.key).is_some(), "{} missing in {p}", r.key);
            }
        }
    }

    #[test]
    fn retrograde_bodies_have_negative_rotation() {
        let t = Preset::Classic.table().unwrap();
        assert!(t.get("venus").unwrap().rotation_period_days.unwrap() < 0.0);
        assert!(t.get("uranus").unwrap().rotation_period_days.unwrap() < 0.0);
    }

    #[test]
    fn only_saturn_has_rings() {
        let t = Preset::Classic.table().unwrap();
        let ringed: Vec<_> = t.iter().filter(|b| b.rings.is_some()).map(|b| b.key).collect();
        assert_eq!(ringed, vec!["saturn"]);
    }

    #[test]
    fn belt_drift_matches_source_frame_rate() {
        let spec = Preset::Classic.spec();
        let asteroid = spec.clouds.iter().find(|c| c.key == ASTEROID_BELT).unwrap();
        assert!((asteroid.drift_per_day * 0.016 - 0.0009).abs() < 1e-15);
    }

    #[test]
    fn preset_parses_and_prints() {
        assert_eq!("classic".parse::<Preset>(), Ok(Preset::Classic));
        assert_eq!("Compact".parse::<Preset>(), Ok(Preset::Compact));
        assert!("huge".parse::<Preset>().is_err());
        assert_eq!(Preset::Compact.to_string(), "compact");
    }
}
