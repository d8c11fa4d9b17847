//! Static point clouds: asteroid and Kuiper belts, the Oort cloud and the star
//! backdrop. Sampled once; afterwards only a whole-cloud drift angle changes.

use crate::body::Rgb;
use crate::math::{Vec3, TAU};
use rand::{rngs::StdRng, Rng, SeedableRng};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CloudShape {
    /// Flat ring on the XZ plane with a thin vertical jitter band.
    Annulus { inner: f64, outer: f64, thickness: f64 },
    /// Spherical shell, uniform over the sphere.
    Shell { inner: f64, outer: f64 },
    /// Axis-aligned cube centred on the origin.
    Cube { extent: f64 },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CloudSpec {
    pub key: &'static str,
    pub shape: CloudShape,
    pub count: usize,
    pub color: Rgb,
    /// Whole-cloud spin about Y, radians per simulated day.
    pub drift_per_day: f64,
}

#[derive(Clone, Debug)]
pub struct PointCloud {
    pub spec: CloudSpec,
    pub points: Vec<Vec3>,
    /// Accumulated drift, radians. Never wrapped.
    pub drift: f64,
}

impl PointCloud {
    pub fn sample(spec: CloudSpec, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let points = (0..spec.count).map(|_| sample_point(spec.shape, &mut rng)).collect();
        Self { spec, points, drift: 0.0 }
    }

    pub fn advance(&mut self, frame_delta_days: f64) {
        self.drift += self.spec.drift_per_day * frame_delta_days;
    }

    /// Points with the current drift applied.
    pub fn world_points(&self) -> impl Iterator<Item = Vec3> + '_ {
        let drift = self.drift;
        self.points.iter().map(move |p| p.rot_y(drift))
    }
}

fn sample_point(shape: CloudShape, rng: &mut impl Rng) -> Vec3 {
    match shape {
        CloudShape::Annulus { inner, outer, thickness } => {
            let angle = rng.gen::<f64>() * TAU;
            let radius = inner + rng.gen::<f64>() * (outer - inner);
            let height = (rng.gen::<f64>() - 0.5) * thickness;
            Vec3::new(angle.cos() * radius, height, angle.sin() * radius)
        }
        CloudShape::Shell { inner, outer } => {
            let theta = rng.gen::<f64>() * TAU;
            // acos keeps the density flat across latitudes instead of piling up at the poles
            let phi = (2.0 * rng.gen::<f64>() - 1.0).acos();
            let radius = inner + rng.gen::<f64>() * (outer - inner);
            Vec3::new(
                radius * phi.sin() * theta.cos(),
                radius * phi.sin() * theta.sin(),
                radius * phi.cos(),
            )
        }
        CloudShape::Cube { extent } => Vec3::new(
            (rng.gen::<f64>() - 0.5) * extent,
            (rng.gen::<f64>() - 0.5) * extent,
            (rng.gen::<f64>() - 0.5) * extent,
        ),
    }
}
