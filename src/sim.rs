//! The frame-driven controller that owns all mutable simulation state.

use crate::body::{BodyTable, CelestialBody};
use crate::camera::{CameraNavigator, CameraPose};
use crate::catalog::{Preset, PresetSpec};
use crate::clock::SimulationClock;
use crate::cloud::PointCloud;
use crate::error::ConfigResult;
use crate::math::Vec3;
use crate::navigation::{select_destination, Destination};
use crate::orbit::{position_of, rotation_delta_of, BodyPose};
use crate::popup::FactPopup;
use tracing::{debug, info, warn};

pub struct Simulation {
    spec: PresetSpec,
    table: BodyTable,
    clock: SimulationClock,
    speed: f64,
    poses: Vec<BodyPose>,
    clouds: Vec<PointCloud>,
    camera: CameraNavigator,
    selected: Option<&'static str>,
    popup: FactPopup,
}

impl Simulation {
    pub fn new(preset: Preset, seed: u64) -> ConfigResult<Self> {
        let table = preset.table()?;
        Ok(Self::with_table(preset.spec(), table, seed))
    }

    pub fn with_table(spec: PresetSpec, table: BodyTable, seed: u64) -> Self {
        let poses = table.iter().map(BodyPose::at_rest).collect();
        let clouds = spec
            .clouds
            .iter()
            .enumerate()
            .map(|(i, c)| PointCloud::sample(*c, seed.wrapping_add(i as u64)))
            .collect();
        let camera = CameraNavigator::new(CameraPose::new(spec.initial_camera, Vec3::ZERO));
        info!(
            preset = %spec.preset,
            bodies = table.len(),
            orbiting = table.orbiting().count(),
            "body table loaded"
        );
        Self {
            spec,
            table,
            clock: SimulationClock::new(),
            speed: 1.0,
            poses,
            clouds,
            camera,
            selected: None,
            popup: FactPopup::new(),
        }
    }

    pub fn spec(&self) -> &PresetSpec {
        &self.spec
    }

    pub fn table(&self) -> &BodyTable {
        &self.table
    }

    pub fn simulated_days(&self) -> f64 {
        self.clock.simulated_days()
    }

    pub fn clock(&self) -> &SimulationClock {
        &self.clock
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn set_speed(&mut self, speed: f64) {
        if speed.is_finite() {
            self.speed = speed;
        }
    }

    pub fn camera(&self) -> &CameraNavigator {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut CameraNavigator {
        &mut self.camera
    }

    pub fn clouds(&self) -> &[PointCloud] {
        &self.clouds
    }

    pub fn popup(&self) -> &FactPopup {
        &self.popup
    }

    pub fn popup_mut(&mut self) -> &mut FactPopup {
        &mut self.popup
    }

    pub fn selected(&self) -> Option<&CelestialBody> {
        self.selected.and_then(|k| self.table.get(k))
    }

    /// Bodies paired with their current pose, in table order.
    pub fn bodies(&self) -> impl Iterator<Item = (&CelestialBody, &BodyPose)> {
        self.table.iter().zip(self.poses.iter())
    }

    pub fn pose_of(&self, key: &str) -> Option<&BodyPose> {
        self.table.index_of(key).map(|i| &self.poses[i])
    }

    /// Advance simulated time only. Returns the simulated days that elapsed.
    pub fn advance(&mut self, frame_delta_seconds: f64, speed_multiplier: f64) -> f64 {
        self.clock.advance(frame_delta_seconds, speed_multiplier)
    }

    /// Position of a body at an arbitrary simulated time.
    pub fn position_of(&self, key: &str, simulated_days: f64) -> Option<Vec3> {
        position_of(self.table.get(key)?, simulated_days)
    }

    /// Camera destination for `key` at the current simulated time.
    pub fn select_destination(&self, key: &str) -> Option<Destination> {
        select_destination(&self.table, &self.spec, key, self.clock.simulated_days())
    }

    /// Select a body or region: retarget the camera, show its fun fact.
    /// Unknown keys leave everything untouched.
    pub fn select(&mut self, key: &str, now_ms: f64) -> Option<Destination> {
        let Some(body) = self.table.get(key) else {
            warn!(key, "ignoring selection of unknown key");
            return None;
        };
        let body_key = body.key;
        let fun_fact = body.fun_fact;
        let dest = self.select_destination(key)?;

        self.selected = Some(body_key);
        if !fun_fact.is_empty() {
            self.popup.show(fun_fact, now_ms);
        }
        self.camera
            .begin_transition(dest.position, dest.look_at, self.spec.transition_ms as f64, now_ms);
        debug!(key = body_key, ?dest, days = self.clock.simulated_days(), "camera transition started");
        Some(dest)
    }

    /// One frame: clock first, then every body from the same time snapshot,
    /// then the camera. Returns whether a camera transition is still running.
    pub fn frame(&mut self, frame_delta_seconds: f64, now_ms: f64) -> bool {
        let speed = self.speed;
        let delta_days = self.clock.advance(frame_delta_seconds, speed);
        let t = self.clock.simulated_days();

        for (body, pose) in self.table.iter().zip(self.poses.iter_mut()) {
            if let Some(p) = position_of(body, t) {
                pose.position = p;
                pose.spin += rotation_delta_of(body, frame_delta_seconds, speed);
            }
        }
        for cloud in &mut self.clouds {
            cloud.advance(delta_days);
        }

        let was_animating = self.camera.is_animating();
        let animating = self.camera.tick(now_ms);
        if was_animating && !animating {
            debug!(pose = ?self.camera.pose(), "camera transition finished");
        }
        animating
    }
}
