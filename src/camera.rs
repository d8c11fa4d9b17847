//! Camera pose interpolation.
//!
//! A [`CameraNavigator`] owns the live camera pose and at most one
//! [`CameraTransition`]. Starting a new transition re-anchors at whatever pose
//! the last tick produced, so re-targeting mid-flight never jumps.

use crate::math::{ease_out_cubic, Vec3};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub look_at: Vec3,
}

impl CameraPose {
    pub fn new(position: Vec3, look_at: Vec3) -> Self {
        Self { position, look_at }
    }

    pub fn distance(&self) -> f64 {
        (self.position - self.look_at).len()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraTransition {
    pub start: CameraPose,
    pub target: CameraPose,
    pub started_at_ms: f64,
    pub duration_ms: f64,
}

impl CameraTransition {
    /// Linear progress in `[0, 1]`.
    pub fn progress(&self, now_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now_ms - self.started_at_ms) / self.duration_ms).clamp(0.0, 1.0)
    }

    pub fn pose_at(&self, now_ms: f64) -> (CameraPose, f64) {
        let progress = self.progress(now_ms);
        let ease = ease_out_cubic(progress);
        let pose = CameraPose {
            position: Vec3::lerp(self.start.position, self.target.position, ease),
            look_at: Vec3::lerp(self.start.look_at, self.target.look_at, ease),
        };
        (pose, progress)
    }
}

/// Distance bounds for manual orbiting.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitLimits {
    pub min_distance: f64,
    pub max_distance: f64,
}

#[derive(Clone, Debug)]
pub struct CameraNavigator {
    pose: CameraPose,
    transition: Option<CameraTransition>,
}

impl CameraNavigator {
    pub fn new(pose: CameraPose) -> Self {
        Self { pose, transition: None }
    }

    pub fn pose(&self) -> CameraPose {
        self.pose
    }

    pub fn transition(&self) -> Option<&CameraTransition> {
        self.transition.as_ref()
    }

    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    /// Replace any in-flight transition with a fresh one anchored at the
    /// current pose.
    pub fn begin_transition(&mut self, target_position: Vec3, target_look_at: Vec3, duration_ms: f64, now_ms: f64) {
        self.transition = Some(CameraTransition {
            start: self.pose,
            target: CameraPose::new(target_position, target_look_at),
            started_at_ms: now_ms,
            duration_ms,
        });
    }

    /// Move the pose along the active transition. Returns true while more
    /// ticks are needed; once progress reaches 1 the pose is exactly the
    /// target and the transition is dropped.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        let Some(t) = self.transition else {
            return false;
        };
        let (pose, progress) = t.pose_at(now_ms);
        self.pose = pose;
        if progress < 1.0 {
            true
        } else {
            self.transition = None;
            false
        }
    }

    pub fn cancel(&mut self) {
        self.transition = None;
    }

    /// Orbit the camera around its look-at point. Manual input takes over
    /// from any running transition, keeping the pose where it is.
    pub fn orbit(&mut self, yaw: f64, pitch: f64) {
        self.transition = None;
        let offset = self.pose.position - self.pose.look_at;
        let dist = offset.len();
        if dist <= 0.0 {
            return;
        }
        let flat = (offset.x * offset.x + offset.z * offset.z).sqrt();
        let elevation = (offset.y.atan2(flat) + pitch).clamp(-1.45, 1.45);
        let heading = offset.x.atan2(offset.z) + yaw;
        let (se, ce) = elevation.sin_cos();
        let (sh, ch) = heading.sin_cos();
        let rotated = Vec3::new(dist * ce * sh, dist * se, dist * ce * ch);
        self.pose.position = self.pose.look_at + rotated;
    }

    /// Scale the camera's distance to its look-at point.
    pub fn dolly(&mut self, factor: f64, limits: OrbitLimits) {
        self.transition = None;
        let offset = self.pose.position - self.pose.look_at;
        let dist = offset.len();
        if dist <= 0.0 || factor <= 0.0 {
            return;
        }
        let want = (dist * factor).clamp(limits.min_distance, limits.max_distance);
        self.pose.position = self.pose.look_at + offset * (want / dist);
    }
}
