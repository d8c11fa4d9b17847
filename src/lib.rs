//! Orbital animation and camera navigation for a solar-system tour.
//!
//! [`sim::Simulation`] is the single owner of mutable state. A host calls
//! [`sim::Simulation::frame`] once per display refresh and
//! [`sim::Simulation::select`] when the user picks a body or region; the
//! rest of the crate is pure functions and plain data.

pub mod body;
pub mod camera;
pub mod catalog;
pub mod clock;
pub mod cloud;
pub mod error;
pub mod math;
pub mod navigation;
pub mod orbit;
pub mod panel;
pub mod popup;
pub mod sim;

pub use body::{BodyKind, BodyTable, CelestialBody, MoonInfo, MoonRecord, Rgb};
pub use camera::{CameraNavigator, CameraPose, CameraTransition};
pub use catalog::{Preset, PresetSpec};
pub use clock::SimulationClock;
pub use error::{ConfigError, ConfigResult};
pub use math::Vec3;
pub use navigation::Destination;
pub use sim::Simulation;
