//! Flight controller for a rideable tour drone in a Bevy scene.
//!
//! A rider boards by jumping onto the parked drone, steers it with their gaze,
//! descends by looking down for a sustained moment and sends it home by stepping off.

pub mod components;
pub mod plugins;
pub mod resources;
pub mod systems;
pub mod utils;

pub use components::{FlightController, FlightState, Rider, TourDrone};
pub use plugins::TourDronePlugin;
pub use resources::FlightConfig;
