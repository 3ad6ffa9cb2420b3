use bevy::prelude::*;

use crate::components::{FlightCommandEvent, FlightController, PropulsionAudio, RotorRig, TourDrone};
use crate::resources::FlightConfig;
use crate::utils::ConfigError;
use crate::systems::{apply_flight_commands, flight_controller_system};

/// Ordering of the tour drone systems within a frame.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum TourDroneSet {
    /// Reads the rider and moves the drone.
    Control,
    /// Applies rotor and audio commands raised by the controller.
    Effects,
}

/// Spawns the tour drone and schedules its systems. Only built from a validated config.
pub struct TourDronePlugin {
    config: FlightConfig,
}

impl TourDronePlugin {
    pub fn new(config: FlightConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(TourDronePlugin { config })
    }

    fn spawn_tour_drone(mut commands: Commands, config: Res<FlightConfig>) {
        info!("Spawning tour drone at {}", config.home.position);
        commands.spawn((
            Name::new("vehicleQuadcopter"),
            TourDrone,
            FlightController::new(&config),
            config.home.transform(),
            RotorRig::from_names(&config.rotor_clips),
            PropulsionAudio::default(),
        ));
    }
}

impl Default for TourDronePlugin {
    fn default() -> Self {
        TourDronePlugin {
            config: FlightConfig::default(),
        }
    }
}

impl Plugin for TourDronePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.config.clone())
            .add_event::<FlightCommandEvent>()
            .configure_sets(Update, (TourDroneSet::Control, TourDroneSet::Effects).chain())
            .add_systems(Startup, Self::spawn_tour_drone)
            .add_systems(
                Update,
                (
                    flight_controller_system.in_set(TourDroneSet::Control),
                    apply_flight_commands.in_set(TourDroneSet::Effects),
                ),
            );
    }
}
