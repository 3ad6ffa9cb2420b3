use bevy::prelude::*;

use crate::components::{FlightCommand, FlightCommandEvent, PropulsionAudio, RotorRig};

/// Applies rotor and audio commands to the drone's host components.
pub fn apply_flight_commands(
    mut command_events: EventReader<FlightCommandEvent>,
    mut drone_query: Query<(Option<&mut RotorRig>, Option<&mut PropulsionAudio>)>,
) {
    for event in command_events.read() {
        let Ok((rig, audio)) = drone_query.get_mut(event.drone) else {
            warn!("Flight command for missing drone {:?}", event.drone);
            continue;
        };

        match &event.command {
            FlightCommand::SetRotor { clip, playing } => match rig {
                Some(mut rig) => {
                    if !rig.set_playing(clip, *playing) {
                        warn!("Drone {:?} has no rotor clip named {}", event.drone, clip);
                    }
                }
                None => warn!("Drone {:?} has no rotor rig", event.drone),
            },
            FlightCommand::SetAudio { playing } => match audio {
                Some(mut audio) => audio.playing = *playing,
                None => warn!("Drone {:?} has no propulsion audio", event.drone),
            },
        }
    }
}
