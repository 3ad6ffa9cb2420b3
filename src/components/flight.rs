use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::components::{gesture::DescentGesture, view::RiderView};
use crate::resources::{CadenceGate, EnvelopeReference, FlightConfig};
use crate::systems::proximity_score;

/// Whether the drone is parked or carrying a rider.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlightState {
    /// Parked at the home pose, ignoring the rider's gaze.
    #[default]
    Idle,
    /// Following the rider's look direction.
    Flying,
}

/// State change that happened during a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlightTransition {
    Mounted,
    Dismounted,
}

/// Side effect requested from the host on a transition edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlightCommand {
    SetRotor { clip: String, playing: bool },
    SetAudio { playing: bool },
}

/// A [`FlightCommand`] addressed to a particular drone entity.
#[derive(Event, Debug, Clone, PartialEq)]
pub struct FlightCommandEvent {
    pub drone: Entity,
    pub command: FlightCommand,
}

/// Which checks held the drone back during a tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuppressionFlags {
    pub low_altitude: bool,
    pub descent_gate: bool,
    pub out_of_bounds: bool,
}

/// Outcome of a single [`FlightController::tick`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    /// False when the cadence gate skipped this tick.
    pub ran: bool,
    pub transition: Option<FlightTransition>,
    /// Displacement actually applied to the drone.
    pub displacement: Vec3,
    pub suppressed: SuppressionFlags,
    pub commands: Vec<FlightCommand>,
}

/// Serializable snapshot of the controller and drone position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightTelemetry {
    pub state: FlightState,
    pub gesture_samples: u32,
    pub descent_permitted: bool,
    pub position: Vec3,
}

/// Per-tick state machine of the tour drone.
///
/// Owns every piece of mutable flight state. The drone's pose is passed in by the
/// caller and is only written while flying or on the reset back to the home pose.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct FlightController {
    state: FlightState,
    gesture: DescentGesture,
    body_gate: CadenceGate,
    gesture_gate: CadenceGate,
}

impl FlightController {
    pub fn new(config: &FlightConfig) -> Self {
        Self {
            state: FlightState::Idle,
            gesture: DescentGesture::new(config.gesture_threshold),
            body_gate: CadenceGate::new(config.controller_cadence),
            gesture_gate: CadenceGate::new(config.gesture_cadence),
        }
    }

    pub fn state(&self) -> FlightState {
        self.state
    }

    pub fn gesture(&self) -> &DescentGesture {
        &self.gesture
    }

    pub fn telemetry(&self, pose: &Transform) -> FlightTelemetry {
        FlightTelemetry {
            state: self.state,
            gesture_samples: self.gesture.samples(),
            descent_permitted: self.gesture.descent_permitted(),
            position: pose.translation,
        }
    }

    /// Advances the controller by one frame of `dt`.
    pub fn tick(
        &mut self,
        config: &FlightConfig,
        dt: Duration,
        view: &impl RiderView,
        pose: &mut Transform,
    ) -> TickReport {
        let mut report = TickReport::default();
        let Some(span) = self.body_gate.advance(dt) else {
            return report;
        };
        report.ran = true;

        let user = view.current_position();
        let dist = proximity_score(user, pose.translation, &config.proximity);

        if self.state == FlightState::Idle
            && user.y > config.min_boarding_altitude
            && dist <= config.mount_threshold
        {
            self.enter_flying(config, &mut report);
        }

        if self.state == FlightState::Flying {
            self.fly(config, span, view, pose, &mut report);
        }

        report
    }

    fn fly(
        &mut self,
        config: &FlightConfig,
        span: Duration,
        view: &impl RiderView,
        pose: &mut Transform,
        report: &mut TickReport,
    ) {
        let look = view.current_look_direction();
        let mut displacement = look * config.cruise_speed;

        if self.gesture_gate.advance(span).is_some() {
            self.gesture.sample(look.y);
        }

        let reference = |which: EnvelopeReference| match which {
            EnvelopeReference::Vehicle => pose.translation,
            EnvelopeReference::Rider => view.current_position(),
        };
        let altitude = reference(config.altitude_reference).y;
        let origin = reference(config.bounds_reference);

        if altitude < config.low_altitude && displacement.y <= 0.0 {
            report.suppressed.low_altitude = displacement.y < 0.0;
            displacement.y = 0.0;
        }

        if !self.gesture.descent_permitted() && displacement.y < 0.0 {
            report.suppressed.descent_gate = true;
            displacement.y = 0.0;
        }

        let next = origin + displacement;
        if config.volume.contains(next) {
            pose.translation += displacement;
            report.displacement = displacement;
        } else {
            report.suppressed.out_of_bounds = true;
            debug!(
                "Holding drone at {}: next position {} leaves the flight volume",
                pose.translation, next
            );
        }

        let dist = proximity_score(view.current_position(), pose.translation, &config.proximity);
        if dist > config.disengage_threshold {
            self.enter_idle(config, pose, report);
        }
    }

    fn enter_flying(&mut self, config: &FlightConfig, report: &mut TickReport) {
        info!("Rider boarded the tour drone, starting rotors");
        self.state = FlightState::Flying;
        report.transition = Some(FlightTransition::Mounted);
        report.commands.extend(Self::propulsion_commands(config, true));
    }

    fn enter_idle(&mut self, config: &FlightConfig, pose: &mut Transform, report: &mut TickReport) {
        info!(
            "Rider left the tour drone at {}, returning home",
            pose.translation
        );
        self.state = FlightState::Idle;
        self.gesture.reset();
        self.gesture_gate.reset();
        pose.translation = config.home.position;
        pose.rotation = config.home.rotation;
        report.transition = Some(FlightTransition::Dismounted);
        report.commands.extend(Self::propulsion_commands(config, false));
    }

    fn propulsion_commands(
        config: &FlightConfig,
        playing: bool,
    ) -> impl Iterator<Item = FlightCommand> + '_ {
        config
            .rotor_clips
            .iter()
            .map(move |clip| FlightCommand::SetRotor {
                clip: clip.clone(),
                playing,
            })
            .chain(std::iter::once(FlightCommand::SetAudio { playing }))
    }
}
