use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

use crate::resources::cadence::Cadence;
use crate::utils::errors::ConfigError;

/// Inclusive, axis-aligned volume the drone is allowed to fly in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlightVolume {
    pub min: Vec3,
    pub max: Vec3,
}

impl FlightVolume {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Builds the volume by insetting the nominal world edges by `padding` on every side.
    pub fn padded(world_min: Vec3, world_max: Vec3, padding: f32) -> Self {
        Self {
            min: world_min + Vec3::splat(padding),
            max: world_max - Vec3::splat(padding),
        }
    }

    /// True when `position` is inside the volume. Points on the boundary are inside.
    pub fn contains(&self, position: Vec3) -> bool {
        position.cmpge(self.min).all() && position.cmple(self.max).all()
    }
}

impl Default for FlightVolume {
    fn default() -> Self {
        Self {
            min: Vec3::new(6.0, 0.0, 6.0),
            max: Vec3::new(74.0, 94.0, 89.0),
        }
    }
}

/// Parameters of the vertical term of the proximity score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProximityConfig {
    /// Squared vertical gap above which the user counts as on another level.
    pub vertical_cutoff_sq: f32,
    /// Flat amount added to the score once the cutoff is exceeded.
    pub vertical_penalty: f32,
}

impl Default for ProximityConfig {
    fn default() -> Self {
        Self {
            vertical_cutoff_sq: 99_999.0,
            vertical_penalty: 999.0,
        }
    }
}

/// Pose the drone is parked at while idle, and restored to on dismount.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HomePose {
    pub position: Vec3,
    pub rotation: Quat,
}

impl HomePose {
    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.position).with_rotation(self.rotation)
    }
}

impl Default for HomePose {
    fn default() -> Self {
        Self {
            position: Vec3::new(10.8, 0.5, 56.0),
            rotation: Quat::IDENTITY,
        }
    }
}

/// A position the altitude guard or the bounds check is measured from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnvelopeReference {
    /// The drone itself.
    Vehicle,
    /// The rider's camera, which sits on the deck while flying.
    Rider,
}

/// Scene constants for the tour drone.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightConfig {
    /// Displacement per controller step along a unit look direction.
    pub cruise_speed: f32,
    /// Proximity score at or below which a rider can board.
    pub mount_threshold: f32,
    /// Proximity score above which the rider is considered gone.
    pub disengage_threshold: f32,
    /// Rider altitude that must be exceeded to board (the rider has jumped on).
    pub min_boarding_altitude: f32,
    /// Below this altitude the drone will not fly downward or level off lower.
    pub low_altitude: f32,
    /// Consecutive downward samples needed before descent is allowed.
    pub gesture_threshold: u32,
    /// How often the controller body runs, counted in frames or time.
    pub controller_cadence: Cadence,
    /// How often the descent gesture samples, counted in controller body runs or time.
    pub gesture_cadence: Cadence,
    pub proximity: ProximityConfig,
    pub volume: FlightVolume,
    pub home: HomePose,
    /// Whose altitude the low-altitude guard reads.
    pub altitude_reference: EnvelopeReference,
    /// Whose next position must stay inside the flight volume.
    pub bounds_reference: EnvelopeReference,
    pub rotor_clips: [String; 4],
}

impl Default for FlightConfig {
    fn default() -> Self {
        Self {
            cruise_speed: 0.08,
            mount_threshold: 3.0,
            disengage_threshold: 20.0,
            min_boarding_altitude: 2.0,
            low_altitude: 4.25,
            gesture_threshold: 20,
            controller_cadence: Cadence::EveryNth(2),
            gesture_cadence: Cadence::EveryNth(2),
            proximity: ProximityConfig::default(),
            volume: FlightVolume::default(),
            home: HomePose::default(),
            altitude_reference: EnvelopeReference::Rider,
            bounds_reference: EnvelopeReference::Vehicle,
            rotor_clips: ["Spin1", "Spin2", "Spin3", "Spin4"].map(String::from),
        }
    }
}

impl FlightConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: FlightConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    pub fn to_yaml_string(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: String| Err(ConfigError::ValidationError(msg));

        if !self.cruise_speed.is_finite() || self.cruise_speed <= 0.0 {
            return invalid(format!(
                "cruise_speed must be positive, got {}",
                self.cruise_speed
            ));
        }
        if self.mount_threshold < 0.0 || self.disengage_threshold < 0.0 {
            return invalid("proximity thresholds must be non-negative".to_string());
        }
        if self.mount_threshold > self.disengage_threshold {
            return invalid(format!(
                "mount_threshold ({}) exceeds disengage_threshold ({})",
                self.mount_threshold, self.disengage_threshold
            ));
        }
        if self.proximity.vertical_cutoff_sq < 0.0 || self.proximity.vertical_penalty < 0.0 {
            return invalid("proximity cutoff and penalty must be non-negative".to_string());
        }
        if self.gesture_threshold == 0 {
            return invalid("gesture_threshold must be at least 1".to_string());
        }
        if !self.controller_cadence.is_valid() {
            return invalid(format!(
                "controller_cadence has a zero period: {:?}",
                self.controller_cadence
            ));
        }
        if !self.gesture_cadence.is_valid() {
            return invalid(format!(
                "gesture_cadence has a zero period: {:?}",
                self.gesture_cadence
            ));
        }
        if self.volume.min.cmpgt(self.volume.max).any() {
            return invalid(format!(
                "flight volume is inverted: min {} max {}",
                self.volume.min, self.volume.max
            ));
        }
        if !self.volume.contains(self.home.position) {
            return invalid(format!(
                "home position {} lies outside the flight volume",
                self.home.position
            ));
        }
        Ok(())
    }
}
