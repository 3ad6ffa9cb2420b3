use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Marks the rideable quadcopter entity.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct TourDrone;

/// Marks the entity whose transform is the rider's camera.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Rider;

/// A named animation clip on the drone model and whether it should be playing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotorClip {
    pub name: String,
    pub playing: bool,
}

/// Rotor spin clips of the drone model.
///
/// Rendering hosts read the `playing` flags and drive their animation player from them.
#[derive(Component, Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotorRig {
    pub clips: Vec<RotorClip>,
}

impl RotorRig {
    /// Creates a rig with every clip stopped.
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Self {
        Self {
            clips: names
                .iter()
                .map(|name| RotorClip {
                    name: name.as_ref().to_string(),
                    playing: false,
                })
                .collect(),
        }
    }

    /// Starts or stops the named clip. Returns false if no clip has that name.
    pub fn set_playing(&mut self, name: &str, playing: bool) -> bool {
        match self.clips.iter_mut().find(|clip| clip.name == name) {
            Some(clip) => {
                clip.playing = playing;
                true
            }
            None => false,
        }
    }

    pub fn is_playing(&self, name: &str) -> bool {
        self.clips
            .iter()
            .any(|clip| clip.name == name && clip.playing)
    }

    pub fn all_playing(&self) -> bool {
        !self.clips.is_empty() && self.clips.iter().all(|clip| clip.playing)
    }

    pub fn any_playing(&self) -> bool {
        self.clips.iter().any(|clip| clip.playing)
    }
}

/// Looped propulsion sound attached to the drone.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropulsionAudio {
    pub playing: bool,
    pub looped: bool,
}

impl Default for PropulsionAudio {
    fn default() -> Self {
        Self {
            playing: false,
            looped: true,
        }
    }
}
