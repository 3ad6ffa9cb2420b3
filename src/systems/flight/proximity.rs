use bevy::prelude::*;

use crate::resources::ProximityConfig;

/// Cheap closeness score between the rider and the drone, used only against thresholds.
///
/// The score is the squared planar (x/z) separation plus a flat vertical penalty. The
/// penalty is zero for moderate height differences, so a rider standing slightly above
/// or below the deck still counts as close. Once the squared vertical gap exceeds
/// `vertical_cutoff_sq` the full `vertical_penalty` is added, which keeps riders on a
/// different level from ever meeting the mount threshold.
pub fn proximity_score(user: Vec3, vehicle: Vec3, config: &ProximityConfig) -> f32 {
    let dx = user.x - vehicle.x;
    let dz = user.z - vehicle.z;
    let dy = user.y - vehicle.y;
    let planar = dx * dx + dz * dz;
    let vertical = dy * dy;

    let penalty = if vertical > config.vertical_cutoff_sq {
        config.vertical_penalty
    } else {
        0.0
    };

    planar + penalty
}
