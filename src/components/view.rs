use bevy::prelude::*;

/// Source of the rider's camera position and look direction.
///
/// Both are synchronous reads and are assumed to always be valid while the
/// controller runs.
pub trait RiderView {
    fn current_position(&self) -> Vec3;

    /// Camera forward, unit or near-unit.
    fn current_look_direction(&self) -> Vec3;
}

impl RiderView for Transform {
    fn current_position(&self) -> Vec3 {
        self.translation
    }

    fn current_look_direction(&self) -> Vec3 {
        *self.forward()
    }
}

impl RiderView for GlobalTransform {
    fn current_position(&self) -> Vec3 {
        self.translation()
    }

    fn current_look_direction(&self) -> Vec3 {
        *self.forward()
    }
}

/// A single captured camera reading, for hosts that ray-cast outside the ECS.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiderSample {
    pub position: Vec3,
    pub look: Vec3,
}

impl RiderSample {
    pub fn new(position: Vec3, look: Vec3) -> Self {
        Self { position, look }
    }
}

impl RiderView for RiderSample {
    fn current_position(&self) -> Vec3 {
        self.position
    }

    fn current_look_direction(&self) -> Vec3 {
        self.look
    }
}
