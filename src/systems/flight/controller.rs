use bevy::prelude::*;

use crate::components::{FlightCommandEvent, FlightController, Rider, TourDrone};
use crate::resources::FlightConfig;

/// Runs the flight state machine of every tour drone once per frame.
///
/// The rider's camera transform is the view the drone steers by. Commands raised on
/// mount and dismount are forwarded as [`FlightCommandEvent`]s for the host side.
pub fn flight_controller_system(
    time: Res<Time>,
    config: Res<FlightConfig>,
    rider_query: Query<&Transform, (With<Rider>, Without<TourDrone>)>,
    mut drone_query: Query<(Entity, &mut FlightController, &mut Transform), With<TourDrone>>,
    mut command_events: EventWriter<FlightCommandEvent>,
) {
    let rider = match rider_query.get_single() {
        Ok(rider) => rider,
        Err(err) => {
            debug!("Skipping tour drone update, no single rider: {}", err);
            return;
        }
    };

    for (drone, mut controller, mut transform) in drone_query.iter_mut() {
        // Most frames are throttled or held; only flag the pose when it actually moves.
        let report = controller.tick(
            &config,
            time.delta(),
            rider,
            transform.bypass_change_detection(),
        );
        if report.displacement != Vec3::ZERO || report.transition.is_some() {
            transform.set_changed();
        }

        if let Some(transition) = report.transition {
            info!("Tour drone {:?} transition: {:?}", drone, transition);
        }

        command_events.send_batch(
            report
                .commands
                .into_iter()
                .map(|command| FlightCommandEvent { drone, command }),
        );
    }
}
