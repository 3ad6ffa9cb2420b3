use bevy::prelude::*;
use std::time::Duration;
use tour_drone::{
    components::{FlightState, TourDrone},
    plugins::TourDroneSet,
};

use crate::common::{assert_at_home, assert_propulsion, create_interval_config, TestAppBuilder};

#[test]
fn test_plugin_spawns_parked_drone() {
    let mut app = TestAppBuilder::new().build();

    let world = app.app.world_mut();
    let mut query = world.query_filtered::<&Name, With<TourDrone>>();
    let names: Vec<String> = query.iter(world).map(|name| name.to_string()).collect();
    assert_eq!(names, vec!["vehicleQuadcopter".to_string()]);

    assert_eq!(app.state(), FlightState::Idle);
    assert_at_home(&mut app);
    assert_propulsion(&mut app, false);
    let rig = app.rig();
    let clip_names: Vec<&str> = rig.clips.iter().map(|clip| clip.name.as_str()).collect();
    assert_eq!(clip_names, vec!["Spin1", "Spin2", "Spin3", "Spin4"]);
}

#[test]
fn test_no_rider_is_harmless() {
    let mut app = TestAppBuilder::new().build();
    app.run_steps(10);
    assert_eq!(app.state(), FlightState::Idle);
    assert_at_home(&mut app);
}

#[test]
fn test_interval_cadence_boards_after_enough_time() {
    let mut app = TestAppBuilder::new()
        .with_config(create_interval_config(Duration::from_millis(5)))
        .with_time_step(Duration::from_millis(2))
        .build();
    let home = app.config.home.position;
    app.set_rider(Vec3::new(home.x, 3.0, home.z), Vec3::NEG_Z);

    // 2ms and 4ms have elapsed: the 5ms interval has not opened yet.
    app.run_steps(2);
    assert_eq!(app.state(), FlightState::Idle);
    assert_propulsion(&mut app, false);

    // 6ms.
    app.run_frame();
    assert_eq!(app.state(), FlightState::Flying);
    assert_propulsion(&mut app, true);
}

#[derive(Resource, Default)]
struct DroneMoves(usize);

fn count_drone_moves(
    query: Query<(), (With<TourDrone>, Changed<Transform>)>,
    mut moves: ResMut<DroneMoves>,
) {
    moves.0 += query.iter().count();
}

#[test]
fn test_parked_drone_transform_is_not_flagged_changed() {
    let mut app = TestAppBuilder::new()
        .with_rider(Vec3::new(50.0, 1.7, 20.0), Vec3::NEG_Z)
        .build();
    app.app
        .init_resource::<DroneMoves>()
        .add_systems(Update, count_drone_moves.after(TourDroneSet::Effects));

    // The counter's first run still sees the spawn.
    app.run_frame();
    app.app.world_mut().resource_mut::<DroneMoves>().0 = 0;

    app.run_steps(10);
    assert_eq!(app.app.world().resource::<DroneMoves>().0, 0);

    // Boarding flies the drone on the same body run.
    let home = app.config.home.position;
    app.set_rider(home + Vec3::Y * 2.5, Vec3::X);
    app.run_controller_step();
    assert_eq!(app.state(), FlightState::Flying);
    assert_eq!(app.app.world().resource::<DroneMoves>().0, 1);
}
