use bevy::prelude::*;
use tour_drone::components::FlightState;

use crate::common::{
    assert_vec3_eq, board_and_place, create_quick_gesture_config, cruising_position, ride_until,
    TestAppBuilder,
};

#[test]
fn test_drone_follows_gaze() {
    let mut app = TestAppBuilder::new().build();
    let start = cruising_position();
    board_and_place(&mut app, start);

    let look = Vec3::new(0.6, 0.0, -0.8);
    app.ride(look);
    app.run_controller_step();

    let speed = app.config.cruise_speed;
    assert_vec3_eq(app.drone_transform().translation, start + look * speed, 1e-4);
}

#[test]
fn test_low_altitude_blocks_descent_but_not_travel() {
    let mut app = TestAppBuilder::new().build();
    let start = Vec3::new(30.0, 3.0, 40.0);
    board_and_place(&mut app, start);

    let look = Vec3::new(0.5, -0.5, 0.5).normalize();
    app.ride(look);
    app.run_controller_step();

    let speed = app.config.cruise_speed;
    let position = app.drone_transform().translation;
    assert_eq!(position.y, start.y);
    assert_vec3_eq(
        position,
        Vec3::new(start.x + look.x * speed, start.y, start.z + look.z * speed),
        1e-4,
    );
}

#[test]
fn test_low_altitude_follows_rider_not_drone() {
    let mut app = TestAppBuilder::new()
        .with_config(create_quick_gesture_config(1))
        .build();
    let start = Vec3::new(30.0, 10.0, 40.0);
    board_and_place(&mut app, start);

    // Rider's camera hangs below the low-altitude line while the drone cruises higher.
    let look = Vec3::new(0.0, -0.5, -0.5);
    for _ in 0..40 {
        let deck = app.drone_transform().translation;
        app.set_rider(Vec3::new(deck.x, 3.0, deck.z), look);
        app.run_frame();
    }

    assert!(app.controller().gesture().descent_permitted());
    assert_eq!(app.drone_transform().translation.y, start.y);
    assert!(app.drone_transform().translation.z < start.z);
    assert_eq!(app.state(), FlightState::Flying);
}

#[test]
fn test_descent_needs_sustained_gaze() {
    let mut app = TestAppBuilder::new().build();
    let start = cruising_position();
    board_and_place(&mut app, start);

    let look = Vec3::new(0.0, -0.3, -0.95).normalize();
    app.ride(look);
    app.run_controller_step();

    let position = app.drone_transform().translation;
    assert!(!app.controller().gesture().descent_permitted());
    assert_eq!(position.y, start.y);
    assert!(position.z < start.z);
}

#[test]
fn test_sustained_gaze_starts_descent() {
    let mut app = TestAppBuilder::new()
        .with_config(create_quick_gesture_config(5))
        .build();
    let start = cruising_position();
    board_and_place(&mut app, start);

    let look = Vec3::new(0.0, -0.6, -0.8);
    let descended = ride_until(
        &mut app,
        look,
        |app| app.drone_transform().translation.y < 30.0,
        60,
    );
    assert!(descended, "drone never started descending");
    assert!(app.controller().gesture().descent_permitted());

    // Looking up once revokes the permission immediately.
    ride_until(
        &mut app,
        Vec3::new(0.0, 0.2, -0.98),
        |app| app.controller().gesture().samples() == 0,
        8,
    );
    assert!(!app.controller().gesture().descent_permitted());
}

#[test]
fn test_out_of_bounds_holds_position() {
    let mut app = TestAppBuilder::new().build();
    let max_z = app.config.volume.max.z;
    let start = Vec3::new(30.0, 30.0, max_z - 0.02);
    board_and_place(&mut app, start);

    app.ride(Vec3::Z);
    app.run_controller_step();

    assert_eq!(app.drone_transform().translation, start);
    assert_eq!(app.state(), FlightState::Flying);
}

#[test]
fn test_drone_stays_inside_volume_while_steering_out() {
    let mut app = TestAppBuilder::new().build();
    let volume = app.config.volume;
    board_and_place(&mut app, Vec3::new(70.0, 30.0, 40.0));

    for _ in 0..200 {
        app.ride(Vec3::new(1.0, 0.3, 0.0));
        app.run_frame();
        assert!(volume.contains(app.drone_transform().translation));
    }
    assert_eq!(app.state(), FlightState::Flying);
}
