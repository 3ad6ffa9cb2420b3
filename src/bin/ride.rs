use bevy::{log::LogPlugin, prelude::*};
use std::{env, process};

use tour_drone::{
    components::{FlightController, PropulsionAudio, Rider, RotorRig, TourDrone},
    plugins::{TourDronePlugin, TourDroneSet},
    resources::FlightConfig,
};

/// Camera height above the drone deck while riding.
const DECK_EYE_HEIGHT: f32 = 1.7;
const CLIMB_UNTIL: u32 = 200;
const DESCEND_UNTIL: u32 = 450;
const TOTAL_FRAMES: u32 = 520;

#[derive(Resource, Default)]
struct RideScript {
    frame: u32,
}

fn main() {
    let config = match env::args().nth(1) {
        Some(path) => match FlightConfig::from_file(&path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("Failed to load flight config from {}: {}", path, err);
                process::exit(1);
            }
        },
        None => FlightConfig::default(),
    };

    let plugin = match TourDronePlugin::new(config) {
        Ok(plugin) => plugin,
        Err(err) => {
            eprintln!("Invalid flight config: {}", err);
            process::exit(1);
        }
    };

    let mut app = App::new();
    app.add_plugins((MinimalPlugins, LogPlugin::default()))
        .add_plugins(plugin)
        .init_resource::<RideScript>()
        .add_systems(Startup, spawn_rider)
        .add_systems(Update, script_rider.before(TourDroneSet::Control));

    for frame in 0..TOTAL_FRAMES {
        app.update();
        if frame % 40 == 0 {
            report(&mut app);
        }
    }
    report(&mut app);
}

fn spawn_rider(mut commands: Commands, config: Res<FlightConfig>) {
    let start = config.home.position + Vec3::Y * DECK_EYE_HEIGHT;
    commands.spawn((
        Name::new("rider"),
        Rider,
        Transform::from_translation(start).looking_to(Vec3::X, Vec3::Y),
    ));
}

/// Rides the drone: climb away from home, hold a downward gaze until the drone
/// descends, then step off onto the ground.
fn script_rider(
    mut script: ResMut<RideScript>,
    config: Res<FlightConfig>,
    mut rider_query: Query<&mut Transform, (With<Rider>, Without<TourDrone>)>,
    drone_query: Query<&Transform, With<TourDrone>>,
) {
    let (Ok(mut rider), Ok(drone)) = (rider_query.get_single_mut(), drone_query.get_single())
    else {
        return;
    };

    let frame = script.frame;
    script.frame += 1;

    if frame < DESCEND_UNTIL {
        rider.translation = drone.translation + Vec3::Y * DECK_EYE_HEIGHT;
        let look = if frame < CLIMB_UNTIL {
            Vec3::new(1.0, 0.6, -0.4)
        } else {
            Vec3::new(0.2, -0.7, -0.6)
        };
        rider.look_to(look, Vec3::Y);
    } else {
        rider.translation = Vec3::new(config.home.position.x + 12.0, 0.0, drone.translation.z);
    }
}

fn report(app: &mut App) {
    let world = app.world_mut();
    let mut query = world.query_filtered::<(
        &FlightController,
        &Transform,
        &RotorRig,
        &PropulsionAudio,
    ), With<TourDrone>>();

    for (controller, transform, rig, audio) in query.iter(world) {
        let telemetry = controller.telemetry(transform);
        match serde_json::to_string(&telemetry) {
            Ok(json) => println!(
                "{} rotors={} audio={}",
                json,
                rig.all_playing(),
                audio.playing
            ),
            Err(err) => error!("Failed to serialize telemetry: {}", err),
        }
    }
}
