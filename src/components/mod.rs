pub mod flight;
pub mod gesture;
pub mod rig;
pub mod view;

pub use flight::{
    FlightCommand, FlightCommandEvent, FlightController, FlightState, FlightTelemetry,
    FlightTransition, SuppressionFlags, TickReport,
};
pub use gesture::DescentGesture;
pub use rig::{PropulsionAudio, Rider, RotorClip, RotorRig, TourDrone};
pub use view::{RiderSample, RiderView};
