mod flight;

pub use flight::{apply_flight_commands, flight_controller_system, proximity_score};
