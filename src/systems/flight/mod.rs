mod controller;
mod effects;
pub mod proximity;

pub use controller::flight_controller_system;
pub use effects::apply_flight_commands;
pub use proximity::proximity_score;
