pub mod cadence;
pub mod config;

pub use cadence::{Cadence, CadenceGate};
pub use config::{EnvelopeReference, FlightConfig, FlightVolume, HomePose, ProximityConfig};
