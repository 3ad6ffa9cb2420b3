pub mod flight;

pub use flight::{EnvelopeReference, FlightConfig, FlightVolume, HomePose, ProximityConfig};
