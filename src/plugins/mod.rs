mod tour_drone;

pub use tour_drone::{TourDronePlugin, TourDroneSet};
