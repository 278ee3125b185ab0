pub mod gps;
pub mod stopwatch;

pub use gps::{distance_ft, GeoFix, PositionAverager};
pub use stopwatch::{RaceStatus, RaceTimer, MAX_ATHLETES};
