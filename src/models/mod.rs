pub mod pitch;

pub use pitch::{PitchRecord, PitchType, TargetZone};
