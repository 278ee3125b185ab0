pub mod controller;
pub mod state;

pub use controller::{SessionController, SessionSnapshot};
pub use state::PitchSession;
