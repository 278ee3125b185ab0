//! Pitch session recording and accuracy tracking engine.
//!
//! Coaches tap a 20-zone pitching grid to record where each pitch landed
//! under the active (pitch type, target) context; the engine filters,
//! aggregates hit/miss/wild stats, builds a full type x target summary
//! matrix, and persists sessions as JSON documents. Stored sessions from
//! three historical formats hydrate back into the same in-memory shape.
//! The GPS distance and multi-athlete stopwatch field tools live in
//! `measure`.

pub mod accuracy;
pub mod db;
pub mod grid;
pub mod measure;
pub mod models;
pub mod session;
pub mod settings;

pub use accuracy::{filter_by_context, hit_stats, summary_matrix, zone_counts, HitStats};
pub use db::{Database, SessionDocument, StoredSession};
pub use models::{PitchRecord, PitchType, TargetZone};
pub use session::{PitchSession, SessionController, SessionSnapshot};
pub use settings::{RecordingDefaults, SettingsStore};

/// Initialize logging (reads RUST_LOG env var).
pub fn init_logging() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();
}
