use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::grid;
use crate::models::{PitchRecord, PitchType, TargetZone};

/// The one mutable aggregate: a pitching session being recorded (or an old
/// one opened for review). `pitches` stays in insertion order, which is
/// chronological order — undo depends on it.
///
/// `pitch_type`/`target` are the *current context*: the tags stamped onto
/// new pitches and the slice of the session the grid displays. Switching
/// context never touches already-recorded pitches.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PitchSession {
    /// ISO date (yyyy-mm-dd) the session belongs to.
    pub date: String,
    #[serde(rename = "type")]
    pub pitch_type: String,
    pub target: String,
    pub pitches: Vec<PitchRecord>,
}

impl Default for PitchSession {
    fn default() -> Self {
        Self::new()
    }
}

impl PitchSession {
    /// Fresh session dated today with the standard starting context.
    pub fn new() -> Self {
        Self::with_context(
            PitchType::Fastball.as_str().to_string(),
            TargetZone::Strike.as_str().to_string(),
        )
    }

    pub fn with_context(pitch_type: String, target: String) -> Self {
        Self {
            date: Utc::now().format("%Y-%m-%d").to_string(),
            pitch_type,
            target,
            pitches: Vec::new(),
        }
    }

    pub fn set_context(&mut self, pitch_type: String, target: String) {
        self.pitch_type = pitch_type;
        self.target = target;
    }

    /// Record a pitch at `location` under the current context. Coordinates
    /// are the tap position as percentages within the cell, clamped to
    /// 0..=100.
    ///
    /// An out-of-range `location` is a caller bug (the grid only ever
    /// produces 1..=20), not a recoverable condition.
    pub fn record_pitch(&mut self, location: u8, coords: Option<(f64, f64)>) -> PitchRecord {
        debug_assert!(
            grid::is_valid_location(location),
            "location {location} outside 1..=20"
        );

        let (x, y) = match coords {
            Some((x, y)) => (Some(x.clamp(0.0, 100.0)), Some(y.clamp(0.0, 100.0))),
            None => (None, None),
        };

        let record = PitchRecord {
            id: Uuid::new_v4().to_string(),
            location,
            pitch_type: self.pitch_type.clone(),
            target: self.target.clone(),
            timestamp: Utc::now().timestamp_millis(),
            x,
            y,
        };
        self.pitches.push(record.clone());
        record
    }

    /// Remove the most recent pitch matching the current context (exact
    /// type AND target). Pitches recorded under other contexts are skipped.
    /// Returns the removed record, or None when nothing in the session
    /// matches — undo is deliberately context-scoped, never global.
    pub fn undo(&mut self) -> Option<PitchRecord> {
        let index = self
            .pitches
            .iter()
            .rposition(|p| p.pitch_type == self.pitch_type && p.target == self.target)?;
        Some(self.pitches.remove(index))
    }

    /// Remove every pitch matching the current context; others survive.
    /// Returns how many were removed.
    pub fn reset_context(&mut self) -> usize {
        let before = self.pitches.len();
        let pitch_type = self.pitch_type.clone();
        let target = self.target.clone();
        self.pitches
            .retain(|p| !(p.pitch_type == pitch_type && p.target == target));
        before - self.pitches.len()
    }

    /// Clear the whole session.
    pub fn reset(&mut self) {
        self.pitches.clear();
    }

    /// Remove one pitch by id (long-press delete on a dot). Returns whether
    /// anything was removed.
    pub fn delete_pitch(&mut self, pitch_id: &str) -> bool {
        let before = self.pitches.len();
        self.pitches.retain(|p| p.id != pitch_id);
        before != self.pitches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pitches.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pitches.len()
    }
}
