//! Persisted pitching-session documents.
//!
//! Three generations of session documents exist in the store and are told
//! apart by field presence, not a version tag:
//!
//! - legacy: a `counts` map (location -> count) with one record-level
//!   `pitchType`/`intendedTarget` for the whole session, no per-pitch data;
//! - intermediate: a `pitchData` array whose entries may lack their own
//!   type/target (record-level fields fill in);
//! - current: `pitchData` with fully tagged pitches, `pitchType: "Mixed"` /
//!   `target: "Variable"` sentinels, and a redundant `locations` summary.
//!
//! Reads accept all three; writes always produce the current shape.

use std::collections::HashMap;

use chrono::{NaiveDate, TimeZone, Utc};
use log::warn;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::grid;
use crate::models::{PitchRecord, PitchType, TargetZone};
use crate::session::PitchSession;

/// Legacy documents stored the session moment either as epoch millis or an
/// ISO date string, depending on era.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum DocTimestamp {
    Millis(i64),
    Text(String),
}

impl DocTimestamp {
    fn to_millis(&self) -> Option<i64> {
        match self {
            DocTimestamp::Millis(ms) => Some(*ms),
            DocTimestamp::Text(text) => NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
                .map(|dt| Utc.from_utc_datetime(&dt).timestamp_millis()),
        }
    }
}

/// A pitch entry as found in stored `pitchData`/`pitches` arrays. Every
/// field is optional; hydration supplies fallbacks.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct RawPitch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<i64>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub pitch_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DocTimestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
}

/// One stored session document, superset of all three historical shapes.
/// Unknown fields in old documents are ignored on read.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct SessionDocument {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DocTimestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pitch_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intended_target: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mixed_types: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variable_targets: Option<bool>,
    /// Legacy per-location tallies (keys are stringified display IDs).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub counts: Option<HashMap<String, u32>>,
    /// Current-shape redundant summary for list views.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locations: Option<HashMap<String, u32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pitches: Option<Vec<RawPitch>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pitch_data: Option<Vec<RawPitch>>,
}

/// Sentinel written by current-shape saves (the context can change
/// mid-session, so no single type/target describes it).
pub const MIXED_TYPE: &str = "Mixed";
pub const VARIABLE_TARGET: &str = "Variable";

impl SessionDocument {
    /// Build the current-shape document for a session about to be saved.
    /// Writes are forward-only: old shapes are never produced.
    pub fn from_session(user_id: &str, session: &PitchSession) -> Self {
        let mut locations: HashMap<String, u32> = HashMap::new();
        for pitch in &session.pitches {
            *locations.entry(pitch.location.to_string()).or_insert(0) += 1;
        }

        Self {
            id: None,
            user_id: Some(user_id.to_string()),
            date: Some(session.date.clone()),
            timestamp: Some(DocTimestamp::Millis(Utc::now().timestamp_millis())),
            pitch_type: Some(MIXED_TYPE.to_string()),
            intended_target: None,
            target: Some(VARIABLE_TARGET.to_string()),
            mixed_types: Some(true),
            variable_targets: Some(true),
            counts: None,
            locations: Some(locations),
            pitches: None,
            pitch_data: Some(
                session
                    .pitches
                    .iter()
                    .map(|p| RawPitch {
                        id: Some(p.id.clone()),
                        location: Some(i64::from(p.location)),
                        pitch_type: Some(p.pitch_type.clone()),
                        target: Some(p.target.clone()),
                        timestamp: Some(DocTimestamp::Millis(p.timestamp)),
                        x: p.x,
                        y: p.y,
                    })
                    .collect(),
            ),
        }
    }

    /// Convert any historical shape into the canonical in-memory session.
    ///
    /// Total: a document with neither counts nor a pitch array hydrates to
    /// an empty session. Unparseable count keys and out-of-range locations
    /// are skipped with a warning, never an error.
    ///
    /// The returned session's context fields carry the *initial review
    /// context*: the record-level type/target when concrete, else
    /// Fastball/Strike (in particular for the "Mixed"/"Variable"
    /// sentinels). A display default only — the pitch data itself is
    /// untouched by it.
    pub fn hydrate(&self) -> PitchSession {
        let raw_pitches = self
            .pitches
            .as_deref()
            .filter(|p| !p.is_empty())
            .or(self.pitch_data.as_deref().filter(|p| !p.is_empty()));

        let fallback_type = self
            .pitch_type
            .clone()
            .unwrap_or_else(|| PitchType::Fastball.as_str().to_string());
        let fallback_target = self
            .intended_target
            .clone()
            .unwrap_or_else(|| TargetZone::Strike.as_str().to_string());

        let hydrated = match raw_pitches {
            Some(raw) => self.hydrate_pitch_array(raw, &fallback_type, &fallback_target),
            None => match &self.counts {
                Some(counts) => self.hydrate_counts(counts, &fallback_type, &fallback_target),
                None => Vec::new(),
            },
        };

        let review_type = match self.pitch_type.as_deref() {
            None | Some(MIXED_TYPE) => PitchType::Fastball.as_str().to_string(),
            Some(other) => other.to_string(),
        };
        let review_target = match self.intended_target.as_deref() {
            None | Some(VARIABLE_TARGET) => TargetZone::Strike.as_str().to_string(),
            Some(other) => other.to_string(),
        };

        let mut session = PitchSession::with_context(review_type, review_target);
        if let Some(date) = &self.date {
            session.date = date.clone();
        }
        session.pitches = hydrated;
        session
    }

    fn record_timestamp_millis(&self) -> i64 {
        self.timestamp
            .as_ref()
            .and_then(DocTimestamp::to_millis)
            .or_else(|| {
                self.date
                    .as_ref()
                    .and_then(|d| DocTimestamp::Text(d.clone()).to_millis())
            })
            .unwrap_or_else(|| Utc::now().timestamp_millis())
    }

    /// Legacy shape: synthesize `count` records per location, all tagged
    /// with the record-level type/target (legacy sessions recorded one
    /// context for their whole duration). Keys are walked in numeric order
    /// so hydration is deterministic.
    fn hydrate_counts(
        &self,
        counts: &HashMap<String, u32>,
        pitch_type: &str,
        target: &str,
    ) -> Vec<PitchRecord> {
        let timestamp = self.record_timestamp_millis();

        let mut entries: Vec<(u8, u32)> = Vec::new();
        for (key, &count) in counts {
            match key.trim().parse::<u8>() {
                Ok(location) if grid::is_valid_location(location) => {
                    entries.push((location, count));
                }
                _ => warn!("skipping legacy count entry with bad location key '{key}'"),
            }
        }
        entries.sort_by_key(|&(location, _)| location);

        let mut pitches = Vec::new();
        for (location, count) in entries {
            for i in 0..count {
                pitches.push(PitchRecord {
                    id: format!("legacy-{location}-{i}-{timestamp}"),
                    location,
                    pitch_type: pitch_type.to_string(),
                    target: target.to_string(),
                    timestamp,
                    // No stored coordinates; the grid falls back to its
                    // deterministic dot placement.
                    x: None,
                    y: None,
                });
            }
        }
        pitches
    }

    fn hydrate_pitch_array(
        &self,
        raw: &[RawPitch],
        fallback_type: &str,
        fallback_target: &str,
    ) -> Vec<PitchRecord> {
        let record_timestamp = self.record_timestamp_millis();

        raw.iter()
            .filter_map(|entry| {
                let location = match entry.location {
                    Some(loc) if (1..=i64::from(grid::MAX_LOCATION)).contains(&loc) => loc as u8,
                    other => {
                        warn!("skipping stored pitch with bad location {other:?}");
                        return None;
                    }
                };

                Some(PitchRecord {
                    id: entry
                        .id
                        .clone()
                        .unwrap_or_else(|| Uuid::new_v4().to_string()),
                    location,
                    pitch_type: entry
                        .pitch_type
                        .clone()
                        .unwrap_or_else(|| fallback_type.to_string()),
                    target: entry
                        .target
                        .clone()
                        .unwrap_or_else(|| fallback_target.to_string()),
                    timestamp: entry
                        .timestamp
                        .as_ref()
                        .and_then(DocTimestamp::to_millis)
                        .unwrap_or(record_timestamp),
                    x: entry.x,
                    y: entry.y,
                })
            })
            .collect()
    }
}
