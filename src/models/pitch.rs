//! Pitch-related data models.

use serde::{Deserialize, Serialize};

/// Canonical pitch types. Recorded pitches carry free-form strings (old
/// documents are inconsistently cased), so this enum exists for defaults
/// and for the summary-matrix rows, not for validation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PitchType {
    Fastball,
    Curveball,
    Changeup,
    Slider,
}

impl PitchType {
    pub const ALL: [PitchType; 4] = [
        PitchType::Fastball,
        PitchType::Curveball,
        PitchType::Changeup,
        PitchType::Slider,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PitchType::Fastball => "Fastball",
            PitchType::Curveball => "Curveball",
            PitchType::Changeup => "Changeup",
            PitchType::Slider => "Slider",
        }
    }
}

/// Intended targets a coach can aim a pitch at. Each maps to a set of
/// display IDs on the grid (see `grid::target_zone_ids`).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TargetZone {
    Strike,
    Left,
    Right,
    Up,
    Below,
}

impl TargetZone {
    pub const ALL: [TargetZone; 5] = [
        TargetZone::Strike,
        TargetZone::Left,
        TargetZone::Right,
        TargetZone::Up,
        TargetZone::Below,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TargetZone::Strike => "Strike",
            TargetZone::Left => "Left",
            TargetZone::Right => "Right",
            TargetZone::Up => "Up",
            TargetZone::Below => "Below",
        }
    }

    /// Exact-label lookup, matching how stored target strings index the
    /// zone table. Unknown labels (e.g. "Variable") yield None.
    pub fn parse(label: &str) -> Option<TargetZone> {
        match label {
            "Strike" => Some(TargetZone::Strike),
            "Left" => Some(TargetZone::Left),
            "Right" => Some(TargetZone::Right),
            "Up" => Some(TargetZone::Up),
            "Below" => Some(TargetZone::Below),
            _ => None,
        }
    }
}

/// One recorded pitch. Immutable once captured; removal (undo, delete,
/// reset) is the only mutation a session performs on it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PitchRecord {
    pub id: String,
    /// Display ID 1..=20 (interior cell or wild border zone).
    pub location: u8,
    /// Free-form tag taken from the session context at capture time.
    #[serde(rename = "type")]
    pub pitch_type: String,
    /// Free-form tag taken from the session context at capture time.
    pub target: String,
    /// Epoch milliseconds at capture.
    pub timestamp: i64,
    /// Percentage offset within the tapped cell; absent on legacy imports.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
}
