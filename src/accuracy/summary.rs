use serde::Serialize;

use crate::grid;
use crate::models::{PitchRecord, PitchType, TargetZone};

/// One cell of the type x target summary table.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SummaryCell {
    pub target: TargetZone,
    pub hits: usize,
    pub total: usize,
    /// Whole-percent hit rate; None when the cell has no pitches (rendered
    /// as "-").
    pub hit_pct: Option<u8>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SummaryRow {
    pub pitch_type: PitchType,
    pub cells: Vec<SummaryCell>,
}

/// Full-session accuracy matrix: one row per canonical pitch type, one
/// cell per target, computed over ALL pitches rather than the current
/// context slice.
///
/// Cell membership uses EXACT string equality on type/target — unlike the
/// context filter, no case folding or trimming. That asymmetry mirrors how
/// entries were tagged at capture time and is kept on purpose; pitches with
/// off-case historical tags simply fall outside every cell.
pub fn summary_matrix(pitches: &[PitchRecord]) -> Vec<SummaryRow> {
    PitchType::ALL
        .iter()
        .map(|&pitch_type| SummaryRow {
            pitch_type,
            cells: TargetZone::ALL
                .iter()
                .map(|&target| summary_cell(pitches, pitch_type, target))
                .collect(),
        })
        .collect()
}

fn summary_cell(pitches: &[PitchRecord], pitch_type: PitchType, target: TargetZone) -> SummaryCell {
    let zones = grid::target_zone_ids(target);

    let mut total = 0;
    let mut hits = 0;
    for pitch in pitches {
        if pitch.pitch_type != pitch_type.as_str() || pitch.target != target.as_str() {
            continue;
        }
        total += 1;
        if zones.contains(&pitch.location) {
            hits += 1;
        }
    }

    let hit_pct = if total > 0 {
        Some(((hits as f64 / total as f64) * 100.0).round() as u8)
    } else {
        None
    };

    SummaryCell {
        target,
        hits,
        total,
        hit_pct,
    }
}
