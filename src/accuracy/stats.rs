use std::collections::HashMap;

use serde::Serialize;

use crate::grid;
use crate::models::PitchRecord;

/// Hit/miss/wild breakdown for one context-filtered slice of a session.
///
/// Hit and wild classification are independent: a wild pitch is always a
/// miss for interior targets, but it still counts in `wild_pitches` on its
/// own axis. `hits + misses == total` always holds.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HitStats {
    pub total: usize,
    pub hits: usize,
    pub misses: usize,
    pub wild_pitches: usize,
    /// Percentages rounded to one decimal; 0.0 when the slice is empty
    /// (the UI renders that as "no data"), never NaN.
    pub hit_pct: f64,
    pub miss_pct: f64,
    pub wild_pct: f64,
}

fn pct(part: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let raw = (part as f64 / total as f64) * 100.0;
    (raw * 10.0).round() / 10.0
}

/// Frequency of pitches per display ID, driving the grid's dot density and
/// the per-zone breakdown list.
pub fn zone_counts(pitches: &[&PitchRecord]) -> HashMap<u8, u32> {
    let mut counts = HashMap::new();
    for pitch in pitches {
        *counts.entry(pitch.location).or_insert(0) += 1;
    }
    counts
}

/// Classify a filtered slice against the zone set of its intended target.
/// `target_label` is the session's current target string; unknown labels
/// (e.g. a hydrated "Variable") have an empty zone set, so everything is a
/// miss.
pub fn hit_stats(pitches: &[&PitchRecord], target_label: &str) -> HitStats {
    let zones = grid::zone_ids_for_label(target_label);

    let total = pitches.len();
    let mut hits = 0;
    let mut wild_pitches = 0;

    for pitch in pitches {
        if zones.contains(&pitch.location) {
            hits += 1;
        }
        if grid::is_wild(pitch.location) {
            wild_pitches += 1;
        }
    }

    let misses = total - hits;

    HitStats {
        total,
        hits,
        misses,
        wild_pitches,
        hit_pct: pct(hits, total),
        miss_pct: pct(misses, total),
        wild_pct: pct(wild_pitches, total),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pitch(location: u8) -> PitchRecord {
        PitchRecord {
            id: format!("p{location}"),
            location,
            pitch_type: "Fastball".into(),
            target: "Strike".into(),
            timestamp: 0,
            x: None,
            y: None,
        }
    }

    #[test]
    fn zone_counts_are_per_display_id() {
        let pitches = vec![pitch(3), pitch(3), pitch(17)];
        let refs: Vec<&PitchRecord> = pitches.iter().collect();
        let counts = zone_counts(&refs);
        assert_eq!(counts.get(&3), Some(&2));
        assert_eq!(counts.get(&17), Some(&1));
        assert_eq!(counts.get(&1), None);
    }

    #[test]
    fn hits_plus_misses_equals_total_and_wild_is_independent() {
        // Strike zone is {1,2,3,4}; 17 and 19 are wild (and misses).
        let pitches = vec![pitch(1), pitch(4), pitch(8), pitch(17), pitch(19)];
        let refs: Vec<&PitchRecord> = pitches.iter().collect();

        let stats = hit_stats(&refs, "Strike");
        assert_eq!(stats.total, 5);
        assert_eq!(stats.hits, 2);
        assert_eq!(stats.misses, 3);
        assert_eq!(stats.hits + stats.misses, stats.total);
        assert_eq!(stats.wild_pitches, 2);
        assert_eq!(stats.hit_pct, 40.0);
        assert_eq!(stats.miss_pct, 60.0);
        assert_eq!(stats.wild_pct, 40.0);
    }

    #[test]
    fn empty_slice_reports_defined_percentages() {
        let stats = hit_stats(&[], "Strike");
        assert_eq!(stats.total, 0);
        assert_eq!(stats.hit_pct, 0.0);
        assert_eq!(stats.miss_pct, 0.0);
        assert_eq!(stats.wild_pct, 0.0);
        assert!(stats.hit_pct.is_finite());
    }

    #[test]
    fn unknown_target_label_makes_everything_a_miss() {
        let pitches = vec![pitch(1), pitch(2)];
        let refs: Vec<&PitchRecord> = pitches.iter().collect();
        let stats = hit_stats(&refs, "Variable");
        assert_eq!(stats.hits, 0);
        assert_eq!(stats.misses, 2);
    }

    #[test]
    fn percentages_round_to_one_decimal() {
        // 1 of 3 = 33.333... -> 33.3
        let pitches = vec![pitch(1), pitch(8), pitch(9)];
        let refs: Vec<&PitchRecord> = pitches.iter().collect();
        let stats = hit_stats(&refs, "Strike");
        assert_eq!(stats.hit_pct, 33.3);
        assert_eq!(stats.miss_pct, 66.7);
    }
}
