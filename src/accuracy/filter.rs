use crate::models::PitchRecord;

/// Lowercase + trim, the normalization applied to both sides of a context
/// comparison. Tolerates the inconsistent casing/whitespace found in older
/// stored sessions ("fastball ", "STRIKE").
fn normalize(tag: &str) -> String {
    tag.trim().to_ascii_lowercase()
}

/// The subset of `pitches` matching the given context, in original
/// insertion order. Matching is exact equality after normalization — not
/// fuzzy. Empty input or no matches is an empty slice, never an error.
pub fn filter_by_context<'a>(
    pitches: &'a [PitchRecord],
    pitch_type: &str,
    target: &str,
) -> Vec<&'a PitchRecord> {
    let want_type = normalize(pitch_type);
    let want_target = normalize(target);

    pitches
        .iter()
        .filter(|p| normalize(&p.pitch_type) == want_type && normalize(&p.target) == want_target)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pitch(location: u8, pitch_type: &str, target: &str) -> PitchRecord {
        PitchRecord {
            id: format!("{pitch_type}-{target}-{location}"),
            location,
            pitch_type: pitch_type.to_string(),
            target: target.to_string(),
            timestamp: 0,
            x: None,
            y: None,
        }
    }

    #[test]
    fn matches_case_insensitively_and_trims() {
        let pitches = vec![
            pitch(1, "Fastball", "Strike"),
            pitch(2, "fastball ", "strike"),
            pitch(3, "Curveball", "Left"),
        ];

        let filtered = filter_by_context(&pitches, "Fastball", "Strike");
        let locations: Vec<u8> = filtered.iter().map(|p| p.location).collect();
        assert_eq!(locations, vec![1, 2]);
    }

    #[test]
    fn preserves_insertion_order() {
        let pitches = vec![
            pitch(9, "Slider", "Up"),
            pitch(4, "Slider", "Up"),
            pitch(7, "Slider", "Up"),
        ];
        let filtered = filter_by_context(&pitches, " slider", "UP");
        let locations: Vec<u8> = filtered.iter().map(|p| p.location).collect();
        assert_eq!(locations, vec![9, 4, 7]);
    }

    #[test]
    fn empty_input_and_no_match_yield_empty() {
        assert!(filter_by_context(&[], "Fastball", "Strike").is_empty());

        let pitches = vec![pitch(1, "Changeup", "Below")];
        assert!(filter_by_context(&pitches, "Fastball", "Strike").is_empty());
    }
}
