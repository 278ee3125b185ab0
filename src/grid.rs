//! Zone layout for the pitching grid.
//!
//! The grid is a 4x4 square of cells (indices 0..16 in reading order)
//! surrounded by four wild border zones. Cells are shown to coaches as
//! "display IDs": the center 2x2 gets 1..=4 so the strike zone reads
//! naturally, and the outer ring fills in 5..=16.

use crate::models::TargetZone;

/// Display IDs for the wild border zones. Only explicit taps on a border
/// produce these; interior cells never map above 16.
pub const WILD_HIGH: u8 = 17;
pub const WILD_LOW: u8 = 18;
pub const WILD_LEFT: u8 = 19;
pub const WILD_RIGHT: u8 = 20;

pub const MIN_LOCATION: u8 = 1;
pub const MAX_LOCATION: u8 = 20;

/// Grid index (0..16, reading order) -> display ID (1..=16).
///
/// Index layout:          Display layout:
///  0  1  2  3             5  6  7  8
///  4  5  6  7            16  1  2  9
///  8  9 10 11            15  3  4 10
/// 12 13 14 15            14 13 12 11
const DISPLAY_MAPPING: [u8; 16] = [
    5, 6, 7, 8, // top row
    16, 1, 2, 9, // indices 5,6 are center-top
    15, 3, 4, 10, // indices 9,10 are center-bottom
    14, 13, 12, 11, // bottom row
];

/// Map an interior grid index to its display ID.
///
/// `index` outside 0..16 is a caller bug, not a runtime condition.
pub fn display_id(index: usize) -> u8 {
    debug_assert!(index < 16, "grid index {index} out of range");
    DISPLAY_MAPPING[index]
}

/// Whether `location` is a valid display ID (interior or wild).
pub fn is_valid_location(location: u8) -> bool {
    (MIN_LOCATION..=MAX_LOCATION).contains(&location)
}

/// Wild pitches are anything landing in a border zone.
pub fn is_wild(location: u8) -> bool {
    location > 16
}

/// Display IDs counted as a hit for each intended target.
pub fn target_zone_ids(target: TargetZone) -> &'static [u8] {
    match target {
        TargetZone::Strike => &[1, 2, 3, 4],
        TargetZone::Left => &[5, 14, 15, 16],
        TargetZone::Right => &[8, 9, 10, 11],
        TargetZone::Up => &[5, 6, 7, 8],
        TargetZone::Below => &[11, 12, 13, 14],
    }
}

/// Zone set for a free-form target label, empty when the label is not one
/// of the known targets (historical documents may carry anything).
pub fn zone_ids_for_label(label: &str) -> &'static [u8] {
    match TargetZone::parse(label) {
        Some(target) => target_zone_ids(target),
        None => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interior_mapping_is_a_bijection_onto_1_to_16() {
        let mut seen = [false; 16];
        for index in 0..16 {
            let id = display_id(index);
            assert!((1..=16).contains(&id), "index {index} mapped to {id}");
            assert!(!seen[(id - 1) as usize], "display ID {id} produced twice");
            seen[(id - 1) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn center_cells_get_ids_1_to_4() {
        assert_eq!(display_id(5), 1);
        assert_eq!(display_id(6), 2);
        assert_eq!(display_id(9), 3);
        assert_eq!(display_id(10), 4);
    }

    #[test]
    fn wild_zones_are_only_the_border_ids() {
        for index in 0..16 {
            assert!(!is_wild(display_id(index)));
        }
        for id in [WILD_HIGH, WILD_LOW, WILD_LEFT, WILD_RIGHT] {
            assert!(is_wild(id));
            assert!(is_valid_location(id));
        }
        assert!(!is_valid_location(0));
        assert!(!is_valid_location(21));
    }

    #[test]
    fn target_zone_table_matches_grid_geometry() {
        assert_eq!(target_zone_ids(TargetZone::Strike), &[1, 2, 3, 4]);
        assert_eq!(target_zone_ids(TargetZone::Left), &[5, 14, 15, 16]);
        assert_eq!(target_zone_ids(TargetZone::Right), &[8, 9, 10, 11]);
        assert_eq!(target_zone_ids(TargetZone::Up), &[5, 6, 7, 8]);
        assert_eq!(target_zone_ids(TargetZone::Below), &[11, 12, 13, 14]);
    }

    #[test]
    fn unknown_target_label_has_no_zones() {
        assert!(zone_ids_for_label("Variable").is_empty());
        assert!(zone_ids_for_label("").is_empty());
        assert_eq!(zone_ids_for_label("Strike"), &[1, 2, 3, 4]);
    }
}
