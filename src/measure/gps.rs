//! Field distance measurement from GPS fixes.
//!
//! Coaches mark home plate, walk to a spot, and read the distance in feet.
//! Consumer GPS jitters by several meters, so the readout position is an
//! accuracy-weighted average over the most recent fixes rather than the
//! raw latest fix.

use serde::{Deserialize, Serialize};

/// Earth radius in feet, matching the field-measurement display units.
const EARTH_RADIUS_FT: f64 = 20_902_231.0;

const METERS_TO_FEET: f64 = 3.28084;

/// How many recent fixes the averager keeps.
const DEFAULT_WINDOW: usize = 8;

/// One geolocation reading. `accuracy_m` is the reported 68%-confidence
/// radius in meters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GeoFix {
    pub lat: f64,
    pub lon: f64,
    pub accuracy_m: f64,
}

impl GeoFix {
    pub fn accuracy_ft(&self) -> f64 {
        self.accuracy_m * METERS_TO_FEET
    }
}

/// Great-circle distance between two fixes in feet (haversine).
pub fn distance_ft(a: GeoFix, b: GeoFix) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lon = (b.lon - a.lon).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_FT * c
}

/// Rolling accuracy-weighted mean over recent fixes. Fixes with a tighter
/// accuracy radius dominate (weight 1/accuracy^2), so one bad reading
/// while standing still barely moves the readout.
#[derive(Debug, Clone)]
pub struct PositionAverager {
    window: usize,
    fixes: Vec<GeoFix>,
}

impl Default for PositionAverager {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW)
    }
}

impl PositionAverager {
    pub fn new(window: usize) -> Self {
        Self {
            window: window.max(1),
            fixes: Vec::new(),
        }
    }

    pub fn push(&mut self, fix: GeoFix) {
        self.fixes.push(fix);
        if self.fixes.len() > self.window {
            self.fixes.remove(0);
        }
    }

    pub fn clear(&mut self) {
        self.fixes.clear();
    }

    /// Current averaged position, or None before the first fix. The
    /// returned accuracy is the weighted mean of the contributing radii.
    pub fn position(&self) -> Option<GeoFix> {
        if self.fixes.is_empty() {
            return None;
        }

        let mut lat_sum = 0.0;
        let mut lon_sum = 0.0;
        let mut accuracy_sum = 0.0;
        let mut weight_sum = 0.0;

        for fix in &self.fixes {
            // Clamp so a (nonsensical) zero-accuracy fix can't produce an
            // infinite weight.
            let radius = fix.accuracy_m.max(0.1);
            let weight = 1.0 / (radius * radius);
            lat_sum += fix.lat * weight;
            lon_sum += fix.lon * weight;
            accuracy_sum += fix.accuracy_m * weight;
            weight_sum += weight;
        }

        Some(GeoFix {
            lat: lat_sum / weight_sum,
            lon: lon_sum / weight_sum,
            accuracy_m: accuracy_sum / weight_sum,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fix(lat: f64, lon: f64, accuracy_m: f64) -> GeoFix {
        GeoFix {
            lat,
            lon,
            accuracy_m,
        }
    }

    #[test]
    fn zero_distance_between_identical_fixes() {
        let a = fix(40.0, -75.0, 5.0);
        assert_eq!(distance_ft(a, a), 0.0);
    }

    #[test]
    fn one_degree_of_latitude_is_about_364k_feet() {
        let a = fix(40.0, -75.0, 5.0);
        let b = fix(41.0, -75.0, 5.0);
        let d = distance_ft(a, b);
        // 1 degree latitude ~ 69.09 miles ~ 364,800 ft on this sphere.
        assert!((d - 364_800.0).abs() < 1_000.0, "got {d}");
    }

    #[test]
    fn short_baseline_matches_expected_feet() {
        // ~0.0003 degrees latitude is roughly 109 ft.
        let a = fix(40.0, -75.0, 5.0);
        let b = fix(40.0003, -75.0, 5.0);
        let d = distance_ft(a, b);
        assert!((d - 109.4).abs() < 1.0, "got {d}");
    }

    #[test]
    fn averager_weights_accurate_fixes_heavier() {
        let mut avg = PositionAverager::new(4);
        assert!(avg.position().is_none());

        avg.push(fix(40.0, -75.0, 2.0));
        avg.push(fix(40.001, -75.0, 50.0)); // coarse outlier

        let pos = avg.position().unwrap();
        // Weighted mean sits far closer to the tight fix.
        assert!((pos.lat - 40.0).abs() < 0.0001, "lat {}", pos.lat);
    }

    #[test]
    fn averager_window_drops_oldest() {
        let mut avg = PositionAverager::new(2);
        avg.push(fix(10.0, 10.0, 5.0));
        avg.push(fix(20.0, 20.0, 5.0));
        avg.push(fix(30.0, 30.0, 5.0));

        let pos = avg.position().unwrap();
        assert!((pos.lat - 25.0).abs() < 1e-9);

        avg.clear();
        assert!(avg.position().is_none());
    }

    #[test]
    fn accuracy_converts_to_feet_for_display() {
        let f = fix(0.0, 0.0, 10.0);
        assert!((f.accuracy_ft() - 32.8084).abs() < 1e-6);
    }
}
