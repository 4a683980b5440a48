//! The Ruuvi indoor air quality score (IAQS).
//!
//! CO2 and PM2.5 readings are clamped to their scoring ranges and rescaled to
//! 0–100, then the score is 100 minus the Euclidean distance of that point from
//! the ideal (clean) corner. Two moderately elevated pollutants therefore score
//! worse than either alone, but not as badly as their sum would suggest.

use num_traits::Float;

use crate::formats::round_ties_even;

/// Highest (best) score.
pub const IAQS_MAX: f64 = 100.0;

const CO2_MIN: f64 = 420.0;
const CO2_MAX: f64 = 2300.0;
const CO2_SCALE: f64 = IAQS_MAX / (CO2_MAX - CO2_MIN);

const PM25_MIN: f64 = 0.0;
const PM25_MAX: f64 = 60.0;
const PM25_SCALE: f64 = IAQS_MAX / (PM25_MAX - PM25_MIN);

/// Calculate the air quality score from CO2 (ppm) and PM2.5 (µg/m³).
///
/// Returns `None` if either reading is absent, or PM2.5 is not finite.
pub fn calculate_iaqs(co2_ppm: Option<u16>, pm25_ug_m3: Option<f64>) -> Option<u8> {
    let (co2, pm25) = (f64::from(co2_ppm?), pm25_ug_m3?);
    if !pm25.is_finite() {
        return None;
    }

    let dx = (pm25.clamp(PM25_MIN, PM25_MAX) - PM25_MIN) * PM25_SCALE;
    let dy = (co2.clamp(CO2_MIN, CO2_MAX) - CO2_MIN) * CO2_SCALE;

    let score = (IAQS_MAX - Float::hypot(dx, dy)).clamp(0.0, IAQS_MAX);

    Some(round_ties_even(score) as u8)
}
