//! Vitals-to-severity derivation.
//!
//! The engine is a pure function over one set of vital-sign readings: it
//! holds no state and touches nothing outside its input. Scoring starts from
//! a base of 3 points, adds a fixed delta for each deranged reading, and
//! caps at the top of the scale. The resulting score maps onto one of four
//! condition labels.
//!
//! A reading of exactly zero is treated as absent, not as a measurement.
//! None of these signals can be zero in a living patient, and upstream data
//! sources have historically used zero interchangeably with "not measured".
//! Callers must not rely on a literal zero triggering a delta.

use crate::patient::VitalSigns;
use rounds_types::Severity;
use serde::{Deserialize, Serialize};

/// Points every patient starts from before any reading is considered.
const BASE_POINTS: u32 = 3;

/// Categorical acuity tier derived from a severity score.
///
/// Variants are ordered from least to most acute, so `Ord` comparisons read
/// naturally (`Condition::Serious < Condition::Critical`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Condition {
    Recovering,
    Stable,
    Serious,
    Critical,
}

impl Condition {
    /// Maps a severity score onto its condition label.
    ///
    /// Thresholds are checked high to low, first match wins: 8 and above is
    /// Critical, 5–7 Serious, 3–4 Stable, below 3 Recovering.
    pub fn from_score(score: Severity) -> Self {
        match score.get() {
            8..=10 => Condition::Critical,
            5..=7 => Condition::Serious,
            3..=4 => Condition::Stable,
            _ => Condition::Recovering,
        }
    }

    /// Returns the label as presented to the dashboard.
    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::Recovering => "Recovering",
            Condition::Stable => "Stable",
            Condition::Serious => "Serious",
            Condition::Critical => "Critical",
        }
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Zero-as-absent filter applied to every reading before scoring.
fn reading(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0)
}

/// Derives a severity score from the complete set of current readings.
///
/// Each delta is independent of the others, with one exception: the two SpO2
/// bands are mutually exclusive - a saturation below 90 scores +3 and the
/// below-94 band is not also applied. Absent readings contribute nothing,
/// so a patient with no measurements at all scores the base 3 ("Stable").
/// That is the intended default for a freshly admitted patient, not an
/// error.
///
/// All threshold comparisons are strict: a heart rate of exactly 120 or 50
/// is in range.
pub fn derive_severity(vitals: &VitalSigns) -> Severity {
    let mut points = BASE_POINTS;

    if let Some(hr) = reading(vitals.heart_rate) {
        if hr > 120.0 || hr < 50.0 {
            points += 2;
        }
    }
    if let Some(spo2) = reading(vitals.spo2) {
        if spo2 < 90.0 {
            points += 3;
        } else if spo2 < 94.0 {
            points += 1;
        }
    }
    if let Some(rr) = reading(vitals.resp_rate) {
        if rr > 25.0 || rr < 10.0 {
            points += 2;
        }
    }
    if let Some(temp) = reading(vitals.temperature) {
        if temp > 39.0 || temp < 35.0 {
            points += 1;
        }
    }
    if let Some(systolic) = reading(vitals.blood_pressure.systolic) {
        if systolic > 180.0 || systolic < 90.0 {
            points += 2;
        }
    }
    if let Some(diastolic) = reading(vitals.blood_pressure.diastolic) {
        if diastolic > 110.0 {
            points += 1;
        }
    }

    Severity::saturating(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patient::BloodPressure;

    fn vitals() -> VitalSigns {
        VitalSigns::default()
    }

    #[test]
    fn all_readings_absent_scores_base_stable() {
        let score = derive_severity(&vitals());
        assert_eq!(score.get(), 3);
        assert_eq!(Condition::from_score(score), Condition::Stable);
    }

    #[test]
    fn zero_readings_are_treated_as_absent() {
        let v = VitalSigns {
            heart_rate: Some(0.0),
            spo2: Some(0.0),
            resp_rate: Some(0.0),
            temperature: Some(0.0),
            blood_pressure: BloodPressure {
                systolic: Some(0.0),
                diastolic: Some(0.0),
            },
        };
        assert_eq!(derive_severity(&v).get(), 3);
    }

    #[test]
    fn heart_rate_thresholds_are_strict() {
        let at_upper = VitalSigns {
            heart_rate: Some(120.0),
            ..vitals()
        };
        let above_upper = VitalSigns {
            heart_rate: Some(121.0),
            ..vitals()
        };
        let at_lower = VitalSigns {
            heart_rate: Some(50.0),
            ..vitals()
        };
        let below_lower = VitalSigns {
            heart_rate: Some(49.0),
            ..vitals()
        };

        assert_eq!(derive_severity(&at_upper).get(), 3);
        assert_eq!(derive_severity(&above_upper).get(), 5);
        assert_eq!(derive_severity(&at_lower).get(), 3);
        assert_eq!(derive_severity(&below_lower).get(), 5);
    }

    #[test]
    fn spo2_bands_are_mutually_exclusive() {
        let low = VitalSigns {
            spo2: Some(85.0),
            ..vitals()
        };
        let borderline = VitalSigns {
            spo2: Some(92.0),
            ..vitals()
        };
        let normal = VitalSigns {
            spo2: Some(97.0),
            ..vitals()
        };

        // Below 90 scores only the +3 band, never +3 and +1 together.
        assert_eq!(derive_severity(&low).get(), 6);
        assert_eq!(derive_severity(&borderline).get(), 4);
        assert_eq!(derive_severity(&normal).get(), 3);
    }

    #[test]
    fn remaining_deltas_are_additive() {
        let v = VitalSigns {
            heart_rate: Some(130.0),    // +2
            spo2: Some(92.0),           // +1
            resp_rate: Some(28.0),      // +2
            temperature: Some(39.5),    // +1
            blood_pressure: BloodPressure {
                systolic: Some(85.0),   // +2
                diastolic: Some(100.0), // in range
            },
        };
        assert_eq!(derive_severity(&v).get(), 3 + 2 + 1 + 2 + 1 + 2);
    }

    #[test]
    fn score_caps_at_scale_maximum() {
        let v = VitalSigns {
            heart_rate: Some(140.0),    // +2
            spo2: Some(82.0),           // +3
            resp_rate: Some(32.0),      // +2
            temperature: Some(40.2),    // +1
            blood_pressure: BloodPressure {
                systolic: Some(200.0),  // +2
                diastolic: Some(120.0), // +1
            },
        };
        // 3 + 11 points of deltas still reads 10.
        let score = derive_severity(&v);
        assert_eq!(score, Severity::MAX);
        assert_eq!(Condition::from_score(score), Condition::Critical);
    }

    #[test]
    fn diastolic_has_no_lower_threshold() {
        let v = VitalSigns {
            blood_pressure: BloodPressure {
                systolic: None,
                diastolic: Some(40.0),
            },
            ..vitals()
        };
        assert_eq!(derive_severity(&v).get(), 3);
    }

    #[test]
    fn condition_labels_follow_score_bands() {
        let cases = [
            (0, Condition::Recovering),
            (2, Condition::Recovering),
            (3, Condition::Stable),
            (4, Condition::Stable),
            (5, Condition::Serious),
            (7, Condition::Serious),
            (8, Condition::Critical),
            (10, Condition::Critical),
        ];
        for (raw, expected) in cases {
            let score = Severity::new(raw).expect("score within scale");
            assert_eq!(Condition::from_score(score), expected, "score {raw}");
        }
    }

    #[test]
    fn condition_renders_dashboard_labels() {
        assert_eq!(Condition::Critical.to_string(), "Critical");
        assert_eq!(Condition::Recovering.as_str(), "Recovering");
    }
}
