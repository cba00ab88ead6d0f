//! Admitted-patient record types and partial-update patches.
//!
//! An [`AdmittedPatient`] is the full clinical/administrative record for one
//! hospitalization. Records are only ever mutated through the patient store,
//! which applies the patch types defined here; a patch distinguishes "field
//! not supplied" from "field explicitly cleared" with an explicit option per
//! field, rather than leaning on whatever absent-key semantics a caller's
//! serialization happens to have.

use crate::error::{ServiceError, ServiceResult};
use crate::severity::Condition;
use chrono::{DateTime, NaiveDate, Utc};
use rounds_types::Severity;
use serde::{Deserialize, Deserializer, Serialize};

/// Systolic/diastolic pair, each side independently optional.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BloodPressure {
    pub systolic: Option<f64>,
    pub diastolic: Option<f64>,
}

/// The current set of vital-sign readings for a patient.
///
/// `None` means "not yet measured". The severity engine additionally treats
/// a stored `0.0` as absent when scoring.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct VitalSigns {
    pub heart_rate: Option<f64>,
    pub spo2: Option<f64>,
    pub resp_rate: Option<f64>,
    pub temperature: Option<f64>,
    pub blood_pressure: BloodPressure,
}

/// One hospitalization record.
///
/// `severity_score` and `condition` are derived fields: they are always the
/// severity engine's output for the current vitals and are never written
/// independently of a vitals update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdmittedPatient {
    pub patient_id: i64,
    pub patient_name: String,
    pub age: u8,
    pub gender: String,
    pub bed_id: String,
    pub admission_date: NaiveDate,
    pub vitals: VitalSigns,
    pub measured_time: DateTime<Utc>,
    pub presenting_ailment: Option<String>,
    pub medical_history: Option<String>,
    pub clinical_notes: Option<String>,
    pub lab_results: Option<String>,
    pub severity_score: Severity,
    pub condition: Condition,
    pub doctor: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Field-level partial update for vital signs.
///
/// `None` leaves the stored reading untouched. Vitals cannot be cleared
/// through a patch - a measurement, once taken, stands until replaced.
/// Systolic and diastolic merge independently, not as an atomic pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VitalsPatch {
    pub heart_rate: Option<f64>,
    pub spo2: Option<f64>,
    pub resp_rate: Option<f64>,
    pub temperature: Option<f64>,
    pub bp_systolic: Option<f64>,
    pub bp_diastolic: Option<f64>,
}

impl VitalsPatch {
    /// Rejects malformed readings before any merge happens.
    ///
    /// Every supplied value must be a finite, non-negative number; NaN and
    /// infinities would otherwise flow straight into threshold comparisons.
    pub(crate) fn validate(&self) -> ServiceResult<()> {
        let readings = [
            ("heart_rate", self.heart_rate),
            ("spo2", self.spo2),
            ("resp_rate", self.resp_rate),
            ("temperature", self.temperature),
            ("bp_systolic", self.bp_systolic),
            ("bp_diastolic", self.bp_diastolic),
        ];

        for (name, value) in readings {
            if let Some(v) = value {
                if !v.is_finite() {
                    return Err(ServiceError::InvalidInput(format!(
                        "{name} must be a finite number"
                    )));
                }
                if v < 0.0 {
                    return Err(ServiceError::InvalidInput(format!(
                        "{name} must not be negative"
                    )));
                }
            }
        }

        Ok(())
    }

    /// Merges the supplied readings into `vitals`, leaving the rest as-is.
    pub(crate) fn apply(&self, vitals: &mut VitalSigns) {
        if let Some(hr) = self.heart_rate {
            vitals.heart_rate = Some(hr);
        }
        if let Some(spo2) = self.spo2 {
            vitals.spo2 = Some(spo2);
        }
        if let Some(rr) = self.resp_rate {
            vitals.resp_rate = Some(rr);
        }
        if let Some(temp) = self.temperature {
            vitals.temperature = Some(temp);
        }
        if let Some(systolic) = self.bp_systolic {
            vitals.blood_pressure.systolic = Some(systolic);
        }
        if let Some(diastolic) = self.bp_diastolic {
            vitals.blood_pressure.diastolic = Some(diastolic);
        }
    }
}

/// Deserializes `Option<Option<T>>` so that an explicit `null` survives as
/// `Some(None)` while a missing key stays `None` (via `#[serde(default)]`).
fn explicit_null<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Partial update for the free-text clinical fields of a record.
///
/// The free-text fields are doubly optional: the outer level is the
/// presence flag (was the field supplied at all?), the inner level is the
/// stored value (`Some(None)` explicitly clears the field). `bed_id` is
/// plain-optional - a patient always has a bed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClinicalInfoPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bed_id: Option<String>,
    #[serde(deserialize_with = "explicit_null", skip_serializing_if = "Option::is_none")]
    pub presenting_ailment: Option<Option<String>>,
    #[serde(deserialize_with = "explicit_null", skip_serializing_if = "Option::is_none")]
    pub medical_history: Option<Option<String>>,
    #[serde(deserialize_with = "explicit_null", skip_serializing_if = "Option::is_none")]
    pub clinical_notes: Option<Option<String>>,
    #[serde(deserialize_with = "explicit_null", skip_serializing_if = "Option::is_none")]
    pub lab_results: Option<Option<String>>,
}

impl ClinicalInfoPatch {
    /// Rejects malformed fields before any merge happens.
    pub(crate) fn validate(&self) -> ServiceResult<()> {
        if let Some(bed_id) = &self.bed_id {
            rounds_types::NonEmptyText::new(bed_id)
                .map_err(|_| ServiceError::InvalidInput("bed_id must not be empty".into()))?;
        }
        Ok(())
    }

    /// Merges the supplied fields into `patient`. Never touches vitals,
    /// derived fields, or demographics.
    pub(crate) fn apply(&self, patient: &mut AdmittedPatient) {
        if let Some(bed_id) = &self.bed_id {
            patient.bed_id = bed_id.clone();
        }
        if let Some(ailment) = &self.presenting_ailment {
            patient.presenting_ailment = ailment.clone();
        }
        if let Some(history) = &self.medical_history {
            patient.medical_history = history.clone();
        }
        if let Some(notes) = &self.clinical_notes {
            patient.clinical_notes = notes.clone();
        }
        if let Some(labs) = &self.lab_results {
            patient.lab_results = labs.clone();
        }
    }
}

/// Optional filters for the doctor's patient list.
///
/// Filters compose with AND semantics; an absent filter is a no-op. The
/// condition label matches case-insensitively, severity bounds are
/// inclusive.
#[derive(Debug, Clone, Default)]
pub struct PatientFilter {
    pub condition: Option<String>,
    pub min_severity: Option<Severity>,
    pub max_severity: Option<Severity>,
}

impl PatientFilter {
    pub(crate) fn matches(&self, patient: &AdmittedPatient) -> bool {
        if let Some(condition) = &self.condition {
            if !patient.condition.as_str().eq_ignore_ascii_case(condition) {
                return false;
            }
        }
        if let Some(min) = self.min_severity {
            if patient.severity_score < min {
                return false;
            }
        }
        if let Some(max) = self.max_severity {
            if patient.severity_score > max {
                return false;
            }
        }
        true
    }
}
