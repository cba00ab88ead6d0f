//! Admitted-patient record store.
//!
//! The store holds records in admission (insertion) order and is the only
//! writer of the derived fields: every vitals update re-runs the severity
//! engine over the complete post-merge reading set inside the write-lock
//! critical section, so `severity_score` and `condition` can never drift
//! from the vitals they describe.
//!
//! Records enter the store at construction time, seeded by the admission
//! workflow of the surrounding application. There is no insert or delete
//! operation on the running store.

use crate::error::{ServiceError, ServiceResult};
use crate::patient::{AdmittedPatient, ClinicalInfoPatch, PatientFilter, VitalsPatch};
use crate::severity::{derive_severity, Condition};
use chrono::Utc;
use std::collections::HashSet;
use tokio::sync::RwLock;

/// Keyed collection of admitted-patient records.
#[derive(Debug)]
pub struct PatientStore {
    records: RwLock<Vec<AdmittedPatient>>,
}

impl PatientStore {
    /// Creates a store from seed records.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::DuplicatePatientId` if two seed records share
    /// a `patient_id`. Identifier uniqueness must hold for the store's whole
    /// lifetime, and construction is the only point records enter.
    pub fn new(seed: Vec<AdmittedPatient>) -> ServiceResult<Self> {
        let mut seen = HashSet::new();
        for record in &seed {
            if !seen.insert(record.patient_id) {
                return Err(ServiceError::DuplicatePatientId(record.patient_id));
            }
        }

        Ok(Self {
            records: RwLock::new(seed),
        })
    }

    /// Returns all records assigned to `doctor`, matched exactly
    /// (case-sensitive), in insertion order.
    pub async fn list_by_doctor(&self, doctor: &str) -> Vec<AdmittedPatient> {
        let records = self.records.read().await;
        records
            .iter()
            .filter(|p| p.doctor == doctor)
            .cloned()
            .collect()
    }

    /// Returns the doctor's records additionally narrowed by `filter`.
    pub async fn list_by_doctor_filtered(
        &self,
        doctor: &str,
        filter: &PatientFilter,
    ) -> Vec<AdmittedPatient> {
        let records = self.records.read().await;
        records
            .iter()
            .filter(|p| p.doctor == doctor && filter.matches(p))
            .cloned()
            .collect()
    }

    /// Returns a snapshot of one record by identifier.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::PatientNotFound` if no record has that id.
    pub async fn get_by_id(&self, patient_id: i64) -> ServiceResult<AdmittedPatient> {
        let records = self.records.read().await;
        records
            .iter()
            .find(|p| p.patient_id == patient_id)
            .cloned()
            .ok_or(ServiceError::PatientNotFound(patient_id))
    }

    /// Merges new vital-sign readings into a record and re-derives severity.
    ///
    /// Only the readings supplied in `patch` change; systolic and diastolic
    /// merge independently. The severity score and condition label are then
    /// recomputed from the complete post-merge vitals - not just the changed
    /// fields - and `measured_time`/`updated_at` are refreshed. The whole
    /// read-modify-write runs under the write lock, so concurrent updates to
    /// one patient serialize with no interleaved merges.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for non-finite or negative readings (checked
    /// before any state is touched) and `PatientNotFound` for an unknown id.
    pub async fn update_vitals(
        &self,
        patient_id: i64,
        patch: &VitalsPatch,
    ) -> ServiceResult<AdmittedPatient> {
        patch.validate()?;

        let mut records = self.records.write().await;
        let patient = records
            .iter_mut()
            .find(|p| p.patient_id == patient_id)
            .ok_or_else(|| {
                tracing::warn!(patient_id, "vitals update for unknown patient");
                ServiceError::PatientNotFound(patient_id)
            })?;

        patch.apply(&mut patient.vitals);
        patient.severity_score = derive_severity(&patient.vitals);
        patient.condition = Condition::from_score(patient.severity_score);

        let now = Utc::now();
        patient.measured_time = now;
        patient.updated_at = now;

        tracing::debug!(
            patient_id,
            score = patient.severity_score.get(),
            condition = %patient.condition,
            "vitals updated"
        );

        Ok(patient.clone())
    }

    /// Merges free-text clinical fields into a record.
    ///
    /// Severity is not recomputed and `measured_time` is not touched; only
    /// `updated_at` is refreshed.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for an empty `bed_id` and `PatientNotFound`
    /// for an unknown id.
    pub async fn update_clinical_info(
        &self,
        patient_id: i64,
        patch: &ClinicalInfoPatch,
    ) -> ServiceResult<AdmittedPatient> {
        patch.validate()?;

        let mut records = self.records.write().await;
        let patient = records
            .iter_mut()
            .find(|p| p.patient_id == patient_id)
            .ok_or_else(|| {
                tracing::warn!(patient_id, "clinical-info update for unknown patient");
                ServiceError::PatientNotFound(patient_id)
            })?;

        patch.apply(patient);
        patient.updated_at = Utc::now();

        tracing::debug!(patient_id, "clinical info updated");

        Ok(patient.clone())
    }
}
