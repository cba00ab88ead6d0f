//! The dashboard-facing service facade.
//!
//! [`DashboardService`] bundles the four stores behind one constructor and
//! re-exposes their operations as a single call surface. The facade also
//! owns the artificial-latency hook: when configured, each operation awaits
//! the configured pause before delegating, standing in for the fetch
//! latency a real backend would add. The stores themselves never sleep.

use crate::config::CoreConfig;
use crate::error::ServiceResult;
use crate::patient::{AdmittedPatient, ClinicalInfoPatch, PatientFilter, VitalsPatch};
use crate::stores::notes::{ClinicalNote, NewClinicalNote, NoteStore};
use crate::stores::patients::PatientStore;
use crate::stores::profile::{DoctorInfo, ProfilePatch, ProfileStore};
use crate::stores::schedule::{ScheduleSlot, ScheduleStore, SlotStatus};
use std::sync::Arc;

/// Initial store contents, supplied by the surrounding application's
/// admission workflow. What goes in the seed is not this crate's concern;
/// that it is internally consistent (unique patient ids) is.
#[derive(Debug)]
pub struct SeedData {
    pub patients: Vec<AdmittedPatient>,
    pub schedule: Vec<ScheduleSlot>,
    pub notes: Vec<ClinicalNote>,
    pub profile: DoctorInfo,
}

/// In-process service layer for one doctor's dashboard.
#[derive(Debug)]
pub struct DashboardService {
    cfg: Arc<CoreConfig>,
    patients: PatientStore,
    schedule: ScheduleStore,
    notes: NoteStore,
    profile: ProfileStore,
}

impl DashboardService {
    /// Creates a service over fresh stores seeded from `seed`.
    ///
    /// Independent services own independent stores - there is no process-
    /// wide state, so tests can build as many isolated instances as they
    /// need.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::DuplicatePatientId` if the patient seed
    /// contains a repeated identifier.
    pub fn new(cfg: Arc<CoreConfig>, seed: SeedData) -> ServiceResult<Self> {
        Ok(Self {
            cfg,
            patients: PatientStore::new(seed.patients)?,
            schedule: ScheduleStore::new(seed.schedule),
            notes: NoteStore::new(seed.notes),
            profile: ProfileStore::new(seed.profile),
        })
    }

    async fn pause(&self) {
        if let Some(latency) = self.cfg.artificial_latency() {
            tokio::time::sleep(latency).await;
        }
    }

    /// All patients assigned to `doctor`, in admission order.
    pub async fn doctor_patients(&self, doctor: &str) -> Vec<AdmittedPatient> {
        self.pause().await;
        self.patients.list_by_doctor(doctor).await
    }

    /// The doctor's patients narrowed by condition and severity bounds.
    pub async fn doctor_patients_filtered(
        &self,
        doctor: &str,
        filter: &PatientFilter,
    ) -> Vec<AdmittedPatient> {
        self.pause().await;
        self.patients.list_by_doctor_filtered(doctor, filter).await
    }

    /// One patient by identifier.
    pub async fn patient_by_id(&self, patient_id: i64) -> ServiceResult<AdmittedPatient> {
        self.pause().await;
        self.patients.get_by_id(patient_id).await
    }

    /// Merges new vitals and re-derives severity. See
    /// [`PatientStore::update_vitals`].
    pub async fn update_patient_vitals(
        &self,
        patient_id: i64,
        patch: &VitalsPatch,
    ) -> ServiceResult<AdmittedPatient> {
        self.pause().await;
        self.patients.update_vitals(patient_id, patch).await
    }

    /// Merges free-text clinical fields. See
    /// [`PatientStore::update_clinical_info`].
    pub async fn update_patient_clinical_info(
        &self,
        patient_id: i64,
        patch: &ClinicalInfoPatch,
    ) -> ServiceResult<AdmittedPatient> {
        self.pause().await;
        self.patients.update_clinical_info(patient_id, patch).await
    }

    /// Today's schedule in insertion order.
    pub async fn schedule(&self) -> Vec<ScheduleSlot> {
        self.pause().await;
        self.schedule.list().await
    }

    /// Sets a slot's status.
    pub async fn update_schedule_status(
        &self,
        slot_id: i64,
        status: SlotStatus,
    ) -> ServiceResult<ScheduleSlot> {
        self.pause().await;
        self.schedule.update_status(slot_id, status).await
    }

    /// All notes, most recently created first.
    pub async fn clinical_notes(&self) -> Vec<ClinicalNote> {
        self.pause().await;
        self.notes.list_recent_first().await
    }

    /// Adds a note, assigning its id and creation timestamp.
    pub async fn add_clinical_note(&self, note: NewClinicalNote) -> ServiceResult<ClinicalNote> {
        self.pause().await;
        self.notes.add(note).await
    }

    /// The logged-in doctor's profile.
    pub async fn doctor_profile(&self) -> DoctorInfo {
        self.pause().await;
        self.profile.get().await
    }

    /// Merges profile fields and returns the updated profile.
    pub async fn update_doctor_profile(&self, patch: &ProfilePatch) -> DoctorInfo {
        self.pause().await;
        self.profile.update(patch).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ServiceError;
    use crate::patient::VitalSigns;
    use crate::severity::{derive_severity, Condition};
    use chrono::{NaiveDate, Utc};
    use rounds_types::EmailAddress;
    use std::time::{Duration, Instant};

    fn admitted(patient_id: i64, doctor: &str) -> AdmittedPatient {
        let vitals = VitalSigns::default();
        let score = derive_severity(&vitals);
        let now = Utc::now();

        AdmittedPatient {
            patient_id,
            patient_name: format!("Patient {patient_id}"),
            age: 61,
            gender: "male".into(),
            bed_id: format!("W4-{patient_id:02}"),
            admission_date: NaiveDate::from_ymd_opt(2025, 11, 1).expect("valid date"),
            vitals,
            measured_time: now,
            presenting_ailment: None,
            medical_history: None,
            clinical_notes: None,
            lab_results: None,
            severity_score: score,
            condition: Condition::from_score(score),
            doctor: doctor.into(),
            created_at: now,
            updated_at: now,
        }
    }

    fn seed() -> SeedData {
        SeedData {
            patients: vec![admitted(1, "Dr. Okafor"), admitted(2, "Dr. Lindqvist")],
            schedule: vec![ScheduleSlot {
                id: 1,
                time: "09:00".into(),
                patient_name: "Patient 1".into(),
                purpose: "ward round".into(),
                status: SlotStatus::Upcoming,
            }],
            notes: vec![],
            profile: DoctorInfo {
                full_name: "Dr. Adaeze Okafor".into(),
                specialty: "Internal Medicine".into(),
                email: EmailAddress::parse("a.okafor@stmarys.nhs.uk").expect("valid email"),
                phone: "+44 20 7946 0721".into(),
                department: "Acute Medical Unit".into(),
            },
        }
    }

    fn service() -> DashboardService {
        DashboardService::new(Arc::new(CoreConfig::default()), seed())
            .expect("seed should have unique ids")
    }

    #[tokio::test]
    async fn facade_wires_all_four_stores() {
        let service = service();

        assert_eq!(service.doctor_patients("Dr. Okafor").await.len(), 1);
        assert_eq!(service.schedule().await.len(), 1);
        assert!(service.clinical_notes().await.is_empty());
        assert_eq!(service.doctor_profile().await.full_name, "Dr. Adaeze Okafor");
    }

    #[tokio::test]
    async fn facade_propagates_store_errors_unchanged() {
        let service = service();

        let err = service.patient_by_id(99).await.expect_err("expected miss");
        assert!(matches!(err, ServiceError::PatientNotFound(99)));

        let err = service
            .update_schedule_status(42, SlotStatus::Completed)
            .await
            .expect_err("expected miss");
        assert!(matches!(err, ServiceError::SlotNotFound(42)));
    }

    #[tokio::test]
    async fn facade_runs_the_deterioration_scenario_end_to_end() {
        let service = service();

        let serious = service
            .update_patient_vitals(
                1,
                &VitalsPatch {
                    spo2: Some(85.0),
                    ..VitalsPatch::default()
                },
            )
            .await
            .expect("spo2 update");
        assert_eq!(serious.condition, Condition::Serious);

        let critical = service
            .update_patient_vitals(
                1,
                &VitalsPatch {
                    resp_rate: Some(30.0),
                    ..VitalsPatch::default()
                },
            )
            .await
            .expect("resp rate update");
        assert_eq!(critical.severity_score.get(), 8);
        assert_eq!(critical.condition, Condition::Critical);

        let note = service
            .add_clinical_note(NewClinicalNote {
                patient_name: critical.patient_name.clone(),
                content: "escalated to ICU outreach".into(),
            })
            .await
            .expect("note should be accepted");
        assert_eq!(service.clinical_notes().await.first(), Some(&note));
    }

    #[tokio::test(start_paused = true)]
    async fn latency_hook_pauses_before_delegating() {
        let cfg = CoreConfig::new(Some(Duration::from_millis(200))).expect("config should build");
        let service =
            DashboardService::new(Arc::new(cfg), seed()).expect("seed should have unique ids");

        // With the clock paused, the sleep only completes through tokio's
        // auto-advance; asserting on the virtual clock keeps this exact.
        let start = tokio::time::Instant::now();
        let _ = service.doctor_patients("Dr. Okafor").await;
        assert_eq!(start.elapsed(), Duration::from_millis(200));
    }

    #[tokio::test]
    async fn no_latency_configured_means_no_measurable_pause() {
        let service = service();

        let start = Instant::now();
        let _ = service.doctor_patients("Dr. Okafor").await;
        assert!(start.elapsed() < Duration::from_millis(50));
    }
}
