//! # Rounds Core
//!
//! In-process service layer for a single doctor's dashboard.
//!
//! This crate contains the domain logic and nothing else:
//! - Vitals-to-severity derivation ([`severity`])
//! - Admitted-patient records with invariant-preserving partial updates
//!   ([`patient`], [`stores::patients`])
//! - Schedule, clinical-note, and profile collaborator stores ([`stores`])
//! - The [`DashboardService`] facade bundling the stores behind one call
//!   surface
//!
//! **No API concerns**: authentication, HTTP/gRPC transport, persistence,
//! and rendering belong to the surrounding application. Callers receive
//! owned snapshots from every operation and never hold references into
//! store state.

pub mod config;
pub mod error;
pub mod patient;
pub mod service;
pub mod severity;
pub mod stores;

pub use config::CoreConfig;
pub use error::{ServiceError, ServiceResult};
pub use patient::{
    AdmittedPatient, BloodPressure, ClinicalInfoPatch, PatientFilter, VitalSigns, VitalsPatch,
};
pub use service::{DashboardService, SeedData};
pub use severity::{derive_severity, Condition};
pub use stores::notes::{ClinicalNote, NewClinicalNote, NoteStore};
pub use stores::patients::PatientStore;
pub use stores::profile::{DoctorInfo, ProfilePatch, ProfileStore};
pub use stores::schedule::{ScheduleSlot, ScheduleStore, SlotStatus};
