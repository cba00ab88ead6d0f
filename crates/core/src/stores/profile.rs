//! The logged-in doctor's profile.
//!
//! A single record, merged field-by-field on update. The store applies no
//! validation of its own - field invariants live in the types (the email
//! field cannot hold a malformed address in the first place).

use rounds_types::EmailAddress;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

/// The doctor's profile as shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoctorInfo {
    pub full_name: String,
    pub specialty: String,
    pub email: EmailAddress,
    pub phone: String,
    pub department: String,
}

/// Field-level partial update for the profile. `None` leaves a field as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfilePatch {
    pub full_name: Option<String>,
    pub specialty: Option<String>,
    pub email: Option<EmailAddress>,
    pub phone: Option<String>,
    pub department: Option<String>,
}

/// Holder for the single profile record.
#[derive(Debug)]
pub struct ProfileStore {
    profile: RwLock<DoctorInfo>,
}

impl ProfileStore {
    pub fn new(profile: DoctorInfo) -> Self {
        Self {
            profile: RwLock::new(profile),
        }
    }

    /// Returns a snapshot of the profile.
    pub async fn get(&self) -> DoctorInfo {
        self.profile.read().await.clone()
    }

    /// Merges the supplied fields and returns the updated snapshot.
    pub async fn update(&self, patch: &ProfilePatch) -> DoctorInfo {
        let mut profile = self.profile.write().await;

        if let Some(full_name) = &patch.full_name {
            profile.full_name = full_name.clone();
        }
        if let Some(specialty) = &patch.specialty {
            profile.specialty = specialty.clone();
        }
        if let Some(email) = &patch.email {
            profile.email = email.clone();
        }
        if let Some(phone) = &patch.phone {
            profile.phone = phone.clone();
        }
        if let Some(department) = &patch.department {
            profile.department = department.clone();
        }

        tracing::debug!("doctor profile updated");

        profile.clone()
    }
}
