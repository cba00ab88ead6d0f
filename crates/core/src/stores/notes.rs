//! Clinical notes written by the doctor.
//!
//! Notes live in the store in insertion order - that order is the source of
//! truth. The newest-first ordering the dashboard wants is applied at read
//! time, never persisted back. New notes are assigned a monotonically
//! increasing id and go to the front of the stored order, so two notes
//! stamped in the same instant still list newest-written first.

use crate::error::{ServiceError, ServiceResult};
use chrono::{DateTime, Utc};
use rounds_types::NonEmptyText;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

/// One free-text note, as stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClinicalNote {
    pub id: i64,
    pub patient_name: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// A note as submitted - the store assigns the id and timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewClinicalNote {
    pub patient_name: String,
    pub content: String,
}

#[derive(Debug)]
struct NoteLog {
    notes: Vec<ClinicalNote>,
    next_id: i64,
}

/// Keyed collection of clinical notes.
#[derive(Debug)]
pub struct NoteStore {
    inner: RwLock<NoteLog>,
}

impl NoteStore {
    /// Creates a store from seed notes.
    ///
    /// The id counter starts one past the largest seeded id, so ids stay
    /// unique and strictly increasing across the store's lifetime.
    pub fn new(seed: Vec<ClinicalNote>) -> Self {
        let next_id = seed.iter().map(|n| n.id).max().unwrap_or(0) + 1;
        Self {
            inner: RwLock::new(NoteLog {
                notes: seed,
                next_id,
            }),
        }
    }

    /// Returns all notes sorted by creation time, most recent first.
    pub async fn list_recent_first(&self) -> Vec<ClinicalNote> {
        let log = self.inner.read().await;
        let mut notes = log.notes.clone();
        // Stable sort: equal timestamps keep stored order, newest-written
        // first.
        notes.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        notes
    }

    /// Adds a note, assigning the next id and the current time.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::InvalidInput` if the content is empty or
    /// whitespace-only.
    pub async fn add(&self, note: NewClinicalNote) -> ServiceResult<ClinicalNote> {
        NonEmptyText::new(&note.content)
            .map_err(|_| ServiceError::InvalidInput("note content must not be empty".into()))?;

        let mut log = self.inner.write().await;
        let stored = ClinicalNote {
            id: log.next_id,
            patient_name: note.patient_name,
            content: note.content,
            created_at: Utc::now(),
        };
        log.next_id += 1;
        log.notes.insert(0, stored.clone());

        tracing::debug!(note_id = stored.id, "clinical note added");

        Ok(stored)
    }
}
