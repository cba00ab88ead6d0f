//! Doctor's daily schedule.
//!
//! Slots are plain keyed records; the only mutation is flipping a slot's
//! status as the day progresses.

use crate::error::{ServiceError, ServiceResult};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

/// Lifecycle state of a schedule slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotStatus {
    Upcoming,
    InProgress,
    Completed,
    Cancelled,
}

impl std::fmt::Display for SlotStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            SlotStatus::Upcoming => "upcoming",
            SlotStatus::InProgress => "in_progress",
            SlotStatus::Completed => "completed",
            SlotStatus::Cancelled => "cancelled",
        };
        f.write_str(label)
    }
}

/// One appointment or ward commitment in the doctor's day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleSlot {
    pub id: i64,
    pub time: String,
    pub patient_name: String,
    pub purpose: String,
    pub status: SlotStatus,
}

/// Keyed collection of schedule slots.
#[derive(Debug)]
pub struct ScheduleStore {
    slots: RwLock<Vec<ScheduleSlot>>,
}

impl ScheduleStore {
    /// Creates a store from seed slots.
    pub fn new(seed: Vec<ScheduleSlot>) -> Self {
        Self {
            slots: RwLock::new(seed),
        }
    }

    /// Returns all slots in insertion order.
    pub async fn list(&self) -> Vec<ScheduleSlot> {
        self.slots.read().await.clone()
    }

    /// Sets a slot's status and returns the updated snapshot.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::SlotNotFound` if no slot has that id.
    pub async fn update_status(
        &self,
        slot_id: i64,
        status: SlotStatus,
    ) -> ServiceResult<ScheduleSlot> {
        let mut slots = self.slots.write().await;
        let slot = slots.iter_mut().find(|s| s.id == slot_id).ok_or_else(|| {
            tracing::warn!(slot_id, "status update for unknown schedule slot");
            ServiceError::SlotNotFound(slot_id)
        })?;

        slot.status = status;
        tracing::debug!(slot_id, status = %slot.status, "schedule slot updated");

        Ok(slot.clone())
    }
}
