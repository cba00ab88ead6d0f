//! Error taxonomy for the dashboard service layer.
//!
//! Nothing here is retried internally; every failure propagates unchanged to
//! the caller, which owns user-facing presentation. Updates validate their
//! input before touching any store state, so a returned error always means
//! the store is exactly as it was.

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("no admitted patient with id {0}")]
    PatientNotFound(i64),
    #[error("no schedule slot with id {0}")]
    SlotNotFound(i64),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("duplicate patient id {0} in seed records")]
    DuplicatePatientId(i64),
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
