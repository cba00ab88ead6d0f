//! Keyed in-memory stores behind the service facade.
//!
//! Each store owns its records outright: callers go through the operation
//! API and get back owned snapshots, never references into store state. All
//! mutation happens inside a single write-lock critical section, so a
//! returned record is always internally consistent and concurrent updates
//! to one identifier serialize in invocation order.

pub mod notes;
pub mod patients;
pub mod profile;
pub mod schedule;
